// Take a look at the license at the top of the repository in the LICENSE file.

use crate::common::impl_get_set::impl_get_set;

/// How two `CPU part` entries are considered to be the same.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartDedup {
    /// Entries are equal when both the implementer and the part codes match.
    Pair,
    /// Entries are equal when the part codes match, whatever their implementer. The first
    /// implementer seen with a given part code wins.
    PartOnly,
}

/// Used to tune how the processor-identification file is classified.
///
/// The default values keep track of at most two distinct implementers and two distinct parts,
/// which is enough for the big.LITTLE systems found in the wild. Any extra distinct value is
/// ignored.
///
/// ```
/// use arm_cpuinfo::{ClassifyOptions, CpuInfo, PartDedup};
///
/// let options = ClassifyOptions::new()
///     .with_max_implementers(4)
///     .without_max_parts()
///     .with_part_dedup(PartDedup::PartOnly);
/// let info = CpuInfo::from_reader_with_options("".as_bytes(), options);
/// assert_eq!(info.cpu_count(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassifyOptions {
    max_implementers: Option<usize>,
    max_parts: Option<usize>,
    part_dedup: PartDedup,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassifyOptions {
    /// Maximum number of distinct implementers (and parts) kept by default.
    pub const DEFAULT_MAX_DISTINCT: usize = 2;

    /// Creates a new `ClassifyOptions` with the default limits (two implementers, two parts)
    /// and [`PartDedup::Pair`].
    ///
    /// ```
    /// use arm_cpuinfo::{ClassifyOptions, PartDedup};
    ///
    /// let r = ClassifyOptions::new();
    ///
    /// assert_eq!(r.max_implementers(), Some(2));
    /// assert_eq!(r.max_parts(), Some(2));
    /// assert_eq!(r.part_dedup(), PartDedup::Pair);
    /// ```
    pub fn new() -> Self {
        Self {
            max_implementers: Some(Self::DEFAULT_MAX_DISTINCT),
            max_parts: Some(Self::DEFAULT_MAX_DISTINCT),
            part_dedup: PartDedup::Pair,
        }
    }

    /// Creates a new `ClassifyOptions` without any limit on the number of distinct
    /// implementers and parts.
    ///
    /// ```
    /// use arm_cpuinfo::ClassifyOptions;
    ///
    /// let r = ClassifyOptions::unbounded();
    ///
    /// assert_eq!(r.max_implementers(), None);
    /// assert_eq!(r.max_parts(), None);
    /// ```
    pub fn unbounded() -> Self {
        Self {
            max_implementers: None,
            max_parts: None,
            part_dedup: PartDedup::Pair,
        }
    }

    impl_get_set!(
        ClassifyOptions,
        max_implementers,
        with_max_implementers,
        without_max_implementers,
        usize,
        "Implementers seen after this limit is reached are ignored."
    );
    impl_get_set!(
        ClassifyOptions,
        max_parts,
        with_max_parts,
        without_max_parts,
        usize,
        "Parts seen after this limit is reached are ignored."
    );
    impl_get_set!(
        ClassifyOptions,
        part_dedup,
        with_part_dedup,
        without_part_dedup,
        PartDedup
    );
}
