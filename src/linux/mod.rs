// Take a look at the license at the top of the repository in the LICENSE file.

pub(crate) mod cpu;
pub(crate) mod utils;

use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

/// Path of the processor-identification file used when no override is set.
pub const DEFAULT_CPUINFO_PATH: &str = "/proc/cpuinfo";

static CPUINFO_PATH: RwLock<Option<PathBuf>> = RwLock::new(None);

/// Overrides the path of the processor-identification file read by
/// [`CpuInfo::new`][crate::CpuInfo::new] and [`get_hardware`][crate::get_hardware].
///
/// Passing `None` restores [`DEFAULT_CPUINFO_PATH`]. This is process-wide, mostly useful to
/// point the library to a captured file.
///
/// ```
/// use arm_cpuinfo::{cpuinfo_path, set_cpuinfo_path, DEFAULT_CPUINFO_PATH};
///
/// set_cpuinfo_path(Some("/tmp/cpuinfo".into()));
/// assert_eq!(cpuinfo_path().to_str(), Some("/tmp/cpuinfo"));
///
/// set_cpuinfo_path(None);
/// assert_eq!(cpuinfo_path().to_str(), Some(DEFAULT_CPUINFO_PATH));
/// ```
pub fn set_cpuinfo_path(path: Option<PathBuf>) {
    *CPUINFO_PATH.write().unwrap_or_else(PoisonError::into_inner) = path;
}

/// Returns the path of the processor-identification file currently in use.
pub fn cpuinfo_path() -> PathBuf {
    CPUINFO_PATH
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CPUINFO_PATH))
}
