// Take a look at the license at the top of the repository in the LICENSE file.

pub(crate) mod impl_get_set;
pub(crate) mod options;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::linux::cpu::CpuInfoAccumulator;
use crate::linux::utils::for_each_line;
use crate::ClassifyOptions;

/// Size (including the trailing NUL of the C interface) of the vendor field.
pub const CHIP_VENDOR_SIZE: usize = 64;
/// Size (including the trailing NUL of the C interface) of the model field.
pub const CHIP_TYPE_SIZE: usize = 64;
/// Size (including the trailing NUL of the C interface) of the raw hardware field.
pub const HARDWARE_STRING_SIZE: usize = 64;

/// Normalized description of the CPU(s) reported in the processor-identification file.
///
/// All the information is retrieved once, when the value is created. If the source cannot be
/// read, every field keeps its default (empty strings and zeroes): no error is ever returned.
///
/// ```
/// use arm_cpuinfo::CpuInfo;
///
/// let data = "\
/// processor\t: 0
/// BogoMips\t: 50.00
/// CPU implementer\t: 0x41
/// CPU part\t: 0xd03
///
/// processor\t: 1
/// BogoMips\t: 50.00
/// CPU implementer\t: 0x41
/// CPU part\t: 0xd03
/// ";
/// let info = CpuInfo::from_reader(data.as_bytes());
/// assert_eq!(info.vendor(), "ARM");
/// assert_eq!(info.model(), "Cortex-A53");
/// assert_eq!(info.cpu_count(), 2);
/// assert!((info.bogomips() - 100.).abs() < 0.001);
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct CpuInfo {
    pub(crate) vendor: String,
    pub(crate) model: String,
    pub(crate) hardware: String,
    pub(crate) cpu_count: usize,
    pub(crate) bogomips: f64,
    pub(crate) frequency: f64,
}

impl CpuInfo {
    /// Classifies the CPUs described by the file returned by [`cpuinfo_path`][crate::cpuinfo_path]
    /// (`/proc/cpuinfo` unless overridden) with the default [`ClassifyOptions`].
    ///
    /// ```no_run
    /// use arm_cpuinfo::CpuInfo;
    ///
    /// let info = CpuInfo::new();
    /// println!("{} {} x{}", info.vendor(), info.model(), info.cpu_count());
    /// ```
    pub fn new() -> Self {
        Self::new_with_options(ClassifyOptions::new())
    }

    /// Same as [`CpuInfo::new`] but with the given `options`.
    ///
    /// ```no_run
    /// use arm_cpuinfo::{ClassifyOptions, CpuInfo};
    ///
    /// let info = CpuInfo::new_with_options(ClassifyOptions::unbounded());
    /// println!("{}", info.vendor());
    /// ```
    pub fn new_with_options(options: ClassifyOptions) -> Self {
        Self::from_path_with_options(crate::cpuinfo_path(), options)
    }

    /// Classifies the CPUs described by the file at `path`.
    ///
    /// ```no_run
    /// use arm_cpuinfo::CpuInfo;
    ///
    /// let info = CpuInfo::from_path("/proc/cpuinfo");
    /// println!("{}", info.model());
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        Self::from_path_with_options(path, ClassifyOptions::new())
    }

    /// Same as [`CpuInfo::from_path`] but with the given `options`.
    pub fn from_path_with_options<P: AsRef<Path>>(path: P, options: ClassifyOptions) -> Self {
        match File::open(path.as_ref()) {
            Ok(file) => Self::from_reader_with_options(BufReader::new(file), options),
            Err(_e) => {
                cpuinfo_debug!("Cannot open `{}`: {:?}", path.as_ref().display(), _e);
                Self::default()
            }
        }
    }

    /// Classifies the CPUs described by the lines read from `reader`.
    pub fn from_reader<R: BufRead>(reader: R) -> Self {
        Self::from_reader_with_options(reader, ClassifyOptions::new())
    }

    /// Same as [`CpuInfo::from_reader`] but with the given `options`.
    ///
    /// If reading fails midway, the lines read so far are still used.
    ///
    /// ```
    /// use arm_cpuinfo::{ClassifyOptions, CpuInfo};
    ///
    /// let data = "\
    /// CPU implementer : 0x41
    /// CPU implementer : 0x51
    /// CPU implementer : 0x53
    /// ";
    /// let info = CpuInfo::from_reader_with_options(data.as_bytes(), ClassifyOptions::unbounded());
    /// assert_eq!(info.vendor(), "ARM/Qualcomm/Samsung");
    /// ```
    pub fn from_reader_with_options<R: BufRead>(reader: R, options: ClassifyOptions) -> Self {
        let mut acc = CpuInfoAccumulator::new(options);
        if let Err(_e) = for_each_line(reader, |line| acc.add_line(line)) {
            cpuinfo_debug!("Failed to read CPU information: {:?}", _e);
        }
        acc.finish()
    }

    /// Returns the vendor name(s), joined with `/` in discovery order.
    ///
    /// Codes missing from [`VENDORS`][crate::VENDORS] are reported as `Unknown`.
    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    /// Returns the model (part) name(s), joined with `/` in discovery order.
    ///
    /// If no part could be classified, this is the last `Hardware` or `cpu` value of the file
    /// (or an empty string).
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the last raw `Hardware` value, without any classification.
    pub fn hardware(&self) -> &str {
        &self.hardware
    }

    /// Returns the number of logical CPUs (one per `processor` line).
    pub fn cpu_count(&self) -> usize {
        self.cpu_count
    }

    /// Returns the sum of the bogomips values of every logical CPU.
    pub fn bogomips(&self) -> f64 {
        self.bogomips
    }

    /// Returns the CPU frequency in MHz.
    ///
    /// ⚠️ Frequency detection isn't supported from this source so it is always `0`.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }
}

/// Returns the last raw `Hardware` value of the file returned by
/// [`cpuinfo_path`][crate::cpuinfo_path], or an empty string if there is none.
///
/// ```no_run
/// println!("board: {}", arm_cpuinfo::get_hardware());
/// ```
pub fn get_hardware() -> String {
    let path = crate::cpuinfo_path();
    match File::open(&path) {
        Ok(file) => get_hardware_from_reader(BufReader::new(file)),
        Err(_e) => {
            cpuinfo_debug!("Cannot open `{}`: {:?}", path.display(), _e);
            String::new()
        }
    }
}

/// Returns the last raw `Hardware` value read from `reader`, or an empty string if there is
/// none.
///
/// ```
/// let data = "processor\t: 0\nHardware\t: BCM2835\n";
/// assert_eq!(arm_cpuinfo::get_hardware_from_reader(data.as_bytes()), "BCM2835");
/// ```
pub fn get_hardware_from_reader<R: BufRead>(reader: R) -> String {
    crate::linux::cpu::hardware_from_reader(reader)
}
