// Take a look at the license at the top of the repository in the LICENSE file.

#![doc = include_str!("../README.md")]
#![cfg_attr(feature = "serde", doc = include_str!("../md_doc/serde.md"))]
#![allow(unknown_lints)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![allow(clippy::upper_case_acronyms)]

#[macro_use]
mod macros;

pub use crate::arm::{CodeTable, UNKNOWN, VENDORS, part_name, part_table, vendor_name};
pub use crate::common::options::{ClassifyOptions, PartDedup};
pub use crate::common::{
    CHIP_TYPE_SIZE, CHIP_VENDOR_SIZE, CpuInfo, HARDWARE_STRING_SIZE, get_hardware,
    get_hardware_from_reader,
};
pub use crate::linux::{DEFAULT_CPUINFO_PATH, cpuinfo_path, set_cpuinfo_path};

#[cfg(feature = "c-interface")]
pub use crate::c_interface::*;

/// Returns `true` if the processor-identification file is expected to exist on this target.
///
/// The parsing functions ([`CpuInfo::from_reader`] for example) work on every target.
pub const IS_SUPPORTED_SYSTEM: bool = cfg!(any(target_os = "linux", target_os = "android"));

mod arm;
#[cfg(feature = "c-interface")]
mod c_interface;
mod common;
mod debug;
mod linux;
#[cfg(feature = "serde")]
mod serde;
mod utils;

#[cfg(test)]
mod test {
    use crate::*;

    #[test]
    fn check_reference_example() {
        let data = "\
CPU implementer : 0x41
CPU part : 0xd03
processor : 0
processor : 1
BogoMips : 50.00
BogoMips : 50.00
";
        let info = CpuInfo::from_reader(data.as_bytes());
        assert_eq!(info.vendor(), "ARM");
        assert_eq!(info.model(), "Cortex-A53");
        assert_eq!(info.cpu_count(), 2);
        assert!((info.bogomips() - 100.).abs() < 1e-9);
        assert_eq!(info.frequency(), 0.);
    }

    #[test]
    fn check_unknown_implementer() {
        let info = CpuInfo::from_reader("CPU implementer : 0x99\n".as_bytes());
        assert_eq!(info.vendor(), "Unknown");
        assert_eq!(info.model(), "");
    }

    #[test]
    fn check_empty_source() {
        let info = CpuInfo::from_reader("".as_bytes());
        assert_eq!(info, CpuInfo::default());
        assert_eq!(info.vendor(), "");
        assert_eq!(info.model(), "");
        assert_eq!(info.cpu_count(), 0);
        assert_eq!(info.bogomips(), 0.);
    }

    #[test]
    fn check_supported_system() {
        assert_eq!(
            IS_SUPPORTED_SYSTEM,
            cfg!(any(target_os = "linux", target_os = "android"))
        );
    }
}
