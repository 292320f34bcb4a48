// Take a look at the license at the top of the repository in the LICENSE file.

#![cfg(feature = "c-interface")]

use arm_cpuinfo::{
    CCpuInfo, arm_cpuinfo_get_cpu_info, arm_cpuinfo_get_hardware, arm_cpuinfo_set_cpuinfo_path,
};
use std::ffi::{CStr, CString, c_char};
use std::io::Write;
use std::mem::MaybeUninit;

const DATA: &str = "\
processor\t: 0
BogoMIPS\t: 48.00
CPU implementer\t: 0x41
CPU part\t: 0xd03

processor\t: 1
BogoMIPS\t: 48.00
CPU implementer\t: 0x41
CPU part\t: 0xd09

Hardware\t: Hisilicon Kirin970
";

// The source path is process-wide, so everything relying on it lives in a single test.
#[test]
fn test_c_interface() {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create temporary file");
    file.write_all(DATA.as_bytes())
        .expect("failed to write temporary file");
    file.flush().expect("failed to flush temporary file");

    let path = CString::new(file.path().to_str().expect("non UTF-8 temporary path"))
        .expect("path contains a NUL byte");
    assert_eq!(unsafe { arm_cpuinfo_set_cpuinfo_path(path.as_ptr()) }, 0);

    let mut info = MaybeUninit::<CCpuInfo>::zeroed();
    assert_eq!(unsafe { arm_cpuinfo_get_cpu_info(info.as_mut_ptr()) }, 0);
    let info = unsafe { info.assume_init() };

    let vendor = unsafe { CStr::from_ptr(info.chip_vendor.as_ptr()) };
    let model = unsafe { CStr::from_ptr(info.chip_type.as_ptr()) };
    assert_eq!(vendor.to_str(), Ok("ARM"));
    assert_eq!(model.to_str(), Ok("Cortex-A53/Cortex-A73"));
    assert_eq!(info.num_cpus, 2);
    assert_eq!(info.megahertz, 0.);
    assert!((info.bogomips - 96.).abs() < 0.001);

    let mut hardware = [0 as c_char; 64];
    assert_eq!(
        unsafe { arm_cpuinfo_get_hardware(hardware.as_mut_ptr(), hardware.len()) },
        1
    );
    let hardware = unsafe { CStr::from_ptr(hardware.as_ptr()) };
    assert_eq!(hardware.to_str(), Ok("Hisilicon Kirin970"));

    // Truncated, but still NUL-terminated.
    let mut small = [1 as c_char; 6];
    assert_eq!(
        unsafe { arm_cpuinfo_get_hardware(small.as_mut_ptr(), small.len()) },
        1
    );
    let small = unsafe { CStr::from_ptr(small.as_ptr()) };
    assert_eq!(small.to_str(), Ok("Hisil"));

    assert_eq!(
        unsafe { arm_cpuinfo_get_hardware(std::ptr::null_mut(), 10) },
        -1
    );
    assert_eq!(unsafe { arm_cpuinfo_get_cpu_info(std::ptr::null_mut()) }, -1);
    assert_eq!(unsafe { arm_cpuinfo_set_cpuinfo_path(std::ptr::null()) }, 0);
}
