// Take a look at the license at the top of the repository in the LICENSE file.

use crate::utils::copy_to_c_buffer;
use crate::{CHIP_TYPE_SIZE, CHIP_VENDOR_SIZE, CpuInfo};
use libc::{c_char, c_float, c_int, size_t};
use std::ffi::CStr;
use std::path::PathBuf;

/// Equivalent of [`CpuInfo`][crate::CpuInfo] struct, with NUL-terminated fixed-size strings.
#[repr(C)]
pub struct CCpuInfo {
    /// Equivalent of [`CpuInfo::vendor`][crate::CpuInfo::vendor].
    pub chip_vendor: [c_char; CHIP_VENDOR_SIZE],
    /// Equivalent of [`CpuInfo::model`][crate::CpuInfo::model].
    pub chip_type: [c_char; CHIP_TYPE_SIZE],
    /// Equivalent of [`CpuInfo::cpu_count`][crate::CpuInfo::cpu_count].
    pub num_cpus: c_int,
    /// Equivalent of [`CpuInfo::frequency`][crate::CpuInfo::frequency].
    pub megahertz: c_float,
    /// Equivalent of [`CpuInfo::bogomips`][crate::CpuInfo::bogomips].
    pub bogomips: c_float,
}

/// Equivalent of [`CpuInfo::new()`][crate::CpuInfo#method.new].
///
/// Returns `-1` if `cpu_info` is null, `0` otherwise (even if the source couldn't be read).
///
/// # Safety
///
/// `cpu_info` must be null or point to a valid, writable `CCpuInfo`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn arm_cpuinfo_get_cpu_info(cpu_info: *mut CCpuInfo) -> c_int {
    if cpu_info.is_null() {
        return -1;
    }
    let info = CpuInfo::new();
    let cpu_info = unsafe { &mut *cpu_info };

    copy_to_c_buffer(info.vendor(), &mut cpu_info.chip_vendor);
    copy_to_c_buffer(info.model(), &mut cpu_info.chip_type);
    cpu_info.num_cpus = c_int::try_from(info.cpu_count()).unwrap_or(c_int::MAX);
    cpu_info.megahertz = info.frequency() as c_float;
    cpu_info.bogomips = info.bogomips() as c_float;
    0
}

/// Equivalent of [`get_hardware()`][crate::get_hardware]. At most `size - 1` bytes are written,
/// followed by a NUL byte.
///
/// Returns `-1` if `hardware` is null or `size` is `0`, `1` otherwise.
///
/// # Safety
///
/// `hardware` must be null or point to at least `size` writable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn arm_cpuinfo_get_hardware(hardware: *mut c_char, size: size_t) -> c_int {
    if hardware.is_null() || size == 0 {
        return -1;
    }
    let buf = unsafe { std::slice::from_raw_parts_mut(hardware, size) };
    copy_to_c_buffer(&crate::get_hardware(), buf);
    1
}

/// Equivalent of [`set_cpuinfo_path()`][crate::set_cpuinfo_path]. A null `path` restores the
/// default path.
///
/// Returns `-1` if `path` isn't valid UTF-8, `0` otherwise.
///
/// # Safety
///
/// `path` must be null or a valid NUL-terminated C string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn arm_cpuinfo_set_cpuinfo_path(path: *const c_char) -> c_int {
    if path.is_null() {
        crate::set_cpuinfo_path(None);
        return 0;
    }
    let path = unsafe { CStr::from_ptr(path) };
    match path.to_str() {
        Ok(path) => {
            crate::set_cpuinfo_path(Some(PathBuf::from(path)));
            0
        }
        Err(_e) => {
            cpuinfo_debug!("Invalid cpuinfo path: {:?}", _e);
            -1
        }
    }
}
