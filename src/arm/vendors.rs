// Take a look at the license at the top of the repository in the LICENSE file.

// Based on util-linux `sys-utils/lscpu-arm.c`.

use super::CodeTable;

/// Known implementer codes, as reported by the `CPU implementer` field.
pub static VENDORS: &CodeTable = &[
    (0x41, "ARM"),
    (0x42, "Broadcom"),
    (0x43, "Cavium"),
    (0x44, "DEC"),
    (0x48, "HiSilicon"),
    // Freescale?
    (0x4d, "Motorola"),
    (0x4e, "Nvidia"),
    (0x50, "APM"),
    (0x51, "Qualcomm"),
    (0x53, "Samsung"),
    (0x56, "Marvell"),
    (0x61, "Apple"),
    (0x66, "Faraday"),
    (0x69, "Intel"),
];
