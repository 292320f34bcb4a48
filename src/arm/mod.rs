// Take a look at the license at the top of the repository in the LICENSE file.

//! Mapping of the numeric implementer/part codes to human-readable names.

mod parts;
mod vendors;

pub use self::vendors::VENDORS;

/// Name returned for codes that are not in the tables.
pub const UNKNOWN: &str = "Unknown";

/// A lookup table of `(code, display name)` pairs.
pub type CodeTable = [(u32, &'static str)];

// Implementers for which part codes can be resolved. Vendors missing from this list (Motorola
// and Apple for example) don't get any model classification.
static PART_TABLES: &[(u32, &CodeTable)] = &[
    (0x41, parts::ARM),
    (0x42, parts::BROADCOM),
    (0x43, parts::CAVIUM),
    (0x44, parts::DEC),
    (0x48, parts::HISILICON),
    (0x4e, parts::NVIDIA),
    (0x50, parts::APM),
    (0x51, parts::QUALCOMM),
    (0x53, parts::SAMSUNG),
    (0x56, parts::MARVELL),
    (0x66, parts::FARADAY),
    (0x69, parts::INTEL),
];

fn lookup(table: &'static CodeTable, code: u32) -> Option<&'static str> {
    table
        .iter()
        .find(|(entry, _)| *entry == code)
        .map(|(_, name)| *name)
}

/// Returns the name of the vendor with the given implementer code, or [`UNKNOWN`].
///
/// ```
/// use arm_cpuinfo::vendor_name;
///
/// assert_eq!(vendor_name(0x41), "ARM");
/// assert_eq!(vendor_name(0x99), "Unknown");
/// ```
pub fn vendor_name(implementer: u32) -> &'static str {
    lookup(VENDORS, implementer).unwrap_or(UNKNOWN)
}

/// Returns the part table of the given implementer, if there is one.
///
/// ```
/// use arm_cpuinfo::part_table;
///
/// assert!(part_table(0x41).is_some());
/// // Apple is a known vendor but its parts aren't listed.
/// assert!(part_table(0x61).is_none());
/// ```
pub fn part_table(implementer: u32) -> Option<&'static CodeTable> {
    PART_TABLES
        .iter()
        .find(|(code, _)| *code == implementer)
        .map(|(_, table)| *table)
}

/// Returns the model name of `part` for the given implementer.
///
/// Returns `None` if the implementer has no part table and `Some("Unknown")` if the part isn't
/// in the implementer's table.
///
/// ```
/// use arm_cpuinfo::part_name;
///
/// assert_eq!(part_name(0x41, 0xd03), Some("Cortex-A53"));
/// assert_eq!(part_name(0x41, 0xfff), Some("Unknown"));
/// assert_eq!(part_name(0x99, 0xd03), None);
/// ```
pub fn part_name(implementer: u32, part: u32) -> Option<&'static str> {
    part_table(implementer).map(|table| lookup(table, part).unwrap_or(UNKNOWN))
}
