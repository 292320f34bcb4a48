// Take a look at the license at the top of the repository in the LICENSE file.

use std::io::BufRead;

use crate::common::{CHIP_TYPE_SIZE, CHIP_VENDOR_SIZE, HARDWARE_STRING_SIZE};
use crate::linux::utils::{for_each_line, parse_float, parse_hex};
use crate::utils::truncate_str;
use crate::{ClassifyOptions, CpuInfo, PartDedup, part_name, vendor_name};

declare_keys! {
    /// Vendor code, in hexadecimal.
    Implementer => ["CPU implementer"],
    /// Part code, in hexadecimal, scoped to the last implementer.
    Part => ["CPU part"],
    /// Board or SoC name.
    Hardware => ["Hardware"],
    /// Model name on some platforms. Matches every line starting with `cpu`.
    CpuModel => ["cpu"],
    BogoMips => ["bogomips", "BogoMips", "BogoMIPS"],
    /// One line per logical CPU (older 32-bit kernels also print a `Processor` line with the
    /// model name, which is counted as well).
    Processor => ["processor", "Processor"],
}

impl CpuInfoKey {
    fn matches(self, line: &str) -> bool {
        self.prefixes().iter().any(|prefix| line.starts_with(prefix))
    }
}

/// A recognized key and its value, borrowed from the line it was extracted from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RawRecord<'a> {
    pub(crate) key: CpuInfoKey,
    pub(crate) value: &'a str,
}

/// Returns what follows the first `:` of `line`, trimmed. If there is no `:`, returns an empty
/// string.
pub(crate) fn extract_value(line: &str) -> &str {
    match memchr::memchr(b':', line.as_bytes()) {
        Some(pos) => line[pos + 1..].trim(),
        None => "",
    }
}

/// Returns a record for each key matching `line`. Every key is tested independently.
pub(crate) fn extract_records(line: &str) -> impl Iterator<Item = RawRecord<'_>> {
    CpuInfoKey::ALL
        .iter()
        .copied()
        .filter(move |key| key.matches(line))
        .map(move |key| RawRecord {
            key,
            value: extract_value(line),
        })
}

/// A distinct `CPU part` entry. `implementer` is `None` if no implementer was seen before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PartEntry {
    pub(crate) implementer: Option<u32>,
    pub(crate) part: u32,
}

// Appends `item` if there is still room. Returns `false` if it was dropped.
fn push_bounded<T>(list: &mut Vec<T>, item: T, limit: Option<usize>) -> bool {
    if limit.is_some_and(|limit| list.len() >= limit) {
        return false;
    }
    list.push(item);
    true
}

/// State accumulated while going through the lines of the file.
pub(crate) struct CpuInfoAccumulator {
    options: ClassifyOptions,
    implementers: Vec<u32>,
    parts: Vec<PartEntry>,
    bogomips: f64,
    cpu_count: usize,
    model: String,
    hardware: String,
}

impl CpuInfoAccumulator {
    pub(crate) fn new(options: ClassifyOptions) -> Self {
        Self {
            options,
            implementers: Vec::new(),
            parts: Vec::new(),
            bogomips: 0.,
            cpu_count: 0,
            model: String::new(),
            hardware: String::new(),
        }
    }

    pub(crate) fn add_line(&mut self, line: &str) {
        for record in extract_records(line) {
            self.add_record(record);
        }
    }

    pub(crate) fn add_record(&mut self, record: RawRecord<'_>) {
        match record.key {
            CpuInfoKey::Implementer => self.add_implementer(parse_hex(record.value)),
            CpuInfoKey::Part => self.add_part(parse_hex(record.value)),
            CpuInfoKey::Hardware => {
                record.value.clone_into(&mut self.hardware);
                record.value.clone_into(&mut self.model);
            }
            CpuInfoKey::CpuModel => record.value.clone_into(&mut self.model),
            CpuInfoKey::BogoMips => self.bogomips += parse_float(record.value),
            CpuInfoKey::Processor => self.cpu_count += 1,
        }
    }

    fn add_implementer(&mut self, code: u32) {
        if self.implementers.contains(&code) {
            return;
        }
        if !push_bounded(&mut self.implementers, code, self.options.max_implementers()) {
            cpuinfo_debug!("Too many distinct implementers, ignoring {:#x}", code);
        }
    }

    fn add_part(&mut self, part: u32) {
        let entry = PartEntry {
            implementer: self.implementers.last().copied(),
            part,
        };
        let dedup = self.options.part_dedup();
        if self.parts.iter().any(|known| match dedup {
            PartDedup::Pair => *known == entry,
            PartDedup::PartOnly => known.part == entry.part,
        }) {
            return;
        }
        if !push_bounded(&mut self.parts, entry, self.options.max_parts()) {
            cpuinfo_debug!("Too many distinct parts, ignoring {:?}", entry);
        }
    }

    /// Resolves the codes seen so far and builds the final result.
    pub(crate) fn finish(self) -> CpuInfo {
        let vendors: Vec<&str> = self
            .implementers
            .iter()
            .map(|&code| vendor_name(code))
            .collect();
        // Parts attributed to no implementer, or to one without part table, don't contribute.
        let models: Vec<&str> = self
            .parts
            .iter()
            .filter_map(|entry| part_name(entry.implementer?, entry.part))
            .collect();
        let model = if models.is_empty() {
            self.model
        } else {
            models.join("/")
        };

        CpuInfo {
            vendor: truncate_str(&vendors.join("/"), CHIP_VENDOR_SIZE - 1).to_owned(),
            model: truncate_str(&model, CHIP_TYPE_SIZE - 1).to_owned(),
            hardware: truncate_str(&self.hardware, HARDWARE_STRING_SIZE - 1).to_owned(),
            cpu_count: self.cpu_count,
            bogomips: self.bogomips,
            frequency: 0.,
        }
    }
}

/// Returns the last `Hardware` value found in `reader`.
pub(crate) fn hardware_from_reader<R: BufRead>(reader: R) -> String {
    let mut hardware = String::new();
    let ret = for_each_line(reader, |line| {
        for record in extract_records(line) {
            if record.key == CpuInfoKey::Hardware {
                record.value.clone_into(&mut hardware);
            }
        }
    });
    if let Err(_e) = ret {
        cpuinfo_debug!("Failed to read hardware information: {:?}", _e);
    }
    truncate_str(&hardware, HARDWARE_STRING_SIZE - 1).to_owned()
}
