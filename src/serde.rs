// Take a look at the license at the top of the repository in the LICENSE file.

use crate::PartDedup;
use serde::{Serialize, Serializer, ser::SerializeStruct};

impl Serialize for crate::CpuInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("CpuInfo", 6)?;

        state.serialize_field("vendor", self.vendor())?;
        state.serialize_field("model", self.model())?;
        state.serialize_field("hardware", self.hardware())?;
        state.serialize_field("cpu_count", &self.cpu_count())?;
        state.serialize_field("bogomips", &self.bogomips())?;
        state.serialize_field("frequency", &self.frequency())?;

        state.end()
    }
}

impl Serialize for crate::ClassifyOptions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ClassifyOptions", 3)?;

        state.serialize_field("max_implementers", &self.max_implementers())?;
        state.serialize_field("max_parts", &self.max_parts())?;
        state.serialize_field("part_dedup", &self.part_dedup())?;

        state.end()
    }
}

impl Serialize for PartDedup {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let (index, variant) = match *self {
            PartDedup::Pair => (0, "Pair"),
            PartDedup::PartOnly => (1, "PartOnly"),
        };
        serializer.serialize_unit_variant("PartDedup", index, variant)
    }
}
