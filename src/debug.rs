// Take a look at the license at the top of the repository in the LICENSE file.

impl std::fmt::Debug for crate::CpuInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuInfo")
            .field("vendor", &self.vendor())
            .field("model", &self.model())
            .field("hardware", &self.hardware())
            .field("nb CPUs", &self.cpu_count())
            .field("bogomips", &self.bogomips())
            .field("frequency", &self.frequency())
            .finish()
    }
}
