// Take a look at the license at the top of the repository in the LICENSE file.

#[cfg(feature = "debug")]
#[doc(hidden)]
#[allow(unused)]
macro_rules! cpuinfo_debug {
    ($($x:tt)*) => {{
        eprintln!($($x)*);
    }}
}

#[cfg(not(feature = "debug"))]
#[doc(hidden)]
#[allow(unused)]
macro_rules! cpuinfo_debug {
    ($($x:tt)*) => {{}};
}

// Generates the key table used by the line extractor. Each key gets a list of accepted prefixes;
// the order of declaration is the order in which a line is tested.
macro_rules! declare_keys {
    ($($(#[$attr:meta])* $key:ident => [$($prefix:literal),+ $(,)?],)+) => (
        /// Keys recognized in the processor-identification file.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub(crate) enum CpuInfoKey {
            $($(#[$attr])* $key,)+
        }

        impl CpuInfoKey {
            pub(crate) const ALL: &'static [CpuInfoKey] = &[$(CpuInfoKey::$key,)+];

            pub(crate) const fn prefixes(self) -> &'static [&'static str] {
                match self {
                    $(CpuInfoKey::$key => &[$($prefix,)+],)+
                }
            }
        }
    )
}
