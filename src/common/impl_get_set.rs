// Take a look at the license at the top of the repository in the LICENSE file.

macro_rules! impl_get_set {
    // To handle `PartDedup`.
    ($ty_name:ident, $name:ident, $with:ident, $without:ident, PartDedup $(, $extra_doc:literal)? $(,)?) => {
        #[doc = concat!("Returns the value of the \"", stringify!($name), "\" option.")]
        $(#[doc = concat!("
", $extra_doc, "
")])?
        #[doc = concat!("
```
use arm_cpuinfo::{", stringify!($ty_name), ", PartDedup};

let r = ", stringify!($ty_name), "::new();
assert_eq!(r.", stringify!($name), "(), PartDedup::Pair);

let r = r.with_", stringify!($name), "(PartDedup::PartOnly);
assert_eq!(r.", stringify!($name), "(), PartDedup::PartOnly);

let r = r.without_", stringify!($name), "();
assert_eq!(r.", stringify!($name), "(), PartDedup::Pair);
```")]
        pub fn $name(&self) -> PartDedup {
            self.$name
        }

        #[doc = concat!("Sets the value of the \"", stringify!($name), "\" option.

```
use arm_cpuinfo::{", stringify!($ty_name), ", PartDedup};

let r = ", stringify!($ty_name), "::new().with_", stringify!($name), "(PartDedup::PartOnly);
assert_eq!(r.", stringify!($name), "(), PartDedup::PartOnly);
```")]
        #[must_use]
        pub fn $with(mut self, kind: PartDedup) -> Self {
            self.$name = kind;
            self
        }

        #[doc = concat!("Resets the value of the \"", stringify!($name), "\" option to `PartDedup::Pair`.

```
use arm_cpuinfo::{", stringify!($ty_name), ", PartDedup};

let r = ", stringify!($ty_name), "::new().with_", stringify!($name), "(PartDedup::PartOnly);
let r = r.without_", stringify!($name), "();
assert_eq!(r.", stringify!($name), "(), PartDedup::Pair);
```")]
        #[must_use]
        pub fn $without(mut self) -> Self {
            self.$name = PartDedup::Pair;
            self
        }
    };

    // To handle capacities (`None` means unbounded).
    ($ty_name:ident, $name:ident, $with:ident, $without:ident, $typ:ty $(, $extra_doc:literal)? $(,)?) => {
        #[doc = concat!("Returns the value of the \"", stringify!($name), "\" option. `None` means \
            there is no limit.")]
        $(#[doc = concat!("
", $extra_doc, "
")])?
        #[doc = concat!("
```
use arm_cpuinfo::", stringify!($ty_name), ";

let r = ", stringify!($ty_name), "::unbounded();
assert_eq!(r.", stringify!($name), "(), None);

let r = r.with_", stringify!($name), "(4);
assert_eq!(r.", stringify!($name), "(), Some(4));

let r = r.without_", stringify!($name), "();
assert_eq!(r.", stringify!($name), "(), None);
```")]
        pub fn $name(&self) -> Option<$typ> {
            self.$name
        }

        #[doc = concat!("Sets the value of the \"", stringify!($name), "\" option to `Some(...)`.

```
use arm_cpuinfo::", stringify!($ty_name), ";

let r = ", stringify!($ty_name), "::unbounded().with_", stringify!($name), "(3);
assert_eq!(r.", stringify!($name), "(), Some(3));
```")]
        #[must_use]
        pub fn $with(mut self, limit: $typ) -> Self {
            self.$name = Some(limit);
            self
        }

        #[doc = concat!("Sets the value of the \"", stringify!($name), "\" option to `None`.

```
use arm_cpuinfo::", stringify!($ty_name), ";

let r = ", stringify!($ty_name), "::new();
assert!(r.", stringify!($name), "().is_some());

let r = r.without_", stringify!($name), "();
assert_eq!(r.", stringify!($name), "(), None);
```")]
        #[must_use]
        pub fn $without(mut self) -> Self {
            self.$name = None;
            self
        }
    };
}

pub(crate) use impl_get_set;
