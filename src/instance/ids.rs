//! Dense typed identifiers.
//!
//! Instance names are resolved once into these indices so that states and
//! actions stay `Copy`-cheap and hash quickly.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub usize);

        impl $name {
            /// Position of this id in the instance tables.
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "#{}"), self.0)
            }
        }
    };
}

typed_id!(
    /// Index of a jig in [`Instance::jigs`](super::Instance::jigs).
    JigId,
    "jig"
);
typed_id!(
    /// Index of a rack in [`Instance::racks`](super::Instance::racks).
    RackId,
    "rack"
);
typed_id!(
    /// Index of a jig type in the instance's type table.
    JigTypeId,
    "jig-type"
);
typed_id!(
    /// Identifier of a part. A loaded jig carries the part sharing its index.
    PartId,
    "part"
);

impl From<JigId> for PartId {
    fn from(jig: JigId) -> Self {
        PartId(jig.0)
    }
}
