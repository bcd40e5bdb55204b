//! Entity identifiers
//!
//! Fixture ids are stable human-readable strings (`option-b`, `zone-a`,
//! `BC-001`), so each id is a newtype over `String` rather than a
//! generated ULID. Typed ids keep the option/zone/cabinet hierarchy from
//! being crossed by accident.

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Wrap a raw id string
            #[inline]
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the raw id
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }
    };
}

string_id! {
    /// Design option identifier (`option-a`, `option-b`, ...)
    OptionId
}

string_id! {
    /// Zone identifier (`zone-a`, `zone-b`, ...)
    ZoneId
}

string_id! {
    /// Cabinet / manufacturing-record identifier (`BC-001`, `WC-002`, `TU-001`)
    CabinetId
}

string_id! {
    /// Workflow checklist phase identifier (`concept`, `detailed`, ...)
    PhaseId
}
