//! Error types for fixture loading and store validation

use crate::ids::{CabinetId, OptionId, ZoneId};

/// Errors raised while building the validated data store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Fixture document failed to parse
    #[error("fixture parse error in {document}: {source}")]
    Parse {
        /// Logical fixture name (e.g. `design-options`)
        document: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The fixture set contains no design options
    #[error("fixture set contains no design options")]
    NoOptions,

    /// Duplicate design option id
    #[error("duplicate design option id: {0}")]
    DuplicateOption(OptionId),

    /// Duplicate zone id within one option's project data
    #[error("duplicate zone id {zone} in option {option}")]
    DuplicateZone {
        /// Owning design option
        option: OptionId,
        /// Offending zone id
        zone: ZoneId,
    },

    /// A zone references a cabinet with no manufacturing record
    #[error("zone {zone} in option {option} references unknown cabinet {cabinet}")]
    UnknownCabinet {
        /// Owning design option
        option: OptionId,
        /// Referencing zone
        zone: ZoneId,
        /// Unresolved cabinet id
        cabinet: CabinetId,
    },

    /// Project data supplied for an option that does not exist
    #[error("project data supplied for unknown option {0}")]
    UnknownOption(OptionId),
}

impl StoreError {
    /// Wrap a JSON error with the fixture it came from
    #[inline]
    #[must_use]
    pub fn parse(document: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            document: document.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display() {
        let err = StoreError::UnknownCabinet {
            option: OptionId::new("option-b"),
            zone: ZoneId::new("zone-a"),
            cabinet: CabinetId::new("BC-009"),
        };
        assert!(err.to_string().contains("BC-009"));
        assert!(err.to_string().contains("zone-a"));
    }
}
