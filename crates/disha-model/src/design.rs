//! Design options presented to the client

use crate::ids::OptionId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One of the alternative kitchen design proposals
///
/// Immutable for the session; there is no edit surface. The embed URL is
/// an opaque string handed to the third-party viewer container and never
/// inspected here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignOption {
    /// Option identifier
    pub id: OptionId,
    /// Display name (`Contemporary Warm`)
    pub name: String,
    /// Review status
    pub status: OptionStatus,
    /// One-line pitch
    pub description: String,
    /// Estimated cost in rupees, materials and labor inclusive
    pub estimated_cost: u64,
    /// Key features, in presentation order
    pub features: Vec<String>,
    /// Material selections keyed by surface (`cabinets` -> `Laminate`)
    pub materials: IndexMap<String, String>,
    /// Client feedback quote, if any was given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_feedback: Option<String>,
    /// Viewer embed URL for this option
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
}

impl DesignOption {
    /// Whether the client has left feedback on this option
    #[inline]
    #[must_use]
    pub fn has_feedback(&self) -> bool {
        self.client_feedback.is_some()
    }
}

/// Review status of a design option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionStatus {
    /// Client's current favorite
    Preferred,
    /// Still being evaluated
    #[serde(rename = "Under Review")]
    UnderReview,
    /// Kept as a fallback
    Alternative,
}

impl std::fmt::Display for OptionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OptionStatus::Preferred => "Preferred",
            OptionStatus::UnderReview => "Under Review",
            OptionStatus::Alternative => "Alternative",
        };
        f.write_str(label)
    }
}
