//! Kitchen zones
//!
//! A zone is a named functional area (cooking, storage, breakfast)
//! grouping one or more cabinets, with its own BOQ slice, utility points
//! and key measurements.

use crate::ids::{CabinetId, ZoneId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A functional area of the kitchen, scoped to one design option
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Zone identifier
    pub id: ZoneId,
    /// Display name (`Zone A - Main Cooking`)
    pub name: String,
    /// Short description
    pub description: String,
    /// Where the zone sits in the room
    pub location: String,
    /// Footprint in millimetres
    pub dimensions: ZoneDimensions,
    /// Cabinets belonging to this zone, by id
    pub cabinets: Vec<CabinetId>,
    /// Cost breakdown for this zone
    pub boq: ZoneBoq,
    /// Utility points
    #[serde(default)]
    pub utilities: Utilities,
    /// Key measurements in millimetres, keyed by label
    #[serde(default)]
    pub measurements: IndexMap<String, u32>,
    /// Appliances placed in this zone
    #[serde(default)]
    pub appliances: Vec<Appliance>,
}

/// Zone footprint in millimetres
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDimensions {
    /// Run width
    pub width: u32,
    /// Counter depth
    pub depth: u32,
    /// Wall height
    pub wall_height: u32,
}

/// Per-zone bill of quantities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneBoq {
    /// Category -> amount in rupees, in presentation order
    #[serde(flatten)]
    pub categories: IndexMap<String, u64>,
    /// Zone total in rupees
    pub total: u64,
}

impl ZoneBoq {
    /// Sum of the category amounts
    ///
    /// The fixture carries `total` separately; this recomputes it for
    /// integrity checks.
    #[inline]
    #[must_use]
    pub fn category_sum(&self) -> u64 {
        self.categories.values().sum()
    }
}

/// Utility points in a zone
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Utilities {
    /// Electrical points
    #[serde(default)]
    pub electrical: Vec<UtilityPoint>,
    /// Plumbing points
    #[serde(default)]
    pub plumbing: Vec<UtilityPoint>,
    /// Gas points
    #[serde(default)]
    pub gas: Vec<UtilityPoint>,
}

impl Utilities {
    /// Whether any utility point is recorded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.electrical.is_empty() && self.plumbing.is_empty() && self.gas.is_empty()
    }
}

/// A single utility connection point
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilityPoint {
    /// Point type (`16A socket`, `water inlet`, `gas pipeline`)
    #[serde(rename = "type")]
    pub kind: String,
    /// Location description
    pub location: String,
    /// Rating / size / quantity detail, free-form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// An appliance placed in a zone
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appliance {
    /// Appliance type (`hob`, `chimney`, `sink`)
    #[serde(rename = "type")]
    pub kind: String,
    /// Model designation
    pub model: String,
    /// Position description
    pub position: String,
    /// Countertop cutout, if one is needed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutout: Option<CutoutSize>,
}

/// Cutout dimensions in millimetres
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CutoutSize {
    /// Cutout width
    pub width: u32,
    /// Cutout depth
    pub depth: u32,
}
