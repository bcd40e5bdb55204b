//! Manufacturing package snapshot
//!
//! The JSON document handed to the workshop: part list with flattened
//! dimension labels, hardware with catalog links, cut list and assembly
//! steps for one cabinet.

use crate::schedule::{hafele_link, hardware_csv, parts_csv};
use chrono::{DateTime, Utc};
use disha_model::{CutListEntry, ManufacturingRecord, OptionId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Complete export package for one cabinet
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturingPackage {
    /// Cabinet id
    pub cabinet_id: String,
    /// Cabinet name
    pub name: String,
    /// Design option the cabinet belongs to
    pub design_option: OptionId,
    /// When the package was produced
    pub export_date: DateTime<Utc>,
    /// Part list with full specifications
    pub parts: Vec<PackagedPart>,
    /// Hardware schedule with catalog links
    pub hardware: Vec<PackagedHardware>,
    /// Cut list
    pub cut_list: Vec<CutListEntry>,
    /// Assembly steps
    pub assembly: Vec<String>,
}

/// One part row in the package
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagedPart {
    /// Part id
    pub id: String,
    /// Part name
    pub name: String,
    /// Board material
    pub material: String,
    /// Surface finish
    pub finish: String,
    /// Flattened dimension label (`720×560×18`)
    pub dimensions: String,
    /// Piece count
    pub quantity: u32,
    /// Edge banding summary (`front, top`)
    pub edge_banding: String,
    /// Drilling operations
    pub drilling: Vec<String>,
}

/// One hardware row in the package
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackagedHardware {
    /// Hafele article number
    pub article: String,
    /// Item name
    pub name: String,
    /// Quantity
    pub quantity: u32,
    /// Specifications map
    pub specifications: IndexMap<String, String>,
    /// Catalog search link
    pub hafele_link: String,
}

impl ManufacturingPackage {
    /// Assemble the package for a cabinet
    #[must_use]
    pub fn build(record: &ManufacturingRecord, option: &OptionId, exported_at: DateTime<Utc>) -> Self {
        Self {
            cabinet_id: record.id.to_string(),
            name: record.name.clone(),
            design_option: option.clone(),
            export_date: exported_at,
            parts: record
                .components
                .iter()
                .map(|part| PackagedPart {
                    id: part.id.clone(),
                    name: part.name.clone(),
                    material: part.material.clone(),
                    finish: part.finish.clone(),
                    dimensions: part.dimensions.to_string(),
                    quantity: part.quantity,
                    edge_banding: part.edge_banding.join(", "),
                    drilling: part.drilling.clone(),
                })
                .collect(),
            hardware: record
                .hafele_hardware
                .iter()
                .map(|item| PackagedHardware {
                    article: item.article.clone(),
                    name: item.name.clone(),
                    quantity: item.quantity,
                    specifications: item.specifications.clone(),
                    hafele_link: hafele_link(&item.article),
                })
                .collect(),
            cut_list: record.cut_list.clone(),
            assembly: record.assembly_steps.clone(),
        }
    }

    /// The parts schedule CSV for this cabinet
    #[must_use]
    pub fn parts_csv(record: &ManufacturingRecord) -> String {
        parts_csv(&record.components)
    }

    /// The hardware schedule CSV for this cabinet
    #[must_use]
    pub fn hardware_csv(record: &ManufacturingRecord) -> String {
        hardware_csv(&record.hafele_hardware)
    }

    /// Pretty-printed JSON snapshot
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
