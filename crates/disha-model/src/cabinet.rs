//! Manufacturing records
//!
//! A cabinet's full production package: part list, Hafele hardware,
//! cut list and assembly steps. Records are looked up by cabinet id from
//! a per-design-option map and are never mutated.

use crate::ids::CabinetId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Production package for one cabinet
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManufacturingRecord {
    /// Cabinet identifier
    pub id: CabinetId,
    /// Display name (`Sink Base`)
    pub name: String,
    /// Carcass dimensions in millimetres
    pub dimensions: CabinetDimensions,
    /// Component parts
    pub components: Vec<Part>,
    /// Hafele hardware schedule
    pub hafele_hardware: Vec<HardwareItem>,
    /// Cut list
    #[serde(default)]
    pub cut_list: Vec<CutListEntry>,
    /// Ordered assembly steps
    #[serde(default)]
    pub assembly_steps: Vec<String>,
}

impl ManufacturingRecord {
    /// Cabinet kind, derived from the id prefix
    #[inline]
    #[must_use]
    pub fn kind(&self) -> CabinetKind {
        CabinetKind::from_id(&self.id)
    }

    /// Total part count including quantities
    #[inline]
    #[must_use]
    pub fn part_count(&self) -> u32 {
        self.components.iter().map(|p| p.quantity).sum()
    }
}

/// Cabinet carcass dimensions in millimetres
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CabinetDimensions {
    /// Width
    pub width: u32,
    /// Depth
    pub depth: u32,
    /// Height
    pub height: u32,
}

/// Cabinet family, encoded in the id prefix (`BC-`, `WC-`, `TU-`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CabinetKind {
    /// Base cabinet
    Base,
    /// Wall cabinet
    Wall,
    /// Tall unit
    Tall,
}

impl CabinetKind {
    /// Derive the kind from a cabinet id
    #[must_use]
    pub fn from_id(id: &CabinetId) -> Self {
        if id.as_str().starts_with("BC") {
            CabinetKind::Base
        } else if id.as_str().starts_with("WC") {
            CabinetKind::Wall
        } else {
            CabinetKind::Tall
        }
    }

    /// Short display label
    #[inline]
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            CabinetKind::Base => "Base",
            CabinetKind::Wall => "Wall",
            CabinetKind::Tall => "Tall",
        }
    }
}

/// A single manufactured part
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Part identifier within the cabinet
    pub id: String,
    /// Part name (`Left Side Panel`)
    pub name: String,
    /// Board material (`18mm BWP Ply`)
    pub material: String,
    /// Surface finish
    pub finish: String,
    /// Cut dimensions
    pub dimensions: PartDimensions,
    /// Number of identical pieces
    pub quantity: u32,
    /// Edges receiving banding (`front`, `top`, ...)
    #[serde(default)]
    pub edge_banding: Vec<String>,
    /// Drilling operations
    #[serde(default)]
    pub drilling: Vec<String>,
}

/// Part cut dimensions in millimetres
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PartDimensions {
    /// Length
    pub length: u32,
    /// Width
    pub width: u32,
    /// Board thickness
    pub thickness: u32,
}

impl std::fmt::Display for PartDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}×{}×{}", self.length, self.width, self.thickness)
    }
}

/// One Hafele hardware line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareItem {
    /// Hafele article number (`311.20.851`)
    pub article: String,
    /// Item name (`Soft-close Hinge`)
    pub name: String,
    /// Quantity required
    pub quantity: u32,
    /// Free-form specifications (`opening angle` -> `110°`)
    #[serde(default)]
    pub specifications: IndexMap<String, String>,
}

/// One cut-list row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CutListEntry {
    /// Board / sheet description
    pub board: String,
    /// Pieces to cut from this board
    pub pieces: u32,
    /// Nominal sheet utilisation percentage
    pub utilisation: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_id_prefix() {
        assert_eq!(CabinetKind::from_id(&CabinetId::new("BC-001")), CabinetKind::Base);
        assert_eq!(CabinetKind::from_id(&CabinetId::new("WC-002")), CabinetKind::Wall);
        assert_eq!(CabinetKind::from_id(&CabinetId::new("TU-001")), CabinetKind::Tall);
    }

    #[test]
    fn part_dimensions_display() {
        let dims = PartDimensions {
            length: 720,
            width: 560,
            thickness: 18,
        };
        assert_eq!(dims.to_string(), "720×560×18");
    }

    #[test]
    fn part_count_sums_quantities() {
        let record: ManufacturingRecord = serde_json::from_str(
            r#"{
                "id": "BC-001",
                "name": "Sink Base",
                "dimensions": {"width": 900, "depth": 560, "height": 720},
                "components": [
                    {
                        "id": "P1", "name": "Side Panel",
                        "material": "18mm BWP", "finish": "Laminate",
                        "dimensions": {"length": 720, "width": 560, "thickness": 18},
                        "quantity": 2, "edgeBanding": ["front"]
                    },
                    {
                        "id": "P2", "name": "Bottom",
                        "material": "18mm BWP", "finish": "Laminate",
                        "dimensions": {"length": 864, "width": 560, "thickness": 18},
                        "quantity": 1
                    }
                ],
                "hafeleHardware": []
            }"#,
        )
        .unwrap();
        assert_eq!(record.part_count(), 3);
        assert_eq!(record.kind(), CabinetKind::Base);
        assert!(record.cut_list.is_empty());
    }
}
