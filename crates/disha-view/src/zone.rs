//! Zone detail page
//!
//! Zone metrics, the cabinet list (with whatever the manufacturing map
//! knows about each cabinet), utilities and the BOQ breakdown.

use disha_model::{format_lakhs, CabinetId, CabinetKind, DataStore, OptionId, Utilities, ZoneId};
use serde::{Deserialize, Serialize};

/// Zone page model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneView {
    /// Zone id
    pub id: ZoneId,
    /// Display name; falls back to the raw id when unresolved
    pub name: String,
    /// Short description
    pub description: String,
    /// Location line
    pub location: String,
    /// Dimension label (`3000mm × 600mm × 2400mm`)
    pub dimensions: String,
    /// Zone BOQ total, lakh-formatted
    pub total: String,
    /// Category -> thousand-formatted amount, presentation order
    pub boq: Vec<(String, String)>,
    /// Cabinets in the zone
    pub cabinets: Vec<CabinetListEntry>,
    /// Utility points
    pub utilities: Utilities,
    /// Key measurements (`label` -> `850mm`)
    pub measurements: Vec<(String, String)>,
    /// Whether the referenced zone existed in the store
    pub resolved: bool,
}

/// One cabinet row in the zone's list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinetListEntry {
    /// Cabinet id
    pub id: CabinetId,
    /// Kind derived from the id prefix
    pub kind: CabinetKind,
    /// Record name, when the manufacturing map has one
    pub name: Option<String>,
    /// Dimension label from the record (`900×560×720mm`)
    pub dimensions: Option<String>,
}

pub(crate) fn render(option: &OptionId, zone_id: &ZoneId, store: &DataStore) -> ZoneView {
    let Some(zone) = store.zone(option, zone_id) else {
        // Guard-clause placeholder, mirroring the empty panel the page
        // shows for a stale reference.
        return ZoneView {
            id: zone_id.clone(),
            name: zone_id.to_string(),
            description: String::new(),
            location: String::new(),
            dimensions: String::new(),
            total: String::new(),
            boq: Vec::new(),
            cabinets: Vec::new(),
            utilities: Utilities::default(),
            measurements: Vec::new(),
            resolved: false,
        };
    };

    let cabinets = zone
        .cabinets
        .iter()
        .map(|id| {
            let record = store.manufacturing(option, id);
            CabinetListEntry {
                id: id.clone(),
                kind: CabinetKind::from_id(id),
                name: record.map(|r| r.name.clone()),
                dimensions: record.map(|r| {
                    format!(
                        "{}×{}×{}mm",
                        r.dimensions.width, r.dimensions.depth, r.dimensions.height
                    )
                }),
            }
        })
        .collect();

    ZoneView {
        id: zone.id.clone(),
        name: zone.name.clone(),
        description: zone.description.clone(),
        location: zone.location.clone(),
        dimensions: format!(
            "{}mm × {}mm × {}mm",
            zone.dimensions.width, zone.dimensions.depth, zone.dimensions.wall_height
        ),
        total: format_lakhs(zone.boq.total),
        boq: zone
            .boq
            .categories
            .iter()
            .map(|(category, amount)| {
                (category.clone(), format!("₹{:.1}K", *amount as f64 / 1000.0))
            })
            .collect(),
        cabinets,
        utilities: zone.utilities.clone(),
        measurements: zone
            .measurements
            .iter()
            .map(|(label, mm)| (label.clone(), format!("{mm}mm")))
            .collect(),
        resolved: true,
    }
}
