//! Project overview page
//!
//! An option summary grid (filterable by status), project-level metrics
//! and the zone-map panel for the selected option.

use disha_model::{format_lakhs, DataStore, OptionId, OptionStatus, ZoneId};
use disha_state::SelectionState;
use serde::{Deserialize, Serialize};

/// Overview page model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewView {
    /// Project display name
    pub project_name: String,
    /// Client name
    pub client: String,
    /// Layout summary line (`L-shaped Layout • 120 sq ft`)
    pub layout_summary: String,
    /// Total investment, lakh-formatted
    pub total_investment: String,
    /// Budget utilization percentage, one decimal
    pub budget_utilization: f64,
    /// One card per design option, fixture order
    pub options: Vec<OptionCard>,
    /// Currently selected option
    pub selected: OptionId,
    /// Zone map for the selected option
    pub zone_map: Vec<ZoneMapEntry>,
    /// Total cabinets across the selected option's zones
    pub total_cabinets: usize,
    /// Average zone cost, lakh-formatted (empty when no zones)
    pub average_zone_cost: String,
    /// Embed URL of the selected option, if one is stored
    pub embed_url: Option<String>,
}

impl OverviewView {
    /// Cards matching a status filter; `None` means "All"
    #[must_use]
    pub fn filtered(&self, status: Option<OptionStatus>) -> Vec<&OptionCard> {
        self.options
            .iter()
            .filter(|card| status.map_or(true, |s| card.status == s))
            .collect()
    }
}

/// One design-option summary card
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionCard {
    /// Option id
    pub id: OptionId,
    /// Display name
    pub name: String,
    /// Review status
    pub status: OptionStatus,
    /// One-line pitch
    pub description: String,
    /// Estimated cost, lakh-formatted
    pub estimated_cost: String,
    /// Whether client feedback exists
    pub has_feedback: bool,
    /// Whether this card is the selected one
    pub selected: bool,
}

/// One zone on the overview map
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneMapEntry {
    /// Zone id
    pub id: ZoneId,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Cabinet count
    pub cabinet_count: usize,
    /// Zone BOQ total, lakh-formatted
    pub total: String,
    /// Footprint label (`3000mm × 600mm`)
    pub footprint: String,
}

pub(crate) fn render(selection: &SelectionState, store: &DataStore) -> OverviewView {
    let project = &store.project;

    let options: Vec<OptionCard> = store
        .options()
        .map(|option| OptionCard {
            id: option.id.clone(),
            name: option.name.clone(),
            status: option.status,
            description: option.description.clone(),
            estimated_cost: format_lakhs(option.estimated_cost),
            has_feedback: option.has_feedback(),
            selected: option.id == selection.option,
        })
        .collect();

    // A selection pointing at missing project data renders an empty map
    // panel rather than failing the page.
    let (zone_map, total_cabinets) = match store.project_data(&selection.option) {
        Some(data) => {
            let map = data
                .zones
                .values()
                .map(|zone| ZoneMapEntry {
                    id: zone.id.clone(),
                    name: zone.name.clone(),
                    description: zone.description.clone(),
                    cabinet_count: zone.cabinets.len(),
                    total: format_lakhs(zone.boq.total),
                    footprint: format!("{}mm × {}mm", zone.dimensions.width, zone.dimensions.depth),
                })
                .collect();
            (map, data.cabinet_count())
        }
        None => (Vec::new(), 0),
    };

    let average_zone_cost = if zone_map.is_empty() {
        String::new()
    } else {
        format_lakhs(project.total_cost / zone_map.len() as u64)
    };

    let embed_url = store
        .option(&selection.option)
        .and_then(|o| o.embed_url.clone());

    OverviewView {
        project_name: project.name.clone(),
        client: project.client.clone(),
        layout_summary: format!("{} Layout • {} sq ft", project.layout_type, project.total_area),
        total_investment: format_lakhs(project.total_cost),
        budget_utilization: project.budget.utilization_percent(),
        options,
        selected: selection.option.clone(),
        zone_map,
        total_cabinets,
        average_zone_cost,
        embed_url,
    }
}
