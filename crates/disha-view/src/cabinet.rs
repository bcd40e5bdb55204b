//! Cabinet detail page
//!
//! Tabbed panels over the manufacturing record: overview, parts,
//! hardware, cut list, assembly. A cabinet id with no record renders a
//! placeholder with the tabs empty.

use disha_model::{CabinetId, CabinetKind, DataStore, ManufacturingRecord, OptionId, ZoneId};
use serde::{Deserialize, Serialize};

/// Tabs of the cabinet detail page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CabinetTab {
    /// Summary panel
    Overview,
    /// Part list
    Parts,
    /// Hafele hardware schedule
    Hardware,
    /// Cut list
    CutList,
    /// Assembly steps
    Assembly,
}

impl CabinetTab {
    /// Tabs in display order
    pub const ALL: [CabinetTab; 5] = [
        CabinetTab::Overview,
        CabinetTab::Parts,
        CabinetTab::Hardware,
        CabinetTab::CutList,
        CabinetTab::Assembly,
    ];
}

/// Cabinet page model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinetView {
    /// Cabinet id
    pub id: CabinetId,
    /// Kind derived from the id prefix
    pub kind: CabinetKind,
    /// Owning zone
    pub zone: ZoneId,
    /// The manufacturing record, when one exists
    pub record: Option<ManufacturingRecord>,
}

impl CabinetView {
    /// Whether the record resolved
    #[inline]
    #[must_use]
    pub fn resolved(&self) -> bool {
        self.record.is_some()
    }

    /// Row count shown on a tab (placeholder tabs are all empty)
    #[must_use]
    pub fn tab_len(&self, tab: CabinetTab) -> usize {
        let Some(record) = &self.record else {
            return 0;
        };
        match tab {
            CabinetTab::Overview => 1,
            CabinetTab::Parts => record.components.len(),
            CabinetTab::Hardware => record.hafele_hardware.len(),
            CabinetTab::CutList => record.cut_list.len(),
            CabinetTab::Assembly => record.assembly_steps.len(),
        }
    }
}

pub(crate) fn render(
    option: &OptionId,
    zone_id: &ZoneId,
    cabinet_id: &CabinetId,
    store: &DataStore,
) -> CabinetView {
    CabinetView {
        id: cabinet_id.clone(),
        kind: CabinetKind::from_id(cabinet_id),
        zone: zone_id.clone(),
        record: store.manufacturing(option, cabinet_id).cloned(),
    }
}
