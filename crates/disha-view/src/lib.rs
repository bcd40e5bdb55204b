//! View rendering for the DISHA dashboard
//!
//! `render(selection, store)` is a pure mapping from the current
//! selection plus the data store to a serializable [`ViewModel`]. It has
//! no error states of its own: a selection whose referenced entity has
//! gone missing renders a placeholder, never a failure.

pub mod cabinet;
pub mod overview;
pub mod zone;

pub use cabinet::{CabinetTab, CabinetView};
pub use overview::{OptionCard, OverviewView, ZoneMapEntry};
pub use zone::{CabinetListEntry, ZoneView};

use disha_model::DataStore;
use disha_state::SelectionState;
use serde::{Deserialize, Serialize};

/// The rendered page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum ViewModel {
    /// Project overview
    Overview(OverviewView),
    /// Zone detail
    Zone(ZoneView),
    /// Cabinet detail
    Cabinet(CabinetView),
}

/// Map the current selection to its page
///
/// Destructures the hierarchy directly so the deepest non-null selection
/// always decides the page, matching [`disha_state::ViewLevel`].
#[must_use]
pub fn render(selection: &SelectionState, store: &DataStore) -> ViewModel {
    match (&selection.zone, &selection.cabinet) {
        (None, _) => ViewModel::Overview(overview::render(selection, store)),
        (Some(zone_id), None) => ViewModel::Zone(zone::render(&selection.option, zone_id, store)),
        (Some(zone_id), Some(cabinet_id)) => {
            ViewModel::Cabinet(cabinet::render(&selection.option, zone_id, cabinet_id, store))
        }
    }
}
