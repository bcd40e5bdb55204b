//! Breadcrumb derivation
//!
//! The breadcrumb is a pure function of the selection state:
//! `[option name, zone name?, cabinet id?]`. Every non-terminal segment
//! carries the target that reproduces the corresponding ancestor state.

use crate::selection::SelectionState;
use disha_model::DataStore;
use serde::{Deserialize, Serialize};

/// One breadcrumb segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crumb {
    /// Display label
    pub label: String,
    /// Where activating this segment navigates to
    pub target: CrumbTarget,
}

/// Navigation target of a breadcrumb segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrumbTarget {
    /// Jump back to the project overview
    Overview,
    /// Jump back to the selected zone
    Zone,
    /// The current (terminal) position; activating it is a no-op
    Here,
}

/// Derive the breadcrumb for a selection
///
/// Length is always `1 + (zone? 1 : 0) + (cabinet? 1 : 0)`. Ids that no
/// longer resolve fall back to their raw string so the trail stays
/// renderable.
#[must_use]
pub fn breadcrumb(state: &SelectionState, store: &DataStore) -> Vec<Crumb> {
    let mut trail = Vec::with_capacity(3);

    let option_label = store
        .option(&state.option)
        .map_or_else(|| state.option.to_string(), |o| o.name.clone());
    trail.push(Crumb {
        label: option_label,
        target: CrumbTarget::Overview,
    });

    if let Some(zone_id) = &state.zone {
        let zone_label = store
            .zone(&state.option, zone_id)
            .map_or_else(|| zone_id.to_string(), |z| z.name.clone());
        trail.push(Crumb {
            label: zone_label,
            target: CrumbTarget::Zone,
        });
    }

    if let Some(cabinet_id) = &state.cabinet {
        trail.push(Crumb {
            label: cabinet_id.to_string(),
            target: CrumbTarget::Here,
        });
    }

    // The deepest segment is always the current position.
    if let Some(last) = trail.last_mut() {
        last.target = CrumbTarget::Here;
    }

    trail
}
