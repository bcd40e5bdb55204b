//! Reducer-style dashboard state
//!
//! The original kept one large mutable object edited through nested
//! cloning in event handlers. Here every user interaction is a tagged
//! [`Action`] dispatched through a pure reducer that returns a fresh
//! [`DashboardState`] snapshot; the previous snapshot is never touched.

use crate::checklist::Checklist;
use crate::defaults::design_workflow_checklist;
use crate::external::{ExternalProject, ProjectLoadError};
use crate::selection::{NavError, SelectionState};
use disha_model::{CabinetId, DataStore, OptionId, PhaseId, ZoneId};

/// A user interaction, as data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Switch the selected design option
    SelectOption(OptionId),
    /// Select a zone of the current option
    SelectZone(ZoneId),
    /// Select a cabinet of the current zone
    SelectCabinet(CabinetId),
    /// Leave cabinet detail for the zone view
    BackToZone,
    /// Leave any view for the overview
    BackToOverview,
    /// Flip one checklist item
    ToggleItem {
        /// Owning phase
        phase: PhaseId,
        /// Section index within the phase
        section: usize,
        /// Item index within the section
        item: usize,
    },
    /// Load an uploaded project-config blob
    LoadExternalProject(String),
}

/// Errors surfaced by dispatch
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// Navigation rejected
    #[error(transparent)]
    Nav(#[from] NavError),

    /// Uploaded project config rejected
    #[error(transparent)]
    Project(#[from] ProjectLoadError),
}

/// One immutable snapshot of everything the session mutates
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Current navigation selection
    pub selection: SelectionState,
    /// Current checklist tree
    pub checklist: Checklist,
}

impl DashboardState {
    /// Initial snapshot: default option selected, pristine checklist
    #[must_use]
    pub fn initial(store: &DataStore) -> Self {
        Self {
            selection: SelectionState::initial(store),
            checklist: design_workflow_checklist(),
        }
    }

    /// Apply one action, producing the next snapshot
    ///
    /// Rejected actions leave no partial effect; the caller keeps the
    /// current snapshot and reports the error.
    pub fn dispatch(&self, store: &DataStore, action: Action) -> Result<Self, ActionError> {
        tracing::debug!(?action, "dispatch");
        let next = match action {
            Action::SelectOption(id) => Self {
                selection: self.selection.select_option(store, id)?,
                checklist: self.checklist.clone(),
            },
            Action::SelectZone(id) => Self {
                selection: self.selection.select_zone(store, id)?,
                checklist: self.checklist.clone(),
            },
            Action::SelectCabinet(id) => Self {
                selection: self.selection.select_cabinet(store, id)?,
                checklist: self.checklist.clone(),
            },
            Action::BackToZone => Self {
                selection: self.selection.back_to_zone()?,
                checklist: self.checklist.clone(),
            },
            Action::BackToOverview => Self {
                selection: self.selection.back_to_overview(),
                checklist: self.checklist.clone(),
            },
            Action::ToggleItem { phase, section, item } => Self {
                selection: self.selection.clone(),
                checklist: self.checklist.toggle_item(&phase, section, item),
            },
            Action::LoadExternalProject(blob) => {
                let project = ExternalProject::parse(&blob)?;
                Self {
                    selection: self.selection.clone(),
                    checklist: project.apply_to(&self.checklist),
                }
            }
        };
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::ViewLevel;

    // Dispatch against a real store is covered in tests/navigation.rs;
    // the checklist-only actions need no store contents.

    #[test]
    fn toggle_action_updates_checklist_only() {
        let store = DataStore::default();
        let state = DashboardState {
            selection: SelectionState {
                option: OptionId::new("option-b"),
                zone: None,
                cabinet: None,
            },
            checklist: design_workflow_checklist(),
        };

        let next = state
            .dispatch(
                &store,
                Action::ToggleItem {
                    phase: PhaseId::new("concept"),
                    section: 0,
                    item: 0,
                },
            )
            .unwrap();

        assert!(next.checklist.phases[0].steps[0].items[0].completed);
        assert_eq!(next.selection, state.selection);
        // The input snapshot is untouched.
        assert!(!state.checklist.phases[0].steps[0].items[0].completed);
    }

    #[test]
    fn bad_project_blob_is_reported_not_applied() {
        let store = DataStore::default();
        let state = DashboardState {
            selection: SelectionState {
                option: OptionId::new("option-b"),
                zone: None,
                cabinet: None,
            },
            checklist: design_workflow_checklist(),
        };
        let err = state
            .dispatch(&store, Action::LoadExternalProject("{broken".to_string()))
            .unwrap_err();
        assert!(matches!(err, ActionError::Project(_)));
        assert_eq!(state.checklist.overall_progress(), 0);
    }

    #[test]
    fn back_to_overview_always_succeeds() {
        let store = DataStore::default();
        let state = DashboardState {
            selection: SelectionState {
                option: OptionId::new("option-b"),
                zone: Some(ZoneId::new("zone-a")),
                cabinet: Some(CabinetId::new("BC-001")),
            },
            checklist: design_workflow_checklist(),
        };
        let next = state.dispatch(&store, Action::BackToOverview).unwrap();
        assert_eq!(next.selection.view(), ViewLevel::Overview);
    }
}
