//! The dashboard facade
//!
//! Wires the fixture store, the session state and the view renderer
//! together behind one type:
//! 1. load + validate fixtures
//! 2. dispatch actions against the current snapshot
//! 3. re-render the view model for whatever is now selected
//!
//! Rendering happens on every successful dispatch, mirroring the
//! interaction → state → re-render loop of the pages.

pub mod fixtures;

use chrono::Utc;
use disha_export::{ManufacturingPackage, ProgressReport};
use disha_model::{CabinetId, DataStore, StoreError};
use disha_state::{breadcrumb, Action, ActionError, Crumb, DashboardState};
use disha_view::{render, ViewModel};

/// One dashboard session over the embedded fixtures
#[derive(Debug)]
pub struct Dashboard {
    store: DataStore,
    state: DashboardState,
}

/// A cabinet's full export bundle
#[derive(Debug, Clone)]
pub struct CabinetExport {
    /// Manufacturing package snapshot
    pub package: ManufacturingPackage,
    /// Parts schedule CSV
    pub parts_csv: String,
    /// Hardware schedule CSV
    pub hardware_csv: String,
}

impl Dashboard {
    /// Load fixtures and open the session on the default option
    pub fn open() -> Result<Self, StoreError> {
        let store = fixtures::load()?;
        let state = DashboardState::initial(&store);
        Ok(Self { store, state })
    }

    /// Open a session over a caller-provided store
    #[must_use]
    pub fn with_store(store: DataStore) -> Self {
        let state = DashboardState::initial(&store);
        Self { store, state }
    }

    /// The validated store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &DataStore {
        &self.store
    }

    /// The current snapshot
    #[inline]
    #[must_use]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Dispatch one action; on success the session advances to the new
    /// snapshot, on failure it stays where it was
    pub fn dispatch(&mut self, action: Action) -> Result<(), ActionError> {
        self.state = self.state.dispatch(&self.store, action)?;
        Ok(())
    }

    /// Render the page for the current selection
    #[must_use]
    pub fn view(&self) -> ViewModel {
        render(&self.state.selection, &self.store)
    }

    /// Breadcrumb for the current selection
    #[must_use]
    pub fn breadcrumb(&self) -> Vec<Crumb> {
        breadcrumb(&self.state.selection, &self.store)
    }

    /// Export bundle for a cabinet of the currently selected option
    ///
    /// `None` when the cabinet has no manufacturing record in the
    /// current option's scope.
    #[must_use]
    pub fn export_cabinet(&self, cabinet: &CabinetId) -> Option<CabinetExport> {
        let option = &self.state.selection.option;
        let record = self.store.manufacturing(option, cabinet)?;
        Some(CabinetExport {
            package: ManufacturingPackage::build(record, option, Utc::now()),
            parts_csv: ManufacturingPackage::parts_csv(record),
            hardware_csv: ManufacturingPackage::hardware_csv(record),
        })
    }

    /// Progress report over the current checklist
    #[must_use]
    pub fn progress_report(&self, project_id: Option<&str>, client: Option<&str>) -> ProgressReport {
        ProgressReport::build(&self.state.checklist, project_id, client, Utc::now())
    }
}
