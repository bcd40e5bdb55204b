//! External project-config intake
//!
//! A requirements capture produces a project-config JSON which the
//! workflow page can load to pre-mark checklist steps already satisfied
//! by the captured data. Parsing failures are surfaced to the user and
//! are never fatal; beyond the try-parse there is deliberately no schema
//! validation.

use crate::checklist::Checklist;
use disha_model::PhaseId;
use serde::{Deserialize, Serialize};

/// The slice of an uploaded project config the checklist cares about
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalProject {
    /// Generated project id (`DISHA-...`)
    #[serde(default)]
    pub project_id: Option<String>,
    /// Client block
    #[serde(default)]
    pub client_info: Option<ClientInfo>,
    /// Space block
    #[serde(default)]
    pub space_info: Option<SpaceInfo>,
}

/// Client identity fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Client name
    #[serde(default)]
    pub name: Option<String>,
}

/// Space capture fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceInfo {
    /// Layout type label
    #[serde(default)]
    pub layout_type: Option<String>,
    /// Total area in square feet
    #[serde(default)]
    pub total_area: Option<f64>,
    /// Whether a floor plan was supplied with the requirements
    #[serde(default)]
    pub floor_plan_available: bool,
}

/// Failure to load an uploaded project config
#[derive(Debug, thiserror::Error)]
pub enum ProjectLoadError {
    /// The blob was not valid JSON of the expected shape
    #[error("invalid project file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ExternalProject {
    /// Parse an uploaded JSON blob
    pub fn parse(blob: &str) -> Result<Self, ProjectLoadError> {
        let project = serde_json::from_str(blob)?;
        Ok(project)
    }

    /// Client display name, if captured
    #[inline]
    #[must_use]
    pub fn client_name(&self) -> Option<&str> {
        self.client_info.as_ref()?.name.as_deref()
    }

    /// Pre-mark checklist steps this capture already satisfies
    ///
    /// A supplied floor plan satisfies the first Concept requirement
    /// ("Review client requirements file"); the roll-ups are recomputed
    /// through the normal toggle path. Applying the same capture twice
    /// does not un-mark anything.
    #[must_use]
    pub fn apply_to(&self, checklist: &Checklist) -> Checklist {
        let floor_plan = self
            .space_info
            .as_ref()
            .is_some_and(|s| s.floor_plan_available);
        if !floor_plan {
            return checklist.clone();
        }

        let concept = PhaseId::new("concept");
        let Some(phase) = checklist.phase(&concept) else {
            return checklist.clone();
        };
        if phase.steps[0].items[0].completed {
            return checklist.clone();
        }

        tracing::info!("project capture includes a floor plan; marking requirements review done");
        checklist.toggle_item(&concept, 0, 0)
    }
}
