//! Progress report export
//!
//! The downloadable snapshot of the workflow checklist: project and
//! client identity, report timestamp, the full checklist tree and the
//! overall percentage. Identity fields that were never captured export
//! as `N/A`, matching the page behaviour.

use chrono::{DateTime, Utc};
use disha_state::Checklist;
use serde::{Deserialize, Serialize};

/// Downloadable progress report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    /// Project id, `N/A` when no capture was loaded
    pub project_id: String,
    /// Client name, `N/A` when no capture was loaded
    pub client_name: String,
    /// When the report was produced
    pub report_date: DateTime<Utc>,
    /// The full checklist tree
    pub checklist: Checklist,
    /// Unweighted mean of phase percentages
    pub overall_progress: u8,
}

impl ProgressReport {
    /// Build a report from the current checklist
    #[must_use]
    pub fn build(
        checklist: &Checklist,
        project_id: Option<&str>,
        client_name: Option<&str>,
        report_date: DateTime<Utc>,
    ) -> Self {
        Self {
            project_id: project_id.unwrap_or("N/A").to_string(),
            client_name: client_name.unwrap_or("N/A").to_string(),
            report_date,
            overall_progress: checklist.overall_progress(),
            checklist: checklist.clone(),
        }
    }

    /// Suggested download filename (`design-progress-<epoch millis>.json`)
    #[must_use]
    pub fn filename(&self) -> String {
        format!("design-progress-{}.json", self.report_date.timestamp_millis())
    }

    /// Pretty-printed JSON document
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use disha_model::PhaseId;
    use disha_state::defaults::design_workflow_checklist;

    fn report_date() -> DateTime<Utc> {
        "2025-02-03T10:00:00Z".parse().unwrap()
    }

    #[test]
    fn uncaptured_identity_exports_as_na() {
        let report = ProgressReport::build(&design_workflow_checklist(), None, None, report_date());
        assert_eq!(report.project_id, "N/A");
        assert_eq!(report.client_name, "N/A");
        assert_eq!(report.overall_progress, 0);
    }

    #[test]
    fn report_reflects_checklist_state() {
        let list = design_workflow_checklist().toggle_item(&PhaseId::new("concept"), 0, 0);
        let report = ProgressReport::build(
            &list,
            Some("DISHA-1736899200000"),
            Some("Neeru Tiwary"),
            report_date(),
        );
        let json = report.to_json().unwrap();
        assert!(json.contains("\"projectId\": \"DISHA-1736899200000\""));
        assert!(json.contains("\"clientName\": \"Neeru Tiwary\""));
        assert!(json.contains("\"completed\": true"));
    }

    #[test]
    fn filename_embeds_epoch_millis() {
        let report = ProgressReport::build(&design_workflow_checklist(), None, None, report_date());
        assert_eq!(report.filename(), "design-progress-1738576800000.json");
    }
}
