//! The requirements form and its presence validation

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Structured requirements as captured from the client
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementsForm {
    /// Client identity
    pub client_info: ClientInfo,
    /// Space capture
    pub space_info: SpaceInfo,
    /// Required zones keyed by zone key (`cooking`, `storage`, ...)
    #[serde(default)]
    pub zones: IndexMap<String, ZoneRequirement>,
    /// Newly purchased appliances
    #[serde(default)]
    pub new_appliances: Vec<String>,
    /// Budget block
    pub budget: BudgetInfo,
    /// Design preferences
    #[serde(default)]
    pub design: DesignPreferences,
    /// Special requirement flags
    #[serde(default)]
    pub special: SpecialRequirements,
}

/// Client identity fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    /// Full name (required)
    pub name: String,
    /// Email (required)
    pub email: String,
    /// Phone, free-form
    #[serde(default)]
    pub phone: String,
    /// City
    #[serde(default)]
    pub city: String,
}

/// Space capture fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceInfo {
    /// Layout type label (`L-shaped`, `U-shaped`, ...)
    pub layout_type: String,
    /// Total area in square feet; zero means "not entered"
    pub total_area: u32,
    /// Ceiling height in millimetres
    pub ceiling_height: u32,
    /// Whether this is a renovation of an existing kitchen
    #[serde(default)]
    pub existing_kitchen: bool,
    /// Whether a floor plan was supplied
    #[serde(default)]
    pub floor_plan_available: bool,
}

impl Default for SpaceInfo {
    fn default() -> Self {
        Self {
            layout_type: "L-shaped".to_string(),
            total_area: 0,
            ceiling_height: 2700,
            existing_kitchen: false,
            floor_plan_available: false,
        }
    }
}

/// One required-zone flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneRequirement {
    /// Whether the zone is required
    pub required: bool,
    /// Priority label (`high`, `medium`, `low`)
    pub priority: String,
}

/// Budget block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetInfo {
    /// Budget tier
    pub range: BudgetTier,
    /// Maximum budget in rupees; zero means "not entered"
    pub max_budget: u64,
}

/// Budget tier, driving the per-square-foot base rate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    /// Under ₹6 lakhs
    Budget,
    /// ₹6-12 lakhs
    #[default]
    Mid,
    /// Over ₹12 lakhs
    Premium,
}

impl BudgetTier {
    /// Base rate in rupees per square foot
    #[inline]
    #[must_use]
    pub fn base_rate(&self) -> u64 {
        match self {
            BudgetTier::Budget => 5_000,
            BudgetTier::Mid => 7_500,
            BudgetTier::Premium => 10_000,
        }
    }
}

/// Design preference fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignPreferences {
    /// Style label (`contemporary`, `modern`, ...)
    pub style: String,
    /// Cabinet finish
    pub cabinet_finish: String,
    /// Countertop material
    pub countertop: String,
}

impl Default for DesignPreferences {
    fn default() -> Self {
        Self {
            style: "contemporary".to_string(),
            cabinet_finish: "laminate".to_string(),
            countertop: "quartz".to_string(),
        }
    }
}

/// Special requirement flags
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialRequirements {
    /// Accessibility compliance needed
    pub accessibility: bool,
    /// Child safety features needed
    pub child_safety: bool,
    /// Smart features requested
    pub smart_features: bool,
    /// Keep the work triangle constraint
    pub work_triangle: bool,
}

impl Default for SpecialRequirements {
    fn default() -> Self {
        Self {
            accessibility: false,
            child_safety: false,
            smart_features: false,
            work_triangle: true,
        }
    }
}

/// One validation failure, shown in the form's error list
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum ValidationIssue {
    /// Client name missing
    #[error("Client name is required")]
    MissingName,
    /// Client email missing
    #[error("Client email is required")]
    MissingEmail,
    /// Kitchen area missing
    #[error("Kitchen area is required")]
    MissingArea,
    /// Budget missing
    #[error("Budget range is required")]
    MissingBudget,
}

impl RequirementsForm {
    /// Presence checks over the required fields
    ///
    /// Returns the full list of failures; an empty list means the form
    /// can generate a project config. The form stays editable either
    /// way — validation is advisory, never fatal.
    #[must_use]
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if self.client_info.name.trim().is_empty() {
            issues.push(ValidationIssue::MissingName);
        }
        if self.client_info.email.trim().is_empty() {
            issues.push(ValidationIssue::MissingEmail);
        }
        if self.space_info.total_area == 0 {
            issues.push(ValidationIssue::MissingArea);
        }
        if self.budget.max_budget == 0 {
            issues.push(ValidationIssue::MissingBudget);
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_reports_all_required_fields() {
        let issues = RequirementsForm::default().validate();
        assert_eq!(
            issues,
            vec![
                ValidationIssue::MissingName,
                ValidationIssue::MissingEmail,
                ValidationIssue::MissingArea,
                ValidationIssue::MissingBudget,
            ]
        );
    }

    #[test]
    fn filled_form_validates_clean() {
        let mut form = RequirementsForm::default();
        form.client_info.name = "Neeru Tiwary".to_string();
        form.client_info.email = "neeru@example.com".to_string();
        form.space_info.total_area = 120;
        form.budget.max_budget = 1_000_000;
        assert!(form.validate().is_empty());
    }

    #[test]
    fn whitespace_name_is_still_missing() {
        let mut form = RequirementsForm::default();
        form.client_info.name = "   ".to_string();
        assert!(form.validate().contains(&ValidationIssue::MissingName));
    }

    #[test]
    fn tier_base_rates() {
        assert_eq!(BudgetTier::Budget.base_rate(), 5_000);
        assert_eq!(BudgetTier::Mid.base_rate(), 7_500);
        assert_eq!(BudgetTier::Premium.base_rate(), 10_000);
    }
}
