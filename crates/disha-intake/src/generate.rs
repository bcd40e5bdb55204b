//! Project-config generation
//!
//! A one-shot transformation of the captured requirements into the
//! project JSON the workflow pages consume. The heuristics are fixed
//! formulas, not estimates: timeline weeks and budget fractions come
//! straight from the studio's planning rules.

use crate::form::{RequirementsForm, ValidationIssue};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Generated project configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Generated id (`DISHA-<epoch millis>`)
    pub project_id: String,
    /// Generation timestamp
    pub created_at: DateTime<Utc>,
    /// Pipeline status tag
    pub status: String,
    /// Workflow phase tag
    pub phase: String,
    /// The captured form, embedded verbatim
    #[serde(flatten)]
    pub form: RequirementsForm,
    /// Derived zone recommendations
    pub recommended_zones: Vec<RecommendedZone>,
    /// Derived timeline estimate
    pub estimated_timeline: TimelineEstimate,
    /// Derived budget breakdown
    pub preliminary_budget: PreliminaryBudget,
    /// Derived design constraints
    pub design_constraints: DesignConstraints,
}

/// One recommended zone
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedZone {
    /// Zone id (`zone-cooking`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Priority carried over from the form
    pub priority: String,
    /// Estimated run length in millimetres
    pub estimated_length: u32,
    /// Suggested cabinet ids
    pub cabinets: Vec<String>,
}

/// Timeline estimate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEstimate {
    /// Range label (`8-10 weeks`)
    pub estimated: String,
    /// Fixed phase breakdown
    pub breakdown: IndexMap<String, String>,
}

/// Preliminary budget breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreliminaryBudget {
    /// Base estimate in rupees: tier rate × area
    pub estimated: u64,
    /// Category fractions of the base estimate
    pub breakdown: IndexMap<String, u64>,
    /// Confidence tag, always `preliminary`
    pub confidence: String,
}

/// Derived design constraints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignConstraints {
    /// Ceiling height minus 450mm service gap
    pub max_cabinet_height: u32,
    /// Keep the work triangle
    pub work_triangle_required: bool,
    /// Accessibility compliance
    pub accessibility_compliance: bool,
    /// Child safety features
    pub child_safety_features: bool,
    /// Hard budget ceiling in rupees
    pub budget_ceiling: u64,
    /// Style label
    pub style_guidelines: String,
}

impl ProjectConfig {
    /// Generate the config; fails with the validation list when required
    /// fields are missing
    pub fn generate(
        form: &RequirementsForm,
        generated_at: DateTime<Utc>,
    ) -> Result<Self, Vec<ValidationIssue>> {
        let issues = form.validate();
        if !issues.is_empty() {
            return Err(issues);
        }

        Ok(Self {
            project_id: format!("DISHA-{}", generated_at.timestamp_millis()),
            created_at: generated_at,
            status: "requirements-captured".to_string(),
            phase: "requirement".to_string(),
            form: form.clone(),
            recommended_zones: recommended_zones(form),
            estimated_timeline: estimate_timeline(form),
            preliminary_budget: preliminary_budget(form),
            design_constraints: DesignConstraints {
                max_cabinet_height: form.space_info.ceiling_height.saturating_sub(450),
                work_triangle_required: form.special.work_triangle,
                accessibility_compliance: form.special.accessibility,
                child_safety_features: form.special.child_safety,
                budget_ceiling: form.budget.max_budget,
                style_guidelines: form.design.style.clone(),
            },
        })
    }
}

fn recommended_zones(form: &RequirementsForm) -> Vec<RecommendedZone> {
    let mut zones = Vec::new();
    let required = |key: &str| {
        form.zones
            .get(key)
            .filter(|z| z.required)
            .map(|z| z.priority.clone())
    };

    if let Some(priority) = required("cooking") {
        zones.push(RecommendedZone {
            id: "zone-cooking".to_string(),
            name: "Cooking & Prep Zone".to_string(),
            priority,
            estimated_length: 3000,
            cabinets: vec!["BC-hob".to_string(), "BC-prep".to_string(), "WC-storage".to_string()],
        });
    }
    if let Some(priority) = required("storage") {
        zones.push(RecommendedZone {
            id: "zone-storage".to_string(),
            name: "Storage & Pantry Zone".to_string(),
            priority,
            estimated_length: 1800,
            cabinets: vec!["TU-pantry".to_string(), "TU-storage".to_string()],
        });
    }
    if let Some(priority) = required("breakfast") {
        zones.push(RecommendedZone {
            id: "zone-breakfast".to_string(),
            name: "Breakfast Counter".to_string(),
            priority,
            estimated_length: 1200,
            cabinets: vec!["BC-breakfast".to_string()],
        });
    }
    zones
}

fn estimate_timeline(form: &RequirementsForm) -> TimelineEstimate {
    let mut weeks = 6u32;
    if form.space_info.total_area > 150 {
        weeks += 2;
    }
    if form.new_appliances.len() > 5 {
        weeks += 1;
    }
    if form.special.smart_features {
        weeks += 1;
    }
    if form.budget.range == crate::form::BudgetTier::Premium {
        weeks += 2;
    }

    let mut breakdown = IndexMap::new();
    breakdown.insert("design".to_string(), "1-2 weeks".to_string());
    breakdown.insert("approval".to_string(), "3-5 days".to_string());
    breakdown.insert("procurement".to_string(), "2-3 weeks".to_string());
    breakdown.insert("manufacturing".to_string(), "2-3 weeks".to_string());
    breakdown.insert("installation".to_string(), "1 week".to_string());

    TimelineEstimate {
        estimated: format!("{weeks}-{} weeks", weeks + 2),
        breakdown,
    }
}

fn preliminary_budget(form: &RequirementsForm) -> PreliminaryBudget {
    let area = if form.space_info.total_area == 0 {
        100
    } else {
        u64::from(form.space_info.total_area)
    };
    let base = form.budget.range.base_rate() * area;

    let fraction = |percent: u64| base * percent / 100;
    let mut breakdown = IndexMap::new();
    breakdown.insert("cabinets".to_string(), fraction(45));
    breakdown.insert("countertop".to_string(), fraction(20));
    breakdown.insert("appliances".to_string(), fraction(20));
    breakdown.insert("hardware".to_string(), fraction(10));
    breakdown.insert("labor".to_string(), fraction(15));

    PreliminaryBudget {
        estimated: base,
        breakdown,
        confidence: "preliminary".to_string(),
    }
}
