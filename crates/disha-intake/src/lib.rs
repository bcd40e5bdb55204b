//! Requirements capture
//!
//! A client-side form collects structured requirements; from it a
//! project-config document is generated with a recommended-zones list, a
//! timeline estimate and a preliminary budget breakdown, all via fixed
//! heuristic formulas. Only presence of client name, email, area and
//! budget is validated — everything else is taken as entered.

pub mod form;
pub mod generate;

pub use form::{BudgetTier, RequirementsForm, ValidationIssue, ZoneRequirement};
pub use generate::{ProjectConfig, RecommendedZone};
