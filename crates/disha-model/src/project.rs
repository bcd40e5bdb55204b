//! Project, budget and timeline documents

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Top-level project record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    /// Project display name
    pub name: String,
    /// Client name
    pub client: String,
    /// Kitchen layout type (`L-shaped`, `U-shaped`, ...)
    pub layout_type: String,
    /// Total area in square feet
    pub total_area: u32,
    /// Total investment in rupees
    pub total_cost: u64,
    /// Human timeline summary (`8-10 weeks`)
    pub timeline: String,
    /// Budget position
    pub budget: Budget,
}

/// Budget position in rupees
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Budget {
    /// Approved total
    pub approved: u64,
    /// Spent so far
    pub spent: u64,
    /// Remaining allocation
    pub pending: u64,
}

impl Budget {
    /// Spent as a percentage of approved, one decimal place
    ///
    /// `approved = 1_000_000, spent = 350_000` renders as `35.0`.
    #[must_use]
    pub fn utilization_percent(&self) -> f64 {
        if self.approved == 0 {
            return 0.0;
        }
        let raw = self.spent as f64 / self.approved as f64 * 100.0;
        (raw * 10.0).round() / 10.0
    }
}

/// Format a rupee amount in lakhs, the way every page renders money
///
/// `875_000` becomes `₹8.75L`.
#[must_use]
pub fn format_lakhs(amount: u64) -> String {
    format!("₹{:.2}L", amount as f64 / 100_000.0)
}

/// Milestone on the engagement timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineMilestone {
    /// Milestone name
    pub name: String,
    /// Scheduled start
    pub start: NaiveDate,
    /// Scheduled end
    pub end: NaiveDate,
    /// Current status
    pub status: MilestoneStatus,
}

impl TimelineMilestone {
    /// Scheduled duration in whole days (end-exclusive dates round up)
    #[inline]
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Milestone status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MilestoneStatus {
    /// Finished
    Completed,
    /// Underway
    #[serde(rename = "In Progress")]
    InProgress,
    /// Not started
    Pending,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utilization_one_decimal() {
        let budget = Budget {
            approved: 1_000_000,
            spent: 350_000,
            pending: 650_000,
        };
        assert_eq!(budget.utilization_percent(), 35.0);
    }

    #[test]
    fn utilization_rounds_half_up() {
        let budget = Budget {
            approved: 800_000,
            spent: 100_000,
            pending: 700_000,
        };
        // 12.5 exactly
        assert_eq!(budget.utilization_percent(), 12.5);
    }

    #[test]
    fn utilization_zero_approved_is_zero() {
        let budget = Budget {
            approved: 0,
            spent: 0,
            pending: 0,
        };
        assert_eq!(budget.utilization_percent(), 0.0);
    }

    #[test]
    fn lakhs_formatting() {
        assert_eq!(format_lakhs(875_000), "₹8.75L");
        assert_eq!(format_lakhs(1_050_000), "₹10.50L");
    }

    #[test]
    fn milestone_duration() {
        let m = TimelineMilestone {
            name: "Material Procurement".to_string(),
            start: NaiveDate::from_ymd_opt(2025, 1, 22).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 1, 29).unwrap(),
            status: MilestoneStatus::InProgress,
        };
        assert_eq!(m.duration_days(), 7);
    }

    #[test]
    fn milestone_status_serde_names() {
        let json = serde_json::to_string(&MilestoneStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
    }
}
