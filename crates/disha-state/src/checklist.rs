//! Design-workflow checklist and progress aggregation
//!
//! A three-level tree: phase → section → item. Leaves carry the only
//! mutable bit (`completed`); section and phase percentages are cached
//! roll-ups recomputed on every toggle and never writable on their own.
//!
//! The weighting rules are deliberate and asymmetric:
//! - section → phase roll-up is weighted by item count (a one-item
//!   section must not count as much as a ten-item section), while
//! - phase → overall is an unweighted mean of phase percentages,
//!   matching the observed product behaviour. See DESIGN.md before
//!   "fixing" the latter.

use disha_model::PhaseId;
use serde::{Deserialize, Serialize};

/// Priority of a checklist item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Blocks the phase outright
    Critical,
    /// Should not slip
    High,
    /// Normal
    Medium,
    /// Nice to have
    Low,
}

/// A single actionable step
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    /// Short task statement
    pub task: String,
    /// Longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Priority band
    pub priority: Priority,
    /// Expected deliverable, if the step produces one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deliverable: Option<String>,
    /// Step-by-step hint for the 3D planner tool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planner_action: Option<String>,
    /// Caution attached to the step
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// The leaf flag everything above is derived from
    pub completed: bool,
}

impl ChecklistItem {
    /// Create an incomplete item
    #[inline]
    #[must_use]
    pub fn new(task: impl Into<String>, priority: Priority) -> Self {
        Self {
            task: task.into(),
            description: None,
            priority,
            deliverable: None,
            planner_action: None,
            warning: None,
            completed: false,
        }
    }

    /// With a description
    #[inline]
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// With a deliverable
    #[inline]
    #[must_use]
    pub fn deliverable(mut self, deliverable: impl Into<String>) -> Self {
        self.deliverable = Some(deliverable.into());
        self
    }

    /// With a planner action hint
    #[inline]
    #[must_use]
    pub fn planner(mut self, action: impl Into<String>) -> Self {
        self.planner_action = Some(action.into());
        self
    }

    /// With a warning
    #[inline]
    #[must_use]
    pub fn warn(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }
}

/// A titled group of items within a phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistSection {
    /// Section title
    pub title: String,
    /// Items in order
    pub items: Vec<ChecklistItem>,
    /// Cached roll-up: `round(100 * completed / total)`
    pub progress: u8,
}

impl ChecklistSection {
    /// Create a section; the cache starts consistent with its items
    #[must_use]
    pub fn new(title: impl Into<String>, items: Vec<ChecklistItem>) -> Self {
        let mut section = Self {
            title: title.into(),
            items,
            progress: 0,
        };
        section.recompute();
        section
    }

    /// Number of completed items
    #[inline]
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|i| i.completed).count()
    }

    fn recompute(&mut self) {
        self.progress = percent(self.completed_count(), self.items.len());
    }
}

/// A workflow phase: an ordered list of sections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistPhase {
    /// Phase identifier (`concept`, `detailed`, ...)
    pub id: PhaseId,
    /// Display name
    pub name: String,
    /// What the phase is for
    pub description: String,
    /// Sections in order
    pub steps: Vec<ChecklistSection>,
    /// Cached roll-up, weighted by item count across all sections
    pub progress: u8,
}

impl ChecklistPhase {
    /// Create a phase; the cache starts consistent with its sections
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        steps: Vec<ChecklistSection>,
    ) -> Self {
        let mut phase = Self {
            id: PhaseId::new(id),
            name: name.into(),
            description: description.into(),
            steps,
            progress: 0,
        };
        phase.recompute();
        phase
    }

    /// Total item count across sections
    #[inline]
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.steps.iter().map(|s| s.items.len()).sum()
    }

    /// Completed item count across sections
    #[inline]
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.steps.iter().map(ChecklistSection::completed_count).sum()
    }

    /// Whether every item in the phase is done
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress == 100
    }

    fn recompute(&mut self) {
        // Weighted by item count, NOT a mean of section percentages.
        self.progress = percent(self.completed_count(), self.item_count());
    }
}

/// The full design-workflow checklist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checklist {
    /// Phases in workflow order
    pub phases: Vec<ChecklistPhase>,
}

impl Checklist {
    /// Build from phases
    #[inline]
    #[must_use]
    pub fn new(phases: Vec<ChecklistPhase>) -> Self {
        Self { phases }
    }

    /// Look up a phase by id
    #[inline]
    #[must_use]
    pub fn phase(&self, id: &PhaseId) -> Option<&ChecklistPhase> {
        self.phases.iter().find(|p| &p.id == id)
    }

    /// Flip one item's `completed` flag and return the updated tree
    ///
    /// Recomputes the owning section's and phase's cached progress so the
    /// roll-up invariant holds on the returned snapshot. Toggling is
    /// reversible: applying the same toggle twice round-trips both the
    /// leaf flag and every derived percentage.
    ///
    /// # Panics
    /// Unknown phase ids and out-of-range indices are programming errors
    /// against the static checklist shape, not recoverable conditions.
    #[must_use]
    pub fn toggle_item(&self, phase_id: &PhaseId, section: usize, item: usize) -> Self {
        let mut next = self.clone();
        let phase = next
            .phases
            .iter_mut()
            .find(|p| &p.id == phase_id)
            .unwrap_or_else(|| panic!("unknown checklist phase: {phase_id}"));

        let step = &mut phase.steps[section];
        step.items[item].completed = !step.items[item].completed;
        tracing::debug!(
            phase = %phase_id,
            section,
            item,
            completed = step.items[item].completed,
            "checklist item toggled"
        );

        step.recompute();
        phase.recompute();
        next
    }

    /// Overall progress: unweighted mean of the phase percentages
    ///
    /// Unlike the in-phase roll-up this does not weight by item count;
    /// the asymmetry is observed product behaviour, kept intentionally.
    #[must_use]
    pub fn overall_progress(&self) -> u8 {
        if self.phases.is_empty() {
            return 0;
        }
        let total: u32 = self.phases.iter().map(|p| u32::from(p.progress)).sum();
        let mean = f64::from(total) / self.phases.len() as f64;
        mean.round() as u8
    }
}

/// `round(100 * completed / total)`, with the empty case pinned to 0
fn percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let raw = completed as f64 * 100.0 / total as f64;
    raw.round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<ChecklistItem> {
        (0..n)
            .map(|i| ChecklistItem::new(format!("task {i}"), Priority::High))
            .collect()
    }

    fn phase_ab() -> Checklist {
        // Section A: 4 items, section B: 1 item.
        Checklist::new(vec![ChecklistPhase::new(
            "concept",
            "Concept Design",
            "Initial design exploration",
            vec![
                ChecklistSection::new("Requirements Analysis", items(4)),
                ChecklistSection::new("Space Planning", items(1)),
            ],
        )])
    }

    #[test]
    fn section_progress_is_item_ratio() {
        let list = phase_ab().toggle_item(&PhaseId::new("concept"), 0, 1);
        assert_eq!(list.phases[0].steps[0].progress, 25);
        let list = list.toggle_item(&PhaseId::new("concept"), 0, 2);
        assert_eq!(list.phases[0].steps[0].progress, 50);
    }

    #[test]
    fn phase_progress_is_weighted_not_averaged() {
        // 2 of 4 complete in A, 1 of 1 in B: 3/5 = 60, not mean(50, 100) = 75.
        let id = PhaseId::new("concept");
        let list = phase_ab()
            .toggle_item(&id, 0, 0)
            .toggle_item(&id, 0, 1)
            .toggle_item(&id, 1, 0);
        assert_eq!(list.phases[0].steps[0].progress, 50);
        assert_eq!(list.phases[0].steps[1].progress, 100);
        assert_eq!(list.phases[0].progress, 60);
    }

    #[test]
    fn toggle_round_trips_derived_state() {
        let id = PhaseId::new("concept");
        let original = phase_ab().toggle_item(&id, 0, 0);
        let toggled = original.toggle_item(&id, 0, 3).toggle_item(&id, 0, 3);
        assert_eq!(toggled.phases[0].steps[0].progress, original.phases[0].steps[0].progress);
        assert_eq!(toggled.phases[0].progress, original.phases[0].progress);
        assert_eq!(
            toggled.phases[0].steps[0].items[3].completed,
            original.phases[0].steps[0].items[3].completed
        );
    }

    #[test]
    fn toggle_does_not_mutate_input_snapshot() {
        let before = phase_ab();
        let _after = before.toggle_item(&PhaseId::new("concept"), 0, 0);
        assert_eq!(before.phases[0].progress, 0);
        assert!(!before.phases[0].steps[0].items[0].completed);
    }

    #[test]
    fn overall_is_unweighted_phase_mean() {
        let mut list = phase_ab();
        list.phases.push(ChecklistPhase::new(
            "approval",
            "Client Approval",
            "Sign-off",
            vec![ChecklistSection::new("Final Approval", items(2))],
        ));
        // Complete the whole second phase: phases at 0 and 100.
        let id = PhaseId::new("approval");
        let list = list.toggle_item(&id, 0, 0).toggle_item(&id, 0, 1);
        assert_eq!(list.overall_progress(), 50);
    }

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(percent(1, 8), 13); // 12.5 rounds away from zero
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(0, 0), 0);
    }

    #[test]
    #[should_panic(expected = "unknown checklist phase")]
    fn unknown_phase_is_fatal() {
        let _ = phase_ab().toggle_item(&PhaseId::new("bogus"), 0, 0);
    }

    #[test]
    fn phase_lookup_by_id() {
        let list = phase_ab();
        assert!(list.phase(&PhaseId::new("concept")).is_some());
        assert!(list.phase(&PhaseId::new("detailed")).is_none());
    }
}
