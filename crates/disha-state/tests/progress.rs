//! Roll-up invariant tests, including property checks over random toggles

use disha_model::PhaseId;
use disha_state::defaults::design_workflow_checklist;
use disha_state::{Checklist, ChecklistItem, ChecklistPhase, ChecklistSection, Priority};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn items(n: usize) -> Vec<ChecklistItem> {
    (0..n)
        .map(|i| ChecklistItem::new(format!("task {i}"), Priority::Medium))
        .collect()
}

/// `round(100 * Σ completed / Σ total)` recomputed from the leaves
fn expected_phase_progress(phase: &ChecklistPhase) -> u8 {
    let total: usize = phase.steps.iter().map(|s| s.items.len()).sum();
    let done: usize = phase
        .steps
        .iter()
        .map(|s| s.items.iter().filter(|i| i.completed).count())
        .sum();
    if total == 0 {
        0
    } else {
        (done as f64 * 100.0 / total as f64).round() as u8
    }
}

#[test]
fn weighted_rollup_concrete_case() {
    // Section A: 4 items with 2 complete, section B: 1 item complete.
    // Weighted: round(100 * 3/5) = 60. A mean of section percentages
    // would give 75 and is wrong.
    let id = PhaseId::new("phase");
    let list = Checklist::new(vec![ChecklistPhase::new(
        "phase",
        "Phase",
        "",
        vec![
            ChecklistSection::new("A", items(4)),
            ChecklistSection::new("B", items(1)),
        ],
    )])
    .toggle_item(&id, 0, 0)
    .toggle_item(&id, 0, 1)
    .toggle_item(&id, 1, 0);

    assert_eq!(list.phases[0].progress, 60);
}

#[test]
fn default_checklist_progress_after_one_phase_completes() {
    let mut list = design_workflow_checklist();
    let approval = PhaseId::new("approval");

    let phase = list.phase(&approval).unwrap();
    let toggles: Vec<(usize, usize)> = phase
        .steps
        .iter()
        .enumerate()
        .flat_map(|(s, step)| (0..step.items.len()).map(move |i| (s, i)))
        .collect();
    for (section, item) in toggles {
        list = list.toggle_item(&approval, section, item);
    }

    let phase = list.phase(&approval).unwrap();
    assert!(phase.is_complete());
    assert_eq!(phase.progress, 100);
    // One of five phases at 100: mean = 20.
    assert_eq!(list.overall_progress(), 20);
}

proptest! {
    #[test]
    fn prop_rollups_match_leaves_after_random_toggles(
        toggles in prop::collection::vec((0usize..5, 0usize..3, 0usize..10), 0..40)
    ) {
        let mut list = design_workflow_checklist();
        for (phase_idx, section_idx, item_idx) in toggles {
            let phase = &list.phases[phase_idx % list.phases.len()];
            let id = phase.id.clone();
            let section_idx = section_idx % phase.steps.len();
            let item_idx = item_idx % phase.steps[section_idx].items.len();
            list = list.toggle_item(&id, section_idx, item_idx);
        }

        for phase in &list.phases {
            prop_assert_eq!(phase.progress, expected_phase_progress(phase));
            for step in &phase.steps {
                let expected = (step.completed_count() as f64 * 100.0
                    / step.items.len() as f64)
                    .round() as u8;
                prop_assert_eq!(step.progress, expected);
            }
        }
    }

    #[test]
    fn prop_double_toggle_is_identity(
        phase_idx in 0usize..5,
        section_idx in 0usize..3,
        item_idx in 0usize..10,
    ) {
        let original = design_workflow_checklist();
        let phase = &original.phases[phase_idx % original.phases.len()];
        let id = phase.id.clone();
        let section_idx = section_idx % phase.steps.len();
        let item_idx = item_idx % phase.steps[section_idx].items.len();

        let round_tripped = original
            .toggle_item(&id, section_idx, item_idx)
            .toggle_item(&id, section_idx, item_idx);

        let json_before = serde_json::to_string(&original).unwrap();
        let json_after = serde_json::to_string(&round_tripped).unwrap();
        prop_assert_eq!(json_before, json_after);
    }
}
