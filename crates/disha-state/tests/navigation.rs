//! Selection hierarchy tests against a populated store

use disha_model::{
    CabinetDimensions, CabinetId, DataStore, DesignOption, ManufacturingRecord, OptionId,
    OptionStatus, ProjectInfo, Zone, ZoneBoq, ZoneDimensions, ZoneId,
};
use disha_state::{breadcrumb, Action, CrumbTarget, DashboardState, NavError, ViewLevel};
use indexmap::IndexMap;

fn option(id: &str, name: &str, status: OptionStatus) -> DesignOption {
    DesignOption {
        id: OptionId::new(id),
        name: name.to_string(),
        status,
        description: String::new(),
        estimated_cost: 875_000,
        features: vec!["Handleless cabinets".to_string()],
        materials: IndexMap::new(),
        client_feedback: None,
        embed_url: None,
    }
}

fn zone(id: &str, name: &str, cabinets: &[&str]) -> Zone {
    Zone {
        id: ZoneId::new(id),
        name: name.to_string(),
        description: String::new(),
        location: String::new(),
        dimensions: ZoneDimensions {
            width: 3000,
            depth: 600,
            wall_height: 2400,
        },
        cabinets: cabinets.iter().map(|c| CabinetId::new(*c)).collect(),
        boq: ZoneBoq {
            categories: IndexMap::new(),
            total: 240_000,
        },
        utilities: Default::default(),
        measurements: IndexMap::new(),
        appliances: Vec::new(),
    }
}

fn record(id: &str, name: &str) -> ManufacturingRecord {
    ManufacturingRecord {
        id: CabinetId::new(id),
        name: name.to_string(),
        dimensions: CabinetDimensions {
            width: 900,
            depth: 560,
            height: 720,
        },
        components: Vec::new(),
        hafele_hardware: Vec::new(),
        cut_list: Vec::new(),
        assembly_steps: Vec::new(),
    }
}

fn store() -> DataStore {
    DataStore::new(
        ProjectInfo::default(),
        vec![
            option("option-a", "Modern Minimalist", OptionStatus::Alternative),
            option("option-b", "Contemporary Warm", OptionStatus::Preferred),
            option("option-c", "Industrial Chic", OptionStatus::UnderReview),
        ],
        vec![
            (
                OptionId::new("option-a"),
                vec![zone("zone-a", "Zone A - Main Cooking", &["BC-001"])],
                vec![record("BC-001", "Sink Base")],
            ),
            (
                OptionId::new("option-b"),
                vec![
                    zone("zone-a", "Zone A - Main Cooking", &["BC-001", "BC-002"]),
                    zone("zone-b", "Zone B - Storage", &["TU-001"]),
                ],
                vec![
                    record("BC-001", "Sink Base"),
                    record("BC-002", "Hob Unit"),
                    record("TU-001", "Tall Unit 1"),
                ],
            ),
        ],
        Vec::new(),
        Vec::new(),
    )
    .unwrap()
}

#[test]
fn initial_state_is_overview_of_second_option() {
    let store = store();
    let state = DashboardState::initial(&store);
    assert_eq!(state.selection.option, OptionId::new("option-b"));
    assert_eq!(state.selection.view(), ViewLevel::Overview);
}

#[test]
fn drill_down_to_cabinet_detail() {
    let store = store();
    let state = DashboardState::initial(&store)
        .dispatch(&store, Action::SelectZone(ZoneId::new("zone-a")))
        .unwrap()
        .dispatch(&store, Action::SelectCabinet(CabinetId::new("BC-002")))
        .unwrap();
    assert_eq!(state.selection.view(), ViewLevel::CabinetDetail);
    assert_eq!(state.selection.cabinet, Some(CabinetId::new("BC-002")));
}

#[test]
fn selecting_new_option_resets_zone_and_cabinet() {
    let store = store();
    let deep = DashboardState::initial(&store)
        .dispatch(&store, Action::SelectZone(ZoneId::new("zone-a")))
        .unwrap()
        .dispatch(&store, Action::SelectCabinet(CabinetId::new("BC-001")))
        .unwrap();

    let reset = deep
        .dispatch(&store, Action::SelectOption(OptionId::new("option-a")))
        .unwrap();
    assert_eq!(reset.selection.option, OptionId::new("option-a"));
    assert_eq!(reset.selection.zone, None);
    assert_eq!(reset.selection.cabinet, None);
    assert_eq!(reset.selection.view(), ViewLevel::Overview);
}

#[test]
fn selecting_new_zone_resets_cabinet() {
    let store = store();
    let state = DashboardState::initial(&store)
        .dispatch(&store, Action::SelectZone(ZoneId::new("zone-a")))
        .unwrap()
        .dispatch(&store, Action::SelectCabinet(CabinetId::new("BC-001")))
        .unwrap()
        .dispatch(&store, Action::SelectZone(ZoneId::new("zone-b")))
        .unwrap();
    assert_eq!(state.selection.zone, Some(ZoneId::new("zone-b")));
    assert_eq!(state.selection.cabinet, None);
    assert_eq!(state.selection.view(), ViewLevel::ZoneView);
}

#[test]
fn zone_selection_is_scoped_to_current_option() {
    let store = store();
    // option-a has no zone-b.
    let state = DashboardState::initial(&store)
        .dispatch(&store, Action::SelectOption(OptionId::new("option-a")))
        .unwrap();
    let err = state
        .dispatch(&store, Action::SelectZone(ZoneId::new("zone-b")))
        .unwrap_err();
    assert!(err.to_string().contains("zone-b"));
}

#[test]
fn cabinet_selection_requires_zone_membership() {
    let store = store();
    let zone_view = DashboardState::initial(&store)
        .dispatch(&store, Action::SelectZone(ZoneId::new("zone-b")))
        .unwrap();
    // BC-001 lives in zone-a, not zone-b.
    let err = zone_view
        .dispatch(&store, Action::SelectCabinet(CabinetId::new("BC-001")))
        .unwrap_err();
    assert!(err.to_string().contains("BC-001"));
}

#[test]
fn cabinet_selection_invalid_from_overview() {
    let store = store();
    let state = DashboardState::initial(&store);
    let err = state
        .selection
        .select_cabinet(&store, CabinetId::new("BC-001"))
        .unwrap_err();
    assert_eq!(err, NavError::NoZoneSelected);
}

#[test]
fn unknown_option_is_rejected() {
    let store = store();
    let state = DashboardState::initial(&store);
    let err = state
        .dispatch(&store, Action::SelectOption(OptionId::new("option-x")))
        .unwrap_err();
    assert!(err.to_string().contains("option-x"));
}

#[test]
fn breadcrumb_matches_each_level() {
    let store = store();

    let overview = DashboardState::initial(&store);
    let trail = breadcrumb(&overview.selection, &store);
    assert_eq!(trail.len(), 1);
    assert_eq!(trail[0].label, "Contemporary Warm");

    let zone_view = overview
        .dispatch(&store, Action::SelectZone(ZoneId::new("zone-a")))
        .unwrap();
    let trail = breadcrumb(&zone_view.selection, &store);
    assert_eq!(trail.len(), 2);
    assert_eq!(trail[1].label, "Zone A - Main Cooking");

    let detail = zone_view
        .dispatch(&store, Action::SelectCabinet(CabinetId::new("BC-001")))
        .unwrap();
    let trail = breadcrumb(&detail.selection, &store);
    assert_eq!(trail.len(), 3);
    assert_eq!(trail[2].label, "BC-001");
}

#[test]
fn breadcrumb_segments_reproduce_ancestor_states() {
    let store = store();
    let detail = DashboardState::initial(&store)
        .dispatch(&store, Action::SelectZone(ZoneId::new("zone-a")))
        .unwrap()
        .dispatch(&store, Action::SelectCabinet(CabinetId::new("BC-001")))
        .unwrap();

    let trail = breadcrumb(&detail.selection, &store);
    assert_eq!(trail[0].target, CrumbTarget::Overview);
    assert_eq!(trail[1].target, CrumbTarget::Zone);
    assert_eq!(trail[2].target, CrumbTarget::Here);

    // Activating the zone segment equals back_to_zone.
    let via_crumb = detail.dispatch(&store, Action::BackToZone).unwrap();
    assert_eq!(via_crumb.selection.view(), ViewLevel::ZoneView);
    assert_eq!(via_crumb.selection.zone, Some(ZoneId::new("zone-a")));

    // Activating the option segment equals back_to_overview.
    let via_root = detail.dispatch(&store, Action::BackToOverview).unwrap();
    assert_eq!(via_root.selection.view(), ViewLevel::Overview);
    assert_eq!(via_root.selection.option, detail.selection.option);
}
