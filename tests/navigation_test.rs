//! Navigation and screen-rendering integration tests: total routing,
//! not-found fallbacks, and the list/detail/form round trip.

mod common;

use common::TestApp;
use rstest::rstest;
use uuid::Uuid;

use exportdesk::models::ExportStatus;
use exportdesk::nav::{resolve, FormMode, Screen, ScreenParams};
use exportdesk::queries::SortKey;
use exportdesk::screens::{QuickAction, View};
use exportdesk::services::workflow::StageState;

#[test]
fn unknown_screen_names_render_the_404_view() {
    let mut harness = TestApp::new();
    harness
        .app
        .navigate_named("SETTINGS", ScreenParams::default());
    let View::NotFound(view) = harness.app.current_view() else {
        panic!("expected 404 view");
    };
    assert_eq!(view.requested, "SETTINGS");
    assert_eq!(view.escape, Screen::Dashboard);
}

#[test]
fn detail_with_a_nonexistent_id_renders_not_found_with_a_list_escape() {
    let mut harness = TestApp::new();
    harness.app.navigate_named(
        "EXPORT_DETAIL",
        ScreenParams::with_id(Uuid::new_v4().to_string()),
    );
    let View::ExportNotFound(view) = harness.app.current_view() else {
        panic!("expected export not-found view");
    };
    assert_eq!(view.escape, Screen::ExportsList);
}

#[test]
fn detail_renders_workflow_progress_and_quick_actions() {
    let mut harness = TestApp::new();
    let id = harness.export_id("Shipment #C1003");
    harness
        .app
        .navigate_named("EXPORT_DETAIL", ScreenParams::with_id(id.to_string()));

    let View::ExportDetail(detail) = harness.app.current_view() else {
        panic!("expected detail view");
    };
    assert_eq!(detail.export.name, "Shipment #C1003");
    assert_eq!(detail.customer_name, "Global Foods Inc.");
    assert_eq!(detail.product_name, "Coconut Oil (Virgin)");
    // IN_TRANSIT is the fifth stage of seven
    let current: Vec<_> = detail
        .workflow
        .iter()
        .filter(|p| p.state == StageState::Current)
        .collect();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].label, "In Transit");
    // shipped exports cannot be reviewed, but the admin can still edit
    assert!(detail.actions.contains(&QuickAction::Edit));
    assert!(!detail.actions.contains(&QuickAction::Approve));
}

#[test]
fn navigation_replaces_state_and_resets_scroll() {
    let mut harness = TestApp::new();
    assert_eq!(harness.app.current_screen(), &Screen::Dashboard);

    harness
        .app
        .navigate_named("EXPORTS_LIST", ScreenParams::default());
    assert_eq!(harness.app.current_screen(), &Screen::ExportsList);
    assert!(harness.app.take_scroll_reset());
    assert!(!harness.app.take_scroll_reset());

    // replace-only: navigating again simply swaps the screen
    harness
        .app
        .navigate_named("DASHBOARD", ScreenParams::default());
    assert_eq!(harness.app.current_screen(), &Screen::Dashboard);
}

#[rstest]
#[case("SETTINGS")]
#[case("CUSTOMERS_LIST")]
#[case("export_detail")]
#[case("")]
fn unrecognized_screen_names_always_resolve_to_not_found(#[case] name: &str) {
    let screen = resolve(name, ScreenParams::default());
    assert_eq!(
        screen,
        Screen::NotFound {
            requested: name.to_string()
        }
    );
}

#[test]
fn form_mode_resolution_defaults_to_create() {
    let screen = resolve(
        "EXPORT_FORM",
        ScreenParams {
            mode: Some("unknown".to_string()),
            id: None,
        },
    );
    assert_eq!(
        screen,
        Screen::ExportForm {
            mode: FormMode::Create,
            id: None,
        }
    );
}

#[test]
fn list_search_sort_and_saved_views_shape_the_rendered_rows() {
    let mut harness = TestApp::new();
    harness
        .app
        .navigate_named("EXPORTS_LIST", ScreenParams::default());

    harness.app.set_search("Global Foods");
    let View::ExportsList(list) = harness.app.current_view() else {
        panic!("expected list view");
    };
    assert_eq!(list.rows.len(), 2);
    assert!(list
        .rows
        .iter()
        .all(|row| row.customer_name == "Global Foods Inc."));

    harness.app.set_search("");
    harness.app.toggle_sort(SortKey::Eta);
    harness.app.toggle_sort(SortKey::Eta);
    let View::ExportsList(list) = harness.app.current_view() else {
        panic!("expected list view");
    };
    // second toggle flips descending: latest ETA first
    assert_eq!(list.rows[0].export.name, "Shipment #C1002");

    assert!(harness.app.select_saved_view("Pending Approval"));
    let View::ExportsList(list) = harness.app.current_view() else {
        panic!("expected list view");
    };
    assert_eq!(list.rows.len(), 1);
    assert_eq!(list.rows[0].export.status, ExportStatus::Pending);
}

#[test]
fn empty_results_offer_the_create_escape() {
    let mut harness = TestApp::new();
    harness
        .app
        .navigate_named("EXPORTS_LIST", ScreenParams::default());
    harness.app.set_search("no such shipment");
    let View::ExportsList(list) = harness.app.current_view() else {
        panic!("expected list view");
    };
    assert!(list.is_empty());
    assert_eq!(
        list.empty_escape(),
        Screen::ExportForm {
            mode: FormMode::Create,
            id: None,
        }
    );
}

#[test]
fn suggestions_respect_the_configured_minimum_and_navigate_to_exports() {
    let harness = TestApp::new();
    assert!(harness.app.suggestions("C1").is_empty());

    let suggestions = harness.app.suggestions("Shipment #C1001");
    assert_eq!(suggestions.len(), 1);
    let target = suggestions[0].target().unwrap();
    let id = harness.export_id("Shipment #C1001");
    assert_eq!(target, Screen::ExportDetail { id: id.to_string() });
}
