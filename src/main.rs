use anyhow::Context;
use tracing::info;

use exportdesk::nav::{Screen, ScreenParams};
use exportdesk::queries::SortKey;
use exportdesk::screens::View;
use exportdesk::services::ExportDraft;

/// Walks a representative session over the sample data: dashboard,
/// filtered list, create, approve. Useful as a smoke run and as a living
/// example of the session API.
fn main() -> anyhow::Result<()> {
    let cfg = exportdesk::config::load_config()?;
    exportdesk::config::init_tracing(cfg.log_level(), cfg.log_json);

    let mut app = exportdesk::AppState::bootstrap(cfg).context("failed to build session")?;
    info!(actor = %app.actor().name, "session started");

    if let View::Dashboard(dashboard) = app.current_view() {
        info!(
            total_exports = dashboard.total_exports,
            sla_on_track_percent = dashboard.sla_on_track_percent,
            activities = dashboard.recent_activities.len(),
            "dashboard"
        );
    }

    // Exports list, searched and sorted
    app.navigate_named("EXPORTS_LIST", ScreenParams::default());
    app.set_search("C100");
    app.toggle_sort(SortKey::Eta);
    if let View::ExportsList(list) = app.current_view() {
        for row in &list.rows {
            info!(
                name = %row.export.name,
                customer = %row.customer_name,
                status = %row.export.status,
                eta = %row.export.eta,
                "row"
            );
        }
    }

    // Create a new export through the form flow
    app.set_search("");
    app.navigate(Screen::ExportForm {
        mode: exportdesk::nav::FormMode::Create,
        id: None,
    });
    let draft = ExportDraft {
        name: "Shipment #C1006".to_string(),
        customer_id: "CUST003".to_string(),
        product_id: "PROD003".to_string(),
        quantity: 6000,
        eta: chrono::NaiveDate::from_ymd_opt(2024, 1, 31),
        ..ExportDraft::default()
    };
    let created = app.submit_export_form(draft)?;
    info!(export_id = %created, "created via form");

    // Approve the seeded pending shipment
    let pending = app
        .store
        .find_export_by_name("Shipment #C1002")
        .map(|export| export.id)
        .context("sample data should contain Shipment #C1002")?;
    app.approve_export(pending)?;

    if let View::Dashboard(dashboard) = {
        app.navigate(Screen::Dashboard);
        app.current_view()
    } {
        for slice in &dashboard.status_breakdown {
            info!(status = %slice.status, count = slice.count, "status breakdown");
        }
    }

    info!("session finished");
    Ok(())
}
