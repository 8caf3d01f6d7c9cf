//! Screen view-models.
//!
//! Every screen is a pure function of (screen, params, store): builders
//! read the store and return serializable view data, never mutating
//! anything. Missing records degrade to navigable not-found views.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use uuid::Uuid;

use crate::auth::{consts as perm, PermissionPolicy};
use crate::identity::Actor;
use crate::models::{
    ActivityLogEntry, Customer, Export, ExportStatus, Product, SlaStatus,
};
use crate::nav::{FormMode, Screen};
use crate::queries::{self, ExportRow, ExportViewQuery, SavedView};
use crate::services::workflow::{stage_progress, StageProgress};
use crate::services::ExportDraft;
use crate::store::RecordStore;

/// The rendered state of the active screen.
#[derive(Clone, Debug, Serialize)]
pub enum View {
    Dashboard(DashboardView),
    ExportsList(ExportsListView),
    ExportDetail(Box<ExportDetailView>),
    ExportNotFound(ExportNotFoundView),
    ExportForm(ExportFormView),
    NotFound(NotFoundView),
}

/// One slice of the status breakdown tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: ExportStatus,
    pub label: String,
    pub count: usize,
}

/// Aggregates behind the dashboard tiles plus the recent-activity feed.
#[derive(Clone, Debug, Serialize)]
pub struct DashboardView {
    pub total_exports: usize,
    pub status_breakdown: Vec<StatusCount>,
    pub sla_on_track_percent: f64,
    pub recent_activities: Vec<ActivityLogEntry>,
}

impl DashboardView {
    pub fn build(store: &RecordStore) -> Self {
        let exports = store.exports();
        let status_breakdown = ExportStatus::iter()
            .map(|status| StatusCount {
                status,
                label: status.label().to_string(),
                count: exports.iter().filter(|e| e.status == status).count(),
            })
            .collect();
        let on_track = exports
            .iter()
            .filter(|e| e.sla_status == SlaStatus::OnTrack)
            .count();
        let sla_on_track_percent = if exports.is_empty() {
            100.0
        } else {
            on_track as f64 * 100.0 / exports.len() as f64
        };

        let mut recent_activities = store.activities().to_vec();
        recent_activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Self {
            total_exports: exports.len(),
            status_breakdown,
            sla_on_track_percent,
            recent_activities,
        }
    }

    /// Screen an activity line leads to: lines mentioning an export's
    /// display name open that export's detail.
    pub fn activity_target(store: &RecordStore, entry: &ActivityLogEntry) -> Option<Screen> {
        store
            .exports()
            .iter()
            .find(|export| entry.action.contains(&export.name))
            .map(|export| Screen::ExportDetail {
                id: export.id.to_string(),
            })
    }
}

/// The exports list: derived rows plus the view-state that produced them.
#[derive(Clone, Debug, Serialize)]
pub struct ExportsListView {
    pub rows: Vec<ExportRow>,
    pub saved_views: Vec<SavedView>,
    pub query: ExportViewQuery,
}

impl ExportsListView {
    pub fn build(store: &RecordStore, query: &ExportViewQuery) -> Self {
        Self {
            rows: queries::derive_view(store, query),
            saved_views: queries::saved_views(),
            query: query.clone(),
        }
    }

    /// An empty result set renders the "no exports found" state, whose
    /// escape leads to the create form.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn empty_escape(&self) -> Screen {
        Screen::ExportForm {
            mode: FormMode::Create,
            id: None,
        }
    }
}

/// Quick actions surfaced on the detail screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickAction {
    Edit,
    Approve,
    Reject,
    ExportPdf,
}

/// The export detail screen.
#[derive(Clone, Debug, Serialize)]
pub struct ExportDetailView {
    pub export: Export,
    pub customer: Option<Customer>,
    pub product: Option<Product>,
    pub customer_name: String,
    pub product_name: String,
    pub workflow: Vec<StageProgress>,
    pub actions: Vec<QuickAction>,
}

/// Fallback for a detail request whose id resolves to nothing; its single
/// escape leads back to the exports list.
#[derive(Clone, Debug, Serialize)]
pub struct ExportNotFoundView {
    pub requested_id: String,
    pub escape: Screen,
}

impl ExportDetailView {
    /// Builds the detail view, degrading to the not-found view when the id
    /// is malformed or absent from the store.
    pub fn build(
        store: &RecordStore,
        id: &str,
        policy: &dyn PermissionPolicy,
        actor: &Actor,
    ) -> View {
        let export = Uuid::parse_str(id)
            .ok()
            .and_then(|uuid| store.find_export(uuid));
        let export = match export {
            Some(export) => export.clone(),
            None => {
                return View::ExportNotFound(ExportNotFoundView {
                    requested_id: id.to_string(),
                    escape: Screen::ExportsList,
                })
            }
        };

        let mut actions = Vec::new();
        if policy.allows(actor, perm::EXPORT_EDIT) {
            actions.push(QuickAction::Edit);
        }
        if export.is_pending() && policy.allows(actor, perm::EXPORT_APPROVE) {
            actions.push(QuickAction::Approve);
        }
        if export.is_pending() && policy.allows(actor, perm::EXPORT_REJECT) {
            actions.push(QuickAction::Reject);
        }
        if policy.allows(actor, perm::EXPORT_EXPORT) {
            actions.push(QuickAction::ExportPdf);
        }

        View::ExportDetail(Box::new(ExportDetailView {
            customer: store.find_customer(&export.customer_id).cloned(),
            product: store.find_product(&export.product_id).cloned(),
            customer_name: store.customer_name(&export.customer_id),
            product_name: store.product_name(&export.product_id),
            workflow: stage_progress(export.stage),
            actions,
            export,
        }))
    }
}

/// The create/edit form screen.
#[derive(Clone, Debug, Serialize)]
pub struct ExportFormView {
    pub mode: FormMode,
    pub draft: ExportDraft,
    /// (id, name) pairs for the customer select.
    pub customer_options: Vec<(String, String)>,
    /// (id, name) pairs for the product select.
    pub product_options: Vec<(String, String)>,
}

impl ExportFormView {
    pub fn build(store: &RecordStore, mode: FormMode, id: Option<&str>) -> Self {
        // edit mode pre-fills from the stored export; a stale id degrades
        // to a blank draft rather than failing
        let draft = match (mode, id) {
            (FormMode::Edit, Some(id)) => Uuid::parse_str(id)
                .ok()
                .and_then(|uuid| store.find_export(uuid))
                .map(ExportDraft::from_export)
                .unwrap_or_default(),
            _ => ExportDraft::default(),
        };
        Self {
            mode,
            draft,
            customer_options: store
                .customers()
                .iter()
                .map(|c| (c.id.clone(), c.name.clone()))
                .collect(),
            product_options: store
                .products()
                .iter()
                .map(|p| (p.id.clone(), p.name.clone()))
                .collect(),
        }
    }
}

/// The 404 screen for unrecognized routes; escapes to the dashboard.
#[derive(Clone, Debug, Serialize)]
pub struct NotFoundView {
    pub requested: String,
    pub escape: Screen,
}

/// Renders the active screen against the store. Pure and total: every
/// screen value produces a view, and lookups that miss degrade to
/// not-found views.
pub fn render(
    screen: &Screen,
    store: &RecordStore,
    list_query: &ExportViewQuery,
    policy: &dyn PermissionPolicy,
    actor: &Actor,
) -> View {
    match screen {
        Screen::Dashboard => View::Dashboard(DashboardView::build(store)),
        Screen::ExportsList => View::ExportsList(ExportsListView::build(store, list_query)),
        Screen::ExportDetail { id } => ExportDetailView::build(store, id, policy, actor),
        Screen::ExportForm { mode, id } => {
            View::ExportForm(ExportFormView::build(store, *mode, id.as_deref()))
        }
        Screen::NotFound { requested } => View::NotFound(NotFoundView {
            requested: requested.clone(),
            escape: Screen::Dashboard,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::RolePolicy;
    use crate::models::Role;
    use crate::seed;

    fn admin() -> Actor {
        Actor {
            id: "USER001".to_string(),
            name: "Admin User".to_string(),
            role: Role::Admin,
        }
    }

    fn viewer() -> Actor {
        Actor {
            id: "USER003".to_string(),
            name: "Viewer".to_string(),
            role: Role::Viewer,
        }
    }

    #[test]
    fn dashboard_aggregates_the_seeded_collections() {
        let store = seed::sample_store();
        let view = DashboardView::build(&store);
        assert_eq!(view.total_exports, 5);
        let pending = view
            .status_breakdown
            .iter()
            .find(|c| c.status == ExportStatus::Pending)
            .unwrap();
        assert_eq!(pending.count, 1);
        assert_eq!(pending.label, "Pending Approval");
        assert!((view.sla_on_track_percent - 80.0).abs() < f64::EPSILON);
        // feed is reverse-chronological
        for pair in view.recent_activities.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn activity_lines_resolve_to_the_mentioned_export() {
        let store = seed::sample_store();
        let entry = store
            .activities()
            .iter()
            .find(|a| a.action.contains("Shipment #C1001"))
            .unwrap();
        let target = DashboardView::activity_target(&store, entry).unwrap();
        let expected = store.find_export_by_name("Shipment #C1001").unwrap();
        assert_eq!(
            target,
            Screen::ExportDetail {
                id: expected.id.to_string()
            }
        );
    }

    #[test]
    fn detail_gates_quick_actions_by_status_and_permission() {
        let store = seed::sample_store();
        let pending = store.find_export_by_name("Shipment #C1002").unwrap();
        let view = ExportDetailView::build(
            &store,
            &pending.id.to_string(),
            &RolePolicy,
            &admin(),
        );
        let View::ExportDetail(detail) = view else {
            panic!("expected detail view");
        };
        assert_eq!(
            detail.actions,
            vec![
                QuickAction::Edit,
                QuickAction::Approve,
                QuickAction::Reject,
                QuickAction::ExportPdf,
            ]
        );
        assert_eq!(detail.customer_name, "Asia Imports Ltd.");

        // approved exports lose the review actions
        let approved = store.find_export_by_name("Shipment #C1001").unwrap();
        let view = ExportDetailView::build(
            &store,
            &approved.id.to_string(),
            &RolePolicy,
            &admin(),
        );
        let View::ExportDetail(detail) = view else {
            panic!("expected detail view");
        };
        assert!(!detail.actions.contains(&QuickAction::Approve));

        // viewers see no actions at all
        let view = ExportDetailView::build(
            &store,
            &approved.id.to_string(),
            &RolePolicy,
            &viewer(),
        );
        let View::ExportDetail(detail) = view else {
            panic!("expected detail view");
        };
        assert!(detail.actions.is_empty());
    }

    #[test]
    fn missing_or_malformed_ids_degrade_to_the_not_found_view() {
        let store = seed::sample_store();
        for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
            let view = ExportDetailView::build(&store, &id, &RolePolicy, &admin());
            let View::ExportNotFound(not_found) = view else {
                panic!("expected not-found view");
            };
            assert_eq!(not_found.escape, Screen::ExportsList);
        }
    }

    #[test]
    fn edit_form_prefills_from_the_stored_export() {
        let store = seed::sample_store();
        let export = store.find_export_by_name("Shipment #C1003").unwrap();
        let form = ExportFormView::build(&store, FormMode::Edit, Some(&export.id.to_string()));
        assert_eq!(form.draft.name, "Shipment #C1003");
        assert_eq!(form.draft.quantity, 7500);
        assert_eq!(form.customer_options.len(), 4);
        assert_eq!(form.product_options.len(), 4);

        let blank = ExportFormView::build(&store, FormMode::Create, None);
        assert_eq!(blank.draft, ExportDraft::default());
    }
}
