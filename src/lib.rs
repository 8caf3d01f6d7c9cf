//! Exportdesk core library
//!
//! This crate provides the core engine of an export-shipment operations
//! console: an in-memory record store, a derived-view pipeline over the
//! export collection, the approval workflow with SLA coupling, and the
//! screen navigation state machine.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod auth;
pub mod clock;
pub mod config;
pub mod documents;
pub mod errors;
pub mod events;
pub mod identity;
pub mod models;
pub mod nav;
pub mod queries;
pub mod screens;
pub mod seed;
pub mod services;
pub mod store;

use std::sync::Arc;

use uuid::Uuid;

use crate::auth::{PermissionPolicy, RolePolicy};
use crate::clock::{AuditClock, SystemClock};
use crate::errors::ServiceError;
use crate::identity::{Actor, IdentityProvider, StaticIdentity};
use crate::nav::{FormMode, Router, Screen, ScreenParams};
use crate::queries::{ExportFilters, ExportViewQuery, SortKey, Suggestion};
use crate::screens::View;
use crate::services::{ExportDraft, ExportService};
use crate::store::RecordStore;

/// One console session: the exclusively-owned store plus the view state
/// and services every screen reads through.
///
/// All mutations are synchronous and flow through the service entry
/// points; there is no other write path.
pub struct AppState {
    pub config: config::AppConfig,
    pub store: RecordStore,
    router: Router,
    list_query: ExportViewQuery,
    active_saved_view: String,
    exports: ExportService,
    policy: Arc<dyn PermissionPolicy>,
    identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    /// Assembles a session from explicit collaborators.
    pub fn new(
        config: config::AppConfig,
        store: RecordStore,
        clock: Arc<dyn AuditClock>,
        identity: Arc<dyn IdentityProvider>,
        policy: Arc<dyn PermissionPolicy>,
    ) -> Self {
        Self {
            exports: ExportService::new(clock, identity.clone(), policy.clone()),
            config,
            store,
            router: Router::new(),
            list_query: ExportViewQuery::default(),
            active_saved_view: "All".to_string(),
            policy,
            identity,
        }
    }

    /// Builds a session over the sample data with the system clock, the
    /// role policy, and the configured user as the session actor.
    pub fn bootstrap(config: config::AppConfig) -> Result<Self, ServiceError> {
        let store = seed::sample_store();
        let user = store
            .find_user(&config.current_user_id)
            .ok_or_else(|| ServiceError::not_found("User", &config.current_user_id))?;
        let identity = Arc::new(StaticIdentity::new(Actor::from(user)));
        Ok(Self::new(
            config,
            store,
            Arc::new(SystemClock),
            identity,
            Arc::new(RolePolicy),
        ))
    }

    pub fn actor(&self) -> Actor {
        self.identity.current_actor()
    }

    pub fn current_screen(&self) -> &Screen {
        self.router.current()
    }

    /// Renders the active screen. Pure with respect to the store.
    pub fn current_view(&self) -> View {
        screens::render(
            self.router.current(),
            &self.store,
            &self.list_query,
            &*self.policy,
            &self.actor(),
        )
    }

    pub fn navigate(&mut self, screen: Screen) {
        self.router.navigate(screen);
    }

    /// Name-based navigation; unknown names land on the 404 screen.
    pub fn navigate_named(&mut self, name: &str, params: ScreenParams) {
        self.router.navigate_named(name, params);
    }

    pub fn take_scroll_reset(&mut self) -> bool {
        self.router.take_scroll_reset()
    }

    // --- exports list view state ---

    pub fn list_query(&self) -> &ExportViewQuery {
        &self.list_query
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.list_query.search = term.into();
    }

    pub fn apply_filters(&mut self, filters: ExportFilters) {
        self.list_query.filters = filters;
    }

    pub fn clear_filters(&mut self) {
        self.list_query.filters = ExportFilters::default();
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.list_query.toggle_sort(key);
    }

    pub fn active_saved_view(&self) -> &str {
        &self.active_saved_view
    }

    /// Activates a saved view by name, replacing the filter set. Returns
    /// false (and changes nothing) for names that do not exist.
    pub fn select_saved_view(&mut self, name: &str) -> bool {
        match queries::saved_views().into_iter().find(|v| v.name == name) {
            Some(view) => {
                self.active_saved_view = view.name;
                self.list_query.filters = view.filters;
                true
            }
            None => false,
        }
    }

    /// Global-search suggestions under the configured limits.
    pub fn suggestions(&self, term: &str) -> Vec<Suggestion> {
        queries::search_suggestions(
            &self.store,
            term,
            self.config.suggestion_min_chars,
            self.config.suggestion_limit,
        )
    }

    // --- mutations ---

    pub fn create_export(&mut self, draft: ExportDraft) -> Result<Uuid, ServiceError> {
        self.exports.create_export(&mut self.store, draft)
    }

    pub fn update_export(&mut self, id: Uuid, draft: ExportDraft) -> Result<(), ServiceError> {
        self.exports.update_export(&mut self.store, id, draft)
    }

    pub fn approve_export(&mut self, id: Uuid) -> Result<(), ServiceError> {
        self.exports.approve_export(&mut self.store, id)
    }

    pub fn reject_export(&mut self, id: Uuid) -> Result<(), ServiceError> {
        self.exports.reject_export(&mut self.store, id)
    }

    /// Submits the active export form and returns to the exports list.
    ///
    /// Create mode inserts; edit mode replaces the form's export. Fails
    /// without touching the store when validation fails or no form screen
    /// is active; the screen is left in place on failure so the errors can
    /// be shown.
    pub fn submit_export_form(&mut self, draft: ExportDraft) -> Result<Uuid, ServiceError> {
        let id = match self.router.current().clone() {
            Screen::ExportForm {
                mode: FormMode::Create,
                ..
            } => self.create_export(draft)?,
            Screen::ExportForm {
                mode: FormMode::Edit,
                id,
            } => {
                let raw = id.unwrap_or_default();
                let id = Uuid::parse_str(&raw)
                    .map_err(|_| ServiceError::not_found("Export", raw))?;
                self.update_export(id, draft)?;
                id
            }
            _ => {
                return Err(ServiceError::InvalidStatus(
                    "no export form is active".to_string(),
                ))
            }
        };
        self.navigate(Screen::ExportsList);
        Ok(id)
    }
}

pub mod prelude {
    pub use crate::auth::{consts as perm, PermissionPolicy, RolePolicy};
    pub use crate::clock::{AuditClock, FixedClock, SystemClock};
    pub use crate::errors::{FieldError, ServiceError};
    pub use crate::events::Event;
    pub use crate::identity::{Actor, IdentityProvider, StaticIdentity};
    pub use crate::models::*;
    pub use crate::nav::{FormMode, Router, Screen, ScreenParams};
    pub use crate::queries::{
        derive_view, saved_views, search_suggestions, ExportFilters, ExportRow, ExportViewQuery,
        SortDirection, SortKey, SortSpec,
    };
    pub use crate::screens::View;
    pub use crate::services::{ExportDraft, ExportService};
    pub use crate::store::RecordStore;
    pub use crate::AppState;
}
