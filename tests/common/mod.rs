//! Shared harness for integration tests: a seeded session with a fixed
//! clock and a chosen actor role.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use exportdesk::auth::RolePolicy;
use exportdesk::clock::FixedClock;
use exportdesk::config::AppConfig;
use exportdesk::identity::{Actor, StaticIdentity};
use exportdesk::models::Role;
use exportdesk::seed;
use exportdesk::AppState;

/// The instant every audit entry in a test session is stamped with.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 11, 12, 8, 30, 0).unwrap()
}

pub struct TestApp {
    pub app: AppState,
}

impl TestApp {
    /// Session acting as the seeded admin.
    pub fn new() -> Self {
        Self::with_role(Role::Admin)
    }

    /// Session acting under the given role.
    pub fn with_role(role: Role) -> Self {
        let store = seed::sample_store();
        let actor = match role {
            Role::Admin => Actor::from(store.find_user("USER001").expect("seeded admin")),
            Role::Exporter => Actor::from(store.find_user("USER002").expect("seeded exporter")),
            Role::Viewer => Actor {
                id: "USER003".to_string(),
                name: "Viewer Vera".to_string(),
                role: Role::Viewer,
            },
        };
        let app = AppState::new(
            AppConfig::default(),
            store,
            Arc::new(FixedClock(fixed_now())),
            Arc::new(StaticIdentity::new(actor)),
            Arc::new(RolePolicy),
        );
        Self { app }
    }

    /// Id of a seeded export, looked up by display name.
    pub fn export_id(&self, name: &str) -> Uuid {
        self.app
            .store
            .find_export_by_name(name)
            .map(|export| export.id)
            .unwrap_or_else(|| panic!("seeded export {} missing", name))
    }
}
