//! Permission policy.
//!
//! Screens and services share one explicit policy interface parameterized by
//! actor and permission, so the rules can be swapped without touching screen
//! logic.

use crate::identity::Actor;
use crate::models::Role;

/// Permission constants used by screens and services.
pub mod consts {
    pub const EXPORT_CREATE: &str = "export:create";
    pub const EXPORT_EDIT: &str = "export:edit";
    pub const EXPORT_APPROVE: &str = "export:approve";
    pub const EXPORT_REJECT: &str = "export:reject";
    pub const EXPORT_EXPORT: &str = "export:export";
}

/// Decides whether an actor may perform an action.
#[cfg_attr(test, mockall::automock)]
pub trait PermissionPolicy: Send + Sync {
    fn allows(&self, actor: &Actor, permission: &str) -> bool;
}

/// Role-based policy: admins hold every permission, exporters manage their
/// own records, viewers are read-only.
#[derive(Debug, Default, Clone, Copy)]
pub struct RolePolicy;

impl PermissionPolicy for RolePolicy {
    fn allows(&self, actor: &Actor, permission: &str) -> bool {
        match actor.role {
            Role::Admin => true,
            Role::Exporter => matches!(
                permission,
                consts::EXPORT_CREATE | consts::EXPORT_EDIT | consts::EXPORT_EXPORT
            ),
            Role::Viewer => false,
        }
    }
}
