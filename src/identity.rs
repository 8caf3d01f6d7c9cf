use serde::{Deserialize, Serialize};

use crate::models::{Role, User};

/// The user performing actions in the current session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub name: String,
    pub role: Role,
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}

/// Supplies the actor for audit entries and permission checks.
pub trait IdentityProvider: Send + Sync {
    fn current_actor(&self) -> Actor;
}

/// Identity provider pinned to one actor for the whole session.
#[derive(Clone, Debug)]
pub struct StaticIdentity {
    actor: Actor,
}

impl StaticIdentity {
    pub fn new(actor: Actor) -> Self {
        Self { actor }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_actor(&self) -> Actor {
        self.actor.clone()
    }
}
