//! Domain events emitted after tracked mutations.
//!
//! Single-threaded by design: events are rendered synchronously into the
//! store's activity feed and logged through `tracing`; there is no queue.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The various events that can occur in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    ExportCreated { export_id: Uuid, name: String },
    ExportUpdated { export_id: Uuid, name: String },
    ExportApproved { export_id: Uuid, name: String },
    ExportRejected { export_id: Uuid, name: String },
}

impl Event {
    pub fn export_id(&self) -> Uuid {
        match self {
            Event::ExportCreated { export_id, .. }
            | Event::ExportUpdated { export_id, .. }
            | Event::ExportApproved { export_id, .. }
            | Event::ExportRejected { export_id, .. } => *export_id,
        }
    }

    /// Renders the event as a line for the global activity feed.
    ///
    /// Lines embed the export's display name so the dashboard can resolve
    /// them back to a detail screen.
    pub fn activity_line(&self) -> String {
        match self {
            Event::ExportCreated { name, .. } => format!("Created {}", name),
            Event::ExportUpdated { name, .. } => format!("Updated {}", name),
            Event::ExportApproved { name, .. } => format!("Approved {}", name),
            Event::ExportRejected { name, .. } => format!("Rejected {}", name),
        }
    }
}
