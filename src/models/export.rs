use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};
use uuid::Uuid;

/// Enum representing the possible statuses of an export.
///
/// Status is the coarse approval/delivery classification shown on cards and
/// badges; it runs in parallel to the finer-grained [`WorkflowStage`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ExportStatus {
    Pending,
    Approved,
    Shipped,
    Delivered,
    Rejected,
    OnHold,
}

impl ExportStatus {
    /// Human-readable badge label.
    pub fn label(&self) -> &'static str {
        match self {
            ExportStatus::Pending => "Pending Approval",
            ExportStatus::Approved => "Approved",
            ExportStatus::Shipped => "Shipped",
            ExportStatus::Delivered => "Delivered",
            ExportStatus::Rejected => "Rejected",
            ExportStatus::OnHold => "On Hold",
        }
    }
}

/// Enum representing the fixed workflow sequence from draft to archived.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkflowStage {
    Draft,
    PendingApproval,
    Approved,
    Scheduled,
    InTransit,
    Delivered,
    Archived,
}

impl WorkflowStage {
    /// The full linear sequence, in workflow order.
    pub fn sequence() -> Vec<WorkflowStage> {
        WorkflowStage::iter().collect()
    }

    /// Zero-based position of this stage within the sequence.
    pub fn position(&self) -> usize {
        WorkflowStage::iter()
            .position(|stage| stage == *self)
            .unwrap_or(0)
    }

    /// Human-readable tracker label.
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowStage::Draft => "Draft",
            WorkflowStage::PendingApproval => "Pending Approval",
            WorkflowStage::Approved => "Approved",
            WorkflowStage::Scheduled => "Scheduled for Shipment",
            WorkflowStage::InTransit => "In Transit",
            WorkflowStage::Delivered => "Delivered",
            WorkflowStage::Archived => "Archived",
        }
    }
}

/// Enum representing whether an export is inside its service-level target.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SlaStatus {
    OnTrack,
    Overdue,
}

impl SlaStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SlaStatus::OnTrack => "SLA On Track",
            SlaStatus::Overdue => "SLA Overdue",
        }
    }
}

/// Immutable, timestamped record of an action taken on an export.
///
/// Entries are only ever appended to an export's audit trail, in
/// chronological order; nothing mutates or removes them afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub user: String,
    pub action: String,
    pub details: String,
}

impl AuditEntry {
    pub fn new(
        timestamp: DateTime<Utc>,
        user: impl Into<String>,
        action: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            user: user.into(),
            action: action.into(),
            details: details.into(),
        }
    }
}

/// Link from an export to another record it references.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedRecord {
    /// Kind of the linked record, e.g. "Customer"
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub name: String,
}

impl RelatedRecord {
    pub fn customer(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: "Customer".to_string(),
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The tracked unit of outbound goods with a lifecycle status and stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Export {
    /// Unique identifier for the export.
    pub id: Uuid,

    /// Display name, e.g. "Shipment #C1001".
    pub name: String,

    /// Foreign key referencing the customer receiving the shipment.
    pub customer_id: String,

    /// Foreign key referencing the shipped product.
    pub product_id: String,

    /// Number of units shipped; always positive.
    pub quantity: i64,

    /// Current coarse status of the export.
    pub status: ExportStatus,

    /// Current position in the workflow sequence.
    pub stage: WorkflowStage,

    /// Whether the export is within its service-level target.
    pub sla_status: SlaStatus,

    /// Estimated time of arrival.
    pub eta: NaiveDate,

    /// Attached document filenames; the core never holds file bytes.
    pub documents: Vec<String>,

    /// Append-only, chronologically ordered audit trail.
    pub audit_logs: Vec<AuditEntry>,

    /// Records this export references.
    pub related_records: Vec<RelatedRecord>,
}

impl Export {
    /// Creates a freshly drafted export.
    ///
    /// New exports always start with status PENDING, stage DRAFT, an
    /// on-track SLA, and exactly one seeded audit entry.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        customer_id: String,
        product_id: String,
        quantity: i64,
        eta: NaiveDate,
        documents: Vec<String>,
        created: AuditEntry,
        related_records: Vec<RelatedRecord>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            customer_id,
            product_id,
            quantity,
            status: ExportStatus::Pending,
            stage: WorkflowStage::Draft,
            sla_status: SlaStatus::OnTrack,
            eta,
            documents,
            audit_logs: vec![created],
            related_records,
        }
    }

    /// Whether quick review actions (approve/reject) apply.
    pub fn is_pending(&self) -> bool {
        self.status == ExportStatus::Pending
    }
}
