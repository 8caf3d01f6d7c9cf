//! Workflow and SLA transition rules.
//!
//! The stage sequence is linear with no skipping back; status is the
//! parallel coarse classification, and every transition updates both
//! together. Rejected exports leave SLA tracking, so rejection always
//! resets the SLA to on-track.

use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::models::{Export, ExportStatus, SlaStatus, WorkflowStage};

/// Quick review decision available while an export is pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewAction {
    Approve,
    Reject,
}

impl ReviewAction {
    pub fn audit_action(&self) -> &'static str {
        match self {
            ReviewAction::Approve => "Approved Export",
            ReviewAction::Reject => "Rejected Export",
        }
    }

    pub fn audit_details(&self) -> &'static str {
        match self {
            ReviewAction::Approve => "Export approved via quick action",
            ReviewAction::Reject => "Export rejected via quick action",
        }
    }
}

/// Applies a review decision, returning the transitioned copy.
///
/// Only PENDING exports can be reviewed. Approval moves the stage to
/// APPROVED; rejection leaves the stage where it was.
pub fn apply_review(export: &Export, action: ReviewAction) -> Result<Export, ServiceError> {
    if !export.is_pending() {
        return Err(ServiceError::InvalidStatus(format!(
            "cannot review export '{}' in status {}",
            export.name, export.status
        )));
    }

    let mut updated = export.clone();
    match action {
        ReviewAction::Approve => {
            updated.status = ExportStatus::Approved;
            updated.stage = WorkflowStage::Approved;
            updated.sla_status = SlaStatus::OnTrack;
        }
        ReviewAction::Reject => {
            updated.status = ExportStatus::Rejected;
            updated.sla_status = SlaStatus::OnTrack;
        }
    }
    Ok(updated)
}

/// Position of one stage relative to an export's current stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageState {
    Completed,
    Current,
    Upcoming,
}

/// One slot of the workflow tracker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageProgress {
    pub stage: WorkflowStage,
    pub label: String,
    pub state: StageState,
}

/// Marks every stage of the sequence relative to `current`.
pub fn stage_progress(current: WorkflowStage) -> Vec<StageProgress> {
    let position = current.position();
    WorkflowStage::sequence()
        .into_iter()
        .enumerate()
        .map(|(index, stage)| StageProgress {
            label: stage.label().to_string(),
            state: match index.cmp(&position) {
                std::cmp::Ordering::Less => StageState::Completed,
                std::cmp::Ordering::Equal => StageState::Current,
                std::cmp::Ordering::Greater => StageState::Upcoming,
            },
            stage,
        })
        .collect()
}
