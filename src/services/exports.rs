//! Service for managing exports.
//!
//! Orchestrates the two store write paths: validates form drafts, checks
//! permissions, stamps audit entries through the injected clock and
//! identity, and posts the matching activity-feed line after every tracked
//! mutation.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use crate::auth::{consts as perm, PermissionPolicy};
use crate::clock::AuditClock;
use crate::documents::DocumentStore;
use crate::errors::{field_errors_from, FieldError, ServiceError};
use crate::events::Event;
use crate::identity::{Actor, IdentityProvider};
use crate::models::{
    ActivityLogEntry, AuditEntry, Export, ExportStatus, RelatedRecord, WorkflowStage,
};
use crate::services::workflow::{self, ReviewAction};
use crate::store::RecordStore;

/// Form payload for creating or editing an export.
///
/// `status` and `stage` round-trip through the edit form; creation ignores
/// them and always drafts as PENDING/DRAFT.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ExportDraft {
    #[validate(length(min = 1, message = "Export Name is required."))]
    pub name: String,

    #[validate(length(min = 1, message = "Customer is required."))]
    pub customer_id: String,

    #[validate(length(min = 1, message = "Product is required."))]
    pub product_id: String,

    #[validate(range(min = 1, message = "Quantity must be a positive number."))]
    pub quantity: i64,

    #[validate(required(message = "ETA is required."))]
    pub eta: Option<NaiveDate>,

    #[serde(default)]
    pub documents: Vec<String>,

    #[serde(default)]
    pub status: Option<ExportStatus>,

    #[serde(default)]
    pub stage: Option<WorkflowStage>,
}

impl ExportDraft {
    /// Pre-fills the edit form from a stored export.
    pub fn from_export(export: &Export) -> Self {
        Self {
            name: export.name.clone(),
            customer_id: export.customer_id.clone(),
            product_id: export.product_id.clone(),
            quantity: export.quantity,
            eta: Some(export.eta),
            documents: export.documents.clone(),
            status: Some(export.status),
            stage: Some(export.stage),
        }
    }

    /// Registers a file with the document store and records its filename.
    pub fn attach_document(
        &mut self,
        documents: &dyn DocumentStore,
        file_name: &str,
    ) -> Result<(), ServiceError> {
        let stored = documents.attach(file_name)?;
        self.documents.push(stored);
        Ok(())
    }
}

/// Service for managing exports.
#[derive(Clone)]
pub struct ExportService {
    clock: Arc<dyn AuditClock>,
    identity: Arc<dyn IdentityProvider>,
    policy: Arc<dyn PermissionPolicy>,
}

impl ExportService {
    /// Creates a new export service instance.
    pub fn new(
        clock: Arc<dyn AuditClock>,
        identity: Arc<dyn IdentityProvider>,
        policy: Arc<dyn PermissionPolicy>,
    ) -> Self {
        Self {
            clock,
            identity,
            policy,
        }
    }

    /// Creates a new export from a validated draft.
    ///
    /// Seeds exactly one audit entry, defaults the SLA to on-track, and
    /// resolves the customer's display name into the related records.
    #[instrument(skip(self, store, draft), fields(name = %draft.name))]
    pub fn create_export(
        &self,
        store: &mut RecordStore,
        draft: ExportDraft,
    ) -> Result<Uuid, ServiceError> {
        let actor = self.require(perm::EXPORT_CREATE)?;
        self.validate_draft(store, &draft)?;
        let eta = draft.eta.ok_or_else(|| {
            ServiceError::ValidationError(vec![FieldError::new("eta", "ETA is required.")])
        })?;

        let now = self.clock.now();
        let created = AuditEntry::new(now, actor.name.clone(), "Created Export", "New export created");
        let related = vec![RelatedRecord::customer(
            draft.customer_id.clone(),
            store.customer_name(&draft.customer_id),
        )];
        let export = Export::new(
            draft.name,
            draft.customer_id,
            draft.product_id,
            draft.quantity,
            eta,
            draft.documents,
            created,
            related,
        );
        let event = Event::ExportCreated {
            export_id: export.id,
            name: export.name.clone(),
        };
        let id = store.insert_export(export);
        self.publish(store, &actor, event, now);
        info!(export_id = %id, "export created");
        Ok(id)
    }

    /// Replaces an export with an edited draft.
    ///
    /// Whole-record replace; the audit trail is preserved and extended by
    /// exactly one "Updated Export" entry.
    #[instrument(skip(self, store, draft), fields(export_id = %id))]
    pub fn update_export(
        &self,
        store: &mut RecordStore,
        id: Uuid,
        draft: ExportDraft,
    ) -> Result<(), ServiceError> {
        let actor = self.require(perm::EXPORT_EDIT)?;
        let existing = store
            .find_export(id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("Export", id))?;
        self.validate_draft(store, &draft)?;
        let eta = draft.eta.ok_or_else(|| {
            ServiceError::ValidationError(vec![FieldError::new("eta", "ETA is required.")])
        })?;

        let mut updated = existing.clone();
        updated.name = draft.name;
        updated.customer_id = draft.customer_id;
        updated.product_id = draft.product_id;
        updated.quantity = draft.quantity;
        updated.eta = eta;
        updated.documents = draft.documents;
        updated.status = draft.status.unwrap_or(existing.status);
        updated.stage = draft.stage.unwrap_or(existing.stage);

        let now = self.clock.now();
        let entry = AuditEntry::new(
            now,
            actor.name.clone(),
            "Updated Export",
            "Export details updated",
        );
        let name = updated.name.clone();
        store.replace_export(updated, entry)?;
        self.publish(
            store,
            &actor,
            Event::ExportUpdated {
                export_id: id,
                name,
            },
            now,
        );
        info!(export_id = %id, "export updated");
        Ok(())
    }

    /// Approves a pending export via quick action.
    #[instrument(skip(self, store), fields(export_id = %id))]
    pub fn approve_export(&self, store: &mut RecordStore, id: Uuid) -> Result<(), ServiceError> {
        self.review(store, id, ReviewAction::Approve, perm::EXPORT_APPROVE)
    }

    /// Rejects a pending export via quick action.
    #[instrument(skip(self, store), fields(export_id = %id))]
    pub fn reject_export(&self, store: &mut RecordStore, id: Uuid) -> Result<(), ServiceError> {
        self.review(store, id, ReviewAction::Reject, perm::EXPORT_REJECT)
    }

    fn review(
        &self,
        store: &mut RecordStore,
        id: Uuid,
        action: ReviewAction,
        permission: &str,
    ) -> Result<(), ServiceError> {
        let actor = self.require(permission)?;
        let existing = store
            .find_export(id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("Export", id))?;
        let updated = workflow::apply_review(&existing, action)?;

        let now = self.clock.now();
        let entry = AuditEntry::new(
            now,
            actor.name.clone(),
            action.audit_action(),
            action.audit_details(),
        );
        let name = updated.name.clone();
        store.replace_export(updated, entry)?;

        let event = match action {
            ReviewAction::Approve => Event::ExportApproved {
                export_id: id,
                name,
            },
            ReviewAction::Reject => Event::ExportRejected {
                export_id: id,
                name,
            },
        };
        self.publish(store, &actor, event, now);
        info!(export_id = %id, action = action.audit_action(), "export reviewed");
        Ok(())
    }

    fn require(&self, permission: &str) -> Result<Actor, ServiceError> {
        let actor = self.identity.current_actor();
        if !self.policy.allows(&actor, permission) {
            return Err(ServiceError::Forbidden(format!(
                "{} is not allowed to perform {}",
                actor.name, permission
            )));
        }
        Ok(actor)
    }

    /// Draft validation: shape rules plus referential checks against the
    /// store. All failures are reported together; the store stays untouched.
    fn validate_draft(
        &self,
        store: &RecordStore,
        draft: &ExportDraft,
    ) -> Result<(), ServiceError> {
        let mut fields = match draft.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => field_errors_from(errors),
        };
        if !draft.customer_id.is_empty() && store.find_customer(&draft.customer_id).is_none() {
            fields.push(FieldError::new("customer_id", "Unknown customer."));
        }
        if !draft.product_id.is_empty() && store.find_product(&draft.product_id).is_none() {
            fields.push(FieldError::new("product_id", "Unknown product."));
        }
        if fields.is_empty() {
            Ok(())
        } else {
            fields.sort_by(|a, b| a.field.cmp(&b.field));
            Err(ServiceError::ValidationError(fields))
        }
    }

    fn publish(&self, store: &mut RecordStore, actor: &Actor, event: Event, now: DateTime<Utc>) {
        info!(export_id = %event.export_id(), activity = %event.activity_line(), "event");
        store.record_activity(ActivityLogEntry::new(
            now,
            actor.name.clone(),
            event.activity_line(),
        ));
    }
}
