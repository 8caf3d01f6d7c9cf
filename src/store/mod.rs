//! In-memory record store.
//!
//! Holds the canonical collections for the session and exposes the only
//! write paths for exports: [`RecordStore::insert_export`] and
//! [`RecordStore::replace_export`]. Every mutation is synchronous and
//! immediately visible to subsequent reads; the store is exclusively owned
//! by the session, so mutation requires `&mut` access.

use tracing::debug;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::models::{
    ActivityLogEntry, AuditEntry, Customer, Export, Product, User,
};

/// Display fallback when a foreign key does not resolve.
pub const NOT_AVAILABLE: &str = "N/A";

/// Canonical in-memory collections backing every screen.
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    exports: Vec<Export>,
    customers: Vec<Customer>,
    products: Vec<Product>,
    users: Vec<User>,
    activities: Vec<ActivityLogEntry>,
}

impl RecordStore {
    pub fn new(
        exports: Vec<Export>,
        customers: Vec<Customer>,
        products: Vec<Product>,
        users: Vec<User>,
        activities: Vec<ActivityLogEntry>,
    ) -> Self {
        Self {
            exports,
            customers,
            products,
            users,
            activities,
        }
    }

    pub fn exports(&self) -> &[Export] {
        &self.exports
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Global activity feed, newest entry last.
    pub fn activities(&self) -> &[ActivityLogEntry] {
        &self.activities
    }

    pub fn find_export(&self, id: Uuid) -> Option<&Export> {
        self.exports.iter().find(|export| export.id == id)
    }

    /// Finds an export by its display name, used when resolving activity
    /// lines back to detail screens.
    pub fn find_export_by_name(&self, name: &str) -> Option<&Export> {
        self.exports.iter().find(|export| export.name == name)
    }

    pub fn find_customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    pub fn find_product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Customer display name, falling back to "N/A" on a dangling key.
    pub fn customer_name(&self, id: &str) -> String {
        self.find_customer(id)
            .map(|customer| customer.name.clone())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// Product display name, falling back to "N/A" on a dangling key.
    pub fn product_name(&self, id: &str) -> String {
        self.find_product(id)
            .map(|product| product.name.clone())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// Inserts a newly created export. Returns its id.
    pub fn insert_export(&mut self, export: Export) -> Uuid {
        let id = export.id;
        debug!(export_id = %id, name = %export.name, "export inserted");
        self.exports.push(export);
        id
    }

    /// Replaces the stored export matching `updated.id`.
    ///
    /// The replacement is whole-record, except for the audit trail: the
    /// prior entries are always preserved and `entry` is appended as the
    /// single new record, so the trail can never shrink.
    pub fn replace_export(
        &mut self,
        mut updated: Export,
        entry: AuditEntry,
    ) -> Result<&Export, ServiceError> {
        let slot = self
            .exports
            .iter_mut()
            .find(|export| export.id == updated.id)
            .ok_or_else(|| ServiceError::not_found("Export", updated.id))?;

        updated.audit_logs = slot.audit_logs.clone();
        updated.audit_logs.push(entry);
        *slot = updated;
        debug!(export_id = %slot.id, "export replaced");
        Ok(slot)
    }

    /// Appends one line to the global activity feed.
    pub fn record_activity(&mut self, entry: ActivityLogEntry) {
        self.activities.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExportStatus, RelatedRecord, SlaStatus, WorkflowStage};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn stamp(action: &str) -> AuditEntry {
        AuditEntry::new(
            Utc.with_ymd_and_hms(2023, 11, 1, 10, 0, 0).unwrap(),
            "Admin User",
            action,
            "test",
        )
    }

    fn draft_export(name: &str) -> Export {
        Export::new(
            name.to_string(),
            "CUST001".to_string(),
            "PROD001".to_string(),
            100,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Vec::new(),
            stamp("Created Export"),
            vec![RelatedRecord::customer("CUST001", "Global Foods Inc.")],
        )
    }

    #[test]
    fn insert_is_visible_to_subsequent_reads() {
        let mut store = RecordStore::default();
        let id = store.insert_export(draft_export("Shipment #C9001"));
        assert!(store.find_export(id).is_some());
        assert_eq!(store.exports().len(), 1);
    }

    #[test]
    fn replace_preserves_and_extends_audit_trail() {
        let mut store = RecordStore::default();
        let id = store.insert_export(draft_export("Shipment #C9002"));

        let mut updated = store.find_export(id).unwrap().clone();
        updated.status = ExportStatus::Approved;
        updated.stage = WorkflowStage::Approved;
        updated.sla_status = SlaStatus::OnTrack;
        // an adversarial caller truncating the trail must not stick
        updated.audit_logs.clear();

        let stored = store
            .replace_export(updated, stamp("Approved Export"))
            .unwrap();
        assert_eq!(stored.status, ExportStatus::Approved);
        assert_eq!(stored.audit_logs.len(), 2);
        assert_eq!(stored.audit_logs[0].action, "Created Export");
        assert_eq!(stored.audit_logs[1].action, "Approved Export");
    }

    #[test]
    fn replace_of_unknown_export_reports_not_found() {
        let mut store = RecordStore::default();
        let result = store.replace_export(draft_export("Shipment #C9003"), stamp("Updated Export"));
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn dangling_references_fall_back_to_not_available() {
        let store = RecordStore::default();
        assert_eq!(store.customer_name("CUST404"), NOT_AVAILABLE);
        assert_eq!(store.product_name("PROD404"), NOT_AVAILABLE);
    }
}
