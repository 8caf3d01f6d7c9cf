//! Sample data for demos and tests.
//!
//! One coherent object graph: four customers, four products, two users,
//! five exports across the lifecycle, and a populated activity feed.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::models::{
    ActivityLogEntry, AuditEntry, Customer, CustomerStatus, Export, ExportStatus, Product,
    ProductStatus, ProductType, RelatedRecord, Role, SlaStatus, User, UserStatus, WorkflowStage,
};
use crate::store::RecordStore;

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid sample timestamp")
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid sample date")
}

fn audit(
    timestamp: DateTime<Utc>,
    user: &str,
    action: &str,
    details: &str,
) -> AuditEntry {
    AuditEntry::new(timestamp, user, action, details)
}

fn customers() -> Vec<Customer> {
    vec![
        Customer::new(
            "CUST001",
            "Global Foods Inc.",
            "Alice Smith",
            "alice@globalfoods.com",
            "123-456-7890",
            CustomerStatus::Active,
        ),
        Customer::new(
            "CUST002",
            "Asia Imports Ltd.",
            "Bob Johnson",
            "bob@asiaimports.com",
            "987-654-3210",
            CustomerStatus::Active,
        ),
        Customer::new(
            "CUST003",
            "Euro Traders",
            "Catherine Lee",
            "catherine@eurotraders.com",
            "555-123-4567",
            CustomerStatus::Active,
        ),
        Customer::new(
            "CUST004",
            "Oceanic Distributors",
            "David Chen",
            "david@oceanic.com",
            "111-222-3333",
            CustomerStatus::Inactive,
        ),
    ]
}

fn products() -> Vec<Product> {
    vec![
        Product::new(
            "PROD001",
            "Dried Coconut Flakes",
            ProductType::Food,
            dec!(1.5),
            100_000,
            ProductStatus::Available,
        ),
        Product::new(
            "PROD002",
            "Coconut Water (Canned)",
            ProductType::Beverage,
            dec!(2.0),
            50_000,
            ProductStatus::Available,
        ),
        Product::new(
            "PROD003",
            "Coconut Oil (Virgin)",
            ProductType::Oil,
            dec!(15.0),
            20_000,
            ProductStatus::Available,
        ),
        Product::new(
            "PROD004",
            "Coconut Milk Powder",
            ProductType::Food,
            dec!(5.0),
            30_000,
            ProductStatus::OutOfStock,
        ),
    ]
}

fn users() -> Vec<User> {
    vec![
        User::new(
            "USER001",
            "Admin User",
            "admin@example.com",
            Role::Admin,
            UserStatus::Active,
        ),
        User::new(
            "USER002",
            "Exporter John",
            "john@example.com",
            Role::Exporter,
            UserStatus::Active,
        ),
    ]
}

fn exports() -> Vec<Export> {
    vec![
        Export {
            id: Uuid::new_v4(),
            name: "Shipment #C1001".to_string(),
            customer_id: "CUST001".to_string(),
            product_id: "PROD001".to_string(),
            quantity: 5000,
            status: ExportStatus::Approved,
            stage: WorkflowStage::Scheduled,
            sla_status: SlaStatus::OnTrack,
            eta: date(2023, 12, 15),
            documents: vec![
                "invoice_C1001.pdf".to_string(),
                "packing_list_C1001.xlsx".to_string(),
            ],
            audit_logs: vec![
                audit(ts(2023, 11, 1, 10, 0), "Admin User", "Created Export", "Initial draft"),
                audit(
                    ts(2023, 11, 2, 11, 30),
                    "Approver A",
                    "Approved Export",
                    "Export approved by Approver A",
                ),
            ],
            related_records: vec![RelatedRecord::customer("CUST001", "Global Foods Inc.")],
        },
        Export {
            id: Uuid::new_v4(),
            name: "Shipment #C1002".to_string(),
            customer_id: "CUST002".to_string(),
            product_id: "PROD002".to_string(),
            quantity: 3000,
            status: ExportStatus::Pending,
            stage: WorkflowStage::PendingApproval,
            sla_status: SlaStatus::OnTrack,
            eta: date(2023, 12, 20),
            documents: vec!["contract_C1002.pdf".to_string()],
            audit_logs: vec![audit(
                ts(2023, 11, 3, 9, 0),
                "Exporter User",
                "Created Export",
                "Draft for review",
            )],
            related_records: vec![RelatedRecord::customer("CUST002", "Asia Imports Ltd.")],
        },
        Export {
            id: Uuid::new_v4(),
            name: "Shipment #C1003".to_string(),
            customer_id: "CUST001".to_string(),
            product_id: "PROD003".to_string(),
            quantity: 7500,
            status: ExportStatus::Shipped,
            stage: WorkflowStage::InTransit,
            sla_status: SlaStatus::Overdue,
            eta: date(2023, 11, 25),
            documents: Vec::new(),
            audit_logs: vec![
                audit(ts(2023, 10, 20, 14, 0), "Admin User", "Created Export", "Initial draft"),
                audit(
                    ts(2023, 10, 21, 16, 0),
                    "Approver B",
                    "Approved Export",
                    "Export approved by Approver B",
                ),
                audit(
                    ts(2023, 10, 25, 9, 0),
                    "Logistics",
                    "Marked Shipped",
                    "Cargo departed port",
                ),
            ],
            related_records: vec![RelatedRecord::customer("CUST001", "Global Foods Inc.")],
        },
        Export {
            id: Uuid::new_v4(),
            name: "Shipment #C1004".to_string(),
            customer_id: "CUST003".to_string(),
            product_id: "PROD001".to_string(),
            quantity: 10_000,
            status: ExportStatus::Delivered,
            stage: WorkflowStage::Delivered,
            sla_status: SlaStatus::OnTrack,
            eta: date(2023, 11, 5),
            documents: vec!["delivery_receipt_C1004.pdf".to_string()],
            audit_logs: vec![
                audit(ts(2023, 10, 10, 10, 0), "Admin User", "Created Export", "Initial draft"),
                audit(
                    ts(2023, 10, 11, 11, 0),
                    "Approver A",
                    "Approved Export",
                    "Export approved",
                ),
                audit(ts(2023, 10, 15, 10, 0), "Logistics", "Marked Shipped", "Cargo departed"),
                audit(
                    ts(2023, 11, 5, 14, 0),
                    "Logistics",
                    "Marked Delivered",
                    "Cargo delivered",
                ),
            ],
            related_records: vec![RelatedRecord::customer("CUST003", "Euro Traders")],
        },
        Export {
            id: Uuid::new_v4(),
            name: "Shipment #C1005".to_string(),
            customer_id: "CUST002".to_string(),
            product_id: "PROD002".to_string(),
            quantity: 2000,
            status: ExportStatus::Rejected,
            stage: WorkflowStage::PendingApproval,
            sla_status: SlaStatus::OnTrack,
            eta: date(2023, 11, 30),
            documents: Vec::new(),
            audit_logs: vec![
                audit(
                    ts(2023, 11, 5, 10, 0),
                    "Exporter User",
                    "Created Export",
                    "Draft for review",
                ),
                audit(
                    ts(2023, 11, 6, 10, 0),
                    "Approver B",
                    "Rejected Export",
                    "Rejected due to insufficient documentation",
                ),
            ],
            related_records: vec![RelatedRecord::customer("CUST002", "Asia Imports Ltd.")],
        },
    ]
}

fn activities() -> Vec<ActivityLogEntry> {
    vec![
        ActivityLogEntry::new(ts(2023, 11, 10, 10, 30), "Admin User", "Approved Shipment #C1001"),
        ActivityLogEntry::new(
            ts(2023, 11, 10, 9, 45),
            "Exporter John",
            "Submitted Shipment #C1002 for Approval",
        ),
        ActivityLogEntry::new(
            ts(2023, 11, 9, 16, 15),
            "Admin User",
            "Updated Customer Global Foods Inc.",
        ),
        ActivityLogEntry::new(
            ts(2023, 11, 9, 11, 0),
            "Logistics",
            "Marked Shipment #C1003 as In Transit",
        ),
        ActivityLogEntry::new(
            ts(2023, 11, 8, 14, 0),
            "Exporter John",
            "Created New Product Coconut Milk Powder",
        ),
    ]
}

/// Builds a store populated with the sample graph.
pub fn sample_store() -> RecordStore {
    RecordStore::new(exports(), customers(), products(), users(), activities())
}
