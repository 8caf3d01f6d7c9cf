pub mod activity;
pub mod customer;
pub mod export;
pub mod product;
pub mod user;

pub use activity::ActivityLogEntry;
pub use customer::{Customer, CustomerStatus};
pub use export::{
    AuditEntry, Export, ExportStatus, RelatedRecord, SlaStatus, WorkflowStage,
};
pub use product::{Product, ProductStatus, ProductType};
pub use user::{Role, User, UserStatus};
