mod audit_client;
pub(crate) mod types;

pub use audit_client::{AuditClient, AuditClientExt};
pub use types::{AuditOptions, AuditRequest, AuditResult};
