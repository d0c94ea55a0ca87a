//! Common types and traits for all resources

pub mod record_id;
pub mod record_meta;
pub mod resource;
pub mod status_update;

// Re-exports
pub use record_id::RecordId;
pub use record_meta::RecordMeta;
pub use resource::{Resource, ResourceKind, StatusTracked};
pub use status_update::StatusUpdate;
