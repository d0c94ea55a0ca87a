pub mod aggregate;

pub use aggregate::{Partner, PartnerForm};
