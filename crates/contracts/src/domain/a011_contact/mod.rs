pub mod aggregate;

pub use aggregate::{Contact, ContactStatus};
