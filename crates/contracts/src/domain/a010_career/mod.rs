pub mod aggregate;

pub use aggregate::{Career, CareerForm, CareerStatus};
