pub mod aggregate;

pub use aggregate::{Value, ValueForm};
