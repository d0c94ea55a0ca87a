pub mod aggregate;

pub use aggregate::{Product, ProductForm};
