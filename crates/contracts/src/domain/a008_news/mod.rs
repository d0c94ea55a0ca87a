pub mod aggregate;

pub use aggregate::{News, NewsForm, NewsStatus};
