pub mod aggregate;

pub use aggregate::{CompanyInfo, CompanyInfoForm};
