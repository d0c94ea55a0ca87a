//! Shared contracts for the company-profile CMS admin.
//!
//! Everything here is platform-neutral: the wasm front-end consumes it, and
//! the tests run natively.

pub mod domain;
pub mod shared;
