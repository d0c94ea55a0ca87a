pub mod api_error;
pub mod bulk_import;
pub mod envelope;
pub mod filter;
pub mod form_fields;
pub mod form_model;
pub mod lenient;
pub mod media;
pub mod notice;
pub mod payload;
pub mod session;
pub mod slug;
