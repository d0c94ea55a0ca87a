pub mod api_client;
pub mod components;
pub mod config;
pub mod form_vm;
pub mod icons;
pub mod list_vm;
pub mod notifications;
