pub mod bulk_importer;
pub mod details_frame;
pub mod image_picker;
pub mod list_header;
pub mod page_header;
pub mod ui;
