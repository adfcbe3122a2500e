pub mod header;
pub mod log_viewer;
pub mod page_view;
