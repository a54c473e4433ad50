pub mod content_header_panel;
pub mod content_panel;
pub mod response_panel;
