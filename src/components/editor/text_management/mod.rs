pub mod content_handler;
pub mod edit_buffer;
pub mod preview;
pub mod surfaces;
