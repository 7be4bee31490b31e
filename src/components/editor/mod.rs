pub mod editor;
pub use editor::Editor;
pub use editor::Message;

pub mod actions;
pub mod state;
pub mod text_management;
pub mod ui;
