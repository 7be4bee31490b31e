pub mod dialogs;
pub mod layout;
