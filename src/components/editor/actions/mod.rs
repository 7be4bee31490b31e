pub mod file_actions;
