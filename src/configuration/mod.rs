pub mod reader;
pub mod theme;
