use iced::Task;
use native_dialog::{DialogBuilder, MessageLevel};

use crate::components::editor::Message;
use crate::document::{self, FileError, FileLocator};

pub const MISSING_EXTENSION_TEXT: &str = "Please name your file with a .md extension!!";

/// A modal message box waiting to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Information { title: String, text: String },
}

impl Notice {
    pub fn from_error(err: &FileError) -> Self {
        Notice::Error(err.to_string())
    }

    pub fn missing_extension() -> Self {
        Notice::Information {
            title: "Error".to_string(),
            text: MISSING_EXTENSION_TEXT.to_string(),
        }
    }

    fn show(&self) {
        let (level, title, text) = match self {
            Notice::Error(text) => (MessageLevel::Error, "Error", text),
            Notice::Information { title, text } => (MessageLevel::Info, title.as_str(), text),
        };

        let result = DialogBuilder::message()
            .set_level(level)
            .set_title(title)
            .set_text(text)
            .alert()
            .show();

        if let Err(_err) = result {
            #[cfg(debug_assertions)]
            eprintln!("Failed to show message dialog: {}", _err);
        }
    }
}

pub fn show_notice(notice: Notice) -> Task<Message> {
    Task::perform(async move { notice.show() }, |()| Message::NoticeDismissed)
}

pub async fn pick_markdown_file() -> Result<Option<FileLocator>, FileError> {
    DialogBuilder::file()
        .add_filter("Markdown", document::dialog_extensions())
        .open_single_file()
        .show()
        .map(|path| path.map(FileLocator::new))
        .map_err(|e| FileError::Dialog(e.to_string()))
}

pub async fn pick_save_target() -> Result<Option<FileLocator>, FileError> {
    DialogBuilder::file()
        .set_filename(document::DEFAULT_FILE_NAME)
        .add_filter("Markdown", document::dialog_extensions())
        .save_single_file()
        .show()
        .map(|path| path.map(FileLocator::new))
        .map_err(|e| FileError::Dialog(e.to_string()))
}
