use crate::components::editor::state::session::Session;
use crate::components::editor::text_management::content_handler;
use crate::components::editor::text_management::surfaces::{EditSurface, PreviewSurface};
use crate::components::editor::ui::dialogs::Notice;
use crate::document::{FileError, FileLocator};

/// What the window has to do after a file handler ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Notify(Notice),
    Load(FileLocator),
    Write {
        target: FileLocator,
        text: String,
        // Save-As adopts the target once the write succeeded, Save does not.
        adopt: bool,
    },
}

// Handle the outcome of the "open" dialog
pub fn handle_open_target_chosen(result: Result<Option<FileLocator>, FileError>) -> Effect {
    match result {
        Err(err) => Effect::Notify(Notice::from_error(&err)),
        Ok(None) => {
            #[cfg(debug_assertions)]
            eprintln!("Open dialog cancelled.");
            Effect::None
        }
        Ok(Some(locator)) => Effect::Load(locator),
    }
}

// Handle a finished read of the chosen file
pub fn handle_file_loaded(
    session: &mut Session,
    edit: &mut impl EditSurface,
    preview: &mut impl PreviewSurface,
    result: Result<(FileLocator, String), FileError>,
) -> Effect {
    match result {
        Ok((locator, text)) => {
            content_handler::replace_text(edit, preview, &text);
            session.adopt_file(locator);
            Effect::None
        }
        Err(err) => {
            #[cfg(debug_assertions)]
            eprintln!("Failed to open file: {}", err);
            Effect::Notify(Notice::from_error(&err))
        }
    }
}

// Handle the "Save..." action
pub fn handle_save(session: &Session, edit: &impl EditSurface) -> Effect {
    match session.current_file() {
        Some(target) => Effect::Write {
            target: target.clone(),
            text: edit.text().to_owned(),
            adopt: false,
        },
        None => {
            #[cfg(debug_assertions)]
            eprintln!("Save requested without a current file, ignoring.");
            Effect::None
        }
    }
}

// Handle the outcome of the "save" dialog
pub fn handle_save_target_chosen(
    edit: &impl EditSurface,
    result: Result<Option<FileLocator>, FileError>,
) -> Effect {
    match result {
        Err(err) => Effect::Notify(Notice::from_error(&err)),
        Ok(None) => {
            #[cfg(debug_assertions)]
            eprintln!("Save dialog cancelled.");
            Effect::None
        }
        Ok(Some(target)) if !target.has_markdown_extension() => {
            #[cfg(debug_assertions)]
            eprintln!("Rejected save target without .md extension: {}", target.uri());
            Effect::Notify(Notice::missing_extension())
        }
        Ok(Some(target)) => Effect::Write {
            target,
            text: edit.text().to_owned(),
            adopt: true,
        },
    }
}

// Handle a finished write for either Save or Save-As
pub fn handle_file_written(
    session: &mut Session,
    adopt: bool,
    result: Result<FileLocator, FileError>,
) -> Effect {
    match result {
        Ok(locator) => {
            if adopt {
                session.adopt_file(locator);
            }
            Effect::None
        }
        Err(err) => {
            #[cfg(debug_assertions)]
            eprintln!("Failed to save file: {}", err);
            Effect::Notify(Notice::from_error(&err))
        }
    }
}
