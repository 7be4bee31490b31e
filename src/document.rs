use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

// Exact suffixes offered to the file dialogs. Not a case-insensitive glob.
pub const MARKDOWN_EXTENSIONS: [&str; 2] = [".md", ".MD"];

pub const DEFAULT_FILE_NAME: &str = "untitled.md";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileError {
    #[error("File dialog failed: {0}")]
    Dialog(String),
    #[error("Failed to read '{path}': {message}")]
    Read { path: String, message: String },
    #[error("Failed to open '{path}' for writing: {message}")]
    Open { path: String, message: String },
    #[error("Failed to write '{path}': {message}")]
    Write { path: String, message: String },
}

/// Opaque handle to a file location, as handed out by the file dialogs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileLocator {
    path: PathBuf,
}

impl FileLocator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Display name: the final path component.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    /// `file://` form of the location.
    pub fn uri(&self) -> String {
        let absolute = if self.path.is_absolute() {
            self.path.clone()
        } else {
            std::env::current_dir()
                .map(|dir| dir.join(&self.path))
                .unwrap_or_else(|_| self.path.clone())
        };
        format!("file://{}", absolute.to_string_lossy().replace('\\', "/"))
    }

    pub fn has_markdown_extension(&self) -> bool {
        self.uri().to_lowercase().ends_with(".md")
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

/// Extensions in the form the native dialogs expect (no leading dot).
pub fn dialog_extensions() -> Vec<&'static str> {
    MARKDOWN_EXTENSIONS
        .iter()
        .map(|extension| extension.trim_start_matches('.'))
        .collect()
}

/// Reads the whole file as text. Invalid UTF-8 sequences become U+FFFD rather
/// than failing the open. The handle is dropped on return, whether the read
/// succeeded or not.
pub fn read_document(locator: &FileLocator) -> Result<String, FileError> {
    let mut file = File::open(locator.path()).map_err(|e| FileError::Read {
        path: locator.display_path(),
        message: e.to_string(),
    })?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|e| FileError::Read {
        path: locator.display_path(),
        message: e.to_string(),
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn open_writer(locator: &FileLocator) -> Result<File, FileError> {
    File::create(locator.path()).map_err(|e| FileError::Open {
        path: locator.display_path(),
        message: e.to_string(),
    })
}

pub fn write_document(locator: &FileLocator, text: &str) -> Result<(), FileError> {
    let mut writer = open_writer(locator)?;

    writer
        .write_all(text.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| FileError::Write {
            path: locator.display_path(),
            message: e.to_string(),
        })?;

    #[cfg(debug_assertions)]
    eprintln!("Wrote {} bytes to {}", text.len(), locator.display_path());

    Ok(())
}

pub async fn load_document(locator: FileLocator) -> Result<(FileLocator, String), FileError> {
    let text = read_document(&locator)?;
    Ok((locator, text))
}

pub async fn save_document(locator: FileLocator, text: String) -> Result<FileLocator, FileError> {
    write_document(&locator, &text)?;
    Ok(locator)
}
