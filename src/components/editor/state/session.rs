use crate::document::FileLocator;

/// Per-window editor state: the save target and the window title.
#[derive(Debug)]
pub struct Session {
    current_file: Option<FileLocator>,
    title: String,
}

impl Session {
    pub fn new(base_title: impl Into<String>) -> Self {
        Self {
            current_file: None,
            title: base_title.into(),
        }
    }

    pub fn current_file(&self) -> Option<&FileLocator> {
        self.current_file.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn save_enabled(&self) -> bool {
        self.current_file.is_some()
    }

    // The suffix is appended to whatever the title already holds, so repeated
    // opens accumulate. Only called after the file was read or written.
    pub fn adopt_file(&mut self, locator: FileLocator) {
        self.title.push_str(" - ");
        self.title.push_str(&locator.name());

        #[cfg(debug_assertions)]
        eprintln!("Session: current file is now {}", locator.path().display());

        self.current_file = Some(locator);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new("Markdown")
    }
}
