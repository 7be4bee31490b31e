use iced::widget::text_editor::{Action, Content};

use crate::components::editor::text_management::surfaces::EditSurface;

// `text` mirrors the widget content so saves write back exactly what was loaded.
pub struct EditBuffer {
    content: Content,
    text: String,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self {
            content: Content::new(),
            text: String::new(),
        }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Applies a widget action. Returns true when the action changed the text.
    pub fn perform(&mut self, action: Action) -> bool {
        let is_edit = action.is_edit();
        self.content.perform(action);

        if is_edit {
            self.text = self.content.text();
        }

        is_edit
    }
}

impl EditSurface for EditBuffer {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.content = Content::with_text(text);
        self.text = text.to_owned();
    }
}

impl Default for EditBuffer {
    fn default() -> Self {
        Self::new()
    }
}
