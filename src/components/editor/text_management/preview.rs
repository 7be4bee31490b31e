use iced::widget::markdown;

use crate::components::editor::text_management::surfaces::PreviewSurface;

#[derive(Debug, Default)]
pub struct MarkdownPreview {
    items: Vec<markdown::Item>,
}

impl MarkdownPreview {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[markdown::Item] {
        &self.items
    }
}

impl PreviewSurface for MarkdownPreview {
    fn render(&mut self, markdown_text: &str) {
        self.items = markdown::parse(markdown_text).collect();
    }
}
