use iced::widget::text_editor::Action;

use crate::components::editor::text_management::edit_buffer::EditBuffer;
use crate::components::editor::text_management::surfaces::{EditSurface, PreviewSurface};

// Full re-render on every change, no debouncing.
pub fn propagate_change(edit: &impl EditSurface, preview: &mut impl PreviewSurface) {
    preview.render(edit.text());
}

pub fn replace_text(
    edit: &mut impl EditSurface,
    preview: &mut impl PreviewSurface,
    text: &str,
) {
    edit.set_text(text);
    propagate_change(edit, preview);
}

// Handler for editor actions
pub fn handle_editor_action(
    buffer: &mut EditBuffer,
    preview: &mut impl PreviewSurface,
    action: Action,
) {
    if buffer.perform(action) {
        #[cfg(debug_assertions)]
        eprintln!("Editor: text changed, re-rendering preview ({} bytes)", buffer.text().len());

        propagate_change(buffer, preview);
    }
}
