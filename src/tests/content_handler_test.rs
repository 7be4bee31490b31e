use iced::widget::text_editor::{Action, Edit, Motion};

use crate::components::editor::text_management::content_handler::{
    handle_editor_action, propagate_change, replace_text,
};
use crate::components::editor::text_management::edit_buffer::EditBuffer;
use crate::components::editor::text_management::preview::MarkdownPreview;
use crate::components::editor::text_management::surfaces::{EditSurface, PreviewSurface};

use super::fakes::{FakeEdit, FakePreview};

#[test]
fn preview_follows_every_replacement() {
    let mut edit = FakeEdit::default();
    let mut preview = FakePreview::default();

    for text in ["", "# Hi", "# Hi\nbody", "*x*", "plain"] {
        replace_text(&mut edit, &mut preview, text);
        assert_eq!(preview.last(), Some(text));
    }

    assert_eq!(preview.renders.len(), 5);
}

#[test]
fn propagation_sends_the_full_text() {
    let edit = FakeEdit::with_text("# Title\n\nparagraph one\n\n- item");
    let mut preview = FakePreview::default();

    propagate_change(&edit, &mut preview);

    assert_eq!(preview.last(), Some("# Title\n\nparagraph one\n\n- item"));
}

#[test]
fn markdown_preview_replaces_previous_output() {
    let mut preview = MarkdownPreview::new();

    preview.render("# Hi\n\nbody");
    assert_eq!(preview.items().len(), 2);

    preview.render("");
    assert!(preview.items().is_empty());
}

fn type_text(buffer: &mut EditBuffer, preview: &mut impl PreviewSurface, text: &str) {
    for c in text.chars() {
        let edit = if c == '\n' { Edit::Enter } else { Edit::Insert(c) };
        handle_editor_action(buffer, preview, Action::Edit(edit));
    }
}

#[test]
fn typing_updates_buffer_text_and_preview() {
    let mut buffer = EditBuffer::new();
    let mut preview = FakePreview::default();

    type_text(&mut buffer, &mut preview, "# Hi");

    assert_eq!(buffer.text(), "# Hi");
    assert_eq!(preview.renders.len(), 4);
    assert_eq!(preview.last(), Some("# Hi"));
}

#[test]
fn cursor_motion_is_not_a_change() {
    let mut buffer = EditBuffer::new();
    let mut preview = FakePreview::default();
    replace_text(&mut buffer, &mut preview, "# Hi");
    assert_eq!(preview.renders.len(), 1);

    assert!(!buffer.perform(Action::Move(Motion::DocumentEnd)));
    handle_editor_action(&mut buffer, &mut preview, Action::Move(Motion::DocumentStart));

    assert_eq!(preview.renders.len(), 1);
    assert_eq!(buffer.text(), "# Hi");
}

#[test]
fn typing_after_loaded_text_follows_into_preview() {
    let mut buffer = EditBuffer::new();
    let mut preview = FakePreview::default();
    replace_text(&mut buffer, &mut preview, "# Hi");

    handle_editor_action(&mut buffer, &mut preview, Action::Move(Motion::DocumentEnd));
    type_text(&mut buffer, &mut preview, "\nbody");

    assert_eq!(buffer.text(), "# Hi\nbody");
    assert_eq!(preview.last(), Some("# Hi\nbody"));
}

#[test]
fn typing_re_renders_markdown_items() {
    let mut buffer = EditBuffer::new();
    let mut preview = MarkdownPreview::new();

    type_text(&mut buffer, &mut preview, "# Hi");
    assert_eq!(preview.items().len(), 1);

    handle_editor_action(&mut buffer, &mut preview, Action::Move(Motion::DocumentEnd));
    type_text(&mut buffer, &mut preview, "\n\nbody");
    assert_eq!(preview.items().len(), 2);
}
