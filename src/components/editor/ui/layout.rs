use iced::widget::{Container, Row, button, markdown, scrollable, text_editor};
use iced::{Element, Length, Theme};

use crate::components::editor::Message;
use crate::components::editor::state::session::Session;
use crate::components::editor::text_management::preview::MarkdownPreview;

pub fn generate_layout<'a>(
    session: &'a Session,
    content: &'a text_editor::Content,
    preview: &'a MarkdownPreview,
    theme: &'a Theme,
) -> Element<'a, Message> {
    let file_menu = Row::new()
        .spacing(10)
        .padding(5)
        .width(Length::Fill)
        .push(button("Open...").padding(5).on_press(Message::OpenFile))
        .push(
            button("Save...")
                .padding(5)
                .on_press_maybe(session.save_enabled().then_some(Message::SaveFile)),
        )
        .push(button("Save as...").padding(5).on_press(Message::SaveFileAs));

    let edit_pane = Container::new(
        text_editor(content)
            .on_action(Message::EditorAction)
            .height(Length::Fill),
    )
    .width(Length::FillPortion(1))
    .height(Length::Fill);

    let preview_pane = Container::new(
        scrollable(
            Container::new(markdown::view(preview.items(), theme).map(Message::LinkClicked))
                .padding(10)
                .width(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill),
    )
    .width(Length::FillPortion(1))
    .height(Length::Fill);

    let split = Row::new()
        .push(edit_pane)
        .push(preview_pane)
        .spacing(10)
        .padding(10)
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(iced::widget::Column::new().push(file_menu).push(split))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
