use iced::event::Event;
use iced::keyboard::Key;
use iced::widget::{markdown, text_editor};
use iced::{Element, Subscription, Task, Theme};

use crate::components::editor::actions::file_actions::{self, Effect};
use crate::components::editor::state::session::Session;
use crate::components::editor::text_management::content_handler;
use crate::components::editor::text_management::edit_buffer::EditBuffer;
use crate::components::editor::text_management::preview::MarkdownPreview;
use crate::components::editor::ui::{dialogs, layout};
use crate::configuration::reader::Configuration;
use crate::configuration::theme;
use crate::document::{self, FileError, FileLocator};

#[derive(Debug, Clone)]
pub enum Message {
    // Text editing
    EditorAction(text_editor::Action),
    LinkClicked(markdown::Uri),

    // File menu
    OpenFile,
    OpenTargetChosen(Result<Option<FileLocator>, FileError>),
    FileLoaded(Result<(FileLocator, String), FileError>),
    SaveFile,
    FileSaved(Result<FileLocator, FileError>),
    SaveFileAs,
    SaveTargetChosen(Result<Option<FileLocator>, FileError>),
    FileSavedAs(Result<FileLocator, FileError>),

    NoticeDismissed,
}

pub struct Editor {
    session: Session,
    edit: EditBuffer,
    preview: MarkdownPreview,
    theme: Theme,
}

impl Editor {
    pub fn create(flags: Configuration) -> (Self, Task<Message>) {
        #[cfg(debug_assertions)]
        eprintln!("Starting {} v{}", flags.title, flags.version);

        let editor_instance = Editor {
            session: Session::new(flags.title.clone()),
            edit: EditBuffer::new(),
            preview: MarkdownPreview::new(),
            theme: theme::convert_str_to_theme(&flags.theme),
        };

        (editor_instance, Task::none())
    }

    pub fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::EditorAction(action) => {
                content_handler::handle_editor_action(&mut state.edit, &mut state.preview, action);
                Task::none()
            }
            Message::LinkClicked(_uri) => {
                #[cfg(debug_assertions)]
                eprintln!("Editor: ignoring link click on {}", _uri);
                Task::none()
            }

            Message::OpenFile => {
                Task::perform(dialogs::pick_markdown_file(), Message::OpenTargetChosen)
            }
            Message::OpenTargetChosen(result) => {
                let effect = file_actions::handle_open_target_chosen(result);
                Self::run(effect)
            }
            Message::FileLoaded(result) => {
                let effect = file_actions::handle_file_loaded(
                    &mut state.session,
                    &mut state.edit,
                    &mut state.preview,
                    result,
                );
                Self::run(effect)
            }

            Message::SaveFile => {
                let effect = file_actions::handle_save(&state.session, &state.edit);
                Self::run(effect)
            }
            Message::FileSaved(result) => {
                let effect = file_actions::handle_file_written(&mut state.session, false, result);
                Self::run(effect)
            }

            Message::SaveFileAs => {
                Task::perform(dialogs::pick_save_target(), Message::SaveTargetChosen)
            }
            Message::SaveTargetChosen(result) => {
                let effect = file_actions::handle_save_target_chosen(&state.edit, result);
                Self::run(effect)
            }
            Message::FileSavedAs(result) => {
                let effect = file_actions::handle_file_written(&mut state.session, true, result);
                Self::run(effect)
            }

            Message::NoticeDismissed => Task::none(),
        }
    }

    // Turns a handler outcome into the task that carries it out.
    fn run(effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::Notify(notice) => dialogs::show_notice(notice),
            Effect::Load(locator) => {
                Task::perform(document::load_document(locator), Message::FileLoaded)
            }
            Effect::Write {
                target,
                text,
                adopt,
            } => {
                let on_done: fn(Result<FileLocator, FileError>) -> Message = if adopt {
                    Message::FileSavedAs
                } else {
                    Message::FileSaved
                };
                Task::perform(document::save_document(target, text), on_done)
            }
        }
    }

    pub fn view(state: &Self) -> Element<'_, Message> {
        layout::generate_layout(
            &state.session,
            state.edit.content(),
            &state.preview,
            &state.theme,
        )
    }

    pub fn title(state: &Self) -> String {
        state.session.title().to_string()
    }

    pub fn theme(state: &Self) -> Theme {
        state.theme.clone()
    }

    pub fn subscription(_state: &Self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status, _window| match event {
            Event::Keyboard(iced::keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                if !modifiers.command() {
                    return None;
                }

                match &key {
                    Key::Character(c) => match c.as_str() {
                        "o" | "O" => Some(Message::OpenFile),
                        "s" | "S" if modifiers.shift() => Some(Message::SaveFileAs),
                        "s" | "S" => Some(Message::SaveFile),
                        _ => None,
                    },
                    _ => None,
                }
            }
            _ => None,
        })
    }
}
