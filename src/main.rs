mod configuration;
mod document;

mod json {
    pub mod reader;
}

mod components {
    pub mod editor;
}

#[cfg(test)]
mod tests;

use components::editor::Editor;
use configuration::reader::{DEFAULT_CONFIG_PATH, read_configuration};

fn main() -> iced::Result {
    let config = read_configuration(DEFAULT_CONFIG_PATH);
    let window_size = iced::Size::new(config.window_width, config.window_height);

    iced::application(
        move || Editor::create(config.clone()),
        Editor::update,
        Editor::view,
    )
    .title(Editor::title)
    .theme(Editor::theme)
    .subscription(Editor::subscription)
    .window_size(window_size)
    .centered()
    .run()
}
