/// The raw-text side of the window.
pub trait EditSurface {
    fn text(&self) -> &str;

    /// Replaces the whole content. Callers are responsible for re-rendering the
    /// preview afterwards, see `content_handler::replace_text`.
    fn set_text(&mut self, text: &str);
}

/// The rendered side of the window. `render` replaces everything previously shown.
pub trait PreviewSurface {
    fn render(&mut self, markdown_text: &str);
}
