use iced::Theme;

pub fn convert_str_to_theme(theme_str: &str) -> Theme {
    // Accept both the Debug ("CatppuccinMacchiato") and Display ("Catppuccin Macchiato") names.
    let found_theme = Theme::ALL.iter().find(|theme_variant| {
        theme_str == format!("{:?}", theme_variant) || theme_str == theme_variant.to_string()
    });

    match found_theme {
        Some(t) => t.clone(),
        None => {
            eprintln!(
                "Warning: Theme '{}' not recognized. Defaulting to Dark.",
                theme_str
            );
            Theme::Dark
        }
    }
}
