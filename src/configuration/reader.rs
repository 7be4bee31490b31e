use serde::{Deserialize, Serialize};

use crate::json::reader::read_json_file;

pub const DEFAULT_CONFIG_PATH: &str = "./config.json";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Configuration {
    pub theme: String,
    pub title: String,
    pub window_width: f32,
    pub window_height: f32,
    // Never read from the file, always the compiled-in crate version.
    #[serde(skip)]
    pub version: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            theme: "Dark".to_string(),
            title: "Markdown".to_string(),
            window_width: 800.0,
            window_height: 500.0,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Reads the startup configuration. Never fails: a missing or malformed file
/// yields the defaults.
pub fn read_configuration(file_path: &str) -> Configuration {
    let version = env!("CARGO_PKG_VERSION").to_string();

    match read_json_file::<Configuration>(file_path) {
        Ok(config) => Configuration { version, ..config },
        Err(err) => {
            if std::path::Path::new(file_path).exists() {
                eprintln!("Warning: could not read {}: {}. Using defaults.", file_path, err);
            } else {
                #[cfg(debug_assertions)]
                eprintln!("No configuration at {}, using defaults.", file_path);
            }
            Configuration::default()
        }
    }
}
