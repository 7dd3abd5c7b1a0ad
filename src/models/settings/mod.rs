// Settings module
// User-editable configuration persisted as config.toml

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: String,
    /// JSON snapshot of booked tour slots; `None` uses the data directory default
    pub booked_entries_path: Option<PathBuf>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            booked_entries_path: None,
            window_width: 520.0,
            window_height: 720.0,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.theme != "light" && self.theme != "dark" {
            return Err(format!(
                "Invalid theme '{}': must be 'light' or 'dark'",
                self.theme
            ));
        }

        if !(320.0..=4096.0).contains(&self.window_width)
            || !(240.0..=4096.0).contains(&self.window_height)
        {
            return Err(format!(
                "Window size {}x{} is out of range",
                self.window_width, self.window_height
            ));
        }

        Ok(())
    }

    pub fn is_dark(&self) -> bool {
        self.theme == "dark"
    }
}
