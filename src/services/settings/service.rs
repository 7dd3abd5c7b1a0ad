use crate::models::settings::Settings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";
const BOOKINGS_FILE: &str = "booked_entries.json";

/// Loads and saves `config.toml`.
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service rooted in the platform config directory, or the current
    /// directory when no home directory can be resolved.
    pub fn from_project_dirs() -> Self {
        match project_dirs() {
            Some(dirs) => Self::new(dirs.config_dir().join(CONFIG_FILE)),
            None => {
                log::warn!("Unable to resolve project directory; using current dir for settings");
                Self::new(CONFIG_FILE)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings; a missing file yields defaults.
    pub fn get(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }

        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&data)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        fs::write(&self.path, data)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        Ok(())
    }

    /// Where the booking snapshot lives: the configured path, else the data directory.
    pub fn resolve_booked_entries_path(settings: &Settings) -> PathBuf {
        if let Some(path) = &settings.booked_entries_path {
            return path.clone();
        }
        match project_dirs() {
            Some(dirs) => dirs.data_dir().join(BOOKINGS_FILE),
            None => PathBuf::from(BOOKINGS_FILE),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "TourCalendar", "TourCalendar")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join(CONFIG_FILE));
        assert_eq!(service.get().unwrap(), Settings::default());
    }

    #[test]
    fn test_update_then_get_persists() {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join(CONFIG_FILE));

        let settings = Settings {
            theme: "dark".to_string(),
            booked_entries_path: Some(PathBuf::from("/srv/bookings.json")),
            ..Settings::default()
        };
        service.update(&settings).unwrap();

        assert_eq!(service.get().unwrap(), settings);
    }

    #[test]
    fn test_update_rejects_invalid_settings() {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join(CONFIG_FILE));
        let settings = Settings {
            theme: "neon".to_string(),
            ..Settings::default()
        };
        assert!(service.update(&settings).is_err());
        assert!(!service.path().exists());
    }

    #[test]
    fn test_configured_bookings_path_wins() {
        let settings = Settings {
            booked_entries_path: Some(PathBuf::from("bookings.json")),
            ..Settings::default()
        };
        assert_eq!(
            SettingsService::resolve_booked_entries_path(&settings),
            PathBuf::from("bookings.json")
        );
    }
}
