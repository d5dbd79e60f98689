use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::localization::Language;

/// User-facing defaults persisted between runs: UI language, the grid size
/// offered by the main menu, and the export magnification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_language")]
    pub language: Language,
    #[serde(default = "default_grid_side")]
    pub grid_width: u32,
    #[serde(default = "default_grid_side")]
    pub grid_height: u32,
    #[serde(default = "default_export_scale")]
    pub export_scale: usize,
}

fn default_language() -> Language {
    Language::English
}

fn default_grid_side() -> u32 {
    32
}

fn default_export_scale() -> usize {
    8
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            grid_width: default_grid_side(),
            grid_height: default_grid_side(),
            export_scale: default_export_scale(),
        }
    }
}

fn config_file_path() -> PathBuf {
    // Allow override for tests via env var
    if let Ok(p) = std::env::var("PIXELIQUE_CONFIG") {
        return PathBuf::from(p);
    }
    PathBuf::from("pixelique.json")
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> std::io::Result<()> {
        let data = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, data)
    }

    /// Loads the config from disk, falling back to defaults when the file
    /// is missing or unreadable.
    pub fn load() -> Self {
        let path = config_file_path();
        match Self::load_from_file(&path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::info!("using default config; cannot load {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        let path = config_file_path();
        if let Err(e) = self.save_to_file(&path) {
            log::error!("failed to save config to {}: {}", path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_json() {
        let config = AppConfig {
            language: Language::French,
            grid_width: 16,
            grid_height: 24,
            export_scale: 4,
        };
        let path = std::env::temp_dir().join("pixelique_config_test.json");

        config.save_to_file(&path).unwrap();
        let loaded = AppConfig::load_from_file(&path).unwrap();

        assert_eq!(loaded.language, Language::French);
        assert_eq!(loaded.grid_width, 16);
        assert_eq!(loaded.grid_height, 24);
        assert_eq!(loaded.export_scale, 4);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let partial: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(partial.language, Language::English);
        assert_eq!(partial.grid_width, 32);
        assert_eq!(partial.export_scale, 8);
    }
}
