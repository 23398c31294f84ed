use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::feed::post::Author;
use crate::feed::seed::{DEFAULT_DISPLAY_NAME, DEFAULT_HANDLE};
use crate::ThemeMode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at specified path: {0}")]
    NotFound(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "default_image_preview_enabled")]
    pub image_preview_enabled: bool,
    #[serde(default = "default_image_protocol")]
    pub image_protocol: String,
    /// Directory holding bundled images (`<name>.png|jpg|jpeg`)
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,
    #[serde(default)]
    pub profile: ProfileConfig,
}

/// The logged-in user shown on the profile screen
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProfileConfig {
    #[serde(default = "default_display_name")]
    pub display_name: String,
    #[serde(default = "default_handle")]
    pub handle: String,
    #[serde(default = "default_bio")]
    pub bio: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_joined")]
    pub joined: String,
    #[serde(default = "default_following")]
    pub following: u32,
    #[serde(default = "default_followers")]
    pub followers: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vim_mode: false,
            theme: ThemeMode::default(),
            image_preview_enabled: default_image_preview_enabled(),
            image_protocol: default_image_protocol(),
            assets_dir: None,
            profile: ProfileConfig::default(),
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            display_name: default_display_name(),
            handle: default_handle(),
            bio: default_bio(),
            location: default_location(),
            joined: default_joined(),
            following: default_following(),
            followers: default_followers(),
        }
    }
}

impl ProfileConfig {
    pub fn author(&self) -> Author {
        Author::new(self.display_name.clone(), self.handle.trim_start_matches('@'))
    }
}

impl Config {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        // An empty file is a valid "all defaults" config
        if s.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&contents)
    }
}

fn default_image_preview_enabled() -> bool {
    true
}

fn default_image_protocol() -> String {
    "auto".to_string()
}

fn default_display_name() -> String {
    DEFAULT_DISPLAY_NAME.to_string()
}

fn default_handle() -> String {
    DEFAULT_HANDLE.to_string()
}

fn default_bio() -> String {
    "Computer Scientist | Football Lover | Travelling".to_string()
}

fn default_location() -> String {
    "Nairobi".to_string()
}

fn default_joined() -> String {
    "September 2024".to_string()
}

fn default_following() -> u32 {
    128
}

fn default_followers() -> u32 {
    456
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_yaml_str("").unwrap();
        assert!(!config.vim_mode);
        assert_eq!(config.theme, ThemeMode::Light);
        assert!(config.image_preview_enabled);
        assert_eq!(config.image_protocol, "auto");
        assert_eq!(config.profile, ProfileConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let yaml = "vim_mode: true\ntheme: dark\nprofile:\n  display_name: Ada Lovelace\n  handle: \"@ada\"\n";
        let config = Config::from_yaml_str(yaml).unwrap();
        assert!(config.vim_mode);
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.profile.display_name, "Ada Lovelace");
        assert_eq!(config.profile.location, "Nairobi");

        let author = config.profile.author();
        assert_eq!(author.handle, "ada");
    }

    #[test]
    fn test_assets_dir() {
        let config = Config::from_yaml_str("assets_dir: /opt/chirp/assets").unwrap();
        assert_eq!(config.assets_dir, Some(PathBuf::from("/opt/chirp/assets")));
    }

    #[test]
    fn test_invalid_theme_is_parse_error() {
        let err = Config::from_yaml_str("theme: purple").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let err = Config::load(Path::new("/no/such/chirptui.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
