//! Application configuration management utilities.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::Path;

use crate::errors::CliError;

/// Application-wide configuration stored in config.toml.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Hero content document (JSON or TOML).
    pub content_path: Option<Utf8PathBuf>,
    /// Localized string bundle used for tooltips.
    pub strings_path: Option<Utf8PathBuf>,
    /// JSON array of valid hero short-names, used by `validate`.
    pub heroes_path: Option<Utf8PathBuf>,
    /// Preferred language for Steam guide links.
    pub language: Option<String>,
}

/// Keys accepted by `config set`.
pub const CONFIG_KEYS: [&str; 4] = ["content_path", "strings_path", "heroes_path", "language"];

impl AppConfig {
    /// Set `key` to `value`. An empty value clears the key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), CliError> {
        let value = (!value.is_empty()).then(|| value.to_string());
        match key {
            "content_path" => self.content_path = value.map(Utf8PathBuf::from),
            "strings_path" => self.strings_path = value.map(Utf8PathBuf::from),
            "heroes_path" => self.heroes_path = value.map(Utf8PathBuf::from),
            "language" => self.language = value,
            _ => {
                return Err(CliError::UnknownConfigKey {
                    key: key.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Language for Steam guide links, `en` when unset.
    pub fn language(&self) -> &str {
        self.language
            .as_deref()
            .unwrap_or(dct_content::FALLBACK_LANGUAGE)
    }
}

/// Returns the directory where the current executable resides.
pub fn install_dir() -> Option<Utf8PathBuf> {
    let exe = env::current_exe().ok()?;
    let parent = exe.parent()?;
    Utf8PathBuf::from_path_buf(parent.to_path_buf()).ok()
}

/// Returns a config file path located next to the executable.
pub fn config_path(file_name: &str) -> Option<Utf8PathBuf> {
    install_dir().map(|dir| dir.join(file_name))
}

/// Returns the default configuration file path (config.toml).
pub fn default_config_path() -> Option<Utf8PathBuf> {
    config_path("config.toml")
}

/// Reads a configuration file. Returns `None` if it doesn't exist or cannot be parsed.
pub fn read_config(path: &Path) -> Option<AppConfig> {
    let content = fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            tracing::warn!("Ignoring unreadable config file {}: {}", path.display(), e);
            None
        }
    }
}

/// Writes a configuration file.
pub fn write_config(path: &Path, cfg: &AppConfig) -> io::Result<()> {
    let content = toml::to_string_pretty(cfg).map_err(io::Error::other)?;
    fs::write(path, content)
}

/// Loads the application configuration from config.toml.
/// Returns default configuration if file doesn't exist or cannot be parsed.
pub fn load_config() -> AppConfig {
    default_config_path()
        .and_then(|path| read_config(path.as_std_path()))
        .unwrap_or_default()
}

/// Saves the application configuration to config.toml.
pub fn save_config(cfg: &AppConfig) -> io::Result<()> {
    if let Some(path) = default_config_path() {
        write_config(path.as_std_path(), cfg)
    } else {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine config path",
        ))
    }
}
