use crate::errors::CliError;
use camino::{Utf8Path, Utf8PathBuf};
use dct_content::ContentStore;
use dct_guides::StringBundle;
use miette::Result;
use serde::Serialize;

pub mod config;

use config::AppConfig;

#[macro_export]
macro_rules! println_pad {
    ($($arg:tt)*) => {{
        let __s = format!($($arg)*);
        for __line in __s.lines() {
            println!("    {}", __line);
        }
    }};
}

/// Where to read content from: command line flags first, then config.toml.
#[derive(Debug, Clone, Default)]
pub struct ContentSources {
    pub content_path: Option<Utf8PathBuf>,
    pub strings_path: Option<Utf8PathBuf>,
    pub config: AppConfig,
}

impl ContentSources {
    pub fn new(
        content_path: Option<Utf8PathBuf>,
        strings_path: Option<Utf8PathBuf>,
        config: AppConfig,
    ) -> Self {
        Self {
            content_path: content_path.or_else(|| config.content_path.clone()),
            strings_path: strings_path.or_else(|| config.strings_path.clone()),
            config,
        }
    }

    /// Load the hero content store. Content is required by every query command.
    pub fn load_store(&self) -> Result<ContentStore> {
        let path = self
            .content_path
            .as_deref()
            .ok_or(CliError::ContentNotConfigured)?;
        load_store(path)
    }

    /// Load the string bundle, if one is configured.
    pub fn load_strings(&self) -> Result<Option<StringBundle>> {
        let Some(path) = self.strings_path.as_deref() else {
            tracing::debug!("No string bundle configured, tooltips disabled");
            return Ok(None);
        };
        StringBundle::load(path)
            .map(Some)
            .map_err(|source| CliError::StringsLoad { source }.into())
    }

    /// Language for Steam guide links.
    pub fn language(&self) -> &str {
        self.config.language()
    }
}

pub fn load_store(path: &Utf8Path) -> Result<ContentStore> {
    if !path.exists() {
        return Err(CliError::content_not_found(path.to_path_buf()).into());
    }
    ContentStore::load(path).map_err(|source| CliError::ContentLoad { source }.into())
}

/// Reads a JSON array of hero short-names.
pub fn load_hero_list(path: &Utf8Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(CliError::content_not_found(path.to_path_buf()).into());
    }
    let contents = std::fs::read_to_string(path).map_err(CliError::from)?;
    serde_json::from_str(&contents)
        .map_err(|source| CliError::invalid_hero_list(path.to_path_buf(), source).into())
}

/// Fails with a diagnostic when `hero` isn't in the store.
pub fn ensure_hero(store: &ContentStore, hero: &str) -> Result<()> {
    if store.contains_hero(hero) {
        Ok(())
    } else {
        Err(CliError::hero_not_found(hero).into())
    }
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| miette::miette!("Failed to serialize output: {}", e))?;
    println!("{}", json);
    Ok(())
}

/// Formats `count` out of `total` as a percentage.
pub fn percent(count: usize, total: usize) -> String {
    if total == 0 {
        return "0%".to_string();
    }
    format!("{:.0}%", count as f64 * 100.0 / total as f64)
}
