//! Localized string source abstraction.
//!
//! This module defines the [`StringSource`] trait that decouples tooltip
//! resolution from how localization bundles are fetched or stored. Queries only
//! ever look strings up by fully qualified key, such as
//! `hero.sniper.builds.0.item_tooltips.power_treads`.
//!
//! The crate ships [`StringBundle`], an in-memory bundle built from a nested JSON
//! document. Plain `HashMap<String, String>` maps are sources too, which keeps
//! test doubles trivial.

use crate::error::{Error, Result};
use camino::Utf8Path;
use serde_json::Value;
use std::collections::HashMap;

/// Looks up localized strings by fully qualified, dot-separated key.
///
/// Sources are read-only once handed to a query. Loading, caching and language
/// selection belong to whoever builds the source.
pub trait StringSource {
    /// Return the string stored under `key`, or `None` when the key is absent.
    fn lookup(&self, key: &str) -> Option<String>;
}

impl StringSource for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Flattened localization bundle for one language.
///
/// Built from a nested JSON document where every string leaf is addressed by the
/// path of object keys (and array indices) leading to it:
///
/// ```text
/// { "hero": { "base": { "item_tooltips": { "flask": "Heals" } } } }
///   -> "hero.base.item_tooltips.flask" = "Heals"
///
/// { "hero": { "sniper": { "builds": [ { "item_tooltips": { "blink": "Escape" } } ] } } }
///   -> "hero.sniper.builds.0.item_tooltips.blink" = "Escape"
/// ```
///
/// Numbers and booleans are stored in their JSON text form; `null` leaves are
/// dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringBundle {
    strings: HashMap<String, String>,
}

impl StringBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(contents)?;
        Self::from_json_value(&value)
    }

    pub fn from_json_value(value: &Value) -> Result<Self> {
        let Value::Object(_) = value else {
            return Err(Error::InvalidBundle(
                "root must be a JSON object".to_string(),
            ));
        };

        let mut bundle = Self::new();
        flatten_into(&mut bundle.strings, String::new(), value);
        Ok(bundle)
    }

    /// Load a bundle from a JSON file.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_std_path())?;
        let bundle = Self::from_json_str(&contents)?;
        tracing::info!("Loaded {} localized strings from {}", bundle.len(), path);
        Ok(bundle)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl StringSource for StringBundle {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }
}

fn join_key(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", prefix, segment)
    }
}

fn flatten_into(strings: &mut HashMap<String, String>, prefix: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(strings, join_key(&prefix, key), child);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(strings, join_key(&prefix, &index.to_string()), child);
            }
        }
        Value::String(s) => {
            strings.insert(prefix, s.clone());
        }
        Value::Number(n) => {
            strings.insert(prefix, n.to_string());
        }
        Value::Bool(b) => {
            strings.insert(prefix, b.to_string());
        }
        Value::Null => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn test_flatten_nested_bundle() {
        let bundle = StringBundle::from_json_str(include_str!("../test-data/strings.json")).unwrap();

        assert_eq!(
            bundle.get("hero.base.item_tooltips.flask"),
            Some("Heals over time. Cancelled by damage.")
        );
        assert_eq!(
            bundle.get("hero.alchemist.builds.0.item_tooltips.radiance"),
            Some("Farm two camps at once.")
        );
        assert_eq!(
            bundle.get("hero.alchemist.builds.1.item_tooltips.radiance"),
            Some("")
        );
        assert_eq!(bundle.get("hero.alchemist"), None);
        assert_eq!(bundle.len(), 6);
    }

    #[test]
    fn test_scalar_leaves() {
        let bundle =
            StringBundle::from_json_str(r#"{ "a": { "n": 7, "b": true, "z": null } }"#).unwrap();
        assert_eq!(bundle.get("a.n"), Some("7"));
        assert_eq!(bundle.get("a.b"), Some("true"));
        assert_eq!(bundle.get("a.z"), None);
    }

    #[test]
    fn test_non_object_root_rejected() {
        let err = StringBundle::from_json_str(r#"["tango"]"#).unwrap_err();
        assert!(matches!(err, Error::InvalidBundle(_)));

        let err = StringBundle::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("en.json")).unwrap();
        std::fs::write(&path, include_str!("../test-data/strings.json")).unwrap();

        let bundle = StringBundle::load(&path).unwrap();
        assert_eq!(
            bundle.lookup("hero.alchemist.item_tooltips.tango"),
            Some("Enough regen for the safe lane.".to_string())
        );
    }

    #[test]
    fn test_insert_overrides_loaded_string() {
        let mut bundle =
            StringBundle::from_json_str(include_str!("../test-data/strings.json")).unwrap();
        bundle.insert("hero.base.item_tooltips.tango", "Eat a tree.");
        bundle.insert("hero.base.item_tooltips.blink", "Blink");

        assert_eq!(bundle.get("hero.base.item_tooltips.tango"), Some("Eat a tree."));
        assert_eq!(bundle.lookup("hero.base.item_tooltips.blink"), Some("Blink".to_string()));
        assert_eq!(bundle.len(), 7);
    }

    #[test]
    fn test_hash_map_source() {
        let mut map = HashMap::new();
        map.insert("hero.base.item_tooltips.blink".to_string(), "Blink".to_string());
        assert_eq!(
            map.lookup("hero.base.item_tooltips.blink"),
            Some("Blink".to_string())
        );
        assert_eq!(map.lookup("hero.base.item_tooltips.tango"), None);
    }
}
