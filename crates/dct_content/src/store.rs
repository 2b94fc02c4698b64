//! The in-memory content store.
//!
//! A [`ContentStore`] maps hero short-names to their [`HeroContent`]. It is loaded
//! once, from a JSON or TOML document, and never mutated afterwards: every query
//! in `dct_guides` takes it by shared reference, so any number of readers may use
//! one store at the same time.
//!
//! Hero order is the document order. Iteration-based queries (most recommended
//! items, hero lists) depend on it for their tie ordering.
//!
//! # Document format
//!
//! ```json
//! {
//!   "alchemist": {
//!     "builds": [
//!       { "roles": ["carry"], "items": { "starting": ["tango"], "core": ["radiance"] } }
//!     ],
//!     "counter_items": { "laning_phase": { "all": ["magic_stick"] } },
//!     "damage_type": "physical"
//!   }
//! }
//! ```

use crate::error::{Error, Result};
use crate::hero::{HeroBuild, HeroContent};
use camino::Utf8Path;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct ContentStore {
    heroes: IndexMap<String, HeroContent>,
}

impl ContentStore {
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let store: Self = serde_json::from_str(contents)?;
        store.log_loaded();
        Ok(store)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let store: Self = toml::from_str(contents)?;
        store.log_loaded();
        Ok(store)
    }

    /// Load a content document, choosing the parser from the file extension.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let parse: fn(&str) -> Result<Self> = match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str,
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::from_toml_str,
            _ => return Err(Error::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::debug!("Loading hero content from {}", path);
        let contents = std::fs::read_to_string(path.as_std_path())?;
        parse(&contents)
    }

    pub fn hero(&self, name: &str) -> Option<&HeroContent> {
        self.heroes.get(name)
    }

    /// The build at `index` of `hero`, if both exist.
    pub fn build(&self, hero: &str, index: usize) -> Option<&HeroBuild> {
        self.hero(hero).and_then(|content| content.builds.get(index))
    }

    pub fn contains_hero(&self, name: &str) -> bool {
        self.heroes.contains_key(name)
    }

    pub fn hero_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.heroes.keys().map(String::as_str)
    }

    /// Heroes with their content, in document order.
    pub fn heroes(&self) -> impl Iterator<Item = (&str, &HeroContent)> + '_ {
        self.heroes.iter().map(|(name, content)| (name.as_str(), content))
    }

    /// Number of heroes.
    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    /// Number of builds across all heroes.
    pub fn build_count(&self) -> usize {
        self.heroes.values().map(|content| content.builds.len()).sum()
    }

    fn log_loaded(&self) {
        tracing::info!(
            "Loaded hero content: {} heroes, {} builds",
            self.len(),
            self.build_count()
        );
    }
}
