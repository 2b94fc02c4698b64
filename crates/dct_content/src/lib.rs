//! Types and loaders for Dota Coach Toolkit hero guide content.
//!
//! The content is authored offline as one JSON or TOML document mapping hero
//! short-names to their builds, counter items and damage type. This crate
//! defines that data model, loads it into an immutable [`ContentStore`], and
//! checks its integrity against a list of valid heroes.
//!
//! Querying the store (build selection, projection, aggregation) lives in the
//! `dct_guides` crate.

pub mod error;
pub mod hero;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
pub use hero::{
    CounterAudience, CounterItems, CounterPhase, DamageType, GuideRole, HeroBuild, HeroContent,
    ItemCategory, FALLBACK_LANGUAGE,
};
pub use store::ContentStore;
pub use validate::{is_valid_hero_name, validate, IntegrityIssue};
