//! Integrity checks for authored content.
//!
//! These run offline (CI, the `validate` CLI command), never at query time.

use crate::hero::{HeroBuild, ItemCategory};
use crate::store::ContentStore;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

static HERO_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_]+$").expect("hero name pattern is valid"));

/// Whether `name` has the shape of a hero short-name (`legion_commander`).
pub fn is_valid_hero_name(name: impl AsRef<str>) -> bool {
    HERO_NAME.is_match(name.as_ref())
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    #[error("{hero}: not a known hero")]
    UnknownHero { hero: String },

    #[error("{hero}: hero key is not a lowercase short-name")]
    InvalidHeroName { hero: String },

    #[error("{hero}: no builds authored")]
    NoBuilds { hero: String },

    #[error("{hero} build {build_index}: no roles")]
    BuildWithoutRoles { hero: String, build_index: usize },

    #[error("{hero} build {build_index}: core item '{item}' in {category} is not listed in any purchase category")]
    CoreItemNotListed {
        hero: String,
        build_index: usize,
        category: ItemCategory,
        item: String,
    },
}

/// Check `store` against the list of valid hero short-names.
///
/// Returns every issue found, in store order. An empty result means the content
/// is consistent.
pub fn validate<'a>(
    store: &ContentStore,
    valid_heroes: impl IntoIterator<Item = &'a str>,
) -> Vec<IntegrityIssue> {
    let valid_heroes: HashSet<&str> = valid_heroes.into_iter().collect();
    let mut issues = Vec::new();

    for (hero, content) in store.heroes() {
        if !is_valid_hero_name(hero) {
            issues.push(IntegrityIssue::InvalidHeroName {
                hero: hero.to_string(),
            });
        }
        if !valid_heroes.contains(hero) {
            issues.push(IntegrityIssue::UnknownHero {
                hero: hero.to_string(),
            });
        }
        if content.builds.is_empty() {
            issues.push(IntegrityIssue::NoBuilds {
                hero: hero.to_string(),
            });
        }

        for (build_index, build) in content.builds.iter().enumerate() {
            if build.roles.is_empty() {
                issues.push(IntegrityIssue::BuildWithoutRoles {
                    hero: hero.to_string(),
                    build_index,
                });
            }
            check_core_items(hero, build_index, build, &mut issues);
        }
    }

    for issue in &issues {
        tracing::warn!("Content integrity: {}", issue);
    }

    issues
}

/// Core lists must be subsets of the same unit's purchase lists. The primary
/// unit of a dual-unit build has no purchase lists besides `core`, so it is exempt.
fn check_core_items(
    hero: &str,
    build_index: usize,
    build: &HeroBuild,
    issues: &mut Vec<IntegrityIssue>,
) {
    for core_category in [ItemCategory::Core, ItemCategory::CoreBear] {
        if core_category == ItemCategory::Core && build.is_dual_unit() {
            continue;
        }
        let Some(core_items) = build.items(core_category) else {
            continue;
        };

        let listed: HashSet<&str> = build
            .items
            .iter()
            .filter(|(category, _)| {
                !category.is_core() && category.is_bear() == core_category.is_bear()
            })
            .flat_map(|(_, items)| items.iter().map(String::as_str))
            .collect();

        for item in core_items {
            if !listed.contains(item.as_str()) {
                issues.push(IntegrityIssue::CoreItemNotListed {
                    hero: hero.to_string(),
                    build_index,
                    category: core_category,
                    item: item.clone(),
                });
            }
        }
    }
}
