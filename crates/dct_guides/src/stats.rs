//! Cross-hero aggregation.
//!
//! Every function here answers a question about the whole store ("which items do
//! carry guides recommend most?", "which heroes does this item counter?") in one
//! pass. Results borrow names from the store.

use crate::iter::{counter_item_iter, hero_build_iter, item_iter, matches_role};
use dct_content::{ContentStore, CounterPhase, GuideRole, HeroBuild, ItemCategory};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// Authored data sometimes prefixes item ids with `item_`.
pub const ITEM_PREFIX: &str = "item_";

/// Strip the optional `item_` prefix from an item key.
pub fn normalize_item_key(key: &str) -> &str {
    key.strip_prefix(ITEM_PREFIX).unwrap_or(key)
}

/// Address of one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GuideRef<'a> {
    pub hero: &'a str,
    pub build_index: usize,
}

/// How often an item is recommended across builds.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendedItem<'a> {
    pub item: &'a str,
    /// Builds recommending the item, per category.
    pub phases: IndexMap<ItemCategory, IndexSet<GuideRef<'a>>>,
    /// Builds recommending the item in any category.
    pub all: IndexSet<GuideRef<'a>>,
    /// Number of builds matching the role filter.
    pub guides: usize,
}

/// How often an item is recommended against heroes.
#[derive(Debug, Clone, Serialize)]
pub struct CounteringItem<'a> {
    pub item: &'a str,
    /// Heroes the item counters, per phase.
    pub phases: IndexMap<CounterPhase, IndexSet<&'a str>>,
    /// Heroes the item counters in any phase.
    pub all: IndexSet<&'a str>,
    /// Number of heroes in the store.
    pub guides: usize,
}

/// Items recommended by builds matching `role`, most recommended first.
///
/// An item counts once per build, however many categories of the build list it.
/// Items with equal counts keep the order in which they were first seen.
pub fn most_recommended_items(
    store: &ContentStore,
    role: Option<GuideRole>,
    phase: Option<ItemCategory>,
) -> Vec<RecommendedItem<'_>> {
    let guides = hero_build_iter(store)
        .filter(|entry| matches_role(entry.build, role))
        .count();

    let mut table: IndexMap<&str, RecommendedItem> = IndexMap::new();
    for entry in item_iter(store, role, phase) {
        let guide = GuideRef {
            hero: entry.hero,
            build_index: entry.build_index,
        };
        let recommended = table
            .entry(entry.item)
            .or_insert_with(|| RecommendedItem {
                item: entry.item,
                phases: IndexMap::new(),
                all: IndexSet::new(),
                guides,
            });
        recommended
            .phases
            .entry(entry.category)
            .or_default()
            .insert(guide);
        recommended.all.insert(guide);
    }

    let mut items: Vec<_> = table.into_values().collect();
    items.sort_by(|a, b| b.all.len().cmp(&a.all.len()));
    items
}

/// Counter items for a player of `role`, countering the most heroes first.
///
/// An item counts once per hero, however many phases or audiences of that hero
/// list it. Heroes are tracked in per-item sets, so the count doesn't depend on
/// the order the counter lists are visited in.
pub fn most_countering_items(
    store: &ContentStore,
    role: Option<GuideRole>,
    phase: Option<CounterPhase>,
) -> Vec<CounteringItem<'_>> {
    let guides = store.len();

    let mut table: IndexMap<&str, CounteringItem> = IndexMap::new();
    for entry in counter_item_iter(store, role, phase) {
        let countering = table
            .entry(entry.item)
            .or_insert_with(|| CounteringItem {
                item: entry.item,
                phases: IndexMap::new(),
                all: IndexSet::new(),
                guides,
            });
        countering
            .phases
            .entry(entry.phase)
            .or_default()
            .insert(entry.hero);
        countering.all.insert(entry.hero);
    }

    let mut items: Vec<_> = table
        .into_values()
        .filter(|countering| !countering.all.is_empty())
        .collect();
    items.sort_by(|a, b| b.all.len().cmp(&a.all.len()));
    items
}

/// Heroes with at least one build listing `item` in any category.
pub fn get_heroes_with_item<'a>(store: &'a ContentStore, item: &str) -> Vec<&'a str> {
    store
        .heroes()
        .filter(|(_, content)| content.builds.iter().any(|build| build.contains_item(item)))
        .map(|(hero, _)| hero)
        .collect()
}

/// Heroes with at least one build marking `item_key` core, for either unit.
///
/// `item_magic_wand` and `magic_wand` are the same key here.
pub fn get_core_heroes<'a>(store: &'a ContentStore, item_key: &str) -> Vec<&'a str> {
    let item = normalize_item_key(item_key);

    store
        .heroes()
        .filter(|(_, content)| {
            content.builds.iter().any(|build| {
                [ItemCategory::Core, ItemCategory::CoreBear]
                    .into_iter()
                    .filter_map(|category| build.items(category))
                    .flatten()
                    .any(|core_item| core_item == item)
            })
        })
        .map(|(hero, _)| hero)
        .collect()
}

/// Heroes listing `item_key` among their counter items.
pub fn get_heroes_countered_by<'a>(store: &'a ContentStore, item_key: &str) -> Vec<&'a str> {
    store
        .heroes()
        .filter(|(_, content)| content.is_countered_by(item_key))
        .map(|(hero, _)| hero)
        .collect()
}

/// How a build uses an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemUsage {
    Core,
    NonCore,
    Absent,
}

/// Classify how `build` uses `item`.
///
/// Categories are scanned in authored order and the first core category
/// containing the item decides. Otherwise any category containing it makes the
/// item non-core.
pub fn classify_item_usage(build: &HeroBuild, item: &str) -> ItemUsage {
    let mut usage = ItemUsage::Absent;
    for (category, items) in &build.items {
        if !items.iter().any(|i| i == item) {
            continue;
        }
        if category.is_core() {
            return ItemUsage::Core;
        }
        usage = ItemUsage::NonCore;
    }
    usage
}

/// Builds of one guide role, partitioned by how they use an item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoleItemStats<'a> {
    pub core: Vec<GuideRef<'a>>,
    pub non_core: Vec<GuideRef<'a>>,
    pub without: Vec<GuideRef<'a>>,
}

/// Per guide role, which builds use `item_key` as core, as non-core, or not at all.
///
/// A build tagged with several roles is counted under each of them.
pub fn get_item_hero_role_stats<'a>(
    store: &'a ContentStore,
    item_key: &str,
) -> IndexMap<GuideRole, RoleItemStats<'a>> {
    let mut stats: IndexMap<GuideRole, RoleItemStats> = GuideRole::ALL
        .into_iter()
        .map(|role| (role, RoleItemStats::default()))
        .collect();

    for entry in hero_build_iter(store) {
        let guide = GuideRef {
            hero: entry.hero,
            build_index: entry.index,
        };
        let usage = classify_item_usage(entry.build, item_key);

        for role in &entry.build.roles {
            let role_stats = stats.entry(*role).or_default();
            match usage {
                ItemUsage::Core => role_stats.core.push(guide),
                ItemUsage::NonCore => role_stats.non_core.push(guide),
                ItemUsage::Absent => role_stats.without.push(guide),
            }
        }
    }

    stats
}
