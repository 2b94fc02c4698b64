//! Lazy traversals over the whole content store.
//!
//! Every function here returns a fresh iterator borrowing the store; nothing is
//! cached between calls, so iterators can be restarted, consumed concurrently,
//! or dropped halfway without affecting each other.
//!
//! Order is always store order: heroes in document order, then builds in list
//! order, then categories/phases in authored order.

use dct_content::{
    ContentStore, CounterAudience, CounterPhase, GuideRole, HeroBuild, ItemCategory,
};
use std::collections::HashSet;

/// One build of one hero.
#[derive(Debug, Clone, Copy)]
pub struct HeroBuildEntry<'a> {
    pub hero: &'a str,
    pub build: &'a HeroBuild,
    pub index: usize,
}

/// One item recommendation of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemEntry<'a> {
    pub hero: &'a str,
    pub build_index: usize,
    pub category: ItemCategory,
    pub item: &'a str,
}

/// One counter item listed against a hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterItemEntry<'a> {
    pub hero: &'a str,
    pub phase: CounterPhase,
    pub audience: CounterAudience,
    pub item: &'a str,
}

/// Every build of every hero.
pub fn hero_build_iter(store: &ContentStore) -> impl Iterator<Item = HeroBuildEntry<'_>> + '_ {
    store.heroes().flat_map(|(hero, content)| {
        content
            .builds
            .iter()
            .enumerate()
            .map(move |(index, build)| HeroBuildEntry { hero, build, index })
    })
}

/// Whether a build matches an optional role filter.
pub fn matches_role(build: &HeroBuild, role: Option<GuideRole>) -> bool {
    role.map_or(true, |role| build.has_role(role))
}

/// Whether items of `category` count as recommendations of `build`.
///
/// `core`, `core_bear`, `neutral` and `neutral_bear` only restate or supplement
/// the purchase lists, so counting them would count items twice.
///
/// Dual-unit override: a build that authors `core_bear` (Lone Druid) has no
/// purchase lists for its primary unit besides `core`, so `core` counts there.
pub fn counts_as_recommendation(build: &HeroBuild, category: ItemCategory) -> bool {
    match category {
        ItemCategory::Core => build.is_dual_unit(),
        ItemCategory::CoreBear | ItemCategory::Neutral | ItemCategory::NeutralBear => false,
        _ => true,
    }
}

/// Whether a counter list for `audience` applies to a player of `role`.
///
/// `all` always applies, `support` only to supports, and `core` to every other
/// role or when no role is given.
pub fn audience_matches(audience: CounterAudience, role: Option<GuideRole>) -> bool {
    match audience {
        CounterAudience::All => true,
        CounterAudience::Support => role == Some(GuideRole::Support),
        CounterAudience::Core => role != Some(GuideRole::Support),
    }
}

/// Recommended items of every build matching `role`, restricted to `phase`.
///
/// Each item is yielded once per (build, category), even if the category lists
/// it several times (`["tango", "tango"]`).
pub fn item_iter<'a>(
    store: &'a ContentStore,
    role: Option<GuideRole>,
    phase: Option<ItemCategory>,
) -> impl Iterator<Item = ItemEntry<'a>> + 'a {
    hero_build_iter(store)
        .filter(move |entry| matches_role(entry.build, role))
        .flat_map(move |entry| {
            entry
                .build
                .items
                .iter()
                .filter(move |(category, _)| phase.map_or(true, |phase| **category == phase))
                .filter(move |(category, _)| counts_as_recommendation(entry.build, **category))
                .flat_map(move |(category, items)| {
                    let mut seen = HashSet::new();
                    items
                        .iter()
                        .filter(move |item| seen.insert(item.as_str()))
                        .map(move |item| ItemEntry {
                            hero: entry.hero,
                            build_index: entry.index,
                            category: *category,
                            item,
                        })
                })
        })
}

/// Counter items of every hero for a player of `role`, restricted to `phase`.
///
/// Nothing is deduplicated: an item listed for two phases of a hero is yielded
/// once per phase.
pub fn counter_item_iter<'a>(
    store: &'a ContentStore,
    role: Option<GuideRole>,
    phase: Option<CounterPhase>,
) -> impl Iterator<Item = CounterItemEntry<'a>> + 'a {
    store.heroes().flat_map(move |(hero, content)| {
        content
            .counter_items
            .iter()
            .filter(move |(counter_phase, _)| {
                phase.map_or(true, |phase| **counter_phase == phase)
            })
            .flat_map(move |(counter_phase, audiences)| {
                audiences
                    .iter()
                    .filter(move |(audience, _)| audience_matches(**audience, role))
                    .flat_map(move |(audience, items)| {
                        items.iter().map(move |item| CounterItemEntry {
                            hero,
                            phase: *counter_phase,
                            audience: *audience,
                            item,
                        })
                    })
            })
    })
}
