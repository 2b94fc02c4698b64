//! UI-ready views of a resolved build.
//!
//! Projection assumes the (hero, build index) pair came out of the selector.
//! Anything else is a caller bug and is reported as an [`Error`] instead of
//! returning partial data.
//!
//! Views own their data: nothing returned here borrows from the content store.

use crate::error::{Error, Result};
use crate::iter::audience_matches;
use crate::strings::StringSource;
use crate::tooltip::{get_tooltip, TooltipKind};
use dct_content::{ContentStore, CounterPhase, GuideRole, HeroBuild, ItemCategory};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;

fn is_false(value: &bool) -> bool {
    !*value
}

/// An item of a projected build.
///
/// # JSON format
///
/// ```json
/// { "name": "tango", "isCore": true, "info": "Cheap regeneration." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedItem {
    pub name: String,
    #[serde(skip_serializing_if = "is_false")]
    pub is_core: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

/// Projected item lists by category. Categories the build doesn't author are absent.
pub type ItemBuildView = IndexMap<ItemCategory, Vec<ProjectedItem>>;

/// An ability level-up step of a projected build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedAbility {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

fn resolve_build<'a>(
    store: &'a ContentStore,
    hero: &str,
    build_index: usize,
) -> Result<&'a HeroBuild> {
    let content = store
        .hero(hero)
        .ok_or_else(|| Error::HeroNotFound(hero.to_string()))?;

    content
        .builds
        .get(build_index)
        .ok_or_else(|| Error::BuildIndexOutOfRange {
            hero: hero.to_string(),
            index: build_index,
            count: content.builds.len(),
        })
}

/// Project the item lists of build `build_index` of `hero`.
///
/// Repeated entries in a list collapse into their first occurrence. Items are
/// flagged core when the core list of their unit (`core`, or `core_bear` for
/// companion categories) contains them. When `strings` is given, each item gets
/// the tooltip resolved for it, if any.
pub fn project_item_build(
    store: &ContentStore,
    hero: &str,
    build_index: usize,
    strings: Option<&dyn StringSource>,
) -> Result<ItemBuildView> {
    let build = resolve_build(store, hero, build_index)?;

    let view: ItemBuildView = build
        .items
        .iter()
        .map(|(category, items)| {
            let mut seen = HashSet::new();
            let projected: Vec<ProjectedItem> = items
                .iter()
                .filter(|item| seen.insert(item.as_str()))
                .map(|item| ProjectedItem {
                    name: item.clone(),
                    is_core: build.is_core_item(*category, item),
                    info: strings.and_then(|strings| {
                        get_tooltip(strings, hero, build_index, TooltipKind::Item, item)
                    }),
                })
                .collect();
            (*category, projected)
        })
        .collect();

    Ok(view)
}

/// Project the ability order of build `build_index` of `hero`.
///
/// Unlike items, repeated abilities are kept: each entry is one level-up.
pub fn project_ability_build(
    store: &ContentStore,
    hero: &str,
    build_index: usize,
    strings: Option<&dyn StringSource>,
) -> Result<Vec<ProjectedAbility>> {
    let build = resolve_build(store, hero, build_index)?;

    Ok(build
        .abilities
        .iter()
        .map(|ability| ProjectedAbility {
            name: ability.clone(),
            info: strings.and_then(|strings| {
                get_tooltip(strings, hero, build_index, TooltipKind::Ability, ability)
            }),
        })
        .collect())
}

/// Items to buy against `hero` as a player of `role`, by phase.
///
/// Audience lists are merged per phase following the same rule as
/// [`counter_item_iter`](crate::iter::counter_item_iter), keeping the first
/// occurrence of each item. Phases with nothing left are omitted. Returns `None`
/// for an unknown hero.
pub fn counter_items_for(
    store: &ContentStore,
    hero: &str,
    role: Option<GuideRole>,
) -> Option<IndexMap<CounterPhase, Vec<String>>> {
    let content = store.hero(hero)?;

    let view: IndexMap<CounterPhase, Vec<String>> = content
        .counter_items
        .iter()
        .filter_map(|(phase, audiences)| {
            let mut seen = HashSet::new();
            let items: Vec<String> = audiences
                .iter()
                .filter(|(audience, _)| audience_matches(**audience, role))
                .flat_map(|(_, items)| items.iter())
                .filter(|item| seen.insert(item.as_str()))
                .cloned()
                .collect();
            (!items.is_empty()).then_some((*phase, items))
        })
        .collect();

    Some(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings::StringBundle;
    use crate::test_support::example_store;

    fn item(name: &str, is_core: bool) -> ProjectedItem {
        ProjectedItem {
            name: name.to_string(),
            is_core,
            info: None,
        }
    }

    #[test]
    fn test_duplicates_collapse_with_core_flag() {
        let store = example_store();
        let view = project_item_build(&store, "alchemist", 0, None).unwrap();

        assert_eq!(
            view[&ItemCategory::Starting],
            vec![item("tango", true), item("flask", false)]
        );
        assert_eq!(
            view[&ItemCategory::MidGame],
            vec![item("radiance", true), item("black_king_bar", false)]
        );
    }

    #[test]
    fn test_absent_categories_omitted() {
        let store = example_store();
        let view = project_item_build(&store, "alchemist", 1, None).unwrap();
        let categories: Vec<_> = view.keys().copied().collect();

        assert_eq!(
            categories,
            vec![
                ItemCategory::Starting,
                ItemCategory::MidGame,
                ItemCategory::Core
            ]
        );
        assert!(!view.contains_key(&ItemCategory::LateGame));
    }

    #[test]
    fn test_bear_categories_use_bear_core() {
        let store = example_store();
        let view = project_item_build(&store, "lone_druid", 0, None).unwrap();

        assert_eq!(
            view[&ItemCategory::MidGameBear],
            vec![item("maelstrom", true)]
        );
        assert_eq!(
            view[&ItemCategory::StartingBear],
            vec![item("quelling_blade", false)]
        );
        assert_eq!(
            view[&ItemCategory::Core],
            vec![item("radiance", true), item("magic_wand", true)]
        );
    }

    #[test]
    fn test_companion_neutral_items_projected() {
        let store = ContentStore::from_json_str(
            r#"{
                "lone_druid": {
                    "builds": [{
                        "roles": ["carry"],
                        "items": {
                            "mid_game_bear": ["maelstrom"],
                            "neutral_bear": ["trusty_shovel", "maelstrom", "trusty_shovel"],
                            "core": ["radiance"],
                            "core_bear": ["maelstrom"]
                        }
                    }],
                    "damage_type": "physical"
                }
            }"#,
        )
        .unwrap();
        let view = project_item_build(&store, "lone_druid", 0, None).unwrap();

        assert_eq!(
            view[&ItemCategory::NeutralBear],
            vec![item("trusty_shovel", false), item("maelstrom", true)]
        );
    }

    #[test]
    fn test_projection_preserves_distinct_items() {
        let store = example_store();
        for (hero, content) in store.heroes() {
            for (index, build) in content.builds.iter().enumerate() {
                let view = project_item_build(&store, hero, index, None).unwrap();
                assert_eq!(view.len(), build.items.len());
                for (category, items) in &build.items {
                    let expected: HashSet<&str> = items.iter().map(String::as_str).collect();
                    let projected: HashSet<&str> =
                        view[category].iter().map(|i| i.name.as_str()).collect();
                    assert_eq!(projected, expected, "{hero} {index} {category}");
                }
            }
        }
    }

    #[test]
    fn test_tooltips_attached_when_resolved() {
        let store = example_store();
        let strings = StringBundle::from_json_str(include_str!("../test-data/strings.json")).unwrap();
        let view = project_item_build(&store, "alchemist", 0, Some(&strings)).unwrap();

        let starting = &view[&ItemCategory::Starting];
        assert_eq!(
            starting[0].info.as_deref(),
            Some("Enough regen for the safe lane.")
        );
        assert_eq!(
            starting[1].info.as_deref(),
            Some("Heals over time. Cancelled by damage.")
        );
        assert_eq!(
            view[&ItemCategory::MidGame][0].info.as_deref(),
            Some("Farm two camps at once.")
        );
        assert_eq!(view[&ItemCategory::EarlyGame][0].info, None);
    }

    #[test]
    fn test_json_shape() {
        let store = example_store();
        let view = project_item_build(&store, "alchemist", 0, None).unwrap();
        let json = serde_json::to_value(&view[&ItemCategory::Starting]).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{ "name": "tango", "isCore": true }, { "name": "flask" }])
        );
    }

    #[test]
    fn test_view_is_independent_copy() {
        let store = example_store();
        let mut view = project_item_build(&store, "alchemist", 0, None).unwrap();
        view[&ItemCategory::Starting].clear();
        view.shift_remove(&ItemCategory::Core);

        let again = project_item_build(&store, "alchemist", 0, None).unwrap();
        assert_eq!(again[&ItemCategory::Starting].len(), 2);
        assert!(again.contains_key(&ItemCategory::Core));
    }

    #[test]
    fn test_invalid_input_fails_loudly() {
        let store = example_store();
        assert!(matches!(
            project_item_build(&store, "pudge", 0, None),
            Err(Error::HeroNotFound(hero)) if hero == "pudge"
        ));
        assert!(matches!(
            project_item_build(&store, "alchemist", 2, None),
            Err(Error::BuildIndexOutOfRange { index: 2, count: 2, .. })
        ));
        assert!(project_ability_build(&store, "alchemist", 9, None).is_err());
    }

    #[test]
    fn test_ability_build_keeps_repeats() {
        let store = example_store();
        let strings = StringBundle::from_json_str(include_str!("../test-data/strings.json")).unwrap();
        let abilities = project_ability_build(&store, "alchemist", 0, Some(&strings)).unwrap();

        let names: Vec<_> = abilities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "alchemist_acid_spray",
                "alchemist_goblins_greed",
                "alchemist_acid_spray",
                "special_bonus_unique_alchemist_2"
            ]
        );
        assert_eq!(
            abilities[1].info.as_deref(),
            Some("Extra gold on every last hit.")
        );
        assert_eq!(abilities[0].info, None);

        assert!(project_ability_build(&store, "sniper", 0, None)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_counter_items_for_role() {
        let store = example_store();

        let core = counter_items_for(&store, "alchemist", None).unwrap();
        assert_eq!(core[&CounterPhase::LaningPhase], vec!["magic_wand", "wind_lace"]);
        assert_eq!(core[&CounterPhase::MidGame], vec!["spirit_vessel"]);
        assert_eq!(
            core[&CounterPhase::LateGame],
            vec!["abyssal_blade", "spirit_vessel"]
        );

        let support = counter_items_for(&store, "alchemist", Some(GuideRole::Support)).unwrap();
        assert_eq!(
            support[&CounterPhase::MidGame],
            vec!["spirit_vessel", "glimmer_cape"]
        );
        assert!(!support.contains_key(&CounterPhase::LateGame));

        let merged = counter_items_for(&store, "sniper", Some(GuideRole::Carry)).unwrap();
        assert_eq!(merged[&CounterPhase::MidGame], vec!["blink"]);

        assert!(counter_items_for(&store, "pudge", None).is_none());
    }
}
