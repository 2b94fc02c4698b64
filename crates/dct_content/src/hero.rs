use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Language used when a guide has no entry for the requested one.
pub const FALLBACK_LANGUAGE: &str = "en";

fn serde_fmt<T: Serialize>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let json = serde_json::to_string(value).map_err(|_| fmt::Error)?;
    let s: String = serde_json::from_str(&json).map_err(|_| fmt::Error)?;
    f.write_str(&s)
}

fn serde_parse<T: DeserializeOwned>(kind: &'static str, s: &str) -> Result<T> {
    serde_json::from_value(serde_json::Value::String(s.to_string())).map_err(|_| {
        Error::InvalidKey {
            kind,
            value: s.to_string(),
        }
    })
}

macro_rules! impl_key_traits {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                serde_fmt(self, f)
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                serde_parse($kind, s)
            }
        }
    };
}

/// Role a guide is written for.
///
/// Coarser than the in-game player role: both support positions share one guide.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum GuideRole {
    Carry,
    Mid,
    Offlane,
    Support,
}

impl GuideRole {
    pub const ALL: [GuideRole; 4] = [
        GuideRole::Carry,
        GuideRole::Mid,
        GuideRole::Offlane,
        GuideRole::Support,
    ];
}

impl_key_traits!(GuideRole, "guide role");

/// Item list category of a build.
///
/// Most categories are purchase phases. `Core`/`CoreBear` only mark which of the
/// items listed elsewhere are build-critical, and `Neutral`/`NeutralBear` hold
/// neutral drops.
/// The `*Bear` variants belong to a hero's companion unit (Lone Druid's Spirit Bear).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Starting,
    EarlyGame,
    MidGame,
    LateGame,
    Situational,
    Neutral,
    Core,
    StartingBear,
    EarlyGameBear,
    MidGameBear,
    LateGameBear,
    SituationalBear,
    NeutralBear,
    CoreBear,
}

impl ItemCategory {
    /// Whether the category belongs to the companion unit.
    pub fn is_bear(self) -> bool {
        matches!(
            self,
            ItemCategory::StartingBear
                | ItemCategory::EarlyGameBear
                | ItemCategory::MidGameBear
                | ItemCategory::LateGameBear
                | ItemCategory::SituationalBear
                | ItemCategory::NeutralBear
                | ItemCategory::CoreBear
        )
    }

    /// Whether this is one of the core marker lists.
    pub fn is_core(self) -> bool {
        matches!(self, ItemCategory::Core | ItemCategory::CoreBear)
    }

    /// The core marker list that applies to items of this category.
    pub fn core_category(self) -> ItemCategory {
        if self.is_bear() {
            ItemCategory::CoreBear
        } else {
            ItemCategory::Core
        }
    }
}

impl_key_traits!(ItemCategory, "item category");

/// Match phase a counter-item recommendation applies to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum CounterPhase {
    LaningPhase,
    MidGame,
    LateGame,
}

impl_key_traits!(CounterPhase, "counter phase");

/// Who a counter-item recommendation is aimed at.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum CounterAudience {
    All,
    Support,
    Core,
}

impl_key_traits!(CounterAudience, "counter audience");

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Magical,
    Physical,
    Pure,
    Neutral,
}

impl_key_traits!(DamageType, "damage type");

/// Counter items of a hero: phase -> audience -> item ids.
pub type CounterItems = IndexMap<CounterPhase, IndexMap<CounterAudience, Vec<String>>>;

/// One authored guide for a hero.
///
/// A build has no identifier of its own. It is addressed by the hero short-name
/// and its index in [`HeroContent::builds`]; index 0 is the hero's default build.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HeroBuild {
    /// Guide roles this build targets, in authored order.
    pub roles: Vec<GuideRole>,

    /// Skill level-up order. Entries may repeat.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub abilities: Vec<String>,

    /// Item lists by category, in authored order.
    pub items: IndexMap<ItemCategory, Vec<String>>,

    /// Steam guide URL per language.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub steam_guide_link: HashMap<String, String>,

    /// Steam workshop id per language.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub steam_guide_workshop_ids: HashMap<String, String>,
}

impl HeroBuild {
    pub fn has_role(&self, role: GuideRole) -> bool {
        self.roles.contains(&role)
    }

    pub fn has_category(&self, category: ItemCategory) -> bool {
        self.items.contains_key(&category)
    }

    /// Items listed under `category`, if the build defines it.
    pub fn items(&self, category: ItemCategory) -> Option<&[String]> {
        self.items.get(&category).map(Vec::as_slice)
    }

    /// Whether `item` is marked core for the unit that `category` belongs to.
    pub fn is_core_item(&self, category: ItemCategory, item: &str) -> bool {
        self.items(category.core_category())
            .is_some_and(|core| core.iter().any(|i| i == item))
    }

    /// Whether `item` appears in any list of this build.
    pub fn contains_item(&self, item: &str) -> bool {
        self.items.values().flatten().any(|i| i == item)
    }

    /// Builds that author a companion core list ("dual-unit" builds) use the plain
    /// `core` list as the only item list of the primary unit.
    pub fn is_dual_unit(&self) -> bool {
        self.has_category(ItemCategory::CoreBear)
    }

    pub fn steam_guide_link(&self, language: &str) -> Option<&str> {
        localized(&self.steam_guide_link, language)
    }

    pub fn steam_guide_workshop_id(&self, language: &str) -> Option<&str> {
        localized(&self.steam_guide_workshop_ids, language)
    }
}

fn localized<'a>(values: &'a HashMap<String, String>, language: &str) -> Option<&'a str> {
    values
        .get(language)
        .or_else(|| values.get(FALLBACK_LANGUAGE))
        .map(String::as_str)
}

/// All guide data authored for one hero.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HeroContent {
    /// Builds in authored order; the first one is the default.
    pub builds: Vec<HeroBuild>,

    /// Items recommended against this hero, independent of its builds.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub counter_items: CounterItems,

    /// Main damage type, for display.
    pub damage_type: DamageType,
}

impl HeroContent {
    pub fn default_build(&self) -> Option<&HeroBuild> {
        self.builds.first()
    }

    /// Whether `item` appears in any counter list of this hero.
    pub fn is_countered_by(&self, item: &str) -> bool {
        self.counter_items
            .values()
            .flat_map(|audiences| audiences.values())
            .flatten()
            .any(|i| i == item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(json: &str) -> HeroBuild {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_category_names() {
        assert_eq!(ItemCategory::EarlyGame.to_string(), "early_game");
        assert_eq!(ItemCategory::CoreBear.to_string(), "core_bear");
        assert_eq!(
            "situational_bear".parse::<ItemCategory>().unwrap(),
            ItemCategory::SituationalBear
        );
        assert_eq!(ItemCategory::NeutralBear.to_string(), "neutral_bear");
        assert!(matches!(
            "shop".parse::<ItemCategory>(),
            Err(Error::InvalidKey { kind: "item category", .. })
        ));
    }

    #[test]
    fn test_role_and_phase_names() {
        assert_eq!(GuideRole::Offlane.to_string(), "offlane");
        assert_eq!("support".parse::<GuideRole>().unwrap(), GuideRole::Support);
        assert!("soft_support".parse::<GuideRole>().is_err());
        assert_eq!(CounterPhase::LaningPhase.to_string(), "laning_phase");
        assert_eq!(DamageType::Pure.to_string(), "pure");
    }

    #[test]
    fn test_core_category_mapping() {
        assert_eq!(ItemCategory::Starting.core_category(), ItemCategory::Core);
        assert_eq!(ItemCategory::Neutral.core_category(), ItemCategory::Core);
        assert_eq!(
            ItemCategory::MidGameBear.core_category(),
            ItemCategory::CoreBear
        );
        assert_eq!(
            ItemCategory::NeutralBear.core_category(),
            ItemCategory::CoreBear
        );
        assert!(ItemCategory::NeutralBear.is_bear());
        assert!(!ItemCategory::NeutralBear.is_core());
        assert!(ItemCategory::Core.is_core());
        assert!(ItemCategory::CoreBear.is_core());
        assert!(!ItemCategory::LateGame.is_core());
    }

    #[test]
    fn test_is_core_item_uses_unit_core_list() {
        let b = build(
            r#"{
                "roles": ["carry"],
                "items": {
                    "mid_game": ["radiance"],
                    "mid_game_bear": ["maelstrom"],
                    "core": ["radiance"],
                    "core_bear": ["maelstrom"]
                }
            }"#,
        );

        assert!(b.is_core_item(ItemCategory::MidGame, "radiance"));
        assert!(!b.is_core_item(ItemCategory::MidGame, "maelstrom"));
        assert!(b.is_core_item(ItemCategory::MidGameBear, "maelstrom"));
        assert!(!b.is_core_item(ItemCategory::MidGameBear, "radiance"));
        assert!(b.is_dual_unit());
    }

    #[test]
    fn test_steam_guide_language_fallback() {
        let b = build(
            r#"{
                "roles": ["mid"],
                "items": {},
                "steam_guide_link": { "en": "https://steam/en", "ru": "https://steam/ru" },
                "steam_guide_workshop_ids": { "en": "2698376898" }
            }"#,
        );

        assert_eq!(b.steam_guide_link("ru"), Some("https://steam/ru"));
        assert_eq!(b.steam_guide_link("de"), Some("https://steam/en"));
        assert_eq!(b.steam_guide_workshop_id("ru"), Some("2698376898"));
    }

    #[test]
    fn test_optional_fields_default() {
        let b = build(r#"{ "roles": ["support"], "items": { "starting": ["tango"] } }"#);
        assert!(b.abilities.is_empty());
        assert!(b.steam_guide_link.is_empty());
        assert_eq!(b.steam_guide_link("en"), None);
        assert!(b.contains_item("tango"));
        assert!(!b.contains_item("flask"));
    }

    #[test]
    fn test_item_order_preserved() {
        let b = build(
            r#"{
                "roles": ["carry"],
                "items": { "late_game": ["a"], "starting": ["b"], "core": ["a"] }
            }"#,
        );
        let order: Vec<_> = b.items.keys().copied().collect();
        assert_eq!(
            order,
            vec![
                ItemCategory::LateGame,
                ItemCategory::Starting,
                ItemCategory::Core
            ]
        );
    }
}
