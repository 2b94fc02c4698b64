//! Tooltip resolution.
//!
//! A tooltip for an item (or ability) of a build is looked up at three levels,
//! most specific first:
//!
//! 1. the build: `hero.<hero>.builds.<index>.item_tooltips.<item>`
//! 2. the hero: `hero.<hero>.item_tooltips.<item>`
//! 3. every hero: `hero.base.item_tooltips.<item>`
//!
//! The first non-empty string wins. Any level may be missing, and an item with no
//! tooltip at all is normal.

use crate::strings::StringSource;

/// Pseudo hero whose tooltips apply to every hero.
pub const BASE_HERO: &str = "base";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipKind {
    Item,
    Ability,
}

impl TooltipKind {
    fn section(self) -> &'static str {
        match self {
            TooltipKind::Item => "item_tooltips",
            TooltipKind::Ability => "ability_tooltips",
        }
    }
}

/// Keys consulted for a tooltip, in lookup order.
pub fn tooltip_keys(hero: &str, build_index: usize, kind: TooltipKind, key: &str) -> [String; 3] {
    let section = kind.section();
    [
        format!("hero.{hero}.builds.{build_index}.{section}.{key}"),
        format!("hero.{hero}.{section}.{key}"),
        format!("hero.{BASE_HERO}.{section}.{key}"),
    ]
}

/// Resolve the tooltip of `key` for build `build_index` of `hero`.
pub fn get_tooltip<S: StringSource + ?Sized>(
    strings: &S,
    hero: &str,
    build_index: usize,
    kind: TooltipKind,
    key: &str,
) -> Option<String> {
    let (level, tooltip) = tooltip_keys(hero, build_index, kind, key)
        .into_iter()
        .enumerate()
        .find_map(|(level, full_key)| {
            strings
                .lookup(&full_key)
                .filter(|s| !s.is_empty())
                .map(|tooltip| (level, tooltip))
        })?;

    if level > 0 {
        tracing::debug!(
            "Tooltip for {} of {} build {} resolved at level {}",
            key,
            hero,
            build_index,
            level
        );
    }
    Some(tooltip)
}

/// Item tooltip shorthand for [`get_tooltip`].
pub fn get_item_tooltip<S: StringSource + ?Sized>(
    strings: &S,
    hero: &str,
    build_index: usize,
    item: &str,
) -> Option<String> {
    get_tooltip(strings, hero, build_index, TooltipKind::Item, item)
}
