use crate::println_pad;
use crate::utils::{print_json, ContentSources};
use colored::Colorize;
use dct_content::ContentStore;
use dct_guides::{get_core_heroes, get_heroes_countered_by, get_heroes_with_item};
use miette::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    /// Heroes with a build listing the item anywhere. Exact match.
    WithItem,
    /// Heroes with a build listing the item as core. `item_` prefix optional.
    Core,
    /// Heroes listing the item among their counter items. Exact match.
    CounteredBy,
}

pub struct LookupArgs {
    pub item: String,
    pub kind: LookupKind,
    pub json: bool,
}

fn find_heroes<'a>(store: &'a ContentStore, kind: LookupKind, item: &str) -> Vec<&'a str> {
    match kind {
        LookupKind::WithItem => get_heroes_with_item(store, item),
        LookupKind::Core => get_core_heroes(store, item),
        LookupKind::CounteredBy => get_heroes_countered_by(store, item),
    }
}

fn title(kind: LookupKind, item: &str) -> String {
    match kind {
        LookupKind::WithItem => format!("🧙 Heroes buying {}:", item),
        LookupKind::Core => format!("⭐ Heroes with {} as core:", item),
        LookupKind::CounteredBy => format!("🛡️ Heroes countered by {}:", item),
    }
}

pub fn show_heroes(sources: &ContentSources, args: LookupArgs) -> Result<()> {
    let store = sources.load_store()?;
    let heroes = find_heroes(&store, args.kind, &args.item);

    if args.json {
        return print_json(&heroes);
    }

    println_pad!("{}", title(args.kind, &args.item).bright_blue().bold());
    if heroes.is_empty() {
        println_pad!("   {}", "No heroes found".bright_yellow());
        return Ok(());
    }
    for hero in &heroes {
        println_pad!("   {} {}", "•".bright_cyan(), hero.bright_white().bold());
    }
    println_pad!("\n{}", format!("{} hero(es)", heroes.len()).dimmed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ContentStore {
        ContentStore::from_json_str(
            r#"{
                "sniper": {
                    "builds": [{
                        "roles": ["mid"],
                        "items": { "early_game": ["item_power_treads"], "core": ["item_power_treads"] }
                    }],
                    "counter_items": { "laning_phase": { "all": ["item_blink"] } },
                    "damage_type": "physical"
                },
                "axe": {
                    "builds": [{
                        "roles": ["offlane"],
                        "items": { "starting": ["power_treads"], "core": ["blink"] }
                    }],
                    "damage_type": "physical"
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_prefixed_keys_match_exactly() {
        let store = store();
        assert_eq!(
            find_heroes(&store, LookupKind::WithItem, "item_power_treads"),
            vec!["sniper"]
        );
        assert_eq!(
            find_heroes(&store, LookupKind::WithItem, "power_treads"),
            vec!["axe"]
        );
        assert_eq!(
            find_heroes(&store, LookupKind::CounteredBy, "item_blink"),
            vec!["sniper"]
        );
        assert!(find_heroes(&store, LookupKind::CounteredBy, "blink").is_empty());
    }

    #[test]
    fn test_core_lookup_ignores_prefix() {
        let store = store();
        assert_eq!(
            find_heroes(&store, LookupKind::Core, "item_blink"),
            vec!["axe"]
        );
        assert_eq!(
            find_heroes(&store, LookupKind::Core, "blink"),
            vec!["axe"]
        );
    }
}
