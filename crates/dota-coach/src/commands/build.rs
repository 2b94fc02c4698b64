use crate::errors::CliError;
use crate::println_pad;
use crate::utils::{ensure_hero, print_json, ContentSources};
use colored::Colorize;
use dct_content::{ContentStore, GuideRole, HeroBuild};
use dct_guides::{
    closest_build, counter_items_for, project_ability_build, project_item_build, select_build,
    PlayerRole, StringSource,
};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

pub struct BuildArgs {
    pub hero: String,
    pub role: Option<PlayerRole>,
    pub json: bool,
}

pub struct ClosestArgs {
    pub hero: String,
    pub role: PlayerRole,
    pub json: bool,
}

pub struct AbilitiesArgs {
    pub hero: String,
    pub role: Option<PlayerRole>,
    pub json: bool,
}

pub struct CountersArgs {
    pub hero: String,
    pub role: Option<PlayerRole>,
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BuildOutput<'a, V> {
    hero: &'a str,
    build_index: usize,
    roles: &'a [GuideRole],
    #[serde(skip_serializing_if = "Option::is_none")]
    steam_guide_link: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    steam_guide_workshop_id: Option<&'a str>,
    #[serde(flatten)]
    view: V,
}

#[derive(Serialize)]
struct ItemsView<T> {
    items: T,
}

#[derive(Serialize)]
struct AbilitiesView<T> {
    abilities: T,
}

fn format_roles(roles: &[GuideRole]) -> String {
    roles
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_build_header(hero: &str, index: usize, build: &HeroBuild, language: &str) {
    println_pad!(
        "{} {} {}",
        "🧙 Hero:".bright_blue().bold(),
        hero.bright_cyan().bold(),
        format!("(build {})", index).dimmed()
    );
    println_pad!(
        "{} {}",
        "🎯 Roles:".bright_green(),
        format_roles(&build.roles).bright_white().bold()
    );
    if let Some(link) = build.steam_guide_link(language) {
        println_pad!("{} {}", "🔗 Guide:".bright_yellow(), link.bright_white());
    }
}

fn print_item_build(
    store: &ContentStore,
    hero: &str,
    index: usize,
    build: &HeroBuild,
    sources: &ContentSources,
    strings: Option<&dyn StringSource>,
    json: bool,
) -> Result<()> {
    let view = project_item_build(store, hero, index, strings).into_diagnostic()?;

    if json {
        return print_json(&BuildOutput {
            hero,
            build_index: index,
            roles: &build.roles,
            steam_guide_link: build.steam_guide_link(sources.language()),
            steam_guide_workshop_id: build.steam_guide_workshop_id(sources.language()),
            view: ItemsView { items: &view },
        });
    }

    print_build_header(hero, index, build, sources.language());
    for (category, items) in &view {
        println_pad!("\n{}", format!("🛒 {}:", category).bright_magenta().bold());
        for item in items {
            let marker = if item.is_core {
                "★".bright_yellow()
            } else {
                "•".bright_cyan()
            };
            match &item.info {
                Some(info) => println_pad!(
                    "   {} {} - {}",
                    marker,
                    item.name.bright_white().bold(),
                    info.dimmed()
                ),
                None => println_pad!("   {} {}", marker, item.name.bright_white().bold()),
            }
        }
    }

    Ok(())
}

pub fn show_build(sources: &ContentSources, args: BuildArgs) -> Result<()> {
    let store = sources.load_store()?;
    ensure_hero(&store, &args.hero)?;
    let strings = sources.load_strings()?;

    let Some((index, build)) = select_build(&store, &args.hero, args.role) else {
        return Err(CliError::no_builds(&args.hero).into());
    };

    print_item_build(
        &store,
        &args.hero,
        index,
        build,
        sources,
        strings.as_ref().map(|s| s as &dyn StringSource),
        args.json,
    )
}

pub fn show_closest_build(sources: &ContentSources, args: ClosestArgs) -> Result<()> {
    let store = sources.load_store()?;
    ensure_hero(&store, &args.hero)?;
    let strings = sources.load_strings()?;

    let Some((index, build)) = closest_build(&store, &args.hero, args.role) else {
        return Err(CliError::no_builds(&args.hero).into());
    };

    print_item_build(
        &store,
        &args.hero,
        index,
        build,
        sources,
        strings.as_ref().map(|s| s as &dyn StringSource),
        args.json,
    )
}

pub fn show_abilities(sources: &ContentSources, args: AbilitiesArgs) -> Result<()> {
    let store = sources.load_store()?;
    ensure_hero(&store, &args.hero)?;
    let strings = sources.load_strings()?;

    let Some((index, build)) = select_build(&store, &args.hero, args.role) else {
        return Err(CliError::no_builds(&args.hero).into());
    };
    let abilities = project_ability_build(
        &store,
        &args.hero,
        index,
        strings.as_ref().map(|s| s as &dyn StringSource),
    )
    .into_diagnostic()?;

    if args.json {
        return print_json(&BuildOutput {
            hero: &args.hero,
            build_index: index,
            roles: &build.roles,
            steam_guide_link: build.steam_guide_link(sources.language()),
            steam_guide_workshop_id: build.steam_guide_workshop_id(sources.language()),
            view: AbilitiesView {
                abilities: &abilities,
            },
        });
    }

    print_build_header(&args.hero, index, build, sources.language());
    println_pad!("\n{}", "📈 Ability order:".bright_magenta().bold());
    if abilities.is_empty() {
        println_pad!("   {}", "No ability order authored".bright_yellow());
    }
    for (level, ability) in abilities.iter().enumerate() {
        let level = format!("{:>2}.", level + 1).dimmed();
        match &ability.info {
            Some(info) => println_pad!(
                "   {} {} - {}",
                level,
                ability.name.bright_white().bold(),
                info.dimmed()
            ),
            None => println_pad!("   {} {}", level, ability.name.bright_white().bold()),
        }
    }

    Ok(())
}

pub fn show_counters(sources: &ContentSources, args: CountersArgs) -> Result<()> {
    let store = sources.load_store()?;
    ensure_hero(&store, &args.hero)?;

    let role = args.role.map(GuideRole::from);
    let Some(counters) = counter_items_for(&store, &args.hero, role) else {
        return Ok(());
    };

    if args.json {
        return print_json(&counters);
    }

    println_pad!(
        "{} {}",
        "🛡️ Counter items against".bright_blue().bold(),
        args.hero.bright_cyan().bold()
    );
    if let Some(role) = role {
        println_pad!("{} {}", "🎯 Playing as:".bright_green(), role.to_string().bright_white());
    }
    if counters.is_empty() {
        println_pad!("\n{}", "No counter items listed".bright_yellow());
    }
    for (phase, items) in &counters {
        println_pad!("\n{}", format!("⏱️ {}:", phase).bright_magenta().bold());
        for item in items {
            println_pad!("   {} {}", "•".bright_cyan(), item.bright_white().bold());
        }
    }

    Ok(())
}
