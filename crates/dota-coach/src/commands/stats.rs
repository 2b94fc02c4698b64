use crate::println_pad;
use crate::utils::{percent, print_json, ContentSources};
use colored::Colorize;
use dct_content::{CounterPhase, GuideRole, ItemCategory};
use dct_guides::{
    get_item_hero_role_stats, most_countering_items, most_recommended_items,
    GuideRef,
};
use miette::Result;

pub struct TopItemsArgs {
    pub role: Option<GuideRole>,
    pub phase: Option<ItemCategory>,
    pub limit: usize,
    pub json: bool,
}

pub struct TopCountersArgs {
    pub role: Option<GuideRole>,
    pub phase: Option<CounterPhase>,
    pub limit: usize,
    pub json: bool,
}

pub struct ItemStatsArgs {
    pub item: String,
    pub json: bool,
}

fn print_filters(role: Option<GuideRole>, phase: Option<String>) {
    let role = role.map_or_else(|| "any".to_string(), |role| role.to_string());
    let phase = phase.unwrap_or_else(|| "any".to_string());
    println_pad!(
        "{} {}  {} {}",
        "🎯 Role:".bright_green(),
        role.bright_white(),
        "⏱️ Phase:".bright_green(),
        phase.bright_white()
    );
}

pub fn show_top_items(sources: &ContentSources, args: TopItemsArgs) -> Result<()> {
    let store = sources.load_store()?;
    let mut items = most_recommended_items(&store, args.role, args.phase);
    items.truncate(args.limit);

    if args.json {
        return print_json(&items);
    }

    println_pad!("{}", "📊 Most recommended items".bright_blue().bold());
    print_filters(args.role, args.phase.map(|phase| phase.to_string()));
    println!();
    if items.is_empty() {
        println_pad!("   {}", "No matching builds".bright_yellow());
    }
    for (rank, item) in items.iter().enumerate() {
        println_pad!(
            "   {} {} {}",
            format!("{:>2}.", rank + 1).dimmed(),
            item.item.bright_white().bold(),
            format!(
                "{}/{} builds ({})",
                item.all.len(),
                item.guides,
                percent(item.all.len(), item.guides)
            )
            .bright_cyan()
        );
    }

    Ok(())
}

pub fn show_top_counters(sources: &ContentSources, args: TopCountersArgs) -> Result<()> {
    let store = sources.load_store()?;
    let mut items = most_countering_items(&store, args.role, args.phase);
    items.truncate(args.limit);

    if args.json {
        return print_json(&items);
    }

    println_pad!("{}", "🛡️ Most countering items".bright_blue().bold());
    print_filters(args.role, args.phase.map(|phase| phase.to_string()));
    println!();
    if items.is_empty() {
        println_pad!("   {}", "No counter items listed".bright_yellow());
    }
    for (rank, item) in items.iter().enumerate() {
        println_pad!(
            "   {} {} {}",
            format!("{:>2}.", rank + 1).dimmed(),
            item.item.bright_white().bold(),
            format!(
                "{}/{} heroes ({})",
                item.all.len(),
                item.guides,
                percent(item.all.len(), item.guides)
            )
            .bright_cyan()
        );
    }

    Ok(())
}

fn format_guides(guides: &[GuideRef<'_>]) -> String {
    guides
        .iter()
        .map(|guide| format!("{}#{}", guide.hero, guide.build_index))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn show_item_stats(sources: &ContentSources, args: ItemStatsArgs) -> Result<()> {
    let store = sources.load_store()?;
    let item = args.item.as_str();
    let stats = get_item_hero_role_stats(&store, item);

    if args.json {
        return print_json(&stats);
    }

    println_pad!(
        "{} {}",
        "📦 Item:".bright_blue().bold(),
        item.bright_cyan().bold()
    );
    for (role, role_stats) in &stats {
        let total = role_stats.core.len() + role_stats.non_core.len() + role_stats.without.len();
        println_pad!(
            "\n{} {}",
            format!("🎯 {}:", role).bright_magenta().bold(),
            format!("{} builds", total).dimmed()
        );
        println_pad!(
            "   {} {} {}",
            "core:".bright_green(),
            percent(role_stats.core.len(), total).bright_white().bold(),
            format_guides(&role_stats.core).dimmed()
        );
        println_pad!(
            "   {} {} {}",
            "non-core:".bright_yellow(),
            percent(role_stats.non_core.len(), total).bright_white().bold(),
            format_guides(&role_stats.non_core).dimmed()
        );
        println_pad!(
            "   {} {}",
            "without:".bright_red(),
            percent(role_stats.without.len(), total).bright_white().bold()
        );
    }

    Ok(())
}
