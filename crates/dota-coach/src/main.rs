use camino::Utf8PathBuf;
use clap::builder::{styling::AnsiColor, PossibleValuesParser, Styles};
use clap::ColorChoice;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use commands::{
    set_config_value, show_abilities, show_build, show_closest_build, show_config, show_counters,
    show_heroes, show_item_stats, show_top_counters, show_top_items, validate_content,
    AbilitiesArgs, BuildArgs, ClosestArgs, CountersArgs, ItemStatsArgs, LookupArgs, LookupKind,
    TopCountersArgs, TopItemsArgs, ValidateArgs,
};
use dct_content::{CounterPhase, GuideRole, ItemCategory};
use dct_guides::PlayerRole;
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use utils::config::{self, CONFIG_KEYS};
use utils::ContentSources;

mod commands;
mod errors;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Hero content file (JSON or TOML). Overrides `content_path` in config.toml
    #[arg(long, global = true)]
    content: Option<Utf8PathBuf>,

    /// Localized string bundle used for tooltips. Overrides `strings_path` in config.toml
    #[arg(long, global = true)]
    strings: Option<Utf8PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the item build of a hero for a player role
    Build {
        hero: String,
        /// carry, mid, offlane, soft_support or hard_support
        #[arg(short, long)]
        role: Option<PlayerRole>,
        #[arg(long)]
        json: bool,
    },
    /// Show the build of a hero closest to a player role
    Closest {
        hero: String,
        #[arg(short, long)]
        role: PlayerRole,
        #[arg(long)]
        json: bool,
    },
    /// Show the ability order of a hero for a player role
    Abilities {
        hero: String,
        #[arg(short, long)]
        role: Option<PlayerRole>,
        #[arg(long)]
        json: bool,
    },
    /// Show the items to buy against a hero
    Counters {
        hero: String,
        /// Your own role
        #[arg(short, long)]
        role: Option<PlayerRole>,
        #[arg(long)]
        json: bool,
    },
    /// List heroes with a build that buys an item (exact item key)
    HeroesWith {
        item: String,
        #[arg(long)]
        json: bool,
    },
    /// List heroes with a build that has an item as core (`item_` prefix optional)
    CoreHeroes {
        item: String,
        #[arg(long)]
        json: bool,
    },
    /// List heroes an item counters (exact item key)
    CounteredBy {
        item: String,
        #[arg(long)]
        json: bool,
    },
    /// Rank items by how many builds recommend them
    TopItems {
        /// carry, mid, offlane or support
        #[arg(short, long)]
        role: Option<GuideRole>,
        /// Item category, e.g. early_game
        #[arg(short, long)]
        phase: Option<ItemCategory>,
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
    /// Rank counter items by how many heroes they counter
    TopCounters {
        /// Your own role: carry, mid, offlane or support
        #[arg(short, long)]
        role: Option<GuideRole>,
        /// laning_phase, mid_game or late_game
        #[arg(short, long)]
        phase: Option<CounterPhase>,
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
    /// Show how builds of each role use an item (exact item key)
    ItemStats {
        item: String,
        #[arg(long)]
        json: bool,
    },
    /// Check the content for integrity issues
    Validate {
        /// JSON array of valid hero short-names. Overrides `heroes_path` in config.toml
        #[arg(long)]
        heroes: Option<Utf8PathBuf>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set a configuration value. An empty value clears it
    Set {
        #[arg(value_parser = PossibleValuesParser::new(CONFIG_KEYS))]
        key: String,
        value: String,
    },
}

fn parse_args() -> Args {
    // Configure colored/styled help output
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Blue.on_default());

    let matches = Args::command()
        .styles(styles)
        .color(ColorChoice::Auto)
        .get_matches();

    Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "dota_coach=debug,dct_content=debug,dct_guides=debug"
    } else {
        "dota_coach=info,dct_content=info,dct_guides=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = parse_args();
    init_logging(args.verbose);

    let sources = ContentSources::new(args.content, args.strings, config::load_config());

    match args.command {
        Commands::Build { hero, role, json } => {
            show_build(&sources, BuildArgs { hero, role, json })
        }
        Commands::Closest { hero, role, json } => {
            show_closest_build(&sources, ClosestArgs { hero, role, json })
        }
        Commands::Abilities { hero, role, json } => {
            show_abilities(&sources, AbilitiesArgs { hero, role, json })
        }
        Commands::Counters { hero, role, json } => {
            show_counters(&sources, CountersArgs { hero, role, json })
        }
        Commands::HeroesWith { item, json } => show_heroes(
            &sources,
            LookupArgs {
                item,
                kind: LookupKind::WithItem,
                json,
            },
        ),
        Commands::CoreHeroes { item, json } => show_heroes(
            &sources,
            LookupArgs {
                item,
                kind: LookupKind::Core,
                json,
            },
        ),
        Commands::CounteredBy { item, json } => show_heroes(
            &sources,
            LookupArgs {
                item,
                kind: LookupKind::CounteredBy,
                json,
            },
        ),
        Commands::TopItems {
            role,
            phase,
            limit,
            json,
        } => show_top_items(
            &sources,
            TopItemsArgs {
                role,
                phase,
                limit,
                json,
            },
        ),
        Commands::TopCounters {
            role,
            phase,
            limit,
            json,
        } => show_top_counters(
            &sources,
            TopCountersArgs {
                role,
                phase,
                limit,
                json,
            },
        ),
        Commands::ItemStats { item, json } => {
            show_item_stats(&sources, ItemStatsArgs { item, json })
        }
        Commands::Validate { heroes } => validate_content(
            &sources,
            ValidateArgs {
                heroes_path: heroes,
            },
        ),
        Commands::Config { action } => match action {
            ConfigCommands::Show => show_config(),
            ConfigCommands::Set { key, value } => set_config_value(key, value),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("dota-coach").chain(args.iter().copied()))
    }

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_player_role() {
        let args = parse(&["build", "sniper", "--role", "soft_support", "--json"]).unwrap();
        assert!(matches!(
            args.command,
            Commands::Build {
                role: Some(PlayerRole::SoftSupport),
                json: true,
                ..
            }
        ));

        assert!(parse(&["build", "sniper", "--role", "support"]).is_err());
    }

    #[test]
    fn test_parse_aggregation_filters() {
        let args = parse(&[
            "top-items",
            "--role",
            "support",
            "--phase",
            "early_game",
            "--limit",
            "3",
        ])
        .unwrap();
        assert!(matches!(
            args.command,
            Commands::TopItems {
                role: Some(GuideRole::Support),
                phase: Some(ItemCategory::EarlyGame),
                limit: 3,
                json: false,
            }
        ));

        assert!(parse(&["top-counters", "--phase", "early_game"]).is_err());
    }

    #[test]
    fn test_global_overrides() {
        let args = parse(&["counters", "alchemist", "--content", "heroes.toml", "-v"]).unwrap();
        assert_eq!(args.content, Some(Utf8PathBuf::from("heroes.toml")));
        assert!(args.verbose);
    }

    #[test]
    fn test_config_keys_checked() {
        assert!(parse(&["config", "set", "language", "ru"]).is_ok());
        assert!(parse(&["config", "set", "patch_path", "7.37"]).is_err());
    }
}
