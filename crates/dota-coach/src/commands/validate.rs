use crate::errors::CliError;
use crate::println_pad;
use crate::utils::{load_hero_list, ContentSources};
use camino::Utf8PathBuf;
use colored::Colorize;
use miette::Result;

pub struct ValidateArgs {
    /// JSON array of valid hero short-names. Falls back to `heroes_path` in config.
    pub heroes_path: Option<Utf8PathBuf>,
}

pub fn validate_content(sources: &ContentSources, args: ValidateArgs) -> Result<()> {
    let heroes_path = args
        .heroes_path
        .or_else(|| sources.config.heroes_path.clone())
        .ok_or(CliError::HeroListNotConfigured)?;

    let store = sources.load_store()?;
    let valid_heroes = load_hero_list(&heroes_path)?;
    let issues = dct_content::validate(&store, valid_heroes.iter().map(String::as_str));

    println_pad!(
        "{} {} heroes, {} builds",
        "🔍 Checked:".bright_blue().bold(),
        store.len(),
        store.build_count()
    );

    if issues.is_empty() {
        println!();
        println!("{}", "✓ Content is consistent".bright_green().bold());
        return Ok(());
    }

    println!();
    for issue in &issues {
        println_pad!("   {} {}", "✗".bright_red(), issue);
    }
    println!();

    Err(CliError::IntegrityIssues {
        count: issues.len(),
    }
    .into())
}
