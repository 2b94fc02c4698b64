use crate::utils::config;
use camino::Utf8PathBuf;
use colored::Colorize;
use miette::Result;

/// Print a config path entry with status indicator
fn print_path_config(name: &str, path: Option<&Utf8PathBuf>) {
    match path {
        Some(p) => {
            let status = if p.is_file() {
                "✓".bright_green()
            } else {
                "✗".bright_red()
            };
            println!("  {} {} {}", format!("{}:", name).bright_white(), p, status);
        }
        None => {
            println!(
                "  {} {}",
                format!("{}:", name).bright_white(),
                "(not set)".bright_yellow()
            );
        }
    }
}

pub fn show_config() -> Result<()> {
    let cfg = config::load_config();
    let config_path = config::default_config_path()
        .map(|p| p.to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    println!();
    println!("  {} {}", "config_file:".bright_white(), config_path);

    print_path_config("content_path", cfg.content_path.as_ref());
    print_path_config("strings_path", cfg.strings_path.as_ref());
    print_path_config("heroes_path", cfg.heroes_path.as_ref());
    println!(
        "  {} {}",
        "language:".bright_white(),
        match &cfg.language {
            Some(language) => language.normal(),
            None => format!("(not set, using {})", cfg.language()).bright_yellow(),
        }
    );

    println!();
    Ok(())
}

pub fn set_config_value(key: String, value: String) -> Result<()> {
    let mut cfg = config::load_config();
    cfg.set(&key, &value)?;
    config::save_config(&cfg).map_err(|e| miette::miette!("Failed to save config: {}", e))?;

    if value.is_empty() {
        println!("{}", format!("✓ Cleared {}", key).bright_green().bold());
    } else {
        println!("{}", format!("✓ Set {}", key).bright_green().bold());
        println!();
        println!("  {} {}", "Value:".bright_white().bold(), value.bright_green());
    }
    if key.ends_with("_path") && !value.is_empty() && !Utf8PathBuf::from(&value).is_file() {
        println!();
        println!(
            "  {}",
            "Warning: the file does not exist yet".bright_yellow()
        );
    }

    Ok(())
}
