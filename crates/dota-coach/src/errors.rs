use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("No hero content configured")]
    #[diagnostic(
        code(config::content_missing),
        help("Pass --content <file> or run 'dota-coach config set content_path <file>'")
    )]
    ContentNotConfigured,

    #[error("Content file not found: {path}")]
    #[diagnostic(
        code(content::not_found),
        help("Make sure the file exists and the path is correct")
    )]
    ContentNotFound { path: Utf8PathBuf },

    #[error("Failed to load hero content")]
    #[diagnostic(
        code(content::parse_error),
        help("Check the content file for syntax errors or unknown keys")
    )]
    ContentLoad {
        #[source]
        source: dct_content::Error,
    },

    #[error("Failed to load localized strings")]
    #[diagnostic(
        code(strings::load_error),
        help("The string bundle must be a JSON object keyed by hero short-name")
    )]
    StringsLoad {
        #[source]
        source: dct_guides::Error,
    },

    #[error("Unknown hero: {name}")]
    #[diagnostic(
        code(hero::not_found),
        help("Hero names are lowercase short-names such as 'legion_commander'")
    )]
    HeroNotFound { name: String },

    #[error("{hero} has no builds")]
    #[diagnostic(
        code(hero::no_builds),
        help("Run 'dota-coach validate' to find heroes without authored builds")
    )]
    NoBuilds { hero: String },

    #[error("No hero list configured")]
    #[diagnostic(
        code(config::heroes_missing),
        help("Pass --heroes <file> or run 'dota-coach config set heroes_path <file>'")
    )]
    HeroListNotConfigured,

    #[error("Invalid hero list: {path}")]
    #[diagnostic(
        code(heroes::parse_error),
        help("The hero list must be a JSON array of hero short-names")
    )]
    InvalidHeroList {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Content has {count} integrity issue(s)")]
    #[diagnostic(code(content::integrity))]
    IntegrityIssues { count: usize },

    #[error("Unknown config key: {key}")]
    #[diagnostic(
        code(config::unknown_key),
        help("Valid keys are content_path, strings_path, heroes_path and language")
    )]
    UnknownConfigKey { key: String },

    #[error("IO operation failed")]
    #[diagnostic(code(io::operation_failed))]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl CliError {
    pub fn content_not_found(path: Utf8PathBuf) -> Self {
        Self::ContentNotFound { path }
    }

    pub fn hero_not_found(name: impl Into<String>) -> Self {
        Self::HeroNotFound { name: name.into() }
    }

    pub fn no_builds(hero: impl Into<String>) -> Self {
        Self::NoBuilds { hero: hero.into() }
    }

    pub fn invalid_hero_list(path: Utf8PathBuf, source: serde_json::Error) -> Self {
        Self::InvalidHeroList { path, source }
    }
}
