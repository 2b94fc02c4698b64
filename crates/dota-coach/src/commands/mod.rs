mod build;
mod config;
mod lookup;
mod stats;
mod validate;

pub use build::{
    show_abilities, show_build, show_closest_build, show_counters, AbilitiesArgs, BuildArgs,
    ClosestArgs, CountersArgs,
};
pub use config::{set_config_value, show_config};
pub use lookup::{show_heroes, LookupArgs, LookupKind};
pub use stats::{
    show_item_stats, show_top_counters, show_top_items, ItemStatsArgs, TopCountersArgs,
    TopItemsArgs,
};
pub use validate::{validate_content, ValidateArgs};
