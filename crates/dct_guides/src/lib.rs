//! Build selection, projection and cross-hero aggregation over hero guides.
//!
//! Every query takes an immutable [`ContentStore`](dct_content::ContentStore)
//! loaded by `dct_content`. The crate provides:
//!
//! - **Role resolution**: collapse in-game player roles onto guide roles
//! - **Build selection**: exact-role selection with a default, or closest-role matching
//! - **Projection**: UI-ready item and ability lists with core flags and tooltips
//! - **Tooltips**: three-level (build, hero, global) localized string lookup
//! - **Aggregation**: lazy traversals and whole-store statistics
//!
//! # Example
//!
//! ```no_run
//! use dct_content::ContentStore;
//! use dct_guides::{project_item_build, select_build, PlayerRole, StringBundle};
//! use camino::Utf8Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = ContentStore::load(Utf8Path::new("content/heroes.json"))?;
//! let strings = StringBundle::load(Utf8Path::new("content/strings/en.json"))?;
//!
//! if let Some((index, _)) = select_build(&store, "sniper", Some(PlayerRole::Mid)) {
//!     let view = project_item_build(&store, "sniper", index, Some(&strings))?;
//!     for (category, items) in &view {
//!         println!("{}: {} items", category, items.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod iter;
pub mod projector;
pub mod roles;
pub mod selector;
pub mod stats;
pub mod strings;
pub mod tooltip;

// Re-export main types
pub use error::{Error, Result};
pub use iter::{
    counter_item_iter, hero_build_iter, item_iter, CounterItemEntry, HeroBuildEntry, ItemEntry,
};
pub use projector::{
    counter_items_for, project_ability_build, project_item_build, ItemBuildView,
    ProjectedAbility, ProjectedItem,
};
pub use roles::{closest_role, role_preference, PlayerRole};
pub use selector::{closest_build, select_build};
pub use stats::{
    get_core_heroes, get_heroes_countered_by, get_heroes_with_item, get_item_hero_role_stats,
    most_countering_items, most_recommended_items, normalize_item_key, CounteringItem, GuideRef,
    ItemUsage, RecommendedItem, RoleItemStats,
};
pub use strings::{StringBundle, StringSource};
pub use tooltip::{get_item_tooltip, get_tooltip, TooltipKind};
