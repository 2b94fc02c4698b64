//! Build selection for one hero.
//!
//! Two strategies, for two kinds of callers:
//!
//! - [`select_build`] wants *the* build for a role, or a consistent default. It
//!   takes the first build (in authored order) tagged with the role and falls
//!   back to build 0.
//! - [`closest_build`] wants the most relevant build even if it was written for
//!   another role. It walks [`role_preference`] and takes the first role any
//!   build covers.

use crate::roles::{closest_role, role_preference, PlayerRole};
use dct_content::{ContentStore, GuideRole, HeroBuild};
use std::collections::HashMap;

/// Select the build of `hero` for `role`.
///
/// Returns `None` only when the hero is unknown or has no builds. Without a role,
/// or when no build is tagged with the role, the default build (index 0) is
/// returned.
pub fn select_build<'a>(
    store: &'a ContentStore,
    hero: &str,
    role: Option<PlayerRole>,
) -> Option<(usize, &'a HeroBuild)> {
    let content = store.hero(hero)?;
    let default = content.default_build().map(|build| (0, build));

    let Some(role) = role else {
        return default;
    };
    let guide_role = closest_role(role);

    let selected = content
        .builds
        .iter()
        .enumerate()
        .find(|(_, build)| build.has_role(guide_role));

    if selected.is_none() {
        tracing::debug!(
            "No {} build for {}, using default build",
            guide_role,
            hero
        );
    }

    selected.or(default)
}

/// Find the build of `hero` closest to `role`.
///
/// When several builds share a role, the last one authored for it is used.
pub fn closest_build<'a>(
    store: &'a ContentStore,
    hero: &str,
    role: impl Into<GuideRole>,
) -> Option<(usize, &'a HeroBuild)> {
    let role = role.into();
    let builds = &store.hero(hero)?.builds;

    let mut by_role: HashMap<GuideRole, (usize, &HeroBuild)> = HashMap::new();
    for (index, build) in builds.iter().enumerate() {
        for build_role in &build.roles {
            by_role.insert(*build_role, (index, build));
        }
    }

    role_preference(role)
        .into_iter()
        .find_map(|candidate| by_role.get(&candidate).copied())
}
