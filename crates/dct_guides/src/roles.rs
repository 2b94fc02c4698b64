//! Player role to guide role resolution.

use dct_content::GuideRole;
use std::fmt;
use std::str::FromStr;

/// In-game position of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerRole {
    Carry,
    Mid,
    Offlane,
    SoftSupport,
    HardSupport,
}

impl PlayerRole {
    pub const ALL: [PlayerRole; 5] = [
        PlayerRole::Carry,
        PlayerRole::Mid,
        PlayerRole::Offlane,
        PlayerRole::SoftSupport,
        PlayerRole::HardSupport,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PlayerRole::Carry => "carry",
            PlayerRole::Mid => "mid",
            PlayerRole::Offlane => "offlane",
            PlayerRole::SoftSupport => "soft_support",
            PlayerRole::HardSupport => "hard_support",
        }
    }
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid player role: {0}")]
pub struct ParsePlayerRoleError(String);

impl FromStr for PlayerRole {
    type Err = ParsePlayerRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayerRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParsePlayerRoleError(s.to_string()))
    }
}

/// The guide role written for `role`. Both support positions share one guide.
pub fn closest_role(role: PlayerRole) -> GuideRole {
    match role {
        PlayerRole::Carry => GuideRole::Carry,
        PlayerRole::Mid => GuideRole::Mid,
        PlayerRole::Offlane => GuideRole::Offlane,
        PlayerRole::SoftSupport | PlayerRole::HardSupport => GuideRole::Support,
    }
}

impl From<PlayerRole> for GuideRole {
    fn from(role: PlayerRole) -> Self {
        closest_role(role)
    }
}

/// Guide roles to try, most similar first, when looking for a build for `role`.
///
/// Every chain lists all four roles, so a hero with at least one build always
/// resolves.
pub fn role_preference(role: GuideRole) -> [GuideRole; 4] {
    use GuideRole::*;

    match role {
        Carry => [Carry, Mid, Offlane, Support],
        Mid => [Mid, Carry, Offlane, Support],
        Offlane => [Offlane, Carry, Mid, Support],
        Support => [Support, Offlane, Mid, Carry],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_role() {
        assert_eq!(closest_role(PlayerRole::Carry), GuideRole::Carry);
        assert_eq!(closest_role(PlayerRole::Mid), GuideRole::Mid);
        assert_eq!(closest_role(PlayerRole::Offlane), GuideRole::Offlane);
        assert_eq!(closest_role(PlayerRole::SoftSupport), GuideRole::Support);
        assert_eq!(closest_role(PlayerRole::HardSupport), GuideRole::Support);
        assert_eq!(GuideRole::from(PlayerRole::HardSupport), GuideRole::Support);
    }

    #[test]
    fn test_preference_chains_are_complete() {
        for role in GuideRole::ALL {
            let chain = role_preference(role);
            assert_eq!(chain[0], role);
            for other in GuideRole::ALL {
                assert!(chain.contains(&other), "{role} chain misses {other}");
            }
        }
        assert_eq!(
            role_preference(GuideRole::Support),
            [
                GuideRole::Support,
                GuideRole::Offlane,
                GuideRole::Mid,
                GuideRole::Carry
            ]
        );
    }

    #[test]
    fn test_player_role_parsing() {
        for role in PlayerRole::ALL {
            assert_eq!(role.to_string().parse::<PlayerRole>(), Ok(role));
        }
        assert_eq!(
            "support".parse::<PlayerRole>(),
            Err(ParsePlayerRoleError("support".to_string()))
        );
    }
}
