//! Species metabolism categories.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DependencyError;

/// Metabolism class of a species; decides which specials boost its growth.
///
/// Ordering follows the canonical category order, so ordered maps keyed by
/// `Metabolism` iterate `ORGANIC`, `LITHIC`, `ROBOTIC`, `SELF_SUSTAINING`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Metabolism {
    Organic,
    Lithic,
    Robotic,
    SelfSustaining,
}

impl Metabolism {
    pub const ALL: &'static [Self] = &[
        Self::Organic,
        Self::Lithic,
        Self::Robotic,
        Self::SelfSustaining,
    ];

    /// Exact, case-sensitive key used by game content.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Organic => "ORGANIC",
            Self::Lithic => "LITHIC",
            Self::Robotic => "ROBOTIC",
            Self::SelfSustaining => "SELF_SUSTAINING",
        }
    }
}

impl fmt::Display for Metabolism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Metabolism {
    type Err = DependencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ORGANIC" => Ok(Self::Organic),
            "LITHIC" => Ok(Self::Lithic),
            "ROBOTIC" => Ok(Self::Robotic),
            "SELF_SUSTAINING" => Ok(Self::SelfSustaining),
            other => Err(DependencyError::UnknownMetabolism(other.to_string())),
        }
    }
}

impl From<Metabolism> for String {
    fn from(value: Metabolism) -> Self {
        value.key().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for metabolism in Metabolism::ALL {
            assert_eq!(metabolism.key().parse::<Metabolism>().unwrap(), *metabolism);
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("organic".parse::<Metabolism>().is_err());
        assert!("Self_Sustaining".parse::<Metabolism>().is_err());
        let err = "PHOTOTROPHIC".parse::<Metabolism>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown metabolism category \"PHOTOTROPHIC\""
        );
    }

    #[test]
    fn serde_uses_game_keys() {
        let json = serde_json::to_string(&Metabolism::SelfSustaining).unwrap();
        assert_eq!(json, "\"SELF_SUSTAINING\"");
        let parsed: Metabolism = serde_json::from_str("\"LITHIC\"").unwrap();
        assert_eq!(parsed, Metabolism::Lithic);
    }

    #[test]
    fn ordering_matches_canonical_list() {
        let mut shuffled = vec![
            Metabolism::SelfSustaining,
            Metabolism::Lithic,
            Metabolism::Robotic,
            Metabolism::Organic,
        ];
        shuffled.sort();
        assert_eq!(shuffled, Metabolism::ALL);
    }
}
