//! AI Dependencies
//!
//! Balance constants and growth-special tables shared by the empire AI.
//! Consumers receive an immutable [`AiDependencies`] bundle and read from it;
//! nothing here mutates after construction.

use serde::Serialize;
use std::sync::OnceLock;

pub mod boosts;
pub mod config;
pub mod constants;
pub mod economy;
pub mod error;
pub mod metabolism;

// Re-export commonly used types
pub use boosts::{BoostConflict, BoostIndex, MetabolismBoostMap, RawBoostTable};
pub use config::BalanceConfig;
pub use constants::{COLONY_POD_COST, COLONY_POD_UPKEEP, OUTPOST_POD_COST, SHIP_UPKEEP};
pub use economy::PodEconomy;
pub use error::{DependencyError, LoadError};
pub use metabolism::Metabolism;

/// Trait for abstracting where a balance table comes from.
/// Tooling provides file-backed implementations.
pub trait DependencySource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the raw balance configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read or parsed.
    fn load_config(&self) -> Result<BalanceConfig, Self::Error>;
}

/// How duplicate specials across categories are treated when building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the last assignment made while deriving the inverse index.
    #[default]
    LastWriteWins,
    /// Reject the table.
    Reject,
}

/// Immutable bundle of constants, the forward table and its inverse index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiDependencies {
    economy: PodEconomy,
    metabolism_boosts: MetabolismBoostMap,
    boost_index: BoostIndex,
}

impl AiDependencies {
    /// Bundle a forward table with its derived inverse index.
    #[must_use]
    pub fn new(economy: PodEconomy, metabolism_boosts: MetabolismBoostMap) -> Self {
        let boost_index = BoostIndex::derive(&metabolism_boosts);
        Self {
            economy,
            metabolism_boosts,
            boost_index,
        }
    }

    /// Like [`Self::new`] but refuses tables that list a special twice.
    ///
    /// # Errors
    ///
    /// Returns `DependencyError::DuplicateBoost` for the first repeated special.
    pub fn strict(
        economy: PodEconomy,
        metabolism_boosts: MetabolismBoostMap,
    ) -> Result<Self, DependencyError> {
        metabolism_boosts.validate_unique()?;
        Ok(Self::new(economy, metabolism_boosts))
    }

    /// Process-wide bundle built from the built-in tables on first use.
    #[must_use]
    pub fn standard() -> &'static Self {
        static STANDARD: OnceLock<AiDependencies> = OnceLock::new();
        STANDARD.get_or_init(|| Self::new(PodEconomy::standard(), MetabolismBoostMap::standard()))
    }

    /// Validate a configuration and build the bundle.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is rejected, or if `policy` is
    /// [`DuplicatePolicy::Reject`] and a special is listed twice.
    pub fn from_config(
        config: BalanceConfig,
        policy: DuplicatePolicy,
    ) -> Result<Self, DependencyError> {
        let (economy, boosts) = config.resolve()?;
        match policy {
            DuplicatePolicy::LastWriteWins => Ok(Self::new(economy, boosts)),
            DuplicatePolicy::Reject => Self::strict(economy, boosts),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the configuration is rejected.
    pub fn from_json(json: &str, policy: DuplicatePolicy) -> Result<Self, DependencyError> {
        Self::from_config(BalanceConfig::from_json(json)?, policy)
    }

    /// Load from a [`DependencySource`], converting both failure kinds.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails or the configuration is rejected.
    pub fn load<S>(source: &S, policy: DuplicatePolicy) -> Result<Self, LoadError<S::Error>>
    where
        S: DependencySource,
    {
        let config = source.load_config().map_err(LoadError::Source)?;
        Ok(Self::from_config(config, policy)?)
    }

    #[must_use]
    pub const fn economy(&self) -> &PodEconomy {
        &self.economy
    }

    #[must_use]
    pub const fn metabolism_boosts(&self) -> &MetabolismBoostMap {
        &self.metabolism_boosts
    }

    #[must_use]
    pub const fn boost_index(&self) -> &BoostIndex {
        &self.boost_index
    }

    pub fn metabolisms(&self) -> impl Iterator<Item = Metabolism> + '_ {
        self.metabolism_boosts.categories()
    }

    #[must_use]
    pub fn boosts_for(&self, metabolism: Metabolism) -> &[String] {
        self.metabolism_boosts.boosts_for(metabolism)
    }

    #[must_use]
    pub fn metabolism_for(&self, boost: &str) -> Option<Metabolism> {
        self.boost_index.metabolism_for(boost)
    }

    /// Whether `boost` increases growth for any metabolism.
    #[must_use]
    pub fn is_growth_special(&self, boost: &str) -> bool {
        self.metabolism_boosts.contains_boost(boost)
    }
}

impl Default for AiDependencies {
    fn default() -> Self {
        Self::standard().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use std::fmt;

    #[derive(Clone, Copy, Default)]
    struct FixtureSource;

    impl DependencySource for FixtureSource {
        type Error = Infallible;

        fn load_config(&self) -> Result<BalanceConfig, Self::Error> {
            Ok(BalanceConfig::standard())
        }
    }

    #[derive(Debug)]
    struct Unreadable;

    impl fmt::Display for Unreadable {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("unreadable")
        }
    }

    impl std::error::Error for Unreadable {}

    struct BrokenSource;

    impl DependencySource for BrokenSource {
        type Error = Unreadable;

        fn load_config(&self) -> Result<BalanceConfig, Self::Error> {
            Err(Unreadable)
        }
    }

    #[test]
    fn standard_bundle_is_shared() {
        let first = AiDependencies::standard();
        let second = AiDependencies::standard();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.metabolisms().count(), 4);
        assert_eq!(first.metabolism_for("SPICE_SPECIAL"), Some(Metabolism::Organic));
        assert!(first.is_growth_special("POSITRONIUM_SPECIAL"));
        assert!(!first.is_growth_special("ELERIUM_SPECIAL"));
        assert_eq!(first.economy().colony_pod_cost, COLONY_POD_COST);
    }

    #[test]
    fn loads_from_source() {
        let deps = AiDependencies::load(&FixtureSource, DuplicatePolicy::Reject).unwrap();
        assert_eq!(&deps, AiDependencies::standard());
        assert_eq!(deps, AiDependencies::default());

        let err = AiDependencies::load(&BrokenSource, DuplicatePolicy::LastWriteWins).unwrap_err();
        assert!(matches!(err, LoadError::Source(Unreadable)));
        assert_eq!(err.to_string(), "failed to load balance table");
    }

    #[test]
    fn duplicate_policy_controls_strictness() {
        let json = r#"{
            "metabolism_boosts": {
                "ORGANIC": ["TWIN_SPECIAL"],
                "LITHIC": ["TWIN_SPECIAL", "ROCK_SPECIAL"]
            }
        }"#;
        let lenient = AiDependencies::from_json(json, DuplicatePolicy::LastWriteWins).unwrap();
        assert_eq!(lenient.metabolism_for("TWIN_SPECIAL"), Some(Metabolism::Lithic));
        assert_eq!(lenient.boost_index().len(), 2);

        let strict = AiDependencies::from_json(json, DuplicatePolicy::Reject);
        assert!(matches!(
            strict,
            Err(DependencyError::DuplicateBoost {
                first: Metabolism::Organic,
                second: Metabolism::Lithic,
                ..
            })
        ));
    }

    #[test]
    fn invalid_config_surfaces_as_invalid_load() {
        struct ZeroCostSource;

        impl DependencySource for ZeroCostSource {
            type Error = Infallible;

            fn load_config(&self) -> Result<BalanceConfig, Self::Error> {
                let mut config = BalanceConfig::standard();
                config.economy.colony_pod_cost = 0;
                Ok(config)
            }
        }

        let err = AiDependencies::load(&ZeroCostSource, DuplicatePolicy::default()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid(DependencyError::ZeroCost {
                field: "colony_pod_cost"
            })
        ));
    }
}
