//! JSON balance configuration used to override the built-in tables.
use serde::{Deserialize, Serialize};

use crate::boosts::{MetabolismBoostMap, RawBoostTable};
use crate::economy::PodEconomy;
use crate::error::DependencyError;

/// On-disk shape of a balance table.
///
/// `economy` fields default individually to the built-in constants and
/// `metabolism_boosts` falls back to the built-in table when absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BalanceConfig {
    #[serde(default)]
    pub economy: PodEconomy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metabolism_boosts: Option<RawBoostTable>,
}

impl BalanceConfig {
    /// Configuration describing the built-in tables explicitly.
    #[must_use]
    pub fn standard() -> Self {
        let boosts = MetabolismBoostMap::standard()
            .iter()
            .map(|(metabolism, boosts)| (String::from(metabolism), boosts.to_vec()))
            .collect();
        Self {
            economy: PodEconomy::standard(),
            metabolism_boosts: Some(boosts),
        }
    }

    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a balance config.
    pub fn from_json(json: &str) -> Result<Self, DependencyError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate and convert into typed tables.
    ///
    /// # Errors
    ///
    /// Returns an error when the economy values are out of range or the
    /// metabolism table is rejected by [`MetabolismBoostMap::from_raw`].
    pub fn resolve(self) -> Result<(PodEconomy, MetabolismBoostMap), DependencyError> {
        self.economy.validate()?;
        let boosts = match self.metabolism_boosts {
            Some(raw) => MetabolismBoostMap::from_raw(raw)?,
            None => MetabolismBoostMap::standard(),
        };
        Ok((self.economy, boosts))
    }
}
