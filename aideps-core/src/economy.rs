//! Pod production costs and upkeep scaling.
use serde::{Deserialize, Serialize};

use crate::constants::{
    COLONY_POD_COST, COLONY_POD_UPKEEP, OUTPOST_POD_COST, SHIP_UPKEEP, UPKEEP_MAX, UPKEEP_MIN,
};
use crate::error::DependencyError;

/// Production costs and upkeep rates the AI budgets against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PodEconomy {
    #[serde(default = "PodEconomy::default_colony_pod_cost")]
    pub colony_pod_cost: u32,
    #[serde(default = "PodEconomy::default_colony_pod_upkeep")]
    pub colony_pod_upkeep: f64,
    #[serde(default = "PodEconomy::default_outpost_pod_cost")]
    pub outpost_pod_cost: u32,
    #[serde(default = "PodEconomy::default_ship_upkeep")]
    pub ship_upkeep: f64,
}

impl PodEconomy {
    const fn default_colony_pod_cost() -> u32 {
        COLONY_POD_COST
    }

    const fn default_colony_pod_upkeep() -> f64 {
        COLONY_POD_UPKEEP
    }

    const fn default_outpost_pod_cost() -> u32 {
        OUTPOST_POD_COST
    }

    const fn default_ship_upkeep() -> f64 {
        SHIP_UPKEEP
    }

    /// The built-in constants.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            colony_pod_cost: COLONY_POD_COST,
            colony_pod_upkeep: COLONY_POD_UPKEEP,
            outpost_pod_cost: OUTPOST_POD_COST,
            ship_upkeep: SHIP_UPKEEP,
        }
    }

    /// # Errors
    ///
    /// Returns an error when a pod cost is zero or an upkeep rate is not a
    /// fraction in `0.0..=1.0`.
    pub fn validate(&self) -> Result<(), DependencyError> {
        if self.colony_pod_cost == 0 {
            return Err(DependencyError::ZeroCost {
                field: "colony_pod_cost",
            });
        }
        if self.outpost_pod_cost == 0 {
            return Err(DependencyError::ZeroCost {
                field: "outpost_pod_cost",
            });
        }
        validate_upkeep("colony_pod_upkeep", self.colony_pod_upkeep)?;
        validate_upkeep("ship_upkeep", self.ship_upkeep)
    }

    /// Colony pod cost once `colonies` colonies already exist.
    #[must_use]
    pub fn colony_pod_cost_with_upkeep(&self, colonies: u32) -> f64 {
        scaled(
            f64::from(self.colony_pod_cost),
            self.colony_pod_upkeep,
            colonies,
        )
    }

    /// Outpost pod cost once `colonies` colonies already exist.
    #[must_use]
    pub fn outpost_pod_cost_with_upkeep(&self, colonies: u32) -> f64 {
        scaled(
            f64::from(self.outpost_pod_cost),
            self.colony_pod_upkeep,
            colonies,
        )
    }

    /// Cost of a hull costing `base_cost` with `ships` ships in service.
    #[must_use]
    pub fn ship_cost_with_upkeep(&self, base_cost: f64, ships: u32) -> f64 {
        scaled(base_cost, self.ship_upkeep, ships)
    }
}

impl Default for PodEconomy {
    fn default() -> Self {
        Self::standard()
    }
}

fn scaled(base: f64, rate: f64, count: u32) -> f64 {
    base * rate.mul_add(f64::from(count), 1.0)
}

fn validate_upkeep(field: &'static str, value: f64) -> Result<(), DependencyError> {
    if !value.is_finite() || !(UPKEEP_MIN..=UPKEEP_MAX).contains(&value) {
        return Err(DependencyError::UpkeepRange {
            field,
            min: UPKEEP_MIN,
            max: UPKEEP_MAX,
            value,
        });
    }
    Ok(())
}
