//! Centralized balance constants consumed by the empire AI.
//!
//! These values mirror the game's production and upkeep rules. Keeping them
//! together means the AI's cost estimates can only drift from the game via a
//! reviewed code change.

use crate::metabolism::Metabolism;

// Pod economy --------------------------------------------------------------
/// One-time production cost of a colony pod.
pub const COLONY_POD_COST: u32 = 120;
/// Fractional cost increase applied per existing colony.
pub const COLONY_POD_UPKEEP: f64 = 0.06;
/// One-time production cost of an outpost pod.
pub const OUTPOST_POD_COST: u32 = 80;
/// Fractional cost increase applied per ship in service.
pub const SHIP_UPKEEP: f64 = 0.05;

// Growth specials ----------------------------------------------------------
pub const FRUIT_SPECIAL: &str = "FRUIT_SPECIAL";
pub const PROBIOTIC_SPECIAL: &str = "PROBIOTIC_SPECIAL";
pub const SPICE_SPECIAL: &str = "SPICE_SPECIAL";
pub const CRYSTALS_SPECIAL: &str = "CRYSTALS_SPECIAL";
pub const METALOIDS_SPECIAL: &str = "METALOIDS_SPECIAL";
pub const MINERALS_SPECIAL: &str = "MINERALS_SPECIAL";
pub const MONOPOLE_SPECIAL: &str = "MONOPOLE_SPECIAL";
pub const POSITRONIUM_SPECIAL: &str = "POSITRONIUM_SPECIAL";
pub const SUPERCONDUCTOR_SPECIAL: &str = "SUPERCONDUCTOR_SPECIAL";

/// Built-in metabolism to growth-special table, in canonical category order.
pub const STANDARD_METABOLISM_BOOSTS: &[(Metabolism, &[&str])] = &[
    (
        Metabolism::Organic,
        &[FRUIT_SPECIAL, PROBIOTIC_SPECIAL, SPICE_SPECIAL],
    ),
    (
        Metabolism::Lithic,
        &[CRYSTALS_SPECIAL, METALOIDS_SPECIAL, MINERALS_SPECIAL],
    ),
    (
        Metabolism::Robotic,
        &[MONOPOLE_SPECIAL, POSITRONIUM_SPECIAL, SUPERCONDUCTOR_SPECIAL],
    ),
    (Metabolism::SelfSustaining, &[]),
];

// Validation bounds --------------------------------------------------------
pub(crate) const UPKEEP_MIN: f64 = 0.0;
pub(crate) const UPKEEP_MAX: f64 = 1.0;

#[cfg(test)]
pub(crate) const FLOAT_EPSILON: f64 = 1e-9;
