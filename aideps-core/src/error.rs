use thiserror::Error;

use crate::metabolism::Metabolism;

/// Errors raised when a balance table from an external source is rejected.
#[derive(Debug, Error)]
pub enum DependencyError {
    #[error("malformed balance table: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown metabolism category {0:?}")]
    UnknownMetabolism(String),
    #[error("balance table lists no metabolism categories")]
    EmptyCategorySet,
    #[error("metabolism {metabolism} is listed more than once")]
    DuplicateCategory { metabolism: Metabolism },
    #[error("{metabolism} lists an empty boost identifier")]
    EmptyBoost { metabolism: Metabolism },
    #[error("boost {boost} listed under both {first} and {second}")]
    DuplicateBoost {
        boost: String,
        first: Metabolism,
        second: Metabolism,
    },
    #[error("boost {boost} listed twice under {metabolism}")]
    RepeatedBoost {
        boost: String,
        metabolism: Metabolism,
    },
    #[error("{field} must be between {min:.2} and {max:.2} (got {value})")]
    UpkeepRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    #[error("{field} must be greater than zero")]
    ZeroCost { field: &'static str },
}

/// Failure to build dependencies from a [`crate::DependencySource`].
#[derive(Debug, Error)]
pub enum LoadError<E: std::error::Error + 'static> {
    #[error("failed to load balance table")]
    Source(#[source] E),
    #[error(transparent)]
    Invalid(#[from] DependencyError),
}
