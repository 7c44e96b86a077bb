use thiserror::Error;

/// Errors returned by the clusterers and sinks in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Point set has no rows where at least one is required.
    #[error("empty input")]
    EmptyInput,

    /// Invalid hyperparameter or input shape.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Points have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// A model was queried before `fit()` was called.
    #[error("{0} not fitted, call fit() first")]
    NotFitted(&'static str),

    /// Writing to a result sink failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the parameter-validation kind, including shape errors.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Error::InvalidParameter { .. } | Error::DimensionMismatch { .. }
        )
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
