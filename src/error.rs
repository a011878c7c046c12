//! Crate-wide error type.

use thiserror::Error;

/// Result alias for fallible u-nntour operations.
pub type TourResult<T> = std::result::Result<T, TourError>;

/// Errors surfaced to callers.
///
/// Malformed city records are not errors at this level: the loader drops
/// them (see [`crate::loader::RecordError`]).
#[derive(Error, Debug)]
pub enum TourError {
    /// The record source could not be opened, read or decoded.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration was rejected by its `validate` method.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
