//! Error types for the long-keyed maps.

use thiserror::Error;

/// Result type alias for map construction.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A constructor was given a parameter it cannot work with.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
