//! Error types for the pricing engine

use thiserror::Error;

/// Result type alias for the pricing engine
pub type Result<T> = std::result::Result<T, PricingError>;

/// Main error type for the pricing engine
///
/// Calculator failures are synchronous and never retried: they signal a
/// malformed plan or a bad call, and the caller must not proceed with billing.
#[derive(Error, Debug)]
pub enum PricingError {
    /// Invalid call arguments (e.g. a zero user count)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Plan is missing data required by its pricing model
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unrecognized value for an enumerated field
    #[error("Field invalid: {0}")]
    FieldInvalid(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Parsing errors
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
