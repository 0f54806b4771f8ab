use thiserror::Error;

/// Core error type shared across thaigen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value is outside its accepted domain.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for results returned by thaigen crates.
pub type Result<T> = std::result::Result<T, Error>;
