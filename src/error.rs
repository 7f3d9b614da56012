use thiserror::Error;

/// Top-level error type for the hpoint library.
#[derive(Debug, Error)]
pub enum HpointError {
    #[error("invalid axis of rotation {0:?}: axis must be either X, Y, or Z")]
    InvalidAxis(String),
}

/// Convenience type alias for results using [`HpointError`].
pub type Result<T> = std::result::Result<T, HpointError>;
