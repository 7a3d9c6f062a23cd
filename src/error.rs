use thiserror::Error;

/// Top-level error type for the gfxlab kernel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GfxError {
    /// A line algorithm selector did not match any known tag.
    #[error("unknown line algorithm: {0:?}")]
    UnknownAlgorithm(String),
}

/// Convenience type alias for results using [`GfxError`].
pub type Result<T> = std::result::Result<T, GfxError>;
