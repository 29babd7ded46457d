use thiserror::Error;

/// Errors raised while building or configuring the showcase.
#[derive(Error, Debug)]
pub enum ShowcaseError {
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Model error: {0}")]
    Model(#[from] anoohe_model::ModelError),

    #[error("Tile index {index} out of range for {tile_count} tiles")]
    TileOutOfRange { index: usize, tile_count: usize },
}

/// Failure to load one tile's logo texture. Always scoped to that tile.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextureError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Load aborted")]
    Aborted,
}

/// Failure reported by a newsletter endpoint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NewsletterError {
    #[error("Subscription rejected: {0}")]
    Rejected(String),

    #[error("Newsletter service unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, ShowcaseError>;
