//! Error type for sprite loading and configuration

use std::collections::TryReserveError;
use thiserror::Error;

use crate::canvas::BackendError;

/// Everything that can go wrong while turning a file into a sprite
#[derive(Debug, Error)]
pub enum SpriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Out of memory: {0}")]
    Alloc(#[from] TryReserveError),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Config parse error: {0}")]
    Config(#[from] ron::error::SpannedError),

    #[error("Config serialize error: {0}")]
    Serialize(#[from] ron::Error),
}

pub type Result<T> = std::result::Result<T, SpriteError>;
