//! Rendering backends
//!
//! A [`Canvas`] is the small capability set sprites need from a renderer:
//! upload RGBA pixels as a texture, and copy a texture region into a
//! destination rectangle. Textures are released when dropped.

mod framebuffer;
mod quad;

pub use framebuffer::*;
pub use quad::*;

use thiserror::Error;

use crate::sprite::Rect;

/// Failures reported by a backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("texture {width}x{height} exceeds the maximum size of {max}")]
    TextureTooLarge { width: u32, height: u32, max: u32 },

    #[error("cannot create a texture with zero width or height")]
    EmptyTexture,

    #[error("expected {expected} bytes of RGBA data, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    #[error("copy failed: {0}")]
    Copy(String),
}

/// Texture creation and blitting
pub trait Canvas {
    type Texture;

    /// Upload `width * height` RGBA8 pixels as a texture
    fn create_texture(&mut self, width: u32, height: u32, rgba: &[u8]) -> Result<Self::Texture, BackendError>;

    /// Copy `src` of `texture` (whole texture if `None`) into `dst`
    /// (whole output if `None`), stretching as needed
    fn copy(&mut self, texture: &Self::Texture, src: Option<Rect>, dst: Option<Rect>) -> Result<(), BackendError>;

    /// Output size in pixels
    fn output_size(&self) -> (u32, u32);
}

/// Shared argument check for `create_texture` implementations
pub(crate) fn check_texture_data(width: u32, height: u32, rgba: &[u8], max: u32) -> Result<(), BackendError> {
    if width == 0 || height == 0 {
        return Err(BackendError::EmptyTexture);
    }
    if width > max || height > max {
        return Err(BackendError::TextureTooLarge { width, height, max });
    }
    let expected = width as usize * height as usize * 4;
    if rgba.len() != expected {
        return Err(BackendError::InvalidPixelData { expected, actual: rgba.len() });
    }
    Ok(())
}
