//! Bonnie Sprite: bitmap sprites over a 2D rendering backend
//!
//! Loads images into backend textures and blits them:
//! - Plain, at their natural size
//! - Scaled by one or two factors
//! - Clipped to a source sub-rectangle
//! - Stretched over the whole target (background mode)
//!
//! Two backends ship with the crate: a software [`Framebuffer`] and a
//! macroquad-backed [`QuadCanvas`].

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod canvas;
pub mod config;
pub mod error;
pub mod sprite;

pub use canvas::{BackendError, Canvas, Framebuffer, QuadCanvas};
pub use config::{load_config, save_config, Filter, SpriteConfig};
pub use error::SpriteError;
pub use sprite::{destroy, ColorKey, Rect, Rgb, Scale, Sprite, Surface};
