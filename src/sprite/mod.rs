//! Sprite loading and drawing
//!
//! Images are decoded into a [`Surface`], uploaded through a
//! [`Canvas`](crate::canvas::Canvas) and wrapped in a [`Sprite`] that knows
//! its own size.

mod blit;
mod surface;
mod types;

pub use blit::*;
pub use surface::*;
pub use types::*;
