//! Sprites: one texture plus its size
//!
//! Every draw computes a destination rectangle and hands it to
//! [`Canvas::copy`], returning the backend's result untouched.

use std::path::Path;

use super::surface::Surface;
use super::types::{Rect, Rgb, Scale};
use crate::canvas::{BackendError, Canvas};
use crate::error::Result;

/// A backend texture and the pixel size of the image it came from
#[derive(Debug)]
pub struct Sprite<T> {
    texture: T,
    width: u32,
    height: u32,
}

impl<T> Sprite<T> {
    /// Build a sprite from a decoded surface.
    ///
    /// The surface is only borrowed. `key` is mapped through the surface's
    /// pixel format and made transparent for this conversion; with `None`
    /// the surface's own color key (if any) applies.
    pub fn from_surface<C>(canvas: &mut C, surface: &Surface, key: Option<Rgb>) -> Result<Self>
    where
        C: Canvas<Texture = T>,
    {
        let key = key.map(|rgb| surface.map_rgb(rgb));
        let (width, height) = (surface.width(), surface.height());
        let pixels = surface
            .texture_pixels(key)
            .map_err(logged("Failed to prepare sprite pixels"))?;

        let texture = canvas
            .create_texture(width, height, &pixels)
            .map_err(logged("Failed to create sprite texture"))?;
        log::debug!("Created sprite texture {}x{}", width, height);

        Ok(Self { texture, width, height })
    }

    /// Load a BMP file straight into a sprite. The intermediate surface is
    /// dropped once the texture exists.
    pub fn load<C, P>(canvas: &mut C, path: P, key: Option<Rgb>) -> Result<Self>
    where
        C: Canvas<Texture = T>,
        P: AsRef<Path>,
    {
        let surface = Surface::load_bmp(path)?;
        Self::from_surface(canvas, &surface, key)
    }

    /// Like [`Sprite::load`], for any format the decoder recognises
    pub fn load_any<C, P>(canvas: &mut C, path: P, key: Option<Rgb>) -> Result<Self>
    where
        C: Canvas<Texture = T>,
        P: AsRef<Path>,
    {
        let surface = Surface::load(path)?;
        Self::from_surface(canvas, &surface, key)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn texture(&self) -> &T {
        &self.texture
    }

    /// Release the texture now
    pub fn destroy(self) {
        drop(self);
    }

    /// Where a draw at `(x, y)` lands: the source size (the whole sprite
    /// when `src` is `None`) times `scale`. Position is never scaled.
    pub fn dest_rect(&self, x: i32, y: i32, src: Option<Rect>, scale: Scale) -> Rect {
        let (w, h) = match src {
            Some(r) => (r.w, r.h),
            None => (self.width, self.height),
        };
        let (w, h) = scale.apply(w, h);
        Rect::new(x, y, w, h)
    }

    /// Draw at natural size
    pub fn draw<C>(&self, canvas: &mut C, x: i32, y: i32) -> std::result::Result<(), BackendError>
    where
        C: Canvas<Texture = T>,
    {
        self.draw_scaled_clipped(canvas, x, y, None, Scale::ONE)
    }

    pub fn draw_scaled<C, S>(&self, canvas: &mut C, x: i32, y: i32, scale: S) -> std::result::Result<(), BackendError>
    where
        C: Canvas<Texture = T>,
        S: Into<Scale>,
    {
        self.draw_scaled_clipped(canvas, x, y, None, scale)
    }

    /// Stretch over the whole output
    pub fn draw_background<C>(&self, canvas: &mut C) -> std::result::Result<(), BackendError>
    where
        C: Canvas<Texture = T>,
    {
        canvas.copy(&self.texture, None, None)
    }

    pub fn draw_clipped<C>(&self, canvas: &mut C, x: i32, y: i32, src: Option<Rect>) -> std::result::Result<(), BackendError>
    where
        C: Canvas<Texture = T>,
    {
        self.draw_scaled_clipped(canvas, x, y, src, Scale::ONE)
    }

    pub fn draw_scaled_clipped<C, S>(
        &self,
        canvas: &mut C,
        x: i32,
        y: i32,
        src: Option<Rect>,
        scale: S,
    ) -> std::result::Result<(), BackendError>
    where
        C: Canvas<Texture = T>,
        S: Into<Scale>,
    {
        let dst = self.dest_rect(x, y, src, scale.into());
        canvas.copy(&self.texture, src, Some(dst))
    }

    /// Stretch `src` (whole sprite if `None`) over the whole output
    pub fn draw_clipped_background<C>(&self, canvas: &mut C, src: Option<Rect>) -> std::result::Result<(), BackendError>
    where
        C: Canvas<Texture = T>,
    {
        canvas.copy(&self.texture, src, None)
    }
}

/// Log an error on its way out
fn logged<E: std::fmt::Display>(what: &'static str) -> impl FnOnce(E) -> E {
    move |e| {
        log::error!("{}: {}", what, e);
        e
    }
}

/// Release a sprite if there is one
pub fn destroy<T>(sprite: Option<Sprite<T>>) {
    if let Some(sprite) = sprite {
        sprite.destroy();
    }
}
