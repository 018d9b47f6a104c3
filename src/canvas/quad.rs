//! macroquad canvas
//!
//! Uploads sprites as GPU textures and draws them onto the current macroquad
//! render target. Needs a live macroquad context (i.e. inside the
//! `#[macroquad::main]` future).

use macroquad::prelude::{
    draw_texture_ex, screen_height, screen_width, DrawTextureParams, FilterMode, Rect as MqRect, Texture2D, Vec2, WHITE,
};

use super::{check_texture_data, BackendError, Canvas};
use crate::config::Filter;
use crate::sprite::Rect;

/// Canvas that draws through macroquad
pub struct QuadCanvas {
    filter: FilterMode,
}

impl QuadCanvas {
    pub fn new(filter: Filter) -> Self {
        let filter = match filter {
            Filter::Nearest => FilterMode::Nearest,
            Filter::Linear => FilterMode::Linear,
        };
        Self { filter }
    }
}

impl Default for QuadCanvas {
    fn default() -> Self {
        Self::new(Filter::Nearest)
    }
}

fn to_mq(rect: Rect) -> MqRect {
    MqRect::new(rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32)
}

impl Canvas for QuadCanvas {
    type Texture = Texture2D;

    fn create_texture(&mut self, width: u32, height: u32, rgba: &[u8]) -> Result<Texture2D, BackendError> {
        // from_rgba8 takes u16 dimensions
        check_texture_data(width, height, rgba, u16::MAX as u32)?;
        let texture = Texture2D::from_rgba8(width as u16, height as u16, rgba);
        texture.set_filter(self.filter);
        Ok(texture)
    }

    fn copy(&mut self, texture: &Texture2D, src: Option<Rect>, dst: Option<Rect>) -> Result<(), BackendError> {
        let (x, y, dest_size) = match dst {
            Some(r) => (r.x as f32, r.y as f32, Vec2::new(r.w as f32, r.h as f32)),
            None => (0.0, 0.0, Vec2::new(screen_width(), screen_height())),
        };

        draw_texture_ex(
            texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(dest_size),
                source: src.map(to_mq),
                ..Default::default()
            },
        );
        Ok(())
    }

    fn output_size(&self) -> (u32, u32) {
        (screen_width() as u32, screen_height() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_mq_rect() {
        let r = to_mq(Rect::new(-3, 4, 10, 20));
        assert_eq!((r.x, r.y, r.w, r.h), (-3.0, 4.0, 10.0, 20.0));
    }
}
