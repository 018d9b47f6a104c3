//! Software canvas
//! Nearest-neighbour blits into an RGBA framebuffer

use super::{check_texture_data, BackendError, Canvas};
use crate::sprite::{Rect, Rgb};

/// Default texture size limit, matches common GPU limits
pub const MAX_TEXTURE_SIZE: u32 = 4096;

/// Texture owned by a [`Framebuffer`] canvas
#[derive(Debug, Clone)]
pub struct SoftTexture {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>, // RGBA, 4 bytes per pixel
}

impl SoftTexture {
    fn texel(&self, x: i64, y: i64) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }
}

/// Map an offset into the destination span back onto the source span.
/// Offset and span lengths can each approach 2^32, so the product needs i128.
fn to_source(offset: i64, src_start: i32, src_len: u32, dst_len: u32) -> i64 {
    let step = offset as i128 * src_len as i128 / dst_len as i128;
    // offset < dst_len, so step < src_len and fits
    src_start as i64 + step as i64
}

/// Framebuffer for software rendering
pub struct Framebuffer {
    pub pixels: Vec<u8>, // RGBA, 4 bytes per pixel
    pub width: usize,
    pub height: usize,
    pub max_texture_size: u32,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * 4],
            width,
            height,
            max_texture_size: MAX_TEXTURE_SIZE,
        }
    }

    pub fn with_max_texture_size(mut self, max: u32) -> Self {
        self.max_texture_size = max;
        self
    }

    pub fn clear(&mut self, color: Rgb) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            self.pixels[idx..idx + 4].copy_from_slice(&rgba);
        }
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            Some([
                self.pixels[idx],
                self.pixels[idx + 1],
                self.pixels[idx + 2],
                self.pixels[idx + 3],
            ])
        } else {
            None
        }
    }

    fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width as u32, self.height as u32)
    }
}

impl Canvas for Framebuffer {
    type Texture = SoftTexture;

    fn create_texture(&mut self, width: u32, height: u32, rgba: &[u8]) -> Result<SoftTexture, BackendError> {
        check_texture_data(width, height, rgba, self.max_texture_size)?;
        Ok(SoftTexture {
            width,
            height,
            pixels: rgba.to_vec(),
        })
    }

    fn copy(&mut self, texture: &SoftTexture, src: Option<Rect>, dst: Option<Rect>) -> Result<(), BackendError> {
        let full = Rect::new(0, 0, texture.width, texture.height);
        let src = src.unwrap_or(full);
        let dst = dst.unwrap_or_else(|| self.bounds());

        if src.is_empty() || dst.is_empty() || src.intersect(&full).is_none() {
            return Ok(());
        }
        let Some(visible) = dst.intersect(&self.bounds()) else {
            return Ok(());
        };

        // Map each visible destination pixel back into the source rect.
        // Samples that fall outside the texture are skipped, as are
        // fully transparent (color-keyed) texels.
        for py in visible.y as i64..visible.bottom() {
            let sy = to_source(py - dst.y as i64, src.y, src.h, dst.h);
            for px in visible.x as i64..visible.right() {
                let sx = to_source(px - dst.x as i64, src.x, src.w, dst.w);
                match texture.texel(sx, sy) {
                    Some(texel) if texel[3] != 0 => self.set_pixel(px as usize, py as usize, texel),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn output_size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const CLEAR: [u8; 4] = [0, 0, 0, 255];

    /// 2x2 texture: red, green / blue, transparent
    fn quad_texture(fb: &mut Framebuffer) -> SoftTexture {
        let rgba = [
            255, 0, 0, 255, 0, 255, 0, 255, //
            0, 0, 255, 255, 9, 9, 9, 0,
        ];
        fb.create_texture(2, 2, &rgba).unwrap()
    }

    #[test]
    fn test_create_texture_validates_input() {
        let mut fb = Framebuffer::new(4, 4).with_max_texture_size(8);
        assert_eq!(fb.create_texture(0, 2, &[]).unwrap_err(), BackendError::EmptyTexture);
        assert!(matches!(
            fb.create_texture(9, 1, &[0; 36]),
            Err(BackendError::TextureTooLarge { width: 9, height: 1, max: 8 })
        ));
        assert_eq!(
            fb.create_texture(2, 2, &[0; 15]).unwrap_err(),
            BackendError::InvalidPixelData { expected: 16, actual: 15 }
        );
    }

    #[test]
    fn test_copy_plain() {
        let mut fb = Framebuffer::new(4, 4);
        fb.clear(Rgb::BLACK);
        let tex = quad_texture(&mut fb);
        fb.copy(&tex, None, Some(Rect::new(1, 1, 2, 2))).unwrap();

        assert_eq!(fb.get_pixel(0, 0), Some(CLEAR));
        assert_eq!(fb.get_pixel(1, 1), Some(RED));
        assert_eq!(fb.get_pixel(2, 1), Some([0, 255, 0, 255]));
        assert_eq!(fb.get_pixel(1, 2), Some([0, 0, 255, 255]));
        // transparent texel leaves the background alone
        assert_eq!(fb.get_pixel(2, 2), Some(CLEAR));
    }

    #[test]
    fn test_copy_scaled_nearest() {
        let mut fb = Framebuffer::new(4, 4);
        fb.clear(Rgb::BLACK);
        let tex = quad_texture(&mut fb);
        fb.copy(&tex, None, Some(Rect::new(0, 0, 4, 4))).unwrap();

        assert_eq!(fb.get_pixel(1, 1), Some(RED));
        assert_eq!(fb.get_pixel(3, 0), Some([0, 255, 0, 255]));
        assert_eq!(fb.get_pixel(3, 3), Some(CLEAR));
    }

    #[test]
    fn test_copy_none_dst_fills_target() {
        let mut fb = Framebuffer::new(6, 6);
        fb.clear(Rgb::BLACK);
        let tex = quad_texture(&mut fb);
        fb.copy(&tex, Some(Rect::new(0, 0, 1, 1)), None).unwrap();

        for y in 0..6 {
            for x in 0..6 {
                assert_eq!(fb.get_pixel(x, y), Some(RED));
            }
        }
    }

    #[test]
    fn test_copy_clips_to_framebuffer() {
        let mut fb = Framebuffer::new(2, 2);
        fb.clear(Rgb::BLACK);
        let tex = quad_texture(&mut fb);
        fb.copy(&tex, None, Some(Rect::new(-1, -1, 2, 2))).unwrap();

        // only the bottom-right (transparent) texel would land on screen
        assert_eq!(fb.get_pixel(0, 0), Some(CLEAR));
        fb.copy(&tex, None, Some(Rect::new(1, 1, 2, 2))).unwrap();
        assert_eq!(fb.get_pixel(1, 1), Some(RED));
    }

    #[test]
    fn test_copy_huge_rects_do_not_overflow() {
        let mut fb = Framebuffer::new(4, 4);
        fb.clear(Rgb::BLACK);
        let tex = quad_texture(&mut fb);
        let src = Rect::new(0, 0, u32::MAX, 1);
        let dst = Rect::new(i32::MIN, 0, u32::MAX, 1);
        assert_eq!(fb.copy(&tex, Some(src), Some(dst)), Ok(()));
        // the visible span samples far past the texture edge
        assert_eq!(fb.get_pixel(0, 0), Some(CLEAR));
        assert_eq!(fb.get_pixel(3, 0), Some(CLEAR));
    }

    #[test]
    fn test_to_source_extremes() {
        assert_eq!(to_source(0, 7, 10, 20), 7);
        assert_eq!(to_source(19, 0, 10, 20), 9);
        assert_eq!(to_source(1 << 31, 0, u32::MAX, u32::MAX), 1 << 31);
    }

    #[test]
    fn test_output_size() {
        let fb = Framebuffer::new(12, 5);
        assert_eq!(fb.output_size(), (12, 5));
    }

    #[test]
    fn test_copy_src_outside_texture_is_noop() {
        let mut fb = Framebuffer::new(2, 2);
        fb.clear(Rgb::BLACK);
        let tex = quad_texture(&mut fb);
        fb.copy(&tex, Some(Rect::new(5, 5, 2, 2)), None).unwrap();
        assert_eq!(fb.get_pixel(0, 0), Some(CLEAR));
    }
}
