//! Decoded, CPU-side images
//!
//! A [`Surface`] is the transient step between an image file and a backend
//! texture. It owns an RGBA8 pixel buffer and an optional color key; turning
//! it into texture bytes applies the key by zeroing alpha on matching pixels.

use std::borrow::Cow;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};

use super::types::Rgb;
use crate::error::Result;

/// An RGB value mapped through a surface's pixel format.
///
/// Surfaces store RGBA8888, so a key is the packed `0xRRGGBB00` value and
/// compares against pixels with the alpha byte masked off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorKey(u32);

impl ColorKey {
    pub fn raw(self) -> u32 {
        self.0
    }

    fn matches(self, pixel: &[u8]) -> bool {
        u32::from_be_bytes([pixel[0], pixel[1], pixel[2], 0]) == self.0
    }
}

/// Decoded image plus optional transparent color
#[derive(Debug, Clone)]
pub struct Surface {
    image: RgbaImage,
    color_key: Option<ColorKey>,
}

impl Surface {
    /// Load a BMP file
    pub fn load_bmp<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match decode_bmp(path) {
            Ok(img) => Ok(Self::from_image(img)),
            Err(e) => {
                log::error!("Failed to load bitmap {}: {}", path.display(), e);
                Err(e)
            }
        }
    }

    /// Load any image format `image` was built with, sniffing the content
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match decode_any(path) {
            Ok(img) => Ok(Self::from_image(img)),
            Err(e) => {
                log::error!("Failed to load image {}: {}", path.display(), e);
                Err(e)
            }
        }
    }

    /// Decode BMP data already in memory
    pub fn from_bmp_bytes(bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory_with_format(bytes, ImageFormat::Bmp).map_err(|e| {
            log::error!("Failed to decode bitmap: {}", e);
            e
        })?;
        Ok(Self::from_image(img))
    }

    /// Wrap raw RGBA8 pixels. Returns `None` if the buffer is not `w * h * 4` bytes.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        RgbaImage::from_raw(width, height, pixels).map(|image| Self { image, color_key: None })
    }

    /// Create a checkerboard test surface (8px cells)
    pub fn checkerboard(width: u32, height: u32, color1: Rgb, color2: Rgb) -> Self {
        let image = RgbaImage::from_fn(width, height, |x, y| {
            let checker = ((x / 8) + (y / 8)) % 2 == 0;
            let color = if checker { color1 } else { color2 };
            image::Rgba(color.to_bytes())
        });
        Self { image, color_key: None }
    }

    pub fn from_image(img: DynamicImage) -> Self {
        Self {
            image: img.into_rgba8(),
            color_key: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Map an RGB triple into this surface's pixel format
    pub fn map_rgb(&self, rgb: Rgb) -> ColorKey {
        ColorKey(u32::from_be_bytes([rgb.r, rgb.g, rgb.b, 0]))
    }

    pub fn set_color_key(&mut self, key: Option<ColorKey>) {
        self.color_key = key;
    }

    pub fn color_key(&self) -> Option<ColorKey> {
        self.color_key
    }

    /// RGBA bytes ready for texture upload.
    ///
    /// `key` overrides the surface's own key for this call only. With no key
    /// in effect the pixel buffer is borrowed as-is.
    pub fn texture_pixels(&self, key: Option<ColorKey>) -> Result<Cow<'_, [u8]>> {
        let Some(key) = key.or(self.color_key) else {
            return Ok(Cow::Borrowed(self.pixels()));
        };

        let src = self.pixels();
        let mut out = Vec::new();
        out.try_reserve_exact(src.len())?;
        out.extend_from_slice(src);

        for px in out.chunks_exact_mut(4) {
            if key.matches(px) {
                px[3] = 0;
            }
        }

        Ok(Cow::Owned(out))
    }
}

fn decode_bmp(path: &Path) -> Result<DynamicImage> {
    let file = File::open(path)?;
    Ok(image::load(BufReader::new(file), ImageFormat::Bmp)?)
}

fn decode_any(path: &Path) -> Result<DynamicImage> {
    Ok(ImageReader::open(path)?.with_guessed_format()?.decode()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpriteError;

    fn two_by_one() -> Surface {
        Surface::from_rgba(2, 1, vec![255, 0, 255, 255, 10, 20, 30, 255]).unwrap()
    }

    #[test]
    fn test_from_rgba_rejects_short_buffer() {
        assert!(Surface::from_rgba(2, 2, vec![0; 15]).is_none());
    }

    #[test]
    fn test_map_rgb_ignores_alpha() {
        let s = two_by_one();
        let key = s.map_rgb(Rgb::MAGENTA);
        assert_eq!(key.raw(), 0xFF00FF00);
        assert!(key.matches(&[255, 0, 255, 17]));
    }

    #[test]
    fn test_texture_pixels_without_key_borrows() {
        let s = two_by_one();
        let px = s.texture_pixels(None).unwrap();
        assert!(matches!(px, Cow::Borrowed(_)));
        assert_eq!(&*px, s.pixels());
    }

    #[test]
    fn test_texture_pixels_key_clears_alpha() {
        let s = two_by_one();
        let key = s.map_rgb(Rgb::MAGENTA);
        let px = s.texture_pixels(Some(key)).unwrap();
        assert_eq!(&*px, &[255, 0, 255, 0, 10, 20, 30, 255]);
        // caller's surface untouched
        assert_eq!(s.pixels()[3], 255);
    }

    #[test]
    fn test_surface_key_used_when_no_override() {
        let mut s = two_by_one();
        let key = s.map_rgb(Rgb::new(10, 20, 30));
        s.set_color_key(Some(key));
        let px = s.texture_pixels(None).unwrap();
        assert_eq!(px[3], 255);
        assert_eq!(px[7], 0);
    }

    #[test]
    fn test_checkerboard_cells() {
        let s = Surface::checkerboard(16, 8, Rgb::WHITE, Rgb::MAGENTA);
        assert_eq!((s.width(), s.height()), (16, 8));
        assert_eq!(&s.pixels()[..4], &Rgb::WHITE.to_bytes());
        let second_cell = 8 * 4;
        assert_eq!(&s.pixels()[second_cell..second_cell + 4], &Rgb::MAGENTA.to_bytes());
    }

    #[test]
    fn test_load_bmp_missing_file() {
        let path = std::env::temp_dir().join("bonnie_sprite_does_not_exist.bmp");
        let err = Surface::load_bmp(&path).unwrap_err();
        assert!(matches!(err, SpriteError::Io(_)));
    }

    #[test]
    fn test_load_bmp_rejects_garbage() {
        let path = std::env::temp_dir().join("bonnie_sprite_garbage.bmp");
        std::fs::write(&path, b"definitely not a bitmap").unwrap();
        let err = Surface::load_bmp(&path).unwrap_err();
        assert!(matches!(err, SpriteError::Decode(_)));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_bmp_bytes_round_trip_dimensions() {
        let img = RgbaImage::from_pixel(7, 3, image::Rgba([1, 2, 3, 255]));
        let mut bytes = std::io::Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img).write_to(&mut bytes, ImageFormat::Bmp).unwrap();

        let s = Surface::from_bmp_bytes(bytes.get_ref()).unwrap();
        assert_eq!((s.width(), s.height()), (7, 3));
        assert_eq!(&s.pixels()[..4], &[1, 2, 3, 255]);
    }

    #[test]
    fn test_load_sniffs_format() {
        let img = RgbaImage::from_pixel(5, 4, image::Rgba([9, 9, 9, 255]));
        let path = std::env::temp_dir().join("bonnie_sprite_sniff.img");
        DynamicImage::ImageRgba8(img).save_with_format(&path, ImageFormat::Bmp).unwrap();

        let s = Surface::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!((s.width(), s.height()), (5, 4));
    }
}
