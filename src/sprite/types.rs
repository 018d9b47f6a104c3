//! Value types shared by surfaces, sprites and canvases

use serde::{Deserialize, Serialize};

/// Integer rectangle in pixel space (top-left origin)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i64 {
        self.x as i64 + self.w as i64
    }

    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.h as i64
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Overlap of two rectangles, `None` if they don't touch
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = (self.x as i64).max(other.x as i64);
        let y0 = (self.y as i64).max(other.y as i64);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        if x1 <= x0 || y1 <= y0 {
            return None;
        }

        Some(Rect {
            x: x0 as i32,
            y: y0 as i32,
            w: (x1 - x0) as u32,
            h: (y1 - y0) as u32,
        })
    }
}

/// Opaque RGB triple, used for color keys and clear colors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };
    /// Classic sprite-sheet transparency color
    pub const MAGENTA: Rgb = Rgb { r: 255, g: 0, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// Independent width/height scale factors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub w: f64,
    pub h: f64,
}

impl Scale {
    pub const ONE: Scale = Scale { w: 1.0, h: 1.0 };

    pub const fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }

    pub const fn uniform(s: f64) -> Self {
        Self { w: s, h: s }
    }

    /// Scale a width/height pair in double precision, truncating toward zero.
    /// Negative or NaN products land on 0 (saturating cast).
    pub fn apply(self, w: u32, h: u32) -> (u32, u32) {
        ((w as f64 * self.w) as u32, (h as f64 * self.h) as u32)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale::ONE
    }
}

impl From<f64> for Scale {
    fn from(s: f64) -> Self {
        Scale::uniform(s)
    }
}

impl From<(f64, f64)> for Scale {
    fn from((w, h): (f64, f64)) -> Self {
        Scale::new(w, h)
    }
}

impl From<f32> for Scale {
    fn from(s: f32) -> Self {
        Scale::uniform(s as f64)
    }
}

impl From<(f32, f32)> for Scale {
    fn from((w, h): (f32, f32)) -> Self {
        Scale::new(w as f64, h as f64)
    }
}
