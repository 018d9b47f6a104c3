//! Sprite settings loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable config files.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::canvas::MAX_TEXTURE_SIZE;
use crate::error::Result;
use crate::sprite::Rgb;

/// Texture sampling when a sprite is scaled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Filter {
    #[default]
    Nearest,
    Linear,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    /// Color made transparent when loading sprites
    pub color_key: Option<Rgb>,
    pub filter: Filter,
    /// Largest texture edge the software canvas accepts
    pub max_texture_size: u32,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            color_key: None,
            filter: Filter::Nearest,
            max_texture_size: MAX_TEXTURE_SIZE,
        }
    }
}

impl SpriteConfig {
    /// Parse a config from a RON string
    pub fn parse(s: &str) -> Result<Self> {
        Ok(ron::from_str(s)?)
    }
}

/// Load a config from a RON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SpriteConfig> {
    let contents = fs::read_to_string(path)?;
    SpriteConfig::parse(&contents)
}

/// Save a config to a RON file
pub fn save_config<P: AsRef<Path>>(config: &SpriteConfig, path: P) -> Result<()> {
    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(2)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(config, pretty)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpriteError;

    #[test]
    fn test_missing_fields_use_defaults() {
        let cfg = SpriteConfig::parse("(filter: Linear)").unwrap();
        assert_eq!(cfg.filter, Filter::Linear);
        assert_eq!(cfg.color_key, None);
        assert_eq!(cfg.max_texture_size, MAX_TEXTURE_SIZE);
    }

    #[test]
    fn test_parse_color_key() {
        let cfg = SpriteConfig::parse("(color_key: Some((r: 255, g: 0, b: 255)))").unwrap();
        assert_eq!(cfg.color_key, Some(Rgb::MAGENTA));
    }

    #[test]
    fn test_parse_error() {
        let err = SpriteConfig::parse("(filter: Bilinear)").unwrap_err();
        assert!(matches!(err, SpriteError::Config(_)));
    }

    #[test]
    fn test_save_then_load() {
        let cfg = SpriteConfig {
            color_key: Some(Rgb::new(0, 128, 0)),
            filter: Filter::Linear,
            max_texture_size: 512,
        };
        let path = std::env::temp_dir().join("bonnie_sprite_config_test.ron");
        save_config(&cfg, &path).unwrap();
        let loaded = load_config(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(std::env::temp_dir().join("bonnie_sprite_no_such.ron")).unwrap_err();
        assert!(matches!(err, SpriteError::Io(_)));
    }
}
