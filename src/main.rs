//! Bonnie Sprite demo
//!
//! Loads an image (first CLI argument, or a generated checkerboard) and draws
//! it every way the sprite API allows: background, plain, scaled, clipped,
//! and through the software framebuffer.
//!
//! Optional settings are read from `sprite.ron` in the working directory.

use bonnie_sprite::{
    load_config, Canvas, Framebuffer, QuadCanvas, Rect, Rgb, Scale, Sprite, SpriteConfig, Surface, VERSION,
};
use macroquad::prelude::*;

/// Software preview resolution
const PREVIEW_W: usize = 160;
const PREVIEW_H: usize = 120;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Bonnie Sprite v{}", VERSION),
        window_width: 960,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

fn load_settings() -> SpriteConfig {
    match load_config("sprite.ron") {
        Ok(config) => {
            log::info!("Loaded sprite.ron");
            config
        }
        Err(e) => {
            log::warn!("No usable sprite.ron ({}), using defaults", e);
            SpriteConfig::default()
        }
    }
}

fn load_surface() -> Surface {
    let fallback = || Surface::checkerboard(64, 64, Rgb::WHITE, Rgb::MAGENTA);
    match std::env::args().nth(1) {
        // Surface::load already logged the reason
        Some(path) => Surface::load(&path).unwrap_or_else(|_| fallback()),
        None => fallback(),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let config = load_settings();
    let surface = load_surface();

    let mut canvas = QuadCanvas::new(config.filter);
    let mut fb = Framebuffer::new(PREVIEW_W, PREVIEW_H).with_max_texture_size(config.max_texture_size);

    let (sprite, soft_sprite) = match (
        Sprite::from_surface(&mut canvas, &surface, config.color_key),
        Sprite::from_surface(&mut fb, &surface, config.color_key),
    ) {
        (Ok(gpu), Ok(soft)) => (gpu, soft),
        (Err(e), _) | (_, Err(e)) => {
            log::error!("Could not create sprite: {}", e);
            return;
        }
    };
    drop(surface);

    log::info!("=== Bonnie Sprite: {}x{} ===", sprite.width(), sprite.height());

    // Top-left quarter of the image
    let quarter = Rect::new(0, 0, sprite.width() / 2, sprite.height() / 2);

    loop {
        clear_background(Color::from_rgba(30, 30, 35, 255));

        let results = [
            sprite.draw_clipped_background(&mut canvas, Some(quarter)),
            sprite.draw(&mut canvas, 20, 20),
            sprite.draw_scaled(&mut canvas, 120, 20, 2.0),
            sprite.draw_scaled(&mut canvas, 280, 20, Scale::new(3.0, 1.0)),
            sprite.draw_clipped(&mut canvas, 20, 200, Some(quarter)),
            sprite.draw_scaled_clipped(&mut canvas, 120, 200, Some(quarter), (2.0, 3.0)),
        ];
        for e in results.into_iter().filter_map(Result::err) {
            log::error!("Draw failed: {}", e);
        }

        // Software path: render into the framebuffer, then show it like any texture
        fb.clear(Rgb::new(20, 20, 60));
        let soft_results = [soft_sprite.draw_background(&mut fb), soft_sprite.draw_scaled(&mut fb, 8, 8, 0.5)];
        for e in soft_results.into_iter().filter_map(Result::err) {
            log::error!("Software draw failed: {}", e);
        }

        let (fb_w, fb_h) = fb.output_size();
        let preview = Texture2D::from_rgba8(fb_w as u16, fb_h as u16, &fb.pixels);
        preview.set_filter(FilterMode::Nearest);
        draw_texture_ex(
            &preview,
            screen_width() - fb_w as f32 * 2.0 - 20.0,
            screen_height() - fb_h as f32 * 2.0 - 20.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(Vec2::new(fb_w as f32 * 2.0, fb_h as f32 * 2.0)),
                ..Default::default()
            },
        );

        draw_text("background: clipped quarter", 20.0, screen_height() - 20.0, 20.0, WHITE);

        next_frame().await;
    }
}
