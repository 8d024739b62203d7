//! skyhop: a minimal 2D platformer scaffold
//!
//! Sprites with frame animations, simple kinematics, a player you can run
//! and jump with, and a camera that follows it around.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod asset;
mod audio;
mod config;
mod debug_overlay;
mod game;
mod input;

use app::App;
use config::{GameConfig, GAME_CONFIG_PATH};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    // Runs before logging is set up; main() loads the config again with logs
    let window = GameConfig::load_or_default(GAME_CONFIG_PATH).window;
    Conf {
        window_title: window.title,
        window_width: window.width as i32,
        window_height: window.height as i32,
        window_resizable: window.resizable,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("skyhop v{}", VERSION);
    let config = GameConfig::load_or_default(GAME_CONFIG_PATH);

    match App::new(config).await {
        Ok(app) => app.run().await,
        Err(e) => {
            log::error!("startup failed: {}", e);
            std::process::exit(1);
        }
    }
}
