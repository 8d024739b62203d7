//! Game configuration
//!
//! Two files:
//! - `assets/game.ron`: how the game is put together (window, player tuning,
//!   animations, which assets to load). Shipped with the game.
//! - `settings.ron` in the user's config directory: volumes, mute and the
//!   debug overlay toggle. Written back when the game exits.
//!
//! Every field has a default, so a missing or partial file still produces
//! a playable game.

use std::fs;
use std::path::{Path, PathBuf};

use macroquad::prelude::{vec2, Color, Rect};
use serde::{Deserialize, Serialize};

use crate::asset::{AssetEntry, AssetManifest, LoadPolicy};
use crate::game::animation::{Animation, DEFAULT_FRAME_TIME};
use crate::game::kinematics::DEFAULT_GRAVITY;

/// Where the game config is read from, relative to the working directory
pub const GAME_CONFIG_PATH: &str = "assets/game.ron";

/// Error type for config loading and saving
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Read a RON file, falling back to `T::default()` if it is missing or bad
fn load_or_default<T>(path: &Path, what: &str) -> T
where
    T: Default + for<'de> Deserialize<'de>,
{
    match load_ron(path) {
        Ok(value) => {
            log::info!("loaded {} from {}", what, path.display());
            value
        }
        Err(ConfigError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("no {} at {}, using defaults", what, path.display());
            T::default()
        }
        Err(e) => {
            log::warn!("ignoring {} at {}: {}", what, path.display(), e);
            T::default()
        }
    }
}

fn load_ron<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, ConfigError> {
    let contents = fs::read_to_string(path)?;
    Ok(ron::from_str(&contents)?)
}

fn save_ron<T: Serialize>(value: &T, path: &Path) -> Result<(), ConfigError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(3)
        .indentor("  ".to_string());
    let contents = ron::ser::to_string_pretty(value, config)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

// =============================================================================
// Game config
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    /// Frames per second cap; None runs unlocked
    pub framerate_limit: Option<u32>,
    /// Background fill, RGB
    pub clear_color: (u8, u8, u8),
}

impl WindowSettings {
    pub fn clear_color(&self) -> Color {
        let (r, g, b) = self.clear_color;
        Color::from_rgba(r, g, b, 255)
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "2D Game".to_string(),
            width: 800,
            height: 600,
            resizable: false,
            framerate_limit: Some(60),
            clear_color: (135, 206, 235),
        }
    }
}

/// How to cut an animation out of a texture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FrameLayout {
    /// `count` equal frames side by side, starting at `origin`
    Strip {
        origin: (f32, f32),
        frame_size: (f32, f32),
        count: usize,
    },
    /// Explicit rectangles as (x, y, w, h)
    Rects(Vec<(f32, f32, f32, f32)>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub frames: FrameLayout,
    /// Seconds per frame
    pub frame_time: f32,
    pub looping: bool,
}

impl AnimationSettings {
    /// 32x32 frames along the sheet row starting at `row_y`
    fn strip(row_y: f32, count: usize, frame_time: f32) -> Self {
        Self {
            frames: FrameLayout::Strip {
                origin: (0.0, row_y),
                frame_size: (32.0, 32.0),
                count,
            },
            frame_time,
            looping: true,
        }
    }

    /// Build the animation these settings describe
    pub fn build(&self) -> Animation {
        let animation = match &self.frames {
            FrameLayout::Strip {
                origin,
                frame_size,
                count,
            } => Animation::from_strip(
                vec2(origin.0, origin.1),
                vec2(frame_size.0, frame_size.1),
                *count,
                self.frame_time,
            ),
            FrameLayout::Rects(rects) => {
                let mut animation = Animation::new(self.frame_time);
                for &(x, y, w, h) in rects {
                    animation.add_frame(Rect::new(x, y, w, h));
                }
                animation
            }
        };
        if self.looping {
            animation
        } else {
            animation.once()
        }
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self::strip(0.0, 1, DEFAULT_FRAME_TIME)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Horizontal speed in pixels/s
    pub speed: f32,
    /// Vertical velocity when a jump starts (negative is up)
    pub jump_impulse: f32,
    pub gravity: f32,
    /// Starting position
    pub spawn: (f32, f32),
    /// Texture name in the resource cache
    pub texture: String,
    pub idle: AnimationSettings,
    pub run: AnimationSettings,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            speed: 200.0,
            jump_impulse: -400.0,
            gravity: DEFAULT_GRAVITY,
            spawn: (0.0, 0.0),
            texture: "player".to_string(),
            idle: AnimationSettings::strip(0.0, 2, 0.2),
            run: AnimationSettings::strip(32.0, 4, 0.1),
        }
    }
}

/// Top-level game config (`assets/game.ron`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowSettings,
    pub player: PlayerSettings,
    pub assets: AssetManifest,
    /// What a failed asset load does to startup
    pub asset_policy: LoadPolicy,
    /// World y of the floor plane; None disables it
    pub floor_y: Option<f32>,
    /// Sound name to loop in the background
    pub music: Option<String>,
    /// Sound name played when the player jumps
    pub jump_sound: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            player: PlayerSettings::default(),
            assets: AssetManifest {
                textures: vec![AssetEntry::new("player", "assets/player.png")],
                sounds: vec![
                    AssetEntry::new("music", "assets/music.wav"),
                    AssetEntry::new("jump", "assets/jump.wav"),
                ],
                fonts: Vec::new(),
            },
            asset_policy: LoadPolicy::Continue,
            floor_y: None,
            music: Some("music".to_string()),
            jump_sound: Some("jump".to_string()),
        }
    }
}

impl GameConfig {
    /// Load from `path`; a missing or malformed file gives the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        load_or_default(path.as_ref(), "game config")
    }
}

// =============================================================================
// User settings
// =============================================================================

/// Per-user preferences, kept between runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// 0.0..=1.0
    pub music_volume: f32,
    /// 0.0..=1.0
    pub effects_volume: f32,
    pub muted: bool,
    pub show_debug_overlay: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            music_volume: 0.6,
            effects_volume: 1.0,
            muted: false,
            show_debug_overlay: false,
        }
    }
}

impl UserSettings {
    /// `<config dir>/skyhop/settings.ron`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dirs::config_dir().map(|dir| dir.join("skyhop").join("settings.ron"))
        }
        #[cfg(target_arch = "wasm32")]
        {
            None
        }
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let mut settings: Self = load_or_default(path.as_ref(), "user settings");
        settings.music_volume = settings.music_volume.clamp(0.0, 1.0);
        settings.effects_volume = settings.effects_volume.clamp(0.0, 1.0);
        settings
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        save_ron(self, path.as_ref())
    }
}
