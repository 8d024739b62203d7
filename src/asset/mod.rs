//! Resource cache
//!
//! Textures, sounds and fonts loaded once at startup and looked up by name.
//! The cache is a plain value owned by the app and passed by reference to
//! whatever needs an asset; there is no global instance.
//!
//! ```text
//! Resources
//! ├── textures: AssetStore<Texture2D>   # decoded with `image`, uploaded as RGBA8
//! ├── sounds:   AssetStore<Sound>       # effects and music
//! └── fonts:    AssetStore<Font>
//! ```
//!
//! Loads are driven by the [`AssetManifest`] from `assets/game.ron`. A failed
//! load never registers anything under the name; whether it aborts startup
//! is decided by [`LoadPolicy`].

mod resources;
mod store;

use serde::{Deserialize, Serialize};

pub use resources::Resources;
pub use store::AssetStore;

/// Errors from loading an asset
#[derive(Debug)]
pub enum AssetError {
    /// File could not be read
    Io(String),
    /// Bytes were read but could not be decoded
    Decode(String),
    /// Decoded but not usable (e.g. texture too large)
    Unsupported(String),
    /// macroquad's loader rejected the file
    Library(String),
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Io(msg) => write!(f, "I/O error: {}", msg),
            AssetError::Decode(msg) => write!(f, "decode error: {}", msg),
            AssetError::Unsupported(msg) => write!(f, "unsupported asset: {}", msg),
            AssetError::Library(msg) => write!(f, "load error: {}", msg),
        }
    }
}

impl std::error::Error for AssetError {}

impl From<std::io::Error> for AssetError {
    fn from(e: std::io::Error) -> Self {
        AssetError::Io(e.to_string())
    }
}

impl From<image::ImageError> for AssetError {
    fn from(e: image::ImageError) -> Self {
        AssetError::Decode(e.to_string())
    }
}

/// What to do when an asset in the manifest fails to load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoadPolicy {
    /// Log a warning and keep going without the asset
    #[default]
    Continue,
    /// Stop at the first failure and report it
    Abort,
}

/// The kind of asset an entry names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Texture,
    Sound,
    Font,
}

impl AssetKind {
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Texture => "texture",
            AssetKind::Sound => "sound",
            AssetKind::Font => "font",
        }
    }
}

/// One named file to load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetEntry {
    pub name: String,
    pub path: String,
}

impl AssetEntry {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Everything the game loads before the first frame
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    pub textures: Vec<AssetEntry>,
    pub sounds: Vec<AssetEntry>,
    pub fonts: Vec<AssetEntry>,
}

/// Outcome of loading a manifest
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Number of assets that loaded
    pub loaded: usize,
    /// Names and errors of assets that were skipped
    pub failed: Vec<(String, AssetError)>,
}

impl LoadReport {
    /// Fold one load result into the report according to `policy`.
    ///
    /// Returns `Err` only when the policy is [`LoadPolicy::Abort`].
    pub fn record(
        &mut self,
        policy: LoadPolicy,
        kind: AssetKind,
        entry: &AssetEntry,
        result: Result<(), AssetError>,
    ) -> Result<(), AssetError> {
        match result {
            Ok(()) => {
                log::debug!("loaded {} '{}' from {}", kind.label(), entry.name, entry.path);
                self.loaded += 1;
                Ok(())
            }
            Err(e) if policy == LoadPolicy::Abort => {
                log::error!("failed to load {} '{}' from {}: {}", kind.label(), entry.name, entry.path, e);
                Err(e)
            }
            Err(e) => {
                log::warn!("skipping {} '{}' ({}): {}", kind.label(), entry.name, entry.path, e);
                self.failed.push((entry.name.clone(), e));
                Ok(())
            }
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
