//! Loading textures, sounds and fonts into the cache

use image::GenericImageView;
use macroquad::audio::{load_sound, Sound};
use macroquad::prelude::{load_file, load_ttf_font, FilterMode, Font, Texture2D};

use super::{AssetError, AssetKind, AssetManifest, AssetStore, LoadPolicy, LoadReport};

/// RGBA8 pixels ready for upload
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u16,
    pub height: u16,
    pub rgba: Vec<u8>,
}

/// Decode PNG/JPEG/BMP bytes into RGBA8.
///
/// Textures wider or taller than `u16::MAX` are rejected since the GPU upload
/// path takes 16-bit dimensions.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, AssetError> {
    let img = image::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(AssetError::Unsupported(format!("{}x{} texture is too large", width, height)));
    };
    Ok(DecodedImage {
        width: w,
        height: h,
        rgba: img.to_rgba8().into_raw(),
    })
}

/// The game's resource cache
#[derive(Default)]
pub struct Resources {
    pub textures: AssetStore<Texture2D>,
    pub sounds: AssetStore<Sound>,
    pub fonts: AssetStore<Font>,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a texture and store it under `name`
    pub async fn load_texture(&mut self, name: &str, path: &str) -> Result<(), AssetError> {
        let result = match load_file(path).await {
            Ok(bytes) => decode_image(&bytes).map(|img| {
                let texture = Texture2D::from_rgba8(img.width, img.height, &img.rgba);
                // Pixel art: no smoothing between sheet frames
                texture.set_filter(FilterMode::Nearest);
                texture
            }),
            Err(e) => Err(AssetError::Io(format!("{}: {}", path, e))),
        };
        self.textures.store_loaded(name, result)
    }

    /// Load a sound (effect or music) and store it under `name`
    pub async fn load_sound(&mut self, name: &str, path: &str) -> Result<(), AssetError> {
        let result = load_sound(path)
            .await
            .map_err(|e| AssetError::Library(format!("{}: {}", path, e)));
        self.sounds.store_loaded(name, result)
    }

    /// Load a TTF font and store it under `name`
    pub async fn load_font(&mut self, name: &str, path: &str) -> Result<(), AssetError> {
        let result = load_ttf_font(path)
            .await
            .map_err(|e| AssetError::Library(format!("{}: {}", path, e)));
        self.fonts.store_loaded(name, result)
    }

    /// Load every entry of the manifest.
    ///
    /// With [`LoadPolicy::Continue`] failures are logged and skipped; with
    /// [`LoadPolicy::Abort`] the first failure is returned.
    pub async fn load_manifest(
        &mut self,
        manifest: &AssetManifest,
        policy: LoadPolicy,
    ) -> Result<LoadReport, AssetError> {
        let mut report = LoadReport::default();

        for entry in &manifest.textures {
            let result = self.load_texture(&entry.name, &entry.path).await;
            report.record(policy, AssetKind::Texture, entry, result)?;
        }
        for entry in &manifest.sounds {
            let result = self.load_sound(&entry.name, &entry.path).await;
            report.record(policy, AssetKind::Sound, entry, result)?;
        }
        for entry in &manifest.fonts {
            let result = self.load_font(&entry.name, &entry.path).await;
            report.record(policy, AssetKind::Font, entry, result)?;
        }

        log::info!(
            "loaded {} assets ({} skipped)",
            report.loaded,
            report.failed.len()
        );
        log::debug!("textures: {:?}", self.textures.names().collect::<Vec<_>>());
        log::debug!("sounds: {:?}", self.sounds.names().collect::<Vec<_>>());
        log::debug!("fonts: {:?}", self.fonts.names().collect::<Vec<_>>());
        if self.textures.is_empty() && !manifest.textures.is_empty() {
            log::warn!("no textures loaded, sprites will be invisible");
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut img = RgbaImage::new(width, height);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
        bytes
    }

    #[test]
    fn test_decode_png() {
        let decoded = decode_image(&png_bytes(4, 2)).unwrap();
        assert_eq!((decoded.width, decoded.height), (4, 2));
        assert_eq!(decoded.rgba.len(), 4 * 2 * 4);
        assert_eq!(&decoded.rgba[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_decode_garbage_is_decode_error() {
        let result = decode_image(b"definitely not a png");
        assert!(matches!(result, Err(AssetError::Decode(_))));
    }

    #[test]
    fn test_decode_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("player.png");
        std::fs::write(&path, png_bytes(8, 8)).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let decoded = decode_image(&bytes).unwrap();
        assert_eq!((decoded.width, decoded.height), (8, 8));
    }
}
