//! Sprites
//!
//! A sprite is a texture, a position, and the sub-rectangle of the texture
//! currently shown. Animations change the sub-rectangle; objects move the
//! position. A negative x scale mirrors the sprite horizontally around its
//! position, so a flipped sprite extends to the left of where it stands.

use macroquad::prelude::{Color, Rect, Texture2D, Vec2, WHITE};

#[derive(Debug, Clone)]
pub struct Sprite {
    /// None draws nothing (e.g. the texture failed to load)
    texture: Option<Texture2D>,
    /// Full texture size in pixels
    texture_size: Vec2,
    /// Displayed sub-rectangle; None shows the whole texture
    source: Option<Rect>,
    position: Vec2,
    scale: Vec2,
    pub tint: Color,
}

impl Sprite {
    /// A sprite with nothing to draw
    pub fn empty() -> Self {
        Self {
            texture: None,
            texture_size: Vec2::ZERO,
            source: None,
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            tint: WHITE,
        }
    }

    /// A sprite showing `texture`, whose size is `texture_size`
    pub fn with_texture(texture: Texture2D, texture_size: Vec2) -> Self {
        Self {
            texture: Some(texture),
            texture_size,
            ..Self::empty()
        }
    }

    pub fn texture(&self) -> Option<&Texture2D> {
        self.texture.as_ref()
    }

    pub fn set_texture(&mut self, texture: Texture2D, texture_size: Vec2) {
        self.texture = Some(texture);
        self.texture_size = texture_size;
    }

    pub fn source(&self) -> Option<Rect> {
        self.source
    }

    /// Select the part of the texture to display
    pub fn set_source(&mut self, rect: Rect) {
        self.source = Some(rect);
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    /// Mirror horizontally. Calling twice restores the original.
    pub fn flip_x(&mut self) {
        self.scale.x = -self.scale.x;
    }

    pub fn is_flipped_x(&self) -> bool {
        self.scale.x < 0.0
    }

    /// Unscaled size of what is displayed
    pub fn local_size(&self) -> Vec2 {
        match self.source {
            Some(rect) => rect.size(),
            None => self.texture_size,
        }
    }

    /// World-space rectangle covered by the sprite, after scale and mirroring
    pub fn bounds(&self) -> Rect {
        let size = self.local_size() * self.scale;
        let x = if size.x < 0.0 { self.position.x + size.x } else { self.position.x };
        let y = if size.y < 0.0 { self.position.y + size.y } else { self.position.y };
        Rect::new(x, y, size.x.abs(), size.y.abs())
    }
}

impl Default for Sprite {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_use_source_rect() {
        let mut sprite = Sprite::empty();
        sprite.set_source(Rect::new(32.0, 0.0, 32.0, 48.0));
        sprite.set_position(Vec2::new(100.0, 50.0));
        assert_eq!(sprite.bounds(), Rect::new(100.0, 50.0, 32.0, 48.0));
    }

    #[test]
    fn test_flip_mirrors_around_position() {
        let mut sprite = Sprite::empty();
        sprite.set_source(Rect::new(0.0, 0.0, 32.0, 32.0));
        sprite.set_position(Vec2::new(100.0, 0.0));

        sprite.flip_x();
        assert!(sprite.is_flipped_x());
        assert_eq!(sprite.bounds(), Rect::new(68.0, 0.0, 32.0, 32.0));

        sprite.flip_x();
        assert!(!sprite.is_flipped_x());
        assert_eq!(sprite.bounds().x, 100.0);
    }

    #[test]
    fn test_empty_sprite_has_zero_bounds() {
        let sprite = Sprite::empty();
        assert_eq!(sprite.bounds().size(), Vec2::ZERO);
        assert!(sprite.texture().is_none());
    }
}
