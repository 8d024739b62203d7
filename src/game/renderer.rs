//! Drawing surface
//!
//! The scene draws through the [`Surface`] trait rather than calling
//! macroquad directly, so the frame core can run headless. The real window
//! is [`MacroquadSurface`]; presenting the frame (`next_frame().await`)
//! stays with the app loop.

use macroquad::prelude::{
    clear_background, draw_texture_ex, set_camera, vec2, Camera2D, Color, DrawTextureParams, Vec2,
};

use super::sprite::Sprite;

/// Camera view: what part of the world is on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    /// World point at the middle of the screen
    pub center: Vec2,
    /// World units visible horizontally and vertically
    pub size: Vec2,
}

impl View {
    /// A view showing `size` world units with the top-left corner at the origin
    pub fn new(size: Vec2) -> Self {
        Self {
            center: size / 2.0,
            size,
        }
    }

    /// macroquad camera for this view (+y down)
    pub fn to_camera(&self) -> Camera2D {
        Camera2D {
            target: self.center,
            zoom: vec2(2.0 / self.size.x, 2.0 / self.size.y),
            ..Default::default()
        }
    }
}

/// Something the scene can draw a frame onto
pub trait Surface {
    /// Fill the whole frame with `color`
    fn clear(&mut self, color: Color);
    /// Set the camera for the draws that follow
    fn set_view(&mut self, view: &View);
    fn draw_sprite(&mut self, sprite: &Sprite);
}

/// The macroquad window
#[derive(Debug, Default)]
pub struct MacroquadSurface;

impl Surface for MacroquadSurface {
    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn set_view(&mut self, view: &View) {
        set_camera(&view.to_camera());
    }

    fn draw_sprite(&mut self, sprite: &Sprite) {
        let Some(texture) = sprite.texture() else { return };
        let bounds = sprite.bounds();
        let scale = sprite.scale();
        draw_texture_ex(
            texture,
            bounds.x,
            bounds.y,
            sprite.tint,
            DrawTextureParams {
                dest_size: Some(bounds.size()),
                source: sprite.source(),
                flip_x: scale.x < 0.0,
                flip_y: scale.y < 0.0,
                ..Default::default()
            },
        );
    }
}

/// Surface that records what would have been drawn
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub clears: Vec<Color>,
    pub views: Vec<View>,
    /// Sprite positions, in draw order
    pub sprites: Vec<Vec2>,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.clears.push(color);
    }

    fn set_view(&mut self, view: &View) {
        self.views.push(*view);
    }

    fn draw_sprite(&mut self, sprite: &Sprite) {
        self.sprites.push(sprite.position());
    }
}
