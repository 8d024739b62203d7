//! Debug overlay (F3)
//!
//! A few lines of text in the top-left corner, drawn in screen space after
//! the scene: frame rate, object counts, camera position and process memory.

use macroquad::prelude::{
    draw_rectangle, draw_text_ex, set_default_camera, Color, Font, TextParams, WHITE,
};

use crate::asset::Resources;
use crate::game::Scene;

const FONT_SIZE: u16 = 16;
const LINE_HEIGHT: f32 = 18.0;
const PADDING: f32 = 6.0;

/// Numbers shown by the overlay, gathered once per frame
#[derive(Debug, Clone, PartialEq)]
pub struct DebugStats {
    pub fps: i32,
    pub frame_time: f32,
    pub objects: usize,
    pub active_objects: usize,
    pub camera: (f32, f32),
    /// Loaded textures, sounds, fonts
    pub assets: (usize, usize, usize),
    /// Resident memory in bytes, when the platform reports it
    pub memory: Option<usize>,
}

impl DebugStats {
    pub fn gather(scene: &Scene, resources: &Resources, fps: i32, frame_time: f32) -> Self {
        let center = scene.view().center;
        Self {
            fps,
            frame_time,
            objects: scene.len(),
            active_objects: scene.iter().filter(|(_, o)| o.is_active()).count(),
            camera: (center.x, center.y),
            assets: (
                resources.textures.len(),
                resources.sounds.len(),
                resources.fonts.len(),
            ),
            memory: memory_stats::memory_stats().map(|m| m.physical_mem),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        let memory = match self.memory {
            Some(bytes) => format!("Memory: {:.1} MB", bytes as f64 / (1024.0 * 1024.0)),
            None => "Memory: n/a".to_string(),
        };
        vec![
            format!("FPS: {} ({:.1} ms)", self.fps, self.frame_time * 1000.0),
            format!("Objects: {}/{} active", self.active_objects, self.objects),
            format!("Camera: {:.0}, {:.0}", self.camera.0, self.camera.1),
            format!(
                "Assets: {} tex, {} snd, {} font",
                self.assets.0, self.assets.1, self.assets.2
            ),
            memory,
        ]
    }
}

#[derive(Debug, Default)]
pub struct DebugOverlay {
    pub visible: bool,
}

impl DebugOverlay {
    pub fn new(visible: bool) -> Self {
        Self { visible }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Draw `stats` in screen space. Resets the camera.
    pub fn draw(&self, stats: &DebugStats, font: Option<&Font>) {
        if !self.visible {
            return;
        }
        set_default_camera();

        let lines = stats.lines();
        let height = lines.len() as f32 * LINE_HEIGHT + PADDING * 2.0;
        draw_rectangle(0.0, 0.0, 220.0, height, Color::from_rgba(0, 0, 0, 160));

        for (i, line) in lines.iter().enumerate() {
            let y = PADDING + (i + 1) as f32 * LINE_HEIGHT - 4.0;
            draw_text_ex(
                line,
                PADDING,
                y,
                TextParams {
                    font,
                    font_size: FONT_SIZE,
                    color: WHITE,
                    ..Default::default()
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameObject, Sprite};
    use macroquad::prelude::vec2;

    #[test]
    fn test_gather_counts_active() {
        let mut scene = Scene::new(vec2(800.0, 600.0));
        scene.spawn(GameObject::scenery(Sprite::empty()));
        let hidden = scene.spawn(GameObject::scenery(Sprite::empty()));
        scene.get_mut(hidden).unwrap().set_active(false);

        let stats = DebugStats::gather(&scene, &Resources::new(), 60, 1.0 / 60.0);
        assert_eq!(stats.objects, 2);
        assert_eq!(stats.active_objects, 1);
        assert_eq!(stats.camera, (400.0, 300.0));
        assert_eq!(stats.assets, (0, 0, 0));
    }

    #[test]
    fn test_lines() {
        let stats = DebugStats {
            fps: 60,
            frame_time: 0.016,
            objects: 3,
            active_objects: 2,
            camera: (10.0, -4.0),
            assets: (1, 2, 0),
            memory: Some(3 * 1024 * 1024),
        };
        let lines = stats.lines();
        assert_eq!(lines[0], "FPS: 60 (16.0 ms)");
        assert_eq!(lines[1], "Objects: 2/3 active");
        assert_eq!(lines[2], "Camera: 10, -4");
        assert_eq!(lines[3], "Assets: 1 tex, 2 snd, 0 font");
        assert_eq!(lines[4], "Memory: 3.0 MB");

        let unknown = DebugStats { memory: None, ..stats };
        assert_eq!(unknown.lines()[4], "Memory: n/a");
    }
}
