//! Sprite Animation
//!
//! An [`Animation`] is an ordered list of frames (sub-rectangles of a sprite
//! sheet) shown for a fixed time each. Playback is a tiny state machine:
//! the current frame index plus an elapsed-time accumulator.
//!
//! ```text
//!  ┌────┬────┬────┐
//!  │ 0  │ 1  │ 2  │   from_strip(origin, frame_size, 3, 0.1)
//!  └────┴────┴────┘
//!     0 → 1 → 2 → 0 …   looping
//!     0 → 1 → 2 ■       non-looping: holds the last frame, finished
//! ```
//!
//! When the accumulator reaches the frame time it resets to zero and the
//! next frame is applied to the sprite. Leftover time is dropped rather than
//! carried into the next frame, so a long hitch advances one frame at most.

use macroquad::prelude::{Rect, Vec2};

use super::sprite::Sprite;

/// Frame time used when none is given
pub const DEFAULT_FRAME_TIME: f32 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    frames: Vec<Rect>,
    /// Seconds each frame is shown
    frame_time: f32,
    /// Time accumulated toward the next frame
    elapsed: f32,
    current_frame: usize,
    looping: bool,
    /// Set when a non-looping animation reaches its last frame
    finished: bool,
}

impl Animation {
    /// An empty looping animation
    pub fn new(frame_time: f32) -> Self {
        Self {
            frames: Vec::new(),
            frame_time,
            elapsed: 0.0,
            current_frame: 0,
            looping: true,
            finished: false,
        }
    }

    /// `count` frames of `frame_size`, laid left to right starting at `origin`
    pub fn from_strip(origin: Vec2, frame_size: Vec2, count: usize, frame_time: f32) -> Self {
        let mut anim = Self::new(frame_time);
        for i in 0..count {
            anim.add_frame(Rect::new(
                origin.x + i as f32 * frame_size.x,
                origin.y,
                frame_size.x,
                frame_size.y,
            ));
        }
        anim
    }

    /// Builder: play once and hold the last frame
    pub fn once(mut self) -> Self {
        self.looping = false;
        self
    }

    /// Append a frame. A finished one-shot animation resumes toward the new
    /// last frame.
    pub fn add_frame(&mut self, frame: Rect) {
        self.frames.push(frame);
        self.finished = false;
    }

    /// Advance playback by `delta_time` seconds.
    ///
    /// Applies the new frame to `sprite` whenever the frame changes. Does
    /// nothing for an empty or finished animation.
    pub fn update(&mut self, delta_time: f32, sprite: &mut Sprite) {
        if self.frames.is_empty() || self.finished {
            return;
        }

        self.elapsed += delta_time;
        if self.elapsed < self.frame_time {
            return;
        }
        self.elapsed = 0.0;

        let last = self.frames.len() - 1;
        if self.current_frame < last {
            self.current_frame += 1;
        } else if self.looping {
            self.current_frame = 0;
        } else {
            self.finished = true;
            return;
        }
        if !self.looping && self.current_frame == last {
            self.finished = true;
        }
        sprite.set_source(self.frames[self.current_frame]);
    }

    /// Rewind to the first frame
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.current_frame = 0;
        self.finished = false;
    }

    /// Show the current frame on `sprite`
    pub fn apply(&self, sprite: &mut Sprite) {
        if let Some(rect) = self.current_rect() {
            sprite.set_source(rect);
        }
    }

    pub fn current_rect(&self) -> Option<Rect> {
        self.frames.get(self.current_frame).copied()
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame_time(&self) -> f32 {
        self.frame_time
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_TIME)
    }
}
