//! Audio playback
//!
//! Background music loops for the whole session; effects are fire-and-forget.
//! Volumes come from [`UserSettings`]; muting silences both without losing
//! the configured levels.

use macroquad::audio::{play_sound, set_sound_volume, PlaySoundParams, Sound};

use crate::config::UserSettings;

pub struct Audio {
    music_volume: f32,
    effects_volume: f32,
    muted: bool,
    /// Currently looping music, kept so volume changes reach it
    music: Option<Sound>,
}

impl Audio {
    pub fn new(settings: &UserSettings) -> Self {
        Self {
            music_volume: settings.music_volume,
            effects_volume: settings.effects_volume,
            muted: settings.muted,
            music: None,
        }
    }

    /// Volume music actually plays at
    pub fn music_level(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.music_volume
        }
    }

    /// Volume effects actually play at
    pub fn effects_level(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.effects_volume
        }
    }

    /// Start `sound` looping as background music
    pub fn start_music(&mut self, sound: &Sound) {
        play_sound(
            sound,
            PlaySoundParams {
                looped: true,
                volume: self.music_level(),
            },
        );
        self.music = Some(sound.clone());
    }

    /// Play a one-shot effect. Skipped entirely while muted.
    pub fn play_effect(&self, sound: &Sound) {
        if self.muted {
            return;
        }
        play_sound(
            sound,
            PlaySoundParams {
                looped: false,
                volume: self.effects_level(),
            },
        );
    }

    /// Flip mute. Returns the new state.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        if let Some(music) = &self.music {
            set_sound_volume(music, self.music_level());
        }
        log::info!("audio {}", if self.muted { "muted" } else { "unmuted" });
        self.muted
    }

    /// Write the current audio state back into `settings`
    pub fn store(&self, settings: &mut UserSettings) {
        settings.music_volume = self.music_volume;
        settings.effects_volume = self.effects_volume;
        settings.muted = self.muted;
    }
}
