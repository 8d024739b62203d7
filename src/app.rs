//! Application state and the main loop
//!
//! The app owns everything that lives for the whole session: config, user
//! settings, the resource cache, the scene, input and audio. One loop
//! iteration is one frame:
//!
//! 1. poll input; a window close request ends the loop
//! 2. sample the frame delta
//! 3. update the scene (objects, camera, collisions)
//! 4. render and draw the debug overlay
//! 5. play sounds for events queued during the update
//! 6. wait out the rest of the frame, present

use std::path::PathBuf;

use macroquad::prelude::{
    get_fps, get_time, is_key_pressed, is_quit_requested, next_frame, prevent_quit, vec2, KeyCode,
    Vec2,
};

use crate::asset::{AssetError, Resources};
use crate::audio::Audio;
use crate::config::{GameConfig, PlayerSettings, UserSettings};
use crate::debug_overlay::{DebugOverlay, DebugStats};
use crate::game::player::{IDLE, RUN};
use crate::game::{
    FloorPlane, FrameClock, FrameLimiter, GameObject, LoopState, MacroquadSurface, ObjectId,
    Player, Scene, Sprite,
};
use crate::input::InputState;

pub struct App {
    config: GameConfig,
    settings: UserSettings,
    /// Where settings are saved on exit (None: not persisted)
    settings_path: Option<PathBuf>,
    resources: Resources,
    scene: Scene,
    input: InputState,
    audio: Audio,
    overlay: DebugOverlay,
    state: LoopState,
    clock: FrameClock,
    limiter: FrameLimiter,
    player: ObjectId,
}

impl App {
    /// Load assets and build the starting scene.
    ///
    /// Fails only if an asset fails to load under `LoadPolicy::Abort`.
    pub async fn new(config: GameConfig) -> Result<Self, AssetError> {
        let settings_path = UserSettings::default_path();
        let settings = settings_path
            .as_ref()
            .map(|path| UserSettings::load_or_default(path))
            .unwrap_or_default();

        let mut resources = Resources::new();
        let report = resources.load_manifest(&config.assets, config.asset_policy).await?;
        if !report.is_clean() {
            log::warn!("{} assets missing, continuing without them", report.failed.len());
        }

        let view_size = vec2(config.window.width as f32, config.window.height as f32);
        let mut scene = Scene::new(view_size);
        if let Some(y) = config.floor_y {
            scene = scene.with_collisions(FloorPlane::new(y));
        }
        let player = scene.spawn(build_player(&config.player, &resources));

        if let Some(name) = config.jump_sound.as_deref() {
            if !resources.sounds.contains(name) {
                log::warn!("jump sound '{}' not loaded", name);
            }
        }

        let mut audio = Audio::new(&settings);
        if let Some(name) = config.music.as_deref() {
            match resources.sounds.get(name) {
                Some(music) => audio.start_music(music),
                None => log::warn!("music '{}' not loaded", name),
            }
        }

        let input = InputState::new();
        if input.has_gamepad() {
            log::info!("gamepad connected");
        }

        Ok(Self {
            overlay: DebugOverlay::new(settings.show_debug_overlay),
            limiter: FrameLimiter::new(config.window.framerate_limit),
            clock: FrameClock::new(get_time()),
            state: LoopState::Running,
            input,
            config,
            settings,
            settings_path,
            resources,
            scene,
            audio,
            player,
        })
    }

    /// Run until the window is closed
    pub async fn run(mut self) {
        prevent_quit();
        log::info!("entering main loop");

        while self.state.is_running() {
            let frame_start = get_time();

            self.handle_input();
            if !self.state.is_running() {
                break;
            }

            let delta_time = self.clock.restart(get_time());
            self.scene.update(delta_time, &self.input);
            self.render(delta_time);
            self.play_event_sounds();

            self.limiter.wait(frame_start);
            next_frame().await;
        }

        self.shutdown();
    }

    fn handle_input(&mut self) {
        self.input.poll();
        let requests = FrameRequests::sample();
        apply_requests(requests, &mut self.state, &mut self.audio, &mut self.overlay);
    }

    fn render(&self, delta_time: f32) {
        let mut surface = MacroquadSurface;
        self.scene.render(&mut surface, self.config.window.clear_color());

        if self.overlay.visible {
            let stats = DebugStats::gather(&self.scene, &self.resources, get_fps(), delta_time);
            self.overlay.draw(&stats, self.resources.fonts.get("debug"));
        }
    }

    fn play_event_sounds(&mut self) {
        let sound = self
            .config
            .jump_sound
            .as_deref()
            .and_then(|name| self.resources.sounds.get(name));

        for event in self.scene.events.jumped.drain() {
            log::trace!("object {} jumped at {:?}", event.object, event.position);
            if let Some(sound) = sound {
                self.audio.play_effect(sound);
            }
        }
    }

    fn shutdown(&mut self) {
        if let Some(player) = self.scene.get(self.player) {
            log::debug!("player ended at {:?}", player.position());
        }

        self.settings.show_debug_overlay = self.overlay.visible;
        self.audio.store(&mut self.settings);
        if let Some(path) = &self.settings_path {
            match self.settings.save(path) {
                Ok(()) => log::info!("saved settings to {}", path.display()),
                Err(e) => log::warn!("could not save settings to {}: {}", path.display(), e),
            }
        }
        log::info!("goodbye");
    }
}

/// Window and hotkey requests sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameRequests {
    /// The window's close button was pressed
    pub window_closed: bool,
    /// M
    pub toggle_mute: bool,
    /// F3
    pub toggle_overlay: bool,
}

impl FrameRequests {
    fn sample() -> Self {
        Self {
            window_closed: is_quit_requested(),
            toggle_mute: is_key_pressed(KeyCode::M),
            toggle_overlay: is_key_pressed(KeyCode::F3),
        }
    }
}

/// React to this frame's requests. Closing the window is the only way the
/// loop leaves `Running`.
pub fn apply_requests(
    requests: FrameRequests,
    state: &mut LoopState,
    audio: &mut Audio,
    overlay: &mut DebugOverlay,
) {
    if requests.window_closed {
        log::info!("window closed");
        state.close();
        return;
    }
    if requests.toggle_mute {
        audio.toggle_mute();
    }
    if requests.toggle_overlay {
        overlay.toggle();
    }
}

/// Build the player object from config, using whatever of its texture loaded
pub fn build_player(settings: &PlayerSettings, resources: &Resources) -> GameObject {
    let sprite = match resources.textures.get(&settings.texture) {
        Some(texture) => Sprite::with_texture(texture.clone(), texture.size()),
        None => {
            log::warn!("player texture '{}' not loaded, player will be invisible", settings.texture);
            Sprite::empty()
        }
    };

    let mut player = GameObject::player(Player::new(settings), sprite);
    player.add_animation(IDLE, settings.idle.build());
    player.add_animation(RUN, settings.run.build());
    player.play_animation(IDLE);
    player.set_position(Vec2::from(settings.spawn));
    player
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_player_without_texture() {
        let settings = PlayerSettings {
            spawn: (64.0, 128.0),
            ..Default::default()
        };
        let player = build_player(&settings, &Resources::new());

        assert!(player.sprite().texture().is_none());
        assert_eq!(player.position(), vec2(64.0, 128.0));
        assert_eq!(player.sprite().position(), vec2(64.0, 128.0));
        assert_eq!(player.current_animation_name(), Some(IDLE));
        assert_eq!(player.animation(RUN).unwrap().frame_count(), 4);
        // First idle frame is already on the sprite
        assert_eq!(player.bounds().size(), vec2(32.0, 32.0));
    }

    #[test]
    fn test_hotkeys_never_close_the_loop() {
        let mut state = LoopState::Running;
        let mut audio = Audio::new(&UserSettings::default());
        let mut overlay = DebugOverlay::new(false);

        let hotkeys = FrameRequests {
            toggle_mute: true,
            toggle_overlay: true,
            ..Default::default()
        };
        apply_requests(hotkeys, &mut state, &mut audio, &mut overlay);
        assert!(state.is_running());
        assert_eq!(audio.music_level(), 0.0);
        assert!(overlay.visible);

        apply_requests(FrameRequests::default(), &mut state, &mut audio, &mut overlay);
        assert!(state.is_running());
    }

    #[test]
    fn test_window_close_ends_the_loop() {
        let mut state = LoopState::Running;
        let mut audio = Audio::new(&UserSettings::default());
        let mut overlay = DebugOverlay::new(false);

        let closed = FrameRequests {
            window_closed: true,
            toggle_overlay: true,
            ..Default::default()
        };
        apply_requests(closed, &mut state, &mut audio, &mut overlay);
        assert_eq!(state, LoopState::Closed);
        // Nothing else is handled on the closing frame
        assert!(!overlay.visible);
    }
}
