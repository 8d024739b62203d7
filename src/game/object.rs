//! Game Objects
//!
//! Every object has the same body: a position, a sprite, an activity flag
//! and a named set of animations, one of which may be current. What an
//! object *does* each tick depends on its [`ObjectKind`], a closed set of
//! variants dispatched from the single [`GameObject::update`] entry point.
//!
//! The current animation is stored by name and always refers to an entry
//! of the object's own animation map; switching never moves an animation
//! out of the map.

use std::collections::HashMap;

use macroquad::prelude::{Rect, Vec2};

use super::animation::Animation;
use super::entity::ObjectId;
use super::event::Events;
use super::kinematics::Kinematics;
use super::player::Player;
use super::renderer::Surface;
use super::sprite::Sprite;
use crate::input::InputSource;

/// What an object is given for one tick
pub struct FrameContext<'a> {
    /// The object being updated
    pub id: ObjectId,
    pub input: &'a dyn InputSource,
    pub events: &'a mut Events,
}

/// Behaviour variants
#[derive(Debug, Clone)]
pub enum ObjectKind {
    /// Input-driven character with kinematics
    Player(Player),
    /// Static decoration that only plays its animation
    Scenery,
}

#[derive(Debug, Clone)]
pub struct GameObject {
    kind: ObjectKind,
    sprite: Sprite,
    position: Vec2,
    active: bool,
    animations: HashMap<String, Animation>,
    /// Key into `animations`
    current: Option<String>,
}

impl GameObject {
    pub fn new(kind: ObjectKind, sprite: Sprite) -> Self {
        let position = sprite.position();
        Self {
            kind,
            sprite,
            position,
            active: true,
            animations: HashMap::new(),
            current: None,
        }
    }

    pub fn player(player: Player, sprite: Sprite) -> Self {
        Self::new(ObjectKind::Player(player), sprite)
    }

    pub fn scenery(sprite: Sprite) -> Self {
        Self::new(ObjectKind::Scenery, sprite)
    }

    /// Advance this object by one tick
    pub fn update(&mut self, delta_time: f32, ctx: &mut FrameContext<'_>) {
        let wanted = match &mut self.kind {
            ObjectKind::Player(player) => {
                Some(player.step(delta_time, &mut self.position, &mut self.sprite, ctx))
            }
            ObjectKind::Scenery => None,
        };

        if let Some(name) = wanted {
            self.play_animation(name);
        }
        self.advance_animation(delta_time);
    }

    /// Draw the sprite if the object is active
    pub fn render(&self, surface: &mut dyn Surface) {
        if self.active {
            surface.draw_sprite(&self.sprite);
        }
    }

    pub fn bounds(&self) -> Rect {
        self.sprite.bounds()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.sprite.set_position(position);
    }

    pub fn kind(&self) -> &ObjectKind {
        &self.kind
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    /// Kinematic state, for kinds that move
    pub fn kinematics(&self) -> Option<&Kinematics> {
        match &self.kind {
            ObjectKind::Player(player) => Some(&player.kinematics),
            ObjectKind::Scenery => None,
        }
    }

    pub fn kinematics_mut(&mut self) -> Option<&mut Kinematics> {
        match &mut self.kind {
            ObjectKind::Player(player) => Some(&mut player.kinematics),
            ObjectKind::Scenery => None,
        }
    }

    // =========================================================================
    // Animations
    // =========================================================================

    /// Register an animation, replacing any with the same name
    pub fn add_animation(&mut self, name: impl Into<String>, animation: Animation) {
        self.animations.insert(name.into(), animation);
    }

    /// Make `name` the current animation.
    ///
    /// Switching rewinds the new animation and shows its first frame.
    /// Playing the animation that is already current changes nothing, and an
    /// unknown name leaves the current animation as it was.
    pub fn play_animation(&mut self, name: &str) {
        if self.current.as_deref() == Some(name) {
            return;
        }
        let Some(animation) = self.animations.get_mut(name) else {
            log::trace!("no animation named '{}'", name);
            return;
        };
        animation.reset();
        animation.apply(&mut self.sprite);
        self.current = Some(name.to_string());
    }

    pub fn current_animation_name(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current_animation(&self) -> Option<&Animation> {
        self.current.as_deref().and_then(|name| self.animations.get(name))
    }

    pub fn animation(&self, name: &str) -> Option<&Animation> {
        self.animations.get(name)
    }

    fn advance_animation(&mut self, delta_time: f32) {
        let Some(name) = self.current.as_deref() else { return };
        if let Some(animation) = self.animations.get_mut(name) {
            animation.update(delta_time, &mut self.sprite);
        }
    }
}
