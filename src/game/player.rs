//! Player control
//!
//! Reads polled input each tick, turns it into velocity and facing, runs
//! kinematics, and tells the owning object whether to show "run" or "idle".

use macroquad::prelude::Vec2;

use super::event::JumpEvent;
use super::kinematics::Kinematics;
use super::object::FrameContext;
use super::sprite::Sprite;
use crate::config::PlayerSettings;
use crate::input::Action;

/// Animation shown while standing still
pub const IDLE: &str = "idle";
/// Animation shown while a direction is held
pub const RUN: &str = "run";

#[derive(Debug, Clone)]
pub struct Player {
    /// Horizontal speed while a direction is held
    pub speed: f32,
    /// Vertical velocity set when a jump starts (negative is up)
    pub jump_impulse: f32,
    pub kinematics: Kinematics,
    facing_right: bool,
}

impl Player {
    pub fn new(settings: &PlayerSettings) -> Self {
        Self {
            speed: settings.speed,
            jump_impulse: settings.jump_impulse,
            kinematics: Kinematics::with_gravity(settings.gravity),
            facing_right: true,
        }
    }

    pub fn facing_right(&self) -> bool {
        self.facing_right
    }

    /// One tick of player control and movement.
    ///
    /// Returns the name of the animation that should be current.
    pub(super) fn step(
        &mut self,
        delta_time: f32,
        position: &mut Vec2,
        sprite: &mut Sprite,
        ctx: &mut FrameContext<'_>,
    ) -> &'static str {
        let start = *position;
        let (moving, jumped) = self.handle_input(sprite, ctx);
        self.kinematics.update(position, delta_time);
        sprite.set_position(*position);

        // Only report a jump that is still heading up after integration
        if jumped && self.kinematics.velocity.y < 0.0 {
            ctx.events.jumped.send(JumpEvent {
                object: ctx.id,
                position: start,
            });
        }

        if moving {
            RUN
        } else {
            IDLE
        }
    }

    /// Apply held actions. Returns (direction held, jump started).
    fn handle_input(&mut self, sprite: &mut Sprite, ctx: &FrameContext<'_>) -> (bool, bool) {
        let moving = if ctx.input.action_down(Action::MoveRight) {
            self.kinematics.velocity.x = self.speed;
            self.face(true, sprite);
            true
        } else if ctx.input.action_down(Action::MoveLeft) {
            self.kinematics.velocity.x = -self.speed;
            self.face(false, sprite);
            true
        } else {
            self.kinematics.velocity.x = 0.0;
            false
        };

        let jumped = ctx.input.action_down(Action::Jump) && self.kinematics.grounded;
        if jumped {
            self.kinematics.velocity.y = self.jump_impulse;
            self.kinematics.grounded = false;
        }

        (moving, jumped)
    }

    /// Turn to face a direction, mirroring the sprite only on a change
    fn face(&mut self, right: bool, sprite: &mut Sprite) {
        if self.facing_right != right {
            sprite.flip_x();
            self.facing_right = right;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entity::ObjectId;
    use crate::game::event::Events;
    use crate::input::ScriptedInput;
    use macroquad::prelude::Rect;

    struct Rig {
        player: Player,
        position: Vec2,
        sprite: Sprite,
        events: Events,
    }

    impl Rig {
        fn new() -> Self {
            let mut sprite = Sprite::empty();
            sprite.set_source(Rect::new(0.0, 0.0, 32.0, 32.0));
            Self {
                player: Player::new(&PlayerSettings::default()),
                position: Vec2::ZERO,
                sprite,
                events: Events::new(),
            }
        }

        fn step(&mut self, input: &ScriptedInput, dt: f32) -> &'static str {
            let mut ctx = FrameContext {
                id: ObjectId::new(0, 0),
                input,
                events: &mut self.events,
            };
            self.player.step(dt, &mut self.position, &mut self.sprite, &mut ctx)
        }

        fn ground(&mut self) {
            self.player.kinematics.grounded = true;
            self.player.kinematics.velocity.y = 0.0;
        }
    }

    #[test]
    fn test_animation_choice() {
        let mut rig = Rig::new();
        rig.ground();
        assert_eq!(rig.step(&ScriptedInput::new(), 0.1), IDLE);
        assert_eq!(rig.step(&ScriptedInput::holding(&[Action::MoveLeft]), 0.1), RUN);
        assert_eq!(rig.step(&ScriptedInput::holding(&[Action::Jump]), 0.1), IDLE);
    }

    #[test]
    fn test_right_wins_over_left() {
        let mut rig = Rig::new();
        rig.step(&ScriptedInput::holding(&[Action::MoveLeft, Action::MoveRight]), 0.1);
        assert_eq!(rig.player.kinematics.velocity.x, 200.0);
        assert!(rig.player.facing_right());
    }

    #[test]
    fn test_flip_once_per_direction_change() {
        let mut rig = Rig::new();
        let mut input = ScriptedInput::holding(&[Action::MoveRight]);
        let mut flips = 0;
        let mut flipped = rig.sprite.is_flipped_x();

        let mut run = |rig: &mut Rig, input: &ScriptedInput, frames: usize| {
            for _ in 0..frames {
                rig.step(input, 1.0 / 60.0);
                let now = rig.sprite.is_flipped_x();
                if now != flipped {
                    flips += 1;
                    flipped = now;
                }
            }
            flips
        };

        assert_eq!(run(&mut rig, &input, 5), 0);

        input.release(Action::MoveRight);
        input.press(Action::MoveLeft);
        assert_eq!(run(&mut rig, &input, 5), 1);
        assert_eq!(rig.player.kinematics.velocity.x, -200.0);
        assert!(!rig.player.facing_right());

        input.release(Action::MoveLeft);
        assert_eq!(run(&mut rig, &input, 3), 1);

        input.press(Action::MoveRight);
        assert_eq!(run(&mut rig, &input, 1), 2);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut rig = Rig::new();
        let jump = ScriptedInput::holding(&[Action::Jump]);

        // Airborne: no jump
        rig.step(&jump, 0.01);
        assert!(rig.events.jumped.is_empty());
        assert!(rig.player.kinematics.velocity.y > 0.0);

        rig.ground();
        rig.position = Vec2::new(5.0, 100.0);
        rig.step(&jump, 0.01);

        let k = rig.player.kinematics;
        assert!(!k.grounded);
        // Impulse, then one step of gravity
        assert_eq!(k.velocity.y, -400.0 + 980.0 * 0.01);
        assert_eq!(rig.events.jumped.len(), 1);
        let event = rig.events.jumped.iter().next().unwrap();
        assert_eq!(event.position, Vec2::new(5.0, 100.0));

        // Still held, but no longer grounded
        rig.step(&jump, 0.01);
        assert_eq!(rig.events.jumped.len(), 1);
    }

    #[test]
    fn test_jump_cancelled_by_long_step_is_not_reported() {
        let mut rig = Rig::new();
        rig.ground();

        // -400 + 980 * 0.5 > 0: the step ends moving down
        rig.step(&ScriptedInput::holding(&[Action::Jump]), 0.5);

        assert!(rig.events.jumped.is_empty());
        assert!(rig.player.kinematics.velocity.y > 0.0);
    }
}
