//! Kinematics
//!
//! Explicit Euler integration of velocity, acceleration and gravity into a
//! position, once per tick. Screen coordinates: +y points down, so gravity
//! is positive and a jump impulse is negative.

use macroquad::prelude::Vec2;

/// Default downward acceleration in pixels/s²
pub const DEFAULT_GRAVITY: f32 = 980.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Per-object gravity
    pub gravity: f32,
    /// Resting on something; gravity is not applied
    pub grounded: bool,
}

impl Kinematics {
    pub fn new() -> Self {
        Self::with_gravity(DEFAULT_GRAVITY)
    }

    pub fn with_gravity(gravity: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            gravity,
            grounded: false,
        }
    }

    /// Step `position` forward by `delta_time` seconds.
    ///
    /// Velocity is updated first and the new velocity moves the position.
    pub fn update(&mut self, position: &mut Vec2, delta_time: f32) {
        self.velocity += self.acceleration * delta_time;
        if !self.grounded {
            self.velocity.y += self.gravity * delta_time;
        }
        *position += self.velocity * delta_time;
    }
}

impl Default for Kinematics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airborne_step() {
        let mut k = Kinematics::with_gravity(10.0);
        k.velocity = Vec2::new(2.0, -4.0);
        k.acceleration = Vec2::new(1.0, 2.0);
        let mut position = Vec2::new(100.0, 100.0);

        k.update(&mut position, 0.5);

        // v = v0 + (a + (0, g)) * dt
        assert_eq!(k.velocity, Vec2::new(2.5, 2.0));
        // p = p0 + v_new * dt
        assert_eq!(position, Vec2::new(101.25, 101.0));
    }

    #[test]
    fn test_grounded_ignores_gravity() {
        let mut k = Kinematics::with_gravity(10.0);
        k.velocity = Vec2::new(2.0, -4.0);
        k.acceleration = Vec2::new(1.0, 2.0);
        k.grounded = true;
        let mut position = Vec2::new(100.0, 100.0);

        k.update(&mut position, 0.5);

        assert_eq!(k.velocity, Vec2::new(2.5, -3.0));
        assert_eq!(position, Vec2::new(101.25, 98.5));
    }

    #[test]
    fn test_default_gravity() {
        assert_eq!(Kinematics::default().gravity, DEFAULT_GRAVITY);
        assert!(!Kinematics::default().grounded);
    }
}
