//! Collision resolution
//!
//! Runs once per frame after every object has moved. The scene calls
//! whatever [`CollisionResolver`] it was given; the default does nothing.
//! [`FloorPlane`] is the one concrete resolver: an infinite horizontal floor
//! that moving objects land on.

use macroquad::prelude::vec2;

use super::entity::ObjectId;
use super::object::GameObject;

pub trait CollisionResolver {
    /// Resolve contacts between objects (and the world) after movement
    fn resolve(&mut self, objects: &mut [(ObjectId, GameObject)]);
}

/// No collision response at all
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCollision;

impl CollisionResolver for NoCollision {
    fn resolve(&mut self, _objects: &mut [(ObjectId, GameObject)]) {}
}

/// Infinite floor at a fixed world y (+y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorPlane {
    pub y: f32,
}

impl FloorPlane {
    pub fn new(y: f32) -> Self {
        Self { y }
    }
}

impl CollisionResolver for FloorPlane {
    fn resolve(&mut self, objects: &mut [(ObjectId, GameObject)]) {
        for (_, obj) in objects.iter_mut().filter(|(_, o)| o.is_active()) {
            let bottom = obj.bounds().bottom();
            let Some(kinematics) = obj.kinematics_mut() else { continue };

            if bottom < self.y {
                continue;
            }
            kinematics.grounded = true;
            if kinematics.velocity.y > 0.0 {
                kinematics.velocity.y = 0.0;
            }

            let overlap = bottom - self.y;
            if overlap > 0.0 {
                let position = obj.position();
                obj.set_position(position - vec2(0.0, overlap));
            }
        }
    }
}
