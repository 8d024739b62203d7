//! Game Foundation Module
//!
//! A small object-based core for 2D platformers:
//! - Entity: generational ids so the scene can hand out safe references
//! - Sprite/Animation: what an object looks like and how that changes
//! - Kinematics: per-object Euler integration
//! - GameObject: one body type, a closed set of behaviours
//! - Scene: ordered object collection, camera and the per-frame passes
//! - Event: things objects report back to the app (sounds etc.)
//!
//! Nothing in here touches the window directly. Drawing goes through
//! [`renderer::Surface`] and input through [`crate::input::InputSource`].

// Scaffold API: the bundled demo only exercises part of it
#![allow(dead_code)]

pub mod animation;
pub mod collision;
pub mod entity;
pub mod event;
pub mod kinematics;
pub mod object;
pub mod player;
pub mod renderer;
pub mod runtime;
pub mod scene;
pub mod sprite;

// Re-export main types
pub use collision::FloorPlane;
pub use entity::ObjectId;
pub use object::GameObject;
pub use player::Player;
pub use renderer::MacroquadSurface;
pub use runtime::{FrameClock, FrameLimiter, LoopState};
pub use scene::Scene;
pub use sprite::Sprite;
