//! Event System
//!
//! Objects don't talk to audio or other app services directly. During
//! update they queue events; after the frame is drawn the app drains the
//! queues and reacts (e.g. a jump event plays the jump sound).

use macroquad::prelude::Vec2;

use super::entity::ObjectId;

/// A queue for events of a single type.
/// Events are collected during the frame and drained once per frame.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for all game events.
#[derive(Debug, Default)]
pub struct Events {
    /// An object left the ground under its own power
    pub jumped: EventQueue<JumpEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpEvent {
    pub object: ObjectId,
    /// Where the jump started
    pub position: Vec2,
}
