//! Input handling with gamepad support
//!
//! Provides an action-based input system that works with both keyboard and
//! gamepad controllers. Input is polled: the app samples devices once per
//! frame and objects query held actions through [`InputSource`].
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: Keyboard only

mod actions;
mod gamepad;
mod state;

pub use actions::{Action, InputSource};
pub use state::InputState;

#[cfg(test)]
pub use state::ScriptedInput;
