//! Game action definitions
//!
//! Controls for a side-scrolling platformer.

/// All actions the game reads from input
///
/// Keyboard / gamepad (Xbox layout):
/// - Left / A / D-pad left / left stick left = MoveLeft
/// - Right / D / D-pad right / left stick right = MoveRight
/// - Space / Up / W / A button = Jump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
}

/// Anything the game can poll for held actions
///
/// Objects read input through this trait once per tick; nothing is pushed.
pub trait InputSource {
    /// Is the action currently held down?
    fn action_down(&self, action: Action) -> bool;
}
