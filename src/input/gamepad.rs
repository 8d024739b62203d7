//! Gamepad support
//!
//! Native: Uses gilrs crate for cross-platform gamepad input
//! WASM: No gamepad backend; every query reports nothing pressed

/// Sticks inside this radius read as centered
const STICK_DEADZONE: f32 = 0.25;

/// Digital view of the first connected gamepad
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PadButtons {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl PadButtons {
    /// Fold stick x into left/right, ignoring the deadzone
    fn with_stick_x(mut self, x: f32) -> Self {
        if x <= -STICK_DEADZONE {
            self.left = true;
        } else if x >= STICK_DEADZONE {
            self.right = true;
        }
        self
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use super::PadButtons;
    use gilrs::{Axis, Button, Gilrs};

    pub struct Gamepad {
        /// None when the platform backend failed to start
        gilrs: Option<Gilrs>,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(g) => Some(g),
                Err(e) => {
                    log::warn!("gamepad support disabled: {}", e);
                    None
                }
            };
            Self { gilrs }
        }

        pub fn poll(&mut self) {
            let Some(gilrs) = self.gilrs.as_mut() else { return };
            // Drain events so gilrs updates its cached button state
            while let Some(event) = gilrs.next_event() {
                log::trace!("gamepad event: {:?}", event.event);
            }
        }

        pub fn has_gamepad(&self) -> bool {
            self.gilrs
                .as_ref()
                .map(|g| g.gamepads().next().is_some())
                .unwrap_or(false)
        }

        pub fn buttons(&self) -> PadButtons {
            let Some(gilrs) = self.gilrs.as_ref() else { return PadButtons::default() };
            let Some((_, gp)) = gilrs.gamepads().next() else { return PadButtons::default() };

            PadButtons {
                left: gp.is_pressed(Button::DPadLeft),
                right: gp.is_pressed(Button::DPadRight),
                jump: gp.is_pressed(Button::South),
            }
            .with_stick_x(gp.value(Axis::LeftStickX))
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::PadButtons;

    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Self {
            Self
        }

        pub fn poll(&mut self) {}

        pub fn has_gamepad(&self) -> bool {
            false
        }

        pub fn buttons(&self) -> PadButtons {
            PadButtons::default()
        }
    }
}

pub use platform::Gamepad;

impl Default for Gamepad {
    fn default() -> Self {
        Self::new()
    }
}
