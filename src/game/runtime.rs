//! Frame timing
//!
//! [`FrameClock`] measures the time between loop iterations; every object
//! updated in an iteration sees that same delta. [`FrameLimiter`] waits out
//! the rest of a frame to hold the configured frame rate.

/// Lifecycle of the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// Window open, frames being produced
    #[default]
    Running,
    /// Window closed. Terminal.
    Closed,
}

impl LoopState {
    pub fn is_running(&self) -> bool {
        *self == LoopState::Running
    }

    /// Move to `Closed`. Closing twice is harmless.
    pub fn close(&mut self) {
        *self = LoopState::Closed;
    }
}

/// Measures elapsed time between restarts
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: f64,
}

impl FrameClock {
    /// Start the clock at `now` (seconds)
    pub fn new(now: f64) -> Self {
        Self { last: now }
    }

    /// Seconds since the previous restart; the clock then starts over at `now`
    pub fn restart(&mut self, now: f64) -> f32 {
        let elapsed = (now - self.last).max(0.0);
        self.last = now;
        elapsed as f32
    }
}

/// Sleeps to cap the frame rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLimiter {
    /// Target seconds per frame (None = unlocked)
    target: Option<f64>,
}

impl FrameLimiter {
    /// `None` or `Some(0)` leaves the frame rate unlocked
    pub fn new(fps: Option<u32>) -> Self {
        let target = fps.filter(|&f| f > 0).map(|f| 1.0 / f as f64);
        Self { target }
    }

    pub fn target_frame_time(&self) -> Option<f64> {
        self.target
    }

    /// Seconds left in the frame that started at `frame_start`
    pub fn remaining(&self, frame_start: f64, now: f64) -> f64 {
        match self.target {
            Some(target) => (target - (now - frame_start)).max(0.0),
            None => 0.0,
        }
    }

    /// Block until the frame that started at `frame_start` has used its budget
    pub fn wait(&self, frame_start: f64) {
        use macroquad::prelude::get_time;

        let Some(target) = self.target else { return };

        // Native: use sleep for bulk, then spin-wait for precision
        #[cfg(not(target_arch = "wasm32"))]
        {
            let spin_margin = 0.002;
            while self.remaining(frame_start, get_time()) > spin_margin {
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
        }
        // WASM: the browser paces frames; only spin the last stretch
        while get_time() - frame_start < target {
            std::hint::spin_loop();
        }
    }
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::new(Some(60))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_restart() {
        let mut clock = FrameClock::new(10.0);
        assert_eq!(clock.restart(10.5), 0.5);
        assert_eq!(clock.restart(10.75), 0.25);
        // Time never runs backwards
        assert_eq!(clock.restart(10.0), 0.0);
    }

    #[test]
    fn test_limiter_remaining() {
        let limiter = FrameLimiter::new(Some(50));
        assert_eq!(limiter.target_frame_time(), Some(0.02));
        assert!((limiter.remaining(1.0, 1.005) - 0.015).abs() < 1e-9);
        assert_eq!(limiter.remaining(1.0, 1.5), 0.0);
    }

    #[test]
    fn test_unlocked_limiter() {
        assert_eq!(FrameLimiter::new(None).target_frame_time(), None);
        assert_eq!(FrameLimiter::new(Some(0)).target_frame_time(), None);
        assert_eq!(FrameLimiter::new(None).remaining(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_loop_state_is_terminal() {
        let mut state = LoopState::default();
        assert!(state.is_running());
        state.close();
        state.close();
        assert_eq!(state, LoopState::Closed);
    }
}
