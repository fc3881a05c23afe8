//! Fixed-step simulation clock.
//!
//! The force field always integrates with the same timestep, independent of
//! how often the host calls it. `Time` tracks how many steps were taken, the
//! simulated time they add up to, and whether stepping is paused.
//!
//! # Example
//!
//! ```ignore
//! use swarmfield::time::Time;
//!
//! let mut time = Time::new(0.1);
//!
//! // Once per host frame:
//! if let Some(dt) = time.advance() {
//!     // integrate with dt
//! }
//!
//! println!("Frame: {}", time.frame());
//! println!("Simulated: {:.2}s", time.elapsed());
//! ```

use crate::kernel::DEFAULT_TIMESTEP;

/// Step counter and fixed delta for the simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Time {
    /// Timestep handed to the kernel each step.
    fixed_delta: f32,
    /// Steps taken since the last reset.
    frame_count: u64,
    /// Sum of all deltas taken since the last reset.
    elapsed_secs: f64,
    /// Whether stepping is suspended.
    paused: bool,
}

impl Time {
    /// Create a clock that steps by `fixed_delta`.
    pub fn new(fixed_delta: f32) -> Self {
        Self {
            fixed_delta,
            frame_count: 0,
            elapsed_secs: 0.0,
            paused: false,
        }
    }

    /// Take one step. Returns the delta to integrate with, or `None` while
    /// paused.
    pub fn advance(&mut self) -> Option<f32> {
        if self.paused {
            return None;
        }
        self.frame_count += 1;
        self.elapsed_secs += self.fixed_delta as f64;
        Some(self.fixed_delta)
    }

    /// Timestep used for each step.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.fixed_delta
    }

    /// Steps taken since the last reset.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Simulated seconds since the last reset.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed_secs
    }

    /// Whether stepping is paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Suspend stepping. `advance` returns `None` until resumed.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume stepping.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Toggle pause state.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Change the timestep used from the next step on.
    pub fn set_fixed_delta(&mut self, delta: f32) {
        self.fixed_delta = delta;
    }

    /// Clear the frame counter and simulated time. Pause state and timestep
    /// are kept.
    pub fn reset(&mut self) {
        self.frame_count = 0;
        self.elapsed_secs = 0.0;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new(DEFAULT_TIMESTEP)
    }
}
