//! Frame clock
//!
//! Turns wall-clock time between redraws into the delta handed to
//! `update(delta)`. Long gaps (first frame, window drag, debugger pause) are
//! clamped so the animation does not jump, and pausing yields zero deltas.

use std::time::Instant;

/// Clamp a raw frame delta to `[0, max_delta]`
///
/// Non-finite input maps to zero.
pub fn clamp_delta(raw: f32, max_delta: f32) -> f32 {
    if raw.is_finite() {
        raw.clamp(0.0, max_delta.max(0.0))
    } else {
        0.0
    }
}

/// Measures frame deltas
pub struct SimulationSystem {
    last_frame: Instant,
    max_delta: f32,
    paused: bool,
}

impl SimulationSystem {
    /// Create a clock with the given delta cap in seconds
    pub fn new(max_delta: f32) -> Self {
        Self {
            last_frame: Instant::now(),
            max_delta,
            paused: false,
        }
    }

    /// Time since the previous tick, clamped; zero while paused
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        if self.paused {
            0.0
        } else {
            clamp_delta(raw_dt, self.max_delta)
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Returns the new paused state
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        log::info!("Animation {}", if self.paused { "paused" } else { "resumed" });
        self.paused
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new(0.1)
    }
}
