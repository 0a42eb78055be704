//! Frame clock: clamped wall-clock deltas and wrapped shader time.

use crate::constants::{DT_CLAMP_MAX, TIME_WRAP_PERIOD};
use instant::Instant;

/// Measures the wall-clock delta between successive frames.
///
/// The delta is clamped to [`DT_CLAMP_MAX`] so a slow frame or a
/// restored tab never produces a destabilizing integration step. While
/// paused (document hidden) `tick` reports zero, and the gap spent
/// hidden is discarded on resume rather than reported as one huge
/// delta.
pub struct FrameClock {
    last: Option<Instant>,
    paused: bool,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: None,
            paused: false,
        }
    }

    /// Clamped seconds since the previous tick. The first tick after
    /// construction or resume yields 0.
    pub fn tick(&mut self) -> f64 {
        if self.paused {
            return 0.0;
        }
        let now = Instant::now();
        let dt = match self.last {
            Some(prev) => now.duration_since(prev).as_secs_f64(),
            None => 0.0,
        };
        self.last = Some(now);
        clamp_dt(dt)
    }

    /// Freeze the clock (visibility lost). No simulation time passes
    /// until `resume`.
    pub fn pause(&mut self) {
        self.paused = true;
        self.last = None;
        log::debug!("frame clock paused");
    }

    pub fn resume(&mut self) {
        self.paused = false;
        self.last = None;
        log::debug!("frame clock resumed");
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a raw frame delta into `[0, DT_CLAMP_MAX]`.
#[inline]
pub fn clamp_dt(dt: f64) -> f64 {
    dt.clamp(0.0, DT_CLAMP_MAX)
}

/// Elapsed time folded into `[0, TIME_WRAP_PERIOD)`.
///
/// The period is a common period of every oscillation in the scene, so
/// periodic math sees no seam; the fold only keeps shader floats small
/// during very long sessions.
#[inline]
pub fn wrap_time(t: f64) -> f64 {
    t.rem_euclid(TIME_WRAP_PERIOD)
}
