//! Shared scene state, mutated in place once per frame.
//!
//! One instance lives for the whole session and is passed by `&mut`
//! into the frame engine and the input collaborators. Field ownership
//! is by convention, not by type: input handlers write `pointer` and
//! `holding` (plus the external scroll-target accumulator), the hover
//! pick writes `hover_portal`, the hold state machine owns `reversing`
//! and `hold_progress`, and the frame engine owns the rest.

use crate::constants::GOLD_ANGLE;

/// Raw and normalized pointer position.
///
/// `x`/`y` are CSS pixels (used by the DOM cursor sink); `nx`/`ny` are
/// in \[-1, 1\] with `ny` pointing up.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
    pub nx: f64,
    pub ny: f64,
}

#[derive(Clone, Debug)]
pub struct SceneState {
    pub pointer: Pointer,
    /// Damped scroll offset; chases the input-owned scroll target.
    pub scroll: f64,
    /// Accumulated simulation time in seconds. Never decreases; shader
    /// writes use `clock::wrap_time` of this value.
    pub time: f64,
    /// True while the hold button is pressed.
    pub holding: bool,
    /// True once a hold has completed and further holding walks the
    /// progress back down. Owned by `hold::advance_hold`.
    pub reversing: bool,
    /// Hold-gesture progress in \[0, 1\]; the single blend factor `p`
    /// every gold/purple morph derives from.
    pub hold_progress: f64,
    /// Damped camera orbit angle.
    pub current_angle: f64,
    /// Orbit angle the camera is heading toward, derived from `hold_progress`.
    pub target_angle: f64,
    /// True while the pointer ray hits the portal.
    pub hover_portal: bool,
}

impl SceneState {
    pub fn new() -> Self {
        Self {
            pointer: Pointer::default(),
            scroll: 0.0,
            time: 0.0,
            holding: false,
            reversing: false,
            hold_progress: 0.0,
            current_angle: GOLD_ANGLE,
            target_angle: GOLD_ANGLE,
            hover_portal: false,
        }
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}
