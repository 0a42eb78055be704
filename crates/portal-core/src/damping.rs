//! Frame-rate-independent interpolation primitives.
//!
//! The scene was tuned against per-frame factors at 60 fps (move 14%
//! of the remaining distance to the target angle each frame, and so
//! on). `decay_base` rebases such a factor into a per-second decay
//! constant, and `damp` applies it for an arbitrary `dt`: the fraction
//! moved over any fixed wall-clock interval is then the same whatever
//! the frame rate, and at exactly dt = 1/60 it reproduces the nominal
//! per-frame factor.

use crate::constants::{ANGLE_RATE, CAM_XZ_RATE, CAM_Y_RATE, HOVER_RATE, SCROLL_RATE};

/// Per-second decay base for a nominal per-frame rate at 60 fps.
#[inline]
pub fn decay_base(rate_per_frame: f64) -> f64 {
    (1.0 - rate_per_frame).powi(60)
}

/// One exponential-damping step of `value` toward `target`.
#[inline]
pub fn damp(value: f64, target: f64, base: f64, dt: f64) -> f64 {
    value + (target - value) * (1.0 - base.powf(dt))
}

#[inline]
pub fn lerp(a: f64, b: f64, p: f64) -> f64 {
    a + p * (b - a)
}

#[inline]
pub fn lerp_rgb(a: [f32; 3], b: [f32; 3], p: f32) -> [f32; 3] {
    [
        a[0] + p * (b[0] - a[0]),
        a[1] + p * (b[1] - a[1]),
        a[2] + p * (b[2] - a[2]),
    ]
}

/// Precomputed decay bases for every damped quantity in the scene.
#[derive(Clone, Copy, Debug)]
pub struct DampingBases {
    pub angle: f64,
    pub scroll: f64,
    pub cam_xz: f64,
    pub cam_y: f64,
    pub hover: f64,
}

impl Default for DampingBases {
    fn default() -> Self {
        Self {
            angle: decay_base(ANGLE_RATE),
            scroll: decay_base(SCROLL_RATE),
            cam_xz: decay_base(CAM_XZ_RATE),
            cam_y: decay_base(CAM_Y_RATE),
            hover: decay_base(HOVER_RATE),
        }
    }
}
