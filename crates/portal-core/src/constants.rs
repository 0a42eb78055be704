use glam::Vec3;

// Fixed constants of the scene's visual identity, shared by the engine
// and the web frontend. These are not tuning knobs: the blend formulas
// in frame.rs assume these exact values.

// Camera orbit. The two reference angles are the resting orbit
// positions of the gold and purple states.
pub const GOLD_ANGLE: f64 = 0.25;
pub const PURPLE_ANGLE: f64 = std::f64::consts::PI + 0.25;
pub const CAM_ORBIT_RADIUS: f64 = 4.2;
pub const CAM_HEIGHT: f64 = 2.0;

// Pointer parallax and scroll shaping applied to the orbit target
pub const POINTER_ORBIT_PARALLAX: f64 = 0.12;
pub const POINTER_HEIGHT_PARALLAX: f64 = 0.25;
pub const SCROLL_RADIUS_PULL: f64 = 1.2;
pub const SCROLL_HEIGHT_LIFT: f64 = 0.4;

// Frame clock
pub const DT_CLAMP_MAX: f64 = 0.1; // seconds; ceiling after slow frames or tab return
// Common period of every periodic rate in the scene (0.3/0.4/0.5/0.6/0.8),
// so trig on wrapped time equals trig on unwrapped time.
pub const TIME_WRAP_PERIOD: f64 = 20.0 * std::f64::consts::PI;

// Hold gesture (progress units per second)
pub const HOLD_GROW_RATE: f64 = 1.2;
pub const HOLD_SNAP_RATE: f64 = 2.5;
pub const HOLD_SNAP_SPLIT: f64 = 0.5;
pub const HOLD_REVERSE_ARM: f64 = 0.99;
pub const HOLD_REVERSE_RESET: f64 = 0.01;

// Nominal per-frame damping rates at the 60 fps reference (see damping.rs)
pub const ANGLE_RATE: f64 = 0.14;
pub const SCROLL_RATE: f64 = 0.10;
pub const CAM_XZ_RATE: f64 = 0.15;
pub const CAM_Y_RATE: f64 = 0.12;
pub const HOVER_RATE: f64 = 0.05;

// Scroll target accumulator (owned by input handling)
pub const SCROLL_WHEEL_SCALE: f64 = 0.0008;
pub const SCROLL_TARGET_MIN: f64 = -1.0;
pub const SCROLL_TARGET_MAX: f64 = 1.0;

// Portal group bob
pub const PORTAL_BASE_Y: f64 = 1.0;
pub const PORTAL_BOB_FREQ: f64 = 0.4;
pub const PORTAL_BOB_AMP: f64 = 0.015;

// Gold and purple palettes, blended by the hold progress p.
// EDGE_* doubles as the gold/purple key-light color.
pub const EDGE_GOLD: [f32; 3] = [0.78, 0.66, 0.30];
pub const EDGE_PURPLE: [f32; 3] = [0.61, 0.43, 1.0];
pub const PILLAR_GOLD: [f32; 3] = [1.0, 0.91, 0.77];
pub const PILLAR_PURPLE: [f32; 3] = [0.75, 0.60, 1.0];
pub const FOG_GOLD: [f32; 3] = [0.75, 0.83, 0.89];
pub const FOG_PURPLE: [f32; 3] = [0.68, 0.72, 0.88];
pub const HEMI_GOLD: [f32; 3] = [0.53, 0.73, 0.86];
pub const HEMI_PURPLE: [f32; 3] = [0.45, 0.55, 0.78];

// Edge material breathing
pub const EDGE_EMISSIVE_SCALE: f32 = 0.5;
pub const EDGE_EMISSIVE_BASE: f64 = 0.08;
pub const EDGE_EMISSIVE_AMP: f64 = 0.04;
pub const EDGE_EMISSIVE_FREQ: f64 = 0.8;

// Key point lights oscillate around a shared base and are weighted by
// (1 - p) / p rather than cross-faded; the asymmetry is intentional.
pub const KEY_LIGHT_BASE: f64 = 2.5;
pub const KEY_LIGHT_AMP: f64 = 0.4;
pub const GOLD_LIGHT_FREQ: f64 = 0.5;
pub const PURPLE_LIGHT_FREQ: f64 = 0.4;
pub const GROUND_GLOW_BASE: f64 = 0.8;
pub const GROUND_GLOW_AMP: f64 = 0.3;
pub const GROUND_GLOW_FREQ: f64 = 0.6;

// Drifting dust particles. Ascent speeds are per frame; the field is
// stepped once per rendered frame rather than scaled by dt.
pub const PARTICLE_COUNT: usize = 200;
pub const PARTICLE_CEILING: f32 = 8.0;
pub const PARTICLE_FLOOR: f32 = -1.0;
pub const PARTICLE_EXTENT: f32 = 16.0; // full width of the spawn square
pub const PARTICLE_SPEED_MIN: f32 = 0.002;
pub const PARTICLE_SPEED_SPAN: f32 = 0.006;
pub const PARTICLE_DRIFT_FREQ: f64 = 0.3;
pub const PARTICLE_DRIFT_AMP: f32 = 0.001;
pub const PARTICLE_OPACITY_BASE: f64 = 0.3;
pub const PARTICLE_OPACITY_AMP: f64 = 0.2;
pub const PARTICLE_OPACITY_FREQ: f64 = 0.4;

/// Point the camera always looks at (portal center height).
#[inline]
pub fn look_target() -> Vec3 {
    Vec3::new(0.0, 1.2, 0.0)
}
