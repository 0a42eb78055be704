//! Per-frame update: one pass that advances the hold gesture, damps
//! every lagging quantity, and fans the blend factor out to all render
//! parameters.
//!
//! Each step only depends on values computed earlier in the same
//! frame; the order below is load-bearing (angle before camera, hold
//! before everything color).

use crate::clock::{clamp_dt, wrap_time};
use crate::constants::*;
use crate::damping::{damp, lerp_rgb, DampingBases};
use crate::hold::advance_hold;
use crate::sinks::SceneSinks;
use crate::state::SceneState;
use glam::DVec3;

pub struct FrameEngine {
    bases: DampingBases,
}

impl FrameEngine {
    pub fn new() -> Self {
        Self {
            bases: DampingBases::default(),
        }
    }

    /// Advance the scene by `dt` seconds (clamped), reading input from
    /// `state` and writing this frame's render parameters into `sinks`.
    ///
    /// `scroll_target` is the input-owned accumulator value; it is
    /// clamped again here so a misbehaving collaborator cannot push the
    /// camera out of its envelope.
    pub fn advance(&self, state: &mut SceneState, sinks: &mut SceneSinks, scroll_target: f64, dt: f64) {
        let dt = clamp_dt(dt);
        state.time += dt;
        let tw = wrap_time(state.time);

        advance_hold(state, dt);
        let p = state.hold_progress;
        let pf = p as f32;

        state.target_angle = GOLD_ANGLE + p * (PURPLE_ANGLE - GOLD_ANGLE);
        state.current_angle = damp(state.current_angle, state.target_angle, self.bases.angle, dt);

        let scroll_target = scroll_target.clamp(SCROLL_TARGET_MIN, SCROLL_TARGET_MAX);
        state.scroll = damp(state.scroll, scroll_target, self.bases.scroll, dt);

        sinks.portal_frame.y = (PORTAL_BASE_Y + (tw * PORTAL_BOB_FREQ).sin() * PORTAL_BOB_AMP) as f32;

        // Two-stage lag: the orbit angle chased its target above; the
        // eye now chases the angle-derived position, per axis.
        let orbit_angle = state.current_angle + state.pointer.nx * POINTER_ORBIT_PARALLAX;
        let orbit_radius = CAM_ORBIT_RADIUS - state.scroll * SCROLL_RADIUS_PULL;
        let cam_y =
            CAM_HEIGHT + state.scroll * SCROLL_HEIGHT_LIFT + state.pointer.ny * POINTER_HEIGHT_PARALLAX;
        let eye_target = DVec3::new(
            orbit_angle.sin() * orbit_radius,
            cam_y,
            orbit_angle.cos() * orbit_radius,
        );
        let eye = &mut sinks.camera.eye;
        eye.x = damp(eye.x, eye_target.x, self.bases.cam_xz, dt);
        eye.z = damp(eye.z, eye_target.z, self.bases.cam_xz, dt);
        eye.y = damp(eye.y, eye_target.y, self.bases.cam_y, dt);

        let hover_target = if state.hover_portal { 1.0 } else { 0.0 };
        let mouse = [state.pointer.nx as f32, state.pointer.ny as f32];
        for u in [&mut sinks.portal_inner, &mut sinks.portal_outer] {
            u.u_time = tw as f32;
            u.u_mouse = mouse;
            u.u_hover = damp(u.u_hover as f64, hover_target, self.bases.hover, dt) as f32;
        }

        let edge = lerp_rgb(EDGE_GOLD, EDGE_PURPLE, pf);
        sinks.edge.color = edge;
        sinks.edge.emissive = [
            edge[0] * EDGE_EMISSIVE_SCALE,
            edge[1] * EDGE_EMISSIVE_SCALE,
            edge[2] * EDGE_EMISSIVE_SCALE,
        ];
        sinks.edge.emissive_intensity =
            (EDGE_EMISSIVE_BASE + (tw * EDGE_EMISSIVE_FREQ).sin() * EDGE_EMISSIVE_AMP) as f32;

        // Breathing key lights, weighted by (1 - p) / p rather than
        // cross-faded: the fading side keeps its own oscillation phase.
        sinks.lights.gold.intensity =
            ((KEY_LIGHT_BASE + (tw * GOLD_LIGHT_FREQ).sin() * KEY_LIGHT_AMP) * (1.0 - p)) as f32;
        sinks.lights.purple.intensity =
            ((KEY_LIGHT_BASE + (tw * PURPLE_LIGHT_FREQ).cos() * KEY_LIGHT_AMP) * p) as f32;

        sinks.lights.ground_glow.color = lerp_rgb(EDGE_GOLD, EDGE_PURPLE, pf);
        sinks.lights.ground_glow.intensity =
            (GROUND_GLOW_BASE + (tw * GROUND_GLOW_FREQ).sin() * GROUND_GLOW_AMP) as f32;

        let pillar = lerp_rgb(PILLAR_GOLD, PILLAR_PURPLE, pf);
        sinks.lights.pillar_1.color = pillar;
        sinks.lights.pillar_2.color = pillar;
        sinks.lights.hemisphere.color = lerp_rgb(HEMI_GOLD, HEMI_PURPLE, pf);
        sinks.fog.color = lerp_rgb(FOG_GOLD, FOG_PURPLE, pf);

        for sky in [&mut sinks.sky, &mut sinks.cloud_sea, &mut sinks.cloud_sea_far] {
            sky.u_time = tw as f32;
            sky.u_hold = pf;
        }

        sinks.particles.step(tw);
        sinks.particles.opacity =
            (PARTICLE_OPACITY_BASE + PARTICLE_OPACITY_AMP * (tw * PARTICLE_OPACITY_FREQ).sin()) as f32;
    }
}

impl Default for FrameEngine {
    fn default() -> Self {
        Self::new()
    }
}
