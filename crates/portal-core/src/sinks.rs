//! Render-parameter sinks: the camera, lights, materials, fog, and
//! particle buffer the frame engine writes into each frame.
//!
//! These are plain data. The frontend owns how they reach the GPU or
//! the DOM; the engine only fills in the numbers. Each shader's
//! uniform set is closed and known, so uniforms are fixed-shape
//! structs rather than name-keyed maps.

use crate::constants::{
    CAM_HEIGHT, CAM_ORBIT_RADIUS, GOLD_ANGLE, PARTICLE_CEILING, PARTICLE_COUNT, PARTICLE_DRIFT_AMP,
    PARTICLE_DRIFT_FREQ, PARTICLE_EXTENT, PARTICLE_FLOOR, PARTICLE_SPEED_MIN, PARTICLE_SPEED_SPAN,
    PORTAL_BASE_Y,
};
use crate::constants::{
    EDGE_GOLD, EDGE_PURPLE, FOG_GOLD, GROUND_GLOW_BASE, HEMI_GOLD, KEY_LIGHT_BASE, PILLAR_GOLD,
};
use glam::{DVec3, Mat4, Vec3};
use rand::prelude::*;

/// Orbiting right-handed camera with perspective projection.
///
/// The eye is kept in f64 because it is a damped quantity; it is cast
/// down only when building matrices.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub eye: DVec3,
    pub look_target: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl CameraRig {
    pub fn new(aspect: f32) -> Self {
        // Start already on the gold orbit so the first frames damp from
        // a sensible pose rather than the origin.
        let eye = DVec3::new(
            GOLD_ANGLE.sin() * CAM_ORBIT_RADIUS,
            CAM_HEIGHT,
            GOLD_ANGLE.cos() * CAM_ORBIT_RADIUS,
        );
        Self {
            eye,
            look_target: crate::constants::look_target(),
            aspect,
            fovy_radians: std::f32::consts::FRAC_PI_4,
            znear: 0.1,
            zfar: 100.0,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye.as_vec3(), self.look_target, Vec3::Y)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Color and intensity of one light.
#[derive(Clone, Copy, Debug)]
pub struct LightParams {
    pub color: [f32; 3],
    pub intensity: f32,
}

/// The lights the morph touches. Static lights (sun, fill, ambient)
/// are the frontend's business and never change per frame.
#[derive(Clone, Debug)]
pub struct LightRig {
    pub gold: LightParams,
    pub purple: LightParams,
    pub ground_glow: LightParams,
    pub pillar_1: LightParams,
    pub pillar_2: LightParams,
    pub hemisphere: LightParams,
}

impl Default for LightRig {
    fn default() -> Self {
        let pillar = LightParams {
            color: PILLAR_GOLD,
            intensity: 0.5,
        };
        Self {
            gold: LightParams {
                color: EDGE_GOLD,
                intensity: KEY_LIGHT_BASE as f32,
            },
            purple: LightParams {
                color: EDGE_PURPLE,
                intensity: 0.0,
            },
            ground_glow: LightParams {
                color: EDGE_GOLD,
                intensity: GROUND_GLOW_BASE as f32,
            },
            pillar_1: pillar,
            pillar_2: pillar,
            hemisphere: LightParams {
                color: HEMI_GOLD,
                intensity: 0.6,
            },
        }
    }
}

/// Portal frame material: base color, emissive tint, breathing glow.
#[derive(Clone, Copy, Debug)]
pub struct EdgeMaterial {
    pub color: [f32; 3],
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
}

impl Default for EdgeMaterial {
    fn default() -> Self {
        Self {
            color: EDGE_GOLD,
            emissive: [
                EDGE_GOLD[0] * 0.5,
                EDGE_GOLD[1] * 0.5,
                EDGE_GOLD[2] * 0.5,
            ],
            emissive_intensity: 0.08,
        }
    }
}

/// Uniforms accepted by the portal surface shaders.
#[derive(Clone, Copy, Debug, Default)]
pub struct PortalUniforms {
    pub u_time: f32,
    pub u_hover: f32,
    pub u_mouse: [f32; 2],
}

/// Uniforms accepted by the sky dome and cloud-sea shaders.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkyUniforms {
    pub u_time: f32,
    pub u_hold: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct Fog {
    pub color: [f32; 3],
}

impl Default for Fog {
    fn default() -> Self {
        Self { color: FOG_GOLD }
    }
}

/// Vertical bob of the portal group.
#[derive(Clone, Copy, Debug)]
pub struct PortalFrame {
    pub y: f32,
}

impl Default for PortalFrame {
    fn default() -> Self {
        Self {
            y: PORTAL_BASE_Y as f32,
        }
    }
}

/// Rising dust motes around the temple.
///
/// Positions are a flat xyz buffer so the frontend can copy it straight
/// into a vertex buffer. Each particle ascends at its own per-frame
/// speed, drifts sideways with a phase given by its index, and respawns
/// at the floor with a fresh horizontal position once it clears the
/// ceiling.
pub struct ParticleField {
    pub positions: Vec<f32>,
    speeds: Vec<f32>,
    pub opacity: f32,
    pub needs_upload: bool,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut positions = Vec::with_capacity(count * 3);
        let mut speeds = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push((rng.gen::<f32>() - 0.5) * PARTICLE_EXTENT);
            positions.push(PARTICLE_FLOOR + rng.gen::<f32>() * PARTICLE_CEILING);
            positions.push((rng.gen::<f32>() - 0.5) * PARTICLE_EXTENT);
            speeds.push(PARTICLE_SPEED_MIN + rng.gen::<f32>() * PARTICLE_SPEED_SPAN);
        }
        Self {
            positions,
            speeds,
            opacity: 0.3,
            needs_upload: true,
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.speeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }

    /// Integrate one frame. `wrapped_time` phases the sideways drift.
    pub fn step(&mut self, wrapped_time: f64) {
        for i in 0..self.speeds.len() {
            self.positions[i * 3 + 1] += self.speeds[i];
            self.positions[i * 3] +=
                ((wrapped_time * PARTICLE_DRIFT_FREQ + i as f64).sin() as f32) * PARTICLE_DRIFT_AMP;
            if self.positions[i * 3 + 1] > PARTICLE_CEILING {
                self.positions[i * 3 + 1] = PARTICLE_FLOOR;
                self.positions[i * 3] = (self.rng.gen::<f32>() - 0.5) * PARTICLE_EXTENT;
                self.positions[i * 3 + 2] = (self.rng.gen::<f32>() - 0.5) * PARTICLE_EXTENT;
            }
        }
        self.needs_upload = true;
    }
}

/// Everything the frame engine writes into.
pub struct SceneSinks {
    pub camera: CameraRig,
    pub lights: LightRig,
    pub edge: EdgeMaterial,
    pub portal_inner: PortalUniforms,
    pub portal_outer: PortalUniforms,
    pub sky: SkyUniforms,
    pub cloud_sea: SkyUniforms,
    pub cloud_sea_far: SkyUniforms,
    pub fog: Fog,
    pub portal_frame: PortalFrame,
    pub particles: ParticleField,
}

impl SceneSinks {
    pub fn new(aspect: f32, seed: u64) -> Self {
        Self {
            camera: CameraRig::new(aspect),
            lights: LightRig::default(),
            edge: EdgeMaterial::default(),
            portal_inner: PortalUniforms::default(),
            portal_outer: PortalUniforms::default(),
            sky: SkyUniforms::default(),
            cloud_sea: SkyUniforms::default(),
            cloud_sea_far: SkyUniforms::default(),
            fog: Fog::default(),
            portal_frame: PortalFrame::default(),
            particles: ParticleField::new(PARTICLE_COUNT, seed),
        }
    }
}
