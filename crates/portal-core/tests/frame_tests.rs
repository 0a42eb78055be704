// Integration tests driving the whole per-frame engine with
// deterministic dt sequences, the way the animation driver does.

use portal_core::{
    FrameEngine, LightRig, ParticleField, SceneSinks, SceneState, CAM_ORBIT_RADIUS, DT_CLAMP_MAX,
    EDGE_GOLD, EDGE_PURPLE, FOG_GOLD, FOG_PURPLE, GOLD_ANGLE, HEMI_PURPLE, PARTICLE_CEILING,
    PARTICLE_EXTENT, PARTICLE_FLOOR, PURPLE_ANGLE, TIME_WRAP_PERIOD,
};

const DT: f64 = 1.0 / 60.0;

fn rig() -> (FrameEngine, SceneState, SceneSinks) {
    (FrameEngine::new(), SceneState::new(), SceneSinks::new(16.0 / 9.0, 7))
}

#[test]
fn held_for_150_frames_completes_and_reverses() {
    // 2.5 s of holding at 1.2/s crosses the full range well before the
    // end, so the run must both hit 1.0 and arm the return phase.
    let (engine, mut state, mut sinks) = rig();
    state.holding = true;
    let mut saw_full = false;
    let mut saw_reversing = false;
    for _ in 0..150 {
        engine.advance(&mut state, &mut sinks, 0.0, DT);
        if state.hold_progress >= 1.0 {
            saw_full = true;
        }
        if state.reversing {
            saw_reversing = true;
        }
    }
    assert!(saw_full, "hold never completed");
    assert!(saw_reversing, "return phase never armed");
}

#[test]
fn dt_is_clamped_before_integrating() {
    let (engine, mut state, mut sinks) = rig();
    engine.advance(&mut state, &mut sinks, 0.0, 5.0);
    assert!((state.time - DT_CLAMP_MAX).abs() < 1e-12);
    // A clamped frame of holding can only add DT_CLAMP_MAX * 1.2.
    state.holding = true;
    engine.advance(&mut state, &mut sinks, 0.0, 100.0);
    assert!((state.hold_progress - DT_CLAMP_MAX * 1.2).abs() < 1e-12);
}

#[test]
fn blend_endpoints_select_the_two_palettes() {
    let (engine, mut state, mut sinks) = rig();

    engine.advance(&mut state, &mut sinks, 0.0, DT);
    assert!((state.target_angle - GOLD_ANGLE).abs() < 1e-12);
    for c in 0..3 {
        assert!((sinks.fog.color[c] - FOG_GOLD[c]).abs() < 1e-6);
    }

    // Released at full progress the snap keeps p pinned at 1.
    state.hold_progress = 1.0;
    engine.advance(&mut state, &mut sinks, 0.0, DT);
    assert!((state.target_angle - PURPLE_ANGLE).abs() < 1e-12);
    for c in 0..3 {
        assert!((sinks.fog.color[c] - FOG_PURPLE[c]).abs() < 1e-6);
        assert!((sinks.lights.hemisphere.color[c] - HEMI_PURPLE[c]).abs() < 1e-6);
    }
    assert_eq!(sinks.sky.u_hold, 1.0);
    assert_eq!(sinks.cloud_sea_far.u_hold, 1.0);
}

#[test]
fn default_key_lights_use_the_shared_palette() {
    // Both key lights carry the edge palette colors from the start;
    // only their intensities are blended per frame.
    let rig = LightRig::default();
    assert_eq!(rig.gold.color, EDGE_GOLD);
    assert_eq!(rig.purple.color, EDGE_PURPLE);
}

#[test]
fn key_light_weights_swap_with_progress() {
    let (engine, mut state, mut sinks) = rig();

    engine.advance(&mut state, &mut sinks, 0.0, DT);
    assert!(sinks.lights.gold.intensity > 2.0);
    assert_eq!(sinks.lights.purple.intensity, 0.0);

    state.hold_progress = 1.0;
    engine.advance(&mut state, &mut sinks, 0.0, DT);
    assert_eq!(sinks.lights.gold.intensity, 0.0);
    assert!(sinks.lights.purple.intensity > 2.0);
}

#[test]
fn camera_settles_onto_the_purple_orbit() {
    let (engine, mut state, mut sinks) = rig();
    state.hold_progress = 1.0; // released at full; p stays pinned
    for _ in 0..3000 {
        engine.advance(&mut state, &mut sinks, 0.0, DT);
    }
    assert!((state.current_angle - PURPLE_ANGLE).abs() < 1e-6);
    let eye = sinks.camera.eye;
    assert!((eye.x - PURPLE_ANGLE.sin() * CAM_ORBIT_RADIUS).abs() < 1e-3);
    assert!((eye.z - PURPLE_ANGLE.cos() * CAM_ORBIT_RADIUS).abs() < 1e-3);
}

#[test]
fn camera_lags_behind_the_orbit_angle() {
    // Two-stage smoothing: right after the target flips, the angle has
    // moved but the eye still tracks the pre-flip orbit more closely.
    let (engine, mut state, mut sinks) = rig();
    engine.advance(&mut state, &mut sinks, 0.0, DT);
    let eye_before = sinks.camera.eye;

    state.hold_progress = 1.0;
    engine.advance(&mut state, &mut sinks, 0.0, DT);
    let angle_moved = (state.current_angle - GOLD_ANGLE).abs();
    let eye_moved = (sinks.camera.eye - eye_before).length();
    assert!(angle_moved > 0.3, "angle barely moved: {angle_moved}");
    assert!(eye_moved < angle_moved * CAM_ORBIT_RADIUS * 0.5);
}

#[test]
fn scroll_target_is_clamped_and_chased() {
    let (engine, mut state, mut sinks) = rig();
    for _ in 0..2000 {
        engine.advance(&mut state, &mut sinks, 50.0, DT);
    }
    assert!((state.scroll - 1.0).abs() < 1e-6, "scroll {}", state.scroll);
}

#[test]
fn hover_intensity_rises_then_decays() {
    let (engine, mut state, mut sinks) = rig();
    state.hover_portal = true;
    for _ in 0..600 {
        engine.advance(&mut state, &mut sinks, 0.0, DT);
    }
    assert!(sinks.portal_inner.u_hover > 0.95);
    assert!(sinks.portal_outer.u_hover > 0.95);

    state.hover_portal = false;
    for _ in 0..600 {
        engine.advance(&mut state, &mut sinks, 0.0, DT);
    }
    assert!(sinks.portal_inner.u_hover < 0.05);
}

#[test]
fn shader_time_is_wrapped() {
    let (engine, mut state, mut sinks) = rig();
    state.time = 1.0e7; // long session
    engine.advance(&mut state, &mut sinks, 0.0, DT);
    assert!(sinks.portal_inner.u_time >= 0.0);
    assert!((sinks.portal_inner.u_time as f64) < TIME_WRAP_PERIOD);
    assert!((sinks.sky.u_time as f64) < TIME_WRAP_PERIOD);
    // State time itself keeps growing unwrapped.
    assert!(state.time > 1.0e7);
}

#[test]
fn particles_respawn_at_the_floor() {
    let mut field = ParticleField::new(8, 42);
    field.positions[1] = PARTICLE_CEILING + 0.5;
    field.needs_upload = false;
    field.step(0.0);
    assert_eq!(field.positions[1], PARTICLE_FLOOR);
    assert!(field.positions[0].abs() <= PARTICLE_EXTENT / 2.0 + 1e-3);
    assert!(field.positions[2].abs() <= PARTICLE_EXTENT / 2.0 + 1e-3);
    assert!(field.needs_upload);
}

#[test]
fn particles_rise_between_respawns() {
    let mut field = ParticleField::new(8, 42);
    let before: Vec<f32> = field.positions.clone();
    field.step(0.0);
    for i in 0..field.len() {
        let y0 = before[i * 3 + 1];
        let y1 = field.positions[i * 3 + 1];
        if y1 != PARTICLE_FLOOR {
            assert!(y1 > y0, "particle {i} did not rise: {y0} -> {y1}");
        }
    }
}

#[test]
fn particle_seeding_is_deterministic() {
    let a = ParticleField::new(16, 99);
    let b = ParticleField::new(16, 99);
    assert_eq!(a.positions, b.positions);
}
