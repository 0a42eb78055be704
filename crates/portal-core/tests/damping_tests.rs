// Tests for the interpolation primitives and the frame clock math:
// frame-rate independence, decay-base identities, dt clamping, and
// time wrapping.

use portal_core::{
    clamp_dt, damp, decay_base, lerp, lerp_rgb, wrap_time, DampingBases, ANGLE_RATE, CAM_XZ_RATE,
    CAM_Y_RATE, DT_CLAMP_MAX, HOVER_RATE, SCROLL_RATE, TIME_WRAP_PERIOD,
};

/// Integrate `value` toward `target` for exactly one simulated second
/// with a fixed step.
fn integrate(base: f64, steps: usize) -> f64 {
    let dt = 1.0 / steps as f64;
    let mut value = 0.0;
    for _ in 0..steps {
        value = damp(value, 1.0, base, dt);
    }
    value
}

#[test]
fn damping_is_frame_rate_independent() {
    for &rate in &[ANGLE_RATE, SCROLL_RATE, CAM_XZ_RATE, CAM_Y_RATE, HOVER_RATE] {
        let base = decay_base(rate);
        let at_30 = integrate(base, 30);
        let at_60 = integrate(base, 60);
        let at_144 = integrate(base, 144);
        assert!(
            (at_30 - at_60).abs() < 1e-9,
            "30 vs 60 fps diverged for rate {rate}: {at_30} vs {at_60}"
        );
        assert!(
            (at_60 - at_144).abs() < 1e-9,
            "60 vs 144 fps diverged for rate {rate}: {at_60} vs {at_144}"
        );
        // And all agree with the closed form 1 - base^1.
        assert!((at_60 - (1.0 - base)).abs() < 1e-9);
    }
}

#[test]
fn decay_bases_reproduce_nominal_rates_at_sixty_fps() {
    let dt = 1.0 / 60.0;
    for &rate in &[ANGLE_RATE, SCROLL_RATE, CAM_XZ_RATE, CAM_Y_RATE, HOVER_RATE] {
        let base = decay_base(rate);
        let per_frame = 1.0 - base.powf(dt);
        assert!(
            (per_frame - rate).abs() < 1e-10,
            "per-frame factor {per_frame} drifted from nominal {rate}"
        );
    }
}

#[test]
fn damping_bases_struct_matches_free_function() {
    let bases = DampingBases::default();
    assert_eq!(bases.angle, decay_base(ANGLE_RATE));
    assert_eq!(bases.scroll, decay_base(SCROLL_RATE));
    assert_eq!(bases.cam_xz, decay_base(CAM_XZ_RATE));
    assert_eq!(bases.cam_y, decay_base(CAM_Y_RATE));
    assert_eq!(bases.hover, decay_base(HOVER_RATE));
}

#[test]
fn damp_converges_and_never_overshoots() {
    let base = decay_base(ANGLE_RATE);
    let mut value = 0.0;
    let mut prev = value;
    for _ in 0..2000 {
        value = damp(value, 1.0, base, 1.0 / 60.0);
        assert!(value >= prev && value <= 1.0);
        prev = value;
    }
    assert!((value - 1.0).abs() < 1e-6);
}

#[test]
fn clamp_dt_caps_large_deltas() {
    assert_eq!(clamp_dt(5.0), DT_CLAMP_MAX);
    assert_eq!(clamp_dt(DT_CLAMP_MAX), DT_CLAMP_MAX);
    assert_eq!(clamp_dt(0.016), 0.016);
    assert_eq!(clamp_dt(-1.0), 0.0);
}

#[test]
fn wrapped_time_stays_in_period_range() {
    for &t in &[0.0, 0.5, TIME_WRAP_PERIOD - 1e-9, TIME_WRAP_PERIOD, 1e6, 1e9] {
        let w = wrap_time(t);
        assert!((0.0..TIME_WRAP_PERIOD).contains(&w), "wrap({t}) = {w}");
    }
}

#[test]
fn wrapped_time_is_periodic() {
    for &t in &[0.0, 1.5, 17.2, 61.0] {
        for k in 1..5_i32 {
            let shifted = t + k as f64 * TIME_WRAP_PERIOD;
            assert!(
                (wrap_time(t) - wrap_time(shifted)).abs() < 1e-9,
                "wrap not periodic at t={t} k={k}"
            );
        }
    }
}

#[test]
fn wrap_period_is_a_common_period_of_scene_frequencies() {
    // The wrap is invisible only because every oscillation rate used by
    // the scene completes a whole number of cycles per period.
    for &freq in &[0.3, 0.4, 0.5, 0.6, 0.8] {
        let cycles = TIME_WRAP_PERIOD * freq / std::f64::consts::TAU;
        assert!(
            (cycles - cycles.round()).abs() < 1e-9,
            "rate {freq} does not divide the wrap period ({cycles} cycles)"
        );
    }
}

#[test]
fn lerp_hits_endpoints_exactly() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert!((lerp(2.0, 6.0, 0.5) - 4.0).abs() < 1e-12);

    let a = [0.78, 0.66, 0.30];
    let b = [0.61, 0.43, 1.0];
    let at_zero = lerp_rgb(a, b, 0.0);
    let at_one = lerp_rgb(a, b, 1.0);
    for c in 0..3 {
        assert!((at_zero[c] - a[c]).abs() < 1e-6);
        assert!((at_one[c] - b[c]).abs() < 1e-6);
    }
}
