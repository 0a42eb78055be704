// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::{Mat4, Vec3};
use input::*;
use portal_core::{SCROLL_TARGET_MAX, SCROLL_TARGET_MIN};

#[test]
fn pointer_normalization_center_and_corners() {
    let (nx, ny) = normalized_pointer(640.0, 360.0, 1280.0, 720.0);
    assert!(nx.abs() < 1e-12 && ny.abs() < 1e-12);

    // Top-left is (-1, 1): screen y grows downward, normalized y up.
    let (nx, ny) = normalized_pointer(0.0, 0.0, 1280.0, 720.0);
    assert_eq!((nx, ny), (-1.0, 1.0));

    let (nx, ny) = normalized_pointer(1280.0, 720.0, 1280.0, 720.0);
    assert_eq!((nx, ny), (1.0, -1.0));
}

#[test]
fn pointer_normalization_survives_zero_size() {
    assert_eq!(normalized_pointer(100.0, 100.0, 0.0, 0.0), (0.0, 0.0));
}

#[test]
fn scroll_accumulates_and_clamps() {
    let mut target = 0.0;
    target = accumulate_scroll(target, 125.0);
    assert!((target - 0.1).abs() < 1e-12);

    for _ in 0..100 {
        target = accumulate_scroll(target, 500.0);
    }
    assert_eq!(target, SCROLL_TARGET_MAX);

    for _ in 0..100 {
        target = accumulate_scroll(target, -500.0);
    }
    assert_eq!(target, SCROLL_TARGET_MIN);
}

#[test]
fn ray_sphere_intersection_basic() {
    let result = ray_sphere(
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, 5.0),
        2.0,
    );
    let t = result.expect("ray should hit sphere");
    assert!(t > 0.0 && t < 10.0);
}

#[test]
fn ray_sphere_intersection_miss() {
    let result = ray_sphere(
        Vec3::ZERO,
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, 5.0),
        2.0,
    );
    assert!(result.is_none());
}

#[test]
fn ray_sphere_behind_origin_is_rejected() {
    let result = ray_sphere(
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, -5.0),
        2.0,
    );
    assert!(result.is_none());
}

#[test]
fn center_ray_points_at_the_look_target() {
    let eye = Vec3::new(1.04, 2.0, 4.07); // roughly the gold orbit pose
    let target = Vec3::new(0.0, 1.2, 0.0);
    let proj = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0);
    let view = Mat4::look_at_rh(eye, target, Vec3::Y);

    let (ro, rd) = pointer_ray(proj * view, 0.0, 0.0);
    let expected = (target - eye).normalize();
    assert!(rd.dot(expected) > 0.999, "ray direction {rd:?} vs {expected:?}");
    // Origin sits on the near region of the camera axis.
    assert!((ro - eye).length() < 0.5);

    // And the portal sphere at the look target is hit dead-center.
    assert!(ray_sphere(ro, rd, target, PORTAL_PICK_RADIUS).is_some());
}

#[test]
fn off_center_pick_follows_the_projection_aspect() {
    // The pick ray must be built from the viewport's current aspect:
    // after a resize, an off-center pointer unprojects to a different
    // direction under the old and new projections, so a pick computed
    // with a stale aspect would hit or miss the wrong geometry.
    let eye = Vec3::new(1.04, 2.0, 4.07);
    let target = Vec3::new(0.0, 1.2, 0.0);
    let view = Mat4::look_at_rh(eye, target, Vec3::Y);
    let fovy = std::f32::consts::FRAC_PI_4;

    let wide = Mat4::perspective_rh(fovy, 21.0 / 9.0, 0.1, 100.0);
    let narrow = Mat4::perspective_rh(fovy, 4.0 / 3.0, 0.1, 100.0);

    let (_, rd_wide) = pointer_ray(wide * view, 0.8, 0.0);
    let (_, rd_narrow) = pointer_ray(narrow * view, 0.8, 0.0);
    assert!(
        rd_wide.dot(rd_narrow) < 0.999,
        "same pointer, different aspects, should give different rays"
    );

    // The center ray is aspect-independent and keeps hitting the portal.
    let (ro, rd) = pointer_ray(wide * view, 0.0, 0.0);
    assert!(ray_sphere(ro, rd, target, PORTAL_PICK_RADIUS).is_some());
}
