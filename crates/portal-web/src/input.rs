// Pure input math, kept free of web-sys so the host-side tests can
// include this file directly (the crate itself is wasm-only).

use glam::{Mat4, Vec3, Vec4};
use portal_core::{SCROLL_TARGET_MAX, SCROLL_TARGET_MIN, SCROLL_WHEEL_SCALE};

/// Ray-sphere radius used for the portal hover pick.
pub const PORTAL_PICK_RADIUS: f32 = 1.1;

/// Normalize window-space pixel coordinates into \[-1, 1\], y up.
#[inline]
pub fn normalized_pointer(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let nx = (x / width) * 2.0 - 1.0;
    let ny = -((y / height) * 2.0 - 1.0);
    (nx, ny)
}

/// Fold one wheel delta into the clamped scroll-target accumulator.
#[inline]
pub fn accumulate_scroll(current: f64, delta_y: f64) -> f64 {
    (current + delta_y * SCROLL_WHEEL_SCALE).clamp(SCROLL_TARGET_MIN, SCROLL_TARGET_MAX)
}

/// World-space ray through a normalized-device-coordinate point.
///
/// `view_proj` is the camera's combined matrix; the ray runs from the
/// near-plane unprojection toward the far-plane unprojection.
pub fn pointer_ray(view_proj: Mat4, ndc_x: f32, ndc_y: f32) -> (Vec3, Vec3) {
    let inv = view_proj.inverse();
    let p_near = inv * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p0: Vec3 = p_near.truncate() / p_near.w;
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let dir = (p1 - p0).normalize();
    (p0, dir)
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}
