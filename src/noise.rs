//! CPU reference model of the cloud shader's noise and shading math.
//!
//! The fragment shader in `shaders/clouds.wgsl` is the artifact that actually
//! runs; this module mirrors it on the host so the pure per-pixel function can
//! be regression-tested without a GPU. The math is carried out in f64 so that
//! recorded baseline values stay stable across platforms — the hash multiplies
//! `sin` by 43758.5453 before taking the fractional part, which would amplify
//! single-precision libm differences into the result.
//!
//! Everything here is a pure function of its arguments.

use glam::{DVec2, DVec3};

/// Sky color shown where the noise sum saturates the threshold.
pub const SKY_COLOR: DVec3 = DVec3::new(0.602, 0.808, 0.980);

/// Cloud color shown where the noise sum stays below the threshold.
pub const CLOUD_COLOR: DVec3 = DVec3::new(0.97, 0.97, 0.97);

/// Lower edge of the coverage threshold.
pub const COVERAGE_EDGE_LO: f64 = 0.3;

/// Upper edge of the coverage threshold.
pub const COVERAGE_EDGE_HI: f64 = 1.0;

fn fract(x: f64) -> f64 {
    x - x.floor()
}

/// Cubic easing from 0 to 1 between `edge0` and `edge1`, clamped outside.
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Pseudo-random value in `[0,1)` for an integer lattice point.
fn lattice_value(corner: DVec2) -> f64 {
    let h = corner.dot(DVec2::new(1.0, 57.0)) + 1.0;
    fract(h.sin() * 43758.5453)
}

/// Lattice value noise: bilinear interpolation of hashed corner values, with
/// the fractional offset eased through a smoothstep.
pub fn smooth_noise(st: DVec2) -> f64 {
    let i = st.floor();
    let fx = smoothstep(0.0, 1.0, fract(st.x));
    let fy = smoothstep(0.0, 1.0, fract(st.y));

    let a = lattice_value(i);
    let b = lattice_value(i + DVec2::new(1.0, 0.0));
    let c = lattice_value(i + DVec2::new(0.0, 1.0));
    let d = lattice_value(i + DVec2::new(1.0, 1.0));

    let bottom = a + (b - a) * fx;
    let top = c + (d - c) * fx;
    bottom + (top - bottom) * fy
}

/// Three-octave noise sum for a texture coordinate and animation shift.
///
/// The base octave samples at scale 5 and drifts along X at 0.15 per unit of
/// shift; the finer octaves sample at scales 10 and 20 and drift diagonally at
/// 0.05 and 0.1. Result lies in `[0, 1.75)`.
pub fn cloud_density(uv: DVec2, cloud_shift: f64) -> f64 {
    let mut st = uv * 5.0;
    st.x += cloud_shift * 0.15;

    let mut n = smooth_noise(st);
    n += smooth_noise(st * 2.0 - DVec2::splat(cloud_shift * 0.05)) * 0.5;
    n += smooth_noise(st * 4.0 - DVec2::splat(cloud_shift * 0.1)) * 0.25;
    n
}

/// Coverage factor in `[0,1]`: the density sum pushed through the threshold.
pub fn coverage(density: f64) -> f64 {
    smoothstep(COVERAGE_EDGE_LO, COVERAGE_EDGE_HI, density)
}

/// Final pixel color: cloud color blended toward sky color by coverage.
pub fn shade(uv: DVec2, cloud_shift: f64) -> DVec3 {
    let c = coverage(cloud_density(uv, cloud_shift));
    CLOUD_COLOR.lerp(SKY_COLOR, c)
}
