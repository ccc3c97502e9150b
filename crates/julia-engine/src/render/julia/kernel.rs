//! CPU mirror of `julia.wgsl`.
//!
//! Same `f32` arithmetic, same constants, same iteration-count convention.
//! Not used for drawing; it is the oracle the kernel is tested against.

use std::f32::consts::TAU;

use crate::coords::{Vec2, Viewport};

use super::KernelParams;

/// Squared escape radius: `|z| > 2` guarantees divergence for `z² + c`.
pub const ESCAPE_RADIUS_SQ: f32 = 4.0;

/// Amplitude of the Julia constant's orbit.
pub const JULIA_RADIUS: f32 = 0.7885;

/// Angular rate of the constant's orbit, in radians per unit of time.
pub const ORBIT_RATE: f32 = 0.15;

/// Rate and amplitude of the slow wobble added to the orbit angle.
pub const DRIFT_RATE: f32 = 0.05;
pub const DRIFT_AMPLITUDE: f32 = 0.2;

/// Hue advance per iteration, in degrees.
pub const HUE_STEP: f32 = 2.0;

/// Phase offsets of the R, G, B channels of the cosine palette, in turns.
pub const PALETTE_PHASE: [f32; 3] = [0.0, 0.33, 0.67];

/// Maps a pixel-centre coordinate (origin bottom-left) to the plane.
///
/// Centres the grid, fits the shorter side to `[-1, 1]`, divides by `zoom`,
/// then adds `offset`.
pub fn plane_coord(pixel: Vec2, resolution: Viewport, zoom: f32, offset: Vec2) -> Vec2 {
    let (cx, cy) = resolution.center();
    let scale = 2.0 / resolution.min_side();
    (pixel - Vec2::new(cx, cy)) * scale / zoom + offset
}

/// The animated Julia constant `c(time)`.
pub fn julia_constant(time: f32) -> Vec2 {
    let slow = time * ORBIT_RATE;
    let micro = time * DRIFT_RATE;
    Vec2::new(
        (slow + micro.sin() * DRIFT_AMPLITUDE).cos(),
        (slow + micro.cos() * DRIFT_AMPLITUDE).sin(),
    ) * JULIA_RADIUS
}

/// One step of `z ← z² + c`.
#[inline]
pub fn step(z: Vec2, c: Vec2) -> Vec2 {
    Vec2::new(z.x * z.x - z.y * z.y + c.x, 2.0 * z.x * z.y + c.y)
}

/// Number of steps whose result stayed inside the escape radius.
///
/// Returns `max_iterations` for an orbit that never escapes (interior).
pub fn escape_iterations(start: Vec2, c: Vec2, max_iterations: u32) -> u32 {
    let mut z = start;
    for i in 0..max_iterations {
        z = step(z, c);
        if z.dot(z) > ESCAPE_RADIUS_SQ {
            return i;
        }
    }
    max_iterations
}

/// Cosine palette: one scalar hue, three channels a third of a turn apart.
pub fn palette(base_hue: f32, iterations: u32) -> [f32; 3] {
    let hue = (base_hue + iterations as f32 * HUE_STEP) / 360.0;
    PALETTE_PHASE.map(|phase| 0.5 + 0.5 * (TAU * (hue + phase)).cos())
}

/// Full per-pixel evaluation, as the fragment shader does it.
pub fn shade(pixel: Vec2, params: &KernelParams) -> [f32; 3] {
    let resolution = Viewport::new(params.resolution[0], params.resolution[1]);
    let offset = Vec2::new(params.offset[0], params.offset[1]);
    let uv = plane_coord(pixel, resolution, params.zoom, offset);

    let n = escape_iterations(uv, julia_constant(params.time), params.max_iterations);
    if n >= params.max_iterations {
        return [0.0; 3];
    }
    palette(params.base_hue, n)
}
