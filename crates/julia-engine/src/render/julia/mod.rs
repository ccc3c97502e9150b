//! Escape-time Julia-set renderer.
//!
//! - `julia.wgsl` is the per-pixel kernel, run once per fragment per frame.
//! - [`kernel`] is a CPU mirror of the shader, used as the reference in
//!   tests and for probing the plane without a GPU.
//! - [`KernelParams`] is the uniform block both sides share.
//! - [`JuliaRenderer`] owns the pipeline, the full-screen quad and the
//!   parameter bindings.

pub mod kernel;
mod params;
mod renderer;

pub use params::{KernelParams, ParamDirty};
pub use renderer::JuliaRenderer;

/// WGSL source of the kernel.
pub const SHADER_SOURCE: &str = include_str!("julia.wgsl");
