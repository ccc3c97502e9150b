//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the GPU layer.

mod resize;
mod runtime;

pub use resize::{ResizeDebouncer, DEFAULT_RESIZE_QUIET};
pub use runtime::{Runtime, RuntimeConfig};
