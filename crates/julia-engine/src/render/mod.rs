//! GPU rendering subsystem.
//!
//! Each renderer owns its GPU resources (pipelines, buffers, bind groups),
//! creates them lazily on first use, and can release them on teardown.

mod ctx;
pub mod julia;

pub use ctx::{RenderCtx, RenderTarget};
