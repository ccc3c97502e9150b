//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and the
//! application: the `App` callbacks, the per-frame context, and the
//! frame-scheduling seam that re-arms the render loop.

mod app;
mod ctx;
mod scheduler;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
pub use scheduler::FrameScheduler;
