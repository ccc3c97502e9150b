//! Time subsystem.
//!
//! Frame timing utilities that do not depend on the runtime:
//! - `FrameClock`: one per render loop, `tick()` once per presented frame
//! - `FpsCounter`: observed frames-per-second over a rolling sample window

mod fps;
mod frame_clock;

pub use fps::FpsCounter;
pub use frame_clock::{FrameClock, FrameTime};
