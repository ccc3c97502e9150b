//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! The runtime translates platform events into `InputEvent`s through
//! `platform::translate_window_event`.

mod frame;
mod state;
mod types;

pub(crate) mod platform;

pub use frame::{InputFrame, WheelInput};
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState, Modifiers, MouseWheelDelta, PointerMoveEvent};
