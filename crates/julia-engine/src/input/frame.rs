use super::types::{InputEvent, Key, MouseWheelDelta};

/// One wheel notch or touchpad scroll, with the pointer position at the time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WheelInput {
    pub delta: MouseWheelDelta,
    /// Pointer position in logical pixels, `None` if the pointer is outside.
    pub pointer: Option<(f32, f32)>,
}

/// Input deltas accumulated between two frames.
///
/// `InputState` holds the current state (held keys, pointer position).
/// The runtime clears the frame after every `on_frame`, so everything here
/// takes effect on the next frame and never mid-frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Keys pressed this frame, including key-repeats, in arrival order.
    pub keys_pressed: Vec<Key>,

    /// Wheel input in arrival order.
    pub wheel: Vec<WheelInput>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.wheel.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
