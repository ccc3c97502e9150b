use winit::window::Window;

/// "Run the frame callback once more before the next repaint."
///
/// The runtime calls this after every frame that returned
/// `AppControl::Continue`; not calling it is how the loop stops. No value is
/// returned and nothing is queued twice: repeated requests before the next
/// repaint coalesce into one frame.
pub trait FrameScheduler {
    fn request_frame(&self);
}

impl FrameScheduler for Window {
    fn request_frame(&self) {
        self.request_redraw();
    }
}
