use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    /// Keep running; the runtime re-arms the next frame.
    Continue,
    /// Stop scheduling frames and shut down.
    Exit,
}

/// Application contract implemented by the studio.
pub trait App {
    /// Called for every window event, before the runtime handles it.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per frame. Runs to completion before the next frame is scheduled.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Called once when the event loop is exiting, before the window and GPU
    /// context are dropped.
    ///
    /// Must tolerate a setup that never completed (no frame ever rendered).
    fn on_exit(&mut self) {}
}
