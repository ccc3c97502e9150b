use std::time::Instant;

use julia_engine::coords::Viewport;
use julia_engine::render::julia::{KernelParams, ParamDirty};
use julia_engine::time::FpsCounter;

use crate::clock::AnimationClock;
use crate::control::ControlState;

/// What one frame has to draw.
#[derive(Debug, Copy, Clone)]
pub struct FrameUpdate {
    pub params: KernelParams,
    /// Fields that differ from the last parameters the GPU received.
    pub dirty: ParamDirty,
    /// Fresh FPS sample, when sampling is on and a window just closed.
    pub fps: Option<f64>,
}

/// Per-frame bookkeeping between input handling and the renderer.
///
/// Owns the animation clock (the only writer of elapsed time) and remembers
/// what was last uploaded so unchanged parameters are not re-sent.
#[derive(Debug)]
pub struct RenderLoop {
    clock: AnimationClock,
    fps: Option<FpsCounter>,
    base_hue: f32,
    uploaded: Option<KernelParams>,
}

impl RenderLoop {
    pub fn new(base_hue: f32, sample_fps: bool) -> Self {
        Self {
            clock: AnimationClock::new(),
            fps: sample_fps.then(FpsCounter::new),
            base_hue,
            uploaded: None,
        }
    }

    /// Counts the frame, ticks the clock, and builds this frame's parameters.
    ///
    /// `resolution` is the size of the surface being drawn, in physical pixels.
    pub fn advance(&mut self, control: &ControlState, resolution: Viewport, now: Instant) -> FrameUpdate {
        let fps = self.fps.as_mut().and_then(|counter| counter.record(now));

        self.clock.tick(control);

        let offset = control.offset();
        let params = KernelParams {
            resolution: [resolution.width, resolution.height],
            offset: [offset.x, offset.y],
            time: self.clock.shader_time(),
            zoom: control.zoom(),
            max_iterations: control.max_iterations(),
            base_hue: self.base_hue,
        };

        FrameUpdate {
            params,
            dirty: params.diff(self.uploaded.as_ref()),
            fps,
        }
    }

    /// Records `params` as being on the GPU. Call only after a frame was drawn.
    pub fn commit(&mut self, params: KernelParams) {
        self.uploaded = Some(params);
    }

    /// Forgets the uploaded parameters; the next frame is fully dirty.
    pub fn invalidate(&mut self) {
        self.uploaded = None;
    }

    pub fn elapsed_time(&self) -> f64 {
        self.clock.elapsed()
    }
}
