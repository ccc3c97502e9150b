use rand::Rng;

use julia_engine::core::{App as EngineApp, AppControl, FrameCtx};
use julia_engine::render::julia::JuliaRenderer;

use crate::bindings::apply_input;
use crate::config::StudioConfig;
use crate::control::ControlState;
use crate::render_loop::RenderLoop;

/// The studio: control state, per-frame bookkeeping and the fractal renderer.
pub struct StudioApp {
    control: ControlState,
    render_loop: RenderLoop,
    renderer: JuliaRenderer,

    title: String,
    show_fps: bool,
}

impl StudioApp {
    pub fn new(config: &StudioConfig) -> Self {
        let base_hue = config
            .base_hue
            .unwrap_or_else(|| rand::rng().random_range(0.0..360.0));
        log::info!("palette base hue {base_hue:.1}°");

        Self {
            control: config.control.clone(),
            render_loop: RenderLoop::new(base_hue, config.show_fps),
            renderer: JuliaRenderer::new(),
            title: config.title.clone(),
            show_fps: config.show_fps,
        }
    }

    fn status_title(&self, fps: f64) -> String {
        format!(
            "{} | {fps:.0} fps | {:.2}x{} | {} iter | zoom {:.3}",
            self.title,
            self.control.speed_multiplier(),
            if self.control.paused() { " (paused)" } else { "" },
            self.control.max_iterations(),
            self.control.zoom(),
        )
    }
}

impl EngineApp for StudioApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let outcome = apply_input(&mut self.control, ctx.input_frame, ctx.pointer_viewport());
        if outcome.quit {
            return AppControl::Exit;
        }

        let update = self
            .render_loop
            .advance(&self.control, ctx.surface_viewport(), ctx.time.now);

        if let Some(fps) = update.fps {
            log::info!("{fps:.1} fps (t = {:.2})", self.render_loop.elapsed_time());
            if self.show_fps {
                ctx.window.set_title(&self.status_title(fps));
            }
        }

        let renderer = &mut self.renderer;
        let mut drawn = false;
        let control = ctx.render(wgpu::Color::BLACK, |rctx, target| {
            drawn = renderer.render(rctx, target, &update.params, update.dirty);
        });

        if drawn {
            self.render_loop.commit(update.params);
        }
        control
    }

    fn on_exit(&mut self) {
        self.renderer.release();
        self.render_loop.invalidate();
        log::info!(
            "exiting after {:.2} units of animation time",
            self.render_loop.elapsed_time()
        );
    }
}
