//! Julia Studio: an animated, zoomable Julia set drawn by a fragment shader.
//!
//! The engine crate owns the window, GPU and renderer; this crate owns the
//! controls, the animation clock and the per-frame parameter bookkeeping.

pub mod app;
pub mod bindings;
pub mod clock;
pub mod config;
pub mod consent;
pub mod control;
pub mod render_loop;
pub mod view;

use anyhow::Result;
use winit::dpi::LogicalSize;

use julia_engine::device::GpuInit;
use julia_engine::window::{Runtime, RuntimeConfig};

pub use app::StudioApp;
pub use config::{Cli, StudioConfig};

/// Opens the window and runs the studio until it is closed.
pub fn run(config: StudioConfig) -> Result<()> {
    let runtime = RuntimeConfig {
        title: config.title.clone(),
        initial_size: LogicalSize::new(config.width, config.height),
        ..RuntimeConfig::default()
    };

    let gpu_init = GpuInit {
        prefer_srgb: false,
        present_mode: if config.vsync {
            wgpu::PresentMode::Fifo
        } else {
            wgpu::PresentMode::AutoNoVsync
        },
        ..GpuInit::default()
    };

    let app = StudioApp::new(&config);
    Runtime::run(runtime, gpu_init, app)
}
