use anyhow::{ensure, Result};
use clap::Parser;

use crate::control::ControlState;

/// Command-line interface.
#[derive(Debug, Parser)]
#[command(name = "julia-studio", version, about = "Animated Julia set explorer")]
pub struct Cli {
    /// Initial window width, in logical pixels.
    #[arg(long, default_value_t = 1280.0)]
    pub width: f64,

    /// Initial window height, in logical pixels.
    #[arg(long, default_value_t = 720.0)]
    pub height: f64,

    /// Animation time added per frame (0.001 to 0.05).
    #[arg(long)]
    pub speed: Option<f64>,

    /// Iteration cutoff (100 to 1000).
    #[arg(long)]
    pub max_iterations: Option<u32>,

    /// Palette base hue in degrees; random when omitted.
    #[arg(long)]
    pub hue: Option<f32>,

    /// Log the frame rate and show it in the window title.
    #[arg(long)]
    pub show_fps: bool,

    /// Skip the photosensitivity prompt.
    #[arg(long)]
    pub accept_warning: bool,

    /// Sync presentation to the display refresh (default).
    #[arg(long, overrides_with = "no_vsync")]
    pub vsync: bool,

    /// Present as fast as possible.
    #[arg(long, overrides_with = "vsync")]
    pub no_vsync: bool,

    /// Log filter in `env_logger` syntax; overrides `RUST_LOG`.
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

impl Cli {
    /// Validates the flags and folds them into a [`StudioConfig`].
    ///
    /// Out-of-range speed and iteration values are clamped the same way the
    /// key bindings clamp them.
    pub fn into_config(self) -> Result<StudioConfig> {
        ensure!(
            self.width.is_finite() && self.width >= 1.0,
            "window width must be at least 1, got {}",
            self.width
        );
        ensure!(
            self.height.is_finite() && self.height >= 1.0,
            "window height must be at least 1, got {}",
            self.height
        );

        let mut control = ControlState::default();
        if let Some(speed) = self.speed {
            ensure!(speed.is_finite(), "speed must be a finite number");
            control.set_speed(speed);
        }
        if let Some(n) = self.max_iterations {
            control.set_max_iterations(n);
        }

        let base_hue = match self.hue {
            Some(h) => {
                ensure!(h.is_finite(), "hue must be a finite number of degrees");
                Some(h.rem_euclid(360.0))
            }
            None => None,
        };

        Ok(StudioConfig {
            title: StudioConfig::default().title,
            width: self.width,
            height: self.height,
            control,
            base_hue,
            show_fps: self.show_fps,
            accept_warning: self.accept_warning,
            vsync: !self.no_vsync,
            log_filter: self.log,
        })
    }
}

/// Everything the studio needs to start.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    /// Initial control values.
    pub control: ControlState,
    /// Palette base hue in `[0, 360)`; `None` picks one at random.
    pub base_hue: Option<f32>,
    pub show_fps: bool,
    pub accept_warning: bool,
    pub vsync: bool,
    pub log_filter: Option<String>,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            title: "Julia Studio".to_string(),
            width: 1280.0,
            height: 720.0,
            control: ControlState::default(),
            base_hue: None,
            show_fps: false,
            accept_warning: false,
            vsync: true,
            log_filter: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<StudioConfig> {
        let cli = Cli::try_parse_from(std::iter::once("julia-studio").chain(args.iter().copied()))?;
        cli.into_config()
    }

    #[test]
    fn no_flags_gives_defaults() -> Result<()> {
        let config = parse(&[])?;
        assert_eq!(config.width, 1280.0);
        assert_eq!(config.height, 720.0);
        assert_eq!(config.control, ControlState::default());
        assert!(config.base_hue.is_none());
        assert!(config.vsync);
        assert!(!config.show_fps && !config.accept_warning);
        Ok(())
    }

    #[test]
    fn control_flags_are_clamped() -> Result<()> {
        let config = parse(&["--speed", "3", "--max-iterations", "20"])?;
        assert_eq!(config.control.speed(), 0.05);
        assert_eq!(config.control.max_iterations(), 100);
        Ok(())
    }

    #[test]
    fn hue_wraps_into_a_turn() -> Result<()> {
        assert_eq!(parse(&["--hue", "370"])?.base_hue, Some(10.0));
        assert_eq!(parse(&["--hue=-90"])?.base_hue, Some(270.0));
        Ok(())
    }

    #[test]
    fn last_vsync_flag_wins() -> Result<()> {
        assert!(!parse(&["--no-vsync"])?.vsync);
        assert!(parse(&["--no-vsync", "--vsync"])?.vsync);
        assert!(!parse(&["--vsync", "--no-vsync"])?.vsync);
        Ok(())
    }

    #[test]
    fn rejects_degenerate_windows() {
        assert!(parse(&["--width", "0"]).is_err());
        assert!(parse(&["--height", "NaN"]).is_err());
    }

    #[test]
    fn switches_and_log_filter() -> Result<()> {
        let config = parse(&["--show-fps", "--accept-warning", "--log", "julia_studio=debug"])?;
        assert!(config.show_fps);
        assert!(config.accept_warning);
        assert_eq!(config.log_filter.as_deref(), Some("julia_studio=debug"));
        Ok(())
    }
}
