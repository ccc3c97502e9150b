use std::io;

use anyhow::Result;
use clap::Parser;

use julia_engine::logging::{init_logging, LoggingConfig};
use julia_studio::{consent, Cli};

fn main() -> Result<()> {
    let config = Cli::parse().into_config()?;

    init_logging(LoggingConfig {
        env_filter: config.log_filter.clone(),
        ..LoggingConfig::default()
    });

    if !config.accept_warning && !consent::confirm(io::stdin().lock(), io::stderr())? {
        log::warn!("photosensitivity warning not accepted, not starting (use --accept-warning to skip the prompt)");
        return Ok(());
    }

    julia_studio::run(config)
}
