//! Logging utilities.
//!
//! Centralizes logger initialization behind the `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
