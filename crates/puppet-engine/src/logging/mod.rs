//! Logging utilities.
//!
//! Everything logs through the `log` facade; this module only wires up the
//! `env_logger` backend.

mod init;

pub use init::{init_logging, LoggingConfig};
