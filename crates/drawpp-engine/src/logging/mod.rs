//! Logger setup.
//!
//! The engine itself only emits through the `log` facade; binaries call
//! [`init_logging`] early in `main` to route those records through
//! `env_logger`.

mod init;

pub use init::{init_logging, LoggingConfig, FILTER_ENV};
