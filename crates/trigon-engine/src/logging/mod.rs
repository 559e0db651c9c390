//! Logging utilities.
//!
//! Centralizes logger initialization. Everything else in the crate goes
//! through the `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig};
