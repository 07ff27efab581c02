//! Logging utilities.
//!
//! The bridge logs through the `log` facade; this module only offers a
//! convenience `env_logger` setup for hosts that have none.

mod init;

pub use init::{init_logging, LoggingConfig};
