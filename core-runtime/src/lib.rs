//! # Runtime Infrastructure
//!
//! Application-level plumbing shared by every embedding: logging bootstrap
//! and configuration loading. Domain crates emit `tracing` events; this
//! crate decides where they go and how they look.

pub mod config;
pub mod error;
pub mod logging;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig};
