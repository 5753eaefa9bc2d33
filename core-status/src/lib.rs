//! # Status API Client
//!
//! Client for the project's remote status document: the latest released
//! version and an optional announcement. Pure configuration of the HTTP
//! bridge; retry behavior is whatever the bridge's defaults provide.

pub mod client;
pub mod error;

pub use client::{AppStatus, StatusApi};
pub use error::{Result, StatusError};
