//! # Host Bridge Traits
//!
//! Platform abstraction traits implemented by each host platform.
//!
//! The library core never talks to the network, the filesystem, or a crash
//! reporter directly; it goes through the traits in this crate so that a
//! desktop build, a mobile embedding, and the test suite can each supply
//! their own adapters.
//!
//! ## Traits
//!
//! - [`HttpClient`](http::HttpClient) - async HTTP with retry support
//! - [`FileSystemAccess`](storage::FileSystemAccess) - app-directory file I/O
//! - [`DiagnosticsSink`](diagnostics::DiagnosticsSink) - non-fatal error reporting
//!
//! All traits require `Send + Sync` and use [`BridgeError`](error::BridgeError)
//! for consistent error handling. Implementations should convert their
//! platform-specific errors to `BridgeError` with actionable messages.

pub mod diagnostics;
pub mod error;
pub mod http;
pub mod storage;

pub use error::BridgeError;

// Re-export commonly used types
pub use diagnostics::{DiagnosticsSink, ErrorReport};
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse, RetryPolicy};
pub use storage::FileSystemAccess;
