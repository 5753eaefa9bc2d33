//! Desktop bridge implementations.
//!
//! Concrete adapters for the `bridge-traits` contracts on desktop platforms:
//! reqwest-backed HTTP, tokio-backed file I/O in OS application directories,
//! and diagnostics sinks (local tracing and a remote HTTP collector).

pub mod diagnostics;
pub mod filesystem;
pub mod http;

pub use diagnostics::{LogDiagnostics, RemoteDiagnostics};
pub use filesystem::TokioFileSystem;
pub use http::ReqwestHttpClient;
