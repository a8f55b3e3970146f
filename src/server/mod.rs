//! HTTP server adapters
//!
//! This module translates between HTTP and the HTTP-agnostic API layer.
//!
//! - `tiny_http` - Routing and request/response conversion
//! - `runner` - Worker-pool server loop

mod runner;
pub mod tiny_http;

pub use runner::{ApiServer, ShutdownHandle};
