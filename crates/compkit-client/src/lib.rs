//! HTTP client for the compkit component API.
//!
//! The component API is a small read-only HTTP service. Every capability is a
//! `GET` with query parameters that returns JSON:
//!
//! | Method | Endpoint |
//! |---|---|
//! | [`ComponentApi::search`] | `GET {base}/search` |
//! | [`ComponentApi::docs`] | `GET {base}/docs` |
//! | [`ComponentApi::recommend`] | `GET {base}/recommend` |
//! | [`ComponentApi::generate`] | `GET {base}/generate` |
//! | [`ComponentApi::help`] | `GET {base}/help` |
//! | [`HealthApi::check`] | `GET {base}/health` |
//!
//! Response bodies are returned as [`serde_json::Value`]; their shape belongs
//! to the remote service. There is no retry and no caching.

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use api::{ComponentApi, HealthApi};
pub use client::{ClientBuilder, ComponentClient};
pub use error::{BoxError, Error, ErrorKind, Result};
pub use types::*;
