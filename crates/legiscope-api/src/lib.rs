//! Async client for the Observatorio Politico backend API.
//!
//! The backend is an opaque collaborator reached only through its documented
//! JSON-over-HTTP endpoints; this crate owns the request/decode/error-mapping
//! layer and nothing else. See `legiscope-types` for the payload shapes.

pub mod client;
pub mod error;

pub use client::Client;
pub use error::{Error, Result};
