//! Test support for the legiscope workspace: canned backend payloads and a
//! scripted stub HTTP server.

pub mod fixtures;
pub mod stub_server;

pub use stub_server::{RecordedRequest, StubResponse, StubServer};
