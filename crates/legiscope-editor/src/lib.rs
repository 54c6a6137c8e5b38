//! Draft engine for the KOM profile editor.
//!
//! Holds the single client-side piece of state the dashboard has: the
//! in-memory draft of one politician's profile between load and save, plus
//! the topic-composition state machine. Everything here is synchronous and
//! free of I/O; fetching and persisting the profile belongs to
//! `legiscope-api`.

pub mod error;
pub mod session;

pub use error::{Error, Result};
pub use session::{Composer, Draft, EditorSession, Target};
