//! UI state machine for the interactive app
//!
//! Defines the authoritative behavior of a numeric-entry session.
//! The state machine is explicit, finite, and deterministic.

pub mod machine;

pub use machine::{Control, Mode, Session};
