//! Board-agnostic logic for the Buzzpad demo applications
//!
//! This crate contains everything that does not depend on the host device:
//!
//! - Divisibility classification with per-app label sets
//! - Bounded digit buffer for numeric entry
//! - UI state machine for the interactive app
//!
//! The host event loop feeds key events in and presents the rendered
//! screen out; nothing in here blocks or touches hardware.

#![no_std]
#![deny(unsafe_code)]

pub mod classify;
pub mod digits;
pub mod state;

pub use classify::{classify, LabelSet, ResultString, FIZZBUZZ, SKIDBUZZ};
pub use digits::{DigitBuffer, MAX_DIGITS};
pub use state::{Control, Mode, Session};
