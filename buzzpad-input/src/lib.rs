//! Input model for Buzzpad demo applications
//!
//! The handheld has a directional pad (Up/Down/Left/Right) and two action
//! buttons (Ok, Back). The host input service delivers one event per edge:
//! a key identifier plus an edge kind (press, release, auto-repeat). The
//! demo apps act on press edges only.
//!
//! Hosts that forward raw event bytes use the packed wire format in
//! [`events`]: key in the low nibble, edge kind in the high nibble.

#![no_std]
#![deny(unsafe_code)]

pub mod events;

pub use events::{InputEvent, InputKind, Key};
