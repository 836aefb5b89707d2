//! Demo applications for the Buzzpad handheld
//!
//! Two app families share the divisibility rule from `buzzpad-core`:
//!
//! - [`CyclerApp`]: precomputes results for 1..=100 and shows one per
//!   one-second host tick, wrapping at the end
//! - [`EntryApp`]: interactive numeric entry through the d-pad, with a
//!   scrollable result view
//!
//! Each app implements [`App`]; the host event loop constructs one,
//! forwards input events and ticks, and presents the rendered screen
//! every frame until the app asks to exit.

#![no_std]
#![deny(unsafe_code)]

pub mod app;
pub mod cycler;
pub mod entry;

pub use app::App;
pub use cycler::{CyclerApp, CYCLE_COUNT};
pub use entry::EntryApp;
