//! App trait bridging demo apps to the host event loop
//!
//! The host owns the loop: it delivers input events as they arrive, ticks
//! the app once per second, and calls `render` once per display refresh.
//! The callbacks are invoked synchronously on one logical thread, never
//! reentrantly, so apps need no locking.

use buzzpad_core::Control;
use buzzpad_display::Screen;
use buzzpad_input::InputEvent;

/// A demo application driven by the host event loop
pub trait App {
    /// Handle one input event
    ///
    /// Returning [`Control::Exit`] asks the host to tear the session down.
    fn on_event(&mut self, event: InputEvent) -> Control;

    /// Advance time-driven behavior by one host tick
    ///
    /// Apps without time-driven behavior keep the default no-op.
    fn on_tick(&mut self) -> Control {
        Control::Continue
    }

    /// Render the current state into the screen buffer
    ///
    /// Called once per display refresh on the draw path: no side effects
    /// on app state, bounded time, no blocking.
    fn render(&self, screen: &mut Screen);
}
