//! Interactive numeric-entry app
//!
//! Wraps the `buzzpad-core` session state machine and renders its three
//! modes: main menu, digit entry, result view.

use buzzpad_core::{Control, LabelSet, Mode, Session, FIZZBUZZ, SKIDBUZZ};
use buzzpad_display::Screen;
use buzzpad_input::InputEvent;

use crate::app::App;

/// Interactive numeric entry and classification
pub struct EntryApp {
    session: Session,
    title: &'static str,
}

impl EntryApp {
    /// Create an entry app for the given variant
    pub fn new(title: &'static str, labels: &'static LabelSet) -> Self {
        Self {
            session: Session::new(labels),
            title,
        }
    }

    /// The interactive FizzBuzz app
    pub fn fizzbuzz() -> Self {
        Self::new("=== FIZZBUZZ ===", &FIZZBUZZ)
    }

    /// The interactive SkidBuzz app
    pub fn skidbuzz() -> Self {
        Self::new("=== SKIDBUZZ ===", &SKIDBUZZ)
    }

    /// The underlying session, for host status displays
    pub fn session(&self) -> &Session {
        &self.session
    }
}

impl App for EntryApp {
    fn on_event(&mut self, event: InputEvent) -> Control {
        self.session.handle_event(event)
    }

    fn render(&self, screen: &mut Screen) {
        screen.clear();
        screen.set_line(0, self.title);

        match self.session.mode() {
            Mode::MainMenu => {
                screen.set_line(3, "Ok: enter a number");
                screen.set_line(4, "Back: exit");
            }
            Mode::InputNumber => {
                // Placeholder glyph while the buffer is empty
                let digits = self.session.digits();
                screen.set_line(3, if digits.is_empty() { "0" } else { digits });
                screen.set_line(6, "Up/Dn digit  R/L edit");
            }
            Mode::ViewResult => {
                screen.set_line(3, self.session.result_view());
                screen.set_line(6, "L/R scroll  Ok: menu");
            }
        }
    }
}
