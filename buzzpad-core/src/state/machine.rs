//! Numeric-entry session state machine
//!
//! All interactive behavior is a function of the current mode and a key
//! press. The host loop feeds events in through [`Session::handle_event`]
//! and exits when it returns [`Control::Exit`].

use buzzpad_input::{InputEvent, Key};

use crate::classify::{classify, LabelSet, ResultString};
use crate::digits::DigitBuffer;

/// UI modes of the interactive app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Entry screen, waiting to start a number
    MainMenu,
    /// Composing digits with the d-pad
    InputNumber,
    /// Showing a classification result, scrollable
    ViewResult,
}

/// What the host loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Control {
    /// Keep running
    Continue,
    /// Terminate the session
    Exit,
}

/// One interactive session: mode, digit buffer, result, scroll position
///
/// Created once at session start, mutated by every key press, discarded
/// when the session ends. There is exactly one writer (the input callback)
/// and one reader (the render callback), never concurrent.
pub struct Session {
    mode: Mode,
    digits: DigitBuffer,
    result: ResultString,
    scroll: usize,
    labels: &'static LabelSet,
}

impl Session {
    /// Create a fresh session in the main menu
    pub fn new(labels: &'static LabelSet) -> Self {
        Self {
            mode: Mode::MainMenu,
            digits: DigitBuffer::new(),
            result: ResultString::new(),
            scroll: 0,
            labels,
        }
    }

    /// Current UI mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The digit buffer as displayed, leading zeros included
    pub fn digits(&self) -> &str {
        self.digits.as_str()
    }

    /// The last computed classification result
    pub fn result(&self) -> &str {
        self.result.as_str()
    }

    /// Current scroll offset into the result
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// The visible tail of the result, starting at the scroll offset
    ///
    /// The offset is clamped to the result length on every mutation, so
    /// the slice is always in bounds; at full scroll the view is empty.
    pub fn result_view(&self) -> &str {
        &self.result.as_str()[self.scroll.min(self.result.len())..]
    }

    /// Process one input event
    ///
    /// Only press edges act; holds and releases are ignored. Keys without
    /// a transition in the current mode are no-ops.
    pub fn handle_event(&mut self, event: InputEvent) -> Control {
        if !event.is_press() {
            return Control::Continue;
        }
        self.handle_key(event.key)
    }

    fn handle_key(&mut self, key: Key) -> Control {
        use Key::*;
        use Mode::*;

        match (self.mode, key) {
            // Main menu
            (MainMenu, Ok) => {
                // Any prior entry is dropped before a new number starts
                self.digits.clear();
                self.mode = InputNumber;
            }
            (MainMenu, Back) => return Control::Exit,

            // Digit entry
            (InputNumber, Up) => self.digits.increment_last(),
            (InputNumber, Down) => self.digits.decrement_last(),
            (InputNumber, Right) => {
                self.digits.push_zero();
            }
            (InputNumber, Left) => {
                self.digits.pop();
            }
            (InputNumber, Ok) => {
                if !self.digits.is_empty() {
                    self.result = classify(self.digits.value(), self.labels);
                    self.scroll = 0;
                    self.mode = ViewResult;
                }
            }
            (InputNumber, Back) => self.mode = MainMenu,

            // Result view
            (ViewResult, Left) => self.scroll = self.scroll.saturating_sub(1),
            (ViewResult, Right) => self.scroll = (self.scroll + 1).min(self.result.len()),
            (ViewResult, Ok) | (ViewResult, Back) => self.mode = MainMenu,

            // Everything else stays put
            _ => {}
        }

        Control::Continue
    }
}
