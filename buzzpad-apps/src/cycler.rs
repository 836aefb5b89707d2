//! Auto-cycling result viewer
//!
//! The original demo form: classify 1..=100 up front, then show one
//! result per one-second tick, wrapping at the end. The session ends by
//! itself after one full pass, or early on a Back press.

use heapless::Vec;

use buzzpad_core::{classify, Control, LabelSet, ResultString, FIZZBUZZ, SKIDBUZZ};
use buzzpad_display::Screen;
use buzzpad_input::{InputEvent, Key};

use crate::app::App;

/// Number of values the viewer cycles through (1..=CYCLE_COUNT)
pub const CYCLE_COUNT: usize = 100;

/// Display row for the current result, roughly centered vertically
const RESULT_ROW: usize = 3;

/// Auto-cycling viewer over a precomputed result table
pub struct CyclerApp {
    /// Results for 1..=CYCLE_COUNT, computed once at construction
    table: Vec<ResultString, CYCLE_COUNT>,
    /// Index of the entry currently shown
    index: usize,
    /// Ticks consumed so far, for the one-pass session bound
    ticks: usize,
}

impl CyclerApp {
    /// Create a viewer for the given label set
    pub fn new(labels: &LabelSet) -> Self {
        let mut table = Vec::new();
        for n in 1..=CYCLE_COUNT as u32 {
            // Capacity matches the loop bound exactly
            let _ = table.push(classify(n, labels));
        }
        Self {
            table,
            index: 0,
            ticks: 0,
        }
    }

    /// The FizzBuzz viewer
    pub fn fizzbuzz() -> Self {
        Self::new(&FIZZBUZZ)
    }

    /// The SkidBuzz viewer
    pub fn skidbuzz() -> Self {
        Self::new(&SKIDBUZZ)
    }

    /// The result currently shown
    pub fn current(&self) -> &str {
        self.table[self.index].as_str()
    }

    /// Index of the entry currently shown
    pub fn index(&self) -> usize {
        self.index
    }
}

impl App for CyclerApp {
    fn on_event(&mut self, event: InputEvent) -> Control {
        if event.is_press() && event.key == Key::Back {
            return Control::Exit;
        }
        Control::Continue
    }

    fn on_tick(&mut self) -> Control {
        self.index = (self.index + 1) % self.table.len();
        self.ticks += 1;
        if self.ticks >= self.table.len() {
            Control::Exit
        } else {
            Control::Continue
        }
    }

    fn render(&self, screen: &mut Screen) {
        screen.clear();
        screen.set_line(RESULT_ROW, self.current());
    }
}
