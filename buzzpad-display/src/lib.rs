//! Display abstraction for Buzzpad demo applications
//!
//! This crate provides:
//! - `DisplayBackend` trait for the handheld's display hardware
//! - `Screen` character buffer the apps render into
//! - `present` to flush a screen buffer onto a backend
//!
//! # Architecture
//!
//! Apps never touch display hardware. They fill a [`Screen`] (8 rows of 21
//! characters, matching the 128x64 panel with the fixed 6x8 font) and the
//! host loop presents it through whatever [`DisplayBackend`] the device
//! provides. Rendering into the buffer is side-effect free and bounded, so
//! it is safe on the draw path.

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod screen;

pub use backend::{DisplayBackend, DisplayError};
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};

/// Flush a screen buffer to a backend
///
/// Skips the hardware entirely when the buffer is unchanged since the last
/// present. Empty rows are not drawn; the leading clear leaves them blank.
pub fn present<B: DisplayBackend>(screen: &mut Screen, backend: &mut B) -> Result<(), DisplayError> {
    if !screen.is_dirty() {
        return Ok(());
    }

    backend.clear()?;
    for (row, line) in screen.lines().enumerate() {
        if !line.is_empty() {
            backend.draw_text(row as u8, 0, line)?;
        }
    }
    backend.flush()?;

    screen.mark_clean();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::{String, Vec};

    /// Backend that records drawn rows for assertions
    struct MockBackend {
        drawn: Vec<(u8, String<{ SCREEN_COLS }>), 16>,
        clears: usize,
        flushes: usize,
    }

    impl MockBackend {
        fn new() -> Self {
            Self {
                drawn: Vec::new(),
                clears: 0,
                flushes: 0,
            }
        }
    }

    impl DisplayBackend for MockBackend {
        fn clear(&mut self) -> Result<(), DisplayError> {
            self.clears += 1;
            self.drawn.clear();
            Ok(())
        }

        fn draw_text(&mut self, row: u8, _col: u8, text: &str) -> Result<(), DisplayError> {
            let mut line = String::new();
            line.push_str(text).map_err(|_| DisplayError::BufferOverflow)?;
            self.drawn
                .push((row, line))
                .map_err(|_| DisplayError::BufferOverflow)?;
            Ok(())
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            self.flushes += 1;
            Ok(())
        }

        fn dimensions(&self) -> (u8, u8) {
            (SCREEN_COLS as u8, SCREEN_ROWS as u8)
        }

        fn is_ready(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_present_draws_nonempty_rows() {
        let mut screen = Screen::new();
        screen.set_line(0, "Title");
        screen.set_line(3, "Body");

        let mut backend = MockBackend::new();
        present(&mut screen, &mut backend).unwrap();

        assert_eq!(backend.clears, 1);
        assert_eq!(backend.flushes, 1);
        assert_eq!(backend.drawn.len(), 2);
        assert_eq!(backend.drawn[0].0, 0);
        assert_eq!(backend.drawn[0].1.as_str(), "Title");
        assert_eq!(backend.drawn[1].0, 3);
        assert_eq!(backend.drawn[1].1.as_str(), "Body");
    }

    #[test]
    fn test_present_skips_clean_screen() {
        let mut screen = Screen::new();
        screen.set_line(0, "Once");

        let mut backend = MockBackend::new();
        present(&mut screen, &mut backend).unwrap();
        present(&mut screen, &mut backend).unwrap();

        // Second present is a no-op until the screen changes
        assert_eq!(backend.clears, 1);
        assert_eq!(backend.flushes, 1);

        screen.set_line(0, "Twice");
        present(&mut screen, &mut backend).unwrap();
        assert_eq!(backend.clears, 2);
    }
}
