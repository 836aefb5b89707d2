//! Screen buffer types
//!
//! Provides a character-based screen buffer for the handheld's text-mode
//! display.

use heapless::String;

/// Number of character rows on the 128x64 panel
pub const SCREEN_ROWS: usize = 8;

/// Number of character columns on the 128x64 panel
pub const SCREEN_COLS: usize = 21;

/// Maximum characters per line
pub const LINE_LEN: usize = SCREEN_COLS;

/// Screen buffer for the text-mode display
///
/// Apps render into this buffer; the host presents it to a
/// `DisplayBackend` implementation.
#[derive(Clone)]
pub struct Screen {
    /// Current display content
    lines: [String<LINE_LEN>; SCREEN_ROWS],
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            dirty: true,
        }
    }

    /// Clear the entire screen
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.dirty = true;
    }

    /// Set the content of a specific row
    ///
    /// Text wider than the display is truncated at the right edge,
    /// backing off to a character boundary so a multi-byte character
    /// straddling the edge is dropped whole. Rows outside the screen are
    /// ignored.
    pub fn set_line(&mut self, row: usize, text: &str) {
        if row < SCREEN_ROWS {
            self.lines[row].clear();
            let text = if text.len() > LINE_LEN {
                let mut end = LINE_LEN;
                while !text.is_char_boundary(end) {
                    end -= 1;
                }
                &text[..end]
            } else {
                text
            };
            let _ = self.lines[row].push_str(text);
            self.dirty = true;
        }
    }

    /// Get the content of a specific row
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Mark screen as dirty (needs redraw)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Get all lines as an iterator
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.as_str())
    }

    /// Get number of rows
    pub const fn rows(&self) -> usize {
        SCREEN_ROWS
    }

    /// Get number of columns
    pub const fn cols(&self) -> usize {
        SCREEN_COLS
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_screen_is_empty() {
        let screen = Screen::new();
        for line in screen.lines() {
            assert!(line.is_empty());
        }
        assert!(screen.is_dirty());
    }

    #[test]
    fn test_set_line_truncates_at_width() {
        let mut screen = Screen::new();
        screen.set_line(0, "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(screen.get_line(0), Some("abcdefghijklmnopqrstu"));
        assert_eq!(screen.get_line(0).unwrap().len(), SCREEN_COLS);
    }

    #[test]
    fn test_set_line_truncates_on_char_boundary() {
        let mut screen = Screen::new();
        // 20 ASCII bytes, then a 2-byte character straddling column 21
        let mut text = heapless::String::<32>::new();
        for _ in 0..20 {
            let _ = text.push('a');
        }
        let _ = text.push('é');
        let _ = text.push('x');

        screen.set_line(0, text.as_str());
        assert_eq!(screen.get_line(0), Some("aaaaaaaaaaaaaaaaaaaa"));
    }

    #[test]
    fn test_set_line_out_of_range_is_noop() {
        let mut screen = Screen::new();
        screen.mark_clean();
        screen.set_line(SCREEN_ROWS, "invisible");
        assert!(!screen.is_dirty());
        assert_eq!(screen.get_line(SCREEN_ROWS), None);
    }

    #[test]
    fn test_clear_resets_content() {
        let mut screen = Screen::new();
        screen.set_line(2, "gone");
        screen.mark_clean();
        screen.clear();
        assert_eq!(screen.get_line(2), Some(""));
        assert!(screen.is_dirty());
    }

    #[test]
    fn test_dirty_tracking() {
        let mut screen = Screen::new();
        screen.mark_clean();
        assert!(!screen.is_dirty());
        screen.set_line(1, "x");
        assert!(screen.is_dirty());
        screen.mark_clean();
        screen.mark_dirty();
        assert!(screen.is_dirty());
    }
}
