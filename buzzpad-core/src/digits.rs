//! Bounded digit buffer for numeric entry
//!
//! The user composes a number one decimal digit at a time with the d-pad:
//! Right appends a digit, Left removes one, Up/Down cycle the last digit
//! through 0-9. The buffer is fixed-capacity; growth past the limit is a
//! silent no-op.

use heapless::Vec;

/// Maximum digits in the entry buffer (values 0-99999)
pub const MAX_DIGITS: usize = 5;

/// Ordered sequence of ASCII decimal digits, most significant first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitBuffer {
    digits: Vec<u8, MAX_DIGITS>,
}

impl DigitBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self { digits: Vec::new() }
    }

    /// Remove all digits
    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Number of digits currently present
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns true when no digits are present
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns true when the buffer is at capacity
    pub fn is_full(&self) -> bool {
        self.digits.is_full()
    }

    /// The buffer content as displayed, leading zeros included
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored
        core::str::from_utf8(&self.digits).unwrap_or("")
    }

    /// Append a '0' digit; no-op at capacity
    ///
    /// Returns false when the buffer was already full.
    pub fn push_zero(&mut self) -> bool {
        self.digits.push(b'0').is_ok()
    }

    /// Remove the last digit; no-op when empty
    ///
    /// Returns false when the buffer was already empty.
    pub fn pop(&mut self) -> bool {
        self.digits.pop().is_some()
    }

    /// Cycle the last digit up, 9 wrapping to 0; no-op when empty
    pub fn increment_last(&mut self) {
        if let Some(d) = self.digits.last_mut() {
            *d = if *d == b'9' { b'0' } else { *d + 1 };
        }
    }

    /// Cycle the last digit down, 0 wrapping to 9; no-op when empty
    pub fn decrement_last(&mut self) {
        if let Some(d) = self.digits.last_mut() {
            *d = if *d == b'0' { b'9' } else { *d - 1 };
        }
    }

    /// Parse the buffer as a base-10 integer
    ///
    /// Leading zeros are stripped naturally by the parse. Five decimal
    /// digits cap the value at 99999, well inside u32. An empty buffer
    /// parses as 0; callers guard confirmation on `is_empty`.
    pub fn value(&self) -> u32 {
        self.digits
            .iter()
            .fold(0u32, |acc, d| acc * 10 + u32::from(d - b'0'))
    }
}
