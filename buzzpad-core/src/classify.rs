//! Divisibility classification
//!
//! The rule every demo app shares: an integer is labelled by its
//! divisibility against 15, 5, and 3. The label strings differ per app
//! (FizzBuzz vs SkidBuzz) so they are carried as data.

use core::fmt::Write;

use heapless::String;

/// Capacity of a formatted result, including the numeric prefix and label
pub const RESULT_LEN: usize = 32;

/// A formatted classification result
pub type ResultString = String<RESULT_LEN>;

/// Label strings for one app variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LabelSet {
    /// Label for multiples of 15
    pub combined: &'static str,
    /// Label for multiples of 5 (that are not multiples of 15)
    pub by_five: &'static str,
    /// Label for multiples of 3 (that are not multiples of 15)
    pub by_three: &'static str,
}

/// The classic variant
pub const FIZZBUZZ: LabelSet = LabelSet {
    combined: "FizzBuzz",
    by_five: "Fizz",
    by_three: "Buzz",
};

/// The alternate variant
pub const SKIDBUZZ: LabelSet = LabelSet {
    combined: "SkidBuzz",
    by_five: "Skid",
    by_three: "Buzz",
};

/// Classify `n` against the given label set
///
/// Formats `"{n}: {label}"`, or just `"{n}"` when no rule matches. The
/// mod-15 case must be tested first; a multiple of 15 would otherwise
/// match the mod-5 arm. Output wider than the fixed result capacity is
/// truncated rather than erroring.
pub fn classify(n: u32, labels: &LabelSet) -> ResultString {
    let mut out = ResultString::new();

    let label = if n % 15 == 0 {
        Some(labels.combined)
    } else if n % 5 == 0 {
        Some(labels.by_five)
    } else if n % 3 == 0 {
        Some(labels.by_three)
    } else {
        None
    };

    let _ = match label {
        Some(label) => write!(out, "{}: {}", n, label),
        None => write!(out, "{}", n),
    };

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fizzbuzz_labels() {
        assert_eq!(classify(15, &FIZZBUZZ).as_str(), "15: FizzBuzz");
        assert_eq!(classify(5, &FIZZBUZZ).as_str(), "5: Fizz");
        assert_eq!(classify(9, &FIZZBUZZ).as_str(), "9: Buzz");
        assert_eq!(classify(7, &FIZZBUZZ).as_str(), "7");
    }

    #[test]
    fn test_skidbuzz_labels() {
        assert_eq!(classify(30, &SKIDBUZZ).as_str(), "30: SkidBuzz");
        assert_eq!(classify(10, &SKIDBUZZ).as_str(), "10: Skid");
        assert_eq!(classify(3, &SKIDBUZZ).as_str(), "3: Buzz");
        assert_eq!(classify(11, &SKIDBUZZ).as_str(), "11");
    }

    #[test]
    fn test_multiple_of_fifteen_never_plain_five() {
        // The combined arm has priority over the mod-5 arm
        for n in (0..=99999u32).step_by(15) {
            assert!(classify(n, &FIZZBUZZ).ends_with("FizzBuzz"));
        }
    }

    #[test]
    fn test_exhaustive_entry_range() {
        // Every value representable by the 5-digit entry buffer
        for n in 0..=99999u32 {
            let result = classify(n, &FIZZBUZZ);
            if n % 15 == 0 {
                assert!(result.ends_with(": FizzBuzz"));
            } else if n % 5 == 0 {
                assert!(result.ends_with(": Fizz"));
            } else if n % 3 == 0 {
                assert!(result.ends_with(": Buzz"));
            } else {
                let mut plain = ResultString::new();
                let _ = core::fmt::write(&mut plain, format_args!("{}", n));
                assert_eq!(result, plain);
            }
        }
    }

    #[test]
    fn test_zero_is_combined() {
        assert_eq!(classify(0, &FIZZBUZZ).as_str(), "0: FizzBuzz");
    }

    #[test]
    fn test_result_fits_capacity() {
        // Widest case in the entry range: 5 digits + ": " + longest label
        let widest = classify(99990, &SKIDBUZZ);
        assert!(widest.len() <= RESULT_LEN);
        assert_eq!(widest.as_str(), "99990: SkidBuzz");
    }
}
