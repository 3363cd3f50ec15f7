//! Grade values and parsing of raw grade text

use crate::core::error::ValidationError;
use std::fmt;

/// A whole-number grade in `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Grade(u8);

impl Grade {
    /// Lowest accepted grade
    pub const MIN: u8 = 0;
    /// Highest accepted grade
    pub const MAX: u8 = 100;

    /// Create a grade, returning `None` when `value` is above [`Grade::MAX`]
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The numeric grade
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse operator input into a [`Grade`].
///
/// The text is trimmed first. Text containing a `.` is read as a decimal
/// number and accepted only when it has no fractional part (`"95.0"`,
/// `"95."`); anything else must be a plain integer with an optional sign.
/// A single `_` between two digits groups digits and is ignored (`"1_00"`).
/// The value must then lie in `0..=100`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidGrade`] for empty, non-numeric,
/// fractional or out-of-range input.
pub fn parse_grade(raw: &str) -> Result<Grade, ValidationError> {
    let text = raw.trim();
    let invalid = || ValidationError::InvalidGrade {
        input: text.to_string(),
    };

    if text.is_empty() {
        return Err(invalid());
    }
    let digits = strip_digit_separators(text).ok_or_else(invalid)?;

    let value = if digits.contains('.') {
        let number: f64 = digits.parse().map_err(|_| invalid())?;
        if !number.is_finite() || number.fract() != 0.0 {
            return Err(invalid());
        }
        if number < f64::from(Grade::MIN) || number > f64::from(Grade::MAX) {
            return Err(invalid());
        }
        whole_number(number)
    } else {
        let number: i64 = digits.parse().map_err(|_| invalid())?;
        u8::try_from(number).map_err(|_| invalid())?
    };

    Grade::new(value).ok_or_else(invalid)
}

/// Remove `_` digit separators. Returns `None` if any `_` is not directly
/// between two ASCII digits.
fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    for (i, ch) in text.char_indices() {
        if ch != '_' {
            out.push(ch);
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        if !(before.is_some_and(|b| b.is_ascii_digit()) && after.is_some_and(|b| b.is_ascii_digit())) {
            return None;
        }
    }
    Some(out)
}

/// Narrow an integral value already checked to lie in `0..=100`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_number(number: f64) -> u8 {
    number as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(raw: &str) -> Option<u8> {
        parse_grade(raw).ok().map(Grade::value)
    }

    #[test]
    fn test_whole_numbers() {
        assert_eq!(parsed("95"), Some(95));
        assert_eq!(parsed("  0 "), Some(0));
        assert_eq!(parsed("100"), Some(100));
        assert_eq!(parsed("+70"), Some(70));
        assert_eq!(parsed("-0"), Some(0));
    }

    #[test]
    fn test_decimal_forms() {
        assert_eq!(parsed("95.0"), Some(95));
        assert_eq!(parsed("95."), Some(95));
        assert_eq!(parsed("100.000"), Some(100));
        assert_eq!(parsed("9.5e1"), Some(95));
        assert_eq!(parsed("95.5"), None);
        assert_eq!(parsed("100.5"), None);
        assert_eq!(parsed("."), None);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(parsed("101"), None);
        assert_eq!(parsed("-1"), None);
        assert_eq!(parsed("-1.0"), None);
        assert_eq!(parsed("255"), None);
        assert_eq!(parsed("99999999999999999999"), None);
    }

    #[test]
    fn test_not_numbers() {
        assert_eq!(parsed(""), None);
        assert_eq!(parsed("   "), None);
        assert_eq!(parsed("abc"), None);
        assert_eq!(parsed("1e2"), None);
        assert_eq!(parsed("nan"), None);
    }

    #[test]
    fn test_digit_separators() {
        assert_eq!(parsed("1_00"), Some(100));
        assert_eq!(parsed("9_5"), Some(95));
        assert_eq!(parsed("9_5.0"), Some(95));
        assert_eq!(parsed("+7_0"), Some(70));
        assert_eq!(parsed("_95"), None);
        assert_eq!(parsed("95_"), None);
        assert_eq!(parsed("9__5"), None);
        assert_eq!(parsed("9_.5"), None);
        assert_eq!(parsed("95._0"), None);
        assert_eq!(parsed("1_01"), None);
    }

    #[test]
    fn test_error_keeps_trimmed_input() {
        assert_eq!(
            parse_grade(" 95.5 "),
            Err(ValidationError::InvalidGrade {
                input: "95.5".to_string()
            })
        );
    }

    #[test]
    fn test_grade_bounds() {
        assert!(Grade::new(100).is_some());
        assert!(Grade::new(101).is_none());
    }
}
