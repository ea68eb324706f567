//! Arbitrary-precision non-negative decimal numbers

use std::cmp::Ordering;
use std::fmt;

/// A non-negative decimal integer of unbounded magnitude.
///
/// Stored as canonical digit text (no leading zeros, `"0"` for zero), so ordering
/// compares lengths first and then digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number(String);

impl Number {
    /// Parse a run of ASCII digits. Signs, whitespace and the empty string are rejected.
    pub fn parse(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            Some(Number("0".to_string()))
        } else {
            Some(Number(trimmed.to_string()))
        }
    }

    /// Canonical digit text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Narrow to `u64`, or `None` if the value does not fit.
    pub fn to_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Number(value.to_string())
    }
}

impl PartialEq<u64> for Number {
    fn eq(&self, other: &u64) -> bool {
        self.to_u64() == Some(*other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
