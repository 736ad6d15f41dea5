//! Inclusive ranges of character codes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::IntervalSetError;

/// Raw character code. No range check is applied; callers decide the alphabet.
pub type CharCode = u32;

/// Inclusive code range `[start, end]` with `start <= end`.
///
/// Serialized as a two-element array `[start, end]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(CharCode, CharCode)", into = "(CharCode, CharCode)")]
pub struct Interval {
    pub(crate) start: CharCode,
    pub(crate) end: CharCode,
}

impl Interval {
    /// Create an interval.
    ///
    /// # Panics
    /// If `start > end`. Use `Interval::try_from((start, end))` for untrusted input.
    pub fn new(start: CharCode, end: CharCode) -> Self {
        assert!(start <= end, "Interval: inverted bounds [{start}-{end}]");
        Self { start, end }
    }

    /// Single-code interval.
    pub fn single(c: CharCode) -> Self {
        Self { start: c, end: c }
    }

    pub fn start(&self) -> CharCode {
        self.start
    }

    pub fn end(&self) -> CharCode {
        self.end
    }

    /// Number of codes covered.
    pub fn size(&self) -> u64 {
        u64::from(self.end - self.start) + 1
    }

    pub fn contains(&self, c: CharCode) -> bool {
        self.start <= c && c <= self.end
    }

    pub fn contains_interval(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether `other` overlaps or touches this interval.
    pub(crate) fn touches(&self, other: &Interval) -> bool {
        self.end.saturating_add(1) >= other.start && self.start <= other.end.saturating_add(1)
    }
}

impl TryFrom<(CharCode, CharCode)> for Interval {
    type Error = IntervalSetError;

    fn try_from((start, end): (CharCode, CharCode)) -> Result<Self, Self::Error> {
        if start > end {
            return Err(IntervalSetError::InvertedInterval { start, end });
        }
        Ok(Self { start, end })
    }
}

impl From<Interval> for (CharCode, CharCode) {
    fn from(i: Interval) -> Self {
        (i.start, i.end)
    }
}

fn is_printable(c: CharCode) -> bool {
    c > 31 && c < 127
}

fn write_code(f: &mut fmt::Formatter<'_>, c: CharCode) -> fmt::Result {
    match char::from_u32(c) {
        Some(ch) if is_printable(c) => write!(f, "'{ch}'"),
        _ => write!(f, "{c}"),
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        write_code(f, self.start)?;
        if self.start != self.end {
            f.write_str("-")?;
            write_code(f, self.end)?;
        }
        f.write_str("]")
    }
}
