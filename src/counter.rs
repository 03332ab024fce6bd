//! Character counter for length-limited drafts.

use std::fmt;

/// Colour level of a character counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    /// At most 75% of the limit used.
    Success,
    /// More than 75% used.
    Info,
    /// More than 90% used.
    Warning,
}

impl CounterLevel {
    /// Returns CSS class used to colour the counter.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "text-success",
            Self::Info => "text-info",
            Self::Warning => "text-warning",
        }
    }
}

/// Character count of a draft against its maximum length.
///
/// Counts Unicode scalar values, so `"é"` and `"😀"` each count as one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterCount {
    current: usize,
    max: usize,
}

impl CharacterCount {
    /// Counts characters in `text` against `max`.
    pub fn new(text: &str, max: usize) -> Self {
        Self {
            current: text.chars().count(),
            max,
        }
    }

    /// Returns number of characters in the draft.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns maximum accepted number of characters.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Returns characters left before the limit, zero once exceeded.
    pub fn remaining(&self) -> usize {
        self.max.saturating_sub(self.current)
    }

    /// Returns true when the draft is longer than the maximum.
    pub fn is_exceeded(&self) -> bool {
        self.current > self.max
    }

    /// Returns colour level for the current usage ratio.
    ///
    /// Thresholds are strict: exactly 90% is still [`CounterLevel::Info`].
    pub fn level(&self) -> CounterLevel {
        // current / max > 9 / 10, widened so any usize limit fits
        let current = self.current as u128;
        let max = self.max as u128;
        if current * 10 > max * 9 {
            CounterLevel::Warning
        } else if current * 4 > max * 3 {
            CounterLevel::Info
        } else {
            CounterLevel::Success
        }
    }
}

impl fmt::Display for CharacterCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_display() {
        let count = CharacterCount::new("hello", 100);
        assert_eq!(count.to_string(), "5/100");
    }

    #[test]
    fn test_count_unicode_scalars() {
        // Arrange
        let text = "héllo 😀";

        // Act
        let count = CharacterCount::new(text, 10);

        // Assert
        assert_eq!(count.current(), 7, "Each scalar value counts once");
        assert_eq!(count.remaining(), 3);
    }

    #[test]
    fn test_level_success() {
        let count = CharacterCount::new(&"a".repeat(75), 100);
        assert_eq!(count.level(), CounterLevel::Success);
    }

    #[test]
    fn test_level_info() {
        assert_eq!(
            CharacterCount::new(&"a".repeat(76), 100).level(),
            CounterLevel::Info
        );
        assert_eq!(
            CharacterCount::new(&"a".repeat(90), 100).level(),
            CounterLevel::Info
        );
    }

    #[test]
    fn test_level_warning() {
        assert_eq!(
            CharacterCount::new(&"a".repeat(91), 100).level(),
            CounterLevel::Warning
        );
    }

    #[test]
    fn test_exceeded() {
        // Arrange
        let at_limit = CharacterCount::new("abc", 3);
        let over_limit = CharacterCount::new("abcd", 3);

        // Assert
        assert!(!at_limit.is_exceeded(), "Limit itself is allowed");
        assert!(over_limit.is_exceeded());
        assert_eq!(over_limit.remaining(), 0);
        assert_eq!(over_limit.level(), CounterLevel::Warning);
    }

    #[test]
    fn test_level_with_largest_limit() {
        // Arrange
        let count = CharacterCount::new("a", usize::MAX);

        // Act
        let level = count.level();

        // Assert
        assert_eq!(level, CounterLevel::Success);
        assert!(!count.is_exceeded());
        assert_eq!(count.remaining(), usize::MAX - 1);
    }

    #[test]
    fn test_level_near_largest_limit() {
        let count = CharacterCount {
            current: usize::MAX,
            max: usize::MAX,
        };
        assert_eq!(count.level(), CounterLevel::Warning);
    }

    #[test]
    fn test_level_css_class() {
        assert_eq!(CounterLevel::Success.css_class(), "text-success");
        assert_eq!(CounterLevel::Info.css_class(), "text-info");
        assert_eq!(CounterLevel::Warning.css_class(), "text-warning");
    }
}
