//! Star rating — the value behind the review form's star widget.

use crate::error::ValidationError;

/// Visual state of a single star.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarFill {
    Filled,
    Empty,
}

impl StarFill {
    /// CSS class that draws this state.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Filled => "bi-star-fill",
            Self::Empty => "bi-star",
        }
    }

    /// The class to remove when switching to this state.
    #[must_use]
    pub fn opposite_class(self) -> &'static str {
        match self {
            Self::Filled => Self::Empty.class(),
            Self::Empty => Self::Filled.class(),
        }
    }
}

/// A rating between `0` (unset) and `max` stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    value: u8,
    max: u8,
}

impl StarRating {
    /// Create a rating with an initial value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RatingOutOfRange`] when `value > max`.
    pub fn new(value: u8, max: u8) -> Result<Self, ValidationError> {
        if value > max {
            return Err(ValidationError::RatingOutOfRange { value, max });
        }
        Ok(Self { value, max })
    }

    /// Parse the hidden input value the way the browser's `parseInt` reads it.
    ///
    /// Leading whitespace and a `+` sign are skipped, then only the leading
    /// digits count, so `"3.5"` reads as 3. Text without leading digits
    /// (including negative numbers) reads as 0, values above `max` are clamped.
    #[must_use]
    pub fn parse_lenient(raw: &str, max: u8) -> Self {
        let trimmed = raw.trim_start();
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        let digits = &unsigned[..end];
        let value = if digits.is_empty() {
            0
        } else {
            // Overflowing u8 still means "more stars than there are".
            digits.parse::<u8>().map_or(max, |parsed| parsed.min(max))
        };
        Self { value, max }
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.value
    }

    /// Handle a click on the star with the 1-based position `star`.
    ///
    /// Clicking the star matching the current value resets the rating to 0.
    /// Positions outside `1..=max` are ignored.
    pub fn click(&mut self, star: u8) -> u8 {
        if star == 0 || star > self.max {
            return self.value;
        }
        self.value = if star == self.value { 0 } else { star };
        self.value
    }

    /// Fill state of every star, in display order.
    #[must_use]
    pub fn fills(self) -> Vec<StarFill> {
        (0..self.max)
            .map(|index| {
                if index < self.value {
                    StarFill::Filled
                } else {
                    StarFill::Empty
                }
            })
            .collect()
    }
}
