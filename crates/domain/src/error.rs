//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts via `#[from]`.

/// A domain invariant was violated while building a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Identifiers must not be blank.
    #[error("identifier must not be empty")]
    EmptyId,

    /// Services must carry a display name.
    #[error("name must not be empty")]
    EmptyName,

    /// A rating was outside `0..=max`.
    #[error("rating {value} is out of range 0..={max}")]
    RatingOutOfRange { value: u8, max: u8 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_rating_out_of_range() {
        let err = ValidationError::RatingOutOfRange { value: 7, max: 5 };
        assert_eq!(err.to_string(), "rating 7 is out of range 0..=5");
    }
}
