use serde::{Deserialize, Serialize};

use super::errors::ProductError;

/// Inclusive bounds accepted for a submitted rating.
pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

/// A rating as submitted by a client. Valid by construction: values outside
/// [MIN_RATING, MAX_RATING] never become a `Rating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(i32);

impl Rating {
    pub fn new(value: i32) -> Result<Self, ProductError> {
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(ProductError::RatingOutOfRange);
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_values_within_bounds() {
        for value in MIN_RATING..=MAX_RATING {
            let rating = Rating::new(value);
            assert!(rating.is_ok());
            assert_eq!(rating.unwrap().value(), value);
        }
    }

    #[test]
    fn should_reject_values_outside_bounds() {
        for value in [0, 6, -1, 42] {
            assert!(matches!(
                Rating::new(value),
                Err(ProductError::RatingOutOfRange)
            ));
        }
    }
}
