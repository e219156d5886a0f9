//! Product rating on a five-star scale.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when building a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RatingError {
    /// The input is not a number.
    #[error("rating is not a number: {0}")]
    Invalid(String),
    /// The value is outside the 0-5 scale.
    #[error("rating must be between {min} and {max} (got {value})")]
    OutOfRange {
        /// The rejected value.
        value: f64,
        /// Lowest allowed rating.
        min: f64,
        /// Highest allowed rating.
        max: f64,
    },
}

/// A rating between 0.0 and 5.0 inclusive.
///
/// ## Examples
///
/// ```
/// use producthub_core::Rating;
///
/// let rating = Rating::new(4.5).unwrap();
/// assert_eq!(rating.stars(), "★★★★⯪");
/// assert!(Rating::new(5.1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(f64);

impl Rating {
    /// Lowest rating.
    pub const MIN: f64 = 0.0;
    /// Highest rating.
    pub const MAX: f64 = 5.0;
    /// Number of glyphs rendered by [`Rating::stars`].
    pub const STAR_COUNT: u8 = 5;

    const FULL_STAR: char = '★';
    const HALF_STAR: char = '⯪';
    const EMPTY_STAR: char = '☆';

    /// Create a rating.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] if `value` is NaN or outside `[0, 5]`.
    pub fn new(value: f64) -> Result<Self, RatingError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(RatingError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Parse a rating from user input such as `"4.8"`.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::Invalid`] for non-numeric input and
    /// [`RatingError::OutOfRange`] for values outside `[0, 5]`.
    pub fn parse(s: &str) -> Result<Self, RatingError> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| RatingError::Invalid(s.to_owned()))?;
        Self::new(value)
    }

    /// Get the rating value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Render the rating as five star glyphs.
    ///
    /// Each whole point is a full star; a fractional part of at least one
    /// half adds a half star; the rest are empty. The half star uses its own
    /// glyph (`⯪`) so that 4.5 and 5 render differently in plain text.
    #[must_use]
    pub fn stars(&self) -> String {
        let value = self.0;
        let whole = value.floor();
        let has_half = value - whole >= 0.5;

        (0..Self::STAR_COUNT)
            .map(|i| {
                let i = f64::from(i);
                if i < whole {
                    Self::FULL_STAR
                } else if i == whole && has_half {
                    Self::HALF_STAR
                } else {
                    Self::EMPTY_STAR
                }
            })
            .collect()
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

impl TryFrom<f64> for Rating {
    type Error = RatingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}
