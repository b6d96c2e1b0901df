//! Reviews

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::events::Topic;

pub mod form;
pub mod panel;

/// Errors parsing a rating.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingError {
    /// The rating is outside 1 to 5.
    #[error("Rating must be between 1 and 5, got {0}")]
    OutOfRange(u8),

    /// The rating is not a number.
    #[error("Invalid rating: {0}")]
    Invalid(String),
}

/// Star rating from 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

impl Rating {
    /// Lowest rating.
    pub const MIN: u8 = 1;

    /// Highest rating.
    pub const MAX: u8 = 5;

    /// Create a rating.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] if `value` is not between 1 and 5.
    pub fn new(value: u8) -> Result<Self, RatingError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingError::OutOfRange(value))
        }
    }

    /// The rating as a number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Every rating, highest first, in the order the rating picker lists them.
    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).rev().map(Rating)
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Rating {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_err| RatingError::Invalid(s.to_string()))?;

        Self::new(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A submitted review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Reviewer name
    pub name: String,

    /// Review text
    pub review: String,

    /// Star rating
    pub rating: Rating,
}

/// Topic carrying reviews from the review form to the product page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewSubmitted;

impl Topic for ReviewSubmitted {
    type Payload = Review;

    const NAME: &'static str = "review-submitted";
}
