//! Review form
//!
//! The form is always editable. Each submit runs validation and either produces a [`Review`]
//! (clearing the fields) or appends one [`MissingField`] per empty field to the error list.
//!
//! The error list only grows: it is not reset before a new validation pass, nor after a
//! successful one, so repeated failed submits list the same message again.

use smallvec::SmallVec;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    events::EventChannel,
    reviews::{Rating, Review, ReviewSubmitted},
};

/// A required field left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MissingField {
    /// No reviewer name.
    #[error("Name required.")]
    Name,

    /// No review text.
    #[error("Review required.")]
    Review,

    /// No rating picked.
    #[error("Rating required.")]
    Rating,
}

/// A submit attempt that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Review is missing {} required field(s)", .missing.len())]
pub struct ReviewRejected {
    /// Missing fields, in form order.
    pub missing: SmallVec<[MissingField; 3]>,
}

/// Outcome of the most recent submit, kept until a field is edited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormState {
    /// Fields are being edited.
    #[default]
    Editing,

    /// The last submit produced a review.
    Submitted,

    /// The last submit failed validation.
    Rejected,
}

/// Review form state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewForm {
    name: String,
    review: String,
    rating: Option<Rating>,
    errors: Vec<MissingField>,
    state: FormState,
}

impl ReviewForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reviewer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Review text.
    pub fn review(&self) -> &str {
        &self.review
    }

    /// Picked rating.
    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    /// Set the reviewer name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.state = FormState::Editing;
    }

    /// Set the review text.
    pub fn set_review(&mut self, review: impl Into<String>) {
        self.review = review.into();
        self.state = FormState::Editing;
    }

    /// Set or clear the rating.
    pub fn set_rating(&mut self, rating: Option<Rating>) {
        self.rating = rating;
        self.state = FormState::Editing;
    }

    /// Outcome of the most recent submit.
    pub fn state(&self) -> FormState {
        self.state
    }

    /// Every validation error recorded so far, oldest first.
    pub fn errors(&self) -> &[MissingField] {
        &self.errors
    }

    /// Validation errors as display messages.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Whether any validation error has been recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Validate the fields and build a review.
    ///
    /// On success the three fields are cleared. On failure the fields keep their values and
    /// the missing ones are appended to the error list.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewRejected`] listing the missing fields.
    pub fn submit(&mut self) -> Result<Review, ReviewRejected> {
        let missing = self.missing_fields();

        let Some(rating) = self.rating.filter(|_| missing.is_empty()) else {
            self.errors.extend(missing.iter().copied());
            self.state = FormState::Rejected;

            warn!(missing = missing.len(), "rejected review");

            return Err(ReviewRejected { missing });
        };

        let review = Review {
            name: std::mem::take(&mut self.name),
            review: std::mem::take(&mut self.review),
            rating,
        };

        self.rating = None;
        self.state = FormState::Submitted;

        info!(rating = %review.rating, "submitted review");

        Ok(review)
    }

    /// Validate, and on success publish the review on `channel`.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewRejected`] listing the missing fields; nothing is published.
    pub fn submit_to(
        &mut self,
        channel: &EventChannel<ReviewSubmitted>,
    ) -> Result<Review, ReviewRejected> {
        let review = self.submit()?;

        channel.publish(&review);

        Ok(review)
    }

    fn missing_fields(&self) -> SmallVec<[MissingField; 3]> {
        let mut missing = SmallVec::new();

        if self.name.is_empty() {
            missing.push(MissingField::Name);
        }

        if self.review.is_empty() {
            missing.push(MissingField::Review);
        }

        if self.rating.is_none() {
            missing.push(MissingField::Rating);
        }

        missing
    }
}
