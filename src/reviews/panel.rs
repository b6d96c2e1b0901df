//! Reviews panel

use std::fmt;

use crate::reviews::Review;

/// Shown in place of the list before any review arrives.
pub const EMPTY_REVIEWS_MESSAGE: &str = "There are no reviews yet.";

/// Tabs of the reviews panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProductTab {
    /// List of submitted reviews.
    #[default]
    Reviews,

    /// The review form.
    MakeAReview,
}

impl ProductTab {
    /// Every tab, in display order.
    pub const ALL: [ProductTab; 2] = [ProductTab::Reviews, ProductTab::MakeAReview];

    /// Tab header label.
    pub fn label(self) -> &'static str {
        match self {
            ProductTab::Reviews => "Reviews",
            ProductTab::MakeAReview => "Make a Review",
        }
    }
}

impl fmt::Display for ProductTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Received reviews and the selected tab.
///
/// Switching tabs only changes which view is shown; the list and the form keep their state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewsPanel {
    reviews: Vec<Review>,
    selected_tab: ProductTab,
}

impl ReviewsPanel {
    /// Create an empty panel showing the reviews tab.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a received review.
    pub fn push(&mut self, review: Review) {
        self.reviews.push(review);
    }

    /// Reviews in the order they were received.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Number of reviews.
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    /// Whether no review has arrived yet.
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Text shown in place of the list while it is empty.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_REVIEWS_MESSAGE)
    }

    /// The visible tab.
    pub fn selected_tab(&self) -> ProductTab {
        self.selected_tab
    }

    /// Show `tab`.
    pub fn select_tab(&mut self, tab: ProductTab) {
        self.selected_tab = tab;
    }

    /// Whether `tab` is visible.
    pub fn is_selected(&self, tab: ProductTab) -> bool {
        self.selected_tab == tab
    }
}
