//! Storefront
//!
//! Composition of the product page and the cart. The product page owns the review channel and
//! is its only subscriber; the review form publishes through it on a successful submit.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::warn;

use crate::{
    cart::{Cart, CartError, CartLine},
    events::{EventChannel, SubscriptionKey},
    fixtures::{self, FixtureError},
    products::Product,
    reviews::{
        Review, ReviewSubmitted,
        form::{ReviewForm, ReviewRejected},
        panel::{ProductTab, ReviewsPanel},
    },
    variants::SelectionError,
};

/// Shipping message for premium members.
pub const PREMIUM_SHIPPING: &str = "Free Shipping for Premium Potion Seller Members!";

/// Shipping message for everyone else.
pub const STANDARD_SHIPPING: &str = "2gp Shipping";

/// Shipping message for a customer.
pub fn shipping_message(premium: bool) -> &'static str {
    if premium {
        PREMIUM_SHIPPING
    } else {
        STANDARD_SHIPPING
    }
}

/// Membership line, e.g. `Premium Status: true`.
pub fn premium_status(premium: bool) -> String {
    format!("Premium Status: {premium}")
}

/// A product with its review form and reviews panel.
#[derive(Debug)]
pub struct ProductPage {
    product: Product,
    form: ReviewForm,
    reviews: Arc<Mutex<ReviewsPanel>>,
    channel: EventChannel<ReviewSubmitted>,
    subscription: SubscriptionKey,
}

impl ProductPage {
    /// Create a page and subscribe its reviews panel to the review channel.
    pub fn new(product: Product) -> Self {
        let channel = EventChannel::new();
        let reviews = Arc::new(Mutex::new(ReviewsPanel::new()));
        let inbox = Arc::clone(&reviews);

        let subscription = channel.subscribe(move |review: &Review| {
            lock(&inbox).push(review.clone());
        });

        Self {
            product,
            form: ReviewForm::new(),
            reviews,
            channel,
            subscription,
        }
    }

    /// The product.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Select the variant at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::OutOfRange`] if `index` is not a valid variant index.
    pub fn select_variant(&mut self, index: usize) -> Result<(), SelectionError> {
        self.product.variants_mut().select(index)?;

        Ok(())
    }

    /// Shipping message for a customer.
    pub fn shipping_message(&self, premium: bool) -> &'static str {
        shipping_message(premium)
    }

    /// The review form.
    pub fn form(&self) -> &ReviewForm {
        &self.form
    }

    /// Mutable access to the review form, for editing fields.
    pub fn form_mut(&mut self) -> &mut ReviewForm {
        &mut self.form
    }

    /// Submit the review form, publishing the review on success.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewRejected`] when required fields are missing.
    pub fn submit_review(&mut self) -> Result<Review, ReviewRejected> {
        self.form.submit_to(&self.channel)
    }

    /// A handle to the review channel, for additional subscribers.
    pub fn review_channel(&self) -> EventChannel<ReviewSubmitted> {
        self.channel.clone()
    }

    /// Reviews received so far.
    pub fn reviews(&self) -> Vec<Review> {
        lock(&self.reviews).reviews().to_vec()
    }

    /// Text shown in place of the reviews list while no review has arrived.
    pub fn empty_reviews_message(&self) -> Option<&'static str> {
        lock(&self.reviews).empty_message()
    }

    /// Number of reviews received.
    pub fn review_count(&self) -> usize {
        lock(&self.reviews).len()
    }

    /// The visible reviews tab.
    pub fn selected_tab(&self) -> ProductTab {
        lock(&self.reviews).selected_tab()
    }

    /// Show a reviews tab.
    pub fn select_tab(&mut self, tab: ProductTab) {
        lock(&self.reviews).select_tab(tab);
    }
}

impl Drop for ProductPage {
    fn drop(&mut self) {
        self.channel.unsubscribe(self.subscription);
    }
}

fn lock(panel: &Mutex<ReviewsPanel>) -> MutexGuard<'_, ReviewsPanel> {
    panel.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Root of the storefront: membership, cart and the product page.
#[derive(Debug)]
pub struct Storefront {
    premium: bool,
    cart: Cart,
    show_cart: bool,
    page: ProductPage,
}

impl Storefront {
    /// Create a storefront for a premium member with a hidden, empty cart.
    pub fn new(product: Product) -> Self {
        Self {
            premium: true,
            cart: Cart::new(),
            show_cart: false,
            page: ProductPage::new(product),
        }
    }

    /// Build a storefront from product fixture YAML.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the fixture cannot be parsed or is invalid.
    pub fn from_fixture(yaml: &str) -> Result<Self, FixtureError> {
        Ok(Self::new(fixtures::load_product(yaml)?))
    }

    /// Set premium membership.
    #[must_use]
    pub fn with_premium(mut self, premium: bool) -> Self {
        self.premium = premium;
        self
    }

    /// Whether the customer is a premium member.
    pub fn premium(&self) -> bool {
        self.premium
    }

    /// Membership line for this customer.
    pub fn premium_status(&self) -> String {
        premium_status(self.premium)
    }

    /// Shipping message for this customer.
    pub fn shipping_message(&self) -> &'static str {
        shipping_message(self.premium)
    }

    /// The product page.
    pub fn page(&self) -> &ProductPage {
        &self.page
    }

    /// Mutable access to the product page.
    pub fn page_mut(&mut self) -> &mut ProductPage {
        &mut self.page
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Whether the cart is shown.
    pub fn show_cart(&self) -> bool {
        self.show_cart
    }

    /// Show or hide the cart; the contents are unaffected. Returns the new visibility.
    pub fn toggle_cart(&mut self) -> bool {
        self.show_cart = !self.show_cart;
        self.show_cart
    }

    /// Whether the cart has reached the product's total inventory.
    pub fn is_cart_full(&self) -> bool {
        self.page.product().is_cart_full(self.cart.len())
    }

    /// Whether the selected variant can be added.
    pub fn can_add_to_cart(&self) -> bool {
        self.page.product().can_add_to_cart(self.cart.len())
    }

    /// Add the selected variant to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::OutOfStock`] if the selected variant has no units, or
    /// [`CartError::CartFull`] if the cart holds as many lines as the product has units.
    pub fn add_to_cart(&mut self) -> Result<&CartLine, CartError> {
        let product = self.page.product();

        if !product.is_in_stock() {
            let variant = product.selected().id;

            warn!(%variant, "refused to add out of stock variant");

            return Err(CartError::OutOfStock(variant));
        }

        if self.is_cart_full() {
            let (lines, inventory) = (self.cart.len(), product.total_inventory());

            warn!(lines, inventory, "refused to add to full cart");

            return Err(CartError::CartFull { lines, inventory });
        }

        Ok(self.cart.add_line(product.cart_line()))
    }

    /// Remove the most recently added line, if any.
    pub fn remove_from_cart(&mut self) -> Option<CartLine> {
        self.cart.remove_last()
    }
}
