//! Shopping Cart Domain Models
//!
//! This module contains the cart data structures and the operations
//! defined on them.

use super::error::{CartError, CartResult};
use super::helpers::round_to_cents;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Line Items
// =============================================================================

/// Returns the default quantity (1) for cart items
fn default_quantity() -> i64 {
    1
}

/// One product entry in a cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Name of the product; also the lookup key for removal
    pub name: String,

    /// Price for a single unit
    pub unit_price: f64,

    /// Quantity of this item (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: i64,

    /// When the item was added to its cart
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Creates a line item stamped with the current time.
    pub fn new(name: impl Into<String>, unit_price: f64, quantity: i64) -> Self {
        LineItem {
            name: name.into(),
            unit_price,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Line total before rounding (unit price × quantity).
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

// =============================================================================
// Cart
// =============================================================================

/// Per-user container of purchasable line items.
///
/// Items keep insertion order; removing one shifts later entries forward but
/// never reorders the ones before it. Every cart owns its item storage
/// exclusively: construction always allocates a fresh vector, so two carts
/// can never observe each other's mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    owner: String,
    items: Vec<LineItem>,
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates an empty cart bound to `owner`.
    pub fn new(owner: impl Into<String>) -> Self {
        Self::with_items(owner, Vec::new())
    }

    /// Creates a cart seeded from an explicit item list.
    pub fn with_items(owner: impl Into<String>, items: Vec<LineItem>) -> Self {
        Cart {
            owner: owner.into(),
            items,
            created_at: Utc::now(),
        }
    }

    /// The user this cart belongs to. Fixed at construction.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// When this cart was constructed.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The line items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Appends an item with the default quantity of 1.
    pub fn add_item(&mut self, name: impl Into<String>, unit_price: f64) {
        self.add_item_with_quantity(name, unit_price, 1);
    }

    /// Appends an item with an explicit quantity.
    ///
    /// No validation is applied: empty names, negative prices and
    /// non-positive quantities are accepted as given. Use
    /// [`Cart::try_add_item`] when the input has not been checked upstream.
    pub fn add_item_with_quantity(
        &mut self,
        name: impl Into<String>,
        unit_price: f64,
        quantity: i64,
    ) {
        self.items.push(LineItem::new(name, unit_price, quantity));
    }

    /// Validating variant of [`Cart::add_item_with_quantity`].
    ///
    /// Rejects empty names, negative prices and non-positive quantities,
    /// leaving the cart untouched on failure.
    pub fn try_add_item(
        &mut self,
        name: impl Into<String>,
        unit_price: f64,
        quantity: i64,
    ) -> CartResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(CartError::EmptyName);
        }
        if unit_price < 0.0 {
            return Err(CartError::NegativePrice(unit_price));
        }
        if quantity < 1 {
            return Err(CartError::NonPositiveQuantity(quantity));
        }

        self.items.push(LineItem::new(name, unit_price, quantity));
        Ok(())
    }

    /// Removes the first item whose name matches `name` exactly.
    ///
    /// Returns `true` if a match was found and removed. When several items
    /// share a name, only the earliest-inserted entry is removed.
    pub fn remove_item(&mut self, name: &str) -> bool {
        match self.items.iter().position(|item| item.name == name) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Total price of the cart, rounded to cents.
    ///
    /// An empty cart totals 0.
    pub fn total(&self) -> f64 {
        round_to_cents(self.items.iter().map(LineItem::line_total).sum())
    }

    /// Number of line entries in the cart (not the summed quantity).
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cart for {}: {} items, Total: ${:.2}",
            self.owner,
            self.item_count(),
            self.total()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_item_defaults_quantity_to_one() {
        let mut cart = Cart::new("alice");
        cart.add_item("Laptop", 999.99);

        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn total_sums_and_rounds_to_cents() {
        let mut cart = Cart::new("alice");
        cart.add_item("Laptop", 999.99);
        cart.add_item("Mouse", 29.99);

        assert_eq!(cart.total(), 1029.98);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn total_of_empty_cart_is_zero() {
        let cart = Cart::new("nobody");

        assert_eq!(cart.total(), 0.0);
        assert!(cart.is_empty());
    }

    #[test]
    fn total_accounts_for_quantities() {
        let mut cart = Cart::new("bob");
        cart.add_item_with_quantity("Book", 15.50, 2);
        cart.add_item("Pen", 2.99);

        assert_eq!(cart.total(), 33.99);
    }

    #[test]
    fn remove_item_drops_first_match_only() {
        let mut cart = Cart::new("carol");
        cart.add_item_with_quantity("Coffee", 12.99, 1);
        cart.add_item_with_quantity("Coffee", 9.99, 1);

        assert!(cart.remove_item("Coffee"));
        assert_eq!(cart.item_count(), 1);
        // The later duplicate survives.
        assert_eq!(cart.items()[0].unit_price, 9.99);
    }

    #[test]
    fn remove_item_preserves_order_of_remaining_items() {
        let mut cart = Cart::new("carol");
        cart.add_item("First", 1.0);
        cart.add_item("Second", 2.0);
        cart.add_item("Third", 3.0);

        assert!(cart.remove_item("Second"));

        let names: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Third"]);
    }

    #[test]
    fn remove_missing_item_returns_false_and_changes_nothing() {
        let mut cart = Cart::new("dave");
        cart.add_item("Coffee", 12.99);

        assert!(!cart.remove_item("Tea"));
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total(), 12.99);
    }

    #[test]
    fn unchecked_add_accepts_zero_and_negative_values() {
        let mut cart = Cart::new("eve");
        cart.add_item_with_quantity("Refund", 10.0, -2);
        cart.add_item_with_quantity("Freebie", -1.50, 0);
        cart.add_item("", 5.0);

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(), -15.0);
    }

    #[test]
    fn try_add_item_rejects_invalid_input() {
        let mut cart = Cart::new("frank");

        assert_eq!(cart.try_add_item("", 1.0, 1), Err(CartError::EmptyName));
        assert_eq!(
            cart.try_add_item("Book", -0.5, 1),
            Err(CartError::NegativePrice(-0.5))
        );
        assert_eq!(
            cart.try_add_item("Book", 1.0, 0),
            Err(CartError::NonPositiveQuantity(0))
        );
        assert!(cart.is_empty());

        assert_eq!(cart.try_add_item("Book", 15.50, 1), Ok(()));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn carts_never_share_item_storage() {
        let mut first = Cart::new("alice");
        let second = Cart::new("bob");

        first.add_item("Laptop", 999.99);

        assert_eq!(first.item_count(), 1);
        assert_eq!(second.item_count(), 0);
        assert_eq!(second.total(), 0.0);
    }

    #[test]
    fn with_items_seeds_the_cart() {
        let items = vec![
            LineItem::new("Book", 15.50, 1),
            LineItem::new("Pen", 2.99, 1),
        ];
        let cart = Cart::with_items("bob", items);

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), 18.49);
        assert_eq!(cart.owner(), "bob");
    }

    #[test]
    fn display_shows_owner_count_and_total() {
        let mut cart = Cart::new("alice");
        cart.add_item("Laptop", 999.99);
        cart.add_item("Mouse", 29.99);

        assert_eq!(cart.to_string(), "Cart for alice: 2 items, Total: $1029.98");
    }

    #[test]
    fn quantity_defaults_to_one_when_deserialized_without_one() {
        let json = r#"{
            "name": "Apple",
            "unit_price": 1.25,
            "added_at": "2026-08-06T12:00:00Z"
        }"#;
        let item: LineItem = serde_json::from_str(json).expect("valid line item JSON");

        assert_eq!(item.quantity, 1);
    }
}
