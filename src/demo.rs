//! Console demonstration driver.
//!
//! Simulates processing orders for a fixed set of users: carts are created
//! through a [`CartStore`], items are added, and formatted summaries are
//! printed to stdout.

use crate::cart::helpers::format_item_summary;
use crate::cart::CartStore;
use tracing::debug;

/// Runs the demo: three user carts, a fixed item set, formatted summaries.
pub fn process_orders() {
    println!("=== Shopping Cart System Demo ===\n");

    let mut store = CartStore::new();

    println!("Alice's shopping:");
    let alice = store.create_cart("alice");
    alice.add_item("Laptop", 999.99);
    alice.add_item("Mouse", 29.99);
    debug!(items = %format_item_summary(alice.items()), "cart assembled");
    println!("  {alice}");

    println!("\nBob's shopping:");
    let bob = store.create_cart("bob");
    bob.add_item("Book", 15.50);
    bob.add_item("Pen", 2.99);
    debug!(items = %format_item_summary(bob.items()), "cart assembled");
    println!("  {bob}");

    println!("\nCharlie's shopping:");
    let charlie = store.create_cart("charlie");
    charlie.add_item("Coffee", 12.99);
    debug!(items = %format_item_summary(charlie.items()), "cart assembled");
    println!("  {charlie}");

    println!("\n=== Final Cart Summary ===");
    for (label, owner) in [("Alice", "alice"), ("Bob", "bob"), ("Charlie", "charlie")] {
        if let Some(cart) = store.cart(owner) {
            println!("{label}: {cart}");
        }
    }
}
