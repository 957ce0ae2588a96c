//! Shopping Cart State Management
//!
//! This module holds the in-memory registry of carts, one per owner. It is
//! the factory surface of the crate: callers obtain carts through
//! [`CartStore::create_cart`] rather than constructing them ad hoc.

use super::models::Cart;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::debug;

/// In-memory storage for carts, keyed by the owning user.
///
/// Plain owned state: execution is single-threaded and synchronous, so no
/// locking or concurrent map is involved.
#[derive(Debug, Default)]
pub struct CartStore {
    carts: HashMap<String, Cart>,
}

impl CartStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        CartStore {
            carts: HashMap::new(),
        }
    }

    /// Creates a fresh cart for `owner` and returns it.
    ///
    /// Every call allocates new item storage, so carts created through the
    /// store never share state. A previous cart registered under the same
    /// owner is replaced.
    pub fn create_cart(&mut self, owner: &str) -> &mut Cart {
        debug!(owner, "creating cart");
        let cart = Cart::new(owner);
        match self.carts.entry(owner.to_string()) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(cart);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(cart),
        }
    }

    /// Looks up the cart registered for `owner`.
    pub fn cart(&self, owner: &str) -> Option<&Cart> {
        self.carts.get(owner)
    }

    /// Mutable lookup of the cart registered for `owner`.
    pub fn cart_mut(&mut self, owner: &str) -> Option<&mut Cart> {
        self.carts.get_mut(owner)
    }

    /// Number of carts currently registered.
    pub fn cart_count(&self) -> usize {
        self.carts.len()
    }
}
