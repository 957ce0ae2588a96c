//! Shopping Cart Library
//!
//! This library provides the core functionality for managing in-memory
//! shopping carts: per-user carts of line items with add/remove/total
//! operations, and the console demo driver built on top of them.

// Domain modules
pub mod cart;

// Demo driver
pub mod demo;

// Re-export the domain types at the crate root for convenience
pub use cart::{Cart, CartError, CartResult, CartStore, LineItem};
