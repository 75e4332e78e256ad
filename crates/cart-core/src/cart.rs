//! # Cart
//!
//! An ordered collection of [`Item`]s with derived totals, a printable
//! report and a persisted record stream.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Operations                                  │
//! │                                                                         │
//! │  Caller Action            Cart Method             State Change          │
//! │  ─────────────            ───────────             ────────────          │
//! │                                                                         │
//! │  Add item ───────────────► append(item) ────────► items.push(item)      │
//! │                                                                         │
//! │  Show cart ──────────────► report() ────────────► (read only)           │
//! │                                                                         │
//! │  Show total ─────────────► total() ─────────────► (read only)           │
//! │                                                                         │
//! │  Save cart ──────────────► persist() ───────────► (read only)           │
//! │                                 │                                       │
//! │                                 └──► lines handed to cart-store         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Insertion order is display order and persistence order
//! - Duplicate names are kept as separate entries, never merged
//! - The only mutation is `append`; there is no removal or reordering
//! - The total is recomputed from the items on every call, never stored

use serde::{Deserialize, Serialize};

use crate::catalog::ItemKind;
use crate::item::Item;
use crate::money::Money;

/// The single line reported for a cart with no items.
pub const EMPTY_CART_LINE: &str = "Cart is empty.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<Item>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Takes ownership of `item` and adds it to the end of the cart.
    pub fn append(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Sum of every item's price; zero for an empty cart.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::{Cart, Item, Money};
    ///
    /// let mut cart = Cart::new();
    /// assert!(cart.total().is_zero());
    ///
    /// cart.append(Item::clothing("Shirt", Money::from_major_minor(20, 0), "M"));
    /// assert_eq!(cart.total(), Money::from_major_minor(22, 0));
    /// ```
    pub fn total(&self) -> Money {
        self.items.iter().map(Item::price).sum()
    }

    /// Human-readable lines.
    ///
    /// An empty cart yields exactly [`EMPTY_CART_LINE`]. Otherwise one
    /// display line per item followed by `Total: $X.YY`.
    pub fn report(&self) -> Vec<String> {
        if self.is_empty() {
            return vec![EMPTY_CART_LINE.to_string()];
        }

        let mut lines: Vec<String> = self.items.iter().map(Item::display_line).collect();
        lines.push(format!("Total: {}", self.total()));
        lines
    }

    /// One record per item, in insertion order, with no header, footer or
    /// blank lines. Writing them anywhere is the caller's job.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::{Cart, Item, Money};
    ///
    /// let mut cart = Cart::new();
    /// assert!(cart.persist().is_empty());
    ///
    /// cart.append(Item::electronics("Phone", Money::from_major_minor(500, 0), 12));
    /// assert_eq!(cart.persist(), vec!["Electronics,Phone,620,12"]);
    /// ```
    pub fn persist(&self) -> Vec<String> {
        self.items.iter().map(Item::record).collect()
    }

    /// Item counts per kind plus the total.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from(self)
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Extend<Item> for Cart {
    fn extend<I: IntoIterator<Item = Item>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl FromIterator<Item> for Cart {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        let mut cart = Cart::new();
        cart.extend(iter);
        cart
    }
}

// =============================================================================
// Cart Summary
// =============================================================================

/// Cart counts summary, e.g. for a status line or a log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub item_count: usize,
    pub electronics: usize,
    pub clothing: usize,
    pub grocery: usize,
    pub total: Money,
}

impl CartSummary {
    /// Number of items of one kind.
    pub fn count_of(&self, kind: ItemKind) -> usize {
        match kind {
            ItemKind::Electronics => self.electronics,
            ItemKind::Clothing => self.clothing,
            ItemKind::Grocery => self.grocery,
        }
    }
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        let count = |kind: ItemKind| cart.iter().filter(|item| item.kind() == kind).count();

        CartSummary {
            item_count: cart.len(),
            electronics: count(ItemKind::Electronics),
            clothing: count(ItemKind::Clothing),
            grocery: count(ItemKind::Grocery),
            total: cart.total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
