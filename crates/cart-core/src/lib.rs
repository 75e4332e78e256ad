//! # cart-core: Pure Pricing Logic for Cart Ledger
//!
//! This crate holds the item model, the cart aggregate and the record
//! codec, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Ledger Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 checkout binary (cart-store)                    │   │
//! │  │        parse args ──► build Items ──► print report ──► save     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cart-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   item    │  │   cart    │  │  record   │  │   │
//! │  │   │ ItemKind  │  │   Item    │  │   Cart    │  │ encode /  │  │   │
//! │  │   │  labels   │  │  price()  │  │  total()  │  │  decode   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO LOGGING • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │ persist() lines                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 cart-store (file persistence)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - The fixed set of item kinds and their labels
//! - [`item`] - Item variants and their pricing rules
//! - [`cart`] - The ordered cart, totals, report and record stream
//! - [`record`] - One-line record encoding and decoding
//! - [`money`] / [`weight`] - Integer fixed-point amounts (`rust_decimal` at the text edges)
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cart_core::{Cart, Item, Money, Weight};
//!
//! let mut cart = Cart::new();
//! cart.append(Item::electronics("Phone", Money::from_major_minor(500, 0), 12));
//! cart.append(Item::clothing("Shirt", Money::from_major_minor(20, 0), "M"));
//! cart.append(Item::grocery("Rice", Money::from_major_minor(2, 0), Weight::from_kg(5)));
//!
//! assert_eq!(cart.total(), Money::from_major_minor(652, 0));
//! assert_eq!(
//!     cart.persist(),
//!     vec!["Electronics,Phone,620,12", "Clothing,Shirt,22,M", "Grocery,Rice,10,5kg"]
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod item;
pub mod money;
pub mod record;
pub mod weight;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartSummary, EMPTY_CART_LINE};
pub use catalog::ItemKind;
pub use error::{AmountError, RecordError};
pub use item::{ClothingItem, ElectronicItem, GroceryItem, Item};
pub use money::Money;
pub use record::{RecordDetail, RecordLine};
pub use weight::Weight;
