//! # cart-store: File Persistence for Cart Ledger
//!
//! This crate is the I/O side of a cart session: it takes the record
//! lines `cart-core` produces and puts them in a file, and reads such a
//! file back.
//!
//! ## Module Organization
//!
//! - [`config`] - Store configuration (path, env loading)
//! - [`store`] - `CartStore` save/load and the line reader/writer
//! - [`entry`] - Caller-side parsing of `kind:name:price:detail` entries
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cart_core::Cart;
//! use cart_store::{entry, CartStore, StoreConfig};
//!
//! let mut cart = Cart::new();
//! cart.append(entry::parse_entry("electronics:Phone:500:12")?);
//!
//! let store = CartStore::new(StoreConfig::from_env()?);
//! store.save(&cart)?;
//! # Ok::<(), cart_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod entry;
pub mod error;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use error::{EntryError, StoreError, StoreResult};
pub use store::{read_records, write_records, CartStore};
