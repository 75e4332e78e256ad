//! # Items
//!
//! A closed set of priced item variants. Each variant owns its fields by
//! value and computes its price from those fields alone.
//!
//! ## Variant Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Item (closed enum)                              │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────┐      │
//! │  │  ElectronicItem  │  │   ClothingItem   │  │   GroceryItem    │      │
//! │  │  ──────────────  │  │  ──────────────  │  │  ──────────────  │      │
//! │  │  name            │  │  name            │  │  name            │      │
//! │  │  base_price      │  │  base_price      │  │  base_price      │      │
//! │  │  warranty_months │  │  size            │  │  weight          │      │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────┘      │
//! │                                                                         │
//! │  price() • label() • display_line() • record()                          │
//! │  Pure, deterministic, recomputed on every call (never cached)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No input validation happens here. A negative price or weight flows
//! straight through the arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::ItemKind;
use crate::money::Money;
use crate::record;
use crate::weight::Weight;

/// Added to an electronic item's base price per month of warranty ($10).
pub const WARRANTY_COST_PER_MONTH: Money = Money::from_cents(1000);

/// Clothing price multiplier in basis points (110%).
pub const CLOTHING_MARKUP_BPS: u32 = 11_000;

// =============================================================================
// Variants
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicItem {
    pub name: String,
    pub base_price: Money,
    pub warranty_months: i64,
}

impl ElectronicItem {
    /// `base_price + warranty_months × $10`
    pub fn price(&self) -> Money {
        self.base_price + WARRANTY_COST_PER_MONTH * self.warranty_months
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub name: String,
    pub base_price: Money,
    /// Free-form ("S", "M", "XL", ...). Not checked against any list.
    pub size: String,
}

impl ClothingItem {
    /// `base_price × 1.10`, rounded to the cent.
    pub fn price(&self) -> Money {
        self.base_price.scale_bps(CLOTHING_MARKUP_BPS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub name: String,
    /// Price per kilogram.
    pub base_price: Money,
    pub weight: Weight,
}

impl GroceryItem {
    /// `base_price × weight_kg`, rounded to the cent.
    pub fn price(&self) -> Money {
        self.base_price.per_kg(self.weight)
    }
}

// =============================================================================
// Item
// =============================================================================

/// A priced catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    Electronics(ElectronicItem),
    Clothing(ClothingItem),
    Grocery(GroceryItem),
}

impl Item {
    /// Creates an electronic item.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::{Item, Money};
    ///
    /// let phone = Item::electronics("Phone", Money::from_major_minor(500, 0), 12);
    /// assert_eq!(phone.price(), Money::from_major_minor(620, 0));
    /// ```
    pub fn electronics(name: impl Into<String>, base_price: Money, warranty_months: i64) -> Self {
        Item::Electronics(ElectronicItem {
            name: name.into(),
            base_price,
            warranty_months,
        })
    }

    /// Creates a clothing item.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::{Item, Money};
    ///
    /// let shirt = Item::clothing("Shirt", Money::from_major_minor(20, 0), "M");
    /// assert_eq!(shirt.price(), Money::from_major_minor(22, 0));
    /// ```
    pub fn clothing(name: impl Into<String>, base_price: Money, size: impl Into<String>) -> Self {
        Item::Clothing(ClothingItem {
            name: name.into(),
            base_price,
            size: size.into(),
        })
    }

    /// Creates a grocery item priced per kilogram.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::{Item, Money, Weight};
    ///
    /// let rice = Item::grocery("Rice", Money::from_major_minor(2, 0), Weight::from_kg(5));
    /// assert_eq!(rice.price(), Money::from_major_minor(10, 0));
    /// ```
    pub fn grocery(name: impl Into<String>, base_price: Money, weight: Weight) -> Self {
        Item::Grocery(GroceryItem {
            name: name.into(),
            base_price,
            weight,
        })
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Electronics(_) => ItemKind::Electronics,
            Item::Clothing(_) => ItemKind::Clothing,
            Item::Grocery(_) => ItemKind::Grocery,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Item::Electronics(item) => &item.name,
            Item::Clothing(item) => &item.name,
            Item::Grocery(item) => &item.name,
        }
    }

    pub fn base_price(&self) -> Money {
        match self {
            Item::Electronics(item) => item.base_price,
            Item::Clothing(item) => item.base_price,
            Item::Grocery(item) => item.base_price,
        }
    }

    /// Computes the price with this variant's fixed rule.
    pub fn price(&self) -> Money {
        match self {
            Item::Electronics(item) => item.price(),
            Item::Clothing(item) => item.price(),
            Item::Grocery(item) => item.price(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.kind().label()
    }

    /// The kind-specific attribute as shown to a person:
    /// `12 months`, `M`, `5 kg`.
    pub fn detail_text(&self) -> String {
        match self {
            Item::Electronics(item) => format!("{} months", item.warranty_months),
            Item::Clothing(item) => item.size.clone(),
            Item::Grocery(item) => item.weight.to_string(),
        }
    }

    /// One human-readable line: label, name, price and detail.
    ///
    /// ```text
    /// [Electronics] Phone - $620.00 (warranty: 12 months)
    /// ```
    pub fn display_line(&self) -> String {
        format!(
            "[{}] {} - {} ({}: {})",
            self.label(),
            self.name(),
            self.price(),
            self.kind().detail_name(),
            self.detail_text()
        )
    }

    /// One comma-separated persisted record. See [`record::encode`].
    pub fn record(&self) -> String {
        record::encode(self)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_line())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
