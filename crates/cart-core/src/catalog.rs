//! # Catalog Item Registry
//!
//! The fixed set of item kinds the cart understands, plus the display
//! metadata each kind carries. There is no runtime registration: adding a
//! kind means adding a variant here and to [`Item`](crate::Item), and the
//! compiler points at every match that needs a new arm.
//!
//! ```text
//! ┌──────────────┬───────────────┬──────────────┬────────────────────────┐
//! │ ItemKind     │ label()       │ detail_name()│ Pricing rule           │
//! ├──────────────┼───────────────┼──────────────┼────────────────────────┤
//! │ Electronics  │ "Electronics" │ "warranty"   │ base + $10 × months    │
//! │ Clothing     │ "Clothing"    │ "size"       │ base × 1.10            │
//! │ Grocery      │ "Grocery"     │ "weight"     │ base × kg              │
//! └──────────────┴───────────────┴──────────────┴────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Electronics,
    Clothing,
    Grocery,
}

impl ItemKind {
    /// Every kind, in menu order.
    pub const ALL: [ItemKind; 3] = [ItemKind::Electronics, ItemKind::Clothing, ItemKind::Grocery];

    /// Tag used in both the display line and the persisted record.
    pub const fn label(&self) -> &'static str {
        match self {
            ItemKind::Electronics => "Electronics",
            ItemKind::Clothing => "Clothing",
            ItemKind::Grocery => "Grocery",
        }
    }

    /// Name of the kind-specific attribute, as shown in display lines.
    pub const fn detail_name(&self) -> &'static str {
        match self {
            ItemKind::Electronics => "warranty",
            ItemKind::Clothing => "size",
            ItemKind::Grocery => "weight",
        }
    }

    /// Looks up a kind by its exact record label.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::ItemKind;
    ///
    /// assert_eq!(ItemKind::from_label("Grocery"), Some(ItemKind::Grocery));
    /// assert_eq!(ItemKind::from_label("grocery"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<ItemKind> {
        Self::ALL.into_iter().find(|kind| kind.label() == label)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for kind in ItemKind::ALL {
            assert_eq!(ItemKind::from_label(kind.label()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(ItemKind::from_label(""), None);
        assert_eq!(ItemKind::from_label("Electronic"), None);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(ItemKind::Clothing.to_string(), "Clothing");
    }
}
