//! Item entries from the command line.
//!
//! The core accepts any values it is given, so checking that a price is a
//! number happens here, on the caller side, before an [`Item`] exists.
//!
//! ```text
//! electronics:Phone:500:12     → Item::electronics("Phone", $500.00, 12)
//! clothing:Shirt:20:M          → Item::clothing("Shirt", $20.00, "M")
//! grocery:Rice:2:5             → Item::grocery("Rice", $2.00, 5 kg)
//! ```
//!
//! The kind matches case-insensitively against the record labels. The
//! name is everything between the first and the second-to-last colon.

use cart_core::{Item, ItemKind, Money, Weight};

use crate::error::{EntryError, StoreError, StoreResult};

const ENTRY_SEPARATOR: char = ':';

/// Parses one `kind:name:price:detail` entry into an item.
///
/// ## Example
/// ```rust
/// use cart_core::Money;
/// use cart_store::entry::parse_entry;
///
/// let item = parse_entry("clothing:Shirt:20:M").unwrap();
/// assert_eq!(item.price(), Money::from_major_minor(22, 0));
/// ```
pub fn parse_entry(entry: &str) -> StoreResult<Item> {
    parse_fields(entry).map_err(|source| StoreError::Entry {
        entry: entry.to_string(),
        source,
    })
}

fn parse_fields(entry: &str) -> Result<Item, EntryError> {
    let (kind, rest) = entry
        .split_once(ENTRY_SEPARATOR)
        .ok_or(EntryError::Format)?;

    let mut tail = rest.rsplitn(3, ENTRY_SEPARATOR);
    let (detail, price, name) = match (tail.next(), tail.next(), tail.next()) {
        (Some(detail), Some(price), Some(name)) => (detail.trim(), price.trim(), name.trim()),
        _ => return Err(EntryError::Format),
    };

    let kind = ItemKind::ALL
        .into_iter()
        .find(|k| k.label().eq_ignore_ascii_case(kind.trim()))
        .ok_or_else(|| EntryError::UnknownKind(kind.to_string()))?;

    let price: Money = price.parse().map_err(EntryError::Price)?;

    let item = match kind {
        ItemKind::Electronics => {
            let months = detail
                .parse()
                .map_err(|_| EntryError::Warranty(detail.to_string()))?;
            Item::electronics(name, price, months)
        }
        ItemKind::Clothing => Item::clothing(name, price, detail),
        ItemKind::Grocery => {
            let weight: Weight = detail.parse().map_err(EntryError::Weight)?;
            Item::grocery(name, price, weight)
        }
    };

    Ok(item)
}
