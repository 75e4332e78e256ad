//! # Record Codec
//!
//! Maps an [`Item`] to its one-line persisted form and back.
//!
//! ## Layout
//! ```text
//! label,name,price,detail
//!
//! Electronics,Phone,620,12        detail = warranty months
//! Clothing,Shirt,22,M             detail = size, raw text
//! Grocery,Rice,10,5kg             detail = weight in kg + "kg"
//! ```
//!
//! `price` is the computed price in compact decimal form (no currency
//! symbol, no trailing zeros). Nothing is quoted or escaped.
//!
//! ## Decoding
//! The label is everything before the first comma; price and detail are
//! the last two fields; the name is whatever sits in between. A name
//! containing commas therefore survives a round trip. A size containing
//! commas does not, and decodes to an error.
//!
//! Decoding yields a [`RecordLine`], not an [`Item`]: the record stores the
//! computed price, and the base price cannot be recovered from it in
//! general (rounded clothing prices, zero grocery weights).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::ItemKind;
use crate::error::RecordError;
use crate::item::Item;
use crate::money::Money;
use crate::weight::Weight;

/// Separator between record fields.
pub const FIELD_SEPARATOR: char = ',';

/// Suffix appended to grocery weights.
pub const WEIGHT_UNIT: &str = "kg";

/// Encodes one item as `label,name,price,detail`.
///
/// ## Example
/// ```rust
/// use cart_core::{record, Item, Money};
///
/// let phone = Item::electronics("Phone", Money::from_major_minor(500, 0), 12);
/// assert_eq!(record::encode(&phone), "Electronics,Phone,620,12");
/// ```
pub fn encode(item: &Item) -> String {
    let detail = match item {
        Item::Electronics(item) => item.warranty_months.to_string(),
        Item::Clothing(item) => item.size.clone(),
        Item::Grocery(item) => format!("{}{WEIGHT_UNIT}", item.weight.to_compact_string()),
    };

    join_fields(item.label(), item.name(), item.price(), &detail)
}

fn join_fields(label: &str, name: &str, price: Money, detail: &str) -> String {
    format!(
        "{label}{sep}{name}{sep}{price}{sep}{detail}",
        sep = FIELD_SEPARATOR,
        price = price.to_compact_string(),
    )
}

// =============================================================================
// Decoded Records
// =============================================================================

/// The kind-specific field of a decoded record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordDetail {
    WarrantyMonths(i64),
    Size(String),
    WeightKg(Weight),
}

/// One decoded record line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordLine {
    pub kind: ItemKind,
    pub name: String,
    /// The computed price at the time the record was written.
    pub price: Money,
    pub detail: RecordDetail,
}

impl RecordLine {
    /// Re-encodes the line. For any line that decodes, this reproduces it
    /// byte for byte, provided the price and detail were already in
    /// compact form.
    pub fn encode(&self) -> String {
        let detail = match &self.detail {
            RecordDetail::WarrantyMonths(months) => months.to_string(),
            RecordDetail::Size(size) => size.clone(),
            RecordDetail::WeightKg(weight) => {
                format!("{}{WEIGHT_UNIT}", weight.to_compact_string())
            }
        };

        join_fields(self.kind.label(), &self.name, self.price, &detail)
    }
}

impl fmt::Display for RecordLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<&Item> for RecordLine {
    fn from(item: &Item) -> Self {
        let detail = match item {
            Item::Electronics(item) => RecordDetail::WarrantyMonths(item.warranty_months),
            Item::Clothing(item) => RecordDetail::Size(item.size.clone()),
            Item::Grocery(item) => RecordDetail::WeightKg(item.weight),
        };

        RecordLine {
            kind: item.kind(),
            name: item.name().to_string(),
            price: item.price(),
            detail,
        }
    }
}

/// Decodes one persisted line. A trailing `\n` or `\r\n` is ignored.
///
/// ## Example
/// ```rust
/// use cart_core::record::{self, RecordDetail};
/// use cart_core::{ItemKind, Weight};
///
/// let line = record::decode("Grocery,Rice,10,5kg").unwrap();
/// assert_eq!(line.kind, ItemKind::Grocery);
/// assert_eq!(line.price.cents(), 1000);
/// assert_eq!(line.detail, RecordDetail::WeightKg(Weight::from_kg(5)));
/// ```
pub fn decode(line: &str) -> Result<RecordLine, RecordError> {
    let line = line
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line);

    if line.is_empty() {
        return Err(RecordError::Empty);
    }

    let too_few = || RecordError::TooFewFields {
        found: line.split(FIELD_SEPARATOR).count(),
    };

    let (label, rest) = line.split_once(FIELD_SEPARATOR).ok_or_else(too_few)?;

    let mut tail = rest.rsplitn(3, FIELD_SEPARATOR);
    let (detail, price, name) = match (tail.next(), tail.next(), tail.next()) {
        (Some(detail), Some(price), Some(name)) => (detail, price, name),
        _ => return Err(too_few()),
    };

    let kind =
        ItemKind::from_label(label).ok_or_else(|| RecordError::UnknownLabel(label.to_string()))?;

    let price: Money = price.parse().map_err(RecordError::InvalidPrice)?;

    let detail = match kind {
        ItemKind::Electronics => {
            let months = detail.parse().map_err(|_| RecordError::InvalidDetail {
                field: kind.detail_name(),
                value: detail.to_string(),
            })?;
            RecordDetail::WarrantyMonths(months)
        }
        ItemKind::Clothing => RecordDetail::Size(detail.to_string()),
        ItemKind::Grocery => {
            let kg = detail
                .strip_suffix(WEIGHT_UNIT)
                .ok_or_else(|| RecordError::MissingWeightUnit(detail.to_string()))?;
            let weight = kg.parse().map_err(|_| RecordError::InvalidDetail {
                field: kind.detail_name(),
                value: detail.to_string(),
            })?;
            RecordDetail::WeightKg(weight)
        }
    };

    Ok(RecordLine {
        kind,
        name: name.to_string(),
        price,
        detail,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_each_kind() {
        let phone = Item::electronics("Phone", Money::from_cents(50_000), 12);
        let shirt = Item::clothing("Shirt", Money::from_cents(2000), "M");
        let rice = Item::grocery("Rice", Money::from_cents(200), Weight::from_kg(5));

        assert_eq!(encode(&phone), "Electronics,Phone,620,12");
        assert_eq!(encode(&shirt), "Clothing,Shirt,22,M");
        assert_eq!(encode(&rice), "Grocery,Rice,10,5kg");
    }

    #[test]
    fn test_encode_fractional_values() {
        let apples = Item::grocery("Apples", Money::from_cents(399), Weight::from_grams(2500));
        // 3.99 × 2.5 = 9.975 → 9.98
        assert_eq!(encode(&apples), "Grocery,Apples,9.98,2.5kg");

        let socks = Item::clothing("Socks", Money::from_cents(450), "L");
        // 4.50 × 1.1 = 4.95
        assert_eq!(encode(&socks), "Clothing,Socks,4.95,L");
    }

    #[test]
    fn test_encode_does_not_escape_commas() {
        let item = Item::clothing("Shirt, blue", Money::from_cents(1000), "L,XL");
        assert_eq!(encode(&item), "Clothing,Shirt, blue,11,L,XL");
    }

    #[test]
    fn test_decode_each_kind() {
        let line = decode("Electronics,Phone,620,12").unwrap();
        assert_eq!(line.kind, ItemKind::Electronics);
        assert_eq!(line.name, "Phone");
        assert_eq!(line.price, Money::from_cents(62_000));
        assert_eq!(line.detail, RecordDetail::WarrantyMonths(12));

        let line = decode("Clothing,Shirt,22,M\n").unwrap();
        assert_eq!(line.detail, RecordDetail::Size("M".to_string()));

        let line = decode("Grocery,Rice,10,5kg\r\n").unwrap();
        assert_eq!(line.detail, RecordDetail::WeightKg(Weight::from_kg(5)));
    }

    #[test]
    fn test_decode_matches_item_projection() {
        let items = [
            Item::electronics("TV", Money::from_cents(129_999), 24),
            Item::clothing("Coat", Money::from_cents(8999), "XL"),
            Item::grocery("Cheese", Money::from_cents(1250), Weight::from_grams(350)),
        ];

        for item in &items {
            let decoded = decode(&encode(item)).unwrap();
            assert_eq!(decoded, RecordLine::from(item));
            assert_eq!(decoded.to_string(), item.record());
        }
    }

    #[test]
    fn test_name_with_commas_survives() {
        let line = decode("Grocery,Rice, long grain, 5kg bag,10,5kg").unwrap();
        assert_eq!(line.name, "Rice, long grain, 5kg bag");
        assert_eq!(line.encode(), "Grocery,Rice, long grain, 5kg bag,10,5kg");
    }

    #[test]
    fn test_size_with_commas_is_ambiguous() {
        let err = decode("Clothing,Shirt,11,L,XL").unwrap_err();
        assert!(matches!(err, RecordError::InvalidPrice(_)));
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(decode("").unwrap_err(), RecordError::Empty);
        assert_eq!(decode("\n").unwrap_err(), RecordError::Empty);
        assert_eq!(
            decode("Electronics").unwrap_err(),
            RecordError::TooFewFields { found: 1 }
        );
        assert_eq!(
            decode("Electronics,Phone,620").unwrap_err(),
            RecordError::TooFewFields { found: 3 }
        );
        assert_eq!(
            decode("Toys,Ball,5,red").unwrap_err(),
            RecordError::UnknownLabel("Toys".to_string())
        );
        assert!(matches!(
            decode("Electronics,Phone,six,12").unwrap_err(),
            RecordError::InvalidPrice(_)
        ));
        assert_eq!(
            decode("Electronics,Phone,620,a year").unwrap_err(),
            RecordError::InvalidDetail {
                field: "warranty",
                value: "a year".to_string()
            }
        );
        assert_eq!(
            decode("Grocery,Rice,10,5").unwrap_err(),
            RecordError::MissingWeightUnit("5".to_string())
        );
        assert!(matches!(
            decode("Grocery,Rice,10,fivekg").unwrap_err(),
            RecordError::InvalidDetail { field: "weight", .. }
        ));
    }
}
