//! # Weight
//!
//! Grocery weights, stored as whole grams.
//!
//! ## Why Grams?
//! Same reasoning as [`Money`](crate::Money): `2.5 kg` is exactly
//! `2500` grams, so `price × weight` never touches floating point.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AmountError;

/// Fractional kilogram digits carried by `Weight`.
const GRAM_PLACES: u32 = 3;

/// A weight in grams. Signed so unvalidated input propagates as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Weight(i64);

impl Weight {
    pub const GRAMS_PER_KG: i64 = 1000;

    /// Creates a weight from grams.
    #[inline]
    pub const fn from_grams(grams: i64) -> Self {
        Weight(grams)
    }

    /// Creates a weight from whole kilograms.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::weight::Weight;
    ///
    /// assert_eq!(Weight::from_kg(5).grams(), 5000);
    /// ```
    #[inline]
    pub const fn from_kg(kg: i64) -> Self {
        Weight(kg.saturating_mul(Self::GRAMS_PER_KG))
    }

    /// Returns the weight in grams.
    #[inline]
    pub const fn grams(&self) -> i64 {
        self.0
    }

    /// The weight in kilograms as an exact `Decimal`.
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, GRAM_PLACES)
    }

    /// Rounds kilograms to the gram, half away from zero.
    ///
    /// Returns `None` when the rounded weight does not fit in i64 grams.
    pub fn from_decimal(kg: Decimal) -> Option<Weight> {
        let mut rounded =
            kg.round_dp_with_strategy(GRAM_PLACES, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(GRAM_PLACES);
        i64::try_from(rounded.mantissa()).ok().map(Weight)
    }

    /// Kilograms as plain text without trailing zeros: `5`, `2.5`, `0.125`.
    pub fn to_compact_string(&self) -> String {
        self.to_decimal().normalize().to_string()
    }
}

/// Shows the weight in kilograms, e.g. `2.5 kg`.
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kg", self.to_compact_string())
    }
}

/// Parses kilograms from decimal text (`"5"`, `"2.5"`, `"0.125"`).
/// Digits past the gram are rounded.
impl FromStr for Weight {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kg = Decimal::from_str(s).map_err(|_| AmountError::InvalidFormat {
            input: s.to_string(),
        })?;
        Weight::from_decimal(kg).ok_or_else(|| AmountError::Overflow {
            input: s.to_string(),
        })
    }
}
