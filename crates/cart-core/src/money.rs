//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    20.0 * 1.10 = 22.000000000000004  ❌ WRONG!                          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    Stored: 2000 cents (i64)                                             │
//! │    Math:   Decimal 20.00 × 1.1000 = 22.000000 → 2200 cents  ✅          │
//! │    Any rounding happens once, explicitly, half away from zero           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cart_core::money::Money;
//!
//! let price = Money::from_cents(2000); // $20.00
//! let marked_up = price.scale_bps(11_000); // 110%
//! assert_eq!(marked_up.cents(), 2200);
//!
//! let parsed: Money = "10.5".parse().unwrap();
//! assert_eq!(parsed.cents(), 1050);
//! assert_eq!(parsed.to_compact_string(), "10.5");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use crate::error::AmountError;
use crate::weight::Weight;

/// Fractional digits carried by `Money`.
const CENT_PLACES: u32 = 2;

/// Basis points are hundredths of a percent: 10000 bps = 1.0000.
const BPS_PLACES: u32 = 4;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: unvalidated caller input may be negative, and the
///   pricing rules must still produce an arithmetically consistent result
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from dollars and cents.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(500, 0).cents(), 50_000);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// Out-of-range amounts saturate at the i64 bounds.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        let whole = major.saturating_mul(100);
        if major < 0 {
            Money(whole.saturating_sub(minor))
        } else {
            Money(whole.saturating_add(minor))
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// The amount as an exact `Decimal` with two decimal places.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1050).to_decimal().to_string(), "10.50");
    /// ```
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, CENT_PLACES)
    }

    /// Rounds a decimal amount to the cent, half away from zero.
    ///
    /// Returns `None` when the rounded amount does not fit in i64 cents.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let amount = Decimal::new(11055, 3); // 11.055
    /// assert_eq!(Money::from_decimal(amount).map(|m| m.cents()), Some(1106));
    /// ```
    pub fn from_decimal(value: Decimal) -> Option<Money> {
        let mut rounded =
            value.round_dp_with_strategy(CENT_PLACES, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(CENT_PLACES);
        i64::try_from(rounded.mantissa()).ok().map(Money)
    }

    /// Scales by a factor expressed in basis points (10000 = 100%).
    ///
    /// The product is exact in `Decimal`, then rounded half away from zero
    /// to the cent. Results beyond i64 cents saturate.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    ///
    /// // $10.05 × 110% = $11.055 → $11.06
    /// assert_eq!(Money::from_cents(1005).scale_bps(11_000).cents(), 1106);
    /// ```
    pub fn scale_bps(&self, bps: u32) -> Money {
        saturating_product(self.to_decimal(), Decimal::new(i64::from(bps), BPS_PLACES))
    }

    /// Multiplies a per-kilogram price by a weight.
    ///
    /// ## Example
    /// ```rust
    /// use cart_core::money::Money;
    /// use cart_core::weight::Weight;
    ///
    /// let per_kg = Money::from_cents(200); // $2.00/kg
    /// let cost = per_kg.per_kg(Weight::from_grams(5_000));
    /// assert_eq!(cost.cents(), 1000); // $10.00
    /// ```
    pub fn per_kg(&self, weight: Weight) -> Money {
        saturating_product(self.to_decimal(), weight.to_decimal())
    }

    /// Plain decimal text without currency symbol or trailing zeros.
    ///
    /// This is the form used in persisted records: `620`, `22`, `10.5`.
    pub fn to_compact_string(&self) -> String {
        self.to_decimal().normalize().to_string()
    }
}

/// Multiplies two decimals and rounds to the cent, clamping to the i64
/// bound on the side of the product's sign.
fn saturating_product(lhs: Decimal, rhs: Decimal) -> Money {
    lhs.checked_mul(rhs)
        .and_then(Money::from_decimal)
        .unwrap_or_else(|| {
            if lhs.is_sign_negative() != rhs.is_sign_negative() {
                Money(i64::MIN)
            } else {
                Money(i64::MAX)
            }
        })
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$10.99` / `-$5.50`, always with two decimals.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Parses plain decimal text (`"10.99"`, `"500"`, `"-2.5"`).
///
/// Extra fractional digits are rounded to the cent, so `"20.000"` is
/// $20.00 and `"1.005"` is $1.01.
impl FromStr for Money {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s).map_err(|_| AmountError::InvalidFormat {
            input: s.to_string(),
        })?;
        Money::from_decimal(value).ok_or_else(|| AmountError::Overflow {
            input: s.to_string(),
        })
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(62000)), "$620.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_compact_string() {
        assert_eq!(Money::from_cents(62000).to_compact_string(), "620");
        assert_eq!(Money::from_cents(2200).to_compact_string(), "22");
        assert_eq!(Money::from_cents(1050).to_compact_string(), "10.5");
        assert_eq!(Money::from_cents(-1).to_compact_string(), "-0.01");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1500);
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_cents(100), Money::from_cents(250)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 350);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_scale_bps_rounding() {
        assert_eq!(Money::from_cents(2000).scale_bps(11_000).cents(), 2200);
        // 999 × 1.1 = 1098.9 → 1099
        assert_eq!(Money::from_cents(999).scale_bps(11_000).cents(), 1099);
        // -1005 × 1.1 = -1105.5 → -1106
        assert_eq!(Money::from_cents(-1005).scale_bps(11_000).cents(), -1106);
    }

    #[test]
    fn test_per_kg() {
        let per_kg = Money::from_cents(399);
        // 3.99 × 0.250 = 0.9975 → 1.00
        assert_eq!(per_kg.per_kg(Weight::from_grams(250)).cents(), 100);
        assert!(per_kg.per_kg(Weight::from_grams(0)).is_zero());
    }

    #[test]
    fn test_parse() {
        assert_eq!("10.99".parse::<Money>().unwrap().cents(), 1099);
        assert_eq!("500".parse::<Money>().unwrap().cents(), 50_000);
        assert_eq!("-0.5".parse::<Money>().unwrap().cents(), -50);
        assert!("ten".parse::<Money>().is_err());
        assert!("1,5".parse::<Money>().is_err());
        assert!("".parse::<Money>().is_err());
    }

    #[test]
    fn test_parse_rounds_extra_places() {
        assert_eq!("20.000".parse::<Money>().unwrap().cents(), 2000);
        assert_eq!("1.005".parse::<Money>().unwrap().cents(), 101);
        assert_eq!("-1.005".parse::<Money>().unwrap().cents(), -101);
        assert_eq!("9.994".parse::<Money>().unwrap().cents(), 999);
    }

    #[test]
    fn test_parse_out_of_range() {
        let err = "99999999999999999999".parse::<Money>().unwrap_err();
        assert_eq!(
            err,
            AmountError::Overflow {
                input: "99999999999999999999".to_string()
            }
        );
    }

    #[test]
    fn test_decimal_conversion() {
        assert_eq!(Money::from_cents(1050).to_decimal(), Decimal::new(105, 1));
        assert_eq!(
            Money::from_decimal(Decimal::new(-11055, 3)),
            Some(Money::from_cents(-1106))
        );
        assert_eq!(Money::from_decimal(Decimal::MAX), None);
    }

    #[test]
    fn test_from_major_minor_saturates() {
        assert_eq!(Money::from_major_minor(i64::MAX / 10, 0).cents(), i64::MAX);
        assert_eq!(Money::from_major_minor(i64::MIN / 10, 50).cents(), i64::MIN);
        assert_eq!(Money::from_major_minor(i64::MAX / 100, 99).cents(), i64::MAX);
    }

    #[test]
    fn test_saturating_overflow() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!((max + Money::from_cents(1)).cents(), i64::MAX);
        assert_eq!(max.scale_bps(11_000).cents(), i64::MAX);
        assert_eq!(max.per_kg(Weight::from_grams(i64::MAX)).cents(), i64::MAX);
        assert_eq!(max.per_kg(Weight::from_grams(-5_000)).cents(), i64::MIN);
    }
}
