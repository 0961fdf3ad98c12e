//! # Denomination Catalog
//!
//! The fixed set of physical coins and bills the register understands.
//!
//! The catalog is the standard euro series: eight coins from 1c to €2 and
//! seven bills from €5 to €500. It is deliberately not configurable - the
//! drawer, the change algorithm and the payment parser all assume exactly
//! these fifteen face values.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Denomination
// =============================================================================

/// One coin or bill face value.
///
/// ## Ordering
/// Variants are declared in ascending face-value order, so the derived `Ord`
/// sorts denominations by value. The drawer's sorted storage and the
/// highest-first change walk both rely on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Denomination {
    OneCent,
    TwoCent,
    FiveCent,
    TenCent,
    TwentyCent,
    FiftyCent,
    OneEuro,
    TwoEuro,
    FiveEuro,
    TenEuro,
    TwentyEuro,
    FiftyEuro,
    OneHundredEuro,
    TwoHundredEuro,
    FiveHundredEuro,
}

/// Whether a denomination is a coin or a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenominationKind {
    Coin,
    Bill,
}

impl Denomination {
    /// Every denomination, in ascending face-value order.
    pub const CATALOG: [Denomination; 15] = [
        Denomination::OneCent,
        Denomination::TwoCent,
        Denomination::FiveCent,
        Denomination::TenCent,
        Denomination::TwentyCent,
        Denomination::FiftyCent,
        Denomination::OneEuro,
        Denomination::TwoEuro,
        Denomination::FiveEuro,
        Denomination::TenEuro,
        Denomination::TwentyEuro,
        Denomination::FiftyEuro,
        Denomination::OneHundredEuro,
        Denomination::TwoHundredEuro,
        Denomination::FiveHundredEuro,
    ];

    /// The face value in minor units.
    ///
    /// ## Example
    /// ```rust
    /// use kassa_core::{Denomination, Money};
    ///
    /// assert_eq!(Denomination::FiftyCent.value(), Money::from_cents(50));
    /// assert_eq!(Denomination::FiveHundredEuro.value(), Money::from_cents(500_00));
    /// ```
    #[inline]
    pub const fn value(&self) -> Money {
        let cents = match self {
            Denomination::OneCent => 1,
            Denomination::TwoCent => 2,
            Denomination::FiveCent => 5,
            Denomination::TenCent => 10,
            Denomination::TwentyCent => 20,
            Denomination::FiftyCent => 50,
            Denomination::OneEuro => 1_00,
            Denomination::TwoEuro => 2_00,
            Denomination::FiveEuro => 5_00,
            Denomination::TenEuro => 10_00,
            Denomination::TwentyEuro => 20_00,
            Denomination::FiftyEuro => 50_00,
            Denomination::OneHundredEuro => 100_00,
            Denomination::TwoHundredEuro => 200_00,
            Denomination::FiveHundredEuro => 500_00,
        };
        Money::from_cents(cents)
    }

    /// Whether this is a coin (1c-€2) or a bill (€5-€500).
    #[inline]
    pub const fn kind(&self) -> DenominationKind {
        match self {
            Denomination::OneCent
            | Denomination::TwoCent
            | Denomination::FiveCent
            | Denomination::TenCent
            | Denomination::TwentyCent
            | Denomination::FiftyCent
            | Denomination::OneEuro
            | Denomination::TwoEuro => DenominationKind::Coin,
            _ => DenominationKind::Bill,
        }
    }

    /// Looks up the denomination with the given face value.
    ///
    /// Returns `None` when no coin or bill has that value. Used by input
    /// adapters to resolve user-entered face values into catalog entries.
    ///
    /// ## Example
    /// ```rust
    /// use kassa_core::{Denomination, Money};
    ///
    /// assert_eq!(
    ///     Denomination::from_value(Money::from_cents(200)),
    ///     Some(Denomination::TwoEuro)
    /// );
    /// assert_eq!(Denomination::from_value(Money::from_cents(3)), None);
    /// ```
    pub fn from_value(value: Money) -> Option<Denomination> {
        Denomination::CATALOG
            .iter()
            .copied()
            .find(|d| d.value() == value)
    }
}

/// Compact rendering: `1c` … `50c` for sub-euro coins, `€1` … `€500` above.
impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.value().cents();
        if cents < 1_00 {
            write!(f, "{}c", cents)
        } else {
            write!(f, "€{}", cents / 100)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_ascending() {
        for pair in Denomination::CATALOG.windows(2) {
            assert!(pair[0].value() < pair[1].value());
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_kind_split() {
        assert_eq!(Denomination::TwoEuro.kind(), DenominationKind::Coin);
        assert_eq!(Denomination::FiveEuro.kind(), DenominationKind::Bill);

        let coins = Denomination::CATALOG
            .iter()
            .filter(|d| d.kind() == DenominationKind::Coin)
            .count();
        assert_eq!(coins, 8);
    }

    #[test]
    fn test_from_value() {
        assert_eq!(
            Denomination::from_value(Money::from_cents(50)),
            Some(Denomination::FiftyCent)
        );
        assert_eq!(
            Denomination::from_value(Money::from_cents(500_00)),
            Some(Denomination::FiveHundredEuro)
        );
        assert_eq!(Denomination::from_value(Money::from_cents(7)), None);
        assert_eq!(Denomination::from_value(Money::from_cents(0)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Denomination::OneCent.to_string(), "1c");
        assert_eq!(Denomination::FiftyCent.to_string(), "50c");
        assert_eq!(Denomination::OneEuro.to_string(), "€1");
        assert_eq!(Denomination::FiveHundredEuro.to_string(), "€500");
    }
}
