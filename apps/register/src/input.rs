//! # Input Parsing
//!
//! Turns the cashier's typed input into domain values.
//!
//! Two line formats:
//!
//! - **Prices**: comma-separated decimal amounts with at most two fraction
//!   digits - `13.25,32.75,50.25` or `5` (whole euros). Parsed digit-by-digit
//!   into minor units; no float arithmetic anywhere.
//! - **Payment**: comma-separated `VALUExCOUNT` tokens where VALUE is a face
//!   value in minor units, optionally with `_` separators for readability -
//!   `500_00x1,20x2` is one €500 bill and two 20c coins.
//!
//! A value that names no catalog denomination is a hard parse error rather
//! than being silently dropped: a till count that ignores part of the
//! payment would break the conservation property downstream.

use thiserror::Error;

use kassa_core::{Cash, Denomination, Money};

/// Errors produced while parsing cashier input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A price token is not a plain decimal with at most two fraction digits.
    #[error("Invalid price format: '{token}'")]
    Price { token: String },

    /// A payment token is not of the form `VALUExCOUNT`.
    #[error("Invalid payment token: '{token}' (expected VALUExCOUNT, e.g. 500_00x1)")]
    PaymentToken { token: String },

    /// The face value does not exist in the denomination catalog.
    #[error("Unknown denomination: {value} minor units")]
    UnknownDenomination { value: i64 },

    /// The piece count is not a positive integer.
    #[error("Invalid piece count in '{token}'")]
    Count { token: String },
}

/// Parses a comma-separated price list into minor-unit amounts.
///
/// ## Example
/// ```text
/// "13.25, 5"  →  [Money(1325), Money(500)]
/// ```
pub fn parse_prices(line: &str) -> Result<Vec<Money>, ParseError> {
    line.split(',').map(|token| parse_price(token.trim())).collect()
}

fn parse_price(token: &str) -> Result<Money, ParseError> {
    let err = || ParseError::Price {
        token: token.to_string(),
    };

    let (euros, cents) = match token.split_once('.') {
        Some((euros, cents)) => (euros, Some(cents)),
        None => (token, None),
    };

    if euros.is_empty() || !euros.bytes().all(|b| b.is_ascii_digit()) {
        return Err(err());
    }
    let euros: i64 = euros.parse().map_err(|_| err())?;

    let cents = match cents {
        None => 0,
        Some(c) if c.is_empty() || c.len() > 2 || !c.bytes().all(|b| b.is_ascii_digit()) => {
            return Err(err());
        }
        // "5.3" means €5.30, not €5.03
        Some(c) => c.parse::<i64>().map_err(|_| err())? * if c.len() == 1 { 10 } else { 1 },
    };

    Ok(Money::from_cents(euros * 100 + cents))
}

/// Parses a comma-separated payment breakdown into a [`Cash`] value.
///
/// ## Example
/// ```text
/// "500_00x1, 20x2"  →  {20c x2, €500 x1}
/// ```
pub fn parse_payment(line: &str) -> Result<Cash, ParseError> {
    let mut paid = Cash::new();

    for token in line.split(',') {
        let token = token.trim();
        let (value, count) = token.split_once('x').ok_or_else(|| ParseError::PaymentToken {
            token: token.to_string(),
        })?;

        let value: i64 = value
            .trim()
            .replace('_', "")
            .parse()
            .map_err(|_| ParseError::PaymentToken {
                token: token.to_string(),
            })?;
        let denomination = Denomination::from_value(Money::from_cents(value))
            .ok_or(ParseError::UnknownDenomination { value })?;

        let count: u32 = count.trim().parse().map_err(|_| ParseError::Count {
            token: token.to_string(),
        })?;
        if count == 0 {
            return Err(ParseError::Count {
                token: token.to_string(),
            });
        }

        paid = paid.with(denomination, count);
    }

    Ok(paid)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kassa_core::Denomination::*;

    #[test]
    fn test_parse_prices() {
        assert_eq!(
            parse_prices("13.25, 32.75,50.25").unwrap(),
            vec![
                Money::from_cents(13_25),
                Money::from_cents(32_75),
                Money::from_cents(50_25),
            ]
        );
        assert_eq!(parse_prices("5").unwrap(), vec![Money::from_cents(5_00)]);
        // One fraction digit means tens of cents
        assert_eq!(parse_prices("5.3").unwrap(), vec![Money::from_cents(5_30)]);
    }

    #[test]
    fn test_parse_prices_rejects_bad_tokens() {
        for bad in ["", "abc", "5.", "5.999", "1,2,", "-3", "1.2.3"] {
            assert!(parse_prices(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_parse_payment() {
        let paid = parse_payment("500_00x1, 20x2").unwrap();
        assert_eq!(paid, Cash::new().with(FiveHundredEuro, 1).with(TwentyCent, 2));
        assert_eq!(paid.total(), Money::from_cents(500_40));
    }

    #[test]
    fn test_parse_payment_repeated_denomination_accumulates() {
        let paid = parse_payment("100x1,100x2").unwrap();
        assert_eq!(paid, Cash::new().with(OneEuro, 3));
    }

    #[test]
    fn test_parse_payment_rejects_unknown_denomination() {
        assert_eq!(
            parse_payment("300x1"),
            Err(ParseError::UnknownDenomination { value: 300 })
        );
    }

    #[test]
    fn test_parse_payment_rejects_malformed_tokens() {
        assert!(matches!(
            parse_payment("500"),
            Err(ParseError::PaymentToken { .. })
        ));
        assert!(matches!(
            parse_payment("500x0"),
            Err(ParseError::Count { .. })
        ));
        assert!(matches!(
            parse_payment("500xtwo"),
            Err(ParseError::Count { .. })
        ));
    }
}
