//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::ops::{Neg, Sub};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use fintooz::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.plain(), "10.5");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Addition that reports overflow instead of wrapping
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtraction that reports overflow instead of wrapping
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", ".5". More than
    /// two decimal places are rejected unless the extra digits are zeros.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix('$').unwrap_or(s);
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (units_str, cents_str) = match s.split_once('.') {
            Some((units, cents)) if !cents.contains('.') => (units, cents),
            Some(_) => return Err(invalid()),
            None => (s, ""),
        };

        if units_str.is_empty() && cents_str.is_empty() {
            return Err(invalid());
        }
        if !units_str.chars().all(|c| c.is_ascii_digit())
            || !cents_str.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let units: i64 = if units_str.is_empty() {
            0
        } else {
            units_str.parse().map_err(|_| invalid())?
        };
        let cents = fraction_to_cents(cents_str).ok_or_else(invalid)?;

        let total = units
            .checked_mul(100)
            .and_then(|u| u.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Parse the longest leading decimal number of `s`
    ///
    /// Reads `digits[.digits]` from the start and ignores whatever follows, so
    /// "12.5.7" reads as 12.50. Returns `None` when no digit leads the string,
    /// the value does not fit, or a non-zero digit follows the second decimal
    /// place.
    pub fn parse_decimal_prefix(s: &str) -> Option<Self> {
        let units_len = s.bytes().take_while(u8::is_ascii_digit).count();
        let (units_str, rest) = s.split_at(units_len);

        let cents_str = match rest.strip_prefix('.') {
            Some(frac) => {
                let frac_len = frac.bytes().take_while(u8::is_ascii_digit).count();
                &frac[..frac_len]
            }
            None => "",
        };

        if units_str.is_empty() && cents_str.is_empty() {
            return None;
        }

        let units: i64 = if units_str.is_empty() {
            0
        } else {
            units_str.parse().ok()?
        };

        units
            .checked_mul(100)?
            .checked_add(fraction_to_cents(cents_str)?)
            .map(Self)
    }

    /// Render as a bare number without symbol or trailing zeros ("250", "12.5")
    pub fn plain(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let units = self.units().abs();
        match self.cents_part() {
            0 => format!("{}{}", sign, units),
            c if c % 10 == 0 => format!("{}{}.{}", sign, units, c / 10),
            c => format!("{}{}.{:02}", sign, units, c),
        }
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}.{:02}", symbol, self.units().abs(), self.cents_part())
        } else {
            format!("{}{}.{:02}", symbol, self.units(), self.cents_part())
        }
    }
}

/// Convert a run of fraction digits to cents
///
/// `None` if a digit past the hundredths is non-zero.
fn fraction_to_cents(frac: &str) -> Option<i64> {
    let mut digits = frac.bytes().map(|b| i64::from(b - b'0'));
    let tenths = digits.next().unwrap_or(0);
    let hundredths = digits.next().unwrap_or(0);
    if digits.any(|d| d != 0) {
        return None;
    }
    Some(tenths * 10 + hundredths)
}

/// Serialize an amount as a decimal number of whole units (`12.5`, `250`)
///
/// Used for report output, where consumers expect plain numbers rather than
/// the cents stored on disk.
pub fn serialize_decimal<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
    if money.cents_part() == 0 {
        serializer.serialize_i64(money.units())
    } else {
        serializer.serialize_f64(money.cents() as f64 / 100.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
        assert_eq!(Money::from_cents(-1050).cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(Money::from_cents(5).format_with_symbol("₹"), "₹0.05");
    }

    #[test]
    fn test_plain() {
        assert_eq!(Money::from_cents(25000).plain(), "250");
        assert_eq!(Money::from_cents(1250).plain(), "12.5");
        assert_eq!(Money::from_cents(1205).plain(), "12.05");
        assert_eq!(Money::from_cents(-6000).plain(), "-60");
        assert_eq!(Money::zero().plain(), "0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a.checked_add(b), Some(Money::from_cents(1500)));
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
        assert_eq!(Money::from_cents(i64::MAX).checked_add(b), None);
        assert_eq!(Money::from_cents(i64::MIN).checked_sub(b), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("12.500").unwrap().cents(), 1250);
        assert!(Money::parse("12.999").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse("+5").is_err());
    }

    #[test]
    fn test_parse_decimal_prefix() {
        assert_eq!(Money::parse_decimal_prefix("250"), Some(Money::from_cents(25000)));
        assert_eq!(Money::parse_decimal_prefix("12.5.7"), Some(Money::from_cents(1250)));
        assert_eq!(Money::parse_decimal_prefix(".75"), Some(Money::from_cents(75)));
        assert_eq!(Money::parse_decimal_prefix("5."), Some(Money::from_cents(500)));
        assert_eq!(Money::parse_decimal_prefix("12.500"), Some(Money::from_cents(1250)));
        assert_eq!(Money::parse_decimal_prefix("12.999"), None);
        assert_eq!(Money::parse_decimal_prefix("0.001"), None);
        assert_eq!(Money::parse_decimal_prefix(""), None);
        assert_eq!(Money::parse_decimal_prefix("."), None);
        assert_eq!(Money::parse_decimal_prefix("..5"), None);
        assert_eq!(Money::parse_decimal_prefix("99999999999999999999"), None);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        #[derive(Serialize)]
        struct Report {
            #[serde(serialize_with = "serialize_decimal")]
            whole: Money,
            #[serde(serialize_with = "serialize_decimal")]
            fractional: Money,
        }
        let report = Report {
            whole: Money::from_cents(25000),
            fractional: Money::from_cents(1050),
        };
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"whole":250,"fractional":10.5}"#
        );
    }
}
