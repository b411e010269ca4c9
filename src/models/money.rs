//! Money type for representing currency amounts
//!
//! Internally stores amounts in hundredths (i64) so that window totals are
//! exact. The persisted form is a plain JSON number in whole currency units
//! (`1250.5`), which keeps the store file readable and diffable.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::error::FinanceError;

/// Largest magnitude accepted for a single amount, in whole units
///
/// About 90,000 maximal amounts sum exactly; beyond that totals saturate.
const MAX_MAJOR: f64 = 1.0e12;

/// A monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use finance::models::Money;
    /// let amount = Money::from_minor(1050); // 10.50
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from a decimal number of whole units
    ///
    /// Rounds to the nearest hundredth. Non-finite and out-of-range values
    /// are rejected.
    pub fn from_major(major: f64) -> Result<Self, FinanceError> {
        if !major.is_finite() {
            return Err(FinanceError::Validation(format!(
                "Amount must be a finite number, got {}",
                major
            )));
        }
        if major.abs() >= MAX_MAJOR {
            return Err(FinanceError::Validation(format!(
                "Amount is too large: {}",
                major
            )));
        }
        Ok(Self((major * 100.0).round() as i64))
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the amount as a decimal number of whole units
    pub fn as_major(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn whole(&self) -> i64 {
        self.0 / 100
    }

    /// Get the hundredths portion (0-99)
    pub const fn fraction(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Parse an amount typed by a user
    ///
    /// Accepts `"10.50"`, `"-10.50"`, `"10,50"`, `"1 500"` and `"1500"`.
    pub fn parse(s: &str) -> Result<Self, FinanceError> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .map(|c| if c == ',' { '.' } else { c })
            .collect();

        let major: f64 = normalized
            .parse()
            .map_err(|_| FinanceError::Validation(format!("Invalid amount: {}", s.trim())))?;

        Self::from_major(major)
    }

    /// Share of `total` taken by this amount, in percent
    ///
    /// Returns `0.0` when `total` is zero.
    pub fn percentage_of(&self, total: Money) -> f64 {
        if total.is_zero() {
            0.0
        } else {
            self.0 as f64 / total.0 as f64 * 100.0
        }
    }

    /// Format with grouped thousands and a trailing currency label
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if symbol.is_empty() {
            self.to_string()
        } else {
            format!("{} {}", self, symbol)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(
            f,
            "{}{}.{:02}",
            sign,
            group_thousands(self.whole().unsigned_abs()),
            self.fraction()
        )
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_major())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let major = f64::deserialize(deserializer)?;
        Money::from_major(major).map_err(de::Error::custom)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let m = Money::from_minor(1050);
        assert_eq!(m.minor(), 1050);
        assert_eq!(m.whole(), 10);
        assert_eq!(m.fraction(), 50);
    }

    #[test]
    fn test_from_major_rounds() {
        assert_eq!(Money::from_major(10.5).unwrap().minor(), 1050);
        assert_eq!(Money::from_major(0.1 + 0.2).unwrap().minor(), 30);
        assert_eq!(Money::from_major(-50.0).unwrap().minor(), -5000);
    }

    #[test]
    fn test_from_major_rejects_non_finite() {
        assert!(Money::from_major(f64::NAN).unwrap_err().is_validation());
        assert!(Money::from_major(f64::INFINITY).unwrap_err().is_validation());
        assert!(Money::from_major(1e20).unwrap_err().is_validation());
        assert!(Money::from_major(1e12).unwrap_err().is_validation());
        assert_eq!(Money::from_major(999_999_999_999.99).unwrap().minor(), 99_999_999_999_999);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(1050).to_string(), "10.50");
        assert_eq!(Money::zero().to_string(), "0.00");
        assert_eq!(Money::from_minor(-1050).to_string(), "-10.50");
        assert_eq!(Money::from_minor(123_456_789).to_string(), "1,234,567.89");
        assert_eq!(
            Money::from_minor(500_000).format_with_symbol("руб."),
            "5,000.00 руб."
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        assert_eq!((-a).minor(), -1000);
        assert_eq!((b - a).abs().minor(), 500);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().minor(), 1050);
        assert_eq!(Money::parse("10,5").unwrap().minor(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().minor(), -1050);
        assert_eq!(Money::parse(" 1 500 ").unwrap().minor(), 150_000);
        assert!(Money::parse("ten").unwrap_err().is_validation());
        assert!(Money::parse("").is_err());
    }

    #[test]
    fn test_percentage_of() {
        let part = Money::from_minor(2500);
        let total = Money::from_minor(10000);
        assert!((part.percentage_of(total) - 25.0).abs() < f64::EPSILON);
        assert_eq!(part.percentage_of(Money::zero()), 0.0);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 300].into_iter().map(Money::from_minor).sum();
        assert_eq!(total.minor(), 600);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let near_max = Money::from_minor(i64::MAX - 10);
        let total: Money = [near_max, near_max].into_iter().sum();
        assert_eq!(total.minor(), i64::MAX);

        let mut acc = near_max;
        acc += Money::from_minor(100);
        assert_eq!(acc.minor(), i64::MAX);

        assert_eq!((Money::from_minor(i64::MIN) - near_max).minor(), i64::MIN);
        assert_eq!((-Money::from_minor(i64::MIN)).minor(), i64::MAX);
    }

    #[test]
    fn test_serialization_uses_whole_units() {
        let m = Money::from_minor(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "10.5");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);

        let from_int: Money = serde_json::from_str("5000").unwrap();
        assert_eq!(from_int.minor(), 500_000);
    }
}
