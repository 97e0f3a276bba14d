use std::{fmt, iter::Sum, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Signed money amount represented as **integer cents**.
///
/// Every expense amount goes through this type, so a stored amount is always
/// finite and sums never drift the way floats do.
///
/// # Examples
///
/// ```rust
/// use engine::Money;
///
/// let amount = Money::new(12_34);
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.to_string(), "12.34");
/// ```
///
/// Any decimal number is accepted from user input; extra decimals are rounded
/// to the cent, half to even:
///
/// ```rust
/// use engine::Money;
///
/// assert_eq!("10,5".parse::<Money>().unwrap().cents(), 1050);
/// assert_eq!(".5".parse::<Money>().unwrap().cents(), 50);
/// assert_eq!("3.14159".parse::<Money>().unwrap().cents(), 314);
/// assert!("ten".parse::<Money>().is_err());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Saturating addition, clamps at `i64::MIN`/`i64::MAX` cents.
    #[must_use]
    pub const fn saturating_add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl FromStr for Money {
    type Err = EngineError;

    /// Parses a decimal number into cents.
    ///
    /// Accepts an optional leading `+`/`-`, `.` or `,` as decimal separator,
    /// a missing integer part (`.5`) and exponent notation (`1e3`). More than
    /// two decimals are rounded half to even. `NaN`, infinities and anything
    /// that is not a number are rejected, as are values that do not fit in
    /// `i64` cents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(EngineError::InvalidAmount("empty amount".to_string()));
        }
        let invalid = || EngineError::InvalidAmount(format!("invalid amount: {trimmed}"));
        let overflow = || EngineError::InvalidAmount("amount too large".to_string());

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let mut number = rest.trim().replace(',', ".");
        if number.is_empty() || number.starts_with(['+', '-']) {
            return Err(invalid());
        }
        if number.starts_with('.') {
            number.insert(0, '0');
        }

        let value = if number.contains(['e', 'E']) {
            Decimal::from_scientific(&number)
        } else {
            Decimal::from_str(&number)
        }
        .map_err(|_| invalid())?;

        let cents = value
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .ok_or_else(overflow)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(raw: &str) -> i64 {
        raw.parse::<Money>().unwrap().cents()
    }

    #[test]
    fn display_formats_two_decimals() {
        assert_eq!(Money::new(0).to_string(), "0.00");
        assert_eq!(Money::new(1).to_string(), "0.01");
        assert_eq!(Money::new(10).to_string(), "0.10");
        assert_eq!(Money::new(350).to_string(), "3.50");
        assert_eq!(Money::new(-1050).to_string(), "-10.50");
    }

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!(cents("10"), 1000);
        assert_eq!(cents("3.5"), 350);
        assert_eq!(cents("3,50"), 350);
        assert_eq!(cents("-0.01"), -1);
        assert_eq!(cents("+1.00"), 100);
        assert_eq!(cents("  2.30 "), 230);
    }

    #[test]
    fn parse_accepts_missing_integer_part() {
        assert_eq!(cents(".5"), 50);
        assert_eq!(cents("-.25"), -25);
        assert_eq!(cents(",75"), 75);
    }

    #[test]
    fn parse_accepts_exponent() {
        assert_eq!(cents("1e3"), 100_000);
        assert_eq!(cents("2.5e1"), 2_500);
        assert_eq!(cents("5e-1"), 50);
    }

    #[test]
    fn parse_rounds_extra_decimals_half_to_even() {
        assert_eq!(cents("3.14159"), 314);
        assert_eq!(cents("0.125"), 12);
        assert_eq!(cents("0.135"), 14);
        assert_eq!(cents("0.001"), 0);
        assert_eq!(cents("-2.999"), -300);
    }

    #[test]
    fn parse_rejects_non_numeric() {
        for raw in ["", "-", "abc", "12a", "NaN", "inf", "1.2.3", "+-1", "--1", "e3"] {
            assert!(raw.parse::<Money>().is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn parse_rejects_overflow() {
        assert!("92233720368547758.08".parse::<Money>().is_err());
        assert!("99999999999999999999".parse::<Money>().is_err());
    }

    #[test]
    fn sum_of_nothing_is_zero() {
        let total: Money = std::iter::empty::<Money>().sum();
        assert_eq!(total, Money::ZERO);
    }

    #[test]
    fn sum_saturates_instead_of_panicking() {
        let total: Money = [Money::new(i64::MAX), Money::new(1)].into_iter().sum();
        assert_eq!(total, Money::new(i64::MAX));
    }
}
