use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1} and {2}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Amount of currency in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(pub i64);

impl Money {
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);
    pub const ZERO: Self = Self(0);

    const CENTS: i64 = 100;

    /// Parses a decimal string with at most two decimal places, e.g. "12", "-3.5" or "0.25"
    pub fn parse(string: &str) -> Result<Self, MoneyError> {
        let trimmed = string.trim();

        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let mut parts = digits.split('.');

        let units = parts.next().unwrap_or_default();
        let cents = parts.next();

        if parts.next().is_some() {
            return Err(MoneyError::Parse("Too many decimal points", string.to_string()));
        }

        if units.is_empty() && cents.map_or(true, str::is_empty) {
            return Err(MoneyError::Parse("No digits", string.to_string()));
        }

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !all_digits(units) || !cents.map_or(true, all_digits) {
            return Err(MoneyError::Parse("Invalid digit", string.to_string()));
        }

        let cents = match cents {
            None => "00".to_string(),
            Some(cents) if cents.len() > 2 => {
                return Err(MoneyError::Parse("Too many decimal places", string.to_string()))
            }
            Some(cents) => format!("{:0<2}", cents),
        };

        let too_large = || MoneyError::Parse("Amount too large", string.to_string());

        let units: i64 = if units.is_empty() {
            0
        } else {
            units.parse().map_err(|_| too_large())?
        };
        let cents: i64 = cents.parse().map_err(|_| too_large())?;

        let value = units
            .checked_mul(Self::CENTS)
            .and_then(|value| value.checked_add(cents))
            .ok_or_else(too_large)?;

        Ok(Money(if negative { -value } else { value }))
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn add(&mut self, other: &Self) -> Result<(), MoneyError> {
        self.0 = match self.0.checked_add(other.0) {
            Some(value) => value,
            None if other.0 > 0 => return Err(MoneyError::Overflow("add", *self, *other)),
            None => return Err(MoneyError::Underflow("add", *self, *other)),
        };

        Ok(())
    }

    pub fn sub(&mut self, other: &Self) -> Result<(), MoneyError> {
        self.0 = match self.0.checked_sub(other.0) {
            Some(value) => value,
            None if other.0 < 0 => return Err(MoneyError::Overflow("sub", *self, *other)),
            None => return Err(MoneyError::Underflow("sub", *self, *other)),
        };

        Ok(())
    }

    /// Non-mutating variant of `add`
    pub fn plus(self, other: Self) -> Result<Self, MoneyError> {
        let mut sum = self;
        sum.add(&other)?;
        Ok(sum)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let cents = Self::CENTS as u64;

        write!(f, "{sign}{}.{:02}", abs / cents, abs % cents)
    }
}
