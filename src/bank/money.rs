use crate::Result;

use std::fmt;

use thiserror::Error;

/// Number of stored units in one whole currency unit (4 decimal places)
const SCALE: i64 = 10_000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Invalid amount \"{1}\": {0}")]
    Parse(&'static str, String),
}

/// Fixed-point money value, stored as ten-thousandths of a real
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub const fn from_whole(value: i64) -> Self {
        Self(value * SCALE)
    }

    /// Parses console input such as `100`, `12.5` or `12,50`.
    ///
    /// At most two decimal places are accepted, so every parsed amount shows
    /// exactly as typed.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().replace(',', ".");

        let (negative, digits) = match normalized.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, normalized.as_str()),
        };

        let mut parts = digits.split('.');

        if digits.split('.').count() > 2 {
            Err(MoneyError::Parse("too many decimal points", input.to_string()))?
        }

        let whole = parts.next().unwrap_or_default();
        let fraction = parts.next().unwrap_or_default();

        if whole.is_empty() && fraction.is_empty() {
            Err(MoneyError::Parse("no digits found", input.to_string()))?
        }

        let is_numeric = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if !is_numeric(whole) || !is_numeric(fraction) {
            Err(MoneyError::Parse("not a number", input.to_string()))?
        }

        if fraction.len() > 2 {
            Err(MoneyError::Parse("more than two decimal places", input.to_string()))?
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| MoneyError::Parse("value too large", input.to_string()))?
        };

        let fraction: i64 = format!("{:0<4}", fraction)[..4].parse()?;

        let units = whole
            .checked_mul(SCALE)
            .and_then(|units| units.checked_add(fraction))
            .ok_or_else(|| MoneyError::Parse("value too large", input.to_string()))?;

        return Ok(Money(if negative { -units } else { units }));
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        let sum = self
            .0
            .checked_add(other.0)
            .ok_or(MoneyError::Overflow("add", *self, *other))?;

        return Ok(Money(sum));
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        let difference = self
            .0
            .checked_sub(other.0)
            .ok_or(MoneyError::Overflow("sub", *self, *other))?;

        return Ok(Money(difference));
    }
}

/// Renders with two decimal places, rounding half away from zero
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let cents = (self.0.unsigned_abs() + 50) / 100;
        let sign = if self.0 < 0 && cents > 0 { "-" } else { "" };

        return write!(f, "{sign}{}.{:02}", cents / 100, cents % 100);
    }
}
