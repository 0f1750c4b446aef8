//! Monetary amounts.

use serde::{Deserialize, Serialize};

/// Money amount represented in cents to avoid floating point issues.
///
/// All totals arithmetic is exact; the only rounding point is
/// [`Money::percent_of`], which rounds half away from zero to the nearest cent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    /// Amount in cents (e.g., 1000 = $10.00)
    cents: i64,
}

impl Money {
    /// Creates a new Money amount from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Returns zero money.
    pub const fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the dollar portion (whole number).
    pub fn dollars(&self) -> i64 {
        self.cents / 100
    }

    /// Returns the cents portion (remainder after dollars).
    pub fn cents_part(&self) -> i64 {
        self.cents.abs() % 100
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Multiplies by a quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money {
            cents: self.cents * i64::from(quantity),
        }
    }

    /// Returns `basis_points / 10_000` of this amount, rounded to the nearest cent.
    ///
    /// `percent_of(800)` is 8%.
    pub fn percent_of(&self, basis_points: i64) -> Money {
        let scaled = i128::from(self.cents) * i128::from(basis_points);
        let half = if scaled < 0 { -5_000 } else { 5_000 };
        Money {
            cents: ((scaled + half) / 10_000) as i64,
        }
    }

    /// Returns the amount in currency units, as rendered on the wire.
    pub fn to_units_f64(&self) -> f64 {
        self.cents as f64 / 100.0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cents < 0 {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents + rhs.cents,
        }
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.cents += rhs.cents;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        let mut total = Money::zero();
        for amount in iter {
            total += amount;
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let money = Money::from_cents(1234);
        assert_eq!(money.cents(), 1234);
        assert_eq!(money.dollars(), 12);
        assert_eq!(money.cents_part(), 34);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_cents(1234).to_string(), "$12.34");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-1234).to_string(), "-$12.34");
    }

    #[test]
    fn test_money_multiply_and_sum() {
        let a = Money::from_cents(8999);
        assert_eq!(a.multiply(3).cents(), 26997);

        let total: Money = [Money::from_cents(100), Money::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), 350);
    }

    #[test]
    fn test_percent_of_rounds_half_up() {
        // 8% of $179.98 = 14.3984 -> 14.40
        assert_eq!(Money::from_cents(17998).percent_of(800).cents(), 1440);
        // 8% of $0.06 = 0.0048 -> 0.00
        assert_eq!(Money::from_cents(6).percent_of(800).cents(), 0);
        // 8% of $0.07 = 0.0056 -> 0.01
        assert_eq!(Money::from_cents(7).percent_of(800).cents(), 1);
        assert_eq!(Money::zero().percent_of(800), Money::zero());
    }

    #[test]
    fn test_units_rendering() {
        assert_eq!(Money::from_cents(8999).to_units_f64(), 89.99);
        assert_eq!(Money::zero().to_units_f64(), 0.0);
    }

    #[test]
    fn test_serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(1000)).unwrap();
        assert_eq!(json, "1000");
    }
}
