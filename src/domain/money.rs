use crate::error::{FlowError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A currency amount rounded to cents.
///
/// The schedule math runs on `f64`; `Money` is only used where amounts leave the
/// crate (CSV and JSON output), so that the written figures are stable and
/// free of floating-point noise.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Converts a floating-point amount, rounding half away from zero to exactly 2 dp.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(FlowError::InvalidInput(format!(
                "Amount must be finite, got {value}"
            )));
        }
        let mut decimal = Decimal::try_from(value)?
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        decimal.rescale(2);
        Ok(Self(decimal))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
