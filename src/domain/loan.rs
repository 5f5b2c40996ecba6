use crate::error::{FlowError, Result};
use serde::{Deserialize, Serialize};

/// Fixed-rate loan terms, with the principal in full currency units.
///
/// Construction always goes through validation, deserialization included, so a
/// `LoanParameters` value is known to describe a loan that can be amortized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLoanParameters")]
pub struct LoanParameters {
    principal: f64,
    annual_rate: f64,
    term_years: u32,
}

#[derive(Deserialize)]
struct RawLoanParameters {
    principal: f64,
    annual_rate: f64,
    term_years: u32,
}

impl TryFrom<RawLoanParameters> for LoanParameters {
    type Error = FlowError;

    fn try_from(raw: RawLoanParameters) -> Result<Self> {
        Self::new(raw.principal, raw.annual_rate, raw.term_years)
    }
}

impl LoanParameters {
    pub fn new(principal: f64, annual_rate: f64, term_years: u32) -> Result<Self> {
        if !principal.is_finite() || principal <= 0.0 {
            return Err(FlowError::InvalidInput(format!(
                "Principal must be positive, got {principal}"
            )));
        }
        if !annual_rate.is_finite() || annual_rate <= 0.0 {
            return Err(FlowError::InvalidInput(format!(
                "Annual rate must be positive, got {annual_rate}"
            )));
        }
        if term_years == 0 {
            return Err(FlowError::InvalidInput(
                "Term must be at least one year".to_string(),
            ));
        }
        if term_years.checked_mul(12).is_none() {
            return Err(FlowError::InvalidInput(format!(
                "Term of {term_years} years has too many monthly payments"
            )));
        }
        Ok(Self {
            principal,
            annual_rate,
            term_years,
        })
    }

    /// Validates caller-supplied numbers: the term may arrive as any number
    /// and must be a positive integer, the principal is multiplied by `unit_scale`.
    pub fn from_raw(
        principal: f64,
        annual_rate: f64,
        term_years: f64,
        unit_scale: f64,
    ) -> Result<Self> {
        if !term_years.is_finite() || term_years.fract() != 0.0 || term_years <= 0.0 {
            return Err(FlowError::InvalidInput(format!(
                "Term must be a positive whole number of years, got {term_years}"
            )));
        }
        if term_years > u32::MAX as f64 {
            return Err(FlowError::InvalidInput(format!(
                "Term of {term_years} years is out of range"
            )));
        }
        Self::new(principal * unit_scale, annual_rate, term_years as u32)
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn annual_rate(&self) -> f64 {
        self.annual_rate
    }

    pub fn term_years(&self) -> u32 {
        self.term_years
    }

    pub fn months(&self) -> u32 {
        self.term_years * 12
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 12.0
    }
}
