use super::loan::LoanParameters;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Largest acceptable balance left after the last payment, relative to the principal.
pub const RESIDUAL_TOLERANCE: f64 = 1e-6;

/// Fixed monthly payment of a fully amortizing loan.
///
/// Uses the annuity formula `P * r * (1 + r)^n / ((1 + r)^n - 1)`, with
/// `(1 + r)^n - 1` evaluated as `expm1(n * ln1p(r))` so that tiny rates keep
/// their precision. When that term is zero (a zero rate, or one too small to
/// register) the payment is a straight split of the principal over `months`.
pub fn monthly_payment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    let n = f64::from(months);
    let growth_m1 = (n * monthly_rate.ln_1p()).exp_m1();
    if growth_m1 == 0.0 {
        return principal / n;
    }
    principal * monthly_rate * (growth_m1 + 1.0) / growth_m1
}

/// Split of one monthly payment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyLedgerEntry {
    pub interest: f64,
    pub principal: f64,
}

impl MonthlyLedgerEntry {
    fn for_balance(balance: f64, monthly_rate: f64, payment: f64) -> Self {
        let interest = balance * monthly_rate;
        Self {
            interest,
            principal: payment - interest,
        }
    }
}

/// Principal and interest paid over one loan year.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YearlyTotals {
    /// 1-based year number.
    pub year: u32,
    pub principal_paid: f64,
    pub interest_paid: f64,
}

impl YearlyTotals {
    pub fn payments(&self) -> f64 {
        self.principal_paid + self.interest_paid
    }

    fn record(&mut self, entry: MonthlyLedgerEntry) {
        self.principal_paid += entry.principal;
        self.interest_paid += entry.interest;
    }
}

/// Year-by-year amortization of a loan, simulated one month at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub monthly_payment: f64,
    pub years: Vec<YearlyTotals>,
    /// Balance left after the final month, never negative.
    pub residual_balance: f64,
}

impl AmortizationSchedule {
    pub fn compute(params: &LoanParameters) -> Self {
        let rate = params.monthly_rate();
        let payment = monthly_payment(params.principal(), rate, params.months());

        let mut balance = params.principal();
        let mut years = Vec::with_capacity(params.term_years() as usize);
        for year in 1..=params.term_years() {
            let mut totals = YearlyTotals {
                year,
                ..Default::default()
            };
            for _ in 0..12 {
                let entry = MonthlyLedgerEntry::for_balance(balance, rate, payment);
                totals.record(entry);
                balance -= entry.principal;
            }
            years.push(totals);
        }

        let tolerance = RESIDUAL_TOLERANCE * params.principal();
        if balance.abs() > tolerance {
            warn!(
                residual = balance,
                tolerance, "Loan balance not exhausted after final payment"
            );
        }

        Self {
            monthly_payment: payment,
            years,
            residual_balance: balance.max(0.0),
        }
    }

    pub fn total_principal(&self) -> f64 {
        self.years.iter().map(|y| y.principal_paid).sum()
    }

    pub fn total_interest(&self) -> f64 {
        self.years.iter().map(|y| y.interest_paid).sum()
    }

    pub fn total_paid(&self) -> f64 {
        self.years.iter().map(YearlyTotals::payments).sum()
    }
}
