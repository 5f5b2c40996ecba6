use crate::domain::money::Money;
use crate::domain::schedule::AmortizationSchedule;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct YearRecord {
    year: u32,
    principal: Money,
    interest: Money,
    payments: Money,
}

/// Writes the yearly totals of `schedule` as CSV, amounts rounded to cents.
pub fn write_schedule<W: Write>(sink: W, schedule: &AmortizationSchedule) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);
    for totals in &schedule.years {
        writer.serialize(YearRecord {
            year: totals.year,
            principal: Money::from_f64(totals.principal_paid)?,
            interest: Money::from_f64(totals.interest_paid)?,
            payments: Money::from_f64(totals.payments())?,
        })?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::loan::LoanParameters;

    #[test]
    fn test_write_schedule() {
        let params = LoanParameters::new(250_000.0, 0.06, 25).unwrap();
        let schedule = AmortizationSchedule::compute(&params);

        let mut output = Vec::new();
        write_schedule(&mut output, &schedule).unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "year,principal,interest,payments");
        assert_eq!(lines.len(), 26);
        assert!(lines[1].starts_with("1,"));
        assert!(lines[1].ends_with(",19329.04"), "row was {}", lines[1]);
    }
}
