use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Loan inputs drawn from the ranges the parameter surface offers:
/// principal 100-900 (thousands) in steps of 50, rate 1%-15% in steps of 1%,
/// term 5-30 years.
pub fn random_scenario<R: Rng>(rng: &mut R) -> (f64, f64, u32) {
    let principal = f64::from(rng.gen_range(2..=18u32) * 50);
    let rate = f64::from(rng.gen_range(1..=15u32)) / 100.0;
    let years = rng.gen_range(5..=30u32);
    (principal, rate, years)
}

pub fn generate_scenarios(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["principal", "rate", "years"])?;

    let mut rng = rand::thread_rng();
    for _ in 0..rows {
        let (principal, rate, years) = random_scenario(&mut rng);
        wtr.write_record([
            principal.to_string(),
            rate.to_string(),
            years.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
