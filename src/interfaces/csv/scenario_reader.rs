use crate::error::{FlowError, Result};
use serde::Deserialize;
use std::io::Read;

/// One row of a scenario file: loan parameters as a caller would enter them.
///
/// `years` is kept as a raw number so that a fractional term surfaces as an
/// invalid-input error from the builder rather than a parse error.
#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
pub struct Scenario {
    pub principal: f64,
    pub rate: f64,
    pub years: f64,
}

/// Streams loan scenarios from a `principal, rate, years` CSV file.
///
/// Padding around fields is ignored and short or long rows are passed on to
/// deserialization, so a bad row becomes an error for that row only.
pub struct ScenarioReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ScenarioReader<R> {
    /// Wraps a scenario file or any other byte source.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Yields one `Scenario` per data row, in file order.
    pub fn scenarios(self) -> impl Iterator<Item = Result<Scenario>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(FlowError::from))
    }
}
