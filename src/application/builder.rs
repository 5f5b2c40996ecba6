use crate::config::{BuilderConfig, RemainderPolicy};
use crate::domain::flow::{FlowGraph, INTEREST_NODE, PRINCIPAL_NODE, TOTAL_NODE, period_label};
use crate::domain::loan::LoanParameters;
use crate::domain::schedule::{AmortizationSchedule, YearlyTotals};
use crate::error::Result;
use tracing::debug;

/// A run of consecutive loan years shown as one node. `start` is 0-based, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Period {
    start: u32,
    end: u32,
}

impl Period {
    fn label(&self) -> String {
        period_label(self.start + 1, self.end)
    }

    fn years<'a>(&self, schedule: &'a AmortizationSchedule) -> &'a [YearlyTotals] {
        &schedule.years[self.start as usize..self.end as usize]
    }
}

/// Turns loan terms into a principal/interest flow diagram.
///
/// The builder holds only its configuration. Every call to [`build`](Self::build)
/// works on its own local schedule, so one builder can serve any number of
/// callers and identical inputs always yield identical graphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmortizationFlowBuilder {
    config: BuilderConfig,
}

impl AmortizationFlowBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Builds the flow graph for a loan whose principal is given in caller
    /// units (scaled by `unit_scale`).
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidInput` for a non-positive principal, rate or term.
    pub fn build(&self, principal: f64, annual_rate: f64, term_years: u32) -> Result<FlowGraph> {
        self.build_from_raw(principal, annual_rate, f64::from(term_years))
    }

    /// Same as [`build`](Self::build) but accepts the term as any number, which
    /// must turn out to be a positive integer.
    pub fn build_from_raw(
        &self,
        principal: f64,
        annual_rate: f64,
        term_years: f64,
    ) -> Result<FlowGraph> {
        self.config.validate()?;
        let params =
            LoanParameters::from_raw(principal, annual_rate, term_years, self.config.unit_scale)?;
        self.build_params(&params)
    }

    /// Builds the flow graph for already-scaled loan parameters.
    pub fn build_params(&self, params: &LoanParameters) -> Result<FlowGraph> {
        self.config.validate()?;
        let schedule = AmortizationSchedule::compute(params);
        let periods = self.periods(params.term_years());

        let mut graph = FlowGraph::default();
        for period in &periods {
            graph.push_node(period.label());
        }
        let principal_idx = graph.push_node(PRINCIPAL_NODE);
        let interest_idx = graph.push_node(INTEREST_NODE);

        let mut grouped_interest = 0.0;
        for (idx, period) in periods.iter().enumerate() {
            let years = period.years(&schedule);
            let principal: f64 = years.iter().map(|y| y.principal_paid).sum();
            let interest: f64 = years.iter().map(|y| y.interest_paid).sum();
            grouped_interest += interest;
            graph.push_edge(idx, principal_idx, principal);
            graph.push_edge(idx, interest_idx, interest);
        }

        let total_interest = match self.config.remainder {
            RemainderPolicy::Drop | RemainderPolicy::ExtendLast => schedule.total_interest(),
            RemainderPolicy::ExcludeFromTotal => grouped_interest,
        };

        let total_idx = graph.push_node(TOTAL_NODE);
        graph.push_edge(principal_idx, total_idx, params.principal());
        graph.push_edge(interest_idx, total_idx, total_interest);

        debug!(
            principal = params.principal(),
            annual_rate = params.annual_rate(),
            term_years = params.term_years(),
            monthly_payment = schedule.monthly_payment,
            periods = periods.len(),
            "Built amortization flow graph"
        );

        Ok(graph)
    }

    /// Computes the year-by-year schedule behind a graph, principal in caller units.
    pub fn schedule(
        &self,
        principal: f64,
        annual_rate: f64,
        term_years: f64,
    ) -> Result<AmortizationSchedule> {
        self.config.validate()?;
        let params =
            LoanParameters::from_raw(principal, annual_rate, term_years, self.config.unit_scale)?;
        Ok(AmortizationSchedule::compute(&params))
    }

    fn periods(&self, term_years: u32) -> Vec<Period> {
        let size = self.config.group_years;
        let full = term_years / size;
        let mut periods: Vec<Period> = (0..full)
            .map(|i| Period {
                start: i * size,
                end: (i + 1) * size,
            })
            .collect();

        let covered = full * size;
        if covered < term_years && self.config.remainder == RemainderPolicy::ExtendLast {
            match periods.last_mut() {
                Some(last) => last.end = term_years,
                None => periods.push(Period {
                    start: 0,
                    end: term_years,
                }),
            }
        }
        periods
    }
}
