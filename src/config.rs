use crate::error::{FlowError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Multiplier applied to the caller's principal: inputs arrive in thousands.
pub const DEFAULT_UNIT_SCALE: f64 = 1000.0;
/// Length of one period node in years.
pub const DEFAULT_GROUP_YEARS: u32 = 5;

/// How years past the last full period are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RemainderPolicy {
    /// No period node for the remainder, but its interest still flows into the total.
    #[default]
    Drop,
    /// Remainder years are folded into the last period.
    ExtendLast,
    /// No period node for the remainder and its interest is left out of the total.
    ExcludeFromTotal,
}

/// Settings for [`AmortizationFlowBuilder`](crate::application::builder::AmortizationFlowBuilder).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfig {
    pub unit_scale: f64,
    pub group_years: u32,
    pub remainder: RemainderPolicy,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            unit_scale: DEFAULT_UNIT_SCALE,
            group_years: DEFAULT_GROUP_YEARS,
            remainder: RemainderPolicy::default(),
        }
    }
}

impl BuilderConfig {
    pub fn with_unit_scale(mut self, unit_scale: f64) -> Self {
        self.unit_scale = unit_scale;
        self
    }

    pub fn with_group_years(mut self, group_years: u32) -> Self {
        self.group_years = group_years;
        self
    }

    pub fn with_remainder(mut self, remainder: RemainderPolicy) -> Self {
        self.remainder = remainder;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.unit_scale.is_finite() || self.unit_scale <= 0.0 {
            return Err(FlowError::InvalidInput(format!(
                "Unit scale must be positive, got {}",
                self.unit_scale
            )));
        }
        if self.group_years == 0 {
            return Err(FlowError::InvalidInput(
                "Group size must be at least one year".to_string(),
            ));
        }
        Ok(())
    }
}
