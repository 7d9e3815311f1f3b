use serde::{Deserialize, Serialize};

/// Annual salary assumed when a workflow does not state one.
pub const DEFAULT_ANNUAL_SALARY: f64 = 2_500_000.0;

/// Monthly run volume assumed when a workflow does not state one.
pub const DEFAULT_MONTHLY_VOLUME: u32 = 50;

/// Working weeks per year, used to annualize the external loss estimate.
pub const WORKING_WEEKS_PER_YEAR: f64 = 50.0;

/// The immutable description of an operational workflow, as captured by the input form
/// and stored by the configuration service.
///
/// Field names follow the analysis service's snake_case wire format; the camelCase
/// names used by the dashboard are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(alias = "peopleInvolved")]
    pub people_involved: u32,
    #[serde(alias = "approvalsPerTask")]
    pub approvals_per_task: u32,
    #[serde(default, alias = "toolsUsed")]
    pub tools_used: Vec<String>,
    #[serde(default, rename = "avg_delays_hours", alias = "avgDelayHours")]
    pub avg_delay_hours: f64,
    #[serde(default, rename = "rejection_rate", alias = "rejectionRatePercent")]
    pub rejection_rate_percent: f64,

    /// Runs per month. `None` or 0 falls back to [`DEFAULT_MONTHLY_VOLUME`].
    #[serde(default, alias = "monthlyVolume")]
    pub monthly_volume: Option<u32>,
    /// Average annual salary of the people involved. `None` or a non-positive value
    /// falls back to [`DEFAULT_ANNUAL_SALARY`].
    #[serde(default, alias = "avgAnnualSalary")]
    pub avg_annual_salary: Option<f64>,
}

impl WorkflowConfig {
    /// The monthly volume after applying the documented default.
    pub fn effective_monthly_volume(&self) -> u32 {
        match self.monthly_volume {
            Some(volume) if volume > 0 => volume,
            _ => DEFAULT_MONTHLY_VOLUME,
        }
    }

    /// The annual salary after applying the documented default.
    pub fn effective_annual_salary(&self) -> f64 {
        match self.avg_annual_salary {
            Some(salary) if salary > 0.0 => salary,
            _ => DEFAULT_ANNUAL_SALARY,
        }
    }

    pub fn tool_count(&self) -> u32 {
        u32::try_from(self.tools_used.len()).unwrap_or(u32::MAX)
    }
}

/// The first-pass analysis produced by the external analysis service.
///
/// Only `estimated_financial_loss` is read by this crate. Every other field the
/// service sends (clarity score, severity, recommendations, ...) is kept verbatim in
/// `extra` so it can be handed back to the presentation layer untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaselineAnalysis {
    #[serde(alias = "estimatedFinancialLoss")]
    pub estimated_financial_loss: f64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BaselineAnalysis {
    pub fn new(estimated_financial_loss: f64) -> Self {
        Self {
            estimated_financial_loss,
            extra: serde_json::Map::new(),
        }
    }

    /// The fixed annual reference cost every scenario is compared against.
    pub fn baseline_cost(&self) -> f64 {
        self.estimated_financial_loss * WORKING_WEEKS_PER_YEAR
    }
}
