use crate::workflow::{BaselineAnalysis, FREE_TOOL_COUNT, WorkflowConfig, WorkflowContext};
use serde::Serialize;

mod optimize;
mod parameters;

pub use optimize::auto_optimize;
pub use parameters::{Parameter, TunableParameters, parse_edit};

const MONTHS_PER_YEAR: f64 = 12.0;

/// Hours lost per run, split by where the friction comes from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrictionBreakdown {
    /// Context switching across tools beyond the free allowance.
    pub tool_hours: f64,
    /// Every approval gate taxes every person involved.
    pub approval_hours: f64,
    /// Waiting, calibrated from the configured delay.
    pub delay_hours: f64,
    /// Redone work after rejections.
    pub rework_hours: f64,
}

impl FrictionBreakdown {
    pub fn total(&self) -> f64 {
        self.tool_hours + self.approval_hours + self.delay_hours + self.rework_hours
    }
}

/// The financial picture of one operating point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionResult {
    pub breakdown: FrictionBreakdown,
    pub time_loss_per_run_hours: f64,
    pub hourly_rate: f64,
    pub cost_per_run: f64,
    pub annual_projected_cost: f64,
    pub baseline_cost: f64,
    /// `baseline_cost - annual_projected_cost`. Negative when the scenario is worse
    /// than the baseline.
    pub annual_savings: f64,
}

impl ProjectionResult {
    /// Working hours the annual savings correspond to at the workflow's hourly rate.
    pub fn annual_hours_saved(&self) -> f64 {
        if self.hourly_rate > 0.0 {
            self.annual_savings / self.hourly_rate
        } else {
            0.0
        }
    }
}

/// Projects the annual cost of hypothetical operating points of one workflow.
///
/// The model is calibrated once from the baseline configuration (delay per approval,
/// rejection rate, hourly rate) and the external loss estimate (baseline cost). After
/// that, [`FrictionModel::project`] is a pure function of the tunable parameters, and
/// every call recomputes the full result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrictionModel {
    context: WorkflowContext,
    baseline_cost: f64,
}

impl FrictionModel {
    pub fn new(config: &WorkflowConfig, baseline: &BaselineAnalysis) -> Self {
        Self::from_context(WorkflowContext::from_config(config), baseline.baseline_cost())
    }

    pub fn from_context(context: WorkflowContext, baseline_cost: f64) -> Self {
        Self {
            context,
            baseline_cost,
        }
    }

    pub fn context(&self) -> &WorkflowContext {
        &self.context
    }

    pub fn baseline_cost(&self) -> f64 {
        self.baseline_cost
    }

    /// Projects the friction and cost of running the workflow at `params`.
    pub fn project(&self, params: &TunableParameters) -> ProjectionResult {
        let breakdown = self.friction_per_run(params);
        let time_loss_per_run_hours = breakdown.total();

        let hourly_rate = self.context.hourly_rate;
        let cost_per_run = time_loss_per_run_hours * hourly_rate;
        let annual_projected_cost =
            cost_per_run * params.monthly_volume() as f64 * MONTHS_PER_YEAR;

        ProjectionResult {
            breakdown,
            time_loss_per_run_hours,
            hourly_rate,
            cost_per_run,
            annual_projected_cost,
            baseline_cost: self.baseline_cost,
            annual_savings: self.baseline_cost - annual_projected_cost,
        }
    }

    fn friction_per_run(&self, params: &TunableParameters) -> FrictionBreakdown {
        let team = params.team_size() as f64;
        let approvals = params.approvals() as f64;

        let extra_tools = params.tool_count().saturating_sub(FREE_TOOL_COUNT) as f64;
        let tool_hours = extra_tools * 0.5 * team;

        let approval_hours = approvals * team * 1.5;

        // Gates are removed or added at the per-gate rate learned from the baseline.
        let new_delay =
            self.context.base_wait_hours + self.context.delay_per_approval_hours * approvals;
        let delay_hours = new_delay * team;

        let rework_hours = (delay_hours + approval_hours)
            * (self.context.rejection_rate_percent / 100.0)
            * 1.5;

        FrictionBreakdown {
            tool_hours,
            approval_hours,
            delay_hours,
            rework_hours,
        }
    }
}

/// One-off projection without keeping a model around.
pub fn project(
    config: &WorkflowConfig,
    baseline: &BaselineAnalysis,
    params: &TunableParameters,
) -> ProjectionResult {
    FrictionModel::new(config, baseline).project(params)
}
