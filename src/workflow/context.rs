use super::definition::WorkflowConfig;
use serde::Serialize;

/// Approval gates beyond this count are not drawn as individual stages.
pub const MAX_RENDERED_APPROVALS: u32 = 4;

/// Tools up to this count are treated as baseline tooling with no switching cost.
pub const FREE_TOOL_COUNT: u32 = 2;

/// Working hours per year, used to turn a salary into an hourly rate.
pub const WORKING_HOURS_PER_YEAR: f64 = 2000.0;

/// Facts derived once from a `WorkflowConfig` and shared by the projection model and
/// the topology generator, so both describe the same underlying workflow.
///
/// All values are taken from the configuration as given (no clamping); clamping only
/// applies to the tunable parameters of a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WorkflowContext {
    pub people_involved: u32,
    /// The true number of approval gates.
    pub approval_gates: u32,
    /// Approval gates drawn in the topology, capped at [`MAX_RENDERED_APPROVALS`].
    pub rendered_approvals: u32,
    pub tool_count: u32,
    /// More tools than the free allowance means manual cross-tool data entry.
    pub needs_tool_bridge: bool,
    /// Half of the observed delay is waiting that happens regardless of approvals.
    pub base_wait_hours: f64,
    /// The other half of the observed delay, spread across the original gates.
    pub delay_per_approval_hours: f64,
    pub rejection_rate_percent: f64,
    pub hourly_rate: f64,
    pub monthly_volume: u32,
}

impl WorkflowContext {
    pub fn from_config(config: &WorkflowConfig) -> Self {
        let approval_gates = config.approvals_per_task;
        let tool_count = config.tool_count();
        let delay = config.avg_delay_hours;

        let delay_per_approval_hours = if approval_gates > 0 {
            delay * 0.5 / approval_gates as f64
        } else {
            0.0
        };

        Self {
            people_involved: config.people_involved,
            approval_gates,
            rendered_approvals: approval_gates.min(MAX_RENDERED_APPROVALS),
            tool_count,
            needs_tool_bridge: tool_count > FREE_TOOL_COUNT,
            base_wait_hours: delay * 0.5,
            delay_per_approval_hours,
            rejection_rate_percent: config.rejection_rate_percent,
            hourly_rate: config.effective_annual_salary() / WORKING_HOURS_PER_YEAR,
            monthly_volume: config.effective_monthly_volume(),
        }
    }

    /// Whether rejected work is sent back for another pass.
    pub fn has_rework(&self) -> bool {
        self.rejection_rate_percent > 0.0
    }
}

impl From<&WorkflowConfig> for WorkflowContext {
    fn from(config: &WorkflowConfig) -> Self {
        Self::from_config(config)
    }
}
