use crate::normalize::percent_remaining;
use crate::projection::{
    FrictionModel, Parameter, ProjectionResult, TunableParameters, auto_optimize,
};
use crate::workflow::{BaselineAnalysis, WorkflowConfig};

mod view;

pub use view::{BulletRow, EfficiencyBand, Headline};

/// The stateful side of a what-if simulation.
///
/// A session starts from a workflow exactly as configured and keeps the live tunable
/// parameters together with the projection they produce. Every edit clamps the value,
/// updates the parameters and recomputes the whole projection before returning, so
/// the parameters and the projection a caller reads always belong together.
///
/// The baseline cost is fixed when the session is created and is the reference for
/// every comparison the session reports.
#[derive(Debug, Clone)]
pub struct SimulationSession {
    config: WorkflowConfig,
    model: FrictionModel,
    initial: TunableParameters,
    current: TunableParameters,
    projection: ProjectionResult,
    optimized: bool,
}

/// Configures a session before it is handed out.
pub struct SessionBuilder {
    config: WorkflowConfig,
    baseline: BaselineAnalysis,
    edits: Vec<(Parameter, i64)>,
    optimized: bool,
}

impl SessionBuilder {
    pub fn new(config: WorkflowConfig, baseline: BaselineAnalysis) -> Self {
        Self {
            config,
            baseline,
            edits: Vec::new(),
            optimized: false,
        }
    }

    /// Queues an edit to apply once the session starts. Edits apply in the order given.
    pub fn with_edit(mut self, parameter: Parameter, value: i64) -> Self {
        self.edits.push((parameter, value));
        self
    }

    /// Applies the auto-optimize heuristic after all queued edits.
    pub fn optimized(mut self, optimized: bool) -> Self {
        self.optimized = optimized;
        self
    }

    pub fn build(self) -> SimulationSession {
        let mut session = SimulationSession::new(self.config, &self.baseline);
        for (parameter, value) in self.edits {
            session.set(parameter, value);
        }
        if self.optimized {
            session.apply_auto_optimize();
        }
        session
    }
}

impl SimulationSession {
    pub fn new(config: WorkflowConfig, baseline: &BaselineAnalysis) -> Self {
        let model = FrictionModel::new(&config, baseline);
        let initial = TunableParameters::from_context(model.context());
        let projection = model.project(&initial);

        tracing::debug!(
            baseline_cost = model.baseline_cost(),
            annual_projected_cost = projection.annual_projected_cost,
            "started simulation session"
        );

        Self {
            config,
            model,
            initial,
            current: initial,
            projection,
            optimized: false,
        }
    }

    pub fn builder(config: WorkflowConfig, baseline: BaselineAnalysis) -> SessionBuilder {
        SessionBuilder::new(config, baseline)
    }

    pub fn config(&self) -> &WorkflowConfig {
        &self.config
    }

    pub fn model(&self) -> &FrictionModel {
        &self.model
    }

    pub fn baseline_cost(&self) -> f64 {
        self.model.baseline_cost()
    }

    pub fn parameters(&self) -> &TunableParameters {
        &self.current
    }

    /// The parameters the session started with, before any edit.
    pub fn initial_parameters(&self) -> &TunableParameters {
        &self.initial
    }

    pub fn projection(&self) -> &ProjectionResult {
        &self.projection
    }

    /// Whether the auto-optimize strategy has been applied since the last reset.
    pub fn is_optimized(&self) -> bool {
        self.optimized
    }

    /// Sets one parameter (clamped to its bounds) and recomputes the projection.
    pub fn set(&mut self, parameter: Parameter, value: i64) -> &ProjectionResult {
        self.current.set(parameter, value);
        self.recompute()
    }

    pub fn set_team_size(&mut self, value: i64) -> &ProjectionResult {
        self.set(Parameter::TeamSize, value)
    }

    pub fn set_approvals(&mut self, value: i64) -> &ProjectionResult {
        self.set(Parameter::Approvals, value)
    }

    pub fn set_tool_count(&mut self, value: i64) -> &ProjectionResult {
        self.set(Parameter::ToolCount, value)
    }

    pub fn set_monthly_volume(&mut self, value: i64) -> &ProjectionResult {
        self.set(Parameter::MonthlyVolume, value)
    }

    /// Replaces the current parameters with the best-practice targets and recomputes.
    pub fn apply_auto_optimize(&mut self) -> &ProjectionResult {
        self.current = auto_optimize(&self.current);
        self.optimized = true;
        tracing::info!(
            team_size = self.current.team_size(),
            approvals = self.current.approvals(),
            tool_count = self.current.tool_count(),
            "applied auto-optimize strategy"
        );
        self.recompute()
    }

    /// Returns to the configured starting point.
    pub fn reset(&mut self) -> &ProjectionResult {
        self.current = self.initial;
        self.optimized = false;
        tracing::info!("reset simulation to configured parameters");
        self.recompute()
    }

    /// Rows of the bullet chart, each compared against its starting value.
    pub fn bullet_rows(&self) -> Vec<BulletRow> {
        vec![
            BulletRow::new(
                "Financial Cost",
                percent_remaining(self.projection.annual_projected_cost, self.baseline_cost()),
            ),
            self.parameter_row("Team Overhead", Parameter::TeamSize),
            self.parameter_row("Approval Drag", Parameter::Approvals),
            self.parameter_row("Tool Complexity", Parameter::ToolCount),
        ]
    }

    pub fn headline(&self) -> Headline {
        if !self.optimized {
            return Headline::Baseline {
                annual_cost: self.baseline_cost(),
            };
        }
        Headline::Optimized {
            annual_cost: self.projection.annual_projected_cost,
            annual_savings: self.projection.annual_savings,
            footprint_percent: percent_remaining(
                self.projection.annual_projected_cost,
                self.baseline_cost(),
            ),
            hours_recovered_per_year: self.projection.annual_hours_saved(),
        }
    }

    fn parameter_row(&self, label: &'static str, parameter: Parameter) -> BulletRow {
        BulletRow::new(
            label,
            percent_remaining(
                self.current.get(parameter) as f64,
                self.initial.get(parameter) as f64,
            ),
        )
    }

    fn recompute(&mut self) -> &ProjectionResult {
        self.projection = self.model.project(&self.current);
        tracing::debug!(
            team_size = self.current.team_size(),
            approvals = self.current.approvals(),
            tool_count = self.current.tool_count(),
            monthly_volume = self.current.monthly_volume(),
            annual_projected_cost = self.projection.annual_projected_cost,
            annual_savings = self.projection.annual_savings,
            "recomputed projection"
        );
        &self.projection
    }
}
