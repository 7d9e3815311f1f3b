use crate::data::SavedAnalysis;
use crate::projection::{Parameter, ProjectionResult};
use crate::session::SimulationSession;
use crate::topology;
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

impl<'py> IntoPyObject<'py> for ProjectionResult {
    type Target = PyDict;
    type Output = Bound<'py, Self::Target>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let breakdown = PyDict::new(py);
        breakdown.set_item("tool_hours", self.breakdown.tool_hours)?;
        breakdown.set_item("approval_hours", self.breakdown.approval_hours)?;
        breakdown.set_item("delay_hours", self.breakdown.delay_hours)?;
        breakdown.set_item("rework_hours", self.breakdown.rework_hours)?;

        let dict = PyDict::new(py);
        dict.set_item("breakdown", breakdown)?;
        dict.set_item("time_loss_per_run_hours", self.time_loss_per_run_hours)?;
        dict.set_item("hourly_rate", self.hourly_rate)?;
        dict.set_item("cost_per_run", self.cost_per_run)?;
        dict.set_item("annual_projected_cost", self.annual_projected_cost)?;
        dict.set_item("baseline_cost", self.baseline_cost)?;
        dict.set_item("annual_savings", self.annual_savings)?;
        Ok(dict)
    }
}

/// A what-if simulation over one analysed workflow.
///
/// The simulator starts at the workflow exactly as configured. Every edit clamps the
/// value to the parameter's range and recomputes the full projection.
#[pyclass(name = "Simulator")]
struct SimulatorPy {
    saved: SavedAnalysis,
    session: SimulationSession,
}

#[pymethods]
impl SimulatorPy {
    /// Creates a simulator from a saved analysis.
    ///
    /// Args:
    ///     analysis_json (str): A JSON object with an "input" workflow configuration
    ///         and the "result" of the external analysis.
    ///
    /// Raises:
    ///     ValueError: If the JSON is malformed or misses required fields.
    #[new]
    fn new(analysis_json: &str) -> PyResult<Self> {
        let saved = SavedAnalysis::from_json(analysis_json)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        let session = saved.session();
        Ok(SimulatorPy { saved, session })
    }

    /// Sets a parameter ("team_size", "approvals", "tool_count" or "monthly_volume")
    /// and returns the recomputed projection as a dict.
    ///
    /// Raises:
    ///     KeyError: If the parameter name is unknown.
    fn set(&mut self, name: &str, value: i64) -> PyResult<ProjectionResult> {
        let parameter: Parameter = name
            .parse()
            .map_err(|e: crate::error::ParameterError| PyKeyError::new_err(e.to_string()))?;
        Ok(*self.session.set(parameter, value))
    }

    /// Applies the auto-optimize heuristic and returns the recomputed projection.
    fn auto_optimize(&mut self) -> ProjectionResult {
        *self.session.apply_auto_optimize()
    }

    /// Restores the configured parameters and returns the projection.
    fn reset(&mut self) -> ProjectionResult {
        *self.session.reset()
    }

    /// The current projection as a dict.
    fn projection(&self) -> ProjectionResult {
        *self.session.projection()
    }

    /// The current parameters as a dict of name -> value.
    fn parameters<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new(py);
        for parameter in Parameter::ALL {
            dict.set_item(parameter.to_string(), self.session.parameters().get(parameter))?;
        }
        Ok(dict)
    }

    /// Bullet chart rows as a list of (label, percent_remaining) tuples.
    fn bullet_rows(&self) -> Vec<(String, u32)> {
        self.session
            .bullet_rows()
            .into_iter()
            .map(|row| (row.label.to_string(), row.percent_remaining))
            .collect()
    }

    /// The process graph of the configured workflow, serialized as JSON.
    fn topology_json(&self) -> PyResult<String> {
        let graph = topology::generate(&self.saved.input);
        serde_json::to_string(&graph).map_err(|e| PyValueError::new_err(e.to_string()))
    }
}

/// Workflow friction simulation and topology engine.
///
/// This module provides Python bindings to the friction Rust library: what-if cost
/// projections over an analysed workflow and its process graph.
#[pymodule]
fn friction(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<SimulatorPy>()?;
    Ok(())
}
