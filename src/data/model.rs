use crate::error::LoadError;
use crate::session::SimulationSession;
use crate::workflow::{BaselineAnalysis, WorkflowConfig};
use serde::{Deserialize, Serialize};
use std::fs;

/// A workflow together with the analysis the external service produced for it.
///
/// This matches the record the dashboard keeps after running an analysis:
/// `{ "input": { ... }, "result": { ... } }`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SavedAnalysis {
    pub input: WorkflowConfig,
    pub result: BaselineAnalysis,
}

impl SavedAnalysis {
    /// Load a saved analysis from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Parse a saved analysis from JSON text.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(|e| LoadError::JsonParse(e.to_string()))
    }

    /// Starts a simulation session on this workflow.
    pub fn session(&self) -> SimulationSession {
        SimulationSession::new(self.input.clone(), &self.result)
    }
}

impl Default for SavedAnalysis {
    /// A representative mid-sized approval workflow, used when no file is provided.
    fn default() -> Self {
        let input = WorkflowConfig {
            name: Some("Vendor Onboarding".to_string()),
            description: Some("Contract review and supplier setup".to_string()),
            people_involved: 8,
            approvals_per_task: 3,
            tools_used: ["Email", "Excel", "Jira", "Slack", "SAP", "DocuSign"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            avg_delay_hours: 48.0,
            rejection_rate_percent: 15.0,
            monthly_volume: Some(12),
            avg_annual_salary: Some(1_800_000.0),
        };

        let mut result = BaselineAnalysis::new(1_375_056.0);
        result
            .extra
            .insert("severity".to_string(), serde_json::json!("High"));
        result
            .extra
            .insert("clarity_score".to_string(), serde_json::json!(39));

        Self { input, result }
    }
}
