use super::definition::WorkflowConfig;
use crate::error::WorkflowConversionError;

/// A trait for custom data models that can be converted into a `WorkflowConfig`.
///
/// Configuration stores rarely agree on field names or units. Implementing this trait
/// on your own structs gives the engine a single translation point, so the projection
/// model and the topology generator only ever see the canonical configuration.
///
/// # Example
///
/// ```rust
/// use friction::prelude::*;
/// use friction::error::WorkflowConversionError;
///
/// // 1. Your own record, e.g. parsed from a spreadsheet export.
/// struct SheetRow {
///     headcount: i64,
///     sign_offs: i64,
///     apps: String, // comma separated
///     wait_days: f64,
/// }
///
/// // 2. Translate it into the canonical configuration.
/// impl IntoWorkflow for SheetRow {
///     fn into_workflow(self) -> std::result::Result<WorkflowConfig, WorkflowConversionError> {
///         let people_involved = u32::try_from(self.headcount).map_err(|_| {
///             WorkflowConversionError::ValidationError(format!(
///                 "headcount {} is out of range",
///                 self.headcount
///             ))
///         })?;
///         let approvals_per_task = u32::try_from(self.sign_offs).unwrap_or(0);
///         Ok(WorkflowConfig {
///             people_involved,
///             approvals_per_task,
///             tools_used: self.apps.split(',').map(|s| s.trim().to_string()).collect(),
///             avg_delay_hours: self.wait_days * 24.0,
///             ..Default::default()
///         })
///     }
/// }
///
/// let row = SheetRow { headcount: 4, sign_offs: 2, apps: "Jira, Slack".into(), wait_days: 1.0 };
/// let config = row.into_workflow().unwrap();
/// assert_eq!(config.tools_used.len(), 2);
/// assert_eq!(config.avg_delay_hours, 24.0);
/// ```
pub trait IntoWorkflow {
    /// Consumes the object and converts it into a canonical workflow configuration.
    fn into_workflow(self) -> Result<WorkflowConfig, WorkflowConversionError>;
}

impl IntoWorkflow for WorkflowConfig {
    fn into_workflow(self) -> Result<WorkflowConfig, WorkflowConversionError> {
        Ok(self)
    }
}
