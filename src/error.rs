use thiserror::Error;

/// Errors that can occur while loading a saved analysis record.
#[derive(Error, Debug, Clone)]
pub enum LoadError {
    #[error("Could not read saved analysis '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse saved analysis JSON: {0}")]
    JsonParse(String),
}

/// Errors that can occur when converting a custom user format into a `WorkflowConfig`.
#[derive(Error, Debug, Clone)]
pub enum WorkflowConversionError {
    #[error("Invalid custom workflow data: {0}")]
    ValidationError(String),
}

/// Errors that can occur when naming or editing a tunable parameter from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    #[error(
        "Unknown parameter '{0}', expected one of: team_size, approvals, tool_count, monthly_volume"
    )]
    UnknownParameter(String),

    #[error("Edit '{0}' is malformed, expected the form name=value")]
    MalformedEdit(String),

    #[error("Value '{value}' for parameter '{parameter}' is not an integer")]
    InvalidValue { parameter: String, value: String },
}
