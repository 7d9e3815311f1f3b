use crate::error::ParameterError;
use crate::workflow::{WorkflowConfig, WorkflowContext};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Names one of the four knobs of a what-if simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    TeamSize,
    Approvals,
    ToolCount,
    MonthlyVolume,
}

impl Parameter {
    pub const ALL: [Parameter; 4] = [
        Parameter::TeamSize,
        Parameter::Approvals,
        Parameter::ToolCount,
        Parameter::MonthlyVolume,
    ];

    /// The inclusive range a value of this parameter is clamped to.
    pub fn bounds(self) -> RangeInclusive<u32> {
        match self {
            Parameter::TeamSize => 1..=50,
            Parameter::Approvals => 0..=10,
            Parameter::ToolCount => 1..=15,
            Parameter::MonthlyVolume => 1..=500,
        }
    }

    /// Clamps an arbitrary integer into this parameter's bounds.
    pub fn clamp(self, value: i64) -> u32 {
        let bounds = self.bounds();
        let clamped = value.clamp(i64::from(*bounds.start()), i64::from(*bounds.end()));
        // In range of u32 after the clamp above.
        clamped as u32
    }

    /// Human-readable label, as shown next to the slider.
    pub fn label(self) -> &'static str {
        match self {
            Parameter::TeamSize => "Team Size Involved",
            Parameter::Approvals => "Approvals Required",
            Parameter::ToolCount => "Tools in Workflow",
            Parameter::MonthlyVolume => "Monthly Volume",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Parameter::TeamSize => "team_size",
            Parameter::Approvals => "approvals",
            Parameter::ToolCount => "tool_count",
            Parameter::MonthlyVolume => "monthly_volume",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Parameter {
    type Err = ParameterError;

    /// Accepts snake_case, kebab-case and camelCase spellings, plus a few short forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "teamsize" | "team" | "people" => Ok(Parameter::TeamSize),
            "approvals" | "approval" => Ok(Parameter::Approvals),
            "toolcount" | "tools" => Ok(Parameter::ToolCount),
            "monthlyvolume" | "volume" => Ok(Parameter::MonthlyVolume),
            _ => Err(ParameterError::UnknownParameter(s.trim().to_string())),
        }
    }
}

/// Parses a `name=value` edit such as `approvals=2` or `team-size=8`.
///
/// The value is returned unclamped; clamping happens when the edit is applied.
pub fn parse_edit(edit: &str) -> Result<(Parameter, i64), ParameterError> {
    let (name, value) = edit
        .split_once('=')
        .ok_or_else(|| ParameterError::MalformedEdit(edit.to_string()))?;
    let parameter: Parameter = name.parse()?;
    let value = value
        .trim()
        .parse::<i64>()
        .map_err(|_| ParameterError::InvalidValue {
            parameter: parameter.to_string(),
            value: value.trim().to_string(),
        })?;
    Ok((parameter, value))
}

/// The live operating point of a what-if simulation.
///
/// Every value is kept inside its [`Parameter::bounds`]; there is no way to construct
/// or edit a `TunableParameters` that holds an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TunableParameters {
    team_size: u32,
    approvals: u32,
    tool_count: u32,
    monthly_volume: u32,
}

impl TunableParameters {
    pub fn new(team_size: u32, approvals: u32, tool_count: u32, monthly_volume: u32) -> Self {
        Self {
            team_size: Parameter::TeamSize.clamp(i64::from(team_size)),
            approvals: Parameter::Approvals.clamp(i64::from(approvals)),
            tool_count: Parameter::ToolCount.clamp(i64::from(tool_count)),
            monthly_volume: Parameter::MonthlyVolume.clamp(i64::from(monthly_volume)),
        }
    }

    /// The starting point of a simulation: the workflow exactly as configured.
    pub fn from_config(config: &WorkflowConfig) -> Self {
        Self::from_context(&WorkflowContext::from_config(config))
    }

    pub fn from_context(context: &WorkflowContext) -> Self {
        Self::new(
            context.people_involved,
            context.approval_gates,
            context.tool_count,
            context.monthly_volume,
        )
    }

    pub fn team_size(&self) -> u32 {
        self.team_size
    }

    pub fn approvals(&self) -> u32 {
        self.approvals
    }

    pub fn tool_count(&self) -> u32 {
        self.tool_count
    }

    pub fn monthly_volume(&self) -> u32 {
        self.monthly_volume
    }

    pub fn get(&self, parameter: Parameter) -> u32 {
        match parameter {
            Parameter::TeamSize => self.team_size,
            Parameter::Approvals => self.approvals,
            Parameter::ToolCount => self.tool_count,
            Parameter::MonthlyVolume => self.monthly_volume,
        }
    }

    /// Sets one parameter, clamping the value into its bounds.
    pub fn set(&mut self, parameter: Parameter, value: i64) {
        let value = parameter.clamp(value);
        match parameter {
            Parameter::TeamSize => self.team_size = value,
            Parameter::Approvals => self.approvals = value,
            Parameter::ToolCount => self.tool_count = value,
            Parameter::MonthlyVolume => self.monthly_volume = value,
        }
    }

    /// Returns a copy with one parameter changed.
    pub fn with(mut self, parameter: Parameter, value: i64) -> Self {
        self.set(parameter, value);
        self
    }
}
