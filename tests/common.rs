//! Common test utilities for building workflow configurations and baselines.
use friction::prelude::*;

/// A saved analysis in the shape the dashboard stores it, using the service's
/// snake_case field names.
#[allow(dead_code)]
pub const SAMPLE_ANALYSIS_JSON: &str = r#"{
    "input": {
        "name": "Invoice Approval",
        "description": "Monthly supplier invoices",
        "people_involved": 8,
        "approvals_per_task": 3,
        "tools_used": ["Email", "Excel", "Jira", "Slack", "SAP", "DocuSign"],
        "avg_delays_hours": 48.0,
        "rejection_rate": 15.0,
        "monthly_volume": 12,
        "avg_annual_salary": 1800000.0
    },
    "result": {
        "estimated_financial_loss": 250000.0,
        "severity": "High",
        "clarity_score": 39,
        "recommendations": [{"title": "Collapse approval layers"}]
    }
}"#;

/// The same workflow, written with the dashboard's camelCase names and without the
/// optional fields.
#[allow(dead_code)]
pub const CAMEL_CASE_ANALYSIS_JSON: &str = r#"{
    "input": {
        "peopleInvolved": 5,
        "approvalsPerTask": 2,
        "toolsUsed": ["Email", "Excel", "Jira"],
        "avgDelayHours": 10,
        "rejectionRatePercent": 12.5
    },
    "result": {
        "estimatedFinancialLoss": 1000.0
    }
}"#;

/// The reference workflow:
/// 8 people, 3 approvals, 6 tools, 48h delay, 15% rejections, 12 runs a month,
/// 1,800,000 salary.
#[allow(dead_code)]
pub fn create_reference_config() -> WorkflowConfig {
    WorkflowConfig {
        people_involved: 8,
        approvals_per_task: 3,
        tools_used: tools(&["Email", "Excel", "Jira", "Slack", "SAP", "DocuSign"]),
        avg_delay_hours: 48.0,
        rejection_rate_percent: 15.0,
        monthly_volume: Some(12),
        avg_annual_salary: Some(1_800_000.0),
        ..Default::default()
    }
}

/// Baseline loss `L = 250,000`, so the baseline cost is 12,500,000.
#[allow(dead_code)]
pub fn create_reference_baseline() -> BaselineAnalysis {
    BaselineAnalysis::new(250_000.0)
}

/// A configuration that only varies in what drives the topology.
#[allow(dead_code)]
pub fn create_topology_config(
    approvals_per_task: u32,
    tools_used: &[&str],
    rejection_rate_percent: f64,
) -> WorkflowConfig {
    WorkflowConfig {
        people_involved: 4,
        approvals_per_task,
        tools_used: tools(tools_used),
        avg_delay_hours: 12.0,
        rejection_rate_percent,
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn tools(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// Asserts two floats agree to within a relative tolerance.
#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}
