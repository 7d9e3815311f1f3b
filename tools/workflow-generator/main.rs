use clap::Parser;
use friction::data::SavedAnalysis;
use friction::projection::{FrictionModel, TunableParameters};
use friction::workflow::{BaselineAnalysis, WORKING_WEEKS_PER_YEAR, WorkflowConfig};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;

const TOOL_POOL: [&str; 12] = [
    "Email", "Excel", "Jira", "Slack", "SAP", "DocuSign", "Notion", "Teams", "Salesforce",
    "Confluence", "Trello", "Google Drive",
];

/// A CLI tool to generate saved analyses for the friction engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_analysis.json")]
    output: String,

    /// The minimum number of people involved in the workflow
    #[arg(long, default_value_t = 2)]
    min_people: u32,

    /// The maximum number of people involved in the workflow
    #[arg(long, default_value_t = 20)]
    max_people: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min_people == 0 || cli.min_people > cli.max_people {
        eprintln!(
            "Error: --min-people ({}) must be at least 1 and not greater than --max-people ({})",
            cli.min_people, cli.max_people
        );
        std::process::exit(1);
    }

    println!(
        "Generating a workflow (people involved: {} to {})...",
        cli.min_people, cli.max_people
    );

    let input = generate_workflow(&mut rng, cli.min_people, cli.max_people);
    let result = generate_baseline(&mut rng, &input);

    let saved = SavedAnalysis { input, result };
    let json_output = serde_json::to_string_pretty(&saved)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved the analysis to '{}'",
        cli.output
    );

    Ok(())
}

fn generate_workflow(rng: &mut impl Rng, min_people: u32, max_people: u32) -> WorkflowConfig {
    let tool_count = rng.random_range(1..=6);
    let tools_used = TOOL_POOL
        .choose_multiple(rng, tool_count)
        .map(|t| t.to_string())
        .collect();

    let config = WorkflowConfig {
        name: Some("Generated Workflow".to_string()),
        description: None,
        people_involved: rng.random_range(min_people..=max_people),
        approvals_per_task: rng.random_range(0..=6),
        tools_used,
        avg_delay_hours: rng.random_range(0.0..96.0_f64).round(),
        rejection_rate_percent: rng.random_range(0.0..40.0_f64).round(),
        monthly_volume: Some(rng.random_range(1..=200)),
        avg_annual_salary: Some(rng.random_range(600_000.0..4_000_000.0_f64).round()),
    };
    println!(
        "-> {} people, {} approvals, {} tools.",
        config.people_involved,
        config.approvals_per_task,
        config.tools_used.len()
    );
    config
}

/// Produces a baseline near the model's own projection, with some noise, since the
/// external analysis service estimates the loss with its own formulas.
fn generate_baseline(rng: &mut impl Rng, input: &WorkflowConfig) -> BaselineAnalysis {
    let model = FrictionModel::new(input, &BaselineAnalysis::default());
    let projected = model.project(&TunableParameters::from_config(input));
    let noise = rng.random_range(0.85..1.15);

    let mut baseline = BaselineAnalysis::new(
        (projected.annual_projected_cost / WORKING_WEEKS_PER_YEAR * noise).round(),
    );
    let clarity = (100_i64
        - i64::from(input.people_involved) * 2
        - input.tools_used.len() as i64 * 5
        - i64::from(input.approvals_per_task) * 10)
        .clamp(10, 100);
    baseline
        .extra
        .insert("clarity_score".to_string(), serde_json::json!(clarity));
    println!("-> Baseline loss estimate {}.", baseline.estimated_financial_loss);
    baseline
}
