use clap::Parser;
use friction::prelude::*;
use friction::projection::parse_edit;
use serde::Serialize;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// What-if cost projections and process graphs for analysed workflows
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a saved analysis JSON file ({"input": ..., "result": ...})
    analysis_path: Option<String>,

    /// Edit a parameter before projecting, e.g. `--set approvals=1` (repeatable)
    #[arg(short, long = "set", value_name = "NAME=VALUE")]
    edits: Vec<String>,

    /// Apply the auto-optimize strategy after all edits
    #[arg(short, long)]
    optimize: bool,

    /// Print the full report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log every recomputation to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Run in interactive mode and edit parameters from a prompt
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

/// Everything the CLI knows about one scenario, for `--json` output.
#[derive(Serialize)]
struct Report<'a> {
    workflow: &'a WorkflowConfig,
    parameters: &'a TunableParameters,
    projection: &'a ProjectionResult,
    bullet_rows: Vec<BulletRow>,
    headline: Headline,
    topology: TopologyGraph,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let saved = match &cli.analysis_path {
        Some(path) => SavedAnalysis::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load analysis: {}", e))),
        None => {
            eprintln!("No analysis file provided. Using the built-in sample workflow.");
            SavedAnalysis::default()
        }
    };

    let mut builder = SimulationSession::builder(saved.input.clone(), saved.result.clone());
    for edit in &cli.edits {
        let (parameter, value) =
            parse_edit(edit).unwrap_or_else(|e| exit_with_error(&e.to_string()));
        builder = builder.with_edit(parameter, value);
    }
    let mut session = builder.optimized(cli.optimize).build();

    if cli.human {
        run_interactive(&mut session);
    } else if cli.json {
        print_json(&session);
    } else {
        print_report(&session);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_json(session: &SimulationSession) {
    let report = Report {
        workflow: session.config(),
        parameters: session.parameters(),
        projection: session.projection(),
        bullet_rows: session.bullet_rows(),
        headline: session.headline(),
        topology: topology::generate(session.config()),
    };
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => exit_with_error(&format!("Failed to serialize report: {}", e)),
    }
}

fn print_report(session: &SimulationSession) {
    let config = session.config();
    if let Some(name) = &config.name {
        println!("Workflow: {}", name);
    }

    println!("\n--- Process Topology ---");
    print!("{}", topology::generate(config));

    print_projection(session);
    println!();
}

fn print_projection(session: &SimulationSession) {
    let params = session.parameters();
    let projection = session.projection();

    println!("\n--- Scenario ---");
    for parameter in Parameter::ALL {
        println!(
            "{:<20} {:>4}  (configured {})",
            parameter.label(),
            params.get(parameter),
            session.initial_parameters().get(parameter)
        );
    }

    println!("\n--- Friction per Run ---");
    let breakdown = &projection.breakdown;
    println!("Tool switching:      {:>10.1} h", breakdown.tool_hours);
    println!("Approval overhead:   {:>10.1} h", breakdown.approval_hours);
    println!("Waiting:             {:>10.1} h", breakdown.delay_hours);
    println!("Rework:              {:>10.1} h", breakdown.rework_hours);
    println!("Total:               {:>10.1} h", projection.time_loss_per_run_hours);

    println!("\n--- Annual Projection ---");
    println!("Hourly rate:         {:>14.2}", projection.hourly_rate);
    println!("Cost per run:        {:>14.0}", projection.cost_per_run);
    println!("Baseline cost:       {:>14.0}", projection.baseline_cost);
    println!("Projected cost:      {:>14.0}", projection.annual_projected_cost);
    println!("Annual savings:      {:>14.0}", projection.annual_savings);

    println!("\n--- Remaining Consumption (% of baseline) ---");
    for row in session.bullet_rows() {
        println!(
            "{:<16} {:>3}%  {:?}",
            row.label, row.percent_remaining, row.band
        );
    }

    if let Headline::Optimized {
        footprint_percent,
        hours_recovered_per_year,
        ..
    } = session.headline()
    {
        println!(
            "\nStrategy applied: footprint reduced to {}% of the original, recovering {:.0} hours per year.",
            footprint_percent, hours_recovered_per_year
        );
    }
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(session: &mut SimulationSession) {
    println!("--- Friction Interactive Mode ---");
    println!("Commands: NAME=VALUE, optimize, reset, show, quit");
    print_projection(session);

    loop {
        let line = prompt_for_input("Edit");
        match line.as_str() {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "optimize" => {
                session.apply_auto_optimize();
            }
            "reset" => {
                session.reset();
            }
            "show" => {
                print!("{}", topology::generate(session.config()));
                continue;
            }
            edit => match parse_edit(edit) {
                Ok((parameter, value)) => {
                    session.set(parameter, value);
                }
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            },
        }
        print_projection(session);
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str) -> String {
    print!("> {}: ", prompt_text);
    if io::stdout().flush().is_err() {
        exit_with_error("Failed to write to stdout");
    }

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        // End of input behaves like `quit`.
        Ok(0) => "quit".to_string(),
        Ok(_) => line.trim().to_string(),
        Err(e) => exit_with_error(&format!("Failed to read line: {}", e)),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
