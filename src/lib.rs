//! # Friction - Workflow Friction Simulation and Topology Engine
//!
//! **Friction** turns a description of an operational workflow (team size, approval
//! gates, tools, delay, rejection rate, run volume, salary) into two consistent views
//! of the same process: a financial projection of the time it loses, and a directed
//! process graph that marks where that time is lost.
//!
//! ## Core Workflow
//!
//! The engine works on a canonical workflow configuration and a baseline analysis
//! supplied by an external analysis service. The primary workflow is:
//!
//! 1.  **Load Your Data**: Parse a saved analysis with `SavedAnalysis`, or translate your own format by implementing the `IntoWorkflow` trait.
//! 2.  **Project**: Create a `FrictionModel` (or a `SimulationSession`) and project the annual cost of any operating point.
//! 3.  **Explore**: Edit tunable parameters on the session, or apply the auto-optimize heuristic, and read the recomputed projection, bullet rows and headline.
//! 4.  **Diagnose**: Generate the `TopologyGraph` of the workflow to see the bottleneck stages and the rework loop.
//!
//! ## Quick Start
//!
//! ```rust
//! use friction::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // 1. Describe the workflow and the baseline the analysis service reported.
//!     let config = WorkflowConfig {
//!         people_involved: 8,
//!         approvals_per_task: 3,
//!         tools_used: vec!["Email".into(), "Excel".into(), "Jira".into(), "Slack".into()],
//!         avg_delay_hours: 48.0,
//!         rejection_rate_percent: 15.0,
//!         monthly_volume: Some(12),
//!         avg_annual_salary: Some(1_800_000.0),
//!         ..Default::default()
//!     };
//!     let baseline = BaselineAnalysis::new(1_000_000.0);
//!
//!     // 2. Start a what-if session. It begins at the configured operating point.
//!     let mut session = SimulationSession::new(config.clone(), &baseline);
//!     println!("Baseline cost: {:.0}", session.baseline_cost());
//!
//!     // 3. Remove one approval gate and see what it is worth.
//!     let projection = session.set(Parameter::Approvals, 2);
//!     println!("Projected: {:.0}, savings: {:.0}", projection.annual_projected_cost, projection.annual_savings);
//!
//!     // ...or let the heuristic pick best-practice targets.
//!     session.apply_auto_optimize();
//!     for row in session.bullet_rows() {
//!         println!("{:<16} {:>3}% ({:?})", row.label, row.percent_remaining, row.band);
//!     }
//!
//!     // 4. Draw the process graph of the configured workflow.
//!     let graph = topology::generate(&config);
//!     assert_eq!(graph.bottlenecks().count(), 3);
//!     println!("{}", graph);
//!
//!     Ok(())
//! }
//! ```

pub mod data;
pub mod error;
pub mod normalize;
pub mod prelude;
pub mod projection;
pub mod session;
pub mod topology;
pub mod workflow;

#[cfg(feature = "python-bindings")]
mod python;
