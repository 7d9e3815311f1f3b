//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the friction
//! crate. Import this module to get access to the core functionality without having
//! to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use friction::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let saved = SavedAnalysis::from_file("path/to/analysis.json")?;
//!
//! let mut session = saved.session();
//! session.set(Parameter::TeamSize, 4);
//! println!("Annual savings: {:.0}", session.projection().annual_savings);
//!
//! let graph = topology::generate(&saved.input);
//! println!("{}", graph);
//! # Ok(())
//! # }
//! ```

// Core model and simulation
pub use crate::projection::{
    FrictionBreakdown, FrictionModel, Parameter, ProjectionResult, TunableParameters,
    auto_optimize,
};
pub use crate::session::{BulletRow, EfficiencyBand, Headline, SimulationSession};

// Topology
pub use crate::topology::{self, StageKind, StageNode, TopologyGraph, TransitionKind};

// Workflow definitions
pub use crate::data::SavedAnalysis;
pub use crate::workflow::{BaselineAnalysis, IntoWorkflow, WorkflowConfig, WorkflowContext};

// Normalization
pub use crate::normalize::percent_remaining;

// Error types
pub use crate::error::{LoadError, ParameterError, WorkflowConversionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
