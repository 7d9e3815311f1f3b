mod generator;
mod graph;

pub use generator::{generate, generate_from_context};
pub use graph::{StageKind, StageNode, TopologyGraph, TransitionEdge, TransitionKind};
