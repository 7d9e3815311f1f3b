use super::graph::{StageKind, StageNode, TopologyGraph, TransitionEdge, TransitionKind};
use crate::workflow::{WorkflowConfig, WorkflowContext};
use itertools::Itertools;

const START_ID: &str = "start";
const BRIDGE_ID: &str = "tools";
const END_ID: &str = "end";
const APPROVAL_ID_PREFIX: &str = "app-";

/// Builds the process graph of a workflow.
///
/// Stages are emitted as start, one approval per gate (at most four, every gate after
/// the first flagged as a redundant bottleneck), a data entry bridge when more than
/// two tools are involved, and end. Consecutive stages are chained with sequential
/// transitions. When work gets rejected and the graph has something between start
/// and end, a rework transition loops back to start from the first approval, or from
/// the stage just before end when there are no approvals.
///
/// The result depends only on the configuration; equal configurations always give
/// equal graphs.
pub fn generate(config: &WorkflowConfig) -> TopologyGraph {
    generate_from_context(&WorkflowContext::from_config(config))
}

/// Builds the process graph from an already derived context.
pub fn generate_from_context(context: &WorkflowContext) -> TopologyGraph {
    let nodes = build_stages(context);
    let mut edges: Vec<TransitionEdge> = nodes
        .iter()
        .tuple_windows()
        .enumerate()
        .map(|(i, (from, to))| TransitionEdge {
            id: format!("e-{}", i),
            source: from.id.clone(),
            target: to.id.clone(),
            kind: TransitionKind::Sequential,
            label: None,
        })
        .collect();

    if let Some(rework) = build_rework_loop(context, &nodes) {
        edges.push(rework);
    }

    tracing::debug!(
        stages = nodes.len(),
        transitions = edges.len(),
        "generated workflow topology"
    );
    TopologyGraph::new(nodes, edges)
}

fn build_stages(context: &WorkflowContext) -> Vec<StageNode> {
    let mut nodes = Vec::with_capacity(context.rendered_approvals as usize + 3);

    nodes.push(StageNode {
        id: START_ID.to_string(),
        kind: StageKind::Start,
        is_bottleneck: false,
        label: "Start Request".to_string(),
        sub_label: None,
    });

    for level in 1..=context.rendered_approvals {
        let is_bottleneck = level > 1;
        nodes.push(StageNode {
            id: format!("{}{}", APPROVAL_ID_PREFIX, level),
            kind: StageKind::Approval,
            is_bottleneck,
            label: format!("Approval Level {}", level),
            sub_label: Some(
                if is_bottleneck {
                    "Redundant Layer"
                } else {
                    "Manager Review"
                }
                .to_string(),
            ),
        });
    }

    if context.needs_tool_bridge {
        nodes.push(StageNode {
            id: BRIDGE_ID.to_string(),
            kind: StageKind::Bridge,
            is_bottleneck: true,
            label: "Data Entry Bridge".to_string(),
            sub_label: Some(format!("Manual entry across {} tools", context.tool_count)),
        });
    }

    nodes.push(StageNode {
        id: END_ID.to_string(),
        kind: StageKind::End,
        is_bottleneck: false,
        label: "Completion".to_string(),
        sub_label: None,
    });

    nodes
}

fn build_rework_loop(context: &WorkflowContext, nodes: &[StageNode]) -> Option<TransitionEdge> {
    if !context.has_rework() || nodes.len() <= 2 {
        return None;
    }

    let source = nodes
        .iter()
        .find(|n| n.kind == StageKind::Approval)
        .or_else(|| nodes.get(nodes.len() - 2))?;

    Some(TransitionEdge {
        id: "e-rework".to_string(),
        source: source.id.clone(),
        target: nodes[0].id.clone(),
        kind: TransitionKind::Rework,
        label: Some(format!(
            "{}% Rework",
            format_rate(context.rejection_rate_percent)
        )),
    })
}

/// Formats a rate without a trailing `.0` for whole numbers.
fn format_rate(rate: f64) -> String {
    if rate.fract() == 0.0 {
        format!("{}", rate as i64)
    } else {
        format!("{}", rate)
    }
}
