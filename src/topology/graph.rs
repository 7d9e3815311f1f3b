use ahash::AHashMap;
use serde::Serialize;
use std::fmt;

/// The role a stage plays in the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    Start,
    Approval,
    /// Manual data entry that carries work across tools.
    Bridge,
    End,
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageKind::Start => write!(f, "start"),
            StageKind::Approval => write!(f, "approval"),
            StageKind::Bridge => write!(f, "bridge"),
            StageKind::End => write!(f, "end"),
        }
    }
}

/// A single stage of the process graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageNode {
    pub id: String,
    pub kind: StageKind,
    pub is_bottleneck: bool,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Work moving forward to the next stage.
    Sequential,
    /// Rejected work returning to the start.
    Rework,
}

/// A directed connection between two stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: TransitionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// The process graph of a workflow: stages in emission order and the transitions
/// between them.
///
/// A graph is generated in one go from a configuration and never edited afterwards;
/// when the configuration changes, generate a new one.
#[derive(Debug, Clone, Serialize)]
pub struct TopologyGraph {
    nodes: Vec<StageNode>,
    edges: Vec<TransitionEdge>,
    #[serde(skip)]
    index: AHashMap<String, usize>,
}

impl TopologyGraph {
    pub(super) fn new(nodes: Vec<StageNode>, edges: Vec<TransitionEdge>) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id.clone(), i))
            .collect();
        Self {
            nodes,
            edges,
            index,
        }
    }

    pub fn nodes(&self) -> &[StageNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[TransitionEdge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&StageNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn bottlenecks(&self) -> impl Iterator<Item = &StageNode> {
        self.nodes.iter().filter(|n| n.is_bottleneck)
    }

    pub fn sequential_edges(&self) -> impl Iterator<Item = &TransitionEdge> {
        self.edges
            .iter()
            .filter(|e| e.kind == TransitionKind::Sequential)
    }

    /// The rework loop, if rejected work flows back to the start.
    pub fn rework_edge(&self) -> Option<&TransitionEdge> {
        self.edges.iter().find(|e| e.kind == TransitionKind::Rework)
    }

    /// All transitions leaving the stage `id`, in emission order.
    pub fn outgoing<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a TransitionEdge> {
        self.edges.iter().filter(move |e| e.source == id)
    }
}

impl PartialEq for TopologyGraph {
    fn eq(&self, other: &Self) -> bool {
        // The index is derived from `nodes`.
        self.nodes == other.nodes && self.edges == other.edges
    }
}

impl Eq for TopologyGraph {}

impl fmt::Display for TopologyGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- STAGES ---")?;
        for (i, node) in self.nodes.iter().enumerate() {
            write!(f, "{:02}: {:<10} {:<10} {}", i, node.id, node.kind, node.label)?;
            if let Some(sub_label) = &node.sub_label {
                write!(f, " ({})", sub_label)?;
            }
            if node.is_bottleneck {
                write!(f, " [BOTTLENECK]")?;
            }
            writeln!(f)?;
        }

        writeln!(f, "--- TRANSITIONS ---")?;
        for edge in &self.edges {
            let arrow = match edge.kind {
                TransitionKind::Sequential => "->",
                TransitionKind::Rework => "~>",
            };
            write!(f, "{} {} {}", edge.source, arrow, edge.target)?;
            if let Some(label) = &edge.label {
                write!(f, " \"{}\"", label)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
