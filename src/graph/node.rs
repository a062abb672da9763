//! Node registry for the workflow data-dependency graph.

use indexmap::{IndexMap, IndexSet};

/// What a graph vertex was declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NodeKind {
    /// A workflow input port.
    Input,
    /// A workflow output port.
    Output,
    /// A workflow step.
    Step,
    /// Seen only as an edge endpoint so far (typically a step output port).
    #[default]
    Unclassified,
}

impl NodeKind {
    /// Whether the kind has been observed from a declaration.
    pub fn is_classified(&self) -> bool {
        !matches!(self, Self::Unclassified)
    }

    /// Short lowercase label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Output => "output",
            Self::Step => "step",
            Self::Unclassified => "port",
        }
    }
}

/// One vertex of the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// Producers this node depends on, in first-seen order.
    pub upstream: IndexSet<String>,
    /// Consumers that depend on this node, in first-seen order.
    pub downstream: IndexSet<String>,
    /// Declared kind; `Unclassified` until a declaration is visited.
    pub kind: NodeKind,
}

/// Mapping from node id to its [`Node`] record.
///
/// Every id ever used as an edge endpoint has exactly one record, and
/// edges are always stored on both endpoints.
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    nodes: IndexMap<String, Node>,
}

impl NodeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or upgrade a node.
    ///
    /// A missing node is created with `kind`. An `Unclassified` node is
    /// upgraded to `kind`. A node that already has a concrete kind keeps it.
    /// Edge lists are never touched.
    pub fn declare(&mut self, id: &str, kind: NodeKind) -> &mut Node {
        let node = self.nodes.entry(id.to_string()).or_default();
        if !node.kind.is_classified() {
            node.kind = kind;
        }
        node
    }

    /// Record that `consumer` depends on `producer`.
    ///
    /// Both endpoints are declared if missing, and the edge is added to
    /// `producer.downstream` and `consumer.upstream` together.
    pub fn connect(&mut self, producer: &str, consumer: &str) {
        self.declare(producer, NodeKind::Unclassified)
            .downstream
            .insert(consumer.to_string());
        self.declare(consumer, NodeKind::Unclassified)
            .upstream
            .insert(producer.to_string());
    }

    /// Get a node by id.
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get the kind of a node, if it exists.
    pub fn kind(&self, id: &str) -> Option<NodeKind> {
        self.nodes.get(id).map(|node| node.kind)
    }

    /// Check if a node exists.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges (each mirrored pair counted once).
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.downstream.len()).sum()
    }

    /// Iterate over nodes in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.nodes.iter().map(|(id, node)| (id.as_str(), node))
    }
}
