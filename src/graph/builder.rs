//! Builds the data-dependency graph of a workflow document.

use tracing::debug;

use crate::document::WorkflowDocument;
use crate::graph::node::{NodeKind, NodeRegistry};

/// Populate a [`NodeRegistry`] from a workflow document.
///
/// - every input is declared as `Input`
/// - every output is declared as `Output`, with an edge from each id in
///   its `outputSource`
/// - every step is declared as `Step`, with an edge from each `source`
///   of its `in` ports and an edge to each of its `out` ports
///
/// The result does not depend on the order in which sections or records
/// are visited.
pub fn build_graph(document: &WorkflowDocument) -> NodeRegistry {
    let mut registry = NodeRegistry::new();

    for input in document.inputs() {
        registry.declare(input.id(), NodeKind::Input);
    }

    for output in document.outputs() {
        registry.declare(output.id(), NodeKind::Output);
        for source in output.output_sources() {
            registry.connect(source, output.id());
        }
    }

    for step in document.steps() {
        registry.declare(step.id(), NodeKind::Step);
        for port in step.in_ports() {
            for source in port.sources() {
                registry.connect(source, step.id());
            }
        }
        for out in step.out_ids() {
            registry.connect(step.id(), out);
        }
    }

    debug!(
        "Built workflow graph: {} nodes, {} edges",
        registry.len(),
        registry.edge_count()
    );

    registry
}
