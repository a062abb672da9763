//! Naming extraction targets from the command line.

use crate::document::WorkflowDocument;
use crate::graph::{build_graph, NodeKind, NodeRegistry};

/// A declared input, output or step that can be used as a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Fully qualified id.
    pub id: String,
    /// Declared kind.
    pub kind: NodeKind,
}

impl Target {
    /// The id relative to the workflow, for display.
    ///
    /// `file:///wf.cwl#align` becomes `align`. Ids without a fragment are
    /// returned unchanged.
    pub fn short_name(&self) -> &str {
        self.id
            .split_once('#')
            .map(|(_, fragment)| fragment)
            .unwrap_or(&self.id)
    }
}

/// Every input, output and step of the workflow, in document order.
pub fn list_targets(document: &WorkflowDocument) -> Vec<Target> {
    let target = |id: &str, kind| Target {
        id: id.to_string(),
        kind,
    };

    document
        .inputs()
        .map(|input| target(input.id(), NodeKind::Input))
        .chain(
            document
                .outputs()
                .map(|output| target(output.id(), NodeKind::Output)),
        )
        .chain(document.steps().map(|step| target(step.id(), NodeKind::Step)))
        .collect()
}

/// Qualify user-supplied target names against the workflow.
///
/// A name that is already a node id, or that contains `#`, is used as-is.
/// Otherwise it is resolved relative to the workflow id: appended as a
/// path segment when the workflow id has a fragment (`wf#main` + `align`
/// = `wf#main/align`), or as the fragment when it has none (`wf.cwl` +
/// `align` = `wf.cwl#align`). A workflow without an id leaves names as-is.
pub fn resolve_targets<S: AsRef<str>>(names: &[S], document: &WorkflowDocument) -> Vec<String> {
    let registry = build_graph(document);
    names
        .iter()
        .map(|name| resolve_target(name.as_ref(), document.id(), &registry))
        .collect()
}

fn resolve_target(name: &str, workflow_id: Option<&str>, registry: &NodeRegistry) -> String {
    if registry.contains(name) || name.contains('#') {
        return name.to_string();
    }
    match workflow_id {
        Some(base) if base.contains('#') => format!("{}/{}", base, name),
        Some(base) => format!("{}#{}", base, name),
        None => name.to_string(),
    }
}
