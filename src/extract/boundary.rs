//! Boundary resolution: which nodes to keep, and which severed
//! dependencies need a synthesized workflow input.

use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};
use serde_yaml::Value;
use tracing::debug;

use crate::document::WorkflowDocument;
use crate::error::{Result, SubflowError};
use crate::graph::{NodeKind, NodeRegistry};

/// Replacement for one severed upstream dependency.
#[derive(Debug, Clone, PartialEq)]
pub struct RewireEntry {
    /// Id of the synthesized workflow input.
    pub synthetic_id: String,
    /// Type copied from the consuming step's input port.
    pub declared_type: Value,
}

/// Severed id -> replacement, in the order the severed ids were found.
pub type RewireTable = IndexMap<String, RewireEntry>;

/// Result of boundary resolution.
#[derive(Debug, Clone, Default)]
pub struct Boundary {
    /// Ids of every record to keep in the extracted document.
    pub included: IndexSet<String>,
    /// Severed dependencies and their synthesized inputs.
    pub rewire: RewireTable,
}

/// Name of the boundary input replacing `id`.
///
/// The fragment (after the first `#`) has every `/` replaced by `_`, so
/// `wf.cwl#step/out` becomes `wf.cwl#step_out`. An id without a fragment
/// gains an empty one.
pub fn synthetic_id(id: &str) -> String {
    let (base, fragment) = id.split_once('#').unwrap_or((id, ""));
    format!("{}#{}", base, fragment.replace('/', "_"))
}

/// Compute the kept set and rewire table for a reached set.
///
/// Every reached node is kept. For each reached step or output, each
/// upstream dependency that the kept document cannot provide is either a
/// workflow input (kept as-is) or gets a synthesized boundary input typed
/// from the step's matching input port. A dependency cannot be provided
/// when it was not reached, or when it is a port reached as a root whose
/// producing step was not.
///
/// # Errors
///
/// Returns `StepNotFound` if a step in `reached` is missing from
/// `document`, and `MissingPortType` if the severed dependency's type
/// cannot be read from a step input port (including when the consumer is
/// an output).
pub fn resolve_boundary(
    reached: &IndexSet<String>,
    registry: &NodeRegistry,
    document: &WorkflowDocument,
) -> Result<Boundary> {
    let mut boundary = Boundary::default();
    let mut taken: HashSet<String> = HashSet::new();

    for id in reached {
        boundary.included.insert(id.clone());

        let Some(node) = registry.get(id) else {
            continue;
        };
        if !matches!(node.kind, NodeKind::Step | NodeKind::Output) {
            continue;
        }

        for upstream in &node.upstream {
            if is_provided(upstream, reached, registry) {
                continue;
            }
            if registry.kind(upstream) == Some(NodeKind::Input) {
                boundary.included.insert(upstream.clone());
                continue;
            }

            if node.kind != NodeKind::Step {
                return Err(SubflowError::MissingPortType {
                    owner: id.clone(),
                    source_id: upstream.clone(),
                });
            }
            // First consumer wins when several steps read the same source.
            if boundary.rewire.contains_key(upstream) {
                continue;
            }

            let step = document
                .find_step(id)
                .ok_or_else(|| SubflowError::StepNotFound { step: id.clone() })?;
            let declared_type = step
                .port_type(upstream)
                .ok_or_else(|| SubflowError::MissingPortType {
                    owner: id.clone(),
                    source_id: upstream.clone(),
                })?;

            let synthetic = unique_synthetic_id(upstream, registry, &taken);
            debug!("Rewiring '{}' to boundary input '{}'", upstream, synthetic);
            taken.insert(synthetic.clone());
            boundary.rewire.insert(
                upstream.clone(),
                RewireEntry {
                    synthetic_id: synthetic,
                    declared_type: declared_type.clone(),
                },
            );
        }
    }

    Ok(boundary)
}

/// Whether the kept document declares `id`: it was reached, and if it is a
/// port, so was a step producing it.
fn is_provided(id: &str, reached: &IndexSet<String>, registry: &NodeRegistry) -> bool {
    if !reached.contains(id) {
        return false;
    }
    match registry.get(id) {
        Some(node) if node.kind == NodeKind::Unclassified => {
            node.upstream.iter().any(|producer| reached.contains(producer))
        }
        _ => true,
    }
}

/// [`synthetic_id`], suffixed with `_2`, `_3`, ... when the plain name is
/// already a node of the workflow or was handed out for another id.
fn unique_synthetic_id(id: &str, registry: &NodeRegistry, taken: &HashSet<String>) -> String {
    let base = synthetic_id(id);
    let clashes = |candidate: &str| {
        taken.contains(candidate) || (candidate != id && registry.contains(candidate))
    };

    if !clashes(&base) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{}_{}", base, n);
        if !clashes(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
