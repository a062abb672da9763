//! Sub-workflow extraction.
//!
//! Given a workflow and a set of root ids, extraction keeps the part of the
//! workflow the roots need and re-emits it as a standalone workflow:
//!
//! 1. [`build_graph`] turns the document into a bidirectional graph
//! 2. [`reachable`] walks upstream from output roots and downstream from
//!    every other root
//! 3. [`resolve_boundary`] pulls in severed workflow inputs and assigns a
//!    synthesized input to every other severed dependency
//! 4. [`rewrite_document`] filters the document and rewires step sources
//!
//! # Example
//!
//! ```
//! use subflow::document::parse_document;
//! use subflow::extract::extract_subgraph;
//! use std::path::Path;
//!
//! let workflow = parse_document(
//!     r#"
//! class: Workflow
//! inputs: []
//! outputs:
//!   - id: wf#out
//!     outputSource: wf#B/out
//! steps:
//!   - id: wf#A
//!     in: []
//!     out: [wf#A/out]
//!   - id: wf#B
//!     in:
//!       - id: wf#B/x
//!         source: wf#A/out
//!     out: [wf#B/out]
//!     inputs:
//!       - source: wf#A/out
//!         type: File
//! "#,
//!     Path::new("wf.cwl"),
//! )
//! .unwrap();
//!
//! let extracted = extract_subgraph(&["wf#B"], &workflow).unwrap();
//! let inputs: Vec<_> = extracted.inputs().map(|i| i.id().to_string()).collect();
//! assert_eq!(inputs, ["wf#A_out"]);
//! ```

pub mod boundary;
pub mod rewrite;
pub mod target;

pub use boundary::{resolve_boundary, synthetic_id, Boundary, RewireEntry, RewireTable};
pub use rewrite::rewrite_document;
pub use target::{list_targets, resolve_targets, Target};

use tracing::{debug, info};

use crate::document::WorkflowDocument;
use crate::error::{Result, SubflowError};
use crate::graph::{build_graph, reachable};

/// An extracted workflow together with how its boundary was resolved.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// The standalone extracted workflow.
    pub document: WorkflowDocument,
    /// Kept ids and synthesized inputs.
    pub boundary: Boundary,
}

/// Extract the sub-workflow needed by `roots`.
///
/// # Errors
///
/// - `NotAWorkflow` if the document's `class` is not `Workflow`
/// - `UnknownRoot` if a root names no input, output, step or port
/// - `StepNotFound` / `MissingPortType` if a severed dependency cannot be
///   turned into a typed boundary input
pub fn extract_subgraph<S: AsRef<str>>(
    roots: &[S],
    workflow: &WorkflowDocument,
) -> Result<WorkflowDocument> {
    extract(roots, workflow).map(|extraction| extraction.document)
}

/// Like [`extract_subgraph`], also returning the resolved [`Boundary`].
pub fn extract<S: AsRef<str>>(roots: &[S], workflow: &WorkflowDocument) -> Result<Extraction> {
    if workflow.class() != Some("Workflow") {
        return Err(SubflowError::NotAWorkflow {
            class: workflow.class().map(str::to_string),
        });
    }

    let registry = build_graph(workflow);
    let reached = reachable(roots, &registry)?;
    let boundary = resolve_boundary(&reached, &registry, workflow)?;
    debug!(
        "Boundary resolved: {} kept, {} rewired",
        boundary.included.len(),
        boundary.rewire.len()
    );

    let document = rewrite_document(workflow, &boundary)?;
    info!(
        "Extracted {} of {} steps",
        document.steps().count(),
        workflow.steps().count()
    );

    Ok(Extraction { document, boundary })
}
