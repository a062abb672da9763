//! Subflow - Extract standalone sub-workflows from workflow documents.
//!
//! Given a workflow and one or more target ids, Subflow keeps only the
//! inputs, outputs and steps those targets need and turns every severed
//! upstream dependency into a new, typed workflow input.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings discovery and loading
//! - [`document`] - Workflow document model, loading, and rendering
//! - [`error`] - Error types and result aliases
//! - [`extract`] - Boundary resolution and document rewriting
//! - [`graph`] - Dependency graph construction and traversal
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use subflow::document::parse_document;
//! use subflow::extract_subgraph;
//! use std::path::Path;
//!
//! let workflow = parse_document(
//!     "class: Workflow\ninputs:\n  - id: wf#x\n    type: int\noutputs:\n  - id: wf#y\n    outputSource: wf#x\n",
//!     Path::new("wf.cwl"),
//! )
//! .unwrap();
//!
//! let extracted = extract_subgraph(&["wf#y"], &workflow).unwrap();
//! assert_eq!(extracted.inputs().count(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod graph;
pub mod ui;

pub use document::WorkflowDocument;
pub use error::{Result, SubflowError};
pub use extract::extract_subgraph;
