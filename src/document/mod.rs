//! Workflow documents: model, loading, and rendering.
//!
//! - Schema and borrowed record views in [`schema`]
//! - File loading in [`loader`]
//! - YAML/JSON rendering in [`format`]
//!
//! # Example
//!
//! ```
//! use subflow::document::parse_document;
//! use std::path::Path;
//!
//! let doc = parse_document(
//!     "class: Workflow\ninputs:\n  - id: wf#reads\n",
//!     Path::new("wf.cwl"),
//! )
//! .unwrap();
//! assert_eq!(doc.inputs().next().unwrap().id(), "wf#reads");
//! ```

pub mod format;
pub mod loader;
pub mod schema;

pub use format::{render_document, DocumentFormat};
pub use loader::{load_document, parse_document};
pub use schema::{
    source_ids, PortRecord, Record, StepRecord, WorkflowDocument, INPUTS, OUTPUTS, STEPS,
};
