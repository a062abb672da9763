//! Error types for Subflow operations.
//!
//! This module defines [`SubflowError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `SubflowError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `SubflowError::Other`) for unexpected errors
//! - Extraction errors are never retried; they indicate a data defect

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Subflow operations.
#[derive(Debug, Error)]
pub enum SubflowError {
    /// Workflow file not found at the given location.
    #[error("Workflow not found: {path}")]
    DocumentNotFound { path: PathBuf },

    /// Failed to parse the workflow file.
    #[error("Failed to parse workflow at {path}: {message}")]
    DocumentParseError { path: PathBuf, message: String },

    /// The document does not have the shape of a workflow document.
    #[error("Invalid workflow document: {message}")]
    InvalidDocument { message: String },

    /// Extraction was requested on something other than a `Workflow`.
    #[error("Can only extract a subgraph from a Workflow (found class {class:?})")]
    NotAWorkflow { class: Option<String> },

    /// A root identifier names no node in the workflow graph.
    #[error("Unknown target '{id}': no input, output or step has this id")]
    UnknownRoot { id: String },

    /// The step owning a severed dependency is not in the step list.
    #[error("Could not find step '{step}'")]
    StepNotFound { step: String },

    /// No input port on the owner declares the severed source, so the
    /// boundary input cannot be typed.
    #[error("Cannot determine type of '{source_id}': no input port on '{owner}' reads it")]
    MissingPortType { owner: String, source_id: String },

    /// Failed to parse a settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Subflow operations.
pub type Result<T> = std::result::Result<T, SubflowError>;
