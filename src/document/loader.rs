//! Workflow file loading.
//!
//! Workflow files are read as YAML. JSON is a subset of YAML, so `.json`
//! workflows go through the same parser.

use std::fs;
use std::path::Path;

use crate::document::schema::WorkflowDocument;
use crate::error::{Result, SubflowError};

/// Load and validate a workflow document from disk.
///
/// # Errors
///
/// Returns `DocumentNotFound` if the file doesn't exist.
/// Returns `DocumentParseError` if the file is not valid YAML/JSON.
/// Returns `InvalidDocument` if the content is not shaped like a workflow.
pub fn load_document(path: &Path) -> Result<WorkflowDocument> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SubflowError::DocumentNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SubflowError::Io(e)
        }
    })?;

    parse_document(&content, path)
}

/// Parse YAML or JSON content into a workflow document.
///
/// # Arguments
///
/// * `content` - The document text
/// * `source_path` - Path for error reporting
pub fn parse_document(content: &str, source_path: &Path) -> Result<WorkflowDocument> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| SubflowError::DocumentParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    WorkflowDocument::from_value(value)
}
