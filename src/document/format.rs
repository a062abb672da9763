//! Serialization of workflow documents.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::document::schema::WorkflowDocument;
use crate::error::{Result, SubflowError};

/// Output serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// YAML, the native workflow format.
    #[default]
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

impl FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown document format: {}", s)),
        }
    }
}

/// Render a document, keeping its field order.
pub fn render_document(document: &WorkflowDocument, format: DocumentFormat) -> Result<String> {
    match format {
        DocumentFormat::Yaml => {
            serde_yaml::to_string(document).map_err(|e| SubflowError::Other(e.into()))
        }
        DocumentFormat::Json => serde_json::to_string_pretty(document)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| SubflowError::Other(e.into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_document;
    use std::path::Path;

    fn sample() -> WorkflowDocument {
        parse_document(
            "class: Workflow\nzeta: 1\nalpha: 2\ninputs:\n  - id: wf#x\n    type: int\n",
            Path::new("wf.cwl"),
        )
        .unwrap()
    }

    #[test]
    fn format_from_str() {
        assert_eq!("yaml".parse::<DocumentFormat>(), Ok(DocumentFormat::Yaml));
        assert_eq!("YML".parse::<DocumentFormat>(), Ok(DocumentFormat::Yaml));
        assert_eq!("json".parse::<DocumentFormat>(), Ok(DocumentFormat::Json));
        assert!("toml".parse::<DocumentFormat>().is_err());
    }

    #[test]
    fn format_default_is_yaml() {
        assert_eq!(DocumentFormat::default(), DocumentFormat::Yaml);
    }

    #[test]
    fn yaml_preserves_field_order() {
        let yaml = render_document(&sample(), DocumentFormat::Yaml).unwrap();
        let zeta = yaml.find("zeta").unwrap();
        let alpha = yaml.find("alpha").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn json_preserves_field_order() {
        let json = render_document(&sample(), DocumentFormat::Json).unwrap();
        let zeta = json.find("\"zeta\"").unwrap();
        let alpha = json.find("\"alpha\"").unwrap();
        assert!(zeta < alpha);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["inputs"][0]["id"], "wf#x");
    }

    #[test]
    fn yaml_output_reparses_to_same_document() {
        let doc = sample();
        let yaml = render_document(&doc, DocumentFormat::Yaml).unwrap();
        let reparsed = parse_document(&yaml, Path::new("out.cwl")).unwrap();
        assert_eq!(reparsed, doc);
    }
}
