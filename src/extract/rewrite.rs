//! Re-emits a workflow document restricted to a resolved boundary.

use serde_yaml::{Mapping, Value};

use crate::document::{WorkflowDocument, INPUTS, OUTPUTS, STEPS};
use crate::error::Result;
use crate::extract::boundary::{Boundary, RewireTable};

/// Build the extracted document.
///
/// `inputs`, `outputs` and `steps` keep only records whose id is in
/// `boundary.included`, in their original order. Kept steps have every
/// rewired `source` id replaced by its synthetic input; other ids in the
/// same source list are left untouched. Every other top-level field is
/// copied unchanged. One input record per rewire entry is appended to
/// `inputs`.
///
/// The source document is not modified.
pub fn rewrite_document(
    document: &WorkflowDocument,
    boundary: &Boundary,
) -> Result<WorkflowDocument> {
    let mut extracted = Mapping::new();

    for (key, value) in document.fields() {
        let kept = match key.as_str() {
            Some(INPUTS) | Some(OUTPUTS) => {
                Value::Sequence(kept_records(value, boundary).cloned().collect())
            }
            Some(STEPS) => Value::Sequence(
                kept_records(value, boundary)
                    .map(|step| rewire_step(step, &boundary.rewire))
                    .collect(),
            ),
            _ => value.clone(),
        };
        extracted.insert(key.clone(), kept);
    }

    if !boundary.rewire.is_empty() {
        let inputs = extracted
            .entry(Value::String(INPUTS.to_string()))
            .or_insert_with(|| Value::Sequence(Vec::new()));
        if let Value::Sequence(inputs) = inputs {
            inputs.extend(boundary.rewire.values().map(|entry| {
                let mut input = Mapping::new();
                input.insert("id".into(), Value::String(entry.synthetic_id.clone()));
                input.insert("type".into(), entry.declared_type.clone());
                Value::Mapping(input)
            }));
        }
    }

    WorkflowDocument::new(extracted)
}

fn kept_records<'a>(
    section: &'a Value,
    boundary: &'a Boundary,
) -> impl Iterator<Item = &'a Value> + 'a {
    section
        .as_sequence()
        .map(|seq| seq.as_slice())
        .unwrap_or(&[])
        .iter()
        .filter(|record| {
            record
                .as_mapping()
                .and_then(|fields| fields.get("id"))
                .and_then(Value::as_str)
                .is_some_and(|id| boundary.included.contains(id))
        })
}

/// Copy of a step record with rewired `source` ids.
///
/// Both the `in` ports and the `inputs` sub-list are rewritten so the two
/// stay consistent.
fn rewire_step(step: &Value, rewire: &RewireTable) -> Value {
    let mut step = step.clone();
    if rewire.is_empty() {
        return step;
    }

    if let Value::Mapping(fields) = &mut step {
        for key in ["in", INPUTS] {
            let Some(Value::Sequence(ports)) = fields.get_mut(key) else {
                continue;
            };
            for port in ports.iter_mut() {
                if let Some(source) = port.as_mapping_mut().and_then(|p| p.get_mut("source")) {
                    rewire_source(source, rewire);
                }
            }
        }
    }

    step
}

fn rewire_source(source: &mut Value, rewire: &RewireTable) {
    match source {
        Value::String(id) => rewire_id(id, rewire),
        Value::Sequence(ids) => {
            for id in ids.iter_mut() {
                if let Value::String(id) = id {
                    rewire_id(id, rewire);
                }
            }
        }
        _ => {}
    }
}

fn rewire_id(id: &mut String, rewire: &RewireTable) {
    if let Some(entry) = rewire.get(id.as_str()) {
        *id = entry.synthetic_id.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_document;
    use crate::extract::boundary::RewireEntry;
    use std::path::Path;

    const WORKFLOW: &str = r#"
cwlVersion: v1.2
class: Workflow
inputs:
  - id: wf#a
    type: int
  - id: wf#b
    type: int
outputs:
  - id: wf#o
    outputSource: wf#s2/out
steps:
  - id: wf#s1
    in:
      - id: wf#s1/x
        source: wf#a
    out: [wf#s1/out]
  - id: wf#s2
    in:
      - id: wf#s2/x
        source: [wf#s1/out, wf#b]
      - id: wf#s2/y
        source: wf#s1/out
      - id: wf#s2/z
        default: 3
    out: [wf#s2/out]
    inputs:
      - id: wf#s2/x
        source: [wf#s1/out, wf#b]
        type: {type: array, items: int}
requirements:
  - class: MultipleInputFeatureRequirement
"#;

    fn document() -> WorkflowDocument {
        parse_document(WORKFLOW, Path::new("wf.cwl")).unwrap()
    }

    fn boundary(included: &[&str], rewire: &[(&str, &str)]) -> Boundary {
        Boundary {
            included: included.iter().map(|id| id.to_string()).collect(),
            rewire: rewire
                .iter()
                .map(|(from, to)| {
                    (
                        from.to_string(),
                        RewireEntry {
                            synthetic_id: to.to_string(),
                            declared_type: Value::String("int".into()),
                        },
                    )
                })
                .collect(),
        }
    }

    fn ids(section: Option<&Value>) -> Vec<&str> {
        section
            .and_then(Value::as_sequence)
            .unwrap()
            .iter()
            .filter_map(|r| r["id"].as_str())
            .collect()
    }

    #[test]
    fn filters_sections_to_included_ids() {
        let doc = document();
        let out = rewrite_document(&doc, &boundary(&["wf#s2", "wf#o", "wf#b"], &[])).unwrap();

        assert_eq!(ids(out.get(INPUTS)), ["wf#b"]);
        assert_eq!(ids(out.get(OUTPUTS)), ["wf#o"]);
        assert_eq!(ids(out.get(STEPS)), ["wf#s2"]);
    }

    #[test]
    fn keeps_other_fields_in_order() {
        let doc = document();
        let out = rewrite_document(&doc, &boundary(&[], &[])).unwrap();

        let keys: Vec<_> = out.fields().filter_map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            ["cwlVersion", "class", "inputs", "outputs", "steps", "requirements"]
        );
        assert_eq!(out.get("requirements"), doc.get("requirements"));
    }

    #[test]
    fn rewires_single_and_list_sources_keeping_other_entries() {
        let doc = document();
        let out = rewrite_document(
            &doc,
            &boundary(&["wf#s2", "wf#b"], &[("wf#s1/out", "wf#s1_out")]),
        )
        .unwrap();

        let step = out.find_step("wf#s2").unwrap();
        let ports: Vec<_> = step.in_ports().collect();
        assert_eq!(ports[0].sources(), ["wf#s1_out", "wf#b"]);
        assert_eq!(ports[1].sources(), ["wf#s1_out"]);
        assert!(!ports[2].has_source());
        assert_eq!(
            step.port_type("wf#s1_out"),
            doc.find_step("wf#s2").unwrap().port_type("wf#s1/out")
        );
    }

    #[test]
    fn appends_synthetic_inputs_after_kept_ones() {
        let doc = document();
        let out = rewrite_document(
            &doc,
            &boundary(&["wf#s2", "wf#b"], &[("wf#s1/out", "wf#s1_out")]),
        )
        .unwrap();

        assert_eq!(ids(out.get(INPUTS)), ["wf#b", "wf#s1_out"]);
        let synthetic = &out.get(INPUTS).unwrap()[1];
        assert_eq!(synthetic["type"], Value::String("int".into()));
    }

    #[test]
    fn creates_inputs_section_when_missing() {
        let doc = parse_document(
            "class: Workflow\nsteps:\n  - id: s\n    in:\n      - id: s/x\n        source: t/out\n    out: []\n",
            Path::new("wf.cwl"),
        )
        .unwrap();
        let out = rewrite_document(&doc, &boundary(&["s"], &[("t/out", "t/out#")])).unwrap();

        assert_eq!(ids(out.get(INPUTS)), ["t/out#"]);
    }

    #[test]
    fn does_not_mutate_source_document() {
        let doc = document();
        let before = doc.clone();
        rewrite_document(
            &doc,
            &boundary(&["wf#s2", "wf#b"], &[("wf#s1/out", "wf#s1_out")]),
        )
        .unwrap();

        assert_eq!(doc, before);
    }
}
