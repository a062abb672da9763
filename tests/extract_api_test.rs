//! Integration tests for the extraction API.

use std::collections::HashSet;
use std::path::Path;

use subflow::document::{parse_document, render_document, DocumentFormat, WorkflowDocument};
use subflow::extract::extract;
use subflow::{extract_subgraph, SubflowError};

/// A -> B -> C chain feeding `out`, `wf_in` feeding A, an unrelated branch
/// D, and a merge step M reading both A and `wf_in` through one list source.
const WORKFLOW: &str = r#"
cwlVersion: v1.2
class: Workflow
id: file:///wf.cwl
inputs:
  - id: file:///wf.cwl#wf_in
    type: File
  - id: file:///wf.cwl#d_in
    type: string
outputs:
  - id: file:///wf.cwl#out
    type: File
    outputSource: file:///wf.cwl#C/out
  - id: file:///wf.cwl#d_out
    type: string
    outputSource: file:///wf.cwl#D/out
  - id: file:///wf.cwl#merged
    type: File
    outputSource: file:///wf.cwl#M/out
steps:
  - id: file:///wf.cwl#A
    run: a.cwl
    in:
      - id: file:///wf.cwl#A/x
        source: file:///wf.cwl#wf_in
    out: [file:///wf.cwl#A/out]
    inputs:
      - id: file:///wf.cwl#A/x
        source: file:///wf.cwl#wf_in
        type: File
  - id: file:///wf.cwl#B
    run: b.cwl
    in:
      - id: file:///wf.cwl#B/x
        source: file:///wf.cwl#A/out
    out: [file:///wf.cwl#B/out]
    inputs:
      - id: file:///wf.cwl#B/x
        source: file:///wf.cwl#A/out
        type: File
  - id: file:///wf.cwl#C
    run: c.cwl
    in:
      - id: file:///wf.cwl#C/x
        source: file:///wf.cwl#B/out
    out: [file:///wf.cwl#C/out]
    inputs:
      - id: file:///wf.cwl#C/x
        source: file:///wf.cwl#B/out
        type: File
  - id: file:///wf.cwl#D
    run: d.cwl
    in:
      - id: file:///wf.cwl#D/x
        source: file:///wf.cwl#d_in
    out: [file:///wf.cwl#D/out]
    inputs:
      - id: file:///wf.cwl#D/x
        source: file:///wf.cwl#d_in
        type: string
  - id: file:///wf.cwl#M
    run: m.cwl
    in:
      - id: file:///wf.cwl#M/x
        source: [file:///wf.cwl#A/out, file:///wf.cwl#wf_in]
    out: [file:///wf.cwl#M/out]
    inputs:
      - id: file:///wf.cwl#M/x
        source: [file:///wf.cwl#A/out, file:///wf.cwl#wf_in]
        type: {type: array, items: File}
requirements:
  - class: MultipleInputFeatureRequirement
"#;

const WF: &str = "file:///wf.cwl";

fn workflow() -> WorkflowDocument {
    parse_document(WORKFLOW, Path::new("wf.cwl")).unwrap()
}

fn id(name: &str) -> String {
    format!("{}#{}", WF, name)
}

fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| id(n)).collect()
}

fn step_ids(doc: &WorkflowDocument) -> Vec<String> {
    doc.steps().map(|s| s.id().to_string()).collect()
}

fn input_ids(doc: &WorkflowDocument) -> Vec<String> {
    doc.inputs().map(|i| i.id().to_string()).collect()
}

fn output_ids(doc: &WorkflowDocument) -> Vec<String> {
    doc.outputs().map(|o| o.id().to_string()).collect()
}

/// Every source referenced by a kept step or output resolves to a kept
/// input or an output port of a kept step.
fn assert_closed(doc: &WorkflowDocument) {
    let mut available: HashSet<String> = input_ids(doc).into_iter().collect();
    for step in doc.steps() {
        available.extend(step.out_ids().into_iter().map(str::to_string));
    }

    for step in doc.steps() {
        for port in step.in_ports() {
            for source in port.sources() {
                assert!(available.contains(source), "dangling source {}", source);
            }
        }
    }
    for output in doc.outputs() {
        for source in output.output_sources() {
            assert!(available.contains(source), "dangling outputSource {}", source);
        }
    }
}

#[test]
fn output_root_keeps_whole_chain_without_rewiring() {
    let extraction = extract(&[id("out")], &workflow()).unwrap();
    let doc = &extraction.document;

    assert_eq!(step_ids(doc), ids(&["A", "B", "C"]));
    assert_eq!(output_ids(doc), ids(&["out"]));
    assert_eq!(input_ids(doc), ids(&["wf_in"]));
    assert!(extraction.boundary.rewire.is_empty());
    assert_closed(doc);
}

#[test]
fn step_root_synthesizes_typed_input() {
    let extraction = extract(&[id("B")], &workflow()).unwrap();
    let doc = &extraction.document;

    assert_eq!(step_ids(doc), ids(&["B", "C"]));
    assert_eq!(output_ids(doc), ids(&["out"]));
    assert_eq!(input_ids(doc), ids(&["A_out"]));

    let synthetic = &doc.get("inputs").unwrap()[0];
    assert_eq!(synthetic["type"].as_str(), Some("File"));

    let b = doc.find_step(&id("B")).unwrap();
    assert_eq!(b.in_ports().next().unwrap().sources(), [id("A_out")]);
    assert_closed(doc);
}

#[test]
fn step_root_keeps_declared_workflow_input() {
    let extraction = extract(&[id("A")], &workflow()).unwrap();
    let doc = &extraction.document;

    assert!(extraction.boundary.rewire.is_empty());
    assert!(input_ids(doc).contains(&id("wf_in")));
    assert!(step_ids(doc).starts_with(&ids(&["A", "B", "C"])));
    assert_closed(doc);
}

#[test]
fn disconnected_branch_is_absent() {
    let doc = extract_subgraph(&[id("out")], &workflow()).unwrap();

    assert!(doc.find_step(&id("D")).is_none());
    assert!(!input_ids(&doc).contains(&id("d_in")));
    assert!(!output_ids(&doc).contains(&id("d_out")));
    assert!(!output_ids(&doc).contains(&id("merged")));
}

#[test]
fn mixed_list_source_keeps_both_entries() {
    let extraction = extract(&[id("M")], &workflow()).unwrap();
    let doc = &extraction.document;

    assert_eq!(step_ids(doc), ids(&["M"]));
    assert_eq!(input_ids(doc), ids(&["wf_in", "A_out"]));

    let m = doc.find_step(&id("M")).unwrap();
    assert_eq!(
        m.in_ports().next().unwrap().sources(),
        [id("A_out"), id("wf_in")]
    );

    let synthetic = &doc.get("inputs").unwrap()[1];
    assert_eq!(synthetic["type"]["items"].as_str(), Some("File"));
    assert_closed(doc);
}

#[test]
fn port_root_replaces_unkept_producer_with_input() {
    let extraction = extract(&[id("A/out")], &workflow()).unwrap();
    let doc = &extraction.document;

    assert_eq!(step_ids(doc), ids(&["B", "C", "M"]));
    assert_eq!(input_ids(doc), ids(&["wf_in", "A_out"]));
    let b = doc.find_step(&id("B")).unwrap();
    assert_eq!(b.in_ports().next().unwrap().sources(), [id("A_out")]);
    assert_closed(doc);
}

#[test]
fn multiple_roots_share_one_extraction() {
    let extraction = extract(&[id("B"), id("d_out")], &workflow()).unwrap();
    let doc = &extraction.document;

    assert_eq!(step_ids(doc), ids(&["B", "C", "D"]));
    assert_eq!(input_ids(doc), ids(&["d_in", "A_out"]));
    assert_closed(doc);
}

#[test]
fn rewiring_is_deterministic() {
    let wf = workflow();
    let first = extract_subgraph(&[id("B"), id("M")], &wf).unwrap();
    let second = extract_subgraph(&[id("B"), id("M")], &wf).unwrap();

    assert_eq!(
        render_document(&first, DocumentFormat::Yaml).unwrap(),
        render_document(&second, DocumentFormat::Yaml).unwrap()
    );
}

#[test]
fn source_document_is_not_mutated() {
    let wf = workflow();
    let before = wf.clone();

    extract_subgraph(&[id("B")], &wf).unwrap();

    assert_eq!(wf, before);
    let b = wf.find_step(&id("B")).unwrap();
    assert_eq!(b.in_ports().next().unwrap().sources(), [id("A/out")]);
}

#[test]
fn kept_records_keep_their_ids_and_fields() {
    let wf = workflow();
    let extraction = extract(&[id("B")], &wf).unwrap();
    let doc = &extraction.document;

    for step in doc.steps() {
        let original = wf.find_step(step.id()).unwrap();
        assert_eq!(step.record().get("run"), original.record().get("run"));
    }
    for output in doc.outputs() {
        assert!(wf.outputs().any(|o| o.id() == output.id()));
    }
    let synthetic: Vec<_> = extraction
        .boundary
        .rewire
        .values()
        .map(|e| e.synthetic_id.clone())
        .collect();
    for input in doc.inputs() {
        let declared = wf.inputs().any(|i| i.id() == input.id());
        assert!(declared || synthetic.contains(&input.id().to_string()));
    }
    assert_eq!(doc.get("requirements"), wf.get("requirements"));
    assert_eq!(doc.get("cwlVersion"), wf.get("cwlVersion"));
}

#[test]
fn extracted_document_can_be_extracted_again() {
    let first = extract_subgraph(&[id("B")], &workflow()).unwrap();
    let second = extract_subgraph(&[id("out")], &first).unwrap();

    assert_eq!(step_ids(&second), ids(&["B", "C"]));
    assert_eq!(input_ids(&second), ids(&["A_out"]));
}

#[test]
fn non_workflow_is_rejected() {
    let tool = parse_document("class: CommandLineTool\nid: tool\n", Path::new("t.cwl")).unwrap();
    let err = extract_subgraph(&["tool#x"], &tool).unwrap_err();
    assert!(matches!(err, SubflowError::NotAWorkflow { .. }));
}

#[test]
fn unknown_root_is_rejected() {
    let err = extract_subgraph(&[id("nope")], &workflow()).unwrap_err();
    assert!(err.to_string().contains("nope"));
}

#[test]
fn untyped_severed_source_is_rejected() {
    let wf = parse_document(
        r#"
class: Workflow
inputs: []
outputs: []
steps:
  - id: wf#A
    in: []
    out: [wf#A/out]
  - id: wf#B
    in:
      - id: wf#B/x
        source: wf#A/out
    out: [wf#B/out]
"#,
        Path::new("wf.cwl"),
    )
    .unwrap();

    let err = extract_subgraph(&["wf#B"], &wf).unwrap_err();
    assert!(matches!(err, SubflowError::MissingPortType { .. }));
}
