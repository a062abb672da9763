//! Workflow document model.
//!
//! A [`WorkflowDocument`] is kept as an ordered YAML mapping rather than a
//! fully typed struct: extraction must re-emit every field it does not
//! understand exactly as it found it, in the same order. Typed, borrowed
//! views ([`Record`], [`StepRecord`], [`PortRecord`]) are layered on top
//! for the parts the graph engine reads.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::error::{Result, SubflowError};

/// Key of the workflow input port list.
pub const INPUTS: &str = "inputs";
/// Key of the workflow output port list.
pub const OUTPUTS: &str = "outputs";
/// Key of the workflow step list.
pub const STEPS: &str = "steps";

/// A validated workflow document.
///
/// Construction checks the structural shape the extraction engine relies
/// on (sections are lists of records carrying string ids). It does not
/// check graph well-formedness, and it does not check `class`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Mapping", into = "Mapping")]
pub struct WorkflowDocument {
    fields: Mapping,
}

impl WorkflowDocument {
    /// Wrap a mapping, validating its shape.
    pub fn new(fields: Mapping) -> Result<Self> {
        validate(&fields)?;
        Ok(Self { fields })
    }

    /// Wrap an arbitrary YAML value; the value must be a mapping.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Mapping(fields) => Self::new(fields),
            other => Err(invalid(format!(
                "document root must be a mapping, found {}",
                kind_name(&other)
            ))),
        }
    }

    /// The document's `class` field.
    pub fn class(&self) -> Option<&str> {
        self.get("class").and_then(Value::as_str)
    }

    /// The document's own `id`, if it has one.
    pub fn id(&self) -> Option<&str> {
        self.get("id").and_then(Value::as_str)
    }

    /// Look up an arbitrary top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Iterate over all top-level fields in document order.
    pub fn fields(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.fields.iter()
    }

    /// Borrow the underlying mapping.
    pub fn as_mapping(&self) -> &Mapping {
        &self.fields
    }

    /// Workflow input port records, in document order.
    pub fn inputs(&self) -> impl Iterator<Item = Record<'_>> {
        records(self.get(INPUTS))
    }

    /// Workflow output port records, in document order.
    pub fn outputs(&self) -> impl Iterator<Item = Record<'_>> {
        records(self.get(OUTPUTS))
    }

    /// Step records, in document order.
    pub fn steps(&self) -> impl Iterator<Item = StepRecord<'_>> {
        records(self.get(STEPS)).map(|record| StepRecord { record })
    }

    /// Find a step by id.
    pub fn find_step(&self, id: &str) -> Option<StepRecord<'_>> {
        self.steps().find(|step| step.id() == id)
    }
}

impl TryFrom<Mapping> for WorkflowDocument {
    type Error = SubflowError;

    fn try_from(fields: Mapping) -> Result<Self> {
        Self::new(fields)
    }
}

impl From<WorkflowDocument> for Mapping {
    fn from(document: WorkflowDocument) -> Self {
        document.fields
    }
}

/// A borrowed view of one record of `inputs`, `outputs` or `steps`.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    id: &'a str,
    fields: &'a Mapping,
}

impl<'a> Record<'a> {
    /// The record's identifier.
    pub fn id(&self) -> &'a str {
        self.id
    }

    /// All fields of the record.
    pub fn fields(&self) -> &'a Mapping {
        self.fields
    }

    /// Look up a field of the record.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key)
    }

    /// The ids named by `outputSource`, single-or-list normalized.
    pub fn output_sources(&self) -> Vec<&'a str> {
        source_ids(self.get("outputSource"))
    }
}

/// A borrowed view of a step record.
#[derive(Debug, Clone, Copy)]
pub struct StepRecord<'a> {
    record: Record<'a>,
}

impl<'a> StepRecord<'a> {
    /// The step's identifier.
    pub fn id(&self) -> &'a str {
        self.record.id
    }

    /// The underlying record.
    pub fn record(&self) -> Record<'a> {
        self.record
    }

    /// The step's `in` ports.
    pub fn in_ports(&self) -> impl Iterator<Item = PortRecord<'a>> {
        let ports = self
            .record
            .get("in")
            .and_then(Value::as_sequence)
            .map(|seq| seq.as_slice())
            .unwrap_or(&[]);
        ports.iter().filter_map(|port| {
            let fields = port.as_mapping()?;
            let id = string_id(fields)?;
            Some(PortRecord { id, fields })
        })
    }

    /// Ids of the step's `out` ports; entries may be bare ids or `{id}` records.
    pub fn out_ids(&self) -> Vec<&'a str> {
        self.record
            .get("out")
            .and_then(Value::as_sequence)
            .map(|seq| {
                seq.iter()
                    .filter_map(|out| match out {
                        Value::String(id) => Some(id.as_str()),
                        Value::Mapping(fields) => string_id(fields),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Declared type of the input port that reads `source`.
    ///
    /// Looks at the step's `inputs` sub-list first. A step without one is
    /// typed from `in` entries that carry their own `type`.
    pub fn port_type(&self, source: &str) -> Option<&'a Value> {
        let ports = match self.record.get(INPUTS).and_then(Value::as_sequence) {
            Some(seq) => seq.as_slice(),
            None => self
                .record
                .get("in")
                .and_then(Value::as_sequence)
                .map(|seq| seq.as_slice())
                .unwrap_or(&[]),
        };

        ports
            .iter()
            .filter_map(Value::as_mapping)
            .find(|port| source_ids(port.get("source")).contains(&source))
            .and_then(|port| port.get("type"))
    }
}

/// A borrowed view of a step's `in` port.
#[derive(Debug, Clone, Copy)]
pub struct PortRecord<'a> {
    id: &'a str,
    fields: &'a Mapping,
}

impl<'a> PortRecord<'a> {
    /// The port's identifier.
    pub fn id(&self) -> &'a str {
        self.id
    }

    /// Whether the port is wired to anything.
    pub fn has_source(&self) -> bool {
        self.fields.contains_key("source")
    }

    /// The ids named by `source`, single-or-list normalized.
    pub fn sources(&self) -> Vec<&'a str> {
        source_ids(self.fields.get("source"))
    }
}

/// Normalize a `source`/`outputSource` value to a list of ids.
///
/// Accepts a single id or a list of ids; anything else yields nothing.
pub fn source_ids(value: Option<&Value>) -> Vec<&str> {
    match value {
        Some(Value::String(id)) => vec![id.as_str()],
        Some(Value::Sequence(ids)) => ids.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

fn records(section: Option<&Value>) -> impl Iterator<Item = Record<'_>> {
    section
        .and_then(Value::as_sequence)
        .map(|seq| seq.as_slice())
        .unwrap_or(&[])
        .iter()
        .filter_map(|item| {
            let fields = item.as_mapping()?;
            let id = string_id(fields)?;
            Some(Record { id, fields })
        })
}

fn string_id(fields: &Mapping) -> Option<&str> {
    fields.get("id").and_then(Value::as_str)
}

fn invalid(message: String) -> SubflowError {
    SubflowError::InvalidDocument { message }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn validate(fields: &Mapping) -> Result<()> {
    for section in [INPUTS, OUTPUTS, STEPS] {
        let Some(value) = fields.get(section) else {
            continue;
        };
        let items = value.as_sequence().ok_or_else(|| {
            invalid(format!(
                "'{}' must be a list, found {}",
                section,
                kind_name(value)
            ))
        })?;

        for (index, item) in items.iter().enumerate() {
            let record = item.as_mapping().ok_or_else(|| {
                invalid(format!(
                    "{}[{}] must be a mapping, found {}",
                    section,
                    index,
                    kind_name(item)
                ))
            })?;
            let id = string_id(record)
                .ok_or_else(|| invalid(format!("{}[{}] has no string 'id'", section, index)))?;

            match section {
                OUTPUTS => validate_sources(id, "outputSource", record.get("outputSource"))?,
                STEPS => validate_step(id, record)?,
                _ => {}
            }
        }
    }

    Ok(())
}

fn validate_step(id: &str, step: &Mapping) -> Result<()> {
    if let Some(ports) = step.get("in") {
        let ports = ports
            .as_sequence()
            .ok_or_else(|| invalid(format!("step '{}': 'in' must be a list", id)))?;
        for port in ports {
            let port = port
                .as_mapping()
                .ok_or_else(|| invalid(format!("step '{}': 'in' entries must be mappings", id)))?;
            let port_id = string_id(port)
                .ok_or_else(|| invalid(format!("step '{}': 'in' entry has no string 'id'", id)))?;
            validate_sources(port_id, "source", port.get("source"))?;
        }
    }

    if let Some(outs) = step.get("out") {
        let outs = outs
            .as_sequence()
            .ok_or_else(|| invalid(format!("step '{}': 'out' must be a list", id)))?;
        for out in outs {
            let ok = match out {
                Value::String(_) => true,
                Value::Mapping(fields) => string_id(fields).is_some(),
                _ => false,
            };
            if !ok {
                return Err(invalid(format!(
                    "step '{}': 'out' entries must be ids or records with an 'id'",
                    id
                )));
            }
        }
    }

    if let Some(ports) = step.get(INPUTS) {
        if !ports.is_sequence() {
            return Err(invalid(format!("step '{}': 'inputs' must be a list", id)));
        }
    }

    Ok(())
}

fn validate_sources(owner: &str, key: &str, value: Option<&Value>) -> Result<()> {
    let ok = match value {
        None | Some(Value::String(_)) => true,
        Some(Value::Sequence(ids)) => ids.iter().all(Value::is_string),
        Some(_) => false,
    };
    if ok {
        Ok(())
    } else {
        Err(invalid(format!(
            "'{}' of '{}' must be an id or a list of ids",
            key, owner
        )))
    }
}
