//! Step membership checks over a workflow's sequences.
//!
//! A sequence's `step` field comes in two shapes: a list of step names, or the
//! legacy comma-joined `"NAME:value,NAME2:value"` string. Both are resolved to
//! canonical names (the text before the first colon) before any comparison.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Step that triggers a harvesting pass for its sequence.
pub const HARVESTING_TRIGGER_STEP: &str = "DQM";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepSpec {
    List(Vec<String>),
    Delimited(String),
}

impl Default for StepSpec {
    fn default() -> Self {
        StepSpec::List(Vec::new())
    }
}

impl StepSpec {
    /// Canonical step names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            StepSpec::List(steps) => steps.iter().map(|step| canonical_name(step)).collect(),
            StepSpec::Delimited(joined) => joined.split(',').map(canonical_name).collect(),
        }
    }

    pub fn contains(&self, step_name: &str) -> bool {
        self.names().contains(&step_name)
    }
}

/// `RECO:reconstruction_AOD` -> `RECO`.
pub fn canonical_name(token: &str) -> &str {
    token.split_once(':').map_or(token, |(name, _)| name)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    #[serde(default)]
    pub step: StepSpec,
}

impl Sequence {
    pub fn new(step: StepSpec) -> Self {
        Self { step }
    }

    pub fn has_step(&self, step_name: &str) -> bool {
        self.step.contains(step_name)
    }

    /// A sequence with a DQM step needs a harvesting step after it.
    pub fn needs_harvesting(&self) -> bool {
        self.has_step(HARVESTING_TRIGGER_STEP)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(default)]
    pub sequences: Vec<Sequence>,
}

impl Workflow {
    pub fn new(sequences: Vec<Sequence>) -> Self {
        Self { sequences }
    }

    /// Build a workflow from an untyped request document.
    ///
    /// Never fails: a missing or malformed `sequences` list yields no sequences,
    /// and a sequence with a malformed `step` keeps its slot with no steps.
    pub fn from_value(value: &Value) -> Self {
        let Some(items) = value.get("sequences").and_then(Value::as_array) else {
            tracing::debug!("document has no sequences list");
            return Self::default();
        };

        let sequences = items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let step = item
                    .get("step")
                    .and_then(|step| serde_json::from_value::<StepSpec>(step.clone()).ok());
                if step.is_none() {
                    tracing::debug!(sequence = idx, "sequence step missing or malformed");
                }
                Sequence::new(step.unwrap_or_default())
            })
            .collect();
        Self { sequences }
    }

    /// Indices of sequences that need harvesting.
    pub fn harvesting_sequences(&self) -> Vec<usize> {
        self.sequences
            .iter()
            .enumerate()
            .filter(|(_, sequence)| sequence.needs_harvesting())
            .map(|(idx, _)| idx)
            .collect()
    }
}

/// True when any sequence of the workflow declares `step_name`.
pub fn has_step(workflow: &Workflow, step_name: &str) -> bool {
    workflow
        .sequences
        .iter()
        .any(|sequence| sequence.has_step(step_name))
}

/// [`has_step`] over an untyped JSON document; malformed shapes never match.
pub fn has_step_in_value(document: &Value, step_name: &str) -> bool {
    has_step(&Workflow::from_value(document), step_name)
}
