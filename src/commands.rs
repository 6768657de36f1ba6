//! Command handlers behind the CLI.
//!
//! Handlers read their input, compute, and hand the text back to `main`, which
//! owns stdout and the process exit status.
use anyhow::{Context, Result};
use serde_json::Value;

use crate::cli::{CountArgs, HarvestingArgs, HasStepArgs, LumisArgs, ParseArgs};
use crate::document::{read_json, read_text, select_field};
use crate::lumis::{self, FormatOptions, LumiMap};
use crate::steps::{has_step, Workflow};
use crate::util::list_length;

/// Text for stdout plus whether the command succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: true,
        }
    }
}

pub fn run_lumis(args: &LumisArgs) -> Result<Outcome> {
    let document = read_json(args.input.input.as_deref())?;
    let value = select_field(document, args.field.as_deref());
    let options = FormatOptions {
        ranges_per_line: args.per_line,
    };
    Ok(Outcome::ok(format_lumis_value(value, options)?))
}

/// Format an untyped lumisections value; `null` is an absent map.
pub fn format_lumis_value(value: Value, options: FormatOptions) -> Result<String> {
    let lumis: Option<LumiMap> = if value.is_null() {
        None
    } else {
        Some(
            serde_json::from_value(value)
                .context("lumisections must map runs to [[start,end], ...]")?,
        )
    };
    tracing::debug!(
        runs = lumis.as_ref().map_or(0, LumiMap::len),
        ranges_per_line = options.ranges_per_line,
        "formatting lumisections"
    );
    Ok(lumis::stringify_with(lumis.as_ref(), options))
}

pub fn run_parse(args: &ParseArgs) -> Result<Outcome> {
    let text = read_text(args.input.input.as_deref())?;
    let lumis = lumis::parse(&text)?;
    let json = serde_json::to_string(&lumis).context("serialize lumisections")?;
    Ok(Outcome::ok(json))
}

pub fn run_has_step(args: &HasStepArgs) -> Result<Outcome> {
    let document = read_json(args.input.input.as_deref())?;
    let workflow = Workflow::from_value(&document);
    let found = has_step(&workflow, &args.step);
    tracing::debug!(
        step = %args.step,
        sequences = workflow.sequences.len(),
        found,
        "checked step"
    );
    Ok(Outcome {
        output: found.to_string(),
        success: found || !args.exit_code,
    })
}

pub fn run_harvesting(args: &HarvestingArgs) -> Result<Outcome> {
    let document = read_json(args.input.input.as_deref())?;
    let indices = Workflow::from_value(&document).harvesting_sequences();
    let lines: Vec<String> = indices.iter().map(usize::to_string).collect();
    Ok(Outcome::ok(lines.join("\n")))
}

pub fn run_count(args: &CountArgs) -> Result<Outcome> {
    let document = read_json(args.input.input.as_deref())?;
    let value = select_field(document, args.field.as_deref());
    Ok(Outcome::ok(list_length(&value).to_string()))
}
