//! Request documents read from a file or stdin.
use crate::util::{display_path, is_stdin};
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read raw text from `path`, or stdin when `path` is `None` or `-`.
pub fn read_text(path: Option<&Path>) -> Result<String> {
    let text = match path.filter(|path| !is_stdin(path)) {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("read stdin")?;
            buf
        }
    };
    tracing::debug!(source = %display_path(path), bytes = text.len(), "read input");
    Ok(text)
}

pub fn read_json(path: Option<&Path>) -> Result<Value> {
    let text = read_text(path)?;
    parse_json(&text).with_context(|| format!("parse JSON from {}", display_path(path)))
}

pub fn parse_json(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}

/// The named top-level field of an object, or the whole document.
///
/// A missing field, or a field of a non-object, is `null`.
pub fn select_field(document: Value, field: Option<&str>) -> Value {
    match field {
        None => document,
        Some(field) => document.get(field).cloned().unwrap_or(Value::Null),
    }
}
