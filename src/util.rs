use serde_json::Value;
use std::path::Path;

/// Number of entries in a list-like field.
///
/// Text fields (run lists pasted into a text area) count their non-empty lines;
/// arrays count their elements. Anything else, including `null`, is 0.
pub fn list_length(value: &Value) -> usize {
    match value {
        Value::String(text) => count_lines(text),
        Value::Array(items) => items.len(),
        _ => 0,
    }
}

pub fn count_lines(text: &str) -> usize {
    text.split('\n').filter(|line| !line.is_empty()).count()
}

pub fn display_path(path: Option<&Path>) -> String {
    match path {
        Some(path) if !is_stdin(path) => path.display().to_string(),
        _ => "<stdin>".to_string(),
    }
}

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}
