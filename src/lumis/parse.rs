use super::LumiMap;
use anyhow::{Context, Result};

/// Parse an edited lumisection text block back into a lumi map.
///
/// Accepts the output of [`super::stringify`], including its trailing commas.
/// Blank input is an empty map. Runs keep their order in the text.
pub fn parse(text: &str) -> Result<LumiMap> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(LumiMap::new());
    }

    let cleaned = strip_trailing_commas(trimmed);
    let lumis: LumiMap = serde_json::from_str(&cleaned)
        .context("parse lumisection ranges as {run: [[start,end], ...]}")?;
    tracing::debug!(runs = lumis.len(), "parsed lumisection ranges");
    Ok(lumis)
}

/// Drop commas that directly precede `]` or `}`, ignoring string contents.
fn strip_trailing_commas(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in text.char_indices() {
        if in_string {
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => {
                in_string = true;
                out.push(ch);
            }
            ',' => {
                let next = text[idx + 1..].chars().find(|c| !c.is_whitespace());
                if !matches!(next, Some(']') | Some('}')) {
                    out.push(ch);
                }
            }
            _ => out.push(ch),
        }
    }
    out
}
