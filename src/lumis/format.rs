use super::{LumiMap, LumiRange};
use serde_json::Value;

/// Ranges rendered on one line before wrapping.
pub const DEFAULT_RANGES_PER_LINE: usize = 5;

const EMPTY_BLOCK: &str = "{}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub ranges_per_line: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            ranges_per_line: DEFAULT_RANGES_PER_LINE,
        }
    }
}

/// Render a lumi map as an aligned, editable text block.
///
/// ```text
/// {
///   "315257": [[1,88]   , [91,140] , [143,200]],
///   "315264": [[32,80]],
/// }
/// ```
///
/// Ranges of one run are padded to equal width and wrap after
/// [`DEFAULT_RANGES_PER_LINE`] entries. An absent or empty map renders as `{}`.
pub fn stringify<'a>(lumis: impl Into<Option<&'a LumiMap>>) -> String {
    stringify_with(lumis, FormatOptions::default())
}

pub fn stringify_with<'a>(
    lumis: impl Into<Option<&'a LumiMap>>,
    options: FormatOptions,
) -> String {
    let Some(lumis) = lumis.into().filter(|lumis| !lumis.is_empty()) else {
        return EMPTY_BLOCK.to_string();
    };

    let per_line = options.ranges_per_line.max(1);
    let mut body = String::new();
    for (run, ranges) in lumis.iter() {
        append_run_line(&mut body, run, ranges, per_line);
    }
    format!("{{\n{}\n}}", body.trim_end())
}

fn append_run_line(out: &mut String, run: &str, ranges: &[LumiRange], per_line: usize) {
    let prefix = format!("  {}: [", quote_run(run));
    let indent = prefix.chars().count();
    let rendered: Vec<String> = ranges.iter().map(LumiRange::render).collect();
    let longest = rendered.iter().map(String::len).max().unwrap_or(0);

    out.push_str(&prefix);
    for (idx, text) in rendered.iter().enumerate() {
        if idx + 1 == rendered.len() {
            out.push_str(text);
            break;
        }
        out.push_str(&format!("{text:<longest$},"));
        if (idx + 1) % per_line == 0 {
            out.push('\n');
            out.push_str(&" ".repeat(indent));
        } else {
            out.push(' ');
        }
    }
    out.push_str("],\n");
}

fn quote_run(run: &str) -> String {
    Value::String(run.to_string()).to_string()
}
