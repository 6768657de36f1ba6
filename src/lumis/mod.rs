//! Run → lumisection range maps and their editable text form.
//!
//! The text block is what request editors see in the lumisections text area,
//! so the rendering is byte-stable and keeps runs in insertion order.
mod format;
mod parse;

pub use format::{stringify, stringify_with, FormatOptions, DEFAULT_RANGES_PER_LINE};
pub use parse::parse;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Closed interval `[start, end]` of luminosity sections.
///
/// Ordering of the bounds is not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LumiRange(pub u64, pub u64);

impl LumiRange {
    pub fn new(start: u64, end: u64) -> Self {
        LumiRange(start, end)
    }

    pub fn start(&self) -> u64 {
        self.0
    }

    pub fn end(&self) -> u64 {
        self.1
    }

    /// Compact JSON array text, e.g. `[1,10]`.
    pub fn render(&self) -> String {
        format!("[{},{}]", self.0, self.1)
    }
}

impl From<(u64, u64)> for LumiRange {
    fn from((start, end): (u64, u64)) -> Self {
        LumiRange(start, end)
    }
}

/// Ranges keyed by run, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LumiMap(IndexMap<String, Vec<LumiRange>>);

impl LumiMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert ranges for a run. Integer runs are keyed by their decimal text.
    ///
    /// Re-inserting an existing run replaces its ranges but keeps its position.
    pub fn insert(
        &mut self,
        run: impl ToString,
        ranges: Vec<LumiRange>,
    ) -> Option<Vec<LumiRange>> {
        self.0.insert(run.to_string(), ranges)
    }

    pub fn get(&self, run: &str) -> Option<&[LumiRange]> {
        self.0.get(run).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn runs(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[LumiRange])> {
        self.0
            .iter()
            .map(|(run, ranges)| (run.as_str(), ranges.as_slice()))
    }
}

impl<K: ToString> FromIterator<(K, Vec<LumiRange>)> for LumiMap {
    fn from_iter<I: IntoIterator<Item = (K, Vec<LumiRange>)>>(iter: I) -> Self {
        let mut map = LumiMap::new();
        for (run, ranges) in iter {
            map.insert(run, ranges);
        }
        map
    }
}
