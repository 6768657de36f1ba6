//! Lumisection range formatting and workflow step checks for ReReco requests.
//!
//! - [`lumis`]: render a run → lumi range map as an aligned text block and
//!   parse it back.
//! - [`steps`]: decide whether a workflow declares a step, and which
//!   sequences need harvesting.
pub mod cli;
pub mod commands;
pub mod document;
pub mod logging;
pub mod lumis;
pub mod steps;
pub mod util;

pub use lumis::{parse, stringify, LumiMap, LumiRange};
pub use steps::{has_step, has_step_in_value, Sequence, StepSpec, Workflow};
