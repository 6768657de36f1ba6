//! CLI argument parsing for `lumifmt`.
//!
//! Every command reads one document (a file, or stdin when `--input` is omitted
//! or `-`) and writes its result to stdout.
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::lumis::DEFAULT_RANGES_PER_LINE;

#[derive(Parser, Debug)]
#[command(
    name = "lumifmt",
    version,
    about = "Format lumisection ranges and check workflow steps of ReReco requests",
    after_help = "Examples:\n  lumifmt lumis --input request.json --field lumisections\n  lumifmt parse --input lumis.txt\n  lumifmt has-step --input request.json --step DQM\n  lumifmt harvesting --input request.json\n  lumifmt count --input request.json --field runs",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Emit debug diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    Lumis(LumisArgs),
    Parse(ParseArgs),
    HasStep(HasStepArgs),
    Harvesting(HarvestingArgs),
    Count(CountArgs),
}

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// JSON or text input; stdin when omitted or `-`
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(about = "Render a run -> lumisection ranges map as an aligned text block")]
pub struct LumisArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Top-level field holding the map (e.g. `lumisections`)
    #[arg(long, value_name = "NAME")]
    pub field: Option<String>,

    /// Ranges per line before wrapping
    #[arg(long, value_name = "N", default_value_t = DEFAULT_RANGES_PER_LINE)]
    pub per_line: usize,
}

#[derive(Parser, Debug)]
#[command(about = "Parse an edited lumisection text block into compact JSON")]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Parser, Debug)]
#[command(about = "Report whether any sequence of a request declares a step")]
pub struct HasStepArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Canonical step name, e.g. `DQM` or `RECO`
    #[arg(long, value_name = "NAME")]
    pub step: String,

    /// Exit with status 1 when the step is absent
    #[arg(long)]
    pub exit_code: bool,
}

#[derive(Parser, Debug)]
#[command(about = "List indices of sequences that need a harvesting step")]
pub struct HarvestingArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Parser, Debug)]
#[command(about = "Count entries of a list field or non-empty lines of a text field")]
pub struct CountArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Top-level field to count (e.g. `runs`)
    #[arg(long, value_name = "NAME")]
    pub field: Option<String>,
}
