use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use lumifmt::cli::{Command, RootArgs};
use lumifmt::commands;

fn main() -> Result<ExitCode> {
    let args = RootArgs::parse();
    lumifmt::logging::init(args.verbose);

    let outcome = match &args.command {
        Command::Lumis(args) => commands::run_lumis(args)?,
        Command::Parse(args) => commands::run_parse(args)?,
        Command::HasStep(args) => commands::run_has_step(args)?,
        Command::Harvesting(args) => commands::run_harvesting(args)?,
        Command::Count(args) => commands::run_count(args)?,
    };

    if !outcome.output.is_empty() {
        println!("{}", outcome.output);
    }
    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
