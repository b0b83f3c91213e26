//! Advent of Code solver runner

mod aggregator;
mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

use crate::aggregator::{ResultAggregator, ResultKey};
use crate::cli::Args;
use crate::config::Config;
use crate::error::CliError;
use crate::executor::Executor;
use crate::output::OutputFormatter;
use clap::Parser;
use elven_solver::{RegistryBuilder, SolverRegistry};
// Linking the solutions crate is what pulls its registrations in.
use elven_solutions as _;

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;

    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config).map_err(error::ArcExecutorError::from)?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the given filters");
        return Ok(());
    }

    for (year, day) in executor.missing_inputs() {
        eprintln!("Warning: no input file for {year}/day{day:02}");
    }

    let expected: Vec<ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            let (year, day) = (w.year, w.day);
            w.parts.clone().map(move |part| ResultKey { year, day, part })
        })
        .collect();

    let formatter = OutputFormatter::new(config.quiet);
    let mut aggregator = ResultAggregator::new(expected);
    let mut finished = Vec::new();

    let (tx, rx) = std::sync::mpsc::channel();
    let handle = std::thread::spawn(move || executor.execute(tx));

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            finished.push(ready);
        }
    }
    if !aggregator.is_complete() {
        eprintln!("Warning: some solvers produced no result");
    }
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        finished.push(ready);
    }

    handle
        .join()
        .map_err(|_| CliError::Config("executor thread panicked".to_string()))??;

    formatter.print_summary(&finished);
    Ok(())
}

/// Build the registry from plugin registrations, filtered by tags
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new();
    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };
    Ok(builder.build())
}
