//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use crate::inputs::expand_tilde;
use std::path::PathBuf;

/// Resolved runtime configuration
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Input directory path
    pub input_dir: PathBuf,
    /// Single-file input override
    pub input_file: Option<PathBuf>,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        // An input override only makes sense for one specific puzzle.
        if args.input.is_some() && (args.year.is_none() || args.day.is_none()) {
            return Err(CliError::Config(
                "--input requires both --year and --day".to_string(),
            ));
        }

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir),
            input_file: args.input,
            thread_count: args.threads.unwrap_or_else(num_cpus),
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
        })
    }
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn input_override_requires_year_and_day() {
        let args = Args::parse_from(["elven", "--input", "foo.txt", "--year", "2023"]);
        assert!(matches!(Config::from_args(args), Err(CliError::Config(_))));

        let args = Args::parse_from([
            "elven", "--input", "foo.txt", "--year", "2023", "--day", "1",
        ]);
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.input_file, Some(PathBuf::from("foo.txt")));
    }

    #[test]
    fn default_input_dir() {
        let args = Args::parse_from(["elven"]);
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("inputs"));
        assert!(config.thread_count >= 1);
    }
}
