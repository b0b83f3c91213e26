//! Error types for the CLI

use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input file error
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] elven_solver::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] elven_solver::RegistrationError),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// Solver execution failed
    #[error("Solver execution failed: {0}")]
    Solver(#[from] elven_solver::SolverError),

    /// Channel send error
    #[error("Channel send error")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Combine two Arc-wrapped errors into one, flattening Multiples
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                let mut combined = v1.clone();
                combined.extend(v2.iter().cloned());
                combined
            }
            (_, ExecutorError::Multiple(v)) => {
                let mut combined = vec![first];
                combined.extend(v.iter().cloned());
                combined
            }
            (ExecutorError::Multiple(v), _) => {
                let mut combined = v.clone();
                combined.push(second);
                combined
            }
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(
        existing: Option<ArcExecutorError>,
        new: ArcExecutorError,
    ) -> ArcExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}

/// Input-store errors
#[derive(Error, Debug)]
pub enum InputError {
    /// Input file is missing
    #[error("Missing input file {path} for {year}/day{day:02}")]
    Missing {
        year: u16,
        day: u8,
        path: std::path::PathBuf,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
