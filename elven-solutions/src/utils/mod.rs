//! Shared helpers for the per-day solvers.

pub mod grid;
pub mod math;
pub mod search;

use elven_solver::SolveError;

/// Wrap any error as a `SolveError::SolveFailed` via anyhow
pub fn solve_failed(err: impl Into<anyhow::Error>) -> SolveError {
    SolveError::failed(err.into())
}
