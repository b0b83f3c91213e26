//! A trait-based framework for registering and running Advent of Code solvers.
//!
//! Solvers implement [`AocParser`] to turn raw puzzle input into a shared
//! data structure, and [`Solver`] to answer individual parts against that
//! data. A [`SolverRegistry`] built through [`RegistryBuilder`] owns one
//! factory per year-day slot and hands out type-erased [`DynSolver`]
//! instances with parse and solve timing attached.
//!
//! Deriving [`AutoRegisterSolver`] submits a [`SolverPlugin`] through
//! `inventory`, so solvers spread across crates register themselves with
//! [`RegistryBuilder::register_all_plugins`] at startup.
//!
//! # Example
//!
//! ```
//! use elven_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver};
//!
//! struct Day1;
//!
//! impl AocParser for Day1 {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl Solver for Day1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(shared.iter().sum::<i64>().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let registry = RegistryBuilder::new().register::<Day1>(2023, 1).unwrap().build();
//! let mut solver = registry.create_solver(2023, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, Solver, SolverExt};

// Re-exported for the derive macro expansion and downstream `submit!` calls.
pub use inventory;

pub use elven_solver_macros::AutoRegisterSolver;
