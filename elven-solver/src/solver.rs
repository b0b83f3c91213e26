//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing AoC puzzle input into shared data
///
/// Defines the shared data type and parsing logic for a solver, keeping
/// parsing and solving concerns separate.
///
/// # Example
///
/// ```
/// use elven_solver::{AocParser, ParseError};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait AocParser {
    /// The shared data structure that holds parsed input and intermediate results.
    ///
    /// Use any ownership strategy:
    /// - `Vec<T>` or custom structs for owned data (simplest, supports mutation)
    /// - `Vec<&'a str>` or similar for zero-copy borrowed data when no
    ///   transformation is needed
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Core trait that all Advent of Code solvers must implement.
///
/// Extends `AocParser` to inherit the `SharedData` type and `parse()`.
/// Each solver handles one year-day problem and defines how to solve each
/// of its parts, with mutable access to the shared data so parts can share
/// lazily computed intermediate results.
///
/// # Example
///
/// ```
/// use elven_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver {
///     type SharedData<'a> = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input.lines()
///             .map(|line| line.parse().map_err(|_|
///                 ParseError::InvalidFormat("Expected integer".to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 2;
///
///     fn solve_part(
///         shared: &mut Self::SharedData<'_>,
///         part: u8,
///     ) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().sum::<i32>().to_string()),
///             2 => Ok(shared.iter().product::<i32>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Arguments
    /// * `shared` - Mutable reference to shared data (parsed input and intermediate results)
    /// * `part` - The part number (1, 2, etc.)
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Extension methods shared by all solvers
pub trait SolverExt: Solver {
    /// Solve a part after validating it against `Self::PARTS`
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
