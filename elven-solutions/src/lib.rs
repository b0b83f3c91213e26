//! Advent of Code solutions for 2023 and 2024.
//!
//! Each day is a unit struct implementing [`elven_solver::Solver`] and
//! deriving `AutoRegisterSolver`, so linking this crate is enough to make
//! every solver visible to a registry built with `register_all_plugins`.
//! The [`utils`] module holds the grid, search, and math helpers shared by
//! the grid-heavy puzzles.

pub mod utils;
pub mod year_2023;
pub mod year_2024;
