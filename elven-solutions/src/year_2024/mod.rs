//! Solutions for Advent of Code 2024.

pub mod day_01;
