//! Day 1: Historian Hysteria; paired list distance and similarity score.

use elven_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};
use itertools::Itertools;

#[derive(AutoRegisterSolver)]
#[aoc(year = 2024, day = 1, tags = ["2024"])]
pub struct Day01;

impl AocParser for Day01 {
    type SharedData<'a> = (Vec<u64>, Vec<u64>);

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut left = Vec::new();
        let mut right = Vec::new();
        for line in input.lines().filter(|line| !line.is_empty()) {
            let bad = || ParseError::InvalidFormat(line.to_string());
            let (a, b) = line.split_whitespace().collect_tuple().ok_or_else(bad)?;
            left.push(a.parse().map_err(|_| bad())?);
            right.push(b.parse().map_err(|_| bad())?);
        }
        Ok((left, right))
    }
}

impl Solver for Day01 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let (left, right) = shared;
        match part {
            1 => Ok(left
                .iter()
                .sorted()
                .zip(right.iter().sorted())
                .map(|(a, b)| a.abs_diff(*b))
                .sum::<u64>()
                .to_string()),
            2 => Ok(left
                .iter()
                .map(|a| a * right.iter().filter(|&b| b == a).count() as u64)
                .sum::<u64>()
                .to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}
