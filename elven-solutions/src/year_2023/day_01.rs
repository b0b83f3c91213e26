//! Day 1: Trebuchet?!; calibration values from the first and last digit
//! per line, optionally counting spelled-out digits.

use crate::utils::solve_failed;
use anyhow::anyhow;
use elven_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};

const SPELLED: [(&str, u64); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

#[derive(AutoRegisterSolver)]
#[aoc(year = 2023, day = 1, tags = ["2023"])]
pub struct Day01;

impl AocParser for Day01 {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().filter(|line| !line.is_empty()).collect())
    }
}

impl Solver for Day01 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let spelled = match part {
            1 => false,
            2 => true,
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        let total = shared
            .iter()
            .map(|line| calibration_value(line, spelled))
            .sum::<Result<u64, SolveError>>()?;
        Ok(total.to_string())
    }
}

fn calibration_value(line: &str, spelled: bool) -> Result<u64, SolveError> {
    let first = (0..line.len()).find_map(|i| digit_at(line, i, spelled));
    let last = (0..line.len()).rev().find_map(|i| digit_at(line, i, spelled));
    match (first, last) {
        (Some(first), Some(last)) => Ok(first * 10 + last),
        _ => Err(solve_failed(anyhow!("no digit in line {line:?}"))),
    }
}

fn digit_at(line: &str, i: usize, spelled: bool) -> Option<u64> {
    let byte = line.as_bytes()[i];
    if byte.is_ascii_digit() {
        return Some((byte - b'0') as u64);
    }
    if spelled {
        return SPELLED
            .iter()
            .find(|(word, _)| line[i..].starts_with(word))
            .map(|(_, value)| *value);
    }
    None
}
