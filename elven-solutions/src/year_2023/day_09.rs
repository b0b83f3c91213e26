//! Day 9: Mirage Maintenance; difference-sequence extrapolation.

use elven_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};

#[derive(AutoRegisterSolver)]
#[aoc(year = 2023, day = 9, tags = ["2023"])]
pub struct Day09;

impl AocParser for Day09 {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.split_whitespace()
                    .map(|n| {
                        n.parse()
                            .map_err(|_| ParseError::InvalidFormat(line.to_string()))
                    })
                    .collect()
            })
            .collect()
    }
}

impl Solver for Day09 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared.iter().map(|s| next_value(s)).sum::<i64>().to_string()),
            2 => Ok(shared.iter().map(|s| prev_value(s)).sum::<i64>().to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn differences(seq: &[i64]) -> Vec<i64> {
    seq.windows(2).map(|w| w[1] - w[0]).collect()
}

fn next_value(seq: &[i64]) -> i64 {
    if seq.iter().all(|&v| v == 0) {
        return 0;
    }
    seq.last().copied().unwrap_or(0) + next_value(&differences(seq))
}

fn prev_value(seq: &[i64]) -> i64 {
    if seq.iter().all(|&v| v == 0) {
        return 0;
    }
    seq.first().copied().unwrap_or(0) - prev_value(&differences(seq))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
0 3 6 9 12 15
1 3 6 10 15 21
10 13 16 21 30 45";

    #[test]
    fn part_1_example() {
        let mut shared = Day09::parse(EXAMPLE).unwrap();
        assert_eq!(Day09::solve_part(&mut shared, 1).unwrap(), "114");
    }

    #[test]
    fn part_2_example() {
        let mut shared = Day09::parse(EXAMPLE).unwrap();
        assert_eq!(Day09::solve_part(&mut shared, 2).unwrap(), "2");
    }

    #[test]
    fn backward_extrapolation_single_row() {
        assert_eq!(prev_value(&[10, 13, 16, 21, 30, 45]), 5);
    }
}
