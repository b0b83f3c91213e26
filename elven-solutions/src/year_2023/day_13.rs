//! Day 13: Point of Incidence. Mirror lines with an exact smudge count.

use crate::utils::grid::{Grid, Point};
use crate::utils::solve_failed;
use anyhow::anyhow;
use elven_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};

#[derive(AutoRegisterSolver)]
#[aoc(year = 2023, day = 13, tags = ["2023", "grid"])]
pub struct Day13;

impl AocParser for Day13 {
    type SharedData<'a> = Vec<Grid>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .split("\n\n")
            .filter(|block| !block.trim().is_empty())
            .map(|block| {
                Grid::from_lines(block.lines().filter(|line| !line.is_empty()))
                    .map_err(|e| ParseError::InvalidFormat(e.to_string()))
            })
            .collect()
    }
}

impl Solver for Day13 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let smudges = match part {
            1 => 0,
            2 => 1,
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        shared
            .iter()
            .map(|grid| reflection_score(grid, smudges))
            .sum::<Result<u64, SolveError>>()
            .map(|sum| sum.to_string())
    }
}

/// 100 * rows above a horizontal mirror, or columns left of a vertical one.
/// The mirror must have exactly `smudges` mismatched cells.
fn reflection_score(grid: &Grid, smudges: u64) -> Result<u64, SolveError> {
    let height = grid.height() as i64;
    let width = grid.width() as i64;

    for r in 1..height {
        if row_mismatches(grid, r) == smudges {
            return Ok(100 * r as u64);
        }
    }
    for c in 1..width {
        if col_mismatches(grid, c) == smudges {
            return Ok(c as u64);
        }
    }
    Err(solve_failed(anyhow!("pattern has no mirror line")))
}

fn row_mismatches(grid: &Grid, r: i64) -> u64 {
    let mut mismatches = 0;
    for k in 0.. {
        let (above, below) = (r - 1 - k, r + k);
        if above < 0 || below >= grid.height() as i64 {
            break;
        }
        for x in 0..grid.width() as i64 {
            if grid.get(&Point::new(x, above)) != grid.get(&Point::new(x, below)) {
                mismatches += 1;
            }
        }
    }
    mismatches
}

fn col_mismatches(grid: &Grid, c: i64) -> u64 {
    let mut mismatches = 0;
    for k in 0.. {
        let (left, right) = (c - 1 - k, c + k);
        if left < 0 || right >= grid.width() as i64 {
            break;
        }
        for y in 0..grid.height() as i64 {
            if grid.get(&Point::new(left, y)) != grid.get(&Point::new(right, y)) {
                mismatches += 1;
            }
        }
    }
    mismatches
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
#.##..##.
..#.##.#.
##......#
##......#
..#.##.#.
..##..##.
#.#.##.#.

#...##..#
#....#..#
..##..###
#####.##.
#####.##.
..##..###
#....#..#";

    #[test]
    fn part_1_example() {
        let mut shared = Day13::parse(EXAMPLE).unwrap();
        assert_eq!(Day13::solve_part(&mut shared, 1).unwrap(), "405");
    }

    #[test]
    fn part_2_example() {
        let mut shared = Day13::parse(EXAMPLE).unwrap();
        assert_eq!(Day13::solve_part(&mut shared, 2).unwrap(), "400");
    }

    #[test]
    fn no_mirror_is_an_error() {
        let grid = Grid::from_lines(["#.", ".#"]).unwrap();
        assert!(reflection_score(&grid, 0).is_err());
    }
}
