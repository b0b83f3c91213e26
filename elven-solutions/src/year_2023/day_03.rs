//! Day 3: Gear Ratios; digit runs in a schematic grid and their symbol
//! neighborhoods.

use crate::utils::grid::{Grid, Point};
use elven_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};

struct NumberRun {
    value: u64,
    y: i64,
    x0: i64,
    x1: i64,
}

impl NumberRun {
    fn adjacent_to(&self, point: &Point) -> bool {
        (self.y - 1..=self.y + 1).contains(&point.y)
            && (self.x0 - 1..=self.x1 + 1).contains(&point.x)
    }
}

pub struct Schematic {
    grid: Grid,
    numbers: Vec<NumberRun>,
}

#[derive(AutoRegisterSolver)]
#[aoc(year = 2023, day = 3, tags = ["2023", "grid"])]
pub struct Day03;

impl AocParser for Day03 {
    type SharedData<'a> = Schematic;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let grid = Grid::from_lines(input.lines().filter(|line| !line.is_empty()))
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let numbers = extract_numbers(&grid);
        Ok(Schematic { grid, numbers })
    }
}

impl Solver for Day03 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared
                .numbers
                .iter()
                .filter(|run| has_symbol_neighbor(&shared.grid, run))
                .map(|run| run.value)
                .sum::<u64>()
                .to_string()),
            2 => Ok(shared
                .grid
                .find_all('*')
                .iter()
                .filter_map(|star| {
                    let adjacent: Vec<u64> = shared
                        .numbers
                        .iter()
                        .filter(|run| run.adjacent_to(star))
                        .map(|run| run.value)
                        .collect();
                    (adjacent.len() == 2).then(|| adjacent[0] * adjacent[1])
                })
                .sum::<u64>()
                .to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn extract_numbers(grid: &Grid) -> Vec<NumberRun> {
    let mut numbers = Vec::new();
    for y in 0..grid.height() as i64 {
        let mut x = 0;
        while x < grid.width() as i64 {
            let start = x;
            let mut value = 0;
            while let Some(digit) = grid
                .get(&Point::new(x, y))
                .and_then(|ch| ch.to_digit(10))
            {
                value = value * 10 + digit as u64;
                x += 1;
            }
            if x > start {
                numbers.push(NumberRun {
                    value,
                    y,
                    x0: start,
                    x1: x - 1,
                });
            } else {
                x += 1;
            }
        }
    }
    numbers
}

fn has_symbol_neighbor(grid: &Grid, run: &NumberRun) -> bool {
    (run.y - 1..=run.y + 1).any(|y| {
        (run.x0 - 1..=run.x1 + 1).any(|x| {
            grid.get(&Point::new(x, y))
                .is_some_and(|ch| ch != '.' && !ch.is_ascii_digit())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..";

    #[test]
    fn part_1_example() {
        let mut shared = Day03::parse(EXAMPLE).unwrap();
        assert_eq!(Day03::solve_part(&mut shared, 1).unwrap(), "4361");
    }

    #[test]
    fn part_2_example() {
        let mut shared = Day03::parse(EXAMPLE).unwrap();
        assert_eq!(Day03::solve_part(&mut shared, 2).unwrap(), "467835");
    }
}
