//! Day 14: Parabolic Reflector Dish; rolling rocks and spin-cycle
//! detection to reach round one billion.

use std::collections::HashMap;

use crate::utils::grid::{Direction, Grid, GridError, Point};
use crate::utils::solve_failed;
use elven_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};

const SPIN_ROUNDS: u64 = 1_000_000_000;

#[derive(AutoRegisterSolver)]
#[aoc(year = 2023, day = 14, tags = ["2023", "grid"])]
pub struct Day14;

impl AocParser for Day14 {
    type SharedData<'a> = Grid;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::from_lines(input.lines().filter(|line| !line.is_empty()))
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl Solver for Day14 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => {
                let mut grid = shared.clone();
                tilt(&mut grid, Direction::North).map_err(solve_failed)?;
                Ok(north_load(&grid).to_string())
            }
            2 => {
                let mut grid = shared.clone();
                let mut seen: HashMap<String, u64> = HashMap::new();
                let mut round = 0;
                while round < SPIN_ROUNDS {
                    spin(&mut grid).map_err(solve_failed)?;
                    round += 1;
                    if let Some(previous) = seen.insert(grid.to_string(), round) {
                        let remaining = (SPIN_ROUNDS - round) % (round - previous);
                        for _ in 0..remaining {
                            spin(&mut grid).map_err(solve_failed)?;
                        }
                        break;
                    }
                }
                Ok(north_load(&grid).to_string())
            }
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

/// Roll every rounded rock as far as it goes in `direction`.
fn tilt(grid: &mut Grid, direction: Direction) -> Result<(), GridError> {
    let width = grid.width() as i64;
    let height = grid.height() as i64;
    match direction {
        Direction::North => {
            for x in 0..width {
                let mut free = 0;
                for y in 0..height {
                    free = roll(grid, Point::new(x, y), |f| Point::new(x, f), free, 1, y)?;
                }
            }
        }
        Direction::South => {
            for x in 0..width {
                let mut free = height - 1;
                for y in (0..height).rev() {
                    free = roll(grid, Point::new(x, y), |f| Point::new(x, f), free, -1, y)?;
                }
            }
        }
        Direction::West => {
            for y in 0..height {
                let mut free = 0;
                for x in 0..width {
                    free = roll(grid, Point::new(x, y), |f| Point::new(f, y), free, 1, x)?;
                }
            }
        }
        Direction::East => {
            for y in 0..height {
                let mut free = width - 1;
                for x in (0..width).rev() {
                    free = roll(grid, Point::new(x, y), |f| Point::new(f, y), free, -1, x)?;
                }
            }
        }
    }
    Ok(())
}

/// Advance one scan step: move a rock to the free slot or reset the slot
/// behind a cube. `along` is the scan coordinate of the current cell;
/// returns the updated free slot.
fn roll(
    grid: &mut Grid,
    at: Point,
    slot: impl Fn(i64) -> Point,
    free: i64,
    step: i64,
    along: i64,
) -> Result<i64, GridError> {
    match grid.at(&at)? {
        '#' => Ok(along + step),
        'O' => {
            grid.set(&at, '.')?;
            grid.set(&slot(free), 'O')?;
            Ok(free + step)
        }
        _ => Ok(free),
    }
}

fn spin(grid: &mut Grid) -> Result<(), GridError> {
    tilt(grid, Direction::North)?;
    tilt(grid, Direction::West)?;
    tilt(grid, Direction::South)?;
    tilt(grid, Direction::East)?;
    Ok(())
}

fn north_load(grid: &Grid) -> u64 {
    let height = grid.height() as u64;
    grid.find_all('O')
        .iter()
        .map(|rock| height - rock.y as u64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....";

    #[test]
    fn part_1_example() {
        let mut shared = Day14::parse(EXAMPLE).unwrap();
        assert_eq!(Day14::solve_part(&mut shared, 1).unwrap(), "136");
    }

    #[test]
    fn part_2_example() {
        let mut shared = Day14::parse(EXAMPLE).unwrap();
        assert_eq!(Day14::solve_part(&mut shared, 2).unwrap(), "64");
    }

    #[test]
    fn tilt_north_stacks_rocks() {
        let mut grid = Grid::from_lines([".O", "OO"]).unwrap();
        tilt(&mut grid, Direction::North).unwrap();
        assert_eq!(grid.to_string(), "OO\nO.\n");
    }

    #[test]
    fn one_spin_matches_published_state() {
        let mut grid = Day14::parse(EXAMPLE).unwrap();
        spin(&mut grid).unwrap();
        let expected = "\
.....#....
....#...O#
...OO##...
.OO#......
.....OOO#.
.O#...O#.#
....O#....
......OOOO
#...O###..
#..OO#....
";
        assert_eq!(grid.to_string(), expected);
    }
}
