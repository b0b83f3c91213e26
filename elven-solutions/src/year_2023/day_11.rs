//! Day 11: Cosmic Expansion; pairwise Manhattan distances after inflating
//! empty rows and columns.

use std::collections::BTreeSet;

use crate::utils::grid::{Grid, Point};
use elven_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};
use itertools::Itertools;

pub struct Image {
    galaxies: Vec<Point>,
    empty_rows: Vec<i64>,
    empty_cols: Vec<i64>,
}

#[derive(AutoRegisterSolver)]
#[aoc(year = 2023, day = 11, tags = ["2023", "grid"])]
pub struct Day11;

impl AocParser for Day11 {
    type SharedData<'a> = Image;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let grid = Grid::from_lines(input.lines().filter(|line| !line.is_empty()))
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let galaxies = grid.find_all('#');
        let rows: BTreeSet<i64> = galaxies.iter().map(|g| g.y).collect();
        let cols: BTreeSet<i64> = galaxies.iter().map(|g| g.x).collect();
        Ok(Image {
            empty_rows: (0..grid.height() as i64)
                .filter(|y| !rows.contains(y))
                .collect(),
            empty_cols: (0..grid.width() as i64)
                .filter(|x| !cols.contains(x))
                .collect(),
            galaxies,
        })
    }
}

impl Solver for Day11 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(sum_of_distances(shared, 1).to_string()),
            2 => Ok(sum_of_distances(shared, 999_999).to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

/// Sum pairwise Manhattan distances with each empty row/column widened by
/// `extra` additional cells.
fn sum_of_distances(image: &Image, extra: i64) -> u64 {
    let expanded: Vec<Point> = image
        .galaxies
        .iter()
        .map(|g| {
            let dx = image.empty_cols.iter().filter(|&&c| c < g.x).count() as i64;
            let dy = image.empty_rows.iter().filter(|&&r| r < g.y).count() as i64;
            Point::new(g.x + extra * dx, g.y + extra * dy)
        })
        .collect();
    expanded
        .iter()
        .tuple_combinations()
        .map(|(a, b)| a.manhattan_distance(b))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....";

    #[test]
    fn part_1_example() {
        let mut shared = Day11::parse(EXAMPLE).unwrap();
        assert_eq!(Day11::solve_part(&mut shared, 1).unwrap(), "374");
    }

    #[test]
    fn larger_expansion_factors() {
        let image = Day11::parse(EXAMPLE).unwrap();
        assert_eq!(sum_of_distances(&image, 9), 1030);
        assert_eq!(sum_of_distances(&image, 99), 8410);
    }
}
