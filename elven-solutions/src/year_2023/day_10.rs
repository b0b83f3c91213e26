//! Day 10: Pipe Maze; BFS around the pipe loop, then interior counting
//! through a doubled-resolution grid and an exterior flood fill.

use std::collections::BTreeSet;

use crate::utils::grid::{BLOCKED, Direction, EMPTY, Grid, Point};
use crate::utils::search::{bfs_distances, bfs_visit};
use crate::utils::solve_failed;
use anyhow::anyhow;
use elven_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};

#[derive(AutoRegisterSolver)]
#[aoc(year = 2023, day = 10, tags = ["2023", "grid"])]
pub struct Day10;

impl AocParser for Day10 {
    type SharedData<'a> = Grid;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::from_lines(input.lines().filter(|line| !line.is_empty()))
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl Solver for Day10 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => farthest_loop_distance(shared).map(|d| d.to_string()),
            2 => enclosed_tiles(shared).map(|n| n.to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

/// Directions a pipe character connects toward.
fn pipe_directions(ch: char) -> &'static [Direction] {
    use Direction::*;
    match ch {
        '|' => &[North, South],
        '-' => &[East, West],
        'L' => &[North, East],
        'J' => &[North, West],
        '7' => &[South, West],
        'F' => &[South, East],
        'S' => &Direction::ALL,
        _ => &[],
    }
}

/// Neighbors connected to `point` in both directions, which keeps the walk
/// on the loop and off junk pipes.
fn loop_successors(grid: &Grid, point: &Point) -> Vec<Point> {
    let Some(ch) = grid.get(point) else {
        return Vec::new();
    };
    pipe_directions(ch)
        .iter()
        .filter_map(|&dir| {
            let next = point.step(dir);
            let next_ch = grid.get(&next)?;
            pipe_directions(next_ch)
                .contains(&dir.opposite())
                .then_some(next)
        })
        .collect()
}

fn farthest_loop_distance(grid: &Grid) -> Result<u64, SolveError> {
    let start = grid.find('S').map_err(solve_failed)?;
    let distances = bfs_distances([start], |p| loop_successors(grid, p));
    distances
        .values()
        .max()
        .copied()
        .ok_or_else(|| solve_failed(anyhow!("start tile is isolated")))
}

/// Count tiles enclosed by the loop.
///
/// Each tile becomes a 2x2 block in a doubled grid so that flood fill can
/// squeeze between adjacent but unconnected pipes; the loop and its
/// connectors are walls, the exterior is painted, and whatever tile center
/// stays empty is enclosed.
fn enclosed_tiles(grid: &Grid) -> Result<usize, SolveError> {
    let start = grid.find('S').map_err(solve_failed)?;
    let loop_cells: BTreeSet<Point> = bfs_visit([start], |p| loop_successors(grid, p));

    let mut big = Grid::filled(2 * grid.width() + 1, 2 * grid.height() + 1, EMPTY);
    for point in &loop_cells {
        let center = Point::new(2 * point.x + 1, 2 * point.y + 1);
        big.set(&center, BLOCKED).map_err(solve_failed)?;
        for &dir in pipe_directions(grid.at(point).map_err(solve_failed)?) {
            let next = point.step(dir);
            let connects_back = grid
                .get(&next)
                .is_some_and(|ch| pipe_directions(ch).contains(&dir.opposite()));
            if connects_back && loop_cells.contains(&next) {
                big.set(&center.step(dir), BLOCKED).map_err(solve_failed)?;
            }
        }
    }
    big.paint_exterior('O').map_err(solve_failed)?;

    // paint_exterior padded the doubled grid, shifting every cell by one.
    Ok(grid
        .iter_cells()
        .filter(|(point, _)| !loop_cells.contains(point))
        .filter(|(point, _)| {
            big.get(&Point::new(2 * point.x + 2, 2 * point.y + 2)) == Some(EMPTY)
        })
        .count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_1_square_loop() {
        let input = "\
.....
.S-7.
.|.|.
.L-J.
.....";
        let mut shared = Day10::parse(input).unwrap();
        assert_eq!(Day10::solve_part(&mut shared, 1).unwrap(), "4");
    }

    #[test]
    fn part_1_complex_loop() {
        let input = "\
..F7.
.FJ|.
FJ.L7
|F--J
LJ...";
        let mut shared = Day10::parse(input).unwrap();
        assert_eq!(Day10::solve_part(&mut shared, 1).unwrap(), "8");
    }

    #[test]
    fn part_2_simple_enclosure() {
        let input = "\
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........";
        let mut shared = Day10::parse(input).unwrap();
        assert_eq!(Day10::solve_part(&mut shared, 2).unwrap(), "4");
    }

    #[test]
    fn part_2_with_junk_pipes() {
        let input = "\
FF7FSF7F7F7F7F7F---7
L|LJ||||||||||||F--J
FL-7LJLJ||||||LJL-77
F--JF--7||LJLJ7F7FJ-
L---JF-JLJ.||-FJLJJ7
|F|F-JF---7F7-L7L|7|
|FFJF7L7F-JF7|JL---7
7-L-JL7||F7|L7F-7F7|
L.L7LFJ|||||FJL7||LJ
L7JLJL-JLJLJL--JLJ.L";
        let mut shared = Day10::parse(input).unwrap();
        assert_eq!(Day10::solve_part(&mut shared, 2).unwrap(), "10");
    }
}
