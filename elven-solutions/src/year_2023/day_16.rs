//! Day 16: The Floor Will Be Lava; beam propagation with a
//! (position, direction) visited set, which also bounds looping beams.

use std::collections::BTreeSet;

use crate::utils::grid::{Direction, Grid, Point};
use crate::utils::search::bfs_visit;
use elven_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct BeamState {
    position: Point,
    direction: Direction,
}

#[derive(AutoRegisterSolver)]
#[aoc(year = 2023, day = 16, tags = ["2023", "grid"])]
pub struct Day16;

impl AocParser for Day16 {
    type SharedData<'a> = Grid;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Grid::from_lines(input.lines().filter(|line| !line.is_empty()))
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl Solver for Day16 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => {
                let start = BeamState {
                    position: Point::new(-1, 0),
                    direction: Direction::East,
                };
                Ok(energized(shared, start).to_string())
            }
            2 => Ok(edge_starts(shared)
                .into_iter()
                .map(|start| energized(shared, start))
                .max()
                .unwrap_or(0)
                .to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

/// Distinct in-bounds cells touched by a beam entering from `start`, which
/// sits one step outside the grid.
fn energized(grid: &Grid, start: BeamState) -> usize {
    let visited = bfs_visit([start], |state| beam_successors(grid, state));
    let cells: BTreeSet<Point> = visited
        .iter()
        .map(|state| state.position)
        .filter(|position| grid.in_bounds(position))
        .collect();
    cells.len()
}

fn beam_successors(grid: &Grid, state: &BeamState) -> Vec<BeamState> {
    use Direction::*;
    let position = state.position.step(state.direction);
    let Some(ch) = grid.get(&position) else {
        return Vec::new();
    };
    let directions: Vec<Direction> = match (ch, state.direction) {
        ('/', East) => vec![North],
        ('/', West) => vec![South],
        ('/', North) => vec![East],
        ('/', South) => vec![West],
        ('\\', East) => vec![South],
        ('\\', West) => vec![North],
        ('\\', North) => vec![West],
        ('\\', South) => vec![East],
        ('|', East | West) => vec![North, South],
        ('-', North | South) => vec![East, West],
        (_, direction) => vec![direction],
    };
    directions
        .into_iter()
        .map(|direction| BeamState {
            position,
            direction,
        })
        .collect()
}

fn edge_starts(grid: &Grid) -> Vec<BeamState> {
    let width = grid.width() as i64;
    let height = grid.height() as i64;
    let mut starts = Vec::new();
    for x in 0..width {
        starts.push(BeamState {
            position: Point::new(x, -1),
            direction: Direction::South,
        });
        starts.push(BeamState {
            position: Point::new(x, height),
            direction: Direction::North,
        });
    }
    for y in 0..height {
        starts.push(BeamState {
            position: Point::new(-1, y),
            direction: Direction::East,
        });
        starts.push(BeamState {
            position: Point::new(width, y),
            direction: Direction::West,
        });
    }
    starts
}
