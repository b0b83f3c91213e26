//! Day 17: Clumsy Crucible; Dijkstra over (position, direction, run
//! length) states with per-part minimum and maximum run constraints.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

use crate::utils::grid::{Direction, Grid, Point};
use crate::utils::solve_failed;
use anyhow::anyhow;
use elven_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct CrucibleState {
    position: Point,
    direction: Direction,
    run: u8,
}

#[derive(AutoRegisterSolver)]
#[aoc(year = 2023, day = 17, tags = ["2023", "grid"])]
pub struct Day17;

impl AocParser for Day17 {
    type SharedData<'a> = Grid;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let grid = Grid::from_lines(input.lines().filter(|line| !line.is_empty()))
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        if grid.iter_cells().any(|(_, ch)| !ch.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(
                "heat loss map must be all digits".to_string(),
            ));
        }
        Ok(grid)
    }
}

impl Solver for Day17 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => minimal_heat_loss(shared, 1, 3).map(|h| h.to_string()),
            2 => minimal_heat_loss(shared, 4, 10).map(|h| h.to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn minimal_heat_loss(grid: &Grid, min_run: u8, max_run: u8) -> Result<u64, SolveError> {
    let goal = Point::new(grid.width() as i64 - 1, grid.height() as i64 - 1);
    // run 0 marks the start, where any direction counts as a turn.
    let start = CrucibleState {
        position: Point::new(0, 0),
        direction: Direction::East,
        run: 0,
    };

    let mut best: BTreeMap<CrucibleState, u64> = BTreeMap::new();
    let mut heap = BinaryHeap::new();
    best.insert(start, 0);
    heap.push(Reverse((0u64, start)));

    while let Some(Reverse((cost, state))) = heap.pop() {
        if best.get(&state).is_some_and(|&b| b < cost) {
            continue;
        }
        if state.position == goal && state.run >= min_run {
            return Ok(cost);
        }
        for direction in Direction::ALL {
            if direction == state.direction.opposite() {
                continue;
            }
            let straight = direction == state.direction;
            if straight {
                if state.run >= max_run {
                    continue;
                }
            } else if state.run != 0 && state.run < min_run {
                continue;
            }
            let position = state.position.step(direction);
            let Some(loss) = grid.get(&position).and_then(|ch| ch.to_digit(10)) else {
                continue;
            };
            let next = CrucibleState {
                position,
                direction,
                run: if straight { state.run + 1 } else { 1 },
            };
            let total = cost + loss as u64;
            if best.get(&next).is_none_or(|&b| total < b) {
                best.insert(next, total);
                heap.push(Reverse((total, next)));
            }
        }
    }
    Err(solve_failed(anyhow!("no route reaches the goal")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533";

    #[test]
    fn part_1_example() {
        let mut shared = Day17::parse(EXAMPLE).unwrap();
        assert_eq!(Day17::solve_part(&mut shared, 1).unwrap(), "102");
    }

    #[test]
    fn part_2_example() {
        let mut shared = Day17::parse(EXAMPLE).unwrap();
        assert_eq!(Day17::solve_part(&mut shared, 2).unwrap(), "94");
    }

    #[test]
    fn part_2_unfortunate_straightaways() {
        let input = "\
111111111111
999999999991
999999999991
999999999991
999999999991";
        let mut shared = Day17::parse(input).unwrap();
        assert_eq!(Day17::solve_part(&mut shared, 2).unwrap(), "71");
    }
}
