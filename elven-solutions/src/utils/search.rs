//! FIFO-worklist breadth-first traversal with full-state visited tracking.
//!
//! States carry whatever payload the puzzle needs (position plus direction,
//! run length, ...) and each state is expanded at most once, which bounds
//! traversal even on cyclic graphs like pipe loops and bouncing beams.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use thiserror::Error;

use crate::utils::grid::{Direction, Grid, Point};

/// Errors from search routines
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The worklist emptied without reaching a goal state
    #[error("No path found to a goal state")]
    NoPathFound,
}

/// BFS from `starts`, returning every visited state
pub fn bfs_visit<S, I, F>(starts: impl IntoIterator<Item = S>, mut successors: F) -> BTreeSet<S>
where
    S: Ord + Clone,
    I: IntoIterator<Item = S>,
    F: FnMut(&S) -> I,
{
    let mut visited = BTreeSet::new();
    let mut worklist = VecDeque::new();
    for start in starts {
        if visited.insert(start.clone()) {
            worklist.push_back(start);
        }
    }
    while let Some(state) = worklist.pop_front() {
        for next in successors(&state) {
            if visited.insert(next.clone()) {
                worklist.push_back(next);
            }
        }
    }
    visited
}

/// BFS from `starts`, returning the minimal step count to every reachable state
pub fn bfs_distances<S, I, F>(
    starts: impl IntoIterator<Item = S>,
    mut successors: F,
) -> BTreeMap<S, u64>
where
    S: Ord + Clone,
    I: IntoIterator<Item = S>,
    F: FnMut(&S) -> I,
{
    let mut distances = BTreeMap::new();
    let mut worklist = VecDeque::new();
    for start in starts {
        if !distances.contains_key(&start) {
            distances.insert(start.clone(), 0);
            worklist.push_back(start);
        }
    }
    while let Some(state) = worklist.pop_front() {
        let distance = distances[&state];
        for next in successors(&state) {
            if !distances.contains_key(&next) {
                distances.insert(next.clone(), distance + 1);
                worklist.push_back(next);
            }
        }
    }
    distances
}

/// BFS from `starts` until `is_goal` matches, returning the minimal distance
///
/// Distance is monotonic along the frontier, so the first goal popped
/// carries a minimal step count. Fails with [`SearchError::NoPathFound`]
/// when the worklist empties first.
pub fn bfs_distance<S, I, F, G>(
    starts: impl IntoIterator<Item = S>,
    mut successors: F,
    mut is_goal: G,
) -> Result<u64, SearchError>
where
    S: Ord + Clone,
    I: IntoIterator<Item = S>,
    F: FnMut(&S) -> I,
    G: FnMut(&S) -> bool,
{
    let mut visited = BTreeSet::new();
    let mut worklist = VecDeque::new();
    for start in starts {
        if visited.insert(start.clone()) {
            worklist.push_back((start, 0));
        }
    }
    while let Some((state, distance)) = worklist.pop_front() {
        if is_goal(&state) {
            return Ok(distance);
        }
        for next in successors(&state) {
            if visited.insert(next.clone()) {
                worklist.push_back((next, distance + 1));
            }
        }
    }
    Err(SearchError::NoPathFound)
}

/// 4-connected region of cells reachable from `seed` through `passable` cells
///
/// Returns the empty set when the seed itself is out of bounds or not
/// passable.
pub fn flood_fill<F>(grid: &Grid, seed: Point, passable: F) -> BTreeSet<Point>
where
    F: Fn(char) -> bool,
{
    match grid.get(&seed) {
        Some(ch) if passable(ch) => {}
        _ => return BTreeSet::new(),
    }
    bfs_visit([seed], |point| {
        Direction::ALL
            .iter()
            .map(|dir| point.step(*dir))
            .filter(|next| matches!(grid.get(next), Some(ch) if passable(ch)))
            .collect::<Vec<_>>()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corridor_distance() {
        // Straight 1-wide corridor of 5 cells, end to end.
        let grid = Grid::from_lines(["....."]).unwrap();
        let goal = Point::new(4, 0);
        let distance = bfs_distance(
            [Point::new(0, 0)],
            |point| {
                Direction::ALL
                    .iter()
                    .map(|dir| point.step(*dir))
                    .filter(|next| grid.get(next) == Some('.'))
                    .collect::<Vec<_>>()
            },
            |point| *point == goal,
        )
        .unwrap();
        assert_eq!(distance, 4);
    }

    #[test]
    fn unreachable_goal_fails() {
        let grid = Grid::from_lines(["..#.."]).unwrap();
        let goal = Point::new(4, 0);
        let result = bfs_distance(
            [Point::new(0, 0)],
            |point| {
                Direction::ALL
                    .iter()
                    .map(|dir| point.step(*dir))
                    .filter(|next| grid.get(next) == Some('.'))
                    .collect::<Vec<_>>()
            },
            |point| *point == goal,
        );
        assert_eq!(result, Err(SearchError::NoPathFound));
    }

    #[test]
    fn each_reachable_state_visited_once() {
        let grid = Grid::from_lines(["...", "...", "..."]).unwrap();
        let visited = bfs_visit([Point::new(0, 0)], |point| {
            Direction::ALL
                .iter()
                .map(|dir| point.step(*dir))
                .filter(|next| grid.in_bounds(next))
                .collect::<Vec<_>>()
        });
        assert_eq!(visited.len(), 9);
    }

    #[test]
    fn distances_are_minimal() {
        let grid = Grid::from_lines(["...", "...", "..."]).unwrap();
        let distances = bfs_distances([Point::new(0, 0)], |point| {
            Direction::ALL
                .iter()
                .map(|dir| point.step(*dir))
                .filter(|next| grid.in_bounds(next))
                .collect::<Vec<_>>()
        });
        assert_eq!(distances[&Point::new(0, 0)], 0);
        assert_eq!(distances[&Point::new(2, 2)], 4);
        assert_eq!(distances[&Point::new(1, 2)], 3);
    }

    #[test]
    fn flood_fill_stops_at_walls() {
        let grid = Grid::from_lines(["..#..", "..#..", "..#.."]).unwrap();
        let region = flood_fill(&grid, Point::new(0, 0), |ch| ch == '.');
        assert_eq!(region.len(), 6);
        assert!(!region.contains(&Point::new(3, 0)));
    }

    #[test]
    fn flood_fill_from_blocked_seed_is_empty() {
        let grid = Grid::from_lines(["#.."]).unwrap();
        assert!(flood_fill(&grid, Point::new(0, 0), |ch| ch == '.').is_empty());
    }
}
