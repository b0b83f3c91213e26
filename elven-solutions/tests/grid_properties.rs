//! Property-based tests for the grid, point, and traversal utilities.

use elven_solutions::utils::grid::{Direction, Grid, Point};
use elven_solutions::utils::search::{bfs_distance, bfs_visit};
use proptest::prelude::*;

fn grid_lines() -> impl Strategy<Value = Vec<String>> {
    (1usize..8, 1usize..8).prop_flat_map(|(width, height)| {
        proptest::collection::vec(
            proptest::collection::vec(prop_oneof![Just('.'), Just('#'), Just('*')], width)
                .prop_map(|row| row.into_iter().collect::<String>()),
            height,
        )
    })
}

proptest! {
    /// `find` returns a cell that really holds the character, and it is the
    /// first entry of `find_all`.
    #[test]
    fn prop_find_agrees_with_find_all(lines in grid_lines(), ch in prop_oneof![Just('.'), Just('#'), Just('*')]) {
        let grid = Grid::from_lines(&lines).unwrap();
        let all = grid.find_all(ch);
        let scan_count = grid.iter_cells().filter(|(_, c)| *c == ch).count();
        prop_assert_eq!(all.len(), scan_count);
        match grid.find(ch) {
            Ok(point) => {
                prop_assert_eq!(grid.at(&point).unwrap(), ch);
                prop_assert_eq!(all.first(), Some(&point));
            }
            Err(_) => prop_assert!(all.is_empty()),
        }
    }

    /// Manhattan distance is symmetric and zero exactly for equal points.
    #[test]
    fn prop_manhattan_symmetric(ax in -1000i64..1000, ay in -1000i64..1000,
                                bx in -1000i64..1000, by in -1000i64..1000) {
        let a = Point::new(ax, ay);
        let b = Point::new(bx, by);
        prop_assert_eq!(a.manhattan_distance(&b), b.manhattan_distance(&a));
        prop_assert_eq!(a.manhattan_distance(&b) == 0, a == b);
    }

    /// Expanding on any side grows that dimension by one and leaves every
    /// pre-existing cell in place at its shifted coordinates.
    #[test]
    fn prop_expansion_preserves_cells(lines in grid_lines(), side in 0u8..4) {
        let original = Grid::from_lines(&lines).unwrap();
        let mut expanded = original.clone();
        let (dx, dy) = match side {
            0 => { expanded.expand_up('+'); (0, 1) }
            1 => { expanded.expand_down('+'); (0, 0) }
            2 => { expanded.expand_left('+'); (1, 0) }
            _ => { expanded.expand_right('+'); (0, 0) }
        };
        let vertical = side < 2;
        if vertical {
            prop_assert_eq!(expanded.height(), original.height() + 1);
            prop_assert_eq!(expanded.width(), original.width());
        } else {
            prop_assert_eq!(expanded.width(), original.width() + 1);
            prop_assert_eq!(expanded.height(), original.height());
        }
        for (point, ch) in original.iter_cells() {
            let shifted = Point::new(point.x + dx, point.y + dy);
            prop_assert_eq!(expanded.at(&shifted).unwrap(), ch);
        }
    }

    /// BFS over a fully open grid visits every cell exactly once.
    #[test]
    fn prop_bfs_visits_every_open_cell(width in 1usize..8, height in 1usize..8) {
        let grid = Grid::filled(width, height, '.');
        let visited = bfs_visit([Point::new(0, 0)], |point| {
            Direction::ALL
                .iter()
                .map(|dir| point.step(*dir))
                .filter(|next| grid.in_bounds(next))
                .collect::<Vec<_>>()
        });
        prop_assert_eq!(visited.len(), width * height);
    }
}

#[test]
fn three_by_three_scenario() {
    let grid = Grid::from_lines(["...", ".#.", "..."]).unwrap();
    assert_eq!(grid.find('#').unwrap(), Point::new(1, 1));

    let empties = grid.find_all('.');
    assert_eq!(empties.len(), 8);
    let expected: Vec<Point> = grid
        .iter_cells()
        .filter(|(_, ch)| *ch == '.')
        .map(|(p, _)| p)
        .collect();
    assert_eq!(empties, expected);

    assert_eq!(Point::new(0, 0).manhattan_distance(&Point::new(1, 1)), 2);
}

#[test]
fn corridor_bfs_distance() {
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
