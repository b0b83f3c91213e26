//! 2-D character grid and point types shared by the grid puzzles.

use std::collections::VecDeque;
use std::fmt;
use thiserror::Error;

use crate::utils::search::flood_fill;

/// Conventional empty cell marker
pub const EMPTY: char = '.';
/// Conventional blocked cell marker
pub const BLOCKED: char = '#';

/// Errors from grid construction and access
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GridError {
    /// Input rows have unequal lengths
    #[error("Malformed grid: row {row} has length {actual}, expected {expected}")]
    Unrectangular {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// Coordinate outside the grid dimensions
    #[error("Coordinate ({0}, {1}) is out of bounds")]
    OutOfBounds(i64, i64),
    /// A searched-for character is absent
    #[error("Character '{0}' not found in grid")]
    NotFound(char),
}

/// Immutable 2-D integer coordinate
///
/// Ordering is lexicographic by x then y so points key ordered sets and
/// maps directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The y coordinate of the cell above
    pub const fn north(&self) -> i64 {
        self.y - 1
    }

    /// The y coordinate of the cell below
    pub const fn south(&self) -> i64 {
        self.y + 1
    }

    /// The x coordinate of the cell to the right
    pub const fn east(&self) -> i64 {
        self.x + 1
    }

    /// The x coordinate of the cell to the left
    pub const fn west(&self) -> i64 {
        self.x - 1
    }

    /// The neighboring point one step in `direction`
    pub const fn step(&self, direction: Direction) -> Point {
        let (dx, dy) = direction.offset();
        Point::new(self.x + dx, self.y + dy)
    }

    /// |dx| + |dy|
    pub const fn manhattan_distance(&self, other: &Point) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four cardinal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// (dx, dy) with y growing downward
    pub const fn offset(&self) -> (i64, i64) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub const fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// Rectangular character buffer addressed by (x, y), y as row index
///
/// Rows are stored as `VecDeque`s so the edge-expansion operations are O(1)
/// amortized on every side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: VecDeque<VecDeque<char>>,
}

impl Grid {
    /// Build a grid from equal-length text rows
    pub fn from_lines<I, S>(lines: I) -> Result<Grid, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells: VecDeque<VecDeque<char>> = VecDeque::new();
        let mut expected = None;
        for (row, line) in lines.into_iter().enumerate() {
            let chars: VecDeque<char> = line.as_ref().chars().collect();
            let expected = *expected.get_or_insert(chars.len());
            if chars.len() != expected {
                return Err(GridError::Unrectangular {
                    row,
                    expected,
                    actual: chars.len(),
                });
            }
            cells.push_back(chars);
        }
        Ok(Grid { cells })
    }

    /// Build a width x height grid of a single fill character
    pub fn filled(width: usize, height: usize, fill: char) -> Grid {
        let cells = (0..height)
            .map(|_| (0..width).map(|_| fill).collect())
            .collect();
        Grid { cells }
    }

    pub fn width(&self) -> usize {
        self.cells.front().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn in_bounds(&self, point: &Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width()
            && (point.y as usize) < self.height()
    }

    /// Bounds-checked read
    pub fn at(&self, point: &Point) -> Result<char, GridError> {
        self.get(point)
            .ok_or(GridError::OutOfBounds(point.x, point.y))
    }

    /// Read, returning None when out of bounds
    pub fn get(&self, point: &Point) -> Option<char> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        self.cells
            .get(point.y as usize)
            .and_then(|row| row.get(point.x as usize))
            .copied()
    }

    /// Bounds-checked write
    pub fn set(&mut self, point: &Point, ch: char) -> Result<(), GridError> {
        if !self.in_bounds(point) {
            return Err(GridError::OutOfBounds(point.x, point.y));
        }
        self.cells[point.y as usize][point.x as usize] = ch;
        Ok(())
    }

    /// First cell equal to `ch` in row-major order
    pub fn find(&self, ch: char) -> Result<Point, GridError> {
        self.iter_cells()
            .find(|(_, cell)| *cell == ch)
            .map(|(point, _)| point)
            .ok_or(GridError::NotFound(ch))
    }

    /// All cells equal to `ch`, in row-major order
    pub fn find_all(&self, ch: char) -> Vec<Point> {
        self.iter_cells()
            .filter(|(_, cell)| *cell == ch)
            .map(|(point, _)| point)
            .collect()
    }

    /// Iterate all cells as (point, char) in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = (Point, char)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, ch)| (Point::new(x as i64, y as i64), *ch))
        })
    }

    /// Grow one row upward, filled with `fill`
    pub fn expand_up(&mut self, fill: char) {
        let width = self.width();
        self.cells.push_front((0..width).map(|_| fill).collect());
    }

    /// Grow one row downward, filled with `fill`
    pub fn expand_down(&mut self, fill: char) {
        let width = self.width();
        self.cells.push_back((0..width).map(|_| fill).collect());
    }

    /// Grow one column leftward, filled with `fill`
    pub fn expand_left(&mut self, fill: char) {
        for row in &mut self.cells {
            row.push_front(fill);
        }
    }

    /// Grow one column rightward, filled with `fill`
    pub fn expand_right(&mut self, fill: char) {
        for row in &mut self.cells {
            row.push_back(fill);
        }
    }

    /// Pad the grid on all four sides and flood-fill the border-connected
    /// empty region with `paint`
    ///
    /// Only cells equal to [`EMPTY`] are painted; everything else acts as a
    /// wall. The grid ends up one cell larger on every side.
    pub fn paint_exterior(&mut self, paint: char) -> Result<(), GridError> {
        self.expand_up(EMPTY);
        self.expand_down(EMPTY);
        self.expand_left(EMPTY);
        self.expand_right(EMPTY);

        let exterior = flood_fill(self, Point::new(0, 0), |ch| ch == EMPTY);
        for point in exterior {
            self.set(&point, paint)?;
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for ch in row {
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
