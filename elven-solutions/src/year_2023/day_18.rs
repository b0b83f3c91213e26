//! Day 18: Lavaduct Lagoon; polygon area by shoelace formula plus Pick's
//! theorem for the boundary.

use crate::utils::grid::Direction;
use crate::utils::solve_failed;
use anyhow::anyhow;
use elven_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};

pub struct Dig<'a> {
    direction: Direction,
    meters: i64,
    color: &'a str,
}

#[derive(AutoRegisterSolver)]
#[aoc(year = 2023, day = 18, tags = ["2023"])]
pub struct Day18;

impl AocParser for Day18 {
    type SharedData<'a> = Vec<Dig<'a>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                let bad = || ParseError::InvalidFormat(line.to_string());
                let mut fields = line.split_whitespace();
                let direction = match fields.next().ok_or_else(bad)? {
                    "U" => Direction::North,
                    "D" => Direction::South,
                    "L" => Direction::West,
                    "R" => Direction::East,
                    _ => return Err(bad()),
                };
                let meters = fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
                let color = fields
                    .next()
                    .and_then(|f| f.strip_prefix("(#"))
                    .and_then(|f| f.strip_suffix(')'))
                    .ok_or_else(bad)?;
                // Six ASCII bytes, so decode_color can slice at 5 safely.
                if color.len() != 6 || !color.is_ascii() {
                    return Err(bad());
                }
                Ok(Dig {
                    direction,
                    meters,
                    color,
                })
            })
            .collect()
    }
}

impl Solver for Day18 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(lagoon_size(shared.iter().map(|d| (d.direction, d.meters))).to_string()),
            2 => {
                let steps = shared
                    .iter()
                    .map(|d| decode_color(d.color))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(lagoon_size(steps.into_iter()).to_string())
            }
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

/// The true instruction hides in the hex color: five digits of distance
/// and one direction digit.
fn decode_color(color: &str) -> Result<(Direction, i64), SolveError> {
    let meters = i64::from_str_radix(&color[..5], 16)
        .map_err(|_| solve_failed(anyhow!("bad hex distance in {color:?}")))?;
    let direction = match &color[5..] {
        "0" => Direction::East,
        "1" => Direction::South,
        "2" => Direction::West,
        "3" => Direction::North,
        other => return Err(solve_failed(anyhow!("bad direction digit {other:?}"))),
    };
    Ok((direction, meters))
}

/// Total dug-out cells: interior by shoelace, boundary by Pick's theorem.
fn lagoon_size(steps: impl Iterator<Item = (Direction, i64)>) -> u64 {
    let mut position = (0i64, 0i64);
    let mut twice_area = 0i64;
    let mut perimeter = 0i64;
    for (direction, meters) in steps {
        let (dx, dy) = direction.offset();
        let next = (position.0 + dx * meters, position.1 + dy * meters);
        twice_area += position.0 * next.1 - next.0 * position.1;
        perimeter += meters;
        position = next;
    }
    (twice_area.abs() / 2 + perimeter / 2 + 1) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
R 6 (#70c710)
D 5 (#0dc571)
L 2 (#5713f0)
D 2 (#d2c081)
R 2 (#59c680)
D 2 (#411b91)
L 5 (#8ceee2)
U 2 (#caa173)
L 1 (#1b58a2)
U 2 (#caa171)
R 2 (#7807d2)
U 3 (#a77fa3)
L 2 (#015232)
U 2 (#7a21e3)";

    #[test]
    fn part_1_example() {
        let mut shared = Day18::parse(EXAMPLE).unwrap();
        assert_eq!(Day18::solve_part(&mut shared, 1).unwrap(), "62");
    }

    #[test]
    fn part_2_example() {
        let mut shared = Day18::parse(EXAMPLE).unwrap();
        assert_eq!(Day18::solve_part(&mut shared, 2).unwrap(), "952408144115");
    }

    #[test]
    fn non_ascii_color_rejected() {
        // Six bytes long, but slicing the hex digits would split the é.
        assert!(Day18::parse("R 6 (#1234é)").is_err());
    }

    #[test]
    fn unit_square() {
        use Direction::*;
        let steps = [(East, 1), (South, 1), (West, 1), (North, 1)];
        assert_eq!(lagoon_size(steps.into_iter().map(|(d, m)| (d, m))), 4);
    }
}
