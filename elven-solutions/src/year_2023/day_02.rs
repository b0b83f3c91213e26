//! Day 2: Cube Conundrum; per-game per-color maxima.

use elven_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};

pub struct Game {
    id: u64,
    max_red: u64,
    max_green: u64,
    max_blue: u64,
}

#[derive(AutoRegisterSolver)]
#[aoc(year = 2023, day = 2, tags = ["2023"])]
pub struct Day02;

impl AocParser for Day02 {
    type SharedData<'a> = Vec<Game>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(parse_game)
            .collect()
    }
}

impl Solver for Day02 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared
                .iter()
                .filter(|g| g.max_red <= 12 && g.max_green <= 13 && g.max_blue <= 14)
                .map(|g| g.id)
                .sum::<u64>()
                .to_string()),
            2 => Ok(shared
                .iter()
                .map(|g| g.max_red * g.max_green * g.max_blue)
                .sum::<u64>()
                .to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn parse_game(line: &str) -> Result<Game, ParseError> {
    let bad = || ParseError::InvalidFormat(line.to_string());
    let (header, draws) = line.split_once(':').ok_or_else(bad)?;
    let id = header
        .strip_prefix("Game ")
        .ok_or_else(bad)?
        .trim()
        .parse()
        .map_err(|_| bad())?;

    let mut game = Game {
        id,
        max_red: 0,
        max_green: 0,
        max_blue: 0,
    };
    for entry in draws.split([';', ',']) {
        let (count, color) = entry.trim().split_once(' ').ok_or_else(bad)?;
        let count: u64 = count.parse().map_err(|_| bad())?;
        match color {
            "red" => game.max_red = game.max_red.max(count),
            "green" => game.max_green = game.max_green.max(count),
            "blue" => game.max_blue = game.max_blue.max(count),
            _ => return Err(bad()),
        }
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green";

    #[test]
    fn part_1_example() {
        let mut shared = Day02::parse(EXAMPLE).unwrap();
        assert_eq!(Day02::solve_part(&mut shared, 1).unwrap(), "8");
    }

    #[test]
    fn part_2_example() {
        let mut shared = Day02::parse(EXAMPLE).unwrap();
        assert_eq!(Day02::solve_part(&mut shared, 2).unwrap(), "2286");
    }

    #[test]
    fn malformed_color_rejected() {
        assert!(parse_game("Game 1: 3 purple").is_err());
    }
}
