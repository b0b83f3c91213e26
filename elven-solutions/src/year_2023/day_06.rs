//! Day 6: Wait For It; counting winning hold times via the quadratic
//! bounds of hold * (time - hold) > distance.

use elven_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};

pub struct Races {
    times: Vec<i64>,
    distances: Vec<i64>,
}

#[derive(AutoRegisterSolver)]
#[aoc(year = 2023, day = 6, tags = ["2023"])]
pub struct Day06;

impl AocParser for Day06 {
    type SharedData<'a> = Races;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut lines = input.lines();
        let times = parse_row(lines.next(), "Time:")?;
        let distances = parse_row(lines.next(), "Distance:")?;
        if times.len() != distances.len() {
            return Err(ParseError::InvalidFormat(
                "time and distance rows differ in length".to_string(),
            ));
        }
        Ok(Races { times, distances })
    }
}

impl Solver for Day06 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared
                .times
                .iter()
                .zip(&shared.distances)
                .map(|(&t, &d)| winning_holds(t, d))
                .product::<u64>()
                .to_string()),
            2 => {
                let time = concat_digits(&shared.times);
                let distance = concat_digits(&shared.distances);
                Ok(winning_holds(time, distance).to_string())
            }
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn parse_row(line: Option<&str>, prefix: &str) -> Result<Vec<i64>, ParseError> {
    let line = line.ok_or_else(|| ParseError::MissingData(prefix.to_string()))?;
    line.strip_prefix(prefix)
        .ok_or_else(|| ParseError::InvalidFormat(line.to_string()))?
        .split_whitespace()
        .map(|n| {
            // Times and distances are positive; digit concatenation in
            // part 2 relies on it.
            match n.parse() {
                Ok(value) if value > 0 => Ok(value),
                _ => Err(ParseError::InvalidFormat(line.to_string())),
            }
        })
        .collect()
}

fn concat_digits(values: &[i64]) -> i64 {
    values
        .iter()
        .fold(0, |acc, v| acc * 10i64.pow(v.ilog10() + 1) + v)
}

/// Number of integer holds h with h * (t - h) > d.
///
/// Seeded from the quadratic roots of h^2 - t*h + d, then nudged to exact
/// integer bounds so float rounding cannot cause an off-by-one.
fn winning_holds(t: i64, d: i64) -> u64 {
    let disc = (t * t - 4 * d) as f64;
    if disc <= 0.0 {
        return 0;
    }
    let sqrt = disc.sqrt();
    let mut lo = (((t as f64 - sqrt) / 2.0).floor() as i64 - 2).max(0);
    while lo <= t && lo * (t - lo) <= d {
        lo += 1;
    }
    let mut hi = (((t as f64 + sqrt) / 2.0).ceil() as i64 + 2).min(t);
    while hi >= 0 && hi * (t - hi) <= d {
        hi -= 1;
    }
    if hi < lo { 0 } else { (hi - lo + 1) as u64 }
}
