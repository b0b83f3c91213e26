//! Day 4: Scratchcards; match counts and cascading card copies.

use std::collections::BTreeSet;

use elven_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};

#[derive(AutoRegisterSolver)]
#[aoc(year = 2023, day = 4, tags = ["2023"])]
pub struct Day04;

impl AocParser for Day04 {
    /// Match count per card, in input order.
    type SharedData<'a> = Vec<usize>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(card_matches)
            .collect()
    }
}

impl Solver for Day04 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared
                .iter()
                .filter(|&&m| m > 0)
                .map(|&m| 1u64 << (m - 1))
                .sum::<u64>()
                .to_string()),
            2 => {
                let mut copies = vec![1u64; shared.len()];
                for (i, &matches) in shared.iter().enumerate() {
                    for j in i + 1..(i + 1 + matches).min(shared.len()) {
                        copies[j] += copies[i];
                    }
                }
                Ok(copies.iter().sum::<u64>().to_string())
            }
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn card_matches(line: &str) -> Result<usize, ParseError> {
    let bad = || ParseError::InvalidFormat(line.to_string());
    let (_, numbers) = line.split_once(':').ok_or_else(bad)?;
    let (winning, have) = numbers.split_once('|').ok_or_else(bad)?;
    let winning: BTreeSet<u64> = winning
        .split_whitespace()
        .map(|n| n.parse().map_err(|_| bad()))
        .collect::<Result<_, _>>()?;
    let mut matches = 0;
    for n in have.split_whitespace() {
        let n: u64 = n.parse().map_err(|_| bad())?;
        if winning.contains(&n) {
            matches += 1;
        }
    }
    Ok(matches)
}
