//! Day 7: Camel Cards; hand ranking with optional jokers.

use std::collections::BTreeMap;

use elven_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};

pub struct Hand {
    cards: Vec<char>,
    bid: u64,
}

#[derive(AutoRegisterSolver)]
#[aoc(year = 2023, day = 7, tags = ["2023"])]
pub struct Day07;

impl AocParser for Day07 {
    type SharedData<'a> = Vec<Hand>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                let bad = || ParseError::InvalidFormat(line.to_string());
                let (cards, bid) = line.split_once(' ').ok_or_else(bad)?;
                if cards.len() != 5 {
                    return Err(bad());
                }
                Ok(Hand {
                    cards: cards.chars().collect(),
                    bid: bid.trim().parse().map_err(|_| bad())?,
                })
            })
            .collect()
    }
}

impl Solver for Day07 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let jokers = match part {
            1 => false,
            2 => true,
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        let mut ranked: Vec<(u8, Vec<u64>, u64)> = shared
            .iter()
            .map(|hand| {
                let strength = hand_type(&hand.cards, jokers);
                let values = hand.cards.iter().map(|&c| card_value(c, jokers)).collect();
                (strength, values, hand.bid)
            })
            .collect();
        ranked.sort();
        Ok(ranked
            .iter()
            .enumerate()
            .map(|(i, (_, _, bid))| (i as u64 + 1) * bid)
            .sum::<u64>()
            .to_string())
    }
}

fn card_value(card: char, jokers: bool) -> u64 {
    match card {
        'A' => 14,
        'K' => 13,
        'Q' => 12,
        'J' if jokers => 1,
        'J' => 11,
        'T' => 10,
        _ => card.to_digit(10).unwrap_or(0) as u64,
    }
}

/// Hand strength: 6 five-of-a-kind down to 0 high card.
fn hand_type(cards: &[char], jokers: bool) -> u8 {
    let mut counts: BTreeMap<char, u64> = BTreeMap::new();
    for &card in cards {
        *counts.entry(card).or_insert(0) += 1;
    }
    let wild = if jokers {
        counts.remove(&'J').unwrap_or(0)
    } else {
        0
    };
    let mut sorted: Vec<u64> = counts.values().copied().collect();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    if sorted.is_empty() {
        // All five cards were jokers.
        sorted.push(0);
    }
    sorted[0] += wild;
    match (sorted[0], sorted.get(1)) {
        (5, _) => 6,
        (4, _) => 5,
        (3, Some(2)) => 4,
        (3, _) => 3,
        (2, Some(2)) => 2,
        (2, _) => 1,
        _ => 0,
    }
}
