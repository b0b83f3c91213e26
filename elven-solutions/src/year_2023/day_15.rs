//! Day 15: Lens Library; the HASH algorithm and lens box bookkeeping.

use crate::utils::solve_failed;
use anyhow::anyhow;
use elven_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};

#[derive(AutoRegisterSolver)]
#[aoc(year = 2023, day = 15, tags = ["2023"])]
pub struct Day15;

impl AocParser for Day15 {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let steps: Vec<&str> = input.trim().split(',').collect();
        if steps.iter().any(|s| s.is_empty()) {
            return Err(ParseError::InvalidFormat("empty step".to_string()));
        }
        Ok(steps)
    }
}

impl Solver for Day15 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared.iter().map(|s| hash(s)).sum::<u64>().to_string()),
            2 => focusing_power(shared).map(|p| p.to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn hash(s: &str) -> u64 {
    s.bytes().fold(0, |acc, b| (acc + b as u64) * 17 % 256)
}

fn focusing_power(steps: &[&str]) -> Result<u64, SolveError> {
    let mut boxes: Vec<Vec<(&str, u64)>> = vec![Vec::new(); 256];
    for step in steps {
        if let Some((label, focal)) = step.split_once('=') {
            let focal: u64 = focal
                .parse()
                .map_err(|_| solve_failed(anyhow!("bad focal length in {step:?}")))?;
            let lenses = &mut boxes[hash(label) as usize];
            if let Some(slot) = lenses.iter_mut().find(|(l, _)| *l == label) {
                slot.1 = focal;
            } else {
                lenses.push((label, focal));
            }
        } else if let Some(label) = step.strip_suffix('-') {
            boxes[hash(label) as usize].retain(|(l, _)| *l != label);
        } else {
            return Err(solve_failed(anyhow!("unrecognized step {step:?}")));
        }
    }
    Ok(boxes
        .iter()
        .enumerate()
        .flat_map(|(b, lenses)| {
            lenses
                .iter()
                .enumerate()
                .map(move |(slot, (_, focal))| (b as u64 + 1) * (slot as u64 + 1) * focal)
        })
        .sum())
}
