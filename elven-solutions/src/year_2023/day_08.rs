//! Day 8: Haunted Wasteland; LR network traversal; ghost paths combine
//! per-start cycle lengths with lcm.

use std::collections::BTreeMap;

use crate::utils::{math::lcm, solve_failed};
use anyhow::anyhow;
use elven_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};

pub struct Network<'a> {
    instructions: &'a str,
    nodes: BTreeMap<&'a str, (&'a str, &'a str)>,
}

#[derive(AutoRegisterSolver)]
#[aoc(year = 2023, day = 8, tags = ["2023"])]
pub struct Day08;

impl AocParser for Day08 {
    type SharedData<'a> = Network<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut lines = input.lines().filter(|line| !line.is_empty());
        let instructions = lines
            .next()
            .ok_or_else(|| ParseError::MissingData("instructions".to_string()))?;
        if instructions.chars().any(|c| c != 'L' && c != 'R') {
            return Err(ParseError::InvalidFormat(instructions.to_string()));
        }

        let mut nodes = BTreeMap::new();
        for line in lines {
            let bad = || ParseError::InvalidFormat(line.to_string());
            let (name, targets) = line.split_once(" = ").ok_or_else(bad)?;
            let (left, right) = targets
                .strip_prefix('(')
                .and_then(|t| t.strip_suffix(')'))
                .and_then(|t| t.split_once(", "))
                .ok_or_else(bad)?;
            nodes.insert(name, (left, right));
        }
        Ok(Network {
            instructions,
            nodes,
        })
    }
}

impl Solver for Day08 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => steps_until(shared, "AAA", |node| node == "ZZZ").map(|s| s.to_string()),
            2 => {
                let starts: Vec<&str> = shared
                    .nodes
                    .keys()
                    .copied()
                    .filter(|name| name.ends_with('A'))
                    .collect();
                let mut combined = 1;
                for start in starts {
                    let steps = steps_until(shared, start, |node| node.ends_with('Z'))?;
                    combined = lcm(combined, steps);
                }
                Ok(combined.to_string())
            }
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn steps_until(
    network: &Network<'_>,
    start: &str,
    done: impl Fn(&str) -> bool,
) -> Result<u64, SolveError> {
    // Any walk repeats within nodes * instructions states.
    let bound = (network.nodes.len() * network.instructions.len() + 1) as u64;
    let mut current = start;
    let mut steps = 0;
    for step in network.instructions.chars().cycle() {
        if done(current) {
            return Ok(steps);
        }
        if steps > bound {
            return Err(solve_failed(anyhow!(
                "walk from {start} never reaches a terminal node"
            )));
        }
        let &(left, right) = network
            .nodes
            .get(current)
            .ok_or_else(|| solve_failed(anyhow!("unknown node {current}")))?;
        current = if step == 'L' { left } else { right };
        steps += 1;
    }
    Err(solve_failed(anyhow!("empty instruction sequence")))
}
