//! Day 20: Pulse Propagation; module network simulation; part 2 reads the
//! flip-flop chains as binary counters and combines their periods.

use std::collections::{BTreeMap, VecDeque};

use crate::utils::{math::lcm, solve_failed};
use anyhow::anyhow;
use elven_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModuleKind {
    Broadcaster,
    FlipFlop,
    Conjunction,
}

pub struct Module<'a> {
    kind: ModuleKind,
    outputs: Vec<&'a str>,
}

#[derive(AutoRegisterSolver)]
#[aoc(year = 2023, day = 20, tags = ["2023"])]
pub struct Day20;

impl AocParser for Day20 {
    type SharedData<'a> = BTreeMap<&'a str, Module<'a>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                let bad = || ParseError::InvalidFormat(line.to_string());
                let (header, outputs) = line.split_once(" -> ").ok_or_else(bad)?;
                let (kind, name) = if header == "broadcaster" {
                    (ModuleKind::Broadcaster, header)
                } else if let Some(name) = header.strip_prefix('%') {
                    (ModuleKind::FlipFlop, name)
                } else if let Some(name) = header.strip_prefix('&') {
                    (ModuleKind::Conjunction, name)
                } else {
                    return Err(bad());
                };
                Ok((
                    name,
                    Module {
                        kind,
                        outputs: outputs.split(", ").collect(),
                    },
                ))
            })
            .collect()
    }
}

impl Solver for Day20 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => {
                let (low, high) = pulse_counts(shared, 1000);
                Ok((low * high).to_string())
            }
            2 => presses_until_rx(shared).map(|n| n.to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn pulse_counts(modules: &BTreeMap<&str, Module<'_>>, presses: u64) -> (u64, u64) {
    let mut flip_state: BTreeMap<&str, bool> = BTreeMap::new();
    let mut memory: BTreeMap<&str, BTreeMap<&str, bool>> = BTreeMap::new();
    for (&name, module) in modules {
        for &output in &module.outputs {
            if modules.get(output).is_some_and(|m| m.kind == ModuleKind::Conjunction) {
                memory.entry(output).or_default().insert(name, false);
            }
        }
    }

    let mut low = 0;
    let mut high = 0;
    for _ in 0..presses {
        let mut queue: VecDeque<(&str, &str, bool)> =
            VecDeque::from([("button", "broadcaster", false)]);
        while let Some((from, to, pulse)) = queue.pop_front() {
            if pulse {
                high += 1;
            } else {
                low += 1;
            }
            let Some(module) = modules.get(to) else {
                // Sink modules like "output" or "rx" absorb pulses.
                continue;
            };
            let send = match module.kind {
                ModuleKind::Broadcaster => Some(pulse),
                ModuleKind::FlipFlop => {
                    if pulse {
                        None
                    } else {
                        let state = flip_state.entry(to).or_insert(false);
                        *state = !*state;
                        Some(*state)
                    }
                }
                ModuleKind::Conjunction => {
                    let inputs = memory.entry(to).or_default();
                    inputs.insert(from, pulse);
                    Some(!inputs.values().all(|&p| p))
                }
            };
            if let Some(pulse) = send {
                for &output in &module.outputs {
                    queue.push_back((to, output, pulse));
                }
            }
        }
    }
    (low, high)
}

/// The machine drives `rx` from per-branch binary counters: each
/// broadcaster output starts a flip-flop chain whose bits feeding the
/// branch conjunction spell the counter's reset period. The first
/// simultaneous fire is the lcm of those periods.
fn presses_until_rx(modules: &BTreeMap<&str, Module<'_>>) -> Result<u64, SolveError> {
    let broadcaster = modules
        .get("broadcaster")
        .ok_or_else(|| solve_failed(anyhow!("no broadcaster module")))?;

    let mut combined = 1;
    for start in &broadcaster.outputs {
        let mut period = 0u64;
        let mut bit = 0u32;
        let mut current = *start;
        loop {
            let module = modules
                .get(current)
                .ok_or_else(|| solve_failed(anyhow!("unknown module {current:?}")))?;
            if module.kind != ModuleKind::FlipFlop {
                return Err(solve_failed(anyhow!(
                    "broadcaster output {start:?} is not a flip-flop chain"
                )));
            }
            let feeds_conjunction = module.outputs.iter().any(|o| {
                modules.get(o).is_some_and(|m| m.kind == ModuleKind::Conjunction)
            });
            if feeds_conjunction {
                period |= 1 << bit;
            }
            bit += 1;
            match module
                .outputs
                .iter()
                .find(|o| modules.get(*o).is_some_and(|m| m.kind == ModuleKind::FlipFlop))
            {
                Some(&next) => current = next,
                None => break,
            }
        }
        combined = lcm(combined, period);
    }
    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_1_simple_example() {
        let input = "\
broadcaster -> a, b, c
%a -> b
%b -> c
%c -> inv
&inv -> a";
        let mut shared = Day20::parse(input).unwrap();
        assert_eq!(Day20::solve_part(&mut shared, 1).unwrap(), "32000000");
    }

    #[test]
    fn part_1_interesting_example() {
        let input = "\
broadcaster -> a
%a -> inv, con
&inv -> b
%b -> con
&con -> output";
        let mut shared = Day20::parse(input).unwrap();
        assert_eq!(Day20::solve_part(&mut shared, 1).unwrap(), "11687500");
    }

    #[test]
    fn single_press_pulse_split() {
        let input = "\
broadcaster -> a, b, c
%a -> b
%b -> c
%c -> inv
&inv -> a";
        let shared = Day20::parse(input).unwrap();
        let (low, high) = pulse_counts(&shared, 1);
        assert_eq!((low, high), (8, 4));
    }
}
