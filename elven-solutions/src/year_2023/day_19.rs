//! Day 19: Aplenty; workflow simulation and accepted-hypercube counting
//! by splitting rating ranges rule by rule.

use std::collections::BTreeMap;

use crate::utils::solve_failed;
use anyhow::anyhow;
use elven_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};

struct Rule<'a> {
    category: usize,
    op: char,
    value: u64,
    target: &'a str,
}

struct Workflow<'a> {
    rules: Vec<Rule<'a>>,
    fallback: &'a str,
}

pub struct System<'a> {
    workflows: BTreeMap<&'a str, Workflow<'a>>,
    ratings: Vec<[u64; 4]>,
}

#[derive(AutoRegisterSolver)]
#[aoc(year = 2023, day = 19, tags = ["2023"])]
pub struct Day19;

impl AocParser for Day19 {
    type SharedData<'a> = System<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let (workflow_block, rating_block) = input
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("ratings block".to_string()))?;

        let workflows = workflow_block
            .lines()
            .filter(|line| !line.is_empty())
            .map(parse_workflow)
            .collect::<Result<_, _>>()?;
        let ratings = rating_block
            .lines()
            .filter(|line| !line.is_empty())
            .map(parse_ratings)
            .collect::<Result<_, _>>()?;
        Ok(System { workflows, ratings })
    }
}

impl Solver for Day19 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => {
                let mut total = 0;
                for rating in &shared.ratings {
                    if accepts(&shared.workflows, rating)? {
                        total += rating.iter().sum::<u64>();
                    }
                }
                Ok(total.to_string())
            }
            2 => accepted_combinations(&shared.workflows).map(|n| n.to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn category_index(name: char) -> Option<usize> {
    match name {
        'x' => Some(0),
        'm' => Some(1),
        'a' => Some(2),
        's' => Some(3),
        _ => None,
    }
}

fn parse_workflow(line: &str) -> Result<(&str, Workflow<'_>), ParseError> {
    let bad = || ParseError::InvalidFormat(line.to_string());
    let (name, rest) = line.split_once('{').ok_or_else(bad)?;
    let inner = rest.strip_suffix('}').ok_or_else(bad)?;

    let mut rules = Vec::new();
    let mut fallback = None;
    for clause in inner.split(',') {
        match clause.split_once(':') {
            Some((condition, target)) => {
                let mut chars = condition.chars();
                let category = chars
                    .next()
                    .and_then(category_index)
                    .ok_or_else(bad)?;
                let op = chars.next().filter(|&c| c == '<' || c == '>').ok_or_else(bad)?;
                let value = chars.as_str().parse().map_err(|_| bad())?;
                rules.push(Rule {
                    category,
                    op,
                    value,
                    target,
                });
            }
            None => fallback = Some(clause),
        }
    }
    Ok((
        name,
        Workflow {
            rules,
            fallback: fallback.ok_or_else(bad)?,
        },
    ))
}

fn parse_ratings(line: &str) -> Result<[u64; 4], ParseError> {
    let bad = || ParseError::InvalidFormat(line.to_string());
    let inner = line
        .strip_prefix('{')
        .and_then(|l| l.strip_suffix('}'))
        .ok_or_else(bad)?;
    let mut ratings = [0u64; 4];
    for field in inner.split(',') {
        let (name, value) = field.split_once('=').ok_or_else(bad)?;
        let category = name
            .chars()
            .next()
            .and_then(category_index)
            .ok_or_else(bad)?;
        ratings[category] = value.parse().map_err(|_| bad())?;
    }
    Ok(ratings)
}

fn accepts(
    workflows: &BTreeMap<&str, Workflow<'_>>,
    rating: &[u64; 4],
) -> Result<bool, SolveError> {
    let mut current = "in";
    // A part revisiting a workflow would loop forever.
    for _ in 0..=workflows.len() {
        match current {
            "A" => return Ok(true),
            "R" => return Ok(false),
            _ => {}
        }
        let workflow = workflows
            .get(current)
            .ok_or_else(|| solve_failed(anyhow!("unknown workflow {current:?}")))?;
        current = workflow
            .rules
            .iter()
            .find(|rule| {
                let v = rating[rule.category];
                if rule.op == '<' { v < rule.value } else { v > rule.value }
            })
            .map(|rule| rule.target)
            .unwrap_or(workflow.fallback);
    }
    Err(solve_failed(anyhow!("workflow cycle detected")))
}

/// Count accepted (x, m, a, s) combinations over 1..=4000 per category by
/// pushing inclusive range boxes through the workflow graph.
fn accepted_combinations(workflows: &BTreeMap<&str, Workflow<'_>>) -> Result<u64, SolveError> {
    let mut stack = vec![("in", [(1u64, 4000u64); 4])];
    let mut total = 0u64;

    while let Some((label, mut ranges)) = stack.pop() {
        match label {
            "R" => continue,
            "A" => {
                total += ranges.iter().map(|(lo, hi)| hi - lo + 1).product::<u64>();
                continue;
            }
            _ => {}
        }
        let workflow = workflows
            .get(label)
            .ok_or_else(|| solve_failed(anyhow!("unknown workflow {label:?}")))?;

        let mut exhausted = false;
        for rule in &workflow.rules {
            let (lo, hi) = ranges[rule.category];
            let (matched, rest) = if rule.op == '<' {
                // value may be 0 on malformed input; the match is then empty.
                ((lo, hi.min(rule.value.saturating_sub(1))), (lo.max(rule.value), hi))
            } else {
                ((lo.max(rule.value + 1), hi), (lo, hi.min(rule.value)))
            };
            if matched.0 <= matched.1 {
                let mut split = ranges;
                split[rule.category] = matched;
                stack.push((rule.target, split));
            }
            if rest.0 > rest.1 {
                exhausted = true;
                break;
            }
            ranges[rule.category] = rest;
        }
        if !exhausted {
            stack.push((workflow.fallback, ranges));
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
px{a<2006:qkq,m>2090:A,rfg}
pv{a>1716:R,A}
lnx{m>1548:A,A}
rfg{s<537:gd,x>2440:R,A}
qs{s>3448:A,lnx}
qkq{x<1416:A,crn}
crn{x>2662:A,R}
in{s<1351:px,qqz}
qqz{s>2770:qs,m<1801:hdj,R}
gd{a>3333:R,R}
hdj{m>838:A,pv}

{x=787,m=2655,a=1222,s=2876}
{x=1679,m=44,a=2067,s=496}
{x=2036,m=264,a=79,s=2244}
{x=2461,m=1339,a=466,s=291}
{x=2127,m=1623,a=2188,s=1013}";

    #[test]
    fn part_1_example() {
        let mut shared = Day19::parse(EXAMPLE).unwrap();
        assert_eq!(Day19::solve_part(&mut shared, 1).unwrap(), "19114");
    }

    #[test]
    fn part_2_example() {
        let mut shared = Day19::parse(EXAMPLE).unwrap();
        assert_eq!(
            Day19::solve_part(&mut shared, 2).unwrap(),
            "167409079868000"
        );
    }

    #[test]
    fn unsatisfiable_rule_matches_nothing() {
        let input = "\
in{x<0:A,R}

{x=1,m=1,a=1,s=1}";
        let mut shared = Day19::parse(input).unwrap();
        assert_eq!(Day19::solve_part(&mut shared, 1).unwrap(), "0");
        assert_eq!(Day19::solve_part(&mut shared, 2).unwrap(), "0");
    }

    #[test]
    fn trivial_accept_all() {
        let input = "\
in{A}

{x=1,m=1,a=1,s=1}";
        let mut shared = Day19::parse(input).unwrap();
        assert_eq!(Day19::solve_part(&mut shared, 1).unwrap(), "4");
        let expected = 4000u64.pow(4).to_string();
        assert_eq!(Day19::solve_part(&mut shared, 2).unwrap(), expected);
    }
}
