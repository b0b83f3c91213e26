//! Day 5: If You Give A Seed A Fertilizer; staged range remapping.
//!
//! Part 2 splits seed intervals against each stage's mappings instead of
//! walking individual seeds.

use crate::utils::solve_failed;
use anyhow::anyhow;
use elven_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};

/// Half-open source interval [src, end) shifted by delta.
struct Mapping {
    src: i64,
    end: i64,
    delta: i64,
}

pub struct Almanac {
    seeds: Vec<i64>,
    /// Each stage's mappings, sorted by source start; sources within a
    /// stage do not overlap.
    stages: Vec<Vec<Mapping>>,
}

#[derive(AutoRegisterSolver)]
#[aoc(year = 2023, day = 5, tags = ["2023"])]
pub struct Day05;

impl AocParser for Day05 {
    type SharedData<'a> = Almanac;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let bad = |s: &str| ParseError::InvalidFormat(s.to_string());
        let mut blocks = input.split("\n\n");

        let seeds_line = blocks.next().ok_or_else(|| bad("empty input"))?;
        let seeds = seeds_line
            .strip_prefix("seeds:")
            .ok_or_else(|| bad(seeds_line))?
            .split_whitespace()
            .map(|n| n.parse().map_err(|_| bad(seeds_line)))
            .collect::<Result<Vec<i64>, _>>()?;

        let mut stages = Vec::new();
        for block in blocks {
            let mut mappings = Vec::new();
            for line in block.lines().skip(1).filter(|l| !l.is_empty()) {
                let fields: Vec<i64> = line
                    .split_whitespace()
                    .map(|n| n.parse().map_err(|_| bad(line)))
                    .collect::<Result<_, _>>()?;
                let [dest, src, len] = fields[..] else {
                    return Err(bad(line));
                };
                mappings.push(Mapping {
                    src,
                    end: src + len,
                    delta: dest - src,
                });
            }
            mappings.sort_by_key(|m| m.src);
            stages.push(mappings);
        }
        Ok(Almanac { seeds, stages })
    }
}

impl Solver for Day05 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        let ranges: Vec<(i64, i64)> = match part {
            // Each seed as a degenerate one-element range.
            1 => shared.seeds.iter().map(|&s| (s, s + 1)).collect(),
            2 => shared
                .seeds
                .chunks_exact(2)
                .map(|pair| (pair[0], pair[0] + pair[1]))
                .collect(),
            _ => return Err(SolveError::PartNotImplemented(part)),
        };

        let located = shared.stages.iter().fold(ranges, |acc, stage| {
            acc.into_iter()
                .flat_map(|range| remap_range(range, stage))
                .collect()
        });
        located
            .iter()
            .map(|&(start, _)| start)
            .min()
            .map(|min| min.to_string())
            .ok_or_else(|| solve_failed(anyhow!("no seed ranges")))
    }
}

/// Split one half-open range against a stage's sorted mappings.
fn remap_range((start, end): (i64, i64), mappings: &[Mapping]) -> Vec<(i64, i64)> {
    let mut out = Vec::new();
    let mut current = start;
    for mapping in mappings {
        if current >= end {
            break;
        }
        if mapping.end <= current {
            continue;
        }
        if mapping.src >= end {
            break;
        }
        if current < mapping.src {
            out.push((current, mapping.src.min(end)));
            current = mapping.src;
        }
        let overlap_end = end.min(mapping.end);
        out.push((current + mapping.delta, overlap_end + mapping.delta));
        current = overlap_end;
    }
    if current < end {
        out.push((current, end));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4";

    #[test]
    fn part_1_example() {
        let mut shared = Day05::parse(EXAMPLE).unwrap();
        assert_eq!(Day05::solve_part(&mut shared, 1).unwrap(), "35");
    }

    #[test]
    fn part_2_example() {
        let mut shared = Day05::parse(EXAMPLE).unwrap();
        assert_eq!(Day05::solve_part(&mut shared, 2).unwrap(), "46");
    }

    #[test]
    fn range_split_straddles_mapping_boundaries() {
        let mappings = vec![Mapping {
            src: 10,
            end: 20,
            delta: 100,
        }];
        let mut out = remap_range((5, 25), &mappings);
        out.sort();
        assert_eq!(out, vec![(5, 10), (20, 25), (110, 120)]);
    }

    #[test]
    fn unmapped_range_passes_through() {
        let mappings = vec![Mapping {
            src: 50,
            end: 60,
            delta: 7,
        }];
        assert_eq!(remap_range((0, 10), &mappings), vec![(0, 10)]);
    }
}
