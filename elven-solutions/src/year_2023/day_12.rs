//! Day 12: Hot Springs; arrangement counting as dynamic programming over
//! a (pattern position, group index) table.

use elven_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};

pub struct Record {
    pattern: String,
    groups: Vec<usize>,
}

#[derive(AutoRegisterSolver)]
#[aoc(year = 2023, day = 12, tags = ["2023"])]
pub struct Day12;

impl AocParser for Day12 {
    type SharedData<'a> = Vec<Record>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                let bad = || ParseError::InvalidFormat(line.to_string());
                let (pattern, groups) = line.split_once(' ').ok_or_else(bad)?;
                if pattern.chars().any(|c| !matches!(c, '.' | '#' | '?')) {
                    return Err(bad());
                }
                Ok(Record {
                    pattern: pattern.to_string(),
                    groups: groups
                        .split(',')
                        .map(|n| n.parse().map_err(|_| bad()))
                        .collect::<Result<_, _>>()?,
                })
            })
            .collect()
    }
}

impl Solver for Day12 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared
                .iter()
                .map(|r| arrangements(r.pattern.as_bytes(), &r.groups))
                .sum::<u64>()
                .to_string()),
            2 => Ok(shared
                .iter()
                .map(|r| {
                    let unfolded = unfold(r);
                    arrangements(unfolded.pattern.as_bytes(), &unfolded.groups)
                })
                .sum::<u64>()
                .to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

fn unfold(record: &Record) -> Record {
    Record {
        pattern: vec![record.pattern.as_str(); 5].join("?"),
        groups: record.groups.repeat(5),
    }
}

/// Count arrangements with a backward DP table: `ways[i][j]` is the number
/// of ways to place `groups[j..]` in `pattern[i..]`.
fn arrangements(pattern: &[u8], groups: &[usize]) -> u64 {
    let n = pattern.len();
    let m = groups.len();
    let mut ways = vec![vec![0u64; m + 1]; n + 1];
    ways[n][m] = 1;

    for i in (0..n).rev() {
        for j in 0..=m {
            let mut total = 0;
            // Treat the current cell as operational.
            if pattern[i] != b'#' {
                total += ways[i + 1][j];
            }
            // Place groups[j] starting here: the span must be free of '.'
            // and the cell after it must not be damaged.
            if j < m {
                let g = groups[j];
                if i + g <= n
                    && pattern[i..i + g].iter().all(|&c| c != b'.')
                    && (i + g == n || pattern[i + g] != b'#')
                {
                    total += if i + g == n {
                        ways[n][j + 1]
                    } else {
                        ways[i + g + 1][j + 1]
                    };
                }
            }
            ways[i][j] = total;
        }
    }
    ways[0][0]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1";

    #[test]
    fn single_rows() {
        assert_eq!(arrangements(b"???.###", &[1, 1, 3]), 1);
        assert_eq!(arrangements(b".??..??...?##.", &[1, 1, 3]), 4);
        assert_eq!(arrangements(b"?###????????", &[3, 2, 1]), 10);
    }

    #[test]
    fn part_1_example() {
        let mut shared = Day12::parse(EXAMPLE).unwrap();
        assert_eq!(Day12::solve_part(&mut shared, 1).unwrap(), "21");
    }

    #[test]
    fn part_2_example() {
        let mut shared = Day12::parse(EXAMPLE).unwrap();
        assert_eq!(Day12::solve_part(&mut shared, 2).unwrap(), "525152");
    }

    #[test]
    fn impossible_pattern_has_zero_arrangements() {
        assert_eq!(arrangements(b"...", &[1]), 0);
        assert_eq!(arrangements(b"#.#", &[3]), 0);
    }
}
