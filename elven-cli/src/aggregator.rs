//! Reorders solver results into year/day/part order.
//!
//! Parallel execution finishes out of order; the aggregator holds early
//! arrivals until everything before them has been emitted.

use crate::executor::SolverResult;
use std::collections::{BTreeMap, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl ResultKey {
    pub fn of(result: &SolverResult) -> Self {
        Self {
            year: result.year,
            day: result.day,
            part: result.part,
        }
    }
}

pub struct ResultAggregator {
    expected: VecDeque<ResultKey>,
    pending: BTreeMap<ResultKey, SolverResult>,
}

impl ResultAggregator {
    /// Build from the full set of expected keys, in any order
    pub fn new(mut expected: Vec<ResultKey>) -> Self {
        expected.sort_unstable();
        Self {
            expected: expected.into(),
            pending: BTreeMap::new(),
        }
    }

    /// Add a result; returns every result now ready to emit, in order
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.insert(ResultKey::of(&result), result);

        let mut ready = Vec::new();
        while let Some(next) = self.expected.front() {
            match self.pending.remove(next) {
                Some(result) => {
                    self.expected.pop_front();
                    ready.push(result);
                }
                None => break,
            }
        }
        ready
    }

    /// Remaining buffered results, in order; expected keys that never
    /// arrived are skipped
    pub fn drain(&mut self) -> Vec<SolverResult> {
        self.expected.clear();
        std::mem::take(&mut self.pending).into_values().collect()
    }

    /// True once every expected result has been emitted
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty() && self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn make_result(year: u16, day: u8, part: u8) -> SolverResult {
        SolverResult {
            year,
            day,
            part,
            answer: Ok(format!("{year}-{day}-{part}")),
            parse_duration: Some(TimeDelta::milliseconds(5)),
            solve_duration: TimeDelta::milliseconds(10),
        }
    }

    fn keys(results: &[SolverResult]) -> Vec<(u16, u8, u8)> {
        results.iter().map(|r| (r.year, r.day, r.part)).collect()
    }

    #[test]
    fn in_order_results_pass_through() {
        let expected = vec![
            ResultKey { year: 2023, day: 1, part: 1 },
            ResultKey { year: 2023, day: 1, part: 2 },
        ];
        let mut aggregator = ResultAggregator::new(expected);

        assert_eq!(keys(&aggregator.add(make_result(2023, 1, 1))), [(2023, 1, 1)]);
        assert_eq!(keys(&aggregator.add(make_result(2023, 1, 2))), [(2023, 1, 2)]);
        assert!(aggregator.is_complete());
    }

    #[test]
    fn out_of_order_results_are_buffered() {
        let expected = vec![
            ResultKey { year: 2023, day: 1, part: 1 },
            ResultKey { year: 2023, day: 2, part: 1 },
            ResultKey { year: 2024, day: 1, part: 1 },
        ];
        let mut aggregator = ResultAggregator::new(expected);

        assert!(aggregator.add(make_result(2024, 1, 1)).is_empty());
        assert!(aggregator.add(make_result(2023, 2, 1)).is_empty());
        assert!(!aggregator.is_complete());

        let ready = aggregator.add(make_result(2023, 1, 1));
        assert_eq!(keys(&ready), [(2023, 1, 1), (2023, 2, 1), (2024, 1, 1)]);
        assert!(aggregator.is_complete());
    }

    #[test]
    fn drain_flushes_buffered_results() {
        let expected = vec![
            ResultKey { year: 2023, day: 1, part: 1 },
            ResultKey { year: 2023, day: 1, part: 2 },
        ];
        let mut aggregator = ResultAggregator::new(expected);

        assert!(aggregator.add(make_result(2023, 1, 2)).is_empty());

        // Part 1 never arrives; drain still emits what we have.
        assert_eq!(keys(&aggregator.drain()), [(2023, 1, 2)]);
        assert!(aggregator.is_complete());
    }
}
