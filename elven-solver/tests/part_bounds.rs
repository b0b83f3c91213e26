//! Property-based tests for solver part bounds validation

use elven_solver::{AocParser, ParseError, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Test solver with configurable PARTS
struct TestSolver<const N: u8>;

impl<const N: u8> AocParser for TestSolver<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for TestSolver<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any part outside 1..=PARTS is rejected with `PartOutOfRange`; anything
    /// inside succeeds.
    #[test]
    fn prop_out_of_range_rejection(max_parts in 1u8..=3, part in 0u8..=255) {
        let result = match max_parts {
            1 => TestSolver::<1>::solve_part_checked_range(&mut (), part),
            2 => TestSolver::<2>::solve_part_checked_range(&mut (), part),
            _ => TestSolver::<3>::solve_part_checked_range(&mut (), part),
        };

        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert!(result.is_ok(), "Expected Ok for part {} with max {}", part, max_parts);
        }
    }

    /// In-range parts delegate straight to `solve_part`.
    #[test]
    fn prop_valid_range_delegation(part in 1u8..=2) {
        let checked = TestSolver::<2>::solve_part_checked_range(&mut (), part);
        let direct = TestSolver::<2>::solve_part(&mut (), part);

        prop_assert!(checked.is_ok());
        prop_assert!(direct.is_ok());
        prop_assert_eq!(checked.unwrap(), direct.unwrap());
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn part_zero_rejected() {
        let result = TestSolver::<2>::solve_part_checked_range(&mut (), 0);
        assert!(matches!(result, Err(SolveError::PartOutOfRange(0))));
    }

    #[test]
    fn part_exceeding_max_rejected() {
        let result = TestSolver::<2>::solve_part_checked_range(&mut (), 3);
        assert!(matches!(result, Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn valid_part_succeeds() {
        let result = TestSolver::<2>::solve_part_checked_range(&mut (), 1);
        assert_eq!(result.unwrap(), "part1");
    }
}
