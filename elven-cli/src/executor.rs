//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use chrono::TimeDelta;
use elven_solver::{DynSolver, ParseError, SolverError, SolverRegistry};
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;

/// Result from a single solver execution
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

struct SyncExecutorConfig {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                inputs: InputStore::new(config.input_dir.clone(), config.input_file.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Collect work items by filtering registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Work items whose input file is absent
    pub fn missing_inputs(&self) -> Vec<(u16, u8)> {
        let inputs = &self.sync_executor_config.inputs;
        self.collect_work_items()
            .iter()
            .filter(|w| !inputs.contains(w.year, w.day))
            .map(|w| (w.year, w.day))
            .collect()
    }

    /// Filter parts based on config.part_filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.sync_executor_config.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();

        match self.sync_executor_config.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_solver(&work, &tx, &self.sync_executor_config) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Day and Part both parallelize across all work items; Part
            // additionally parallelizes inside run_solver.
            ParallelizeBy::Day | ParallelizeBy::Part => self.execute_parallel(work_items, &tx),
        }
    }

    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map(|work| run_solver(&work, tx, sync_executor_config).err())
                .reduce_with(|err1, err2| {
                    err1.map(|err1| ArcExecutorError::combine_opt(err2, err1))
                })
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }

    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let sync_executor_config = &self.sync_executor_config;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_solver(&work, tx, sync_executor_config) {
                            err = Some(ArcExecutorError::combine_opt(err, e))
                        }
                    }
                    err
                })
                .reduce_with(|err1, err2| {
                    err1.map(|err1| ArcExecutorError::combine_opt(err2, err1))
                })
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }
}

/// Build an error result carrying no timings
fn error_result(year: u16, day: u8, part: u8, error: SolverError) -> SolverResult {
    SolverResult {
        year,
        day,
        part,
        answer: Err(error),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

/// Run one work item, parallelizing parts when configured
fn run_solver(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let input = match sync_executor_config.inputs.read(work.year, work.day) {
        Ok(input) => input,
        Err(e) => {
            // A missing or unreadable input fails each part but not the run.
            let message = e.to_string();
            for part in work.parts.clone() {
                let error = SolverError::ParseError(ParseError::MissingData(message.clone()));
                tx.send(error_result(work.year, work.day, part, error))
                    .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
            }
            return Ok(());
        }
    };

    if matches!(sync_executor_config.parallelize_by, ParallelizeBy::Part) {
        run_solver_parts_parallel(work, &input, tx, sync_executor_config)
    } else {
        run_solver_sequential(work, &input, tx, sync_executor_config)
    }
}

/// Run parts in parallel, buffering results to emit in part order
fn run_solver_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (result_tx, result_rx) = std::sync::mpsc::channel();
    let (year, day) = (work.year, work.day);
    let registry = &sync_executor_config.registry;

    work.parts
        .clone()
        .into_par_iter()
        .for_each_with(result_tx, |rtx, part| {
            let result = match registry.create_solver(year, day, input) {
                Ok(mut solver) => solve_part_timed(year, day, part, &mut *solver),
                Err(e) => error_result(year, day, part, e),
            };
            rtx.send(result).ok();
        });

    let mut buffer: Vec<Option<SolverResult>> =
        work.parts.clone().map(|_| None).collect();
    let start_part = *work.parts.start();
    let mut next_part = start_part;

    for result in result_rx {
        let idx = (result.part - start_part) as usize;
        if idx < buffer.len() {
            buffer[idx] = Some(result);
        }
        while let Some(result) = buffer
            .get_mut((next_part - start_part) as usize)
            .and_then(Option::take)
        {
            tx.send(result)
                .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
            next_part += 1;
        }
    }
    Ok(())
}

/// Parse once, then run parts in order, streaming results as they finish
fn run_solver_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    sync_executor_config: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (solve_tx, solve_rx) = std::sync::mpsc::channel();
    let (year, day) = (work.year, work.day);
    let parts = work.parts.clone();
    let registry = &sync_executor_config.registry;
    std::thread::scope(|s| {
        s.spawn(move || match registry.create_solver(year, day, input) {
            Ok(mut solver) => {
                for part in parts {
                    if solve_tx
                        .send(solve_part_timed(year, day, part, &mut *solver))
                        .is_err()
                    {
                        break;
                    }
                }
            }
            Err(e) => {
                // SolverError is not Clone; carry the message per part.
                let message = e.to_string();
                let _ = solve_tx.send(error_result(year, day, *work.parts.start(), e));
                for part in parts.skip(1) {
                    let error = SolverError::ParseError(ParseError::Other(message.clone()));
                    if solve_tx.send(error_result(year, day, part, error)).is_err() {
                        break;
                    }
                }
            }
        });

        for result in solve_rx {
            tx.send(result)
                .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?
        }
        Ok(())
    })
}

/// Solve a single part, recording parse and solve timings
fn solve_part_timed(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    let parse_duration = Some(solver.parse_duration());
    match solver.solve(part) {
        Ok(result) => SolverResult {
            year,
            day,
            part,
            solve_duration: result.duration(),
            answer: Ok(result.answer),
            parse_duration,
        },
        Err(e) => SolverResult {
            year,
            day,
            part,
            answer: Err(e.into()),
            parse_duration,
            solve_duration: TimeDelta::zero(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elven_solver::{AocParser, RegistryBuilder, SolveError, Solver};
    use std::fs;
    use std::path::PathBuf;

    struct LineCount;

    impl AocParser for LineCount {
        type SharedData<'a> = usize;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            Ok(input.lines().count())
        }
    }

    impl Solver for LineCount {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.to_string()),
                2 => Ok((*shared * 2).to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    struct ThreePart;

    impl AocParser for ThreePart {
        type SharedData<'a> = u64;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            Ok(input.lines().count() as u64)
        }
    }

    impl Solver for ThreePart {
        const PARTS: u8 = 3;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            Ok((*shared * u64::from(part)).to_string())
        }
    }

    fn test_config(input_dir: PathBuf) -> Config {
        Config {
            year_filter: None,
            day_filter: None,
            part_filter: None,
            tags: Vec::new(),
            input_dir,
            input_file: None,
            thread_count: 1,
            parallelize_by: ParallelizeBy::Sequential,
            quiet: true,
        }
    }

    #[test]
    fn sequential_run_emits_all_parts() {
        let dir = tempfile::tempdir().unwrap();
        let year_dir = dir.path().join("2023");
        fs::create_dir_all(&year_dir).unwrap();
        fs::write(year_dir.join("day01.txt"), "a\nb\nc\n").unwrap();

        let registry = RegistryBuilder::new()
            .register::<LineCount>(2023, 1)
            .unwrap()
            .build();
        let executor = Executor::new(registry, &test_config(dir.path().to_path_buf())).unwrap();

        let (tx, rx) = std::sync::mpsc::channel();
        executor.execute(tx).unwrap();

        let results: Vec<SolverResult> = rx.into_iter().collect();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].answer.as_deref().unwrap(), "3");
        assert_eq!(results[1].answer.as_deref().unwrap(), "6");
    }

    #[test]
    fn missing_input_surfaces_as_part_errors() {
        let dir = tempfile::tempdir().unwrap();

        let registry = RegistryBuilder::new()
            .register::<LineCount>(2023, 1)
            .unwrap()
            .build();
        let executor = Executor::new(registry, &test_config(dir.path().to_path_buf())).unwrap();
        assert_eq!(executor.missing_inputs(), vec![(2023, 1)]);

        let (tx, rx) = std::sync::mpsc::channel();
        executor.execute(tx).unwrap();

        let results: Vec<SolverResult> = rx.into_iter().collect();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.answer.is_err()));
    }

    #[test]
    fn part_parallel_emits_every_part_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let year_dir = dir.path().join("2023");
        fs::create_dir_all(&year_dir).unwrap();
        fs::write(year_dir.join("day02.txt"), "a\nb\n").unwrap();

        let registry = RegistryBuilder::new()
            .register::<ThreePart>(2023, 2)
            .unwrap()
            .build();
        let mut config = test_config(dir.path().to_path_buf());
        config.parallelize_by = ParallelizeBy::Part;
        config.thread_count = 2;
        let executor = Executor::new(registry, &config).unwrap();

        let (tx, rx) = std::sync::mpsc::channel();
        executor.execute(tx).unwrap();

        let results: Vec<SolverResult> = rx.into_iter().collect();
        assert_eq!(results.len(), 3);
        assert_eq!(
            results.iter().map(|r| r.part).collect::<Vec<_>>(),
            [1, 2, 3]
        );
        assert_eq!(results[2].answer.as_deref().unwrap(), "6");
    }

    #[test]
    fn part_filter_narrows_work() {
        let registry = RegistryBuilder::new()
            .register::<LineCount>(2023, 1)
            .unwrap()
            .build();
        let mut config = test_config(PathBuf::from("inputs"));
        config.part_filter = Some(2);
        let executor = Executor::new(registry, &config).unwrap();

        let items = executor.collect_work_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].parts, 2..=2);
    }
}
