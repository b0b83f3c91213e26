//! Result and summary printing

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::Instant;

pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    /// Print one result as it becomes ready
    pub fn print_result(&self, result: &SolverResult) {
        match &result.answer {
            Ok(answer) => {
                if self.quiet {
                    println!("{answer}");
                } else {
                    let parse = result
                        .parse_duration
                        .map_or_else(|| "N/A".to_string(), format_duration);
                    println!(
                        "{}/{:02} Part {}: {} (parse: {}, solve: {})",
                        result.year,
                        result.day,
                        result.part,
                        answer,
                        parse,
                        format_duration(result.solve_duration),
                    );
                }
            }
            Err(e) => {
                eprintln!(
                    "{}/{:02} Part {}: error: {}",
                    result.year, result.day, result.part, e
                );
            }
        }
    }

    /// Print run totals; the speedup compares summed solver time to wall clock
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let solved = results.iter().filter(|r| r.answer.is_ok()).count();
        let failed = results.len() - solved;

        let total_parse = results
            .iter()
            .filter_map(|r| r.parse_duration)
            .fold(TimeDelta::zero(), |acc, d| acc + d);
        let total_solve = results
            .iter()
            .fold(TimeDelta::zero(), |acc, d| acc + d.solve_duration);

        let elapsed = self.start_time.elapsed();

        println!();
        println!("Solved: {solved}, Failed: {failed}");
        println!(
            "Total parse time: {}, total solve time: {}",
            format_duration(total_parse),
            format_duration(total_solve),
        );
        print!("Wall clock: {}", format_std_duration(elapsed));

        let total_work = total_parse + total_solve;
        if let (Some(work_us), elapsed_us) = (total_work.num_microseconds(), elapsed.as_micros())
            && elapsed_us > 0
        {
            let speedup = work_us as f64 / elapsed_us as f64;
            print!(" ({speedup:.2}x speedup)");
        }
        println!();
    }
}

/// Format a chrono duration with µs/ms/s units
pub fn format_duration(duration: TimeDelta) -> String {
    let Some(us) = duration.num_microseconds() else {
        return "N/A".to_string();
    };
    if us < 0 {
        return format!("-{}", format_micros(us.unsigned_abs()));
    }
    format_micros(us as u64)
}

/// Format a std duration with the same units
pub fn format_std_duration(duration: std::time::Duration) -> String {
    format_micros(duration.as_micros().min(u64::MAX as u128) as u64)
}

fn format_micros(us: u64) -> String {
    if us < 1_000 {
        format!("{us}µs")
    } else if us < 1_000_000 {
        format!("{:.2}ms", us as f64 / 1_000.0)
    } else {
        format!("{:.2}s", us as f64 / 1_000_000.0)
    }
}
