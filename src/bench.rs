//! Benchmark driver: runs one or both strategies over the same inputs under the
//! timing harness, and cross-checks their output when both run.

use std::time::Duration;

use crate::error::BenchError;
use crate::factor::{DivisorList, Runner, SequentialRunner};
use crate::parallel::ParallelProcessor;
use crate::timing::measure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    Sequential,
    Parallel,
    Both,
}

#[derive(Debug, Clone)]
pub struct StrategyTiming {
    pub label: String,
    pub elapsed: Duration,
}

#[derive(Debug)]
pub struct BenchReport {
    pub inputs: Vec<i64>,
    pub results: Vec<DivisorList>,
    pub timings: Vec<StrategyTiming>,
}

impl BenchReport {
    fn elapsed_of(&self, label: &str) -> Option<Duration> {
        self.timings
            .iter()
            .find(|t| t.label == label)
            .map(|t| t.elapsed)
    }

    /// Sequential time divided by parallel time, when both were measured.
    pub fn speedup(&self) -> Option<f64> {
        let sequential = self.elapsed_of("sequential")?;
        let parallel = self.elapsed_of("parallel")?;

        if parallel.is_zero() {
            return None;
        }
        Some(sequential.as_secs_f64() / parallel.as_secs_f64())
    }
}

pub fn run_benchmark(
    inputs: &[i64],
    strategy: Strategy,
    workers: Option<usize>,
) -> Result<BenchReport, BenchError> {
    let processor = ParallelProcessor::new(workers);
    let runners: Vec<&dyn Runner> = match strategy {
        Strategy::Sequential => vec![&SequentialRunner],
        Strategy::Parallel => vec![&processor],
        Strategy::Both => vec![&SequentialRunner, &processor],
    };

    let mut timings = Vec::with_capacity(runners.len());
    let mut baseline: Option<(String, Vec<DivisorList>)> = None;

    for runner in runners {
        let (results, elapsed) = measure(runner.name(), || runner.run(inputs));
        let results = results?;

        timings.push(StrategyTiming {
            label: runner.name().to_string(),
            elapsed,
        });

        if let Some((label, expected)) = &baseline {
            if let Some(index) = first_difference(expected, &results) {
                return Err(BenchError::Mismatch {
                    left: label.clone(),
                    right: runner.name().to_string(),
                    index,
                });
            }
            continue;
        }
        baseline = Some((runner.name().to_string(), results));
    }

    let results = baseline.map(|(_, results)| results).unwrap_or_default();

    Ok(BenchReport {
        inputs: inputs.to_vec(),
        results,
        timings,
    })
}

fn first_difference(left: &[DivisorList], right: &[DivisorList]) -> Option<usize> {
    if left.len() != right.len() {
        return Some(left.len().min(right.len()));
    }
    left.iter().zip(right).position(|(a, b)| a != b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FactorError;

    #[test]
    fn test_both_strategies_agree() {
        let report = run_benchmark(&[12, 7, 30], Strategy::Both, Some(2)).unwrap();

        assert_eq!(report.timings.len(), 2);
        assert_eq!(report.timings[0].label, "sequential");
        assert_eq!(report.timings[1].label, "parallel");
        assert_eq!(report.results[0], vec![1, 2, 3, 4, 6, 12]);
        assert_eq!(report.results[1], vec![1, 7]);
    }

    #[test]
    fn test_single_strategy_has_no_speedup() {
        let report = run_benchmark(&[12], Strategy::Parallel, None).unwrap();
        assert_eq!(report.timings.len(), 1);
        assert!(report.speedup().is_none());
    }

    #[test]
    fn test_invalid_input_propagates() {
        let err = run_benchmark(&[12, -3], Strategy::Sequential, None).unwrap_err();
        assert!(matches!(
            err,
            BenchError::Factor(FactorError::InvalidInput(-3))
        ));
    }

    #[test]
    fn test_first_difference() {
        let a = vec![vec![1], vec![1, 2]];
        let b = vec![vec![1], vec![1, 3]];
        assert_eq!(first_difference(&a, &a), None);
        assert_eq!(first_difference(&a, &b), Some(1));
        assert_eq!(first_difference(&a, &a[..1]), Some(1));
    }
}
