use rayon::prelude::*;
use tracing::debug;

use crate::error::FactorError;
use crate::factor::{divisors, DivisorList, Runner};

/// Spreads a batch of inputs across a worker pool sized to the host.
///
/// The pool lives for a single `run` call only.
#[derive(Debug, Clone)]
pub struct ParallelProcessor {
    num_workers: usize,
}

impl ParallelProcessor {
    pub fn new(num_workers: Option<usize>) -> Self {
        let num_workers = num_workers.unwrap_or_else(num_cpus::get).max(1);

        Self { num_workers }
    }

    pub fn num_workers(&self) -> usize {
        self.num_workers
    }
}

impl Default for ParallelProcessor {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Runner for ParallelProcessor {
    fn name(&self) -> &str {
        "parallel"
    }

    fn run(&self, inputs: &[i64]) -> Result<Vec<DivisorList>, FactorError> {
        if inputs.is_empty() {
            return Ok(Vec::new());
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.num_workers)
            .thread_name(|i| format!("divsort-worker-{i}"))
            .build()?;

        debug!(
            "Dispatching {} inputs to {} workers",
            inputs.len(),
            self.num_workers
        );

        // Indexed collect keeps input order regardless of completion order.
        pool.install(|| {
            inputs
                .par_iter()
                .enumerate()
                .map(|(index, &n)| {
                    divisors(n).map_err(|e| FactorError::WorkerFailure {
                        index,
                        source: Box::new(e),
                    })
                })
                .collect()
        })
    }
}
