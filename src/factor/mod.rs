use crate::error::FactorError;

pub type DivisorList = Vec<u64>;

/// Reference workload: two small inputs, one mid-size, one large.
pub const DEFAULT_INPUTS: [i64; 4] = [128, 255, 99999, 10651060];

/// Every positive divisor of `n`, ascending.
///
/// Plain trial division over `[1, n]`, so the cost is linear in `n`. The
/// benchmark depends on that cost profile; do not bound the loop at `sqrt(n)`.
pub fn divisors(n: i64) -> Result<DivisorList, FactorError> {
    if n <= 0 {
        return Err(FactorError::InvalidInput(n));
    }

    let n = n as u64;
    Ok((1..=n).filter(|i| n % i == 0).collect())
}

/// A strategy for factorizing a batch of inputs.
///
/// Implementations must return one divisor list per input, at the same index
/// as the input, and fail the whole batch on the first bad input.
pub trait Runner {
    fn name(&self) -> &str;

    fn run(&self, inputs: &[i64]) -> Result<Vec<DivisorList>, FactorError>;
}

/// Factorizes on the calling thread, one input after another.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialRunner;

impl Runner for SequentialRunner {
    fn name(&self) -> &str {
        "sequential"
    }

    fn run(&self, inputs: &[i64]) -> Result<Vec<DivisorList>, FactorError> {
        inputs.iter().map(|&n| divisors(n)).collect()
    }
}
