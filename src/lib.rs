pub mod bench;
pub mod error;
pub mod factor;
pub mod io;
pub mod parallel;
pub mod sorter;
pub mod timing;

pub use bench::{run_benchmark, BenchReport, Strategy};
pub use error::{BenchError, FactorError, SortError};
pub use factor::{divisors, DivisorList, Runner, SequentialRunner, DEFAULT_INPUTS};
pub use parallel::ParallelProcessor;
pub use sorter::{sort, FileSorter, SortSummary};
pub use timing::{measure, timed};
