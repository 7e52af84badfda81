use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FactorError {
    #[error("Invalid input: {0} is not a positive integer")]
    InvalidInput(i64),

    #[error("Worker failed on input #{index}: {source}")]
    WorkerFailure {
        index: usize,
        #[source]
        source: Box<FactorError>,
    },

    #[error("Failed to build worker pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),
}

#[derive(Debug, Error)]
pub enum SortError {
    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SortError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum BenchError {
    #[error(transparent)]
    Factor(#[from] FactorError),

    #[error("{left} and {right} disagree on input #{index}")]
    Mismatch {
        left: String,
        right: String,
        index: usize,
    },
}
