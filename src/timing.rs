use std::time::{Duration, Instant};
use tracing::info;

/// Runs `f`, logs how long it took under `label`, and returns its result.
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> T {
    measure(label, f).0
}

/// Like [`timed`], but also hands back the elapsed wall-clock time.
pub fn measure<T>(label: &str, f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();

    info!("{}", execution_time_message(label, elapsed));

    (result, elapsed)
}

pub fn execution_time_message(label: &str, elapsed: Duration) -> String {
    format!(
        "Execution time of {}: {} ms",
        label,
        elapsed.as_secs_f64() * 1000.0
    )
}
