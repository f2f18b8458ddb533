//! Execution Timing
//!
//! Runs a closure and reports how long it took through `tracing`.

use std::time::{Duration, Instant};

use tracing::info;

/// Runs `f` and logs its wall-clock duration under `name`.
///
/// The closure's return value is passed through unchanged.
pub fn timed<T, F>(name: &str, f: F) -> T
where
    F: FnOnce() -> T,
{
    timed_with_elapsed(name, f).0
}

/// Like [`timed`], but also hands the measured duration back to the caller.
pub fn timed_with_elapsed<T, F>(name: &str, f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let output = f();
    let elapsed = start.elapsed();

    info!(
        function = name,
        elapsed_secs = rounded_secs(elapsed),
        "Execution time of {}: {:.3} s",
        name,
        elapsed.as_secs_f64()
    );

    (output, elapsed)
}

/// Seconds rounded to milliseconds precision.
fn rounded_secs(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1000.0).round() / 1000.0
}
