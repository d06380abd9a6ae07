// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Wall-clock timing of a single phase.

use crate::macros::log_debug;
use std::time::{Duration, Instant};

/// The value computed by a timed phase, along with the wall-clock time it took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timed<T> {
    /// Elapsed wall-clock time.
    pub elapsed: Duration,
    /// Value returned by the phase.
    pub value: T,
}

impl<T> Timed<T> {
    /// Elapsed time in seconds.
    pub fn secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Maps the value while keeping the elapsed time.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Timed<U> {
        Timed {
            elapsed: self.elapsed,
            value: f(self.value),
        }
    }
}

/// Runs the given phase, measuring the wall-clock time between its start and
/// its end.
///
/// ```
/// # use collbench::timing::timed;
/// let timed = timed("answer", || 6 * 7);
/// assert_eq!(timed.value, 42);
/// assert!(timed.secs() >= 0.0);
/// ```
pub fn timed<T>(phase: &str, f: impl FnOnce() -> T) -> Timed<T> {
    log_debug!("[{phase}] Starting.");
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    log_debug!("[{phase}] Finished in {elapsed:?}.");
    #[cfg(not(feature = "log"))]
    let _ = phase;
    Timed { elapsed, value }
}
