//! Time-bounded interpolation between two states
//!
//! Time is passed in by the caller as milliseconds, so the same transition can
//! be driven by the wall clock or by a manual clock in tests.

use serde::{Deserialize, Serialize};

use super::state::StateVector;
use crate::consts::{LAG_SMOOTH_MS, LAG_THRESHOLD_MS};

/// Turns long pauses between samples (GC, backgrounded tab, debugger) into short ones
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LagSmoothing {
    /// Gaps of at least this many ms count as a stall
    pub threshold_ms: f64,
    /// A stall is perceived as this many ms
    pub smooth_ms: f64,
}

impl Default for LagSmoothing {
    fn default() -> Self {
        Self {
            threshold_ms: LAG_THRESHOLD_MS,
            smooth_ms: LAG_SMOOTH_MS,
        }
    }
}

/// Linear interpolation from `start` to `end` over `duration_ms`
#[derive(Debug, Clone)]
pub struct Transition {
    start: StateVector,
    end: StateVector,
    delta: StateVector,
    duration_ms: f64,
    start_time: f64,
    last_sample_time: f64,
    done: bool,
    lag: LagSmoothing,
}

impl Transition {
    /// Start a transition at time `now` (ms)
    pub fn new(start: StateVector, end: StateVector, duration_ms: f64, now: f64) -> Self {
        Self::with_lag(start, end, duration_ms, now, LagSmoothing::default())
    }

    pub fn with_lag(
        start: StateVector,
        end: StateVector,
        duration_ms: f64,
        now: f64,
        lag: LagSmoothing,
    ) -> Self {
        Self {
            start,
            end,
            delta: end.difference(&start),
            duration_ms: duration_ms.max(0.0),
            start_time: now,
            last_sample_time: now,
            done: false,
            lag,
        }
    }

    /// Interpolated state at time `now` (ms)
    ///
    /// Once the transition completes it keeps returning `end`.
    pub fn sample(&mut self, now: f64) -> StateVector {
        if self.done {
            return self.end;
        }
        if self.duration_ms == 0.0 {
            self.done = true;
            return self.end;
        }

        let fraction = self.elapsed(now) / self.duration_ms;
        if fraction >= 1.0 {
            self.done = true;
            return self.end;
        }
        self.delta.scaled(fraction).sum(&self.start)
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn start(&self) -> &StateVector {
        &self.start
    }

    pub fn end(&self) -> &StateVector {
        &self.end
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Elapsed-time baseline, after any lag or rollback adjustment
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn last_sample_time(&self) -> f64 {
        self.last_sample_time
    }

    /// Advance the sample clock and return smoothed elapsed time
    fn elapsed(&mut self, now: f64) -> f64 {
        let prev = self.last_sample_time;
        if now < prev {
            log::warn!("Clock moved backwards ({prev} -> {now}), restarting transition baseline");
            self.start_time = now;
        } else if prev + self.lag.threshold_ms <= now {
            let absorbed = (now - prev) - self.lag.smooth_ms;
            log::debug!("Smoothed {:.0}ms sample gap (absorbed {absorbed:.0}ms)", now - prev);
            self.start_time += absorbed;
        }
        self.last_sample_time = now;
        (now - self.start_time).max(0.0)
    }
}
