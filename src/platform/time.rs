//! Clock sources
//!
//! Transitions only ever see milliseconds handed to them, so the population
//! reads time through a [`Clock`]. The wall clock is used for real runs; the
//! manual clock lets tests and headless drivers step time explicitly.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of the current time in milliseconds
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Unix wall-clock time
///
/// Not monotonic: the user can set their clock back, which transitions absorb.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[cfg(target_arch = "wasm32")]
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn now_ms(&self) -> f64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => since.as_secs_f64() * 1000.0,
            // Clock set before 1970
            Err(err) => -err.duration().as_secs_f64() * 1000.0,
        }
    }
}

/// Settable clock; clones share the same time
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    bits: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(now_ms: f64) -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(now_ms.to_bits())),
        }
    }

    /// Jump to `now_ms`; may go backwards
    pub fn set(&self, now_ms: f64) {
        self.bits.store(now_ms.to_bits(), Ordering::Relaxed);
    }

    /// Step forward by `ms`
    pub fn advance(&self, ms: f64) {
        self.set(self.now_ms() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new(100.0);
        let other = clock.clone();
        clock.advance(50.0);
        assert_eq!(other.now_ms(), 150.0);
        other.set(20.0);
        assert_eq!(clock.now_ms(), 20.0);
    }

    #[test]
    fn test_manual_clock_default_is_zero() {
        assert_eq!(ManualClock::default().now_ms(), 0.0);
    }

    #[test]
    fn test_system_clock_is_unix_millis() {
        let now = SystemClock.now_ms();
        // 2020-01-01 in ms
        assert!(now > 1_577_836_800_000.0);
    }
}
