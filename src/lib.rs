//! Pentagons - a field of drifting pentagons
//!
//! Core modules:
//! - `sim`: Animation core (state vectors, transitions, placement, population)
//! - `platform`: Clock abstraction (wall clock, manual clock)
//! - `renderer`: GPU-ready instance data for whatever draws the frames
//! - `settings`: Tunable constants, loadable from JSON

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use platform::time::{Clock, ManualClock, SystemClock};
pub use settings::{Settings, SettingsError};
pub use sim::{Pentagon, Population, StateVector, Transition};

/// Animation constants
pub mod consts {
    /// Number of pentagons on screen
    pub const PENTAGON_COUNT: usize = 18;
    /// Advisory upper bound on radius, for layout and sizing
    pub const MAX_RADIUS: f64 = 0.2;

    /// Sample gaps at least this long (ms) are treated as a stall
    pub const LAG_THRESHOLD_MS: f64 = 500.0;
    /// A stall is perceived as only this much elapsed time (ms)
    pub const LAG_SMOOTH_MS: f64 = 50.0;

    /// Transition duration range (ms)
    pub const MIN_DURATION_MS: f64 = 30_000.0;
    pub const MAX_DURATION_MS: f64 = 60_000.0;

    /// Opacity range
    pub const MIN_OPACITY: f64 = 0.02;
    pub const MAX_OPACITY: f64 = 0.24;

    /// Radius = BASE + (u^EXPONENT + 1) * SCALE
    pub const RADIUS_BASE: f64 = 0.05;
    pub const RADIUS_SCALE: f64 = 0.075;
    pub const RADIUS_EXPONENT: i32 = 15;
}

/// Reduce an angle into [0, 2π)
#[inline]
pub fn clamp_angle(angle: f64) -> f64 {
    use std::f64::consts::TAU;
    let mut angle = angle % TAU;
    if angle < 0.0 {
        angle += TAU;
    }
    // -tiny % TAU + TAU rounds up to TAU
    if angle >= TAU { 0.0 } else { angle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn test_clamp_angle_negative() {
        assert!((clamp_angle(-7.0 * PI) - PI).abs() < 1e-9);
        assert!((clamp_angle(-PI / 2.0) - 1.5 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_angle_large() {
        assert!((clamp_angle(100.0 * TAU + 1.0) - 1.0).abs() < 1e-6);
        assert_eq!(clamp_angle(TAU), 0.0);
        assert_eq!(clamp_angle(0.0), 0.0);
    }

    #[test]
    fn test_clamp_angle_tiny_negative() {
        let a = clamp_angle(-1e-18);
        assert!((0.0..TAU).contains(&a));
    }
}
