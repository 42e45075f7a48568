//! A single drifting pentagon
//!
//! Every pentagon is always mid-transition. When one transition finishes, the
//! same `frame` call picks a new target and starts the next one.

use std::f64::consts::{PI, TAU};

use rand::Rng;

use super::gravity::{Axis, gravity_coord};
use super::state::StateVector;
use super::transition::Transition;
use crate::consts::{MAX_RADIUS, RADIUS_BASE, RADIUS_EXPONENT, RADIUS_SCALE};
use crate::settings::Settings;

/// One animated pentagon
#[derive(Debug, Clone)]
pub struct Pentagon {
    /// Most recent angle-normalized state, read by neighbours during placement
    last_frame: StateVector,
    transition: Transition,
}

impl Pentagon {
    /// Advisory upper bound on radius
    pub const MAX_RADIUS: f64 = MAX_RADIUS;

    /// Random starting state with an already-finished transition, so the first
    /// `frame` picks a real target
    pub fn new<R: Rng>(rng: &mut R, settings: &Settings, now: f64) -> Self {
        let start = StateVector {
            radius: random_radius(rng),
            opacity: random_opacity(rng, settings),
            x: rng.random::<f64>(),
            y: rng.random::<f64>(),
            rotation: rng.random::<f64>() * TAU,
        };
        Self::at(start, settings, now)
    }

    /// Pentagon resting at `state`
    pub fn at(state: StateVector, settings: &Settings, now: f64) -> Self {
        Self {
            last_frame: state,
            transition: Transition::with_lag(state, state, 0.0, now, settings.lag_smoothing()),
        }
    }

    pub fn last_frame(&self) -> &StateVector {
        &self.last_frame
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Advance to time `now` and return the state to draw
    ///
    /// `neighbours` are the last frames of every other pentagon.
    pub fn frame<'a, R, I>(
        &mut self,
        now: f64,
        neighbours: I,
        rng: &mut R,
        settings: &Settings,
    ) -> StateVector
    where
        R: Rng,
        I: IntoIterator<Item = &'a StateVector> + Clone,
    {
        let frame = self.transition.sample(now).clamped_angle();
        self.last_frame = frame;

        if self.transition.is_done() {
            let target = self.generate_target(neighbours, rng, settings);
            let duration = random_duration(rng, settings);
            log::debug!(
                "New target ({:.3}, {:.3}) r={:.3} over {:.0}ms",
                target.x,
                target.y,
                target.radius,
                duration
            );
            self.transition =
                Transition::with_lag(self.last_frame, target, duration, now, settings.lag_smoothing());
        }
        frame
    }

    /// Next target: force-placed position, fresh radius and opacity, small rotation nudge
    pub fn generate_target<'a, R, I>(
        &self,
        neighbours: I,
        rng: &mut R,
        settings: &Settings,
    ) -> StateVector
    where
        R: Rng,
        I: IntoIterator<Item = &'a StateVector> + Clone,
    {
        let x = gravity_coord(Axis::X, &self.last_frame, neighbours.clone(), rng);
        let y = gravity_coord(Axis::Y, &self.last_frame, neighbours, rng);
        StateVector {
            x,
            y,
            radius: random_radius(rng),
            opacity: random_opacity(rng, settings),
            rotation: PI * (rng.random::<f64>() - 0.5) + self.last_frame.rotation,
        }
    }
}

/// Transition duration in ms, uniform over the configured range
pub fn random_duration<R: Rng>(rng: &mut R, settings: &Settings) -> f64 {
    let span = settings.max_duration_ms - settings.min_duration_ms;
    settings.min_duration_ms + span * rng.random::<f64>()
}

/// Opacity, uniform over the configured range
pub fn random_opacity<R: Rng>(rng: &mut R, settings: &Settings) -> f64 {
    let span = settings.max_opacity - settings.min_opacity;
    settings.min_opacity + span * rng.random::<f64>()
}

/// Radius skewed hard toward the small end, with a thin tail toward `MAX_RADIUS`
pub fn random_radius<R: Rng>(rng: &mut R) -> f64 {
    let u = rng.random::<f64>();
    RADIUS_BASE + (u.powi(RADIUS_EXPONENT) + 1.0) * RADIUS_SCALE
}
