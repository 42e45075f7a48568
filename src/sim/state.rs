//! Pentagon visual state
//!
//! A plain value type: every operation returns a new vector and leaves its
//! operands untouched.

use std::ops::{Add, Mul, Sub};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::clamp_angle;

/// Visual state of one pentagon
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StateVector {
    /// Horizontal position, normalized to [0, 1]
    pub x: f64,
    /// Vertical position, normalized to [0, 1]
    pub y: f64,
    /// Circumradius, in normalized units
    pub radius: f64,
    /// Rotation in radians (unbounded until `clamped_angle`)
    pub rotation: f64,
    /// Opacity in (0, 1)
    pub opacity: f64,
}

impl StateVector {
    pub const fn new(x: f64, y: f64, radius: f64, rotation: f64, opacity: f64) -> Self {
        Self {
            x,
            y,
            radius,
            rotation,
            opacity,
        }
    }

    /// Position as a 2D vector
    #[inline]
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Component-wise sum of all five fields
    pub fn sum(&self, other: &StateVector) -> StateVector {
        StateVector {
            x: self.x + other.x,
            y: self.y + other.y,
            radius: self.radius + other.radius,
            rotation: self.rotation + other.rotation,
            opacity: self.opacity + other.opacity,
        }
    }

    /// Component-wise scaling (k may be zero or negative)
    pub fn scaled(&self, k: f64) -> StateVector {
        StateVector {
            x: self.x * k,
            y: self.y * k,
            radius: self.radius * k,
            rotation: self.rotation * k,
            opacity: self.opacity * k,
        }
    }

    /// `self - other`, defined as `self + other * -1`
    pub fn difference(&self, other: &StateVector) -> StateVector {
        self.sum(&other.scaled(-1.0))
    }

    /// Squared distance between positions; radius, rotation and opacity are ignored
    #[inline]
    pub fn distance_squared(&self, other: &StateVector) -> f64 {
        self.position().distance_squared(other.position())
    }

    /// Copy with rotation reduced into [0, 2π)
    pub fn clamped_angle(&self) -> StateVector {
        StateVector {
            rotation: clamp_angle(self.rotation),
            ..*self
        }
    }
}

impl Add for StateVector {
    type Output = StateVector;

    fn add(self, rhs: StateVector) -> StateVector {
        self.sum(&rhs)
    }
}

impl Sub for StateVector {
    type Output = StateVector;

    fn sub(self, rhs: StateVector) -> StateVector {
        self.difference(&rhs)
    }
}

impl Mul<f64> for StateVector {
    type Output = StateVector;

    fn mul(self, k: f64) -> StateVector {
        self.scaled(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::{PI, TAU};

    fn approx_eq(a: &StateVector, b: &StateVector) -> bool {
        let close = |p: f64, q: f64| (p - q).abs() <= 1e-6 * (1.0 + p.abs().max(q.abs()));
        close(a.x, b.x)
            && close(a.y, b.y)
            && close(a.radius, b.radius)
            && close(a.rotation, b.rotation)
            && close(a.opacity, b.opacity)
    }

    fn state_vector() -> impl Strategy<Value = StateVector> {
        (
            -1e3..1e3f64,
            -1e3..1e3f64,
            -1e3..1e3f64,
            -1e3..1e3f64,
            -1e3..1e3f64,
        )
            .prop_map(|(x, y, r, rot, o)| StateVector::new(x, y, r, rot, o))
    }

    #[test]
    fn test_sum_and_scaled() {
        let a = StateVector::new(1.0, 2.0, 3.0, 4.0, 5.0);
        let b = StateVector::new(0.5, 0.5, 0.5, 0.5, 0.5);
        assert_eq!(a.sum(&b), StateVector::new(1.5, 2.5, 3.5, 4.5, 5.5));
        assert_eq!(a.scaled(0.0), StateVector::default());
        assert_eq!(a * 2.0, StateVector::new(2.0, 4.0, 6.0, 8.0, 10.0));
        // operands untouched
        assert_eq!(a, StateVector::new(1.0, 2.0, 3.0, 4.0, 5.0));
    }

    #[test]
    fn test_distance_ignores_non_position_fields() {
        let a = StateVector::new(0.0, 0.0, 0.1, 1.0, 0.1);
        let b = StateVector::new(3.0, 4.0, 0.9, 5.0, 0.9);
        assert!((a.distance_squared(&b) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_clamped_angle_minus_seven_pi() {
        let v = StateVector::new(0.5, 0.5, 0.1, -7.0 * PI, 0.1);
        let c = v.clamped_angle();
        assert!((c.rotation - PI).abs() < 1e-9);
        assert_eq!(c.x, v.x);
        assert_eq!(v.rotation, -7.0 * PI);
    }

    proptest! {
        #[test]
        fn prop_scaling_distributes_over_sum(a in state_vector(), b in state_vector(), k in -100.0..100.0f64) {
            let lhs = a.sum(&b).scaled(k);
            let rhs = a.scaled(k).sum(&b.scaled(k));
            prop_assert!(approx_eq(&lhs, &rhs));
        }

        #[test]
        fn prop_difference_inverts_sum(a in state_vector(), b in state_vector()) {
            prop_assert!(approx_eq(&a.difference(&b).sum(&b), &a));
            prop_assert!(approx_eq(&(a - b + b), &a));
        }

        #[test]
        fn prop_clamped_angle_in_range(rotation in -1e6..1e6f64) {
            let v = StateVector::new(0.0, 0.0, 0.1, rotation, 0.1).clamped_angle();
            prop_assert!(v.rotation >= 0.0 && v.rotation < TAU);
        }
    }
}
