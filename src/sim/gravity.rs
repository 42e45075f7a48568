//! Force-based placement of the next target coordinate
//!
//! Each pentagon is pushed away from the edges of the unit square and from
//! every other pentagon by inverse-square forces, plus a random kick. The
//! result is a small step from the current coordinate, clamped to [0, 1].

use rand::Rng;

use super::state::StateVector;

/// Offset keeping the edge force finite at exactly 0 or 1
pub const EDGE_OFFSET: f64 = 0.01;
/// Neighbours closer than this (squared distance) count as coincident
pub const COINCIDENT_EPSILON: f64 = 1e-5;
/// Random force is uniform in [-JITTER/2, JITTER/2)
pub const JITTER: f64 = 20.0;
/// Force magnitude cap before scaling
pub const FORCE_CAP: f64 = 100.0;
/// Capped force is divided by this to get a coordinate step (max step 0.2)
pub const FORCE_SCALE: f64 = 500.0;

/// Coordinate axis of the unit square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    pub fn of(self, v: &StateVector) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }
}

/// Inverse-square push away from both boundaries of the unit interval
#[inline]
pub fn edge_force(coord: f64) -> f64 {
    1.0 / (coord + EDGE_OFFSET).powi(2) - 1.0 / (1.0 + EDGE_OFFSET - coord).powi(2)
}

/// Next coordinate along `axis` for a pentagon at `own`
///
/// `neighbours` are the last frames of every other pentagon. If any of them
/// sits on top of `own`, the accumulated force is discarded and a uniformly
/// random coordinate is returned instead.
pub fn gravity_coord<'a, R, I>(axis: Axis, own: &StateVector, neighbours: I, rng: &mut R) -> f64
where
    R: Rng,
    I: IntoIterator<Item = &'a StateVector>,
{
    let coord = axis.of(own);
    let mut force = edge_force(coord);

    for other in neighbours {
        let d2 = own.distance_squared(other);
        if d2.abs() < COINCIDENT_EPSILON {
            log::trace!("Coincident neighbour at ({:.4}, {:.4}), picking random {axis:?}", other.x, other.y);
            return rng.random::<f64>();
        }
        let distance = d2.sqrt();
        force -= (1.0 / d2) * (axis.of(other) - coord) / distance;
    }

    force += (rng.random::<f64>() - 0.5) * JITTER;
    force = force.clamp(-FORCE_CAP, FORCE_CAP) / FORCE_SCALE;

    (coord + force).clamp(0.0, 1.0)
}
