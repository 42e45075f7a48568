//! Animation core
//!
//! Everything that moves lives here. This module has no rendering or platform
//! dependencies:
//! - Time arrives as milliseconds from a `Clock`
//! - Randomness comes from the population's RNG
//! - Pentagons are framed in population order

pub mod entity;
pub mod gravity;
pub mod population;
pub mod state;
pub mod transition;

pub use entity::{Pentagon, random_duration, random_opacity, random_radius};
pub use gravity::{Axis, edge_force, gravity_coord};
pub use population::{Neighbours, Population};
pub use state::StateVector;
pub use transition::{LagSmoothing, Transition};
