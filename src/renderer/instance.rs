//! Per-pentagon instance data for GPU upload

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use std::f32::consts::TAU;

use crate::sim::StateVector;

/// Pentagon corner count
pub const SIDES: usize = 5;

/// One pentagon, laid out for an instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PentagonInstance {
    /// Center in normalized [0, 1] space
    pub center: [f32; 2],
    pub radius: f32,
    /// Radians, [0, 2π)
    pub rotation: f32,
    pub opacity: f32,
}

impl PentagonInstance {
    pub const fn new(center: [f32; 2], radius: f32, rotation: f32, opacity: f32) -> Self {
        Self {
            center,
            radius,
            rotation,
            opacity,
        }
    }

    /// Corner positions, counter-clockwise from the rotation angle
    pub fn corners(&self) -> [Vec2; SIDES] {
        let center = Vec2::from(self.center);
        std::array::from_fn(|i| {
            let theta = self.rotation + i as f32 * TAU / SIDES as f32;
            center + Vec2::new(theta.cos(), theta.sin()) * self.radius
        })
    }
}

impl From<&StateVector> for PentagonInstance {
    fn from(s: &StateVector) -> Self {
        Self::new(
            [s.x as f32, s.y as f32],
            s.radius as f32,
            s.rotation as f32,
            s.opacity as f32,
        )
    }
}

/// Pack one tick's frames for upload
pub fn instances(frames: &[StateVector]) -> Vec<PentagonInstance> {
    frames.iter().map(PentagonInstance::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<PentagonInstance>(), 5 * 4);
        let packed = instances(&[
            StateVector::new(0.25, 0.5, 0.1, 1.0, 0.2),
            StateVector::new(0.75, 0.5, 0.15, 2.0, 0.1),
        ]);
        let floats: &[f32] = bytemuck::cast_slice(&packed);
        assert_eq!(floats.len(), 10);
        assert_eq!(floats[0], 0.25);
        assert_eq!(floats[5], 0.75);
        assert_eq!(floats[9], 0.1);
    }

    #[test]
    fn test_corners_on_circumcircle() {
        let p = PentagonInstance::new([0.5, 0.5], 0.1, 0.3, 1.0);
        let corners = p.corners();
        for c in corners {
            assert!(((c - Vec2::new(0.5, 0.5)).length() - 0.1).abs() < 1e-6);
        }
        // First corner sits at the rotation angle
        let first = corners[0] - Vec2::new(0.5, 0.5);
        assert!((first.y.atan2(first.x) - 0.3).abs() < 1e-5);
    }
}
