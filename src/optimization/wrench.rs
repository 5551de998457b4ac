use glam::Vec3;

use crate::math::SpatialForce;
use crate::tree::BodyIndex;

/// Wrench applied on body B by body A at contact point Cb, expressed in world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactWrench {
    pub body_a: BodyIndex,
    pub body_b: BodyIndex,
    pub point_w: Vec3,
    pub wrench_w: SpatialForce,
}

impl ContactWrench {
    pub fn new(body_a: BodyIndex, body_b: BodyIndex, point_w: Vec3, wrench_w: SpatialForce) -> Self {
        Self {
            body_a,
            body_b,
            point_w,
            wrench_w,
        }
    }

    /// Equal and opposite wrench applied on A by B at the same point.
    pub fn reaction(&self) -> Self {
        Self {
            body_a: self.body_b,
            body_b: self.body_a,
            point_w: self.point_w,
            wrench_w: -self.wrench_w,
        }
    }

    /// The same wrench referred to the world origin.
    pub fn about_world_origin(&self) -> SpatialForce {
        self.wrench_w.shift(-self.point_w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaction_swaps_bodies_and_negates() {
        let w = ContactWrench::new(
            BodyIndex::new(1),
            BodyIndex::new(2),
            Vec3::X,
            SpatialForce::new(Vec3::ZERO, Vec3::Y),
        );
        let r = w.reaction();
        assert_eq!(r.body_a, BodyIndex::new(2));
        assert_eq!(r.wrench_w.force, -Vec3::Y);
    }

    #[test]
    fn moment_about_origin_includes_lever_arm() {
        let w = ContactWrench::new(
            BodyIndex::new(0),
            BodyIndex::new(1),
            Vec3::X,
            SpatialForce::new(Vec3::ZERO, Vec3::Y),
        );
        assert!(w.about_world_origin().torque.abs_diff_eq(Vec3::Z, 1e-6));
    }
}
