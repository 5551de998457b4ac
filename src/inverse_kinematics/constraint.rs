use glam::{Quat, Vec3};
use std::fmt::Debug;

/// Restricts the direction of a bone leaving a joint.
pub trait DirectionConstraint: Send + Sync + Debug {
    /// Clamp `direction` given the `reference` direction of the incoming bone.
    fn apply(&self, direction: Vec3, reference: Vec3) -> Vec3;
    fn clone_box(&self) -> Box<dyn DirectionConstraint>;
}

impl Clone for Box<dyn DirectionConstraint> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Keeps the outgoing bone inside a cone around the incoming bone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeConstraint {
    pub half_angle: f32,
}

impl ConeConstraint {
    pub fn from_degrees(half_angle: f32) -> Self {
        Self::from_radians(half_angle.to_radians())
    }

    pub fn from_radians(half_angle: f32) -> Self {
        Self {
            half_angle: half_angle.abs(),
        }
    }
}

impl DirectionConstraint for ConeConstraint {
    fn apply(&self, direction: Vec3, reference: Vec3) -> Vec3 {
        let dir = direction.normalize_or_zero();
        let ref_dir = reference.normalize_or_zero();

        if dir.length_squared() < 0.0001 || ref_dir.length_squared() < 0.0001 {
            return ref_dir;
        }

        if dir.angle_between(ref_dir) <= self.half_angle {
            return dir;
        }

        let axis = ref_dir.cross(dir);
        if axis.length_squared() < 0.0001 {
            // Pointing straight back: any axis perpendicular to the reference will do.
            let axis = ref_dir.any_orthonormal_vector();
            return Quat::from_axis_angle(axis, self.half_angle) * ref_dir;
        }
        Quat::from_axis_angle(axis.normalize(), self.half_angle) * ref_dir
    }

    fn clone_box(&self) -> Box<dyn DirectionConstraint> {
        Box::new(*self)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Unconstrained;

impl DirectionConstraint for Unconstrained {
    fn apply(&self, direction: Vec3, _reference: Vec3) -> Vec3 {
        direction.normalize_or_zero()
    }

    fn clone_box(&self) -> Box<dyn DirectionConstraint> {
        Box::new(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cone_passes_directions_inside() {
        let cone = ConeConstraint::from_degrees(45.0);
        let dir = Vec3::new(0.3, 1.0, 0.0).normalize();
        assert!(cone.apply(dir, Vec3::Y).abs_diff_eq(dir, 1e-6));
    }

    #[test]
    fn cone_clamps_to_boundary() {
        let cone = ConeConstraint::from_degrees(30.0);
        let clamped = cone.apply(Vec3::X, Vec3::Y);
        assert_relative_eq!(clamped.angle_between(Vec3::Y), 30f32.to_radians(), epsilon = 1e-5);
        assert!(clamped.x > 0.0);
    }

    #[test]
    fn cone_handles_reversed_direction() {
        let cone = ConeConstraint::from_degrees(20.0);
        let clamped = cone.apply(-Vec3::Y, Vec3::Y);
        assert_relative_eq!(clamped.angle_between(Vec3::Y), 20f32.to_radians(), epsilon = 1e-5);
    }

    #[test]
    fn unconstrained_only_normalizes() {
        assert_eq!(Unconstrained.apply(Vec3::X * 4.0, Vec3::Y), Vec3::X);
    }
}
