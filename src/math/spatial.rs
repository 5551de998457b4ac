//! Spatial vectors: a rotational and a translational 3-vector pair.

use std::ops::{Add, Neg, Sub};

use glam::{Quat, Vec3};

macro_rules! spatial_vector {
    ($name:ident, $rot:ident, $trans:ident) => {
        #[derive(Debug, Clone, Copy, Default, PartialEq)]
        pub struct $name {
            pub $rot: Vec3,
            pub $trans: Vec3,
        }

        impl $name {
            pub const ZERO: Self = Self {
                $rot: Vec3::ZERO,
                $trans: Vec3::ZERO,
            };

            pub fn new($rot: Vec3, $trans: Vec3) -> Self {
                Self { $rot, $trans }
            }

            /// Re-express in another frame, given the rotation `R_EF` from
            /// the current expressed-in frame F to E.
            pub fn rotate(&self, rotation: Quat) -> Self {
                Self {
                    $rot: rotation * self.$rot,
                    $trans: rotation * self.$trans,
                }
            }

            pub fn to_array(&self) -> [f32; 6] {
                let r = self.$rot;
                let t = self.$trans;
                [r.x, r.y, r.z, t.x, t.y, t.z]
            }

            pub fn abs_diff_eq(&self, other: &Self, tolerance: f32) -> bool {
                self.$rot.abs_diff_eq(other.$rot, tolerance)
                    && self.$trans.abs_diff_eq(other.$trans, tolerance)
            }
        }

        impl Add for $name {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self::new(self.$rot + rhs.$rot, self.$trans + rhs.$trans)
            }
        }

        impl Sub for $name {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self::new(self.$rot - rhs.$rot, self.$trans - rhs.$trans)
            }
        }

        impl Neg for $name {
            type Output = Self;
            fn neg(self) -> Self {
                Self::new(-self.$rot, -self.$trans)
            }
        }
    };
}

spatial_vector!(SpatialVelocity, angular, linear);
spatial_vector!(SpatialAcceleration, angular, linear);
spatial_vector!(SpatialForce, torque, force);
spatial_vector!(SpatialMomentum, angular, linear);

impl SpatialVelocity {
    /// Velocity of a point Q rigidly fixed to the same body, `p_PQ` away.
    pub fn shift(&self, offset: Vec3) -> Self {
        Self::new(self.angular, self.linear + self.angular.cross(offset))
    }

    /// Power delivered by `force` acting at the same point.
    pub fn dot(&self, force: &SpatialForce) -> f32 {
        self.angular.dot(force.torque) + self.linear.dot(force.force)
    }
}

impl SpatialAcceleration {
    /// Acceleration of a point `offset` away on a body spinning at `angular_velocity`.
    pub fn shift(&self, offset: Vec3, angular_velocity: Vec3) -> Self {
        let centripetal = angular_velocity.cross(angular_velocity.cross(offset));
        Self::new(
            self.angular,
            self.linear + self.angular.cross(offset) + centripetal,
        )
    }
}

impl SpatialForce {
    /// Equivalent force applied at a point `offset` away from the current one.
    pub fn shift(&self, offset: Vec3) -> Self {
        Self::new(self.torque - offset.cross(self.force), self.force)
    }
}

impl SpatialMomentum {
    pub fn shift(&self, offset: Vec3) -> Self {
        Self::new(self.angular - offset.cross(self.linear), self.linear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn velocity_shift_adds_tangential_term() {
        let v = SpatialVelocity::new(Vec3::Z, Vec3::ZERO);
        let shifted = v.shift(Vec3::X);
        assert!(shifted.linear.abs_diff_eq(Vec3::Y, 1e-6));
        assert_eq!(shifted.angular, Vec3::Z);
    }

    #[test]
    fn power_is_invariant_under_shift() {
        let v = SpatialVelocity::new(Vec3::new(0.1, 0.2, 0.3), Vec3::new(1.0, 0.0, -1.0));
        let f = SpatialForce::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(2.0, 3.0, 4.0));
        let offset = Vec3::new(0.5, -0.25, 1.0);
        assert_relative_eq!(v.dot(&f), v.shift(offset).dot(&f.shift(offset)), epsilon = 1e-5);
    }

    #[test]
    fn centripetal_term_points_inward() {
        let a = SpatialAcceleration::ZERO.shift(Vec3::X, Vec3::Z);
        assert!(a.linear.abs_diff_eq(-Vec3::X, 1e-6));
    }

    #[test]
    fn arithmetic_is_componentwise() {
        let a = SpatialForce::new(Vec3::X, Vec3::Y);
        let b = SpatialForce::new(Vec3::Y, Vec3::Z);
        assert_eq!((a + b - b), a);
        assert_eq!((-a).to_array(), [-1.0, 0.0, 0.0, 0.0, -1.0, 0.0]);
    }

    #[test]
    fn rotate_reexpresses_both_parts() {
        let m = SpatialMomentum::new(Vec3::X, Vec3::X);
        let r = m.rotate(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2));
        assert!(r.abs_diff_eq(&SpatialMomentum::new(Vec3::Y, Vec3::Y), 1e-6));
    }
}
