use glam::{Mat4, Quat, Vec3};

/// Proper rigid transform `X_AB`: the pose of frame B measured in frame A.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidTransform {
    pub rotation: Quat,
    pub translation: Vec3,
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl RigidTransform {
    pub const IDENTITY: Self = Self {
        rotation: Quat::IDENTITY,
        translation: Vec3::ZERO,
    };

    pub fn new(rotation: Quat, translation: Vec3) -> Self {
        Self {
            rotation: rotation.normalize(),
            translation,
        }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    pub fn from_rotation(rotation: Quat) -> Self {
        Self::new(rotation, Vec3::ZERO)
    }

    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        Self::from_rotation(Quat::from_axis_angle(axis.normalize_or_zero(), angle))
    }

    /// `X_AC = X_AB * X_BC`.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            rotation: (self.rotation * other.rotation).normalize(),
            translation: self.translation + self.rotation * other.translation,
        }
    }

    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        Self {
            rotation,
            translation: -(rotation * self.translation),
        }
    }

    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.translation
    }

    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        self.rotation * vector
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }

    pub fn interpolate(&self, other: &Self, t: f32) -> Self {
        Self {
            rotation: self.rotation.slerp(other.rotation, t),
            translation: self.translation.lerp(other.translation, t),
        }
    }

    pub fn is_nearly_equal_to(&self, other: &Self, tolerance: f32) -> bool {
        self.translation.abs_diff_eq(other.translation, tolerance)
            && (self.rotation.dot(other.rotation).abs() - 1.0).abs() <= tolerance
    }
}

impl std::ops::Mul for RigidTransform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}
