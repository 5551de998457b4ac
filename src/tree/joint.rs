use glam::{Quat, Vec3};

use super::index::{BodyIndex, JointIndex};
use crate::math::RigidTransform;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JointType {
    Revolute { axis: Vec3 },
    Prismatic { axis: Vec3 },
    Weld,
}

impl JointType {
    pub fn num_positions(&self) -> usize {
        match self {
            JointType::Revolute { .. } | JointType::Prismatic { .. } => 1,
            JointType::Weld => 0,
        }
    }
}

/// Connects a parent body to a child body.
///
/// `frame_on_parent` is the pose of the joint frame in the parent body. The
/// child body frame coincides with the joint frame at zero position.
#[derive(Debug, Clone, PartialEq)]
pub struct Joint {
    pub name: String,
    pub index: JointIndex,
    pub parent: BodyIndex,
    pub child: BodyIndex,
    pub kind: JointType,
    pub frame_on_parent: RigidTransform,
    pub position_lower_limit: f32,
    pub position_upper_limit: f32,
    /// Offset of this joint's coordinate in the tree's position vector.
    pub position_start: usize,
}

impl Joint {
    pub fn num_positions(&self) -> usize {
        self.kind.num_positions()
    }

    pub fn has_finite_limits(&self) -> bool {
        self.position_lower_limit.is_finite() && self.position_upper_limit.is_finite()
    }

    /// Pose of the child frame in the parent frame for coordinate `q`.
    pub fn child_pose(&self, q: f32) -> RigidTransform {
        let motion = match self.kind {
            JointType::Revolute { axis } => {
                RigidTransform::from_rotation(Quat::from_axis_angle(axis, q))
            }
            JointType::Prismatic { axis } => RigidTransform::from_translation(axis * q),
            JointType::Weld => RigidTransform::IDENTITY,
        };
        self.frame_on_parent.compose(&motion)
    }
}
