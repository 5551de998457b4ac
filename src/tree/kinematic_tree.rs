use thiserror::Error;

use super::body::RigidBody;
use super::index::{
    default_model_instance, world_index, world_model_instance, BodyIndex, JointIndex,
    ModelInstanceIndex,
};
use super::joint::{Joint, JointType};
use crate::math::RigidTransform;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("unknown body {0}")]
    UnknownBody(BodyIndex),

    #[error("unknown joint {0}")]
    UnknownJoint(JointIndex),

    #[error("unknown model instance {0}")]
    UnknownModelInstance(ModelInstanceIndex),

    #[error("duplicate name `{0}`")]
    DuplicateName(String),

    #[error("body {0} already has an inboard joint")]
    AlreadyJointed(BodyIndex),

    #[error("joint `{0}` would close a kinematic loop")]
    Loop(String),

    #[error("joint `{0}` has a zero-length axis")]
    DegenerateAxis(String),

    #[error("invalid limits [{lower}, {upper}] for joint {joint}")]
    InvalidLimits { joint: JointIndex, lower: String, upper: String },

    #[error("invalid mass {0}")]
    InvalidMass(String),

    #[error("expected {expected} positions, got {actual}")]
    PositionCount { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, TreeError>;

/// Bodies connected by joints, rooted at the world body.
#[derive(Debug, Clone)]
pub struct KinematicTree {
    bodies: Vec<RigidBody>,
    joints: Vec<Joint>,
    model_instances: Vec<String>,
    inboard: Vec<Option<JointIndex>>,
    num_positions: usize,
}

impl KinematicTree {
    pub fn new() -> Self {
        Self {
            bodies: vec![RigidBody::new("world", world_index(), world_model_instance())],
            joints: Vec::new(),
            model_instances: vec![
                String::from("WorldModelInstance"),
                String::from("DefaultModelInstance"),
            ],
            inboard: vec![None],
            num_positions: 0,
        }
    }

    pub fn add_model_instance(&mut self, name: impl Into<String>) -> Result<ModelInstanceIndex> {
        let name = name.into();
        if self.model_instances.contains(&name) {
            return Err(TreeError::DuplicateName(name));
        }
        self.model_instances.push(name);
        Ok(ModelInstanceIndex::new(self.model_instances.len() - 1))
    }

    pub fn add_rigid_body(
        &mut self,
        name: impl Into<String>,
        model_instance: ModelInstanceIndex,
    ) -> Result<BodyIndex> {
        let name = name.into();
        if model_instance.get() >= self.model_instances.len() {
            return Err(TreeError::UnknownModelInstance(model_instance));
        }
        if self
            .bodies
            .iter()
            .any(|b| b.model_instance == model_instance && b.name == name)
        {
            return Err(TreeError::DuplicateName(name));
        }

        let index = BodyIndex::new(self.bodies.len());
        self.bodies.push(RigidBody::new(name, index, model_instance));
        self.inboard.push(None);
        Ok(index)
    }

    pub fn add_joint(
        &mut self,
        name: impl Into<String>,
        parent: BodyIndex,
        child: BodyIndex,
        kind: JointType,
        frame_on_parent: RigidTransform,
    ) -> Result<JointIndex> {
        let name = name.into();
        self.check_body(parent)?;
        self.check_body(child)?;

        if self.joints.iter().any(|j| j.name == name) {
            return Err(TreeError::DuplicateName(name));
        }
        if child == world_index() || self.inboard[child.get()].is_some() {
            return Err(TreeError::AlreadyJointed(child));
        }
        if parent == child || self.path_from_world(parent)?.contains(&child) {
            return Err(TreeError::Loop(name));
        }

        let kind = match kind {
            JointType::Revolute { axis } | JointType::Prismatic { axis }
                if axis.length_squared() < 1e-12 =>
            {
                return Err(TreeError::DegenerateAxis(name));
            }
            JointType::Revolute { axis } => JointType::Revolute {
                axis: axis.normalize(),
            },
            JointType::Prismatic { axis } => JointType::Prismatic {
                axis: axis.normalize(),
            },
            JointType::Weld => JointType::Weld,
        };

        let index = JointIndex::new(self.joints.len());
        let joint = Joint {
            name,
            index,
            parent,
            child,
            kind,
            frame_on_parent,
            position_lower_limit: f32::NEG_INFINITY,
            position_upper_limit: f32::INFINITY,
            position_start: self.num_positions,
        };
        self.num_positions += joint.num_positions();
        self.joints.push(joint);
        self.inboard[child.get()] = Some(index);
        Ok(index)
    }

    pub fn set_body_mass(&mut self, body: BodyIndex, mass: f32) -> Result<()> {
        self.check_body(body)?;
        if !mass.is_finite() || mass < 0.0 {
            return Err(TreeError::InvalidMass(mass.to_string()));
        }
        self.bodies[body.get()].mass = mass;
        Ok(())
    }

    pub fn set_position_limits(&mut self, joint: JointIndex, lower: f32, upper: f32) -> Result<()> {
        if lower.is_nan() || upper.is_nan() || lower > upper {
            return Err(TreeError::InvalidLimits {
                joint,
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }
        let joint = self
            .joints
            .get_mut(joint.get())
            .ok_or(TreeError::UnknownJoint(joint))?;
        joint.position_lower_limit = lower;
        joint.position_upper_limit = upper;
        Ok(())
    }

    pub fn num_bodies(&self) -> usize {
        self.bodies.len()
    }

    pub fn num_joints(&self) -> usize {
        self.joints.len()
    }

    pub fn num_positions(&self) -> usize {
        self.num_positions
    }

    pub fn num_model_instances(&self) -> usize {
        self.model_instances.len()
    }

    pub fn model_instance_name(&self, index: ModelInstanceIndex) -> Option<&str> {
        self.model_instances.get(index.get()).map(String::as_str)
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    pub fn body(&self, index: BodyIndex) -> Option<&RigidBody> {
        self.bodies.get(index.get())
    }

    pub fn joint(&self, index: JointIndex) -> Option<&Joint> {
        self.joints.get(index.get())
    }

    /// Looks up a body in the default model instance.
    pub fn get_body_by_name(&self, name: &str) -> Option<&RigidBody> {
        self.get_body_by_name_in(name, default_model_instance())
    }

    pub fn get_body_by_name_in(
        &self,
        name: &str,
        model_instance: ModelInstanceIndex,
    ) -> Option<&RigidBody> {
        self.bodies
            .iter()
            .find(|b| b.model_instance == model_instance && b.name == name)
    }

    pub fn get_joint_by_name(&self, name: &str) -> Option<&Joint> {
        self.joints.iter().find(|j| j.name == name)
    }

    pub fn inboard_joint(&self, body: BodyIndex) -> Option<&Joint> {
        self.inboard
            .get(body.get())
            .copied()
            .flatten()
            .map(|j| &self.joints[j.get()])
    }

    /// Bodies from the root of `body`'s subtree down to `body` itself.
    ///
    /// For bodies connected to the world this starts at the world body.
    pub fn path_from_world(&self, body: BodyIndex) -> Result<Vec<BodyIndex>> {
        self.check_body(body)?;
        let mut path = vec![body];
        let mut current = body;
        while let Some(joint) = self.inboard_joint(current) {
            current = joint.parent;
            path.push(current);
        }
        path.reverse();
        Ok(path)
    }

    /// World poses of every body for the position vector `q`.
    ///
    /// Bodies without an inboard joint are placed at the world origin.
    pub fn calc_body_poses(&self, q: &[f32]) -> Result<Vec<RigidTransform>> {
        if q.len() != self.num_positions {
            return Err(TreeError::PositionCount {
                expected: self.num_positions,
                actual: q.len(),
            });
        }

        let mut poses: Vec<Option<RigidTransform>> = vec![None; self.bodies.len()];
        poses[world_index().get()] = Some(RigidTransform::IDENTITY);

        for body in &self.bodies {
            let mut pose = RigidTransform::IDENTITY;
            for index in self.path_from_world(body.index)? {
                if let Some(known) = poses[index.get()] {
                    pose = known;
                    continue;
                }
                if let Some(joint) = self.inboard_joint(index) {
                    let coordinate = q.get(joint.position_start).copied().unwrap_or(0.0);
                    pose = pose.compose(&joint.child_pose(coordinate));
                }
                poses[index.get()] = Some(pose);
            }
        }

        Ok(poses
            .into_iter()
            .map(|p| p.unwrap_or(RigidTransform::IDENTITY))
            .collect())
    }

    fn check_body(&self, body: BodyIndex) -> Result<()> {
        if body.get() < self.bodies.len() {
            Ok(())
        } else {
            Err(TreeError::UnknownBody(body))
        }
    }
}

impl Default for KinematicTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn two_link() -> (KinematicTree, BodyIndex, BodyIndex) {
        let mut tree = KinematicTree::new();
        let upper = tree.add_rigid_body("upper", default_model_instance()).unwrap();
        let lower = tree.add_rigid_body("lower", default_model_instance()).unwrap();
        tree.add_joint(
            "shoulder",
            world_index(),
            upper,
            JointType::Revolute { axis: Vec3::Z },
            RigidTransform::IDENTITY,
        )
        .unwrap();
        tree.add_joint(
            "elbow",
            upper,
            lower,
            JointType::Revolute { axis: Vec3::Z * 3.0 },
            RigidTransform::from_translation(Vec3::X),
        )
        .unwrap();
        (tree, upper, lower)
    }

    #[test]
    fn world_is_body_zero() {
        let tree = KinematicTree::new();
        assert_eq!(tree.num_bodies(), 1);
        assert!(tree.bodies()[0].is_world());
        assert_eq!(tree.num_model_instances(), 2);
    }

    #[test]
    fn forward_kinematics_of_two_links() {
        let (tree, upper, lower) = two_link();
        assert_eq!(tree.num_positions(), 2);

        let poses = tree
            .calc_body_poses(&[std::f32::consts::FRAC_PI_2, 0.0])
            .unwrap();
        assert!(poses[upper.get()].translation.abs_diff_eq(Vec3::ZERO, 1e-6));
        assert!(poses[lower.get()].translation.abs_diff_eq(Vec3::Y, 1e-5));
    }

    #[test]
    fn axes_are_normalized() {
        let (tree, _, _) = two_link();
        let elbow = tree.get_joint_by_name("elbow").unwrap();
        assert_eq!(elbow.kind, JointType::Revolute { axis: Vec3::Z });
        assert_eq!(elbow.position_start, 1);
    }

    #[test]
    fn path_runs_from_world() {
        let (tree, upper, lower) = two_link();
        assert_eq!(tree.path_from_world(lower).unwrap(), [world_index(), upper, lower]);
    }

    #[test]
    fn rejects_second_inboard_joint_and_loops() {
        let (mut tree, upper, lower) = two_link();
        let err = tree
            .add_joint("again", world_index(), lower, JointType::Weld, RigidTransform::IDENTITY)
            .unwrap_err();
        assert_eq!(err, TreeError::AlreadyJointed(lower));

        let extra = tree.add_rigid_body("extra", default_model_instance()).unwrap();
        tree.add_joint("tip", lower, extra, JointType::Weld, RigidTransform::IDENTITY)
            .unwrap();
        let err = tree
            .add_joint("cycle", extra, upper, JointType::Weld, RigidTransform::IDENTITY)
            .unwrap_err();
        assert_eq!(err, TreeError::AlreadyJointed(upper));

        let floating = tree.add_rigid_body("floating", default_model_instance()).unwrap();
        let err = tree
            .add_joint("self", floating, floating, JointType::Weld, RigidTransform::IDENTITY)
            .unwrap_err();
        assert!(matches!(err, TreeError::Loop(_)));
    }

    #[test]
    fn rejects_degenerate_axis_and_duplicate_names() {
        let mut tree = KinematicTree::new();
        let body = tree.add_rigid_body("link", default_model_instance()).unwrap();
        assert_eq!(
            tree.add_rigid_body("link", default_model_instance()),
            Err(TreeError::DuplicateName("link".into()))
        );
        let err = tree
            .add_joint(
                "slide",
                world_index(),
                body,
                JointType::Prismatic { axis: Vec3::ZERO },
                RigidTransform::IDENTITY,
            )
            .unwrap_err();
        assert_eq!(err, TreeError::DegenerateAxis("slide".into()));
    }

    #[test]
    fn limits_and_position_count_are_checked() {
        let (mut tree, _, _) = two_link();
        assert!(tree.set_position_limits(JointIndex::new(0), -1.0, 1.0).is_ok());
        assert!(tree.joints()[0].has_finite_limits());
        assert!(tree.set_position_limits(JointIndex::new(0), 1.0, -1.0).is_err());
        assert!(tree.set_position_limits(JointIndex::new(9), -1.0, 1.0).is_err());
        assert_eq!(
            tree.calc_body_poses(&[0.0]),
            Err(TreeError::PositionCount {
                expected: 2,
                actual: 1
            })
        );
    }
}
