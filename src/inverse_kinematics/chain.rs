use glam::Vec3;

use super::constraint::DirectionConstraint;

#[derive(Debug, Clone)]
pub struct ChainJoint {
    pub position: Vec3,
    pub constraint: Option<Box<dyn DirectionConstraint>>,
}

impl ChainJoint {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            constraint: None,
        }
    }

    pub fn with_constraint<C: DirectionConstraint + 'static>(mut self, constraint: C) -> Self {
        self.constraint = Some(Box::new(constraint));
        self
    }

    /// Direction of the bone leaving this joint after the constraint is applied.
    pub fn constrain(&self, direction: Vec3, reference: Vec3) -> Vec3 {
        match &self.constraint {
            Some(c) => c.apply(direction, reference),
            None => direction.normalize_or_zero(),
        }
    }
}

/// Serial chain of joint positions with fixed bone lengths.
#[derive(Debug, Clone)]
pub struct IkChain {
    pub(crate) joints: Vec<ChainJoint>,
    pub(crate) bone_lengths: Vec<f32>,
    pub(crate) base_direction: Vec3,
}

impl IkChain {
    pub fn builder() -> IkChainBuilder {
        IkChainBuilder::new()
    }

    pub fn joints(&self) -> &[ChainJoint] {
        &self.joints
    }

    pub fn bone_lengths(&self) -> &[f32] {
        &self.bone_lengths
    }

    pub fn total_length(&self) -> f32 {
        self.bone_lengths.iter().sum()
    }

    pub fn joint_count(&self) -> usize {
        self.joints.len()
    }

    /// Reference direction for the constraint on the first joint.
    pub fn base_direction(&self) -> Vec3 {
        self.base_direction
    }

    pub fn end_effector(&self) -> Option<Vec3> {
        self.joints.last().map(|j| j.position)
    }

    pub fn base(&self) -> Option<Vec3> {
        self.joints.first().map(|j| j.position)
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.joints.iter().map(|j| j.position)
    }
}

pub struct IkChainBuilder {
    joints: Vec<ChainJoint>,
    base_direction: Option<Vec3>,
}

impl IkChainBuilder {
    pub fn new() -> Self {
        Self {
            joints: Vec::new(),
            base_direction: None,
        }
    }

    pub fn joint(mut self, position: Vec3) -> Self {
        self.joints.push(ChainJoint::new(position));
        self
    }

    pub fn constrained_joint<C: DirectionConstraint + 'static>(
        mut self,
        position: Vec3,
        constraint: C,
    ) -> Self {
        self.joints
            .push(ChainJoint::new(position).with_constraint(constraint));
        self
    }

    pub fn base_direction(mut self, direction: Vec3) -> Self {
        self.base_direction = Some(direction.normalize_or_zero());
        self
    }

    pub fn build(self) -> IkChain {
        let bone_lengths = self.bone_lengths();
        let base_direction = self
            .base_direction
            .or_else(|| {
                self.joints
                    .get(..2)
                    .and_then(|pair| (pair[1].position - pair[0].position).try_normalize())
            })
            .unwrap_or(Vec3::Y);

        IkChain {
            joints: self.joints,
            bone_lengths,
            base_direction,
        }
    }

    fn bone_lengths(&self) -> Vec<f32> {
        self.joints
            .windows(2)
            .map(|w| (w[1].position - w[0].position).length())
            .collect()
    }
}

impl Default for IkChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}
