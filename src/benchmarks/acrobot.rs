use glam::Vec3;

use crate::math::RigidTransform;
use crate::tree::{default_model_instance, world_index, JointType, KinematicTree, TreeError};

/// Physical constants of the two-link acrobot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcrobotParameters {
    pub m1: f64,
    pub m2: f64,
    pub l1: f64,
    pub l2: f64,
    pub lc1: f64,
    pub lc2: f64,
    pub ic1: f64,
    pub ic2: f64,
    pub b1: f64,
    pub b2: f64,
    pub gravity: f64,
}

impl Default for AcrobotParameters {
    fn default() -> Self {
        Self {
            m1: 1.0,
            m2: 1.0,
            l1: 1.0,
            l2: 2.0,
            lc1: 0.5,
            lc2: 1.0,
            ic1: 0.083,
            ic2: 0.33,
            b1: 0.1,
            b2: 0.1,
            gravity: 9.81,
        }
    }
}

impl AcrobotParameters {
    /// Links hang along -Z and swing about +Y.
    pub const AXIS: Vec3 = Vec3::Y;

    pub fn total_mass(&self) -> f64 {
        self.m1 + self.m2
    }
}

/// Kinematic tree of the acrobot: `shoulder` joins `link1` to the world and
/// `elbow` joins `link2` to `link1` at distance `l1`.
pub fn make_acrobot_tree(params: &AcrobotParameters) -> Result<KinematicTree, TreeError> {
    let mut tree = KinematicTree::new();
    let instance = default_model_instance();

    let link1 = tree.add_rigid_body("link1", instance)?;
    let link2 = tree.add_rigid_body("link2", instance)?;
    tree.set_body_mass(link1, params.m1 as f32)?;
    tree.set_body_mass(link2, params.m2 as f32)?;

    tree.add_joint(
        "shoulder",
        world_index(),
        link1,
        JointType::Revolute {
            axis: AcrobotParameters::AXIS,
        },
        RigidTransform::IDENTITY,
    )?;
    tree.add_joint(
        "elbow",
        link1,
        link2,
        JointType::Revolute {
            axis: AcrobotParameters::AXIS,
        },
        RigidTransform::from_translation(Vec3::new(0.0, 0.0, -params.l1 as f32)),
    )?;
    Ok(tree)
}
