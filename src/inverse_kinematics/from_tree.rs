use super::chain::IkChain;
use super::constraint::ConeConstraint;
use crate::tree::{BodyIndex, JointType, KinematicTree, TreeError};

/// Builds the chain running from the world to `tip` at positions `q`.
///
/// Revolute joints with finite limits become cone constraints whose half
/// angle is the larger of the two limit magnitudes.
pub fn chain_from_tree(
    tree: &KinematicTree,
    tip: BodyIndex,
    q: &[f32],
) -> Result<IkChain, TreeError> {
    let poses = tree.calc_body_poses(q)?;
    let path = tree.path_from_world(tip)?;

    let mut builder = IkChain::builder();
    for (i, body) in path.iter().enumerate() {
        let position = poses[body.get()].translation;
        let outgoing = path
            .get(i + 1)
            .and_then(|next| tree.inboard_joint(*next))
            .filter(|joint| matches!(joint.kind, JointType::Revolute { .. }))
            .filter(|joint| joint.has_finite_limits());

        builder = match outgoing {
            Some(joint) => {
                let half_angle = joint
                    .position_lower_limit
                    .abs()
                    .max(joint.position_upper_limit.abs());
                builder.constrained_joint(position, ConeConstraint::from_radians(half_angle))
            }
            None => builder.joint(position),
        };
    }
    Ok(builder.build())
}
