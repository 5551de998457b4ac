use glam::Vec3;

use super::chain::IkChain;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionConstraint {
    pub target: Vec3,
    pub tolerance: f32,
}

impl PositionConstraint {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            tolerance: 0.001,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance.abs();
        self
    }

    pub fn is_satisfied_by(&self, point: Vec3) -> bool {
        (point - self.target).length() <= self.tolerance
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveResult {
    pub converged: bool,
    pub iterations: u32,
    pub final_distance: f32,
}

impl SolveResult {
    fn trivial() -> Self {
        Self {
            converged: true,
            iterations: 0,
            final_distance: 0.0,
        }
    }
}

/// FABRIK position solver for an [`IkChain`], anchored at the chain base.
#[derive(Debug, Clone)]
pub struct InverseKinematics {
    chain: IkChain,
    max_iterations: u32,
}

impl InverseKinematics {
    pub fn new(chain: IkChain) -> Self {
        Self {
            chain,
            max_iterations: 10,
        }
    }

    pub fn max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    pub fn chain(&self) -> &IkChain {
        &self.chain
    }

    pub fn into_chain(self) -> IkChain {
        self.chain
    }

    pub fn solve(&mut self, constraint: &PositionConstraint) -> SolveResult {
        match self.chain.base() {
            Some(base) => self.solve_anchored(constraint, base),
            None => SolveResult::trivial(),
        }
    }

    pub fn solve_anchored(&mut self, constraint: &PositionConstraint, base: Vec3) -> SolveResult {
        if self.chain.joints.len() < 2 {
            return SolveResult::trivial();
        }

        let target = constraint.target;
        let reach = self.chain.total_length();
        let distance_to_target = (target - base).length();

        if distance_to_target > reach {
            self.stretch_towards(base, target);
            let final_distance = self.distance_to(target);
            log::debug!("target {target} out of reach by {final_distance}");
            return SolveResult {
                converged: false,
                iterations: 1,
                final_distance,
            };
        }

        for iteration in 0..self.max_iterations {
            self.forward_pass(target);
            self.backward_pass(base);

            let distance = self.distance_to(target);
            if distance <= constraint.tolerance {
                return SolveResult {
                    converged: true,
                    iterations: iteration + 1,
                    final_distance: distance,
                };
            }
        }

        let final_distance = self.distance_to(target);
        SolveResult {
            converged: final_distance <= constraint.tolerance,
            iterations: self.max_iterations,
            final_distance,
        }
    }

    fn distance_to(&self, target: Vec3) -> f32 {
        self.chain
            .end_effector()
            .map_or(0.0, |end| (end - target).length())
    }

    /// Tip to base: pin the end effector on the target.
    fn forward_pass(&mut self, target: Vec3) {
        let joints = &mut self.chain.joints;
        let n = joints.len();
        joints[n - 1].position = target;

        for i in (0..n - 1).rev() {
            let next = joints[i + 1].position;
            let direction = (joints[i].position - next).try_normalize().unwrap_or(Vec3::Y);
            joints[i].position = next + direction * self.chain.bone_lengths[i];
        }
    }

    /// Base to tip: pin the base and apply joint direction constraints.
    fn backward_pass(&mut self, base: Vec3) {
        let base_direction = self.chain.base_direction;
        let joints = &mut self.chain.joints;
        joints[0].position = base;

        for i in 1..joints.len() {
            let prev = joints[i - 1].position;
            let reference = if i >= 2 {
                (prev - joints[i - 2].position).normalize_or_zero()
            } else {
                base_direction
            };
            let raw = (joints[i].position - prev).try_normalize().unwrap_or(reference);
            let direction = joints[i - 1].constrain(raw, reference);
            joints[i].position = prev + direction * self.chain.bone_lengths[i - 1];
        }
    }

    fn stretch_towards(&mut self, base: Vec3, target: Vec3) {
        let Some(direction) = (target - base).try_normalize() else {
            return;
        };
        let joints = &mut self.chain.joints;
        joints[0].position = base;
        for i in 1..joints.len() {
            joints[i].position = joints[i - 1].position + direction * self.chain.bone_lengths[i - 1];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inverse_kinematics::ConeConstraint;
    use approx::assert_relative_eq;

    fn straight_chain() -> IkChain {
        IkChain::builder()
            .joint(Vec3::ZERO)
            .joint(Vec3::new(0.0, 1.0, 0.0))
            .joint(Vec3::new(0.0, 2.0, 0.0))
            .joint(Vec3::new(0.0, 3.0, 0.0))
            .build()
    }

    fn assert_bone_lengths_kept(ik: &InverseKinematics, expected: &[f32]) {
        let positions: Vec<_> = ik.chain().positions().collect();
        for (pair, length) in positions.windows(2).zip(expected) {
            assert_relative_eq!((pair[1] - pair[0]).length(), *length, epsilon = 1e-4);
        }
    }

    #[test]
    fn reaches_target_within_tolerance() {
        let mut ik = InverseKinematics::new(straight_chain()).max_iterations(50);
        let constraint = PositionConstraint::new(Vec3::new(1.5, 1.5, 0.0));
        let result = ik.solve(&constraint);

        assert!(result.converged);
        assert!(constraint.is_satisfied_by(ik.chain().end_effector().unwrap()));
        assert_eq!(ik.chain().base(), Some(Vec3::ZERO));
        assert_bone_lengths_kept(&ik, &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn unreachable_target_stretches_chain() {
        let mut ik = InverseKinematics::new(straight_chain());
        let result = ik.solve(&PositionConstraint::new(Vec3::new(10.0, 0.0, 0.0)));

        assert!(!result.converged);
        assert_relative_eq!(result.final_distance, 7.0, epsilon = 1e-5);
        assert!(ik.chain().end_effector().unwrap().abs_diff_eq(Vec3::new(3.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn cone_limits_first_bone() {
        let chain = IkChain::builder()
            .constrained_joint(Vec3::ZERO, ConeConstraint::from_degrees(10.0))
            .joint(Vec3::Y)
            .joint(Vec3::Y * 2.0)
            .build();
        let mut ik = InverseKinematics::new(chain).max_iterations(20);
        ik.solve(&PositionConstraint::new(Vec3::new(1.5, 0.5, 0.0)));

        let first_bone = ik.chain().joints()[1].position - ik.chain().joints()[0].position;
        assert!(first_bone.angle_between(Vec3::Y) <= 10f32.to_radians() + 1e-4);
    }

    #[test]
    fn short_chains_are_trivially_solved() {
        let mut ik = InverseKinematics::new(IkChain::builder().joint(Vec3::ZERO).build());
        let result = ik.solve(&PositionConstraint::new(Vec3::X));
        assert!(result.converged);
        assert_eq!(result.iterations, 0);
    }
}
