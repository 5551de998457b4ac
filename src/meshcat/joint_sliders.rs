use thiserror::Error;

use crate::tree::{JointType, KinematicTree};

/// Range used for a slider whose joint limit is infinite.
const DEFAULT_RANGE: f32 = 10.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliderError {
    #[error("expected {expected} slider values, got {actual}")]
    Count { expected: usize, actual: usize },

    #[error("no slider named `{0}`")]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub name: String,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub value: f32,
}

impl Slider {
    fn set(&mut self, value: f32) {
        self.value = value.clamp(self.min, self.max);
    }
}

/// One slider per joint coordinate, in position-vector order.
#[derive(Debug, Clone, PartialEq)]
pub struct JointSliders {
    sliders: Vec<Slider>,
}

impl JointSliders {
    pub fn new(tree: &KinematicTree, step: f32) -> Self {
        let mut joints: Vec<_> = tree
            .joints()
            .iter()
            .filter(|j| !matches!(j.kind, JointType::Weld))
            .collect();
        joints.sort_by_key(|j| j.position_start);

        let sliders = joints
            .into_iter()
            .map(|joint| {
                let min = finite_or(joint.position_lower_limit, -DEFAULT_RANGE);
                let max = finite_or(joint.position_upper_limit, DEFAULT_RANGE);
                Slider {
                    name: joint.name.clone(),
                    min,
                    max,
                    step,
                    value: 0.0f32.clamp(min, max),
                }
            })
            .collect();
        Self { sliders }
    }

    pub fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    pub fn positions(&self) -> Vec<f32> {
        self.sliders.iter().map(|s| s.value).collect()
    }

    /// Sets every slider, clamping each value into its range.
    pub fn set_positions(&mut self, q: &[f32]) -> Result<(), SliderError> {
        if q.len() != self.sliders.len() {
            return Err(SliderError::Count {
                expected: self.sliders.len(),
                actual: q.len(),
            });
        }
        for (slider, value) in self.sliders.iter_mut().zip(q) {
            slider.set(*value);
        }
        Ok(())
    }

    pub fn set(&mut self, name: &str, value: f32) -> Result<f32, SliderError> {
        let slider = self
            .sliders
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| SliderError::Unknown(name.to_string()))?;
        slider.set(value);
        Ok(slider.value)
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::RigidTransform;
    use crate::tree::{default_model_instance, world_index};
    use glam::Vec3;

    fn tree() -> KinematicTree {
        let mut tree = KinematicTree::new();
        let cart = tree.add_rigid_body("cart", default_model_instance()).unwrap();
        let pole = tree.add_rigid_body("pole", default_model_instance()).unwrap();
        let tip = tree.add_rigid_body("tip", default_model_instance()).unwrap();
        let slide = tree
            .add_joint(
                "slide",
                world_index(),
                cart,
                JointType::Prismatic { axis: Vec3::X },
                RigidTransform::IDENTITY,
            )
            .unwrap();
        tree.add_joint(
            "hinge",
            cart,
            pole,
            JointType::Revolute { axis: Vec3::Y },
            RigidTransform::IDENTITY,
        )
        .unwrap();
        tree.add_joint("weld", pole, tip, JointType::Weld, RigidTransform::IDENTITY)
            .unwrap();
        tree.set_position_limits(slide, 0.5, 2.0).unwrap();
        tree
    }

    #[test]
    fn one_slider_per_coordinate() {
        let sliders = JointSliders::new(&tree(), 0.01);
        let names: Vec<_> = sliders.sliders().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["slide", "hinge"]);
        assert_eq!(sliders.sliders()[1].min, -DEFAULT_RANGE);
        assert_eq!(sliders.positions(), [0.5, 0.0]);
    }

    #[test]
    fn values_are_clamped() {
        let mut sliders = JointSliders::new(&tree(), 0.01);
        sliders.set_positions(&[5.0, -20.0]).unwrap();
        assert_eq!(sliders.positions(), [2.0, -10.0]);
        assert_eq!(sliders.set("hinge", 1.5), Ok(1.5));
        assert!(sliders.set("elbow", 0.0).is_err());
        assert_eq!(
            sliders.set_positions(&[0.0]),
            Err(SliderError::Count {
                expected: 2,
                actual: 1
            })
        );
    }
}
