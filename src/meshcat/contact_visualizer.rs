use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use super::color::Rgba;

#[derive(Debug, Clone, PartialEq)]
pub struct ContactVisualizerParams {
    pub publish_period: f64,
    pub color: Rgba,
    /// Radius of the arrow shaft, in meters.
    pub radius: f32,
    /// Arrow length per unit force.
    pub newtons_per_meter: f32,
    /// Contacts with smaller force magnitude are not drawn.
    pub force_threshold: f32,
    pub prefix: String,
    pub delete_on_initialization_event: bool,
}

impl Default for ContactVisualizerParams {
    fn default() -> Self {
        Self {
            publish_period: 1.0 / 64.0,
            color: Rgba::RED,
            radius: 0.001,
            newtons_per_meter: 10.0,
            force_threshold: 0.01,
            prefix: String::from("contact_forces"),
            delete_on_initialization_event: true,
        }
    }
}

/// Force transmitted between two named bodies at a point, in world.
#[derive(Debug, Clone, PartialEq)]
pub struct PointContact {
    pub body_a: String,
    pub body_b: String,
    pub point: Vec3,
    pub force: Vec3,
}

/// One instanced unit cylinder, laid out for direct upload to a viewer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ArrowInstance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

#[derive(Debug, Clone, Default)]
pub struct ContactVisualizer {
    params: ContactVisualizerParams,
}

impl ContactVisualizer {
    pub fn new(params: ContactVisualizerParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ContactVisualizerParams {
        &self.params
    }

    /// Scene path under which the arrow for `contact` is published.
    pub fn path(&self, contact: &PointContact) -> String {
        format!("{}/{}+{}", self.params.prefix, contact.body_a, contact.body_b)
    }

    /// Arrows for every contact whose force reaches the threshold.
    pub fn arrows(&self, contacts: &[PointContact]) -> Vec<ArrowInstance> {
        let color = self.params.color.to_array();
        contacts
            .iter()
            .filter(|c| c.force.length() >= self.params.force_threshold)
            .map(|c| {
                let end = c.point + c.force / self.params.newtons_per_meter;
                let shaft = Mat4::from_scale(Vec3::new(self.params.radius, 1.0, self.params.radius));
                ArrowInstance {
                    model: (segment_transform(c.point, end) * shaft).to_cols_array_2d(),
                    color,
                }
            })
            .collect()
    }

    pub fn instance_bytes(instances: &[ArrowInstance]) -> &[u8] {
        bytemuck::cast_slice(instances)
    }
}

/// Maps the unit Y-aligned cylinder centred at the origin onto `start..end`.
pub fn segment_transform(start: Vec3, end: Vec3) -> Mat4 {
    let direction = end - start;
    let length = direction.length();

    if length < 0.0001 {
        return Mat4::from_translation(start);
    }

    let up = direction / length;
    let right = if up.y.abs() < 0.999 {
        Vec3::Y.cross(up).normalize()
    } else {
        Vec3::X.cross(up).normalize()
    };
    let forward = up.cross(right);
    let center = (start + end) / 2.0;

    Mat4::from_cols(
        right.extend(0.0),
        (up * length).extend(0.0),
        forward.extend(0.0),
        center.extend(1.0),
    )
}
