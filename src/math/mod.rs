//! Math utilities module
//!
//! Rigid transforms, spatial vectors, and re-exports of the glam types they
//! are built on.

mod rigid_transform;
mod spatial;

pub use rigid_transform::RigidTransform;
pub use spatial::{SpatialAcceleration, SpatialForce, SpatialMomentum, SpatialVelocity};

// Re-export commonly used glam types
pub use glam::{Mat4, Quat, Vec3, Vec4};

use crate::namespace::{capability_exports, StaticModule};

capability_exports! {
    type RigidTransform;
    type SpatialVelocity;
    type SpatialAcceleration;
    type SpatialForce;
    type SpatialMomentum;
    type Vec3;
    type Vec4;
    type Quat;
    type Mat4;
}

pub fn module() -> StaticModule {
    StaticModule::new("math", exports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::{Definition, LoadContext};
    use crate::CapabilityModule;

    #[test]
    fn manifest_lists_glam_reexports() {
        let exports = module().load(&mut LoadContext::new()).unwrap();
        let find = |name: &str| exports.iter().find(|e| e.name == name).copied();

        assert_eq!(find("Vec3").unwrap().definition, Definition::of_type::<glam::Vec3>());
        assert_eq!(find("Vec4").unwrap().definition, Definition::of_type::<glam::Vec4>());
        assert_eq!(find("Quat").unwrap().definition, Definition::of_type::<glam::Quat>());
        assert_eq!(find("Mat4").unwrap().definition, Definition::of_type::<glam::Mat4>());
        assert_eq!(exports.len(), 9);
    }
}
