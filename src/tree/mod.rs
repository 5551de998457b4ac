//! Kinematic tree module
//!
//! Rigid bodies, the joints connecting them, and typed indices into a
//! [`KinematicTree`].

mod body;
mod index;
mod joint;
mod kinematic_tree;

#[allow(deprecated)]
pub use body::{Body, RigidBody};
pub use index::{
    default_model_instance, world_index, world_model_instance, BodyIndex, JointIndex,
    ModelInstanceIndex,
};
pub use joint::{Joint, JointType};
pub use kinematic_tree::{KinematicTree, TreeError};

use crate::namespace::{capability_exports, StaticModule};

capability_exports! {
    type BodyIndex;
    type JointIndex;
    type ModelInstanceIndex;
    fn world_index;
    fn world_model_instance;
    fn default_model_instance;
    type RigidBody;
    #[deprecated = "use RigidBody"] type Body;
    type Joint;
    type JointType;
    type KinematicTree;
    type TreeError;
}

pub fn module() -> StaticModule {
    StaticModule::new("tree", exports)
}
