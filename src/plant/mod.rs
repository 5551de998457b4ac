//! Multibody plant module
//!
//! Plant configuration, contact options, and surface friction.

mod config;
mod contact;

pub use config::MultibodyPlantConfig;
pub use contact::{
    ContactModel, ContactSurfaceRepresentation, CoulombFriction, DiscreteContactApproximation,
};
pub use crate::tree::ModelInstanceIndex;

use thiserror::Error;

use crate::namespace::{capability_exports, StaticModule};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlantError {
    #[error("unknown {option} `{value}`")]
    UnknownOption { option: &'static str, value: String },

    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("invalid friction: static {static_friction} must be >= dynamic {dynamic_friction} >= 0")]
    InvalidFriction {
        static_friction: f64,
        dynamic_friction: f64,
    },

    #[error("a discrete contact approximation requires a positive time step")]
    ContinuousApproximation,
}

capability_exports! {
    type MultibodyPlantConfig;
    type ContactModel;
    type ContactSurfaceRepresentation;
    type DiscreteContactApproximation;
    type CoulombFriction;
    type PlantError;
    type ModelInstanceIndex;
}

pub fn module() -> StaticModule {
    StaticModule::new("plant", exports)
}
