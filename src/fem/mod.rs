//! Finite-element module
//!
//! Material and damping parameters for deformable bodies. The formulation
//! itself lives with the simulator; this module only validates and derives
//! the parameters it consumes.

mod config;

pub use config::{DeformableBodyConfig, FemError, MaterialModel};

use crate::namespace::{capability_exports, StaticModule};

capability_exports! {
    type DeformableBodyConfig;
    type MaterialModel;
    type FemError;
}

pub fn module() -> StaticModule {
    StaticModule::new("fem", exports)
        .experimental("deformable body support is experimental and may change without deprecation")
}
