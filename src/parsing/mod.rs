//! Parsing module
//!
//! Package lookup and scoped names used while loading model files.

mod package_map;
mod scoped_name;

use std::path::PathBuf;

use thiserror::Error;

pub use package_map::PackageMap;
pub use scoped_name::ScopedName;

use crate::math::RigidTransform;
use crate::namespace::{capability_exports, StaticModule};
use crate::tree::ModelInstanceIndex;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown package `{0}`")]
    UnknownPackage(String),

    #[error("invalid package name `{0}`")]
    InvalidPackageName(String),

    #[error("package `{name}` is already registered at {existing:?}, not {requested:?}")]
    ConflictingPackage {
        name: String,
        existing: PathBuf,
        requested: PathBuf,
    },

    #[error("unsupported url `{0}`")]
    UnsupportedUrl(String),

    #[error("invalid scoped name `{0}`")]
    InvalidScopedName(String),
}

/// Where a loaded model was attached in the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInstanceInfo {
    pub model_name: String,
    pub model_path: PathBuf,
    pub parent_frame_name: ScopedName,
    pub child_frame_name: ScopedName,
    pub frame_on_parent: RigidTransform,
    pub model_instance: ModelInstanceIndex,
}

capability_exports! {
    type PackageMap;
    type ScopedName;
    type ModelInstanceInfo;
    type ParseError;
}

pub fn module() -> StaticModule {
    StaticModule::new("parsing", exports)
}
