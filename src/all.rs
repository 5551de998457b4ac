//! The unified multibody namespace.
//!
//! Every capability module's public items are re-exported here by name, so
//! callers can write `use multibody::all::*` without knowing which module
//! owns what. The same surface is available at runtime through
//! [`namespace`], which also records where each symbol came from.

use std::sync::OnceLock;

use crate::namespace::{
    AggregationError, Aggregator, AggregatorConfig, ModuleCatalog, Namespace, WarningCategory,
};

pub use crate::inverse_kinematics::{
    chain_from_tree, ChainJoint, ConeConstraint, DirectionConstraint, IkChain, IkChainBuilder,
    InverseKinematics, PositionConstraint, SolveResult, Unconstrained,
};

pub use crate::fem::{DeformableBodyConfig, FemError, MaterialModel};

pub use crate::math::{
    Mat4, Quat, RigidTransform, SpatialAcceleration, SpatialForce, SpatialMomentum,
    SpatialVelocity, Vec3, Vec4,
};

pub use crate::meshcat::{
    segment_transform, ArrowInstance, ContactVisualizer, ContactVisualizerParams, JointSliders,
    PointContact, Rgba, Slider, SliderError,
};

pub use crate::optimization::{
    uniform_grid_points, CalcGridPointsOptions, ContactWrench, ToppraDiscretization,
};

pub use crate::parsing::{ModelInstanceInfo, PackageMap, ParseError, ScopedName};

pub use crate::plant::{
    ContactModel, ContactSurfaceRepresentation, CoulombFriction, DiscreteContactApproximation,
    MultibodyPlantConfig, PlantError,
};

#[allow(deprecated)]
pub use crate::tree::Body;
pub use crate::tree::{
    default_model_instance, world_index, world_model_instance, BodyIndex, Joint, JointIndex,
    JointType, KinematicTree, ModelInstanceIndex, RigidBody, TreeError,
};

pub use crate::benchmarks::all::{
    make_acrobot_tree, AcrobotParameters, BenchmarkError, MassDamperSpringAnalyticalSolution,
};

/// Aggregated modules, in load order.
pub const MODULES: [&str; 9] = [
    "inverse_kinematics",
    "fem",
    "math",
    "meshcat",
    "optimization",
    "parsing",
    "plant",
    "tree",
    "benchmarks",
];

pub fn catalog() -> ModuleCatalog {
    ModuleCatalog::new()
        .with(crate::inverse_kinematics::module())
        .with(crate::fem::module())
        .with(crate::math::module())
        .with(crate::meshcat::module())
        .with(crate::optimization::module())
        .with(crate::parsing::module())
        .with(crate::plant::module())
        .with(crate::tree::module())
        .with(crate::benchmarks::all::aggregator())
}

/// Strict collisions; deprecation notices are silenced while aggregating only.
pub fn config() -> AggregatorConfig {
    AggregatorConfig::builder("multibody")
        .modules(MODULES)
        .suppress(WarningCategory::Deprecation)
        .build()
}

/// Builds a fresh namespace. Each call yields an equal result.
pub fn load() -> Result<Namespace, AggregationError> {
    Aggregator::new(config(), catalog()).aggregate()
}

/// The process-wide namespace, built exactly once on first use.
///
/// A failed build is kept and returned to every caller; it is not retried.
pub fn namespace() -> Result<&'static Namespace, AggregationError> {
    static NAMESPACE: OnceLock<Result<Namespace, AggregationError>> = OnceLock::new();
    NAMESPACE.get_or_init(load).as_ref().map_err(Clone::clone)
}
