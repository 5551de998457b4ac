//! # multibody
//!
//! One namespace over the multibody toolbox: inverse kinematics, kinematic
//! trees, rigid-body math, plant and deformable-body configuration,
//! optimization data, model parsing helpers, visualization, and benchmark
//! models.
//!
//! ## Modules
//! - [`all`]: every capability re-exported under one flat namespace
//! - [`namespace`]: the aggregation machinery behind [`all::namespace`]
//! - one module per capability, usable on its own
//!
//! ## Example
//! ```rust,ignore
//! use multibody::all::{IkChain, InverseKinematics, PositionConstraint};
//! use glam::Vec3;
//!
//! let chain = IkChain::builder()
//!     .joint(Vec3::ZERO)
//!     .joint(Vec3::Y)
//!     .joint(Vec3::new(0.0, 2.0, 0.0))
//!     .build();
//! let mut ik = InverseKinematics::new(chain).max_iterations(20);
//! let result = ik.solve(&PositionConstraint::new(Vec3::new(1.0, 1.0, 0.0)));
//!
//! let ns = multibody::all::namespace()?;
//! assert_eq!(ns.provider("InverseKinematics"), Some("inverse_kinematics"));
//! ```

pub mod all;
pub mod benchmarks;
pub mod fem;
pub mod inverse_kinematics;
pub mod math;
pub mod meshcat;
pub mod namespace;
pub mod optimization;
pub mod parsing;
pub mod plant;
pub mod tree;

pub use namespace::{
    AggregationError, Aggregator, AggregatorConfig, CapabilityModule, CollisionPolicy,
    ConfigurationError, Export, ModuleCatalog, Namespace, SymbolCollisionError, WarningCategory,
};
