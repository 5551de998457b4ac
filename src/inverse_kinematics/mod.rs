//! Inverse kinematics module
//!
//! Serial joint chains and a FABRIK position solver that honours per-joint
//! direction constraints.

mod chain;
mod constraint;
mod from_tree;
mod solver;

pub use chain::{ChainJoint, IkChain, IkChainBuilder};
pub use constraint::{ConeConstraint, DirectionConstraint, Unconstrained};
pub use from_tree::chain_from_tree;
pub use solver::{InverseKinematics, PositionConstraint, SolveResult};

use crate::namespace::{capability_exports, StaticModule};

capability_exports! {
    type ChainJoint;
    type IkChain;
    type IkChainBuilder;
    trait DirectionConstraint;
    type ConeConstraint;
    type Unconstrained;
    type InverseKinematics;
    type PositionConstraint;
    type SolveResult;
    fn chain_from_tree;
}

pub fn module() -> StaticModule {
    StaticModule::new("inverse_kinematics", exports)
}
