//! Namespace aggregation
//!
//! Capability modules publish an explicit manifest of their public symbols.
//! An [`Aggregator`] unions the manifests of a configured, ordered list of
//! modules into an immutable [`Namespace`], rejecting ambiguous names and
//! keeping load-time warning suppression scoped to the aggregation step.

mod aggregator;
mod config;
mod error;
mod export_set;
mod module;
mod symbol;
mod warnings;

pub use aggregator::Aggregator;
pub use config::{AggregatorConfig, AggregatorConfigBuilder, CollisionPolicy};
pub use error::{AggregationError, ConfigurationError, ModuleError, Result, SymbolCollisionError};
pub use export_set::{Entry, Namespace};
pub use module::{CapabilityModule, ModuleCatalog, StaticModule};
pub use symbol::{Definition, Export, SymbolKind};
pub use warnings::{LoadContext, Warning, WarningCategory, WarningFilter};

pub(crate) use module::capability_exports;
