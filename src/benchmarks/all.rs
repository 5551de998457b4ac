//! Every benchmark model under one namespace.

use std::sync::OnceLock;

pub use super::acrobot::{make_acrobot_tree, AcrobotParameters};
pub use super::mass_damper_spring::{BenchmarkError, MassDamperSpringAnalyticalSolution};

use crate::namespace::{
    AggregationError, Aggregator, AggregatorConfig, ModuleCatalog, Namespace, WarningCategory,
};

pub const MODULES: [&str; 2] = ["acrobot", "mass_damper_spring"];

pub fn catalog() -> ModuleCatalog {
    ModuleCatalog::new()
        .with(super::acrobot_module())
        .with(super::mass_damper_spring_module())
}

pub fn config() -> AggregatorConfig {
    AggregatorConfig::builder("benchmarks")
        .modules(MODULES)
        .suppress(WarningCategory::Deprecation)
        .build()
}

pub fn aggregator() -> Aggregator {
    Aggregator::new(config(), catalog())
}

/// Builds a fresh benchmarks namespace.
pub fn load() -> Result<Namespace, AggregationError> {
    aggregator().aggregate()
}

/// The process-wide benchmarks namespace, built on first use.
pub fn namespace() -> Result<&'static Namespace, AggregationError> {
    static NAMESPACE: OnceLock<Result<Namespace, AggregationError>> = OnceLock::new();
    NAMESPACE.get_or_init(load).as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn benchmarks_namespace_lists_both_models() {
        let ns = namespace().unwrap();
        assert_eq!(ns.modules(), MODULES);
        assert_eq!(ns.provider("AcrobotParameters"), Some("acrobot"));
        assert_eq!(
            ns.provider("MassDamperSpringAnalyticalSolution"),
            Some("mass_damper_spring")
        );
        assert!(ns.warnings().is_empty());
    }
}
