use std::collections::btree_map::{self, BTreeMap};

use super::error::ModuleError;
use super::module::CapabilityModule;
use super::symbol::Export;
use super::warnings::{LoadContext, Warning, WarningCategory};

/// A resolved binding in a [`Namespace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub export: Export,
    pub provider: String,
    /// Later modules that re-exported the same item under the same name.
    pub also_provided_by: Vec<String>,
}

/// The Export Set: every symbol reachable through an aggregated namespace.
///
/// Built once by [`Aggregator::aggregate`](super::Aggregator::aggregate) and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    name: String,
    entries: BTreeMap<&'static str, Entry>,
    modules: Vec<String>,
    warnings: Vec<Warning>,
    suppressed: Vec<Warning>,
}

impl Namespace {
    pub(crate) fn new(
        name: String,
        entries: BTreeMap<&'static str, Entry>,
        modules: Vec<String>,
        warnings: Vec<Warning>,
        suppressed: Vec<Warning>,
    ) -> Self {
        Self {
            name,
            entries,
            modules,
            warnings,
            suppressed,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, symbol: &str) -> Option<&Export> {
        self.entries.get(symbol).map(|entry| &entry.export)
    }

    pub fn entry(&self, symbol: &str) -> Option<&Entry> {
        self.entries.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    /// Module whose binding the namespace resolved `symbol` to.
    pub fn provider(&self, symbol: &str) -> Option<&str> {
        self.entries.get(symbol).map(|entry| entry.provider.as_str())
    }

    /// Symbol names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, &'static str, Entry> {
        self.entries.iter()
    }

    pub fn exports_from<'a>(&'a self, module: &'a str) -> impl Iterator<Item = &'a Export> + 'a {
        self.entries
            .values()
            .filter(move |entry| entry.provider == module)
            .map(|entry| &entry.export)
    }

    /// Aggregated modules in load order.
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Warnings raised during aggregation that no filter silenced.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn suppressed_warnings(&self) -> &[Warning] {
        &self.suppressed
    }
}

impl<'a> IntoIterator for &'a Namespace {
    type Item = (&'a &'static str, &'a Entry);
    type IntoIter = btree_map::Iter<'a, &'static str, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A built namespace can be aggregated again as an ordinary module.
impl CapabilityModule for Namespace {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self, ctx: &mut LoadContext) -> Result<Vec<Export>, ModuleError> {
        for entry in self.entries.values() {
            if let Some(note) = entry.export.deprecation {
                ctx.warn(Warning::new(
                    WarningCategory::Deprecation,
                    self.name.as_str(),
                    format!("`{}` is deprecated: {note}", entry.export.name),
                ));
            }
        }
        Ok(self.entries.values().map(|entry| entry.export).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::{
        Aggregator, AggregatorConfig, Definition, ModuleCatalog, StaticModule, SymbolKind,
    };

    fn legacy_namespace() -> Namespace {
        let legacy = StaticModule::new("legacy", || {
            vec![
                Export::new("New", Definition::new(SymbolKind::Type, "legacy::New")),
                Export::new("Old", Definition::new(SymbolKind::Type, "legacy::New"))
                    .deprecated("use New"),
            ]
        });
        let config = AggregatorConfig::builder("inner")
            .module("legacy")
            .suppress(WarningCategory::Deprecation)
            .build();
        Aggregator::new(config, ModuleCatalog::new().with(legacy))
            .aggregate()
            .unwrap()
    }

    #[test]
    fn loading_a_namespace_reports_its_deprecations() {
        let ns = legacy_namespace();
        assert!(ns.warnings().is_empty());

        let mut ctx = LoadContext::new();
        let exports = ns.load(&mut ctx).unwrap();
        assert_eq!(exports.len(), 2);
        assert_eq!(ctx.surfaced().len(), 1);
        assert_eq!(ctx.surfaced()[0].category, WarningCategory::Deprecation);
        assert_eq!(ctx.surfaced()[0].module, "inner");
        assert!(ctx.surfaced()[0].message.contains("Old"));
    }

    #[test]
    fn reaggregation_keeps_deprecations_under_the_outer_filter() {
        let config = AggregatorConfig::builder("outer")
            .module("inner")
            .suppress(WarningCategory::Deprecation)
            .build();
        let outer = Aggregator::new(config, ModuleCatalog::new().with(legacy_namespace()))
            .aggregate()
            .unwrap();
        assert!(outer.warnings().is_empty());
        assert_eq!(outer.suppressed_warnings().len(), 1);
        assert!(outer.get("Old").unwrap().is_deprecated());
    }
}
