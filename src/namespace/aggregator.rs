use std::collections::btree_map::{self, BTreeMap};
use std::collections::HashSet;

use super::config::{AggregatorConfig, CollisionPolicy};
use super::error::{AggregationError, ConfigurationError, ModuleError, Result, SymbolCollisionError};
use super::export_set::{Entry, Namespace};
use super::module::{CapabilityModule, ModuleCatalog};
use super::symbol::Export;
use super::warnings::LoadContext;

/// Unions the exports of the configured modules into one [`Namespace`].
#[derive(Debug, Clone)]
pub struct Aggregator {
    config: AggregatorConfig,
    catalog: ModuleCatalog,
}

impl Aggregator {
    pub fn new(config: AggregatorConfig, catalog: ModuleCatalog) -> Self {
        Self { config, catalog }
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ModuleCatalog {
        &self.catalog
    }

    pub fn aggregate(&self) -> Result<Namespace> {
        let mut ctx = LoadContext::new();
        let namespace = self.aggregate_in(&mut ctx)?;
        log::info!(
            "aggregated `{}`: {} symbols from {} modules ({} warnings suppressed)",
            namespace.name(),
            namespace.len(),
            namespace.modules().len(),
            namespace.suppressed_warnings().len()
        );
        Ok(namespace)
    }

    /// Aggregate inside an existing load context.
    ///
    /// The configured warning filter is active only for the duration of this
    /// call. Warnings already recorded in `ctx` are not carried into the
    /// returned namespace.
    pub fn aggregate_in(&self, ctx: &mut LoadContext) -> Result<Namespace> {
        let surfaced_before = ctx.surfaced().len();
        let suppressed_before = ctx.suppressed().len();

        let (entries, modules) = ctx.scoped(&self.config.suppress, |ctx| self.collect(ctx))?;

        Ok(Namespace::new(
            self.config.name.clone(),
            entries,
            modules,
            ctx.surfaced()[surfaced_before..].to_vec(),
            ctx.suppressed()[suppressed_before..].to_vec(),
        ))
    }

    fn collect(
        &self,
        ctx: &mut LoadContext,
    ) -> Result<(BTreeMap<&'static str, Entry>, Vec<String>)> {
        let mut seen = HashSet::new();
        let mut loaded = Vec::with_capacity(self.config.modules.len());

        for name in &self.config.modules {
            if !seen.insert(name.as_str()) {
                return Err(ConfigurationError::DuplicateModule {
                    module: name.clone(),
                }
                .into());
            }

            let module = self
                .catalog
                .find(name)
                .ok_or_else(|| ConfigurationError::ModuleNotFound {
                    module: name.clone(),
                })?;

            let exports = module
                .load(ctx)
                .map_err(|source| ConfigurationError::ModuleFailed {
                    module: name.clone(),
                    source,
                })?;

            log::debug!("loaded `{name}` with {} exports", exports.len());
            loaded.push((name.clone(), exports));
        }

        // Every module loads before anything merges, so a broken module is
        // reported ahead of collisions that involve it.
        let mut entries = BTreeMap::new();
        for (module, exports) in &loaded {
            for export in exports {
                self.merge(&mut entries, module, *export)?;
            }
        }

        let modules = loaded.into_iter().map(|(name, _)| name).collect();
        Ok((entries, modules))
    }

    fn merge(
        &self,
        entries: &mut BTreeMap<&'static str, Entry>,
        module: &str,
        export: Export,
    ) -> Result<()> {
        match entries.entry(export.name) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(Entry {
                    export,
                    provider: module.to_string(),
                    also_provided_by: Vec::new(),
                });
            }
            btree_map::Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                if existing.export.binds_same_item(&export) {
                    if existing.provider != module {
                        existing.also_provided_by.push(module.to_string());
                    }
                    return Ok(());
                }

                match self.config.policy {
                    CollisionPolicy::Strict => {
                        return Err(SymbolCollisionError {
                            symbol: export.name.to_string(),
                            first_module: existing.provider.clone(),
                            first_definition: existing.export.definition,
                            second_module: module.to_string(),
                            second_definition: export.definition,
                        }
                        .into());
                    }
                    CollisionPolicy::LastWins => {
                        log::debug!(
                            "`{}` from `{}` overrides the binding from `{}`",
                            export.name,
                            module,
                            existing.provider
                        );
                        *existing = Entry {
                            export,
                            provider: module.to_string(),
                            also_provided_by: Vec::new(),
                        };
                    }
                }
            }
        }
        Ok(())
    }
}

/// Nested aggregators are consumed like any other capability module.
impl CapabilityModule for Aggregator {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn load(&self, ctx: &mut LoadContext) -> std::result::Result<Vec<Export>, ModuleError> {
        let namespace = self
            .aggregate_in(ctx)
            .map_err(|err| ModuleError::new(nested_failure(&err)))?;
        Ok(namespace.iter().map(|(_, entry)| entry.export).collect())
    }
}

fn nested_failure(err: &AggregationError) -> String {
    match err {
        AggregationError::Configuration(inner) => format!("nested aggregation failed: {inner}"),
        AggregationError::SymbolCollision(inner) => format!("nested collision: {inner}"),
    }
}
