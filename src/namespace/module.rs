use std::fmt;
use std::sync::Arc;

use super::error::ModuleError;
use super::symbol::Export;
use super::warnings::{LoadContext, Warning, WarningCategory};

/// A unit that exposes an enumerable list of public symbols.
pub trait CapabilityModule: Send + Sync {
    fn name(&self) -> &str;

    /// Produce the module's exports, reporting any load-time warnings to `ctx`.
    fn load(&self, ctx: &mut LoadContext) -> Result<Vec<Export>, ModuleError>;
}

impl fmt::Debug for dyn CapabilityModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityModule")
            .field("name", &self.name())
            .finish()
    }
}

/// Capability module backed by a compiled manifest.
#[derive(Clone)]
pub struct StaticModule {
    name: &'static str,
    exports: fn() -> Vec<Export>,
    experimental: Option<&'static str>,
}

impl StaticModule {
    pub const fn new(name: &'static str, exports: fn() -> Vec<Export>) -> Self {
        Self {
            name,
            exports,
            experimental: None,
        }
    }

    pub const fn experimental(mut self, note: &'static str) -> Self {
        self.experimental = Some(note);
        self
    }
}

impl CapabilityModule for StaticModule {
    fn name(&self) -> &str {
        self.name
    }

    fn load(&self, ctx: &mut LoadContext) -> Result<Vec<Export>, ModuleError> {
        if let Some(note) = self.experimental {
            ctx.warn(Warning::new(WarningCategory::Experimental, self.name, note));
        }

        let exports = (self.exports)();
        for export in exports.iter().filter(|e| e.is_deprecated()) {
            let note = export.deprecation.unwrap_or_default();
            ctx.warn(Warning::new(
                WarningCategory::Deprecation,
                self.name,
                format!("`{}` is deprecated: {note}", export.name),
            ));
        }
        Ok(exports)
    }
}

impl fmt::Debug for StaticModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticModule")
            .field("name", &self.name)
            .field("experimental", &self.experimental.is_some())
            .finish()
    }
}

/// Modules available to an aggregator, looked up by name.
#[derive(Clone, Default)]
pub struct ModuleCatalog {
    modules: Vec<Arc<dyn CapabilityModule>>,
}

impl ModuleCatalog {
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Registers `module`, replacing any module already registered under its name.
    pub fn register<M: CapabilityModule + 'static>(&mut self, module: M) {
        self.register_shared(Arc::new(module));
    }

    pub fn register_shared(&mut self, module: Arc<dyn CapabilityModule>) {
        self.modules.retain(|m| m.name() != module.name());
        self.modules.push(module);
    }

    pub fn with<M: CapabilityModule + 'static>(mut self, module: M) -> Self {
        self.register(module);
        self
    }

    pub fn find(&self, name: &str) -> Option<&Arc<dyn CapabilityModule>> {
        self.modules.iter().find(|m| m.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.modules.iter().map(|m| m.name())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl fmt::Debug for ModuleCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Declares the manifest of a capability module as `exports()`.
///
/// Every entry names a real item in scope, so a misspelled or removed item
/// fails to build.
///
/// ```rust,ignore
/// capability_exports! {
///     trait DirectionConstraint;
///     type RigidBody;
///     #[deprecated = "use RigidBody"] type Body;
///     fn world_index;
/// }
/// ```
macro_rules! capability_exports {
    (@push $v:ident;) => {};
    (@push $v:ident; #[deprecated = $note:literal] type $name:ident; $($rest:tt)*) => {
        $v.push($crate::namespace::Export::of_type::<$name>(stringify!($name)).deprecated($note));
        $crate::namespace::capability_exports!(@push $v; $($rest)*);
    };
    (@push $v:ident; #[deprecated = $note:literal] fn $name:ident; $($rest:tt)*) => {
        $v.push($crate::namespace::Export::of_fn(stringify!($name), &$name).deprecated($note));
        $crate::namespace::capability_exports!(@push $v; $($rest)*);
    };
    (@push $v:ident; trait $name:ident; $($rest:tt)*) => {
        $v.push($crate::namespace::Export::of_type::<dyn $name>(stringify!($name)));
        $crate::namespace::capability_exports!(@push $v; $($rest)*);
    };
    (@push $v:ident; type $name:ident; $($rest:tt)*) => {
        $v.push($crate::namespace::Export::of_type::<$name>(stringify!($name)));
        $crate::namespace::capability_exports!(@push $v; $($rest)*);
    };
    (@push $v:ident; fn $name:ident; $($rest:tt)*) => {
        $v.push($crate::namespace::Export::of_fn(stringify!($name), &$name));
        $crate::namespace::capability_exports!(@push $v; $($rest)*);
    };
    ($($entries:tt)*) => {
        #[allow(deprecated)]
        pub(crate) fn exports() -> Vec<$crate::namespace::Export> {
            let mut exports = Vec::new();
            $crate::namespace::capability_exports!(@push exports; $($entries)*);
            exports
        }
    };
}

pub(crate) use capability_exports;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::SymbolKind;

    pub struct Gizmo;
    pub type OldGizmo = Gizmo;

    pub fn build_gizmo() -> Gizmo {
        Gizmo
    }

    capability_exports! {
        type Gizmo;
        #[deprecated = "use Gizmo"] type OldGizmo;
        fn build_gizmo;
    }

    #[test]
    fn manifest_lists_entries_in_order() {
        let names: Vec<_> = exports().iter().map(|e| e.name).collect();
        assert_eq!(names, ["Gizmo", "OldGizmo", "build_gizmo"]);
        assert_eq!(exports()[2].kind(), SymbolKind::Function);
    }

    #[test]
    fn static_module_reports_deprecations() {
        let module = StaticModule::new("gizmos", exports);
        let mut ctx = LoadContext::new();
        let loaded = module.load(&mut ctx).unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(ctx.surfaced().len(), 1);
        assert_eq!(ctx.surfaced()[0].category, WarningCategory::Deprecation);
        assert!(ctx.surfaced()[0].message.contains("OldGizmo"));
    }

    #[test]
    fn experimental_module_warns_on_load() {
        let module = StaticModule::new("gizmos", || Vec::new()).experimental("subject to change");
        let mut ctx = LoadContext::new();
        module.load(&mut ctx).unwrap();
        assert_eq!(ctx.surfaced()[0].category, WarningCategory::Experimental);
    }

    #[test]
    fn catalog_replaces_same_name() {
        let mut catalog = ModuleCatalog::new();
        catalog.register(StaticModule::new("gizmos", || Vec::new()));
        catalog.register(StaticModule::new("gizmos", exports));
        assert_eq!(catalog.len(), 1);

        let mut ctx = LoadContext::new();
        let module = catalog.find("gizmos").unwrap();
        assert_eq!(module.load(&mut ctx).unwrap().len(), 3);
        assert!(catalog.find("widgets").is_none());
    }
}
