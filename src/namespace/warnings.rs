use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WarningCategory {
    Deprecation,
    Compatibility,
    Experimental,
}

impl fmt::Display for WarningCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WarningCategory::Deprecation => "deprecation",
            WarningCategory::Compatibility => "compatibility",
            WarningCategory::Experimental => "experimental",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub category: WarningCategory,
    pub module: String,
    pub message: String,
}

impl Warning {
    pub fn new(
        category: WarningCategory,
        module: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            module: module.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.category, self.module, self.message)
    }
}

/// Explicit set of warning categories to silence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarningFilter {
    categories: BTreeSet<WarningCategory>,
}

impl WarningFilter {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn silence(mut self, category: WarningCategory) -> Self {
        self.categories.insert(category);
        self
    }

    pub fn suppresses(&self, category: WarningCategory) -> bool {
        self.categories.contains(&category)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = WarningCategory> + '_ {
        self.categories.iter().copied()
    }
}

impl FromIterator<WarningCategory> for WarningFilter {
    fn from_iter<I: IntoIterator<Item = WarningCategory>>(iter: I) -> Self {
        Self {
            categories: iter.into_iter().collect(),
        }
    }
}

/// Collects warnings raised while capability modules are loaded.
///
/// Suppression is scoped: a filter pushed with [`LoadContext::scoped`] only
/// applies to warnings raised inside that call. A context created with
/// [`LoadContext::new`] has no scopes, so direct loads of a single module
/// surface everything.
#[derive(Debug, Default)]
pub struct LoadContext {
    scopes: Vec<WarningFilter>,
    surfaced: Vec<Warning>,
    suppressed: Vec<Warning>,
}

impl LoadContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, warning: Warning) {
        if self.is_suppressed(warning.category) {
            log::debug!("suppressed warning {warning}");
            self.suppressed.push(warning);
        } else {
            log::warn!("{warning}");
            self.surfaced.push(warning);
        }
    }

    pub fn is_suppressed(&self, category: WarningCategory) -> bool {
        self.scopes.iter().any(|scope| scope.suppresses(category))
    }

    /// Run `f` with `filter` active. The filter is popped again on return,
    /// whatever `f` returns.
    pub fn scoped<R>(&mut self, filter: &WarningFilter, f: impl FnOnce(&mut Self) -> R) -> R {
        self.scopes.push(filter.clone());
        let result = f(self);
        self.scopes.pop();
        result
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn surfaced(&self) -> &[Warning] {
        &self.surfaced
    }

    pub fn suppressed(&self) -> &[Warning] {
        &self.suppressed
    }

    pub fn into_parts(self) -> (Vec<Warning>, Vec<Warning>) {
        (self.surfaced, self.suppressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deprecation(message: &str) -> Warning {
        Warning::new(WarningCategory::Deprecation, "tree", message)
    }

    #[test]
    fn unscoped_context_surfaces_everything() {
        let mut ctx = LoadContext::new();
        ctx.warn(deprecation("Body is deprecated"));
        ctx.warn(Warning::new(WarningCategory::Experimental, "fem", "unstable"));
        assert_eq!(ctx.surfaced().len(), 2);
        assert!(ctx.suppressed().is_empty());
    }

    #[test]
    fn scope_only_silences_listed_categories() {
        let filter = WarningFilter::none().silence(WarningCategory::Deprecation);
        let mut ctx = LoadContext::new();
        ctx.scoped(&filter, |ctx| {
            ctx.warn(deprecation("inside"));
            ctx.warn(Warning::new(WarningCategory::Experimental, "fem", "inside"));
        });
        assert_eq!(ctx.suppressed().len(), 1);
        assert_eq!(ctx.surfaced().len(), 1);
        assert_eq!(ctx.surfaced()[0].category, WarningCategory::Experimental);
    }

    #[test]
    fn scope_ends_with_the_call() {
        let filter = WarningFilter::none().silence(WarningCategory::Deprecation);
        let mut ctx = LoadContext::new();
        ctx.scoped(&filter, |ctx| assert_eq!(ctx.depth(), 1));
        assert_eq!(ctx.depth(), 0);
        ctx.warn(deprecation("after"));
        assert_eq!(ctx.surfaced().len(), 1);
    }

    #[test]
    fn nested_scopes_union_their_filters() {
        let outer = WarningFilter::none().silence(WarningCategory::Experimental);
        let inner = WarningFilter::none().silence(WarningCategory::Deprecation);
        let mut ctx = LoadContext::new();
        ctx.scoped(&outer, |ctx| {
            ctx.scoped(&inner, |ctx| {
                assert!(ctx.is_suppressed(WarningCategory::Experimental));
                assert!(ctx.is_suppressed(WarningCategory::Deprecation));
                assert!(!ctx.is_suppressed(WarningCategory::Compatibility));
            });
            assert!(!ctx.is_suppressed(WarningCategory::Deprecation));
        });
    }
}
