use super::warnings::{WarningCategory, WarningFilter};

/// How two different definitions exported under one name are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Any such collision aborts aggregation.
    #[default]
    Strict,
    /// The module later in the configured order replaces the earlier binding.
    LastWins,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorConfig {
    pub name: String,
    pub modules: Vec<String>,
    pub policy: CollisionPolicy,
    pub suppress: WarningFilter,
}

impl AggregatorConfig {
    pub fn builder(name: impl Into<String>) -> AggregatorConfigBuilder {
        AggregatorConfigBuilder::new(name)
    }
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            name: String::from("namespace"),
            modules: Vec::new(),
            policy: CollisionPolicy::Strict,
            suppress: WarningFilter::none(),
        }
    }
}

pub struct AggregatorConfigBuilder {
    config: AggregatorConfig,
}

impl AggregatorConfigBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: AggregatorConfig {
                name: name.into(),
                ..AggregatorConfig::default()
            },
        }
    }

    pub fn module(mut self, name: impl Into<String>) -> Self {
        self.config.modules.push(name.into());
        self
    }

    pub fn modules<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.modules.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn policy(mut self, policy: CollisionPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    pub fn suppress(mut self, category: WarningCategory) -> Self {
        self.config.suppress = self.config.suppress.silence(category);
        self
    }

    pub fn build(self) -> AggregatorConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_strict_and_silent_free() {
        let config = AggregatorConfig::default();
        assert_eq!(config.policy, CollisionPolicy::Strict);
        assert!(config.suppress.is_empty());
        assert!(config.modules.is_empty());
    }

    #[test]
    fn builder_keeps_module_order() {
        let config = AggregatorConfig::builder("all")
            .module("math")
            .modules(["tree", "plant"])
            .suppress(WarningCategory::Deprecation)
            .build();
        assert_eq!(config.name, "all");
        assert_eq!(config.modules, ["math", "tree", "plant"]);
        assert!(config.suppress.suppresses(WarningCategory::Deprecation));
    }
}
