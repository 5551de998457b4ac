//! Error types for namespace aggregation.

use thiserror::Error;

use super::symbol::Definition;

/// Raised by a capability module that cannot produce its exports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ModuleError {
    pub message: String,
}

impl ModuleError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("capability module `{module}` is not registered")]
    ModuleNotFound { module: String },

    #[error("capability module `{module}` failed to load: {source}")]
    ModuleFailed {
        module: String,
        #[source]
        source: ModuleError,
    },

    #[error("capability module `{module}` is listed more than once")]
    DuplicateModule { module: String },
}

impl ConfigurationError {
    pub fn module(&self) -> &str {
        match self {
            ConfigurationError::ModuleNotFound { module }
            | ConfigurationError::ModuleFailed { module, .. }
            | ConfigurationError::DuplicateModule { module } => module,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "symbol `{symbol}` is exported by `{first_module}` ({first_definition}) \
     and by `{second_module}` ({second_definition})"
)]
pub struct SymbolCollisionError {
    pub symbol: String,
    pub first_module: String,
    pub first_definition: Definition,
    pub second_module: String,
    pub second_definition: Definition,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    SymbolCollision(#[from] SymbolCollisionError),
}

pub type Result<T> = std::result::Result<T, AggregationError>;
