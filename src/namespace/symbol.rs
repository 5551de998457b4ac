use std::fmt;

/// What sort of item a symbol binds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SymbolKind {
    Type,
    Function,
    Module,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SymbolKind::Type => "type",
            SymbolKind::Function => "fn",
            SymbolKind::Module => "mod",
        };
        f.write_str(name)
    }
}

/// Canonical identity of an exported item.
///
/// Two exports bind the same item exactly when their definitions are equal,
/// regardless of the name they are exported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Definition {
    kind: SymbolKind,
    path: &'static str,
}

impl Definition {
    pub const fn new(kind: SymbolKind, path: &'static str) -> Self {
        Self { kind, path }
    }

    pub fn of_type<T: ?Sized>() -> Self {
        Self::new(SymbolKind::Type, std::any::type_name::<T>())
    }

    pub fn of_fn<F>(f: &F) -> Self {
        Self::new(SymbolKind::Function, std::any::type_name_of_val(f))
    }

    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    pub fn path(&self) -> &'static str {
        self.path
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.path)
    }
}

/// A public symbol declared by a capability module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Export {
    pub name: &'static str,
    pub definition: Definition,
    pub deprecation: Option<&'static str>,
}

impl Export {
    pub const fn new(name: &'static str, definition: Definition) -> Self {
        Self {
            name,
            definition,
            deprecation: None,
        }
    }

    pub fn of_type<T: ?Sized>(name: &'static str) -> Self {
        Self::new(name, Definition::of_type::<T>())
    }

    pub fn of_fn<F>(name: &'static str, f: &F) -> Self {
        Self::new(name, Definition::of_fn(f))
    }

    pub const fn module(name: &'static str, path: &'static str) -> Self {
        Self::new(name, Definition::new(SymbolKind::Module, path))
    }

    pub const fn deprecated(mut self, note: &'static str) -> Self {
        self.deprecation = Some(note);
        self
    }

    pub fn kind(&self) -> SymbolKind {
        self.definition.kind
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation.is_some()
    }

    /// Same underlying item, possibly under another name.
    pub fn binds_same_item(&self, other: &Export) -> bool {
        self.definition == other.definition
    }
}
