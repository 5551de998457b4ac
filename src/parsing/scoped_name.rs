use std::fmt;
use std::str::FromStr;

use super::ParseError;

const DELIMITER: &str = "::";

/// A `namespace::element` name, where the namespace may itself be scoped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopedName {
    namespace: String,
    element: String,
}

impl ScopedName {
    pub fn new(namespace: impl Into<String>, element: impl Into<String>) -> Result<Self, ParseError> {
        let namespace = namespace.into();
        let element = element.into();
        if element.is_empty() || element.contains(DELIMITER) {
            return Err(ParseError::InvalidScopedName(element));
        }
        if namespace.split(DELIMITER).any(str::is_empty) && !namespace.is_empty() {
            return Err(ParseError::InvalidScopedName(namespace));
        }
        Ok(Self { namespace, element })
    }

    /// Splits on the last delimiter; a name without one has an empty namespace.
    pub fn parse(scoped: &str) -> Result<Self, ParseError> {
        match scoped.rsplit_once(DELIMITER) {
            Some((namespace, element)) => Self::new(namespace, element),
            None => Self::new("", scoped),
        }
        .map_err(|_| ParseError::InvalidScopedName(scoped.to_string()))
    }

    pub fn join(namespace: &str, element: &str) -> Result<Self, ParseError> {
        if namespace.is_empty() {
            return Self::parse(element);
        }
        Self::parse(&format!("{namespace}{DELIMITER}{element}"))
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    pub fn is_scoped(&self) -> bool {
        !self.namespace.is_empty()
    }
}

impl fmt::Display for ScopedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            f.write_str(&self.element)
        } else {
            write!(f, "{}{DELIMITER}{}", self.namespace, self.element)
        }
    }
}

impl FromStr for ScopedName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_last_delimiter() {
        let name = ScopedName::parse("robot::arm::link3").unwrap();
        assert_eq!(name.namespace(), "robot::arm");
        assert_eq!(name.element(), "link3");
        assert_eq!(name.to_string(), "robot::arm::link3");
    }

    #[test]
    fn unscoped_names_have_empty_namespace() {
        let name: ScopedName = "base_link".parse().unwrap();
        assert!(!name.is_scoped());
        assert_eq!(name.to_string(), "base_link");
    }

    #[test]
    fn join_nests_namespaces() {
        let name = ScopedName::join("robot", "arm::link3").unwrap();
        assert_eq!(name.namespace(), "robot::arm");
        assert_eq!(ScopedName::join("", "link").unwrap().element(), "link");
    }

    #[test]
    fn rejects_empty_segments() {
        assert!(ScopedName::parse("robot::").is_err());
        assert!(ScopedName::parse("robot::::link").is_err());
        assert!(ScopedName::parse("").is_err());
    }
}
