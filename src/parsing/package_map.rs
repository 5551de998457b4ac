use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use super::ParseError;

const PACKAGE_SCHEME: &str = "package://";

/// Maps ROS-style package names to directories on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMap {
    packages: BTreeMap<String, PathBuf>,
}

impl PackageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` at `path`.
    ///
    /// Registering the same package twice is allowed only for the same path.
    pub fn add(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Result<(), ParseError> {
        let name = name.into();
        let path = path.into();
        validate_package_name(&name)?;

        match self.packages.get(&name) {
            Some(existing) if existing != &path => Err(ParseError::ConflictingPackage {
                name,
                existing: existing.clone(),
                requested: path,
            }),
            Some(_) => Ok(()),
            None => {
                log::debug!("package `{name}` -> {}", path.display());
                self.packages.insert(name, path);
                Ok(())
            }
        }
    }

    /// Adds every package from `other`, with the same conflict rule as [`PackageMap::add`].
    pub fn add_map(&mut self, other: &PackageMap) -> Result<(), ParseError> {
        for (name, path) in &other.packages {
            self.add(name.clone(), path.clone())?;
        }
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    pub fn get_path(&self, name: &str) -> Result<&Path, ParseError> {
        self.packages
            .get(name)
            .map(PathBuf::as_path)
            .ok_or_else(|| ParseError::UnknownPackage(name.to_string()))
    }

    pub fn remove(&mut self, name: &str) -> Result<PathBuf, ParseError> {
        self.packages
            .remove(name)
            .ok_or_else(|| ParseError::UnknownPackage(name.to_string()))
    }

    pub fn size(&self) -> usize {
        self.packages.len()
    }

    pub fn package_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.packages.keys().map(String::as_str)
    }

    /// Resolves a `package://name/relative/path` URL to a filesystem path.
    ///
    /// The relative part may not climb out of the package directory.
    pub fn resolve_url(&self, url: &str) -> Result<PathBuf, ParseError> {
        let rest = url
            .strip_prefix(PACKAGE_SCHEME)
            .ok_or_else(|| ParseError::UnsupportedUrl(url.to_string()))?;
        let (name, relative) = rest.split_once('/').unwrap_or((rest, ""));

        let root = self.get_path(name)?;
        let relative = Path::new(relative);
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(ParseError::UnsupportedUrl(url.to_string()));
        }
        Ok(root.join(relative))
    }
}

fn validate_package_name(name: &str) -> Result<(), ParseError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(ParseError::InvalidPackageName(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> PackageMap {
        let mut map = PackageMap::new();
        map.add("robot_description", "/opt/models/robot").unwrap();
        map
    }

    #[test]
    fn resolves_package_urls() {
        let map = map();
        assert_eq!(
            map.resolve_url("package://robot_description/urdf/arm.urdf").unwrap(),
            PathBuf::from("/opt/models/robot/urdf/arm.urdf")
        );
        assert_eq!(
            map.resolve_url("package://robot_description").unwrap(),
            PathBuf::from("/opt/models/robot")
        );
    }

    #[test]
    fn rejects_bad_urls() {
        let map = map();
        assert!(matches!(
            map.resolve_url("file:///tmp/arm.urdf"),
            Err(ParseError::UnsupportedUrl(_))
        ));
        assert!(matches!(
            map.resolve_url("package://missing/arm.urdf"),
            Err(ParseError::UnknownPackage(_))
        ));
        assert!(matches!(
            map.resolve_url("package://robot_description/../secret"),
            Err(ParseError::UnsupportedUrl(_))
        ));
    }

    #[test]
    fn re_adding_requires_same_path() {
        let mut map = map();
        assert!(map.add("robot_description", "/opt/models/robot").is_ok());
        assert!(matches!(
            map.add("robot_description", "/elsewhere"),
            Err(ParseError::ConflictingPackage { .. })
        ));
        assert!(map.add("bad name", "/x").is_err());
        assert_eq!(map.size(), 1);
    }

    #[test]
    fn merge_and_remove() {
        let mut other = PackageMap::new();
        other.add("gripper", "/opt/models/gripper").unwrap();

        let mut map = map();
        map.add_map(&other).unwrap();
        assert_eq!(map.package_names().collect::<Vec<_>>(), ["gripper", "robot_description"]);
        assert_eq!(map.remove("gripper").unwrap(), PathBuf::from("/opt/models/gripper"));
        assert!(!map.contains("gripper"));
        assert!(map.remove("gripper").is_err());
    }
}
