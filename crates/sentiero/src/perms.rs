//! Viewer permissions and the permission sets menu nodes require.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

/// Permission names a viewer must all hold for a node to be visible.
///
/// A single permission name normalizes to a one-element set, both in code
/// (`From<&str>` / `From<String>`) and in serde form, where either a JSON
/// string or an array of strings is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PermissionSet(Vec<String>);

impl PermissionSet {
    /// The permission names, in declaration order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for PermissionSet {
    fn from(permission: &str) -> Self {
        Self(vec![permission.to_string()])
    }
}

impl From<String> for PermissionSet {
    fn from(permission: String) -> Self {
        Self(vec![permission])
    }
}

impl From<Vec<String>> for PermissionSet {
    fn from(permissions: Vec<String>) -> Self {
        Self(permissions)
    }
}

impl FromIterator<String> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for PermissionSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::One(permission) => Self(vec![permission]),
            Raw::Many(permissions) => Self(permissions),
        })
    }
}

/// Viewer-side permission predicate.
///
/// `has_perms` reports whether the viewer holds every named permission
/// (logical AND, never ANY).
pub trait PermissionCheck {
    fn has_perms(&self, permissions: &[String]) -> bool;
}

/// Fixed in-memory set of granted permissions.
#[derive(Debug, Clone, Default)]
pub struct StaticPermissions {
    granted: HashSet<String>,
}

impl StaticPermissions {
    /// Create from any collection of permission names.
    pub fn new<I, S>(granted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            granted: granted.into_iter().map(Into::into).collect(),
        }
    }

    /// Grant an additional permission.
    pub fn grant(&mut self, permission: impl Into<String>) {
        self.granted.insert(permission.into());
    }
}

impl PermissionCheck for StaticPermissions {
    fn has_perms(&self, permissions: &[String]) -> bool {
        permissions.iter().all(|p| self.granted.contains(p))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn single_string_normalizes_to_one_element_set() {
        let set = PermissionSet::from("admin.users");
        assert_eq!(set.as_slice(), ["admin.users".to_string()]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn deserializes_from_string_or_array() {
        let one: PermissionSet = serde_json::from_str(r#""admin.users""#).unwrap();
        assert_eq!(one.as_slice(), ["admin.users".to_string()]);

        let many: PermissionSet = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(many.as_slice(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn serializes_as_array() {
        let set = PermissionSet::from("admin.users");
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            r#"["admin.users"]"#
        );
    }

    #[test]
    fn has_perms_requires_all() {
        let viewer = StaticPermissions::new(["a", "b"]);
        assert!(viewer.has_perms(&["a".to_string()]));
        assert!(viewer.has_perms(&["a".to_string(), "b".to_string()]));
        assert!(!viewer.has_perms(&["a".to_string(), "c".to_string()]));
    }

    #[test]
    fn empty_requirement_always_passes() {
        let viewer = StaticPermissions::default();
        assert!(viewer.has_perms(&[]));
    }
}
