//! Route descriptors: caller-supplied, partially specified route configuration.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::render::Action;

/// Ordered, keyed descriptor collection.
pub type RouteDescriptors = IndexMap<String, RouteDescriptor>;

/// One navigable endpoint as written in configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RouteDescriptor {
    /// Route name; defaults to the entry key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Absolute path; a placeholder is generated when missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Explicit primary group; derived from the path when missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Additional groups the route is registered under.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,

    /// Roles checked on entry (any one suffices).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,

    /// Require a logged-in user.
    #[serde(default, alias = "authRequired")]
    pub auth_required: bool,

    /// Programmatic action; defaults to rendering the route name.
    #[serde(skip)]
    pub action: Option<Action>,

    /// Remaining fields, passed through to the router untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RouteDescriptor {
    /// Descriptor with only a path set.
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn also_in(mut self, group: impl Into<String>) -> Self {
        self.groups.push(group.into());
        self
    }

    pub fn roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn auth_required(mut self) -> Self {
        self.auth_required = true;
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_descriptor() {
        let d: RouteDescriptor = serde_json::from_str(
            r#"{"path": "/shop/item", "authRequired": true, "roles": ["admin"], "title": "Item"}"#,
        )
        .unwrap();
        assert_eq!(d.path.as_deref(), Some("/shop/item"));
        assert!(d.auth_required);
        assert_eq!(d.roles, vec!["admin".to_string()]);
        assert_eq!(d.extra.get("title"), Some(&Value::from("Item")));
        assert!(d.action.is_none());
    }

    #[test]
    fn test_builder() {
        let d = RouteDescriptor::at("/a")
            .name("a")
            .group("/g")
            .also_in("/h")
            .roles(["r"])
            .auth_required()
            .extra("k", 1);
        assert_eq!(d.name.as_deref(), Some("a"));
        assert_eq!(d.group.as_deref(), Some("/g"));
        assert_eq!(d.groups, vec!["/h".to_string()]);
        assert!(d.auth_required);
        assert_eq!(d.extra["k"], 1);
    }
}
