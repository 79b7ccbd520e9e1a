//! Route map construction: descriptors → normalized route records.
//!
//! # Responsibilities
//! - Resolve missing and duplicate names and paths
//! - Derive the primary group when none is given
//! - Normalize trailing slashes
//! - Bind the default render action
//!
//! # Design Decisions
//! - Never fails: each anomaly becomes a generated placeholder, a warning and
//!   an [`Anomaly`] entry, so one bad route cannot block the others
//! - Duplicates are detected against the map being built, in input order
//! - Path duplicates compare normalized paths (`/a/` collides with `/a`)
//! - Empty `name`, `path` and `group` values count as missing
//! - A path naming a group that some descriptor declares joins that group,
//!   so `/shop` lands in `/shop` when another route is grouped under it

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use serde_json::{Map, Value};

use crate::config::schema::LayoutConfig;
use crate::render::{default_action, Action};
use crate::routing::descriptor::RouteDescriptors;
use crate::routing::fallback::{random_name, random_path, IdGenerator};
use crate::routing::group::{derive_group, ROOT_GROUP};

/// A normalized route.
#[derive(Debug, Clone)]
pub struct RouteRecord {
    /// Entry key in the input collection.
    pub key: String,
    /// Unique route name.
    pub name: String,
    /// Unique, normalized path.
    pub path: String,
    /// Primary group.
    pub group: String,
    /// Secondary groups, as declared.
    pub groups: Vec<String>,
    pub action: Action,
    pub roles: Vec<String>,
    pub auth_required: bool,
    pub extra: Map<String, Value>,
}

/// A configuration problem resolved by substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anomaly {
    DuplicateName {
        key: String,
        name: String,
        generated: String,
    },
    MissingPath {
        key: String,
        generated: String,
    },
    DuplicatePath {
        key: String,
        path: String,
        generated: String,
    },
    UnresolvedGroup {
        key: String,
        path: String,
        generated: String,
    },
}

impl Anomaly {
    /// Entry key of the affected route.
    pub fn key(&self) -> &str {
        match self {
            Anomaly::DuplicateName { key, .. }
            | Anomaly::MissingPath { key, .. }
            | Anomaly::DuplicatePath { key, .. }
            | Anomaly::UnresolvedGroup { key, .. } => key,
        }
    }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anomaly::DuplicateName { key, name, generated } => write!(
                f,
                "route '{}': duplicate name '{}', generated '{}'",
                key, name, generated
            ),
            Anomaly::MissingPath { key, generated } => {
                write!(f, "route '{}': missing path, generated '{}'", key, generated)
            }
            Anomaly::DuplicatePath { key, path, generated } => write!(
                f,
                "route '{}': duplicate path '{}', generated '{}'",
                key, path, generated
            ),
            Anomaly::UnresolvedGroup { key, path, generated } => write!(
                f,
                "route '{}': no group derivable from '{}', generated '{}'",
                key, path, generated
            ),
        }
    }
}

/// Entry key → normalized record, in input order.
#[derive(Debug, Clone, Default)]
pub struct RouteMap {
    records: IndexMap<String, RouteRecord>,
    anomalies: Vec<Anomaly>,
}

impl RouteMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&RouteRecord> {
        self.records.get(key)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteRecord> {
        self.records.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&RouteRecord> {
        self.records.values().find(|r| r.name == name)
    }

    pub fn find_by_path(&self, path: &str) -> Option<&RouteRecord> {
        self.records.values().find(|r| r.path == path)
    }

    /// Problems resolved while building this map.
    pub fn anomalies(&self) -> &[Anomaly] {
        &self.anomalies
    }

    /// Insert or replace the record stored under its key.
    pub fn insert(&mut self, record: RouteRecord) {
        self.records.insert(record.key.clone(), record);
    }

    pub(crate) fn into_parts(self) -> (IndexMap<String, RouteRecord>, Vec<Anomaly>) {
        (self.records, self.anomalies)
    }

    pub(crate) fn from_parts(records: IndexMap<String, RouteRecord>, anomalies: Vec<Anomaly>) -> Self {
        Self { records, anomalies }
    }
}

impl PartialEq for RouteMap {
    fn eq(&self, other: &Self) -> bool {
        self.records.len() == other.records.len()
            && self.records.iter().zip(other.records.iter()).all(|((ka, a), (kb, b))| {
                ka == kb
                    && a.name == b.name
                    && a.path == b.path
                    && a.group == b.group
                    && a.groups == b.groups
                    && a.roles == b.roles
                    && a.auth_required == b.auth_required
                    && a.extra == b.extra
            })
    }
}

/// Strip one trailing `/`, except on the root path.
pub fn normalize_path(path: &str) -> &str {
    if path != ROOT_GROUP {
        if let Some(stripped) = path.strip_suffix('/') {
            return stripped;
        }
    }
    path
}

/// Groups named explicitly by any descriptor, primary or secondary.
pub fn declared_groups(descriptors: &RouteDescriptors) -> IndexSet<String> {
    descriptors
        .values()
        .flat_map(|d| d.group.iter().chain(d.groups.iter()))
        .filter(|group| !group.is_empty() && group.as_str() != ROOT_GROUP)
        .cloned()
        .collect()
}

/// Folds descriptors into a [`RouteMap`].
pub struct RouteMapBuilder<'a> {
    layout: &'a LayoutConfig,
    generator: &'a dyn IdGenerator,
}

impl<'a> RouteMapBuilder<'a> {
    pub fn new(layout: &'a LayoutConfig, generator: &'a dyn IdGenerator) -> Self {
        Self { layout, generator }
    }

    /// Build the map, processing entries in input order.
    pub fn build(&self, descriptors: &RouteDescriptors) -> RouteMap {
        let declared = declared_groups(descriptors);
        let mut map = RouteMap::new();

        for (key, descriptor) in descriptors {
            let requested_name = match descriptor.name.as_deref() {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => key.clone(),
            };
            let name = if map.find_by_name(&requested_name).is_some() {
                let generated = random_name(self.generator);
                tracing::warn!(
                    key = %key,
                    name = %requested_name,
                    generated = %generated,
                    "Duplicate route name, generated random name"
                );
                map.anomalies.push(Anomaly::DuplicateName {
                    key: key.clone(),
                    name: requested_name,
                    generated: generated.clone(),
                });
                generated
            } else {
                requested_name
            };

            let mut path = match descriptor.path.as_deref() {
                Some(path) if !path.is_empty() => path.to_string(),
                _ => {
                    let generated = random_path(self.generator);
                    tracing::warn!(
                        key = %key,
                        generated = %generated,
                        "Route missing a path, generated random path"
                    );
                    map.anomalies.push(Anomaly::MissingPath {
                        key: key.clone(),
                        generated: generated.clone(),
                    });
                    generated
                }
            };

            if map.find_by_path(normalize_path(&path)).is_some() {
                let generated = random_path(self.generator);
                tracing::warn!(
                    key = %key,
                    path = %path,
                    generated = %generated,
                    "Duplicate route path, generated random path"
                );
                map.anomalies.push(Anomaly::DuplicatePath {
                    key: key.clone(),
                    path,
                    generated: generated.clone(),
                });
                path = generated;
            }

            let group = match descriptor.group.as_deref() {
                Some(group) if !group.is_empty() => group.to_string(),
                _ if declared.contains(normalize_path(&path)) => normalize_path(&path).to_string(),
                _ => match derive_group(&path) {
                    Some(group) => group,
                    None => {
                        let generated = random_path(self.generator);
                        tracing::warn!(
                            key = %key,
                            path = %path,
                            generated = %generated,
                            "Unsupported path shape for group derivation, generated random group"
                        );
                        map.anomalies.push(Anomaly::UnresolvedGroup {
                            key: key.clone(),
                            path: path.clone(),
                            generated: generated.clone(),
                        });
                        generated
                    }
                },
            };

            let path = normalize_path(&path).to_string();

            let action = descriptor
                .action
                .clone()
                .unwrap_or_else(|| default_action(self.layout, &name));

            map.insert(RouteRecord {
                key: key.clone(),
                name,
                path,
                group,
                groups: descriptor.groups.clone(),
                action,
                roles: descriptor.roles.clone(),
                auth_required: descriptor.auth_required,
                extra: descriptor.extra.clone(),
            });
        }

        map
    }
}

/// Build a route map with the given layout and generator.
pub fn build_route_map(
    descriptors: &RouteDescriptors,
    layout: &LayoutConfig,
    generator: &dyn IdGenerator,
) -> RouteMap {
    RouteMapBuilder::new(layout, generator).build(descriptors)
}
