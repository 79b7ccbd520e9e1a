//! Group materialization: member routes plus their entry guards.
//!
//! # Responsibilities
//! - Collect each group's member routes in map order
//! - Expose the representative's metadata as [`GroupInfo`]
//! - Attach `triggers_enter` per route from its access flags
//!
//! # Guard Order
//! ```text
//! auth_required      → login guard       (redirect to login route)
//! roles non-empty    → role guard        (redirect to no-permission route)
//! ```
//!
//! # Design Decisions
//! - Role checks use the group's roles, taken from the representative route;
//!   a representative without roles falls back to the member's own roles
//! - The fallback only applies to members that declare roles, so a role-less
//!   representative never turns the group-wide check into a lockout
//! - A group the map cannot back is an [`IntegrityError`], not a warning

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::IntegrityError;
use crate::render::Action;
use crate::routing::grouper::RouteGroupIndex;
use crate::routing::route_map::{RouteMap, RouteRecord};
use crate::security::{AccessControl, Trigger};

/// Group-level metadata: the representative route without access fields.
#[derive(Debug, Clone)]
pub struct GroupInfo {
    pub group: String,
    pub key: String,
    pub name: String,
    pub path: String,
    pub groups: Vec<String>,
    pub action: Action,
    pub extra: Map<String, Value>,
}

impl GroupInfo {
    fn from_representative(group: &str, record: &RouteRecord) -> Self {
        Self {
            group: group.to_string(),
            key: record.key.clone(),
            name: record.name.clone(),
            path: record.path.clone(),
            groups: record.groups.clone(),
            action: record.action.clone(),
            extra: record.extra.clone(),
        }
    }
}

/// A member route with its entry guards.
#[derive(Debug, Clone)]
pub struct GuardedRoute {
    pub record: RouteRecord,
    pub triggers_enter: Vec<Trigger>,
}

/// A group ready for registration.
#[derive(Debug, Clone)]
pub struct MaterializedGroup {
    pub info: GroupInfo,
    pub routes: Vec<GuardedRoute>,
}

impl MaterializedGroup {
    pub fn route(&self, key: &str) -> Option<&GuardedRoute> {
        self.routes.iter().find(|r| r.record.key == key)
    }
}

/// Group name → materialized group, in index order.
pub type RoutesByGroup = IndexMap<String, MaterializedGroup>;

/// Entry guards for `record` inside a group whose roles are `group_roles`.
pub fn route_triggers(record: &RouteRecord, group_roles: &[String], access: &AccessControl) -> Vec<Trigger> {
    let mut triggers = Vec::new();

    if record.auth_required {
        triggers.push(access.login_guard());
    }

    if !record.roles.is_empty() {
        let roles = if group_roles.is_empty() {
            record.roles.clone()
        } else {
            group_roles.to_vec()
        };
        triggers.push(access.role_guard(roles));
    }

    triggers
}

/// Materialize every group in `index` from `map`.
pub fn materialize_groups(
    index: &RouteGroupIndex,
    map: &RouteMap,
    access: &AccessControl,
) -> Result<RoutesByGroup, IntegrityError> {
    let mut groups = RoutesByGroup::new();

    for (group, key) in index.groups() {
        let representative = map.get(key).ok_or_else(|| IntegrityError::MissingRepresentative {
            group: group.to_string(),
            key: key.to_string(),
        })?;

        let routes: Vec<GuardedRoute> = map
            .iter()
            .filter(|record| index.is_member(&record.key, group))
            .map(|record| GuardedRoute {
                record: record.clone(),
                triggers_enter: route_triggers(record, &representative.roles, access),
            })
            .collect();

        if routes.is_empty() {
            return Err(IntegrityError::EmptyGroup(group.to_string()));
        }

        tracing::debug!(group = %group, representative = %key, routes = routes.len(), "Materialized group");

        groups.insert(
            group.to_string(),
            MaterializedGroup {
                info: GroupInfo::from_representative(group, representative),
                routes,
            },
        );
    }

    Ok(groups)
}
