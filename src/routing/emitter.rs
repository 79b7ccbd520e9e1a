//! Router registration.
//!
//! # Responsibilities
//! - Open one router group per materialized group
//! - Register every member route under its group
//! - Return handles in call order: group, its routes, next group, ...
//!
//! # Design Decisions
//! - Route paths are registered in full; the group prefix is the
//!   representative's path and is informational for routers that want it
//! - Exit triggers are always empty for now
//! - Access fields (`roles`, `auth_required`) stop here; routers only see
//!   the guards built from them. Every other record field is passed on

use serde_json::{Map, Value};

use crate::render::Action;
use crate::routing::materialize::{GuardedRoute, MaterializedGroup, RoutesByGroup};
use crate::security::Trigger;

/// Options for opening a router group.
#[derive(Debug, Clone)]
pub struct GroupOptions {
    /// Group key.
    pub name: String,
    /// Path of the group's representative route.
    pub prefix: String,
    pub triggers_enter: Vec<Trigger>,
    pub triggers_exit: Vec<Trigger>,
}

/// Router payload for one route.
#[derive(Debug, Clone)]
pub struct RouteOptions {
    pub name: String,
    /// Group the route is being registered under.
    pub group: String,
    /// The route's own primary group.
    pub primary_group: String,
    /// Secondary groups the route declares.
    pub groups: Vec<String>,
    pub action: Action,
    pub triggers_enter: Vec<Trigger>,
    pub extra: Map<String, Value>,
}

/// External router.
pub trait Router {
    /// Handle returned for a group registration.
    type Group;
    /// Handle returned for a route registration.
    type Route;

    fn group(&mut self, options: GroupOptions) -> Self::Group;

    fn route(&mut self, group: &Self::Group, path: &str, options: RouteOptions) -> Self::Route;
}

/// One emitted handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration<G, R> {
    Group(G),
    Route(R),
}

impl<G, R> Registration<G, R> {
    pub fn as_group(&self) -> Option<&G> {
        match self {
            Registration::Group(g) => Some(g),
            Registration::Route(_) => None,
        }
    }

    pub fn as_route(&self) -> Option<&R> {
        match self {
            Registration::Route(r) => Some(r),
            Registration::Group(_) => None,
        }
    }
}

/// Handles of a router, in emission order.
pub type Registrations<R> = Vec<Registration<<R as Router>::Group, <R as Router>::Route>>;

fn group_options(group: &MaterializedGroup) -> GroupOptions {
    GroupOptions {
        name: group.info.group.clone(),
        prefix: group.info.path.clone(),
        triggers_enter: Vec::new(),
        triggers_exit: Vec::new(),
    }
}

fn route_options(group: &str, route: &GuardedRoute) -> RouteOptions {
    RouteOptions {
        name: route.record.name.clone(),
        group: group.to_string(),
        primary_group: route.record.group.clone(),
        groups: route.record.groups.clone(),
        action: route.record.action.clone(),
        triggers_enter: route.triggers_enter.clone(),
        extra: route.record.extra.clone(),
    }
}

/// Register one group and its routes, appending the handles to `out`.
pub fn emit_group<R: Router>(group: &MaterializedGroup, router: &mut R, out: &mut Registrations<R>) {
    let handle = router.group(group_options(group));
    let routes: Vec<R::Route> = group
        .routes
        .iter()
        .map(|route| router.route(&handle, &route.record.path, route_options(&group.info.group, route)))
        .collect();

    tracing::debug!(group = %group.info.group, routes = routes.len(), "Registered group");

    out.push(Registration::Group(handle));
    out.extend(routes.into_iter().map(Registration::Route));
}

/// Register every group with `router`.
pub fn emit_registrations<R: Router>(groups: &RoutesByGroup, router: &mut R) -> Registrations<R> {
    let mut out = Vec::new();
    for group in groups.values() {
        emit_group(group, router, &mut out);
    }
    out
}
