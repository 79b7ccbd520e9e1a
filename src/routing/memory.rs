//! In-memory router.
//!
//! # Responsibilities
//! - Store group and route registrations in call order
//! - Resolve a path to its registered route
//! - Simulate navigation: group triggers, route triggers, then the action
//!
//! # Design Decisions
//! - A path registered under several groups resolves to the first registration
//! - Lookup normalizes a trailing slash the same way the route map does

use crate::render::ViewRenderer;
use crate::routing::emitter::{GroupOptions, RouteOptions, Router};
use crate::routing::route_map::normalize_path;
use crate::security::guard::{run_triggers, GuardOutcome, NavigationContext};

/// Handle of a registered group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub usize);

/// Handle of a registered route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteId(pub usize);

#[derive(Debug, Clone)]
pub struct RegisteredRoute {
    pub group: GroupId,
    pub path: String,
    pub options: RouteOptions,
}

/// Result of navigating to a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// All triggers passed.
    Entered { route: String },
    /// A trigger redirected to another route.
    Redirected { route: String, to: String },
    /// No route is registered at the path.
    NotFound,
}

#[derive(Debug, Default)]
pub struct InMemoryRouter {
    groups: Vec<GroupOptions>,
    routes: Vec<RegisteredRoute>,
}

impl InMemoryRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[GroupOptions] {
        &self.groups
    }

    pub fn routes(&self) -> &[RegisteredRoute] {
        &self.routes
    }

    pub fn group_at(&self, id: GroupId) -> Option<&GroupOptions> {
        self.groups.get(id.0)
    }

    pub fn route_at(&self, id: RouteId) -> Option<&RegisteredRoute> {
        self.routes.get(id.0)
    }

    /// Routes registered under `group`, in registration order.
    pub fn routes_in(&self, group: GroupId) -> impl Iterator<Item = &RegisteredRoute> {
        self.routes.iter().filter(move |r| r.group == group)
    }

    pub fn resolve(&self, path: &str) -> Option<&RegisteredRoute> {
        let path = normalize_path(path);
        self.routes.iter().find(|r| r.path == path)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&RegisteredRoute> {
        self.routes.iter().find(|r| r.options.name == name)
    }

    /// Run the triggers for `path` without invoking its action.
    pub fn navigate(&self, path: &str) -> Navigation {
        match self.resolve(path) {
            Some(route) => self.check(route),
            None => Navigation::NotFound,
        }
    }

    /// Run the triggers for `path` and, if they pass, its action.
    pub fn enter(&self, path: &str, renderer: &dyn ViewRenderer) -> Navigation {
        let Some(route) = self.resolve(path) else {
            return Navigation::NotFound;
        };
        let outcome = self.check(route);
        if let Navigation::Entered { .. } = outcome {
            route.options.action.invoke(renderer);
        }
        outcome
    }

    fn check(&self, route: &RegisteredRoute) -> Navigation {
        let ctx = NavigationContext {
            route: &route.options.name,
            path: &route.path,
        };
        let group_triggers = self
            .group_at(route.group)
            .map(|g| g.triggers_enter.as_slice())
            .unwrap_or_default();

        let outcome = match run_triggers(group_triggers, &ctx) {
            GuardOutcome::Continue => run_triggers(&route.options.triggers_enter, &ctx),
            redirect => redirect,
        };

        match outcome {
            GuardOutcome::Continue => Navigation::Entered {
                route: route.options.name.clone(),
            },
            GuardOutcome::Redirect(to) => Navigation::Redirected {
                route: route.options.name.clone(),
                to,
            },
        }
    }
}

impl Router for InMemoryRouter {
    type Group = GroupId;
    type Route = RouteId;

    fn group(&mut self, options: GroupOptions) -> GroupId {
        self.groups.push(options);
        GroupId(self.groups.len() - 1)
    }

    fn route(&mut self, group: &GroupId, path: &str, options: RouteOptions) -> RouteId {
        if self.resolve(path).is_some() {
            tracing::debug!(path = %path, name = %options.name, "Path already registered, first registration wins");
        }
        self.routes.push(RegisteredRoute {
            group: *group,
            path: path.to_string(),
            options,
        });
        RouteId(self.routes.len() - 1)
    }
}
