//! Access control guards.
//! Builds the login and role triggers attached to guarded routes.

use std::sync::Arc;

use crate::config::schema::AccessConfig;
use crate::security::guard::{GuardOutcome, NavigationContext, Trigger, TriggerKind};

/// Session queries needed by guards.
pub trait IdentityProvider: Send + Sync {
    /// A login is currently in flight.
    fn is_logging_in(&self) -> bool;

    /// Id of the signed-in user, if any.
    fn current_user(&self) -> Option<String>;
}

/// Role membership checks.
pub trait RoleAuthorizer: Send + Sync {
    /// Whether `user` holds at least one of `roles`.
    fn has_any_role(&self, user: &str, roles: &[String]) -> bool;
}

/// Injected identity and role services plus the redirect targets.
#[derive(Clone)]
pub struct AccessControl {
    identity: Arc<dyn IdentityProvider>,
    authorizer: Arc<dyn RoleAuthorizer>,
    login_route: String,
    no_permission_route: String,
}

impl AccessControl {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        authorizer: Arc<dyn RoleAuthorizer>,
        config: &AccessConfig,
    ) -> Self {
        Self {
            identity,
            authorizer,
            login_route: config.login_route.clone(),
            no_permission_route: config.no_permission_route.clone(),
        }
    }

    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    pub fn no_permission_route(&self) -> &str {
        &self.no_permission_route
    }

    /// Redirects to the login route unless a login is pending or a user is signed in.
    pub fn login_guard(&self) -> Trigger {
        let identity = Arc::clone(&self.identity);
        let target = self.login_route.clone();
        Trigger::new(TriggerKind::LoginRequired, move |ctx: &NavigationContext<'_>| {
            if identity.is_logging_in() || identity.current_user().is_some() {
                return GuardOutcome::Continue;
            }
            tracing::debug!(route = %ctx.route, path = %ctx.path, redirect = %target, "Login required");
            GuardOutcome::Redirect(target.clone())
        })
    }

    /// Redirects a signed-in user holding none of `roles` to the no-permission route.
    ///
    /// Anonymous visitors pass; pair with [`login_guard`](Self::login_guard)
    /// to keep them out.
    pub fn role_guard(&self, roles: Vec<String>) -> Trigger {
        let identity = Arc::clone(&self.identity);
        let authorizer = Arc::clone(&self.authorizer);
        let target = self.no_permission_route.clone();
        let required = roles.clone();
        Trigger::new(TriggerKind::RoleCheck { roles }, move |ctx: &NavigationContext<'_>| {
            if let Some(user) = identity.current_user() {
                if !authorizer.has_any_role(&user, &required) {
                    tracing::debug!(
                        route = %ctx.route,
                        user = %user,
                        roles = ?required,
                        redirect = %target,
                        "Missing required role"
                    );
                    return GuardOutcome::Redirect(target.clone());
                }
            }
            GuardOutcome::Continue
        })
    }
}

impl std::fmt::Debug for AccessControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessControl")
            .field("login_route", &self.login_route)
            .field("no_permission_route", &self.no_permission_route)
            .finish()
    }
}
