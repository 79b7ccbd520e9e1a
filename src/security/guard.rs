//! Navigation triggers.

use std::fmt;
use std::sync::Arc;

/// Result of evaluating a trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Let navigation proceed to the next trigger.
    Continue,
    /// Abort navigation and go to the named route.
    Redirect(String),
}

impl GuardOutcome {
    pub fn is_redirect(&self) -> bool {
        matches!(self, GuardOutcome::Redirect(_))
    }
}

/// Route being entered when a trigger runs.
#[derive(Debug, Clone, Copy)]
pub struct NavigationContext<'a> {
    pub route: &'a str,
    pub path: &'a str,
}

/// What a trigger enforces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerKind {
    /// Redirects anonymous visitors to the login route.
    LoginRequired,
    /// Redirects users lacking all of `roles` to the no-permission route.
    RoleCheck { roles: Vec<String> },
    /// Caller-defined trigger.
    Custom(String),
}

impl fmt::Display for TriggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerKind::LoginRequired => write!(f, "login-required"),
            TriggerKind::RoleCheck { roles } => write!(f, "role-check({})", roles.join("|")),
            TriggerKind::Custom(name) => write!(f, "custom({})", name),
        }
    }
}

type Check = Arc<dyn Fn(&NavigationContext<'_>) -> GuardOutcome + Send + Sync>;

/// A callback the router runs on entering (or leaving) a route.
#[derive(Clone)]
pub struct Trigger {
    kind: TriggerKind,
    check: Check,
}

impl Trigger {
    pub fn new<F>(kind: TriggerKind, check: F) -> Self
    where
        F: Fn(&NavigationContext<'_>) -> GuardOutcome + Send + Sync + 'static,
    {
        Self {
            kind,
            check: Arc::new(check),
        }
    }

    /// Named caller-defined trigger.
    pub fn custom<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&NavigationContext<'_>) -> GuardOutcome + Send + Sync + 'static,
    {
        Self::new(TriggerKind::Custom(name.into()), check)
    }

    pub fn kind(&self) -> &TriggerKind {
        &self.kind
    }

    pub fn check(&self, ctx: &NavigationContext<'_>) -> GuardOutcome {
        (self.check)(ctx)
    }
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger").field("kind", &self.kind).finish()
    }
}

/// Run triggers in order; the first redirect wins.
pub fn run_triggers(triggers: &[Trigger], ctx: &NavigationContext<'_>) -> GuardOutcome {
    for trigger in triggers {
        let outcome = trigger.check(ctx);
        if outcome.is_redirect() {
            return outcome;
        }
    }
    GuardOutcome::Continue
}
