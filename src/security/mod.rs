//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Route build (startup):
//!     RouteRecord { auth_required, roles }
//!     → access_control.rs (AccessControl builds guards)
//!     → guard.rs (Trigger list attached to the route)
//!
//! Navigation (later, inside the router):
//!     → Trigger::check(NavigationContext)
//!     → IdentityProvider / RoleAuthorizer queried lazily
//!     → GuardOutcome::Continue or GuardOutcome::Redirect(route name)
//! ```
//!
//! # Design Decisions
//! - Identity and role checks are injected, never read from globals
//! - Guards are evaluated at navigation time, not at build time
//! - First redirect wins; remaining guards are skipped

pub mod access_control;
pub mod guard;
pub mod session;

pub use access_control::{AccessControl, IdentityProvider, RoleAuthorizer};
pub use guard::{GuardOutcome, NavigationContext, Trigger, TriggerKind};
