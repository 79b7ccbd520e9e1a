//! In-memory identity and role sources.
//!
//! Used by the CLI `simulate` command and as test doubles; real applications
//! plug their own session store and role checker into [`AccessControl`].
//!
//! [`AccessControl`]: crate::security::AccessControl

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::security::access_control::{IdentityProvider, RoleAuthorizer};

/// A session whose state is set explicitly.
#[derive(Debug, Default)]
pub struct StaticSession {
    user: RwLock<Option<String>>,
    logging_in: AtomicBool,
}

impl StaticSession {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user(id: impl Into<String>) -> Self {
        Self {
            user: RwLock::new(Some(id.into())),
            logging_in: AtomicBool::new(false),
        }
    }

    pub fn logging_in() -> Self {
        Self {
            user: RwLock::new(None),
            logging_in: AtomicBool::new(true),
        }
    }

    pub fn sign_in(&self, id: impl Into<String>) {
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = Some(id.into());
        self.logging_in.store(false, Ordering::SeqCst);
    }

    pub fn sign_out(&self) {
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl IdentityProvider for StaticSession {
    fn is_logging_in(&self) -> bool {
        self.logging_in.load(Ordering::SeqCst)
    }

    fn current_user(&self) -> Option<String> {
        self.user.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

/// User → granted roles.
#[derive(Debug, Clone, Default)]
pub struct RoleTable {
    grants: HashMap<String, HashSet<String>>,
}

impl RoleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(mut self, user: impl Into<String>, role: impl Into<String>) -> Self {
        self.grants.entry(user.into()).or_default().insert(role.into());
        self
    }
}

impl RoleAuthorizer for RoleTable {
    fn has_any_role(&self, user: &str, roles: &[String]) -> bool {
        self.grants
            .get(user)
            .is_some_and(|granted| roles.iter().any(|role| granted.contains(role)))
    }
}
