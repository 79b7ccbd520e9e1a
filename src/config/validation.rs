//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Layout must name a root and a main slot distinct from the static slots
//! - Guard redirect targets must be non-empty and distinct
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: MapperConfig → Result<(), Vec<ValidationError>>
//! - Route descriptors are not validated here; the route map builder
//!   repairs them at build time

use thiserror::Error;

use crate::config::schema::MapperConfig;

/// A semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("layout.root must not be empty")]
    EmptyLayoutRoot,

    #[error("layout.main_slot must not be empty")]
    EmptyMainSlot,

    #[error("layout.main_slot '{0}' is also a static slot")]
    MainSlotShadowsStatic(String),

    #[error("layout slot '{0}' has an empty view")]
    EmptySlotView(String),

    #[error("access.{0} must not be empty")]
    EmptyRedirect(&'static str),

    #[error("access.login_route and access.no_permission_route are both '{0}'")]
    SameRedirect(String),

    #[error("observability.log_level '{0}' is not a valid filter")]
    InvalidLogLevel(String),
}

/// Validate a loaded configuration.
pub fn validate_config(config: &MapperConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let layout = &config.layout;
    if layout.root.trim().is_empty() {
        errors.push(ValidationError::EmptyLayoutRoot);
    }
    if layout.main_slot.trim().is_empty() {
        errors.push(ValidationError::EmptyMainSlot);
    } else if layout.slots.contains_key(&layout.main_slot) {
        errors.push(ValidationError::MainSlotShadowsStatic(layout.main_slot.clone()));
    }
    for (slot, view) in &layout.slots {
        if view.trim().is_empty() {
            errors.push(ValidationError::EmptySlotView(slot.clone()));
        }
    }

    let access = &config.access;
    if access.login_route.trim().is_empty() {
        errors.push(ValidationError::EmptyRedirect("login_route"));
    }
    if access.no_permission_route.trim().is_empty() {
        errors.push(ValidationError::EmptyRedirect("no_permission_route"));
    }
    if !access.login_route.is_empty() && access.login_route == access.no_permission_route {
        errors.push(ValidationError::SameRedirect(access.login_route.clone()));
    }

    let level = &config.observability.log_level;
    if tracing_subscriber::EnvFilter::try_new(level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
