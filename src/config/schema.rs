//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the mapper.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::render::SlotMap;
use crate::routing::descriptor::RouteDescriptors;
use crate::routing::fallback::IdStrategy;

/// Root configuration for route mapping.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MapperConfig {
    /// Default view layout used by generated actions.
    pub layout: LayoutConfig,

    /// Well-known routes targeted by authorization guards.
    pub access: AccessConfig,

    /// Placeholder generation for misconfigured routes.
    pub fallback: FallbackConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Route descriptors keyed by entry key, in declaration order.
    pub routes: RouteDescriptors,
}

/// Default view layout.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Root layout identifier passed to the renderer.
    pub root: String,

    /// Slot that receives the route's own view.
    pub main_slot: String,

    /// View shown for unknown paths.
    pub not_found: String,

    /// Static slots rendered around the main view.
    pub slots: SlotMap,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let slots = [("nav", "Header"), ("footer", "Footer")]
            .into_iter()
            .map(|(slot, view)| (slot.to_string(), view.to_string()))
            .collect();
        Self {
            root: "App_Body".to_string(),
            main_slot: "main".to_string(),
            not_found: "App_Not_Found".to_string(),
            slots,
        }
    }
}

/// Redirect targets for guards.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Route name used when authentication is required.
    pub login_route: String,

    /// Route name used when the user lacks the group roles.
    pub no_permission_route: String,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            login_route: "APP_LOGIN".to_string(),
            no_permission_route: "NO_PERMISSION".to_string(),
        }
    }
}

/// Fallback id configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FallbackConfig {
    /// Id generator used for placeholder names, paths and groups.
    pub id_strategy: IdStrategy,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
