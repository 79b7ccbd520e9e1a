//! The full transformation: descriptors → route map → groups → guarded groups.

use crate::config::schema::LayoutConfig;
use crate::error::IntegrityError;
use crate::routing::descriptor::RouteDescriptors;
use crate::routing::emitter::{emit_registrations, Registrations, Router};
use crate::routing::fallback::IdGenerator;
use crate::routing::grouper::{group_routes, RouteGroupIndex};
use crate::routing::materialize::{materialize_groups, RoutesByGroup};
use crate::routing::route_map::{Anomaly, RouteMap, RouteMapBuilder};
use crate::security::AccessControl;

/// Every intermediate structure of one transformation.
#[derive(Debug, Clone)]
pub struct RouteTable {
    pub route_map: RouteMap,
    pub route_groups: RouteGroupIndex,
    pub routes_by_group: RoutesByGroup,
}

impl RouteTable {
    /// Run the pipeline up to (not including) router registration.
    pub fn build(
        descriptors: &RouteDescriptors,
        layout: &LayoutConfig,
        generator: &dyn IdGenerator,
        access: &AccessControl,
    ) -> Result<Self, IntegrityError> {
        let route_map = RouteMapBuilder::new(layout, generator).build(descriptors);
        let route_groups = group_routes(&route_map);
        let routes_by_group = materialize_groups(&route_groups, &route_map, access)?;

        Ok(Self {
            route_map,
            route_groups,
            routes_by_group,
        })
    }

    /// Register all groups with `router`.
    pub fn register<R: Router>(&self, router: &mut R) -> Registrations<R> {
        emit_registrations(&self.routes_by_group, router)
    }

    pub fn anomalies(&self) -> &[Anomaly] {
        self.route_map.anomalies()
    }
}
