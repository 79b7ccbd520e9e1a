//! Startup orchestration.
//!
//! # Responsibilities
//! - Merge the core route source with plugin sources
//! - Pick the fallback id generator from the config unless one is injected
//! - Build the route table and register it with a router
//!
//! # Design Decisions
//! - Fail fast: any integrity error is fatal
//! - Registration happens only after the whole table is built

use crate::config::MapperConfig;
use crate::error::Result;
use crate::routing::descriptor::RouteDescriptors;
use crate::routing::emitter::{Registrations, Router};
use crate::routing::fallback::IdGenerator;
use crate::routing::merge::merge_routes;
use crate::routing::table::RouteTable;
use crate::security::AccessControl;

/// Builds and registers the route table for one application start.
pub struct Startup<'a> {
    config: &'a MapperConfig,
    sources: Vec<RouteDescriptors>,
    generator: Box<dyn IdGenerator>,
}

impl<'a> Startup<'a> {
    pub fn new(config: &'a MapperConfig) -> Self {
        Self {
            config,
            sources: Vec::new(),
            generator: config.fallback.id_strategy.generator(),
        }
    }

    /// Add a route source merged after the config routes and any earlier source.
    pub fn with_source(mut self, source: RouteDescriptors) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_generator(mut self, generator: Box<dyn IdGenerator>) -> Self {
        self.generator = generator;
        self
    }

    /// All descriptors, merged in source order.
    pub fn descriptors(&self) -> RouteDescriptors {
        self.sources
            .iter()
            .cloned()
            .fold(self.config.routes.clone(), merge_routes)
    }

    /// Build the route table without registering it.
    pub fn build(&self, access: &AccessControl) -> Result<RouteTable> {
        let descriptors = self.descriptors();
        let table = RouteTable::build(&descriptors, &self.config.layout, self.generator.as_ref(), access)?;

        tracing::info!(
            sources = self.sources.len() + 1,
            routes = table.route_map.len(),
            groups = table.routes_by_group.len(),
            anomalies = table.anomalies().len(),
            "Route table built"
        );

        Ok(table)
    }

    /// Build the route table and register it with `router`.
    pub fn run<R: Router>(&self, access: &AccessControl, router: &mut R) -> Result<(RouteTable, Registrations<R>)> {
        let table = self.build(access)?;
        let registrations = table.register(router);

        tracing::info!(registrations = registrations.len(), "Routes registered");

        Ok((table, registrations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::routing::descriptor::RouteDescriptor;
    use crate::routing::fallback::SequentialIdGenerator;
    use crate::routing::memory::InMemoryRouter;
    use crate::security::session::{RoleTable, StaticSession};

    fn access(config: &MapperConfig) -> AccessControl {
        AccessControl::new(
            Arc::new(StaticSession::anonymous()),
            Arc::new(RoleTable::new()),
            &config.access,
        )
    }

    fn source(entries: Vec<(&str, RouteDescriptor)>) -> RouteDescriptors {
        entries.into_iter().map(|(k, d)| (k.to_string(), d)).collect()
    }

    #[test]
    fn test_plugin_sources_override_core() {
        let mut config = MapperConfig::default();
        config.routes = source(vec![("home", RouteDescriptor::at("/")), ("about", RouteDescriptor::at("/about"))]);

        let startup = Startup::new(&config)
            .with_source(source(vec![("about", RouteDescriptor::at("/info"))]))
            .with_source(source(vec![("blog", RouteDescriptor::at("/blog"))]));

        let descriptors = startup.descriptors();
        let keys: Vec<&str> = descriptors.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["home", "about", "blog"]);
        assert_eq!(descriptors["about"].path.as_deref(), Some("/info"));
    }

    #[test]
    fn test_run_registers_everything() {
        let mut config = MapperConfig::default();
        config.routes = source(vec![
            ("home", RouteDescriptor::at("/")),
            ("shop", RouteDescriptor::at("/shop/")),
            ("cart", RouteDescriptor::at("/shop/cart").auth_required()),
        ]);

        let mut router = InMemoryRouter::new();
        let (table, registrations) = Startup::new(&config)
            .with_generator(Box::new(SequentialIdGenerator::default()))
            .run(&access(&config), &mut router)
            .unwrap();

        assert_eq!(table.routes_by_group.len(), 2);
        assert_eq!(registrations.len(), 5);
        assert_eq!(router.groups().len(), 2);
        assert_eq!(router.resolve("/shop/cart").unwrap().options.triggers_enter.len(), 1);
    }

    #[test]
    fn test_empty_config_registers_nothing() {
        let config = MapperConfig::default();
        let mut router = InMemoryRouter::new();
        let (table, registrations) = Startup::new(&config).run(&access(&config), &mut router).unwrap();
        assert!(table.route_map.is_empty());
        assert!(registrations.is_empty());
    }
}
