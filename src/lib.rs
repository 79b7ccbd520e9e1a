//! Route table transformation pipeline.
//!
//! Turns keyed route descriptors into grouped, guard-annotated router
//! registrations.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod observability;
pub mod render;
pub mod routing;
pub mod security;

pub use config::schema::MapperConfig;
pub use error::{Error, IntegrityError, Result};
pub use lifecycle::Startup;
pub use routing::{RouteDescriptor, RouteDescriptors, RouteTable, Router};
pub use security::AccessControl;
