//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     RouteDescriptors (ordered, keyed)
//!     → route_map.rs (names, paths, groups, default actions)
//!         ↳ group.rs (group key from path)
//!         ↳ fallback.rs (placeholder ids)
//!     → grouper.rs (representatives + memberships)
//!     → materialize.rs (member routes + entry guards)
//!     → emitter.rs (router groups and routes, in order)
//!
//! Multiple sources:
//!     merge.rs (right-biased keyed merges, list concatenation)
//! ```
//!
//! # Design Decisions
//! - Compilation never fails on bad input; anomalies degrade to placeholders
//! - Every stage returns fresh values; nothing is mutated after the pipeline
//! - Deterministic given the input order and the id generator

pub mod descriptor;
pub mod emitter;
pub mod fallback;
pub mod group;
pub mod grouper;
pub mod materialize;
pub mod memory;
pub mod merge;
pub mod route_map;
pub mod table;

pub use descriptor::{RouteDescriptor, RouteDescriptors};
pub use emitter::{emit_registrations, GroupOptions, Registration, Registrations, RouteOptions, Router};
pub use fallback::{IdGenerator, IdStrategy, SequentialIdGenerator, ShortIdGenerator, UuidGenerator};
pub use group::resolve_group;
pub use grouper::{group_routes, RouteGroupIndex};
pub use materialize::{materialize_groups, GroupInfo, GuardedRoute, MaterializedGroup, RoutesByGroup};
pub use memory::{InMemoryRouter, Navigation};
pub use merge::{merge_route_groups, merge_route_map, merge_routes, merge_routes_by_group};
pub use route_map::{build_route_map, Anomaly, RouteMap, RouteMapBuilder, RouteRecord};
pub use table::RouteTable;
