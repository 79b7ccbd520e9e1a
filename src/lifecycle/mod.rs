//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     MapperConfig.routes + plugin sources
//!         → merge_routes (right-biased, in source order)
//!         → RouteTable::build (map → groups → guarded groups)
//!         → RouteTable::register (router)
//!         → summary log
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then sources, then the router
//! - Fail fast: an integrity error aborts before anything is registered
//! - Anomalies are not fatal; they are logged and kept on the table

pub mod startup;

pub use startup::Startup;
