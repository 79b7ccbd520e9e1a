//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Pipeline stages produce:
//!     → warn!  (configuration anomalies repaired with placeholders)
//!     → debug! (guard redirects, group registrations)
//!     → info!  (startup summary)
//!
//! logging.rs installs the subscriber:
//!     RUST_LOG (if set) or observability.log_level → EnvFilter → fmt layer → stderr
//! ```
//!
//! # Design Decisions
//! - The library only emits events; installing a subscriber is the binary's job
//! - Initialization is idempotent so tests and embedders can call it freely

pub mod logging;

pub use logging::init_logging;
