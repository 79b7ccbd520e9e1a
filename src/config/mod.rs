//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML or JSON)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MapperConfig (validated, immutable)
//!     → layout / access / fallback settings handed to the route pipeline
//!
//! Extra route sources (plugins):
//!     → loader.rs load_routes (routes table only)
//!     → merged with the core routes before building
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Route order is the declaration order in the file

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_routes, ConfigError};
pub use schema::{AccessConfig, FallbackConfig, LayoutConfig, MapperConfig, ObservabilityConfig};
