//! Placeholder identifier generation.
//!
//! # Responsibilities
//! - Produce collision-resistant ids for generated names, paths and groups
//! - Keep the generation policy swappable so tests get stable placeholders
//!
//! # Design Decisions
//! - Generators only produce the id; callers add the `random-` / `/random-` prefix
//! - Short ids use the unambiguous 55-character alphabet (no 0/1/I/O/l)

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

const SHORT_ID_ALPHABET: &[u8] = b"23456789ABCDEFGHJKLMNPQRSTWXYZabcdefghijkmnopqrstuvwxyz";
const SHORT_ID_LEN: usize = 17;

/// Source of placeholder identifiers for misconfigured routes.
pub trait IdGenerator: Send + Sync + std::fmt::Debug {
    /// Returns a fresh identifier.
    fn generate(&self) -> String;
}

/// 17-character alphanumeric ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShortIdGenerator;

impl IdGenerator for ShortIdGenerator {
    fn generate(&self) -> String {
        (0..SHORT_ID_LEN)
            .map(|_| SHORT_ID_ALPHABET[fastrand::usize(..SHORT_ID_ALPHABET.len())] as char)
            .collect()
    }
}

/// Hyphen-less UUID v4 ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Deterministic `<prefix><n>` ids, counting from 1.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicUsize,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicUsize::new(1),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", self.prefix, n)
    }
}

/// Generator selection in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Short,
    Uuid,
}

impl IdStrategy {
    /// Build the generator for this strategy.
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Short => Box::new(ShortIdGenerator),
            IdStrategy::Uuid => Box::new(UuidGenerator),
        }
    }
}

/// `random-<id>`, used for generated route names.
pub fn random_name(generator: &dyn IdGenerator) -> String {
    format!("random-{}", generator.generate())
}

/// `/random-<id>`, used for generated paths and groups.
pub fn random_path(generator: &dyn IdGenerator) -> String {
    format!("/random-{}", generator.generate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id_shape() {
        let id = ShortIdGenerator.generate();
        assert_eq!(id.len(), SHORT_ID_LEN);
        assert!(id.bytes().all(|b| SHORT_ID_ALPHABET.contains(&b)));
        assert_ne!(id, ShortIdGenerator.generate());
    }

    #[test]
    fn test_uuid_id_shape() {
        let id = UuidGenerator.generate();
        assert_eq!(id.len(), 32);
        assert!(!id.contains('-'));
    }

    #[test]
    fn test_sequential_ids() {
        let generator = SequentialIdGenerator::new("x");
        assert_eq!(random_name(&generator), "random-x1");
        assert_eq!(random_path(&generator), "/random-x2");
    }

    #[test]
    fn test_strategy_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            strategy: IdStrategy,
        }
        let w: Wrapper = toml::from_str("strategy = \"uuid\"").unwrap();
        assert_eq!(w.strategy, IdStrategy::Uuid);
    }
}
