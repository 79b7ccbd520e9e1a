//! Group key derivation from route paths.
//!
//! # Rules
//! ```text
//! "/"              → "/"
//! "/child"         → "/"          (root-level child)
//! "/group/"        → "/group"
//! "/group/child"   → "/group"
//! anything deeper  → "/random-<id>" + warning
//! ```
//!
//! Segments are whatever follows the first `/`, split on `/`; a trailing
//! empty segment counts, so `"/group/"` is a two-segment path.

use crate::routing::fallback::{random_path, IdGenerator};

/// Group key of the root and of its direct children.
pub const ROOT_GROUP: &str = "/";

/// Group key for `path`, or `None` when its shape has no derivable group.
pub fn derive_group(path: &str) -> Option<String> {
    if path == ROOT_GROUP {
        return Some(ROOT_GROUP.to_string());
    }

    let mut segments = path.split('/');
    segments.next();
    let segments: Vec<&str> = segments.collect();

    match segments.as_slice() {
        [_] => Some(ROOT_GROUP.to_string()),
        [first, _] => Some(format!("/{}", first)),
        _ => None,
    }
}

/// Derive the group key for `path`, generating a random group when the
/// shape is unsupported.
pub fn resolve_group(path: &str, generator: &dyn IdGenerator) -> String {
    derive_group(path).unwrap_or_else(|| {
        let group = random_path(generator);
        tracing::warn!(
            path = %path,
            group = %group,
            "Unsupported path shape for group derivation, generated random group"
        );
        group
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::fallback::SequentialIdGenerator;

    #[test]
    fn test_root_and_children() {
        let generator = SequentialIdGenerator::default();
        assert_eq!(resolve_group("/", &generator), "/");
        assert_eq!(resolve_group("/about", &generator), "/");
    }

    #[test]
    fn test_two_segment_paths() {
        let generator = SequentialIdGenerator::default();
        assert_eq!(resolve_group("/shop/item", &generator), "/shop");
        assert_eq!(resolve_group("/shop/", &generator), "/shop");
    }

    #[test]
    fn test_deep_path_falls_back() {
        let generator = SequentialIdGenerator::new("g");
        assert_eq!(resolve_group("/a/b/c", &generator), "/random-g1");
        assert_eq!(resolve_group("/a/b/", &generator), "/random-g2");
    }

    #[test]
    fn test_derive_group_reports_unsupported_shapes() {
        assert_eq!(derive_group("/shop/item").as_deref(), Some("/shop"));
        assert_eq!(derive_group("/a/b/c"), None);
        assert_eq!(derive_group(""), None);
    }

    #[test]
    fn test_relative_path_falls_back() {
        let generator = SequentialIdGenerator::new("g");
        assert_eq!(resolve_group("about", &generator), "/random-g1");
    }
}
