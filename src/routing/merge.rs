//! Combining route sources (application core + plugins).
//!
//! Keyed merges are shallow and right-biased: on a key collision the later
//! source's value wins and keeps the earlier key's position. Group lists
//! are concatenated.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::routing::descriptor::RouteDescriptors;
use crate::routing::materialize::RoutesByGroup;
use crate::routing::route_map::RouteMap;

fn merge_keyed<K: Hash + Eq, V>(mut a: IndexMap<K, V>, b: IndexMap<K, V>) -> IndexMap<K, V> {
    a.extend(b);
    a
}

/// Merge descriptor collections.
pub fn merge_routes(a: RouteDescriptors, b: RouteDescriptors) -> RouteDescriptors {
    merge_keyed(a, b)
}

/// Merge built route maps; anomalies of both are kept.
///
/// Records are not re-validated, so names or paths may collide across the
/// two maps. Merge descriptors with [`merge_routes`] before building when
/// uniqueness matters.
pub fn merge_route_map(a: RouteMap, b: RouteMap) -> RouteMap {
    let (records_a, mut anomalies) = a.into_parts();
    let (records_b, anomalies_b) = b.into_parts();
    anomalies.extend(anomalies_b);
    RouteMap::from_parts(merge_keyed(records_a, records_b), anomalies)
}

/// Concatenate group lists (e.g. emitted registrations).
pub fn merge_route_groups<T>(mut a: Vec<T>, b: Vec<T>) -> Vec<T> {
    a.extend(b);
    a
}

/// Merge materialized groups.
pub fn merge_routes_by_group(a: RoutesByGroup, b: RoutesByGroup) -> RoutesByGroup {
    merge_keyed(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LayoutConfig;
    use crate::routing::descriptor::RouteDescriptor;
    use crate::routing::fallback::SequentialIdGenerator;
    use crate::routing::route_map::build_route_map;

    fn descriptors(entries: Vec<(&str, &str)>) -> RouteDescriptors {
        entries
            .into_iter()
            .map(|(k, p)| (k.to_string(), RouteDescriptor::at(p)))
            .collect()
    }

    #[test]
    fn test_merge_routes_right_biased() {
        let a = descriptors(vec![("home", "/"), ("about", "/about")]);
        let b = descriptors(vec![("about", "/company/about"), ("shop", "/shop")]);

        let merged = merge_routes(a, b);
        let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["home", "about", "shop"]);
        assert_eq!(merged["about"].path.as_deref(), Some("/company/about"));
    }

    #[test]
    fn test_merge_route_map_identity() {
        let map = build_route_map(
            &descriptors(vec![("home", "/"), ("shop", "/shop/item")]),
            &LayoutConfig::default(),
            &SequentialIdGenerator::default(),
        );
        let merged = merge_route_map(map.clone(), RouteMap::new());
        assert_eq!(merged, map);
    }

    #[test]
    fn test_merge_route_map_keeps_anomalies() {
        let generator = SequentialIdGenerator::default();
        let a = build_route_map(&descriptors(vec![("a", "/x"), ("b", "/x")]), &LayoutConfig::default(), &generator);
        let b = build_route_map(&descriptors(vec![("c", "/c")]), &LayoutConfig::default(), &generator);
        let merged = merge_route_map(a, b);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.anomalies().len(), 1);
    }

    #[test]
    fn test_merge_route_groups_concatenates() {
        let a = vec![1, 2];
        assert_eq!(merge_route_groups(a.clone(), Vec::new()), a);
        assert_eq!(merge_route_groups(a, vec![2, 3]), vec![1, 2, 2, 3]);
    }

    #[test]
    fn test_merge_routes_by_group_empty() {
        assert!(merge_routes_by_group(RoutesByGroup::new(), RoutesByGroup::new()).is_empty());
    }
}
