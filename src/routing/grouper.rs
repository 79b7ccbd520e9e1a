//! Group index: which routes belong to which groups.
//!
//! # Responsibilities
//! - Pick one representative route per group (first seen in map order)
//! - Record every group a route belongs to: its primary group, then the
//!   secondary `groups` it lists
//!
//! # Design Decisions
//! - Membership is a relation kept beside the records; records are never
//!   rewritten, so a route's primary group survives multi-group registration

use indexmap::{IndexMap, IndexSet};

use crate::routing::route_map::{RouteMap, RouteRecord};

/// Group name → representative route, plus route → groups memberships.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteGroupIndex {
    representatives: IndexMap<String, String>,
    memberships: IndexMap<String, IndexSet<String>>,
}

impl RouteGroupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry key of the representative route of `group`.
    pub fn representative(&self, group: &str) -> Option<&str> {
        self.representatives.get(group).map(String::as_str)
    }

    /// `(group, representative key)` pairs in first-seen order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &str)> {
        self.representatives
            .iter()
            .map(|(group, key)| (group.as_str(), key.as_str()))
    }

    pub fn len(&self) -> usize {
        self.representatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.representatives.is_empty()
    }

    /// Groups of the route stored under `key`, primary first.
    pub fn memberships(&self, key: &str) -> impl Iterator<Item = &str> {
        self.memberships
            .get(key)
            .into_iter()
            .flat_map(|groups| groups.iter().map(String::as_str))
    }

    pub fn is_member(&self, key: &str, group: &str) -> bool {
        self.memberships
            .get(key)
            .is_some_and(|groups| groups.contains(group))
    }

    /// Register `record` as a member of `group`; the first member becomes
    /// the representative.
    pub fn add_member(&mut self, record: &RouteRecord, group: &str) {
        self.representatives
            .entry(group.to_string())
            .or_insert_with(|| record.key.clone());
        self.memberships
            .entry(record.key.clone())
            .or_default()
            .insert(group.to_string());
    }
}

/// Partition a route map into groups.
pub fn group_routes(map: &RouteMap) -> RouteGroupIndex {
    let mut index = RouteGroupIndex::new();
    for record in map.iter() {
        index.add_member(record, &record.group);
        for group in &record.groups {
            index.add_member(record, group);
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LayoutConfig;
    use crate::routing::descriptor::{RouteDescriptor, RouteDescriptors};
    use crate::routing::fallback::SequentialIdGenerator;
    use crate::routing::route_map::build_route_map;

    fn map_of(entries: Vec<(&str, RouteDescriptor)>) -> RouteMap {
        let descriptors: RouteDescriptors = entries
            .into_iter()
            .map(|(k, d)| (k.to_string(), d))
            .collect();
        build_route_map(&descriptors, &LayoutConfig::default(), &SequentialIdGenerator::default())
    }

    #[test]
    fn test_first_route_represents_group() {
        let map = map_of(vec![
            ("home", RouteDescriptor::at("/")),
            ("about", RouteDescriptor::at("/about")),
            ("shop", RouteDescriptor::at("/shop")),
            ("item", RouteDescriptor::at("/shop/item").group("/shop")),
        ]);
        let index = group_routes(&map);

        let groups: Vec<(&str, &str)> = index.groups().collect();
        assert_eq!(groups, vec![("/", "home"), ("/shop", "shop")]);
        assert!(index.is_member("item", "/shop"));
        assert!(index.is_member("about", "/"));
    }

    #[test]
    fn test_secondary_groups_keep_primary() {
        let map = map_of(vec![
            ("dash", RouteDescriptor::at("/admin/dash")),
            (
                "report",
                RouteDescriptor::at("/reports/list").also_in("/admin").also_in("/audit"),
            ),
        ]);
        let index = group_routes(&map);

        let memberships: Vec<&str> = index.memberships("report").collect();
        assert_eq!(memberships, vec!["/reports", "/admin", "/audit"]);
        assert_eq!(map.get("report").unwrap().group, "/reports");
        assert_eq!(index.representative("/admin"), Some("dash"));
        assert_eq!(index.representative("/audit"), Some("report"));
    }

    #[test]
    fn test_duplicate_secondary_group_is_single_membership() {
        let map = map_of(vec![(
            "x",
            RouteDescriptor::at("/x/y").also_in("/x").also_in("/x"),
        )]);
        let index = group_routes(&map);
        assert_eq!(index.memberships("x").count(), 1);
        assert_eq!(index.len(), 1);
    }
}
