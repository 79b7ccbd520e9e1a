//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::sync::{Arc, Mutex};

use tempfile::NamedTempFile;

use route_mapper::config::AccessConfig;
use route_mapper::render::{SlotMap, ViewRenderer};
use route_mapper::routing::{RouteDescriptor, RouteDescriptors};
use route_mapper::security::session::{RoleTable, StaticSession};
use route_mapper::security::AccessControl;

/// Build an ordered descriptor collection from `(key, descriptor)` pairs.
pub fn descriptors(entries: Vec<(&str, RouteDescriptor)>) -> RouteDescriptors {
    entries.into_iter().map(|(k, d)| (k.to_string(), d)).collect()
}

/// Access control over a fixed session and role table.
pub fn access(session: StaticSession, roles: RoleTable) -> AccessControl {
    AccessControl::new(Arc::new(session), Arc::new(roles), &AccessConfig::default())
}

pub fn anonymous_access() -> AccessControl {
    access(StaticSession::anonymous(), RoleTable::new())
}

/// Records every render call as `layout:slot=view,...`.
#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: Mutex<Vec<String>>,
}

impl RecordingRenderer {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl ViewRenderer for RecordingRenderer {
    fn render(&self, layout: &str, slots: &SlotMap) {
        let slots: Vec<String> = slots.iter().map(|(s, v)| format!("{}={}", s, v)).collect();
        self.calls.lock().unwrap().push(format!("{}:{}", layout, slots.join(",")));
    }
}

/// Temp file holding `contents`, removed when dropped.
///
/// `suffix` picks the loader's format (`.toml` or `.json`).
pub fn temp_file(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("route-mapper-")
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}
