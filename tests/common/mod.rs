//! Shared fixtures for the integration suites.

// Allow dead code since not all test files use all utilities
#![allow(dead_code)]

use std::collections::HashMap;
use trap_enrich::cmdb::{
    BusinessService, CiLookup, CmdbProvider, CmdbResult, ConfigItem, GroupingQuery,
};
use trap_enrich::route::Category;
use trap_enrich::varbind::TRAP_IDENTITY_OID;

/// Build a varbind blob from `(key, value)` lines.
pub fn blob(lines: &[(&str, &str)]) -> String {
    lines
        .iter()
        .map(|(key, value)| format!("{key} = {value}\n"))
        .collect()
}

/// Build a blob carrying just a trap identity and a sysName.
pub fn trap_blob(trap: &str, sys_name: &str) -> String {
    blob(&[(TRAP_IDENTITY_OID, trap), ("1.3.6.1.2.1.1.5.0", sys_name)])
}

/// In-memory CMDB with explicit node, rule, and serial tables.
#[derive(Default)]
pub struct InMemoryCmdb {
    pub nodes: HashMap<String, ConfigItem>,
    pub rules: HashMap<(String, Category), String>,
    pub serials: HashMap<String, String>,
    pub services: Vec<BusinessService>,
}

impl InMemoryCmdb {
    pub fn with_node(mut self, node: &str, class_name: &str) -> Self {
        self.nodes.insert(
            node.to_string(),
            ConfigItem {
                sys_id: format!("ci-{node}"),
                class_name: class_name.to_string(),
            },
        );
        self
    }

    pub fn with_rule(mut self, vendor: &str, category: Category, group: &str) -> Self {
        self.rules
            .insert((vendor.to_string(), category), group.to_string());
        self
    }

    pub fn with_serial(mut self, serial: &str, group: &str) -> Self {
        self.serials.insert(serial.to_string(), group.to_string());
        self
    }
}

impl CmdbProvider for InMemoryCmdb {
    fn find_config_item(&self, lookup: &CiLookup<'_>) -> CmdbResult<Option<ConfigItem>> {
        Ok(self.nodes.get(lookup.node).cloned())
    }

    fn grouping_rule(&self, query: &GroupingQuery<'_>) -> CmdbResult<Option<String>> {
        Ok(self
            .rules
            .get(&(query.vendor.to_string(), query.category))
            .cloned())
    }

    fn serial_group(&self, serial: &str, _category: Category) -> CmdbResult<Option<String>> {
        Ok(self.serials.get(serial).cloned())
    }

    fn related_services(&self, _ci: &ConfigItem) -> CmdbResult<Vec<BusinessService>> {
        Ok(self.services.clone())
    }
}
