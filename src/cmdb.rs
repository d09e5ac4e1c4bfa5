//! CMDB collaborator interface.
//!
//! Dynamic assignment routing can consult an external configuration item
//! store: grouping rules keyed by CI class and component category, serial
//! number mappings, and business-service relationships. The store itself is
//! out of scope; handlers depend on the [`CmdbProvider`] trait and production
//! or test implementations satisfy it. Every query is best-effort: an error
//! or empty result means "no dynamic group", never a processing failure.

use crate::route::Category;

/// CMDB query failure. Routing downgrades it to "no result" with a warning.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct CmdbError {
    message: String,
}

impl CmdbError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type for CMDB queries.
pub type CmdbResult<T> = std::result::Result<T, CmdbError>;

/// Keys used to locate a configuration item.
///
/// The node name is matched against CI name, FQDN, and IP address; a vendor
/// serial number (array serial, service tag) is an optional secondary key.
#[derive(Debug, Clone, Copy)]
pub struct CiLookup<'a> {
    pub node: &'a str,
    pub serial: Option<&'a str>,
}

/// A configuration item record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigItem {
    pub sys_id: String,
    pub class_name: String,
}

/// Query keys for a grouping rule.
#[derive(Debug, Clone, Copy)]
pub struct GroupingQuery<'a> {
    pub ci_class: &'a str,
    pub category: Category,
    pub vendor: &'a str,
    pub product: Option<&'a str>,
}

/// A business service related to a configuration item, carrying optional
/// per-category support groups plus a general fallback group.
#[derive(Debug, Clone, Default)]
pub struct BusinessService {
    pub name: String,
    pub support_group: Option<String>,
    pub category_groups: Vec<(Category, String)>,
}

impl BusinessService {
    /// The category-specific support group, falling back to the service's
    /// general support group.
    pub fn support_group_for(&self, category: Category) -> Option<&str> {
        self.category_groups
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, g)| g.as_str())
            .or(self.support_group.as_deref())
            .filter(|g| !g.is_empty())
    }
}

/// Read-only view of the external CI store.
pub trait CmdbProvider {
    /// Find the configuration item for a node, if any.
    fn find_config_item(&self, lookup: &CiLookup<'_>) -> CmdbResult<Option<ConfigItem>>;

    /// Look up a grouping rule by CI class, component category, and vendor.
    fn grouping_rule(&self, query: &GroupingQuery<'_>) -> CmdbResult<Option<String>>;

    /// Look up a serial-number-to-group mapping for one category.
    fn serial_group(&self, serial: &str, category: Category) -> CmdbResult<Option<String>>;

    /// Business services related to a configuration item.
    fn related_services(&self, ci: &ConfigItem) -> CmdbResult<Vec<BusinessService>>;
}

/// Provider used when no CMDB is wired up: every query finds nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCmdb;

impl CmdbProvider for NoCmdb {
    fn find_config_item(&self, _lookup: &CiLookup<'_>) -> CmdbResult<Option<ConfigItem>> {
        Ok(None)
    }

    fn grouping_rule(&self, _query: &GroupingQuery<'_>) -> CmdbResult<Option<String>> {
        Ok(None)
    }

    fn serial_group(&self, _serial: &str, _category: Category) -> CmdbResult<Option<String>> {
        Ok(None)
    }

    fn related_services(&self, _ci: &ConfigItem) -> CmdbResult<Vec<BusinessService>> {
        Ok(Vec::new())
    }
}
