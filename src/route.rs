//! Assignment-group routing.
//!
//! Routing resolves which support team an enriched event lands with, through
//! an ordered fallback chain: hostname-pattern override (HP only), static
//! category mapping, CMDB-backed dynamic lookup, static default. The chain
//! always terminates with a non-empty group.

use crate::cmdb::{CiLookup, CmdbProvider, CmdbResult, GroupingQuery};
use serde::{Serialize, Serializer};
use std::fmt;

/// Trap category. The closed set of domain labels used across the vendor
/// catalogs; routing tables dispatch on it with an explicit default arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Hardware,
    Storage,
    Network,
    Management,
    Security,
    System,
    Cluster,
    Capacity,
    Replication,
    Protection,
    Performance,
    General,
}

impl Category {
    /// The display label, as written on outgoing events.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hardware => "Hardware",
            Self::Storage => "Storage",
            Self::Network => "Network",
            Self::Management => "Management",
            Self::Security => "Security",
            Self::System => "System",
            Self::Cluster => "Cluster",
            Self::Capacity => "Capacity",
            Self::Replication => "Replication",
            Self::Protection => "Protection",
            Self::Performance => "Performance",
            Self::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Run the CMDB fallback chain for one event.
///
/// Queries are gated on finding a configuration item for the node; from
/// there, the first non-empty group out of grouping rule, serial mapping,
/// and business-service relationships wins. Query errors are logged and
/// treated as "no result", so a degraded CMDB never fails enrichment.
pub fn dynamic_group(
    cmdb: &dyn CmdbProvider,
    lookup: &CiLookup<'_>,
    category: Category,
    vendor: &str,
    product: Option<&str>,
) -> Option<String> {
    let ci = best_effort(
        "find_config_item",
        lookup.node,
        cmdb.find_config_item(lookup),
    )??;

    let query = GroupingQuery {
        ci_class: &ci.class_name,
        category,
        vendor,
        product,
    };
    if let Some(group) =
        best_effort("grouping_rule", lookup.node, cmdb.grouping_rule(&query)).flatten()
    {
        return Some(group);
    }

    if let Some(serial) = lookup.serial {
        if let Some(group) = best_effort(
            "serial_group",
            lookup.node,
            cmdb.serial_group(serial, category),
        )
        .flatten()
        {
            return Some(group);
        }
    }

    let services =
        best_effort("related_services", lookup.node, cmdb.related_services(&ci)).unwrap_or_default();
    for service in &services {
        if let Some(group) = service.support_group_for(category) {
            return Some(group.to_string());
        }
    }

    None
}

fn best_effort<T>(query: &str, node: &str, result: CmdbResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(
                target: "trap_enrich::route",
                { query = query, node = node, error = %error },
                "CMDB query failed, continuing without dynamic group"
            );
            None
        }
    }
}
