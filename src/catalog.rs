//! Static trap catalogs.
//!
//! Each vendor family ships a catalog mapping trap-identity OIDs to
//! descriptors. Lookup is exact-match only; a miss yields the vendor's
//! default "unknown trap" descriptor, never an error.

use crate::oid::Oid;
use crate::route::Category;
use crate::severity::Severity;
use std::collections::HashMap;

/// Immutable metadata for one known trap OID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrapDescriptor {
    pub severity: Severity,
    pub name: &'static str,
    pub category: Category,
    /// Affected subsystem label ("Power", "Drive", ...). Empty when the
    /// vendor's catalog does not track components.
    pub component: &'static str,
    /// Product tag for multi-product catalogs ("PowerStore", "Unity", ...).
    pub system: Option<&'static str>,
}

impl TrapDescriptor {
    pub const fn new(
        severity: Severity,
        name: &'static str,
        category: Category,
        component: &'static str,
    ) -> Self {
        Self {
            severity,
            name,
            category,
            component,
            system: None,
        }
    }

    pub const fn with_system(mut self, system: &'static str) -> Self {
        self.system = Some(system);
        self
    }
}

/// One vendor's trap catalog.
#[derive(Debug)]
pub struct Catalog {
    entries: HashMap<&'static str, TrapDescriptor>,
    default: TrapDescriptor,
}

impl Catalog {
    /// Build a catalog from static rows plus the descriptor returned on a
    /// lookup miss.
    ///
    /// Duplicate OID keys are a data-entry bug in the rows; debug builds
    /// reject them instead of silently letting the last definition win.
    pub fn new(rows: &[(&'static str, TrapDescriptor)], default: TrapDescriptor) -> Self {
        let mut entries = HashMap::with_capacity(rows.len());
        for (oid, descriptor) in rows {
            let previous = entries.insert(*oid, *descriptor);
            debug_assert!(previous.is_none(), "duplicate catalog row for OID {oid}");
        }
        Self { entries, default }
    }

    /// Exact-match lookup. A miss returns the default descriptor.
    pub fn lookup(&self, trap: &Oid) -> &TrapDescriptor {
        self.entries
            .get(trap.to_string().as_str())
            .unwrap_or(&self.default)
    }

    /// The descriptor returned on a miss.
    pub fn default_descriptor(&self) -> &TrapDescriptor {
        &self.default
    }

    /// Number of known trap OIDs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
