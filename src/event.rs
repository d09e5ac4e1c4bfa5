//! Event records.
//!
//! [`RawEvent`] is the read-only input handed over by the event platform;
//! [`EnrichedEvent`] is everything a handler writes back. Handlers never
//! mutate the input, and the platform persists the output.

use crate::route::Category;
use crate::severity::Severity;
use serde::Serialize;
use std::collections::BTreeMap;

/// Inbound event as delivered by the platform.
#[derive(Debug, Clone, Default)]
pub struct RawEvent {
    /// The varbind text blob.
    pub additional_info: String,
    /// The platform's notion of the sender, used as a hostname fallback.
    pub source: Option<String>,
    /// Opaque platform record identifier.
    pub sys_id: Option<String>,
}

impl RawEvent {
    /// Convenience constructor for a payload-only event.
    pub fn from_payload(additional_info: impl Into<String>) -> Self {
        Self {
            additional_info: additional_info.into(),
            ..Self::default()
        }
    }
}

/// The normalized incident record a handler produces.
///
/// Severity and priority are 1..=5; impact and urgency, where a handler sets
/// them, are 1..=4. `assignment_group` is always non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedEvent {
    pub source: String,
    pub node: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub resource: String,
    pub severity: Severity,
    pub description: String,
    pub short_description: String,
    pub assignment_group: String,
    pub category: Category,
    pub subcategory: String,
    pub vendor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,
    pub priority: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<u8>,
    pub correlation_id: String,
    pub message_key: String,
    /// Vendor-specific extracted attributes (serial numbers, firmware
    /// versions, volume names, ...). Ordered for deterministic output.
    pub attributes: BTreeMap<&'static str, String>,
    /// Verbatim copy of the varbind blob, kept for audit and troubleshooting.
    pub snmp_varbinds: String,
}

impl EnrichedEvent {
    /// Record a vendor attribute, skipping empty values.
    pub fn set_attribute(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        if !value.is_empty() {
            self.attributes.insert(key, value);
        }
    }

    /// Read a previously recorded vendor attribute.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}
