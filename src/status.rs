//! Status-code tables.
//!
//! Hardware vendors report live sensor state as small integers whose meaning
//! depends on the sensor family: power-supply code 5 is not temperature
//! code 5. Each vendor module defines a general table plus sensor-specific
//! tables, and the handler cross-references the code found in the payload to
//! refine the catalog severity.

use crate::severity::Severity;

/// One status-code row: numeric code, display text, mapped severity.
#[derive(Debug, Clone, Copy)]
pub struct StatusEntry {
    pub code: u32,
    pub text: &'static str,
    pub severity: Severity,
}

/// Immutable code → (text, severity) table for one sensor family.
#[derive(Debug, Clone, Copy)]
pub struct StatusTable {
    entries: &'static [StatusEntry],
}

impl StatusTable {
    pub const fn new(entries: &'static [StatusEntry]) -> Self {
        Self { entries }
    }

    /// Look up a status code. Unknown codes yield `None`; the caller keeps
    /// the catalog severity in that case.
    pub fn get(&self, code: u32) -> Option<&'static StatusEntry> {
        self.entries.iter().find(|e| e.code == code)
    }
}

/// Component families that select which status table (and which status OID)
/// applies. Catalog component labels are free text; this is the closed set
/// the status cross-reference dispatches on, with `Other` as the explicit
/// catch-all branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Power,
    Temperature,
    Cooling,
    Memory,
    Drive,
    Controller,
    Nic,
    Other,
}

impl ComponentKind {
    /// Classify a catalog component label, case-insensitively.
    pub fn classify(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "power" => Self::Power,
            "temperature" => Self::Temperature,
            "cooling" => Self::Cooling,
            "memory" => Self::Memory,
            "drive" => Self::Drive,
            "controller" => Self::Controller,
            "nic" => Self::Nic,
            _ => Self::Other,
        }
    }
}

/// Shorthand for building static tables.
pub const fn entry(code: u32, text: &'static str, severity: Severity) -> StatusEntry {
    StatusEntry {
        code,
        text,
        severity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: StatusTable = StatusTable::new(&[
        entry(2, "OK", Severity::Info),
        entry(3, "Degraded", Severity::Warning),
        entry(4, "Failed", Severity::Major),
    ]);

    #[test]
    fn lookup_hits_and_misses() {
        assert_eq!(TABLE.get(3).unwrap().text, "Degraded");
        assert_eq!(TABLE.get(3).unwrap().severity, Severity::Warning);
        assert!(TABLE.get(9).is_none());
        assert!(TABLE.get(0).is_none());
    }

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(ComponentKind::classify("Power"), ComponentKind::Power);
        assert_eq!(ComponentKind::classify("NIC"), ComponentKind::Nic);
        assert_eq!(ComponentKind::classify("cooling"), ComponentKind::Cooling);
        assert_eq!(ComponentKind::classify("iDRAC"), ComponentKind::Other);
        assert_eq!(ComponentKind::classify(""), ComponentKind::Other);
    }
}
