//! Severity scale and the priority/impact/urgency derivations.
//!
//! Severity is the 1..=5 incident scale (1=Critical, 5=Info). Priority,
//! impact, and urgency are pure functions of severity (and, for impact, of
//! whether the affected component sits in a vendor's critical-component set).

use serde::{Serialize, Serializer};
use std::fmt;

/// Incident severity, 1 (Critical) through 5 (Info).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Critical,
    Major,
    Minor,
    Warning,
    Info,
}

impl Severity {
    /// Numeric code, 1..=5.
    pub fn code(self) -> u8 {
        match self {
            Self::Critical => 1,
            Self::Major => 2,
            Self::Minor => 3,
            Self::Warning => 4,
            Self::Info => 5,
        }
    }

    /// Severity from its numeric code. Codes outside 1..=5 are rejected.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Critical),
            2 => Some(Self::Major),
            3 => Some(Self::Minor),
            4 => Some(Self::Warning),
            5 => Some(Self::Info),
            _ => None,
        }
    }

    /// Severity from a textual status word or a numeric code in text form.
    ///
    /// Recognizes the words some storage arrays report in their severity
    /// varbind ("critical", "major", "minor", "warning", "info",
    /// "informational"), case-insensitively.
    pub fn from_keyword(text: &str) -> Option<Self> {
        match text.trim().to_ascii_lowercase().as_str() {
            "critical" => Some(Self::Critical),
            "major" => Some(Self::Major),
            "minor" => Some(Self::Minor),
            "warning" => Some(Self::Warning),
            "info" | "informational" => Some(Self::Info),
            other => other.parse::<u8>().ok().and_then(Self::from_code),
        }
    }

    /// Priority from severity: 1→1, 2→2, 3→3, 4→4, else 5.
    pub fn priority(self) -> u8 {
        match self {
            Self::Critical => 1,
            Self::Major => 2,
            Self::Minor => 3,
            Self::Warning => 4,
            Self::Info => 5,
        }
    }

    /// Urgency from severity: 1→1, 2→2, 3→3, else 4.
    pub fn urgency(self) -> u8 {
        match self {
            Self::Critical => 1,
            Self::Major => 2,
            Self::Minor => 3,
            Self::Warning | Self::Info => 4,
        }
    }

    /// Impact from severity and component criticality.
    ///
    /// A failing critical component (CPU, power, whole-system sensors) takes
    /// the array down with it, so severities 1 and 2 map one step harder than
    /// for peripheral components. Severity 3 is always impact 3; 4 and 5 are
    /// always impact 4.
    pub fn impact(self, critical_component: bool) -> u8 {
        match self {
            Self::Critical => {
                if critical_component {
                    1
                } else {
                    2
                }
            }
            Self::Major => {
                if critical_component {
                    2
                } else {
                    3
                }
            }
            Self::Minor => 3,
            Self::Warning | Self::Info => 4,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Critical => "Critical",
            Self::Major => "Major",
            Self::Minor => "Minor",
            Self::Warning => "Warning",
            Self::Info => "Info",
        };
        write!(f, "{}", text)
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}
