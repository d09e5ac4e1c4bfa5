//! Varbind payload text parser.
//!
//! Trap payloads arrive as an opaque text blob of newline-delimited
//! `<dotted-OID> = <value>` lines, occasionally interleaved with free-text
//! lines. [`VarbindBlob`] is a zero-copy view over that blob: extraction is a
//! single-pass line search, not a structured parse, and there are no escaping
//! or quoting rules.
//!
//! # Examples
//!
//! ```
//! use trap_enrich::varbind::VarbindBlob;
//!
//! let blob = VarbindBlob::new(
//!     "1.3.6.1.6.3.1.1.4.1.0 = 1.3.6.1.4.1.789.0.16\n\
//!      1.3.6.1.2.1.1.5.0 = filer01\n",
//! );
//! assert_eq!(blob.value_of("1.3.6.1.2.1.1.5.0"), Some("filer01"));
//! assert_eq!(blob.trap_oid().unwrap().to_string(), "1.3.6.1.4.1.789.0.16");
//! ```

use crate::oid::Oid;

/// The standard trap-identity OID (snmpTrapOID.0). The line carrying it names
/// which trap fired; without it an event is not classifiable.
pub const TRAP_IDENTITY_OID: &str = "1.3.6.1.6.3.1.1.4.1.0";

/// The standard system-name OID (sysName.0). Usually, but not always, carries
/// the device hostname.
pub const SYS_NAME_OID: &str = "1.3.6.1.2.1.1.5.0";

/// The standard system-uptime OID (sysUpTime.0).
pub const SYS_UPTIME_OID: &str = "1.3.6.1.2.1.1.3.0";

/// The standard system-description OID (sysDescr.0).
pub const SYS_DESCR_OID: &str = "1.3.6.1.2.1.1.1.0";

/// Read-only view over a raw varbind text blob.
#[derive(Debug, Clone, Copy)]
pub struct VarbindBlob<'a> {
    raw: &'a str,
}

impl<'a> VarbindBlob<'a> {
    /// Wrap a raw payload.
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// The verbatim payload text.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Extract the value bound to `key` (a dotted OID, or a bare positional
    /// marker like `13`). Returns the first matching line's value, trimmed.
    ///
    /// A line matches when everything left of its first `=` trims to exactly
    /// `key`. Lines without `=` are skipped.
    pub fn value_of(&self, key: &str) -> Option<&'a str> {
        for line in self.raw.lines() {
            let Some((lhs, rhs)) = line.split_once('=') else {
                continue;
            };
            if lhs.trim() == key {
                let value = rhs.trim();
                if !value.is_empty() {
                    return Some(value);
                }
            }
        }
        None
    }

    /// Extract the value bound to a bare positional varbind index
    /// (a line of the shape `13 = <value>`).
    pub fn positional(&self, index: u32) -> Option<&'a str> {
        self.value_of(&index.to_string())
    }

    /// Extract and parse the trap-identity OID.
    ///
    /// Returns `None` when the identity varbind is absent or its value does
    /// not begin with a dotted-decimal OID. The value is truncated at the
    /// first character that is neither a digit nor a dot, so a value like
    /// `1.3.6.1.4.1.789.0.16 (fanWarning)` still parses.
    pub fn trap_oid(&self) -> Option<Oid> {
        let value = self.value_of(TRAP_IDENTITY_OID)?;
        let end = value
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(value.len());
        Oid::parse(&value[..end]).ok()
    }

    /// Case-insensitive substring search over the whole payload.
    ///
    /// Used for product-name disambiguation when a vendor shares an
    /// enterprise prefix with another product line.
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        let needle = needle.to_ascii_lowercase();
        self.raw.to_ascii_lowercase().contains(&needle)
    }
}
