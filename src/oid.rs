//! Object Identifier (OID) type.
//!
//! OIDs are stored as `SmallVec<[u32; 16]>` to avoid heap allocation for common OIDs.

use crate::error::{Error, OidErrorKind, Result};
use smallvec::SmallVec;
use std::fmt;

/// Object Identifier.
///
/// Stored as a sequence of arc values (u32). Uses SmallVec to avoid
/// heap allocation for OIDs with 16 or fewer arcs.
///
/// # Examples
///
/// ```
/// use trap_enrich::oid::Oid;
///
/// let trap = Oid::parse("1.3.6.1.4.1.674.10892.1.0.1052").unwrap();
/// let dell = Oid::parse("1.3.6.1.4.1.674").unwrap();
/// assert!(trap.starts_with(&dell));
/// assert_eq!(trap.to_string(), "1.3.6.1.4.1.674.10892.1.0.1052");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Oid {
    arcs: SmallVec<[u32; 16]>,
}

impl Oid {
    /// Create an empty OID.
    pub fn empty() -> Self {
        Self {
            arcs: SmallVec::new(),
        }
    }

    /// Create an OID from arc values.
    ///
    /// Accepts any iterator of `u32` values.
    pub fn new(arcs: impl IntoIterator<Item = u32>) -> Self {
        Self {
            arcs: arcs.into_iter().collect(),
        }
    }

    /// Create an OID from a slice of arcs.
    ///
    /// # Examples
    ///
    /// ```
    /// use trap_enrich::oid::Oid;
    ///
    /// let oid = Oid::from_slice(&[1, 3, 6, 1, 2, 1, 1, 5, 0]);
    /// assert_eq!(oid.to_string(), "1.3.6.1.2.1.1.5.0");
    /// ```
    pub fn from_slice(arcs: &[u32]) -> Self {
        Self {
            arcs: SmallVec::from_slice(arcs),
        }
    }

    /// Parse an OID from dotted string notation (e.g., "1.3.6.1.4.1.789.0.16").
    ///
    /// Leading and trailing dots are tolerated; anything that is not a decimal
    /// arc is rejected.
    pub fn parse(s: &str) -> Result<Self> {
        let mut arcs = SmallVec::new();

        for part in s.split('.') {
            if part.is_empty() {
                continue;
            }

            let arc: u32 = part
                .parse()
                .map_err(|_| Error::invalid_oid(OidErrorKind::InvalidArc, s))?;

            arcs.push(arc);
        }

        if arcs.is_empty() {
            return Err(Error::invalid_oid(OidErrorKind::Empty, s));
        }

        Ok(Self { arcs })
    }

    /// Get the arc values.
    pub fn arcs(&self) -> &[u32] {
        &self.arcs
    }

    /// Get the number of arcs.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Check if the OID is empty.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Check if this OID starts with another OID.
    ///
    /// Returns `true` if `self` begins with the same arcs as `other`.
    /// An OID always starts with itself, and any OID starts with an empty OID.
    ///
    /// This is the namespace test the vendor handlers use: a trap belongs to a
    /// vendor when its identity OID starts with the vendor's enterprise
    /// subtree root.
    ///
    /// # Examples
    ///
    /// ```
    /// use trap_enrich::oid;
    ///
    /// let fan_warning = oid!(1, 3, 6, 1, 4, 1, 789, 0, 35);
    /// let netapp = oid!(1, 3, 6, 1, 4, 1, 789);
    /// let hp = oid!(1, 3, 6, 1, 4, 1, 232);
    ///
    /// assert!(fan_warning.starts_with(&netapp));
    /// assert!(!fan_warning.starts_with(&hp));
    /// ```
    pub fn starts_with(&self, other: &Oid) -> bool {
        self.arcs.len() >= other.arcs.len() && self.arcs[..other.arcs.len()] == other.arcs[..]
    }

    /// Get the last arc, if any.
    pub fn last_arc(&self) -> Option<u32> {
        self.arcs.last().copied()
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for arc in &self.arcs {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", arc)?;
            first = false;
        }
        Ok(())
    }
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({})", self)
    }
}

impl std::str::FromStr for Oid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Construct an [`Oid`] from a comma-separated list of arcs.
///
/// # Examples
///
/// ```
/// use trap_enrich::{oid, oid::Oid};
///
/// let sys_name = oid!(1, 3, 6, 1, 2, 1, 1, 5, 0);
/// assert_eq!(sys_name, Oid::parse("1.3.6.1.2.1.1.5.0").unwrap());
/// ```
#[macro_export]
macro_rules! oid {
    ($($arc:expr),+ $(,)?) => {
        $crate::oid::Oid::from_slice(&[$($arc),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display_round_trip() {
        let oid = Oid::parse("1.3.6.1.4.1.1139.205.1.1.4").unwrap();
        assert_eq!(oid.arcs(), &[1, 3, 6, 1, 4, 1, 1139, 205, 1, 1, 4]);
        assert_eq!(oid.to_string(), "1.3.6.1.4.1.1139.205.1.1.4");
    }

    #[test]
    fn parse_tolerates_stray_dots() {
        let oid = Oid::parse(".1.3.6.1.").unwrap();
        assert_eq!(oid.arcs(), &[1, 3, 6, 1]);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Oid::parse("1.3.x.1").is_err());
        assert!(Oid::parse("").is_err());
        assert!(Oid::parse("...").is_err());
    }

    #[test]
    fn single_arc_parses() {
        // Positional varbind markers like "13" are single-arc.
        let oid = Oid::parse("13").unwrap();
        assert_eq!(oid.arcs(), &[13]);
    }

    #[test]
    fn starts_with_prefix() {
        let trap = oid!(1, 3, 6, 1, 4, 1, 674, 11000, 2000, 100, 1001);
        assert!(trap.starts_with(&oid!(1, 3, 6, 1, 4, 1, 674)));
        assert!(trap.starts_with(&oid!(1, 3, 6, 1, 4, 1, 674, 11000, 2000)));
        assert!(!trap.starts_with(&oid!(1, 3, 6, 1, 4, 1, 674, 10893)));
        assert!(trap.starts_with(&trap));
        assert!(trap.starts_with(&Oid::empty()));
    }

    #[test]
    fn last_arc() {
        assert_eq!(oid!(1, 3, 6).last_arc(), Some(6));
        assert_eq!(Oid::empty().last_arc(), None);
    }
}
