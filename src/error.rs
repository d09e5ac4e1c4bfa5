//! Error types for trap-enrich.
//!
//! The pipeline never panics on bad input: a trap that does not belong to any
//! handler produces `Ok(None)`, and anything genuinely malformed (an
//! unparseable trap-identity value, for example) surfaces as an [`Error`] that
//! the per-event driver logs before moving on to the next event.

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// OID parse error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OidErrorKind {
    /// Empty OID string.
    Empty,
    /// Arc is not a decimal number that fits in u32.
    InvalidArc,
}

impl std::fmt::Display for OidErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty OID"),
            Self::InvalidArc => write!(f, "invalid arc value"),
        }
    }
}

/// The main error type for all trap-enrich operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Invalid OID format.
    #[error("invalid OID {input:?}: {kind}")]
    InvalidOid { kind: OidErrorKind, input: Box<str> },

    /// CMDB collaborator query failed.
    #[error("CMDB query failed: {0}")]
    Cmdb(#[from] crate::cmdb::CmdbError),
}

impl Error {
    /// Create an invalid OID error with the input string that failed.
    pub fn invalid_oid(kind: OidErrorKind, input: impl Into<Box<str>>) -> Self {
        Self::InvalidOid {
            kind,
            input: input.into(),
        }
    }
}
