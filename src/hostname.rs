//! Hostname normalization.
//!
//! Management interfaces are named after the host they front: `web01-idrac`,
//! `dbsrv-con-ilo`, `filer-mgmt`. [`SuffixCleaner`] strips one such suffix to
//! recover the host's own name.

use regex::Regex;

/// Ordered suffix stripper.
///
/// Patterns are tried in listed order and only the first match is removed, so
/// `-con-ilo` must be listed before `-ilo` or the shorter pattern would fire
/// first and leave a dangling `-con`. After suffix removal, trailing hyphens
/// and periods are stripped. Cleaning never yields an empty string: if
/// stripping would empty the name, the original input is returned untouched.
#[derive(Debug)]
pub struct SuffixCleaner {
    patterns: Vec<Regex>,
}

impl SuffixCleaner {
    /// Compile an ordered pattern list. Patterns are matched
    /// case-insensitively and must be written anchored (`-idrac$`).
    pub fn new(patterns: &[&str]) -> Self {
        let patterns = patterns
            .iter()
            .map(|p| {
                Regex::new(&format!("(?i){p}")).expect("suffix pattern is a valid expression")
            })
            .collect();
        Self { patterns }
    }

    /// Strip at most one suffix from `hostname`.
    pub fn clean(&self, hostname: &str) -> String {
        let trimmed = hostname.trim();
        let mut cleaned = trimmed.to_string();

        for pattern in &self.patterns {
            if pattern.is_match(&cleaned) {
                cleaned = pattern.replace(&cleaned, "").into_owned();
                break;
            }
        }

        let cleaned = cleaned.trim_end_matches(['-', '.']);
        if cleaned.is_empty() {
            trimmed.to_string()
        } else {
            cleaned.to_string()
        }
    }
}
