//! Semantic version canonicalization and precedence ordering.
//!
//! Versions are stored and compared in their canonical form, which carries a
//! leading `v` (`v1.2.3`). Inputs without the prefix are normalized before any
//! comparison, lookup or sort. Precedence follows semver: major, minor, patch,
//! then pre-release, with build metadata ignored.
//!
//! Strings that do not parse order before every valid version and compare
//! equal to each other, so sorting a mixed list stays total and deterministic.

use std::cmp::Ordering;

/// Marker character carried by canonical version strings.
pub const PREFIX: char = 'v';

/// Prepend the `v` marker if it is missing. Idempotent.
pub fn canonicalize(version: &str) -> String {
    if version.starts_with(PREFIX) {
        version.to_string()
    } else {
        format!("{PREFIX}{version}")
    }
}

/// Strip a single leading `v` marker, if present.
pub fn strip_prefix(version: &str) -> &str {
    version.strip_prefix(PREFIX).unwrap_or(version)
}

/// Parse a version string in either prefix form.
pub fn parse(version: &str) -> Option<semver::Version> {
    semver::Version::parse(strip_prefix(&canonicalize(version))).ok()
}

/// Returns `true` if the string is a valid semantic version once canonicalized.
pub fn is_valid(version: &str) -> bool {
    parse(version).is_some()
}

/// Compare two parsed versions by semver precedence, ignoring build metadata.
pub fn cmp_precedence(a: &semver::Version, b: &semver::Version) -> Ordering {
    (a.major, a.minor, a.patch, &a.pre).cmp(&(b.major, b.minor, b.patch, &b.pre))
}

/// Compare two version strings by precedence.
pub fn compare(a: &str, b: &str) -> Ordering {
    match (parse(a), parse(b)) {
        (Some(a), Some(b)) => cmp_precedence(&a, &b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// Sort version strings ascending by precedence. Ties fall back to string order.
pub fn sort(versions: &mut [String]) {
    versions.sort_by(|a, b| compare(a, b).then_with(|| a.cmp(b)));
}
