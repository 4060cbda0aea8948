//! Slug derivation for display names.
//!
//! # Invariants
//! - `slugify` is deterministic and idempotent: `slugify(slugify(x)) == slugify(x)`.
//! - Distinct names may share one slug; no collision detection happens here.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Lowercases `name` and replaces each whitespace run with a single hyphen.
///
/// ```
/// assert_eq!(workdeck_core::slugify("My  Folder"), "my-folder");
/// ```
pub fn slugify(name: &str) -> String {
    WHITESPACE_RUN_RE
        .replace_all(&name.to_lowercase(), "-")
        .into_owned()
}

/// Returns whether `name` addresses the same node as `key`.
///
/// Both sides are slugified, so `key` may be a slug or a raw display name.
pub fn slug_matches(name: &str, key: &str) -> bool {
    slugify(name) == slugify(key)
}
