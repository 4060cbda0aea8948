//! Browser-session analogue for dashboard access.
//!
//! # Responsibility
//! - Hold per-session `auth_{domain}` flags.
//!
//! # Invariants
//! - Flags live only as long as the `Session` value.
//! - A missing flag means "not authenticated".

use std::collections::BTreeMap;
use uuid::Uuid;

/// Stable identifier of one session.
pub type SessionId = Uuid;

/// Session-scoped key/value flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    flags: BTreeMap<String, bool>,
}

impl Session {
    /// Starts a new session with a generated id and no flags.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    pub fn with_id(id: SessionId) -> Self {
        Self {
            id,
            flags: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn is_authenticated(&self, domain: &str) -> bool {
        self.flags
            .get(&auth_flag_key(domain))
            .copied()
            .unwrap_or(false)
    }

    pub fn mark_authenticated(&mut self, domain: &str) {
        self.flags.insert(auth_flag_key(domain), true);
    }

    /// Drops the flag for `domain`. Returns whether it was set.
    pub fn sign_out(&mut self, domain: &str) -> bool {
        self.flags.remove(&auth_flag_key(domain)).unwrap_or(false)
    }

    /// Domains whose flag is currently set, in key order.
    pub fn authenticated_domains(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .filter(|(_, value)| **value)
            .filter_map(|(key, _)| key.strip_prefix(AUTH_FLAG_PREFIX))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

const AUTH_FLAG_PREFIX: &str = "auth_";

/// Session key gating access to `domain`'s dashboard.
pub fn auth_flag_key(domain: &str) -> String {
    format!("{AUTH_FLAG_PREFIX}{domain}")
}
