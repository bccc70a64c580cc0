//! Process-lifetime memo of player-name lookups.
//!
//! The only state that survives a refresh. Entries are keyed by the
//! normalized query string and are never invalidated: a person id does not
//! change while the process runs.

use lru::LruCache;
use std::sync::Mutex;

use crate::cli::types::PlayerId;

/// A resolved player, as stored in the lookup cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerIdentity {
    pub id: PlayerId,
    pub full_name: String,
}

impl PlayerIdentity {
    /// Last whitespace-separated token of the full name ("Avdija").
    ///
    /// Used as the secondary attribution key for feeds whose ids do not line
    /// up with the player index.
    pub fn surname(&self) -> Option<&str> {
        self.full_name.split_whitespace().last()
    }
}

/// Lookup cache keyed by query string. Invalidation policy: never.
pub struct PlayerLookupCache {
    entries: Mutex<LruCache<String, PlayerIdentity>>,
}

impl PlayerLookupCache {
    /// Create an empty cache. Unbounded: nothing is ever evicted.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(LruCache::unbounded()),
        }
    }

    fn key(query: &str) -> String {
        query.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
    }

    pub fn get(&self, query: &str) -> Option<PlayerIdentity> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(&Self::key(query)).cloned()
    }

    pub fn insert(&self, query: &str, identity: PlayerIdentity) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.put(Self::key(query), identity);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for PlayerLookupCache {
    fn default() -> Self {
        Self::new()
    }
}
