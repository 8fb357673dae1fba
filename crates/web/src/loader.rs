// =============================================================================
// GS-IT Web - Lazy Module Loader
// =============================================================================
// Table of Contents:
// 1. Load State
// 2. Module Cache
// 3. Tests
// =============================================================================
// Pages are resolved asynchronously on first navigation and cached for the
// rest of the session. Loads cannot be cancelled and failures are not retried.
// =============================================================================

use std::collections::HashMap;
use std::hash::Hash;

use thiserror::Error;

/// A page module could not be resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to load module `{module}`: {reason}")]
pub struct LoadError {
    pub module: String,
    pub reason: String,
}

impl LoadError {
    pub fn new(module: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            reason: reason.into(),
        }
    }
}

// -----------------------------------------------------------------------------
// 1. Load State
// -----------------------------------------------------------------------------

/// Lifecycle of a single module.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<M> {
    Loading,
    Ready(M),
    Failed(LoadError),
}

impl<M> LoadState<M> {
    pub fn ready(&self) -> Option<&M> {
        match self {
            LoadState::Ready(module) => Some(module),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Module Cache
// -----------------------------------------------------------------------------

/// Per-key load bookkeeping.
#[derive(Clone, Debug)]
pub struct ModuleCache<K, M> {
    entries: HashMap<K, LoadState<M>>,
}

impl<K, M> Default for ModuleCache<K, M> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash, M: PartialEq> PartialEq for ModuleCache<K, M> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq + Hash, M> ModuleCache<K, M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, or `None` if no load was ever started.
    pub fn state(&self, key: &K) -> Option<&LoadState<M>> {
        self.entries.get(key)
    }

    /// Claim a load for `key`. Returns `true` only for the first caller;
    /// the caller must then report back through [`ModuleCache::complete`].
    /// A `false` return means the cache was not modified.
    pub fn begin(&mut self, key: K) -> bool {
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, LoadState::Loading);
        true
    }

    /// Record the outcome of a load started with `begin`.
    pub fn complete(&mut self, key: K, result: Result<M, LoadError>) {
        let state = match result {
            Ok(module) => LoadState::Ready(module),
            Err(err) => LoadState::Failed(err),
        };
        self.entries.insert(key, state);
    }
}

// -----------------------------------------------------------------------------
// 3. Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_claims_once() {
        let mut cache: ModuleCache<&str, u32> = ModuleCache::new();
        assert!(cache.state(&"about").is_none());

        assert!(cache.begin("about"));
        assert!(!cache.begin("about"));
        assert_eq!(cache.state(&"about"), Some(&LoadState::Loading));
    }

    #[test]
    fn test_complete_ready() {
        let mut cache: ModuleCache<&str, u32> = ModuleCache::new();
        cache.begin("service");
        cache.complete("service", Ok(7));

        assert_eq!(cache.state(&"service").and_then(LoadState::ready), Some(&7));
        assert!(!cache.begin("service"));
    }

    #[test]
    fn test_failure_is_sticky() {
        let mut cache: ModuleCache<&str, u32> = ModuleCache::new();
        cache.begin("dahua");
        cache.complete("dahua", Err(LoadError::new("dahua", "chunk missing")));

        assert!(!cache.begin("dahua"));
        assert_eq!(
            cache.state(&"dahua"),
            Some(&LoadState::Failed(LoadError::new("dahua", "chunk missing")))
        );
        assert!(cache.state(&"dahua").and_then(LoadState::ready).is_none());
    }

    #[test]
    fn test_begin_on_known_key_leaves_cache_unchanged() {
        let mut cache: ModuleCache<&str, u32> = ModuleCache::new();
        cache.begin("home");
        cache.complete("home", Ok(1));
        cache.begin("contact");

        let before = cache.clone();
        assert!(!cache.begin("home"));
        assert!(!cache.begin("contact"));
        assert_eq!(cache, before);
    }

    #[test]
    fn test_error_display() {
        let err = LoadError::new("unv", "timeout");
        assert_eq!(err.to_string(), "failed to load module `unv`: timeout");
    }
}
