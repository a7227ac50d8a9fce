//! Time-bounded cache of the services offered by each master.
//!
//! Entries are created on the first fetch for a master and evicted lazily:
//! an expired entry is dropped by the read that finds it, there is no
//! background sweep.

use std::collections::HashMap;
use std::time::Duration;

use barbershop_domain::id::MasterId;
use barbershop_domain::service::Service;
use barbershop_domain::time::Timestamp;

/// How long a fetched list stays fresh.
pub const DEFAULT_TTL: Duration = Duration::from_mins(5);

/// A cached list together with the time it was fetched.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub services: Vec<Service>,
    pub fetched_at: Timestamp,
}

impl CacheEntry {
    /// An entry is fresh while its age does not exceed `ttl`. Entries dated
    /// in the future (clock moved backwards) count as fresh.
    fn is_fresh(&self, now: Timestamp, ttl: Duration) -> bool {
        match (now - self.fetched_at).to_std() {
            Ok(age) => age <= ttl,
            Err(_) => true,
        }
    }
}

/// Mapping from master to its last fetched services.
#[derive(Debug)]
pub struct ServicesCache {
    entries: HashMap<MasterId, CacheEntry>,
    ttl: Duration,
}

impl Default for ServicesCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl ServicesCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Return the fresh services of `master`, evicting the entry if it expired.
    pub fn get(&mut self, master: &MasterId, now: Timestamp) -> Option<Vec<Service>> {
        let fresh = self.entries.get(master)?.is_fresh(now, self.ttl);
        if fresh {
            return self.entries.get(master).map(|entry| entry.services.clone());
        }
        self.entries.remove(master);
        tracing::debug!(%master, "evicted expired services cache entry");
        None
    }

    /// Store (or overwrite) the services of `master`.
    pub fn insert(&mut self, master: MasterId, services: Vec<Service>, now: Timestamp) {
        self.entries.insert(
            master,
            CacheEntry {
                services,
                fetched_at: now,
            },
        );
    }

    /// Raw entry access, expired or not.
    #[must_use]
    pub fn entry(&self, master: &MasterId) -> Option<&CacheEntry> {
        self.entries.get(master)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
