//! Per-session mutual exclusion.
//!
//! At most one mutation may be in flight per session id: a bid racing a
//! card play (or a leave) through plain read-modify-write would silently
//! drop one of the updates. Every mutating operation takes the session's
//! lock for its whole load-mutate-save-notify bracket.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

#[derive(Default)]
pub struct SessionLocks {
    locks: DashMap<Uuid, Arc<Mutex<()>>>,
}

impl SessionLocks {
    pub fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    /// Take the lock for a session id, waiting behind any in-flight mutation.
    pub async fn acquire(&self, id: Uuid) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }

    /// Drop the lock entry once its session is deleted. Holders of the old
    /// Arc finish unaffected.
    pub fn discard(&self, id: Uuid) {
        self.locks.remove(&id);
    }
}
