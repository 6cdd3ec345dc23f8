//! Per-list mutual exclusion for position-changing operations.

use crate::board::domain::ListId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Registry of one async mutex per list.
///
/// Every read-plan-write cycle over a list's positions runs while holding that
/// list's lock. Operations touching two lists take both locks in ascending
/// [`ListId`] order, so two concurrent moves in opposite directions cannot
/// deadlock.
#[derive(Debug, Clone, Default)]
pub struct ListLocks {
    handles: Arc<Mutex<HashMap<ListId, Arc<AsyncMutex<()>>>>>,
}

/// Holds the locks of one or more lists until dropped.
#[derive(Debug)]
pub struct ListLockGuard {
    lists: Vec<ListId>,
    _guards: Vec<OwnedMutexGuard<()>>,
}

impl ListLockGuard {
    /// Returns `true` when the guard holds the lock of `list_id`.
    #[must_use]
    pub fn covers(&self, list_id: ListId) -> bool {
        self.lists.binary_search(&list_id).is_ok()
    }

    /// Returns the locked lists in acquisition order.
    #[cfg(test)]
    #[must_use]
    pub fn lists(&self) -> &[ListId] {
        &self.lists
    }
}

impl ListLocks {
    /// Creates an empty lock registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the locks of every given list.
    ///
    /// Duplicate ids are locked once. Keys are locked in ascending order.
    pub async fn acquire(&self, lists: &[ListId]) -> ListLockGuard {
        let mut keys = lists.to_vec();
        keys.sort_unstable();
        keys.dedup();

        let mut guards = Vec::with_capacity(keys.len());
        for key in &keys {
            let handle = self.handle(*key);
            guards.push(handle.lock_owned().await);
        }

        ListLockGuard {
            lists: keys,
            _guards: guards,
        }
    }

    /// Returns the number of lists with a registered lock handle.
    #[cfg(test)]
    #[must_use]
    pub fn registered(&self) -> usize {
        self.handles
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn handle(&self, list_id: ListId) -> Arc<AsyncMutex<()>> {
        let mut handles = self.handles.lock().unwrap_or_else(PoisonError::into_inner);
        if !handles.contains_key(&list_id) {
            // Handles referenced only by the registry are idle.
            handles.retain(|_, handle| Arc::strong_count(handle) > 1);
        }
        Arc::clone(handles.entry(list_id).or_default())
    }
}
