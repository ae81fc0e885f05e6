//! Per-record single-flight coordination for reveals.
//!
//! At most one reveal protocol may be in flight per record id. The lock is
//! the only shared mutable coordination point in the core: a permit is
//! acquired for the duration of one reveal and released on every exit
//! path, including cancellation, via `Drop`.

use dashmap::DashMap;
use std::sync::Arc;

use payslip::RecordId;

/// Registry of in-flight reveals, keyed by record id.
#[derive(Default)]
pub struct RevealLock {
    inflight: Arc<DashMap<RecordId, ()>>,
}

impl RevealLock {
    /// Create an empty lock registry.
    pub fn new() -> Self {
        Self {
            inflight: Arc::new(DashMap::new()),
        }
    }

    /// Try to claim the reveal slot for a record.
    ///
    /// Returns `None` when a reveal for the same id is already in flight.
    pub fn try_acquire(&self, id: &RecordId) -> Option<RevealPermit> {
        match self.inflight.entry(id.clone()) {
            dashmap::mapref::entry::Entry::Occupied(_) => None,
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                entry.insert(());
                Some(RevealPermit {
                    inflight: Arc::clone(&self.inflight),
                    id: id.clone(),
                })
            }
        }
    }

    /// Whether a reveal is currently in flight for the id.
    pub fn is_inflight(&self, id: &RecordId) -> bool {
        self.inflight.contains_key(id)
    }
}

/// Scoped claim on a record's reveal slot, released on drop.
pub struct RevealPermit {
    inflight: Arc<DashMap<RecordId, ()>>,
    id: RecordId,
}

impl Drop for RevealPermit {
    fn drop(&mut self) {
        self.inflight.remove(&self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_is_rejected() {
        let lock = RevealLock::new();
        let id = RecordId::new("payslip-1");

        let permit = lock.try_acquire(&id);
        assert!(permit.is_some());
        assert!(lock.try_acquire(&id).is_none());
        assert!(lock.is_inflight(&id));

        drop(permit);
        assert!(!lock.is_inflight(&id));
        assert!(lock.try_acquire(&id).is_some());
    }

    #[test]
    fn test_distinct_ids_are_independent() {
        let lock = RevealLock::new();

        let a = lock.try_acquire(&RecordId::new("payslip-a"));
        let b = lock.try_acquire(&RecordId::new("payslip-b"));

        assert!(a.is_some());
        assert!(b.is_some());
    }
}
