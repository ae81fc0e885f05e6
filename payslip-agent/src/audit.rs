//! Activity trail for record lifecycle operations.
//!
//! Every create and reveal attempt is logged with its outcome, giving the
//! presentation layer the user-history feed without polling the ledger.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

use payslip::{CallerIdentity, RecordId};

/// Maximum entries in the activity log before pruning.
const MAX_ACTIVITY_ENTRIES: usize = 10_000;

/// Which lifecycle operation an entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Record creation (seal + append)
    Create,
    /// Salary reveal (fetch + decrypt + verification append)
    Reveal,
}

/// Outcome of a logged operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    /// Operation completed
    Succeeded,
    /// Operation surfaced an error to the caller
    Failed,
}

/// An entry in the activity log.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    /// Unique entry ID
    pub entry_id: String,
    /// Record the operation targeted, if one was reached
    pub record_id: Option<RecordId>,
    /// Operation kind
    pub operation: OperationKind,
    /// Identity that issued the operation
    pub caller: CallerIdentity,
    /// Outcome, absent while the operation is in flight
    pub status: Option<OperationStatus>,
    /// Human-readable detail ("already verified", error text)
    pub detail: Option<String>,
    /// When the operation started
    pub started_at: DateTime<Utc>,
    /// When the operation finished
    pub finished_at: Option<DateTime<Utc>>,
    /// Processing duration in ms
    pub duration_ms: Option<u64>,
}

/// Activity log for lifecycle operations.
pub struct ActivityLog {
    /// Log entries (newest first)
    entries: Arc<RwLock<VecDeque<ActivityEntry>>>,
    /// Maximum entries to retain
    max_entries: usize,
}

impl ActivityLog {
    /// Create a new activity log.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(VecDeque::new())),
            max_entries: MAX_ACTIVITY_ENTRIES,
        }
    }

    /// Create with custom max entries.
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(VecDeque::new())),
            max_entries,
        }
    }

    /// Log the start of an operation, returning the entry id.
    pub async fn begin(&self, operation: OperationKind, caller: &CallerIdentity) -> String {
        let entry = ActivityEntry {
            entry_id: uuid::Uuid::new_v4().to_string(),
            record_id: None,
            operation,
            caller: caller.clone(),
            status: None,
            detail: None,
            started_at: Utc::now(),
            finished_at: None,
            duration_ms: None,
        };
        let entry_id = entry.entry_id.clone();

        let mut entries = self.entries.write().await;
        entries.push_front(entry);

        // Prune if over limit
        while entries.len() > self.max_entries {
            entries.pop_back();
        }

        entry_id
    }

    /// Record an operation's outcome.
    pub async fn finish(
        &self,
        entry_id: &str,
        record_id: Option<&RecordId>,
        status: OperationStatus,
        detail: Option<String>,
    ) {
        let mut entries = self.entries.write().await;

        if let Some(entry) = entries.iter_mut().find(|e| e.entry_id == entry_id) {
            let finished_at = Utc::now();
            entry.record_id = record_id.cloned();
            entry.status = Some(status);
            entry.detail = detail;
            entry.finished_at = Some(finished_at);
            entry.duration_ms = Some(
                (finished_at - entry.started_at)
                    .num_milliseconds()
                    .max(0) as u64,
            );
        }
    }

    /// Get recent entries, newest first.
    pub async fn recent(&self, limit: usize) -> Vec<ActivityEntry> {
        let entries = self.entries.read().await;
        entries.iter().take(limit).cloned().collect()
    }

    /// Get entries for a record.
    pub async fn for_record(&self, record_id: &RecordId, limit: usize) -> Vec<ActivityEntry> {
        let entries = self.entries.read().await;
        entries
            .iter()
            .filter(|e| e.record_id.as_ref() == Some(record_id))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Get statistics.
    pub async fn stats(&self) -> ActivityStats {
        let entries = self.entries.read().await;

        let total = entries.len();
        let succeeded = entries
            .iter()
            .filter(|e| e.status == Some(OperationStatus::Succeeded))
            .count();
        let failed = entries
            .iter()
            .filter(|e| e.status == Some(OperationStatus::Failed))
            .count();

        let avg_duration_ms = if total > 0 {
            entries.iter().filter_map(|e| e.duration_ms).sum::<u64>() / total as u64
        } else {
            0
        };

        ActivityStats {
            total,
            succeeded,
            failed,
            avg_duration_ms,
        }
    }

    /// Clear the log.
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
    }

    /// Get count.
    pub async fn count(&self) -> usize {
        let entries = self.entries.read().await;
        entries.len()
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics from the activity log.
#[derive(Debug, Clone)]
pub struct ActivityStats {
    /// Total operations logged
    pub total: usize,
    /// Operations that completed
    pub succeeded: usize,
    /// Operations that surfaced an error
    pub failed: usize,
    /// Average processing duration
    pub avg_duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_begin_and_finish() {
        let log = ActivityLog::new();
        let caller = CallerIdentity::new("0xcaller");

        let entry_id = log.begin(OperationKind::Create, &caller).await;
        assert_eq!(log.count().await, 1);

        let id = RecordId::new("payslip-1");
        log.finish(&entry_id, Some(&id), OperationStatus::Succeeded, None)
            .await;

        let recent = log.recent(10).await;
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].status, Some(OperationStatus::Succeeded));
        assert_eq!(recent[0].record_id, Some(id.clone()));
        assert!(recent[0].duration_ms.is_some());

        assert_eq!(log.for_record(&id, 10).await.len(), 1);
    }

    #[tokio::test]
    async fn test_pruning_keeps_newest() {
        let log = ActivityLog::with_max_entries(3);
        let caller = CallerIdentity::new("0xcaller");

        for _ in 0..5 {
            log.begin(OperationKind::Reveal, &caller).await;
        }

        assert_eq!(log.count().await, 3);
    }

    #[tokio::test]
    async fn test_stats() {
        let log = ActivityLog::new();
        let caller = CallerIdentity::new("0xcaller");

        let a = log.begin(OperationKind::Create, &caller).await;
        let b = log.begin(OperationKind::Reveal, &caller).await;
        log.finish(&a, None, OperationStatus::Succeeded, None).await;
        log.finish(&b, None, OperationStatus::Failed, Some("boom".to_string()))
            .await;

        let stats = log.stats().await;
        assert_eq!(stats.total, 2);
        assert_eq!(stats.succeeded, 1);
        assert_eq!(stats.failed, 1);
    }
}
