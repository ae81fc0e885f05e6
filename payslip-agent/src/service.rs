//! PayslipService - the record lifecycle orchestrator.
//!
//! Drives a record from plaintext input to a sealed, ledger-stored record,
//! and later from ciphertext back to a verified plaintext. Enforces
//! single-flight per record on reveals, performs no implicit retries, and
//! translates collaborator failures into a stable error taxonomy carrying
//! the protocol stage that failed.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use payslip::{
    CallerIdentity, CreateFields, EngineContext, NewPaySlip, PaySlip, PaySlipDraft, RecordId,
    ValidationError,
};

use crate::audit::{ActivityEntry, ActivityLog, ActivityStats, OperationKind, OperationStatus};
use crate::engine::traits::{ConfidentialityEngine, EngineError};
use crate::ledger::traits::{RecordStore, StoreError};
use crate::singleflight::RevealLock;

/// Protocol stage at which an operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolStage {
    /// Sealing the salary with the confidentiality engine
    Seal,
    /// Appending the new record to the ledger
    Append,
    /// Fetching a record snapshot
    Fetch,
    /// Recovering the plaintext from the engine
    Reveal,
    /// Appending the verification result to the ledger
    AppendVerification,
}

impl std::fmt::Display for ProtocolStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Seal => "seal",
            Self::Append => "append",
            Self::Fetch => "fetch",
            Self::Reveal => "reveal",
            Self::AppendVerification => "append-verification",
        };
        f.write_str(name)
    }
}

/// Error types for the service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// No authorized caller identity available
    #[error("No authorized caller identity available")]
    IdentityRequired,

    /// Invalid create input, detected before any network call
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// No record with the given id exists
    #[error("Record not found: {0}")]
    NotFound(RecordId),

    /// A reveal for the same record is already in flight
    #[error("Reveal already in progress for {0}")]
    RevealInProgress(RecordId),

    /// Confidentiality engine failure
    #[error("Engine failure at {stage}: {source}")]
    Engine {
        /// Stage that failed
        stage: ProtocolStage,
        /// Underlying engine error
        #[source]
        source: EngineError,
    },

    /// Ledger gateway failure
    #[error("Ledger failure at {stage}: {source}")]
    Store {
        /// Stage that failed
        stage: ProtocolStage,
        /// Underlying store error
        #[source]
        source: StoreError,
    },

    /// A collaborator call exceeded the configured stage timeout
    #[error("Timed out at {stage}")]
    Timeout {
        /// Stage that timed out
        stage: ProtocolStage,
    },
}

/// Configuration for the PayslipService.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Target context sealing and reveal are bound to
    pub context: EngineContext,
    /// Timeout applied to each collaborator call (ms)
    pub stage_timeout_ms: u64,
    /// Whether to log all operations to the activity trail
    pub audit_enabled: bool,
}

impl ServiceConfig {
    /// Create a config for a target context with default settings.
    pub fn new(context: EngineContext) -> Self {
        Self {
            context,
            stage_timeout_ms: 30_000,
            audit_enabled: true,
        }
    }

    /// Set the per-stage timeout.
    pub fn with_stage_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.stage_timeout_ms = timeout_ms;
        self
    }

    /// Enable or disable activity logging.
    pub fn with_audit(mut self, enabled: bool) -> Self {
        self.audit_enabled = enabled;
        self
    }
}

/// Main entry point for the record lifecycle.
///
/// Orchestrates the confidentiality engine and the record store gateway.
pub struct PayslipService {
    /// Configuration
    config: ServiceConfig,
    /// Confidentiality engine client
    engine: Arc<dyn ConfidentialityEngine>,
    /// Record store gateway
    store: Arc<dyn RecordStore>,
    /// Per-record single-flight reveal coordination
    reveals: RevealLock,
    /// Activity trail
    audit: Arc<ActivityLog>,
}

impl PayslipService {
    /// Create a new service for a target context.
    pub fn new(
        engine: Arc<dyn ConfidentialityEngine>,
        store: Arc<dyn RecordStore>,
        context: EngineContext,
    ) -> Self {
        Self {
            config: ServiceConfig::new(context),
            engine,
            store,
            reveals: RevealLock::new(),
            audit: Arc::new(ActivityLog::new()),
        }
    }

    /// Create with configuration.
    pub fn with_config(mut self, config: ServiceConfig) -> Self {
        self.config = config;
        self
    }

    /// Whether both collaborators currently report available.
    pub async fn is_ready(&self) -> bool {
        self.engine.is_available().await && self.store.is_available().await
    }

    /// Create a sealed pay slip record.
    ///
    /// Seals the salary, appends the record, and returns the stored
    /// snapshot echoed by the gateway. Any failure aborts the whole
    /// operation with no partial record observable; retrying is always
    /// safe because every attempt generates a fresh id.
    pub async fn create(
        &self,
        draft: PaySlipDraft,
        caller: &CallerIdentity,
    ) -> Result<PaySlip, ServiceError> {
        if caller.is_empty() {
            return Err(ServiceError::IdentityRequired);
        }
        let fields = draft.validate()?;

        let entry_id = if self.config.audit_enabled {
            Some(self.audit.begin(OperationKind::Create, caller).await)
        } else {
            None
        };

        let result = self.create_inner(fields, caller).await;

        if let Some(entry_id) = entry_id {
            match &result {
                Ok(record) => {
                    self.audit
                        .finish(&entry_id, Some(&record.id), OperationStatus::Succeeded, None)
                        .await;
                }
                Err(err) => {
                    self.audit
                        .finish(&entry_id, None, OperationStatus::Failed, Some(err.to_string()))
                        .await;
                }
            }
        }

        result
    }

    async fn create_inner(
        &self,
        fields: CreateFields,
        caller: &CallerIdentity,
    ) -> Result<PaySlip, ServiceError> {
        let id = RecordId::generate();

        debug!(
            record_id = %id,
            subject = %fields.subject_name,
            "Sealing salary for new record"
        );

        let sealed = self
            .timed_engine(
                ProtocolStage::Seal,
                self.engine
                    .seal_integer(&self.config.context, caller, fields.salary),
            )
            .await?;

        let record = NewPaySlip {
            id: id.clone(),
            subject_name: fields.subject_name,
            sealed_amount: sealed.handle,
            sealing_proof: sealed.proof,
            public_bonus: fields.public_bonus,
            public_deductions: fields.public_deductions,
            description: fields.description,
            creator: caller.clone(),
        };

        let stored = self
            .timed_store(ProtocolStage::Append, self.store.append(record))
            .await?
            .map_err(|source| ServiceError::Store {
                stage: ProtocolStage::Append,
                source,
            })?;

        info!(record_id = %stored.id, "Pay slip record created");
        Ok(stored)
    }

    /// Reveal the salary behind a record, exactly once.
    ///
    /// Already-verified records short-circuit to the stored plaintext with
    /// no engine call and no mutation. At most one reveal per record may
    /// be in flight; a concurrent second caller fails with
    /// [`ServiceError::RevealInProgress`].
    pub async fn reveal(
        &self,
        id: &RecordId,
        caller: &CallerIdentity,
    ) -> Result<u64, ServiceError> {
        if caller.is_empty() {
            return Err(ServiceError::IdentityRequired);
        }

        // Held for the whole protocol, released on every exit path
        let _permit = self
            .reveals
            .try_acquire(id)
            .ok_or_else(|| ServiceError::RevealInProgress(id.clone()))?;

        let entry_id = if self.config.audit_enabled {
            Some(self.audit.begin(OperationKind::Reveal, caller).await)
        } else {
            None
        };

        let result = self.reveal_inner(id).await;

        if let Some(entry_id) = entry_id {
            match &result {
                Ok(revealed) => {
                    self.audit
                        .finish(
                            &entry_id,
                            Some(id),
                            OperationStatus::Succeeded,
                            revealed.detail(),
                        )
                        .await;
                }
                Err(err) => {
                    self.audit
                        .finish(
                            &entry_id,
                            Some(id),
                            OperationStatus::Failed,
                            Some(err.to_string()),
                        )
                        .await;
                }
            }
        }

        result.map(|revealed| revealed.amount)
    }

    async fn reveal_inner(&self, id: &RecordId) -> Result<Revealed, ServiceError> {
        let snapshot = self
            .timed_store(ProtocolStage::Fetch, self.store.get(id))
            .await?
            .map_err(|source| match source {
                StoreError::NotFound(id) => ServiceError::NotFound(id),
                source => ServiceError::Store {
                    stage: ProtocolStage::Fetch,
                    source,
                },
            })?;

        // Idempotence short-circuit: repeated reveals are cheap and
        // side-effect-free once verification is set.
        if let Some(verification) = &snapshot.verification {
            debug!(record_id = %id, "Record already verified, returning stored value");
            return Ok(Revealed::already_verified(verification.revealed_amount));
        }

        let handle = snapshot.sealed_amount.clone();
        let outcome = self
            .timed_engine(
                ProtocolStage::Reveal,
                self.engine
                    .request_reveal(std::slice::from_ref(&handle), &self.config.context),
            )
            .await?;

        let amount = outcome.value_for(&handle).ok_or_else(|| ServiceError::Engine {
            stage: ProtocolStage::Reveal,
            source: EngineError::ParseError(format!("No clear value for handle {}", handle)),
        })?;

        let submission = self
            .timed_store(
                ProtocolStage::AppendVerification,
                self.store
                    .append_verification(id, &outcome.clear_value_bytes, &outcome.proof),
            )
            .await?;

        match submission {
            Ok(_) => {
                info!(record_id = %id, "Salary revealed and verified");
                Ok(Revealed::fresh(amount))
            }
            Err(StoreError::AlreadyVerified(_)) => {
                // Another caller won the race; the stored value is
                // authoritative.
                warn!(record_id = %id, "Verification raced, refetching stored value");
                let record = self
                    .timed_store(ProtocolStage::Fetch, self.store.get(id))
                    .await?
                    .map_err(|source| ServiceError::Store {
                        stage: ProtocolStage::Fetch,
                        source,
                    })?;

                record
                    .revealed_amount()
                    .map(Revealed::already_verified)
                    .ok_or(ServiceError::Store {
                        stage: ProtocolStage::AppendVerification,
                        source: StoreError::AlreadyVerified(id.clone()),
                    })
            }
            Err(source) => Err(ServiceError::Store {
                stage: ProtocolStage::AppendVerification,
                source,
            }),
        }
    }

    /// Fetch the latest snapshot of a record.
    pub async fn get(
        &self,
        id: &RecordId,
        caller: &CallerIdentity,
    ) -> Result<PaySlip, ServiceError> {
        if caller.is_empty() {
            return Err(ServiceError::IdentityRequired);
        }

        self.timed_store(ProtocolStage::Fetch, self.store.get(id))
            .await?
            .map_err(|source| match source {
                StoreError::NotFound(id) => ServiceError::NotFound(id),
                source => ServiceError::Store {
                    stage: ProtocolStage::Fetch,
                    source,
                },
            })
    }

    /// List all stored records.
    ///
    /// Records whose individual fetch fails are logged and skipped; only a
    /// failing id listing surfaces as an error.
    pub async fn list(&self, caller: &CallerIdentity) -> Result<Vec<PaySlip>, ServiceError> {
        if caller.is_empty() {
            return Err(ServiceError::IdentityRequired);
        }

        let ids = self
            .timed_store(ProtocolStage::Fetch, self.store.list_ids())
            .await?
            .map_err(|source| ServiceError::Store {
                stage: ProtocolStage::Fetch,
                source,
            })?;

        let mut records = Vec::with_capacity(ids.len());
        for id in ids {
            match self
                .timed_store(ProtocolStage::Fetch, self.store.get(&id))
                .await?
            {
                Ok(record) => records.push(record),
                Err(err) => {
                    warn!(record_id = %id, error = %err, "Skipping unreadable record");
                }
            }
        }

        Ok(records)
    }

    /// Get recent activity entries.
    pub async fn activity(&self, limit: usize) -> Vec<ActivityEntry> {
        self.audit.recent(limit).await
    }

    /// Get activity statistics.
    pub async fn activity_stats(&self) -> ActivityStats {
        self.audit.stats().await
    }

    fn stage_timeout(&self) -> Duration {
        Duration::from_millis(self.config.stage_timeout_ms)
    }

    /// Run an engine call under the stage timeout, mapping its error.
    async fn timed_engine<T>(
        &self,
        stage: ProtocolStage,
        fut: impl Future<Output = Result<T, EngineError>>,
    ) -> Result<T, ServiceError> {
        match tokio::time::timeout(self.stage_timeout(), fut).await {
            Ok(result) => result.map_err(|source| ServiceError::Engine { stage, source }),
            Err(_) => Err(ServiceError::Timeout { stage }),
        }
    }

    /// Run a store call under the stage timeout, leaving its error to the
    /// caller so conflict variants can be intercepted.
    async fn timed_store<T>(
        &self,
        stage: ProtocolStage,
        fut: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<Result<T, StoreError>, ServiceError> {
        tokio::time::timeout(self.stage_timeout(), fut)
            .await
            .map_err(|_| ServiceError::Timeout { stage })
    }
}

/// Internal reveal result, tracking whether the short-circuit fired.
struct Revealed {
    amount: u64,
    already_verified: bool,
}

impl Revealed {
    fn fresh(amount: u64) -> Self {
        Self {
            amount,
            already_verified: false,
        }
    }

    fn already_verified(amount: u64) -> Self {
        Self {
            amount,
            already_verified: true,
        }
    }

    fn detail(&self) -> Option<String> {
        self.already_verified
            .then(|| "already verified".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MockEngine;
    use crate::ledger::MemoryRecordStore;
    use payslip::encode_words;
    use std::time::Duration;

    fn caller() -> CallerIdentity {
        CallerIdentity::new("0xcaller")
    }

    fn context() -> EngineContext {
        EngineContext::new("0xcontract")
    }

    fn alice_draft() -> PaySlipDraft {
        PaySlipDraft::new("Alice")
            .with_salary("5000")
            .with_bonus("200")
            .with_deductions("50")
            .with_description("March")
    }

    fn service_with(
        engine: Arc<MockEngine>,
        store: Arc<MemoryRecordStore>,
    ) -> PayslipService {
        PayslipService::new(engine, store, context())
    }

    #[tokio::test]
    async fn test_create_then_get_matches_inputs() {
        let engine = Arc::new(MockEngine::default());
        let store = Arc::new(MemoryRecordStore::new());
        let service = service_with(engine.clone(), store.clone());

        let created = service.create(alice_draft(), &caller()).await.unwrap();
        assert_eq!(created.subject_name, "Alice");
        assert_eq!(created.public_bonus, 200);
        assert_eq!(created.public_deductions, 50);
        assert_eq!(created.description, "March");
        assert_eq!(created.creator, caller());
        assert!(created.verification.is_none());

        let fetched = service.get(&created.id, &caller()).await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert!(fetched.verification.is_none());
        assert_eq!(engine.seal_calls(), 1);
    }

    #[tokio::test]
    async fn test_missing_identity_rejected_before_network() {
        let engine = Arc::new(MockEngine::default());
        let store = Arc::new(MemoryRecordStore::new());
        let service = service_with(engine.clone(), store.clone());

        let err = service
            .create(alice_draft(), &CallerIdentity::absent())
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::IdentityRequired));
        assert_eq!(engine.seal_calls(), 0);
        assert_eq!(store.append_calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_subject_name_rejected_before_network() {
        let engine = Arc::new(MockEngine::default());
        let store = Arc::new(MemoryRecordStore::new());
        let service = service_with(engine.clone(), store.clone());

        let err = service
            .create(PaySlipDraft::new(""), &caller())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Validation(ValidationError::EmptySubjectName)
        ));
        assert_eq!(engine.seal_calls(), 0);
    }

    #[tokio::test]
    async fn test_reveal_scenario() {
        let engine = Arc::new(MockEngine::default());
        let store = Arc::new(MemoryRecordStore::new());
        let service = service_with(engine.clone(), store.clone());

        let created = service.create(alice_draft(), &caller()).await.unwrap();
        let revealed = service.reveal(&created.id, &caller()).await.unwrap();
        assert_eq!(revealed, 5000);

        let fetched = service.get(&created.id, &caller()).await.unwrap();
        assert_eq!(fetched.revealed_amount(), Some(5000));
    }

    #[tokio::test]
    async fn test_reveal_is_idempotent() {
        let engine = Arc::new(MockEngine::default());
        let store = Arc::new(MemoryRecordStore::new());
        let service = service_with(engine.clone(), store.clone());

        let created = service.create(alice_draft(), &caller()).await.unwrap();

        let first = service.reveal(&created.id, &caller()).await.unwrap();
        let second = service.reveal(&created.id, &caller()).await.unwrap();

        assert_eq!(first, 5000);
        assert_eq!(second, 5000);
        // The second call short-circuits: no engine work, no mutation
        assert_eq!(engine.reveal_calls(), 1);
        assert_eq!(store.verification_calls(), 1);
    }

    #[tokio::test]
    async fn test_reveal_nonexistent_fails_before_engine() {
        let engine = Arc::new(MockEngine::default());
        let store = Arc::new(MemoryRecordStore::new());
        let service = service_with(engine.clone(), store.clone());

        let err = service
            .reveal(&RecordId::new("payslip-missing"), &caller())
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(engine.reveal_calls(), 0);
    }

    #[tokio::test]
    async fn test_single_flight_per_record() {
        let engine = Arc::new(MockEngine::default().with_reveal_delay(Duration::from_millis(200)));
        let store = Arc::new(MemoryRecordStore::new());
        let service = Arc::new(service_with(engine.clone(), store.clone()));

        let created = service.create(alice_draft(), &caller()).await.unwrap();

        let first = {
            let service = Arc::clone(&service);
            let id = created.id.clone();
            tokio::spawn(async move { service.reveal(&id, &caller()).await })
        };

        // Let the first reveal reach the engine before contending
        tokio::time::sleep(Duration::from_millis(50)).await;
        let contended = service.reveal(&created.id, &caller()).await;

        assert!(matches!(contended, Err(ServiceError::RevealInProgress(_))));
        assert_eq!(first.await.unwrap().unwrap(), 5000);
        assert_eq!(engine.reveal_calls(), 1);
    }

    #[tokio::test]
    async fn test_already_verified_race_resolves_to_stored_value() {
        let engine = Arc::new(MockEngine::default().with_reveal_delay(Duration::from_millis(200)));
        let store = Arc::new(MemoryRecordStore::new());
        let service = Arc::new(service_with(engine.clone(), store.clone()));

        let created = service.create(alice_draft(), &caller()).await.unwrap();

        let racing = {
            let service = Arc::clone(&service);
            let id = created.id.clone();
            tokio::spawn(async move { service.reveal(&id, &caller()).await })
        };

        // While the engine call is in flight, another client verifies the
        // record out of band.
        tokio::time::sleep(Duration::from_millis(50)).await;
        store
            .append_verification(
                &created.id,
                &encode_words(&[5000]),
                &payslip::Proof::new("other-caller"),
            )
            .await
            .unwrap();

        // The raced reveal resolves the conflict as success
        assert_eq!(racing.await.unwrap().unwrap(), 5000);
    }

    #[tokio::test]
    async fn test_failed_append_leaves_no_record() {
        let engine = Arc::new(MockEngine::default());
        let store = Arc::new(MemoryRecordStore::new());
        let service = service_with(engine.clone(), store.clone());

        store.fail_next_append();
        let err = service.create(alice_draft(), &caller()).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Store {
                stage: ProtocolStage::Append,
                ..
            }
        ));
        assert_eq!(engine.seal_calls(), 1);
        assert!(store.list_ids().await.unwrap().is_empty());

        // Retrying is safe: a fresh id is generated per attempt
        let retried = service.create(alice_draft(), &caller()).await.unwrap();
        assert_eq!(service.list(&caller()).await.unwrap().len(), 1);
        assert_eq!(retried.subject_name, "Alice");
    }

    #[tokio::test]
    async fn test_failed_reveal_leaves_verification_absent() {
        let engine = Arc::new(MockEngine::default().with_reveal_failure());
        let store = Arc::new(MemoryRecordStore::new());
        let service = service_with(engine.clone(), store.clone());

        let created = service.create(alice_draft(), &caller()).await.unwrap();
        let err = service.reveal(&created.id, &caller()).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Engine {
                stage: ProtocolStage::Reveal,
                ..
            }
        ));
        assert_eq!(store.verification_calls(), 0);
        assert!(!service.get(&created.id, &caller()).await.unwrap().is_verified());
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let engine = Arc::new(MockEngine::default());
        let store = Arc::new(MemoryRecordStore::new());
        let service = Arc::new(service_with(engine.clone(), store.clone()));

        let caller = caller();
        let (a, b) = tokio::join!(
            service.create(alice_draft(), &caller),
            service.create(alice_draft(), &caller),
        );

        let (a, b) = (a.unwrap(), b.unwrap());
        assert_ne!(a.id, b.id);
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn test_stage_timeout_surfaces_and_releases_lock() {
        let engine = Arc::new(MockEngine::default().with_reveal_delay(Duration::from_millis(500)));
        let store = Arc::new(MemoryRecordStore::new());
        let service = service_with(engine.clone(), store.clone()).with_config(
            ServiceConfig::new(context()).with_stage_timeout_ms(50),
        );

        let created = service.create(alice_draft(), &caller()).await.unwrap();

        let err = service.reveal(&created.id, &caller()).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Timeout {
                stage: ProtocolStage::Reveal,
            }
        ));

        // The single-flight permit was released despite the timeout: a new
        // attempt times out again instead of reporting contention.
        let err = service.reveal(&created.id, &caller()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_list_skips_unreadable_records() {
        let engine = Arc::new(MockEngine::default());
        let store = Arc::new(MemoryRecordStore::new());
        let service = service_with(engine.clone(), store.clone());

        service.create(alice_draft(), &caller()).await.unwrap();
        service
            .create(PaySlipDraft::new("Bob").with_salary("3000"), &caller())
            .await
            .unwrap();

        let records = service.list(&caller()).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].subject_name, "Alice");
        assert_eq!(records[1].subject_name, "Bob");
    }

    #[tokio::test]
    async fn test_activity_trail_records_operations() {
        let engine = Arc::new(MockEngine::default());
        let store = Arc::new(MemoryRecordStore::new());
        let service = service_with(engine.clone(), store.clone());

        let created = service.create(alice_draft(), &caller()).await.unwrap();
        service.reveal(&created.id, &caller()).await.unwrap();

        let entries = service.activity(10).await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, OperationKind::Reveal);
        assert_eq!(entries[1].operation, OperationKind::Create);

        let stats = service.activity_stats().await;
        assert_eq!(stats.total, 2);
        assert_eq!(stats.succeeded, 2);
        assert_eq!(stats.failed, 0);
    }

    #[tokio::test]
    async fn test_is_ready_tracks_collaborators() {
        let store = Arc::new(MemoryRecordStore::new());

        let ready = service_with(Arc::new(MockEngine::default()), store.clone());
        assert!(ready.is_ready().await);

        let down = service_with(
            Arc::new(MockEngine::default().with_available(false)),
            store,
        );
        assert!(!down.is_ready().await);
    }
}
