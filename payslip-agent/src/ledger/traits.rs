//! Core trait for record store gateways.
//!
//! `append` and `append_verification` are at-most-once, state-changing
//! operations: implementations resolve only once the ledger has durably
//! accepted the write, and callers must never re-submit a call whose
//! outcome is unknown.

use async_trait::async_trait;

use payslip::{NewPaySlip, PaySlip, Proof, RecordId};

/// Error types for ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No record with the given id exists
    #[error("Record not found: {0}")]
    NotFound(RecordId),

    /// A record with the given id already exists
    #[error("Duplicate record id: {0}")]
    DuplicateId(RecordId),

    /// The record's verification is already set.
    ///
    /// Not a true failure: the orchestrator resolves it by refetching the
    /// record and returning the stored plaintext.
    #[error("Record already verified: {0}")]
    AlreadyVerified(RecordId),

    /// Ledger rejected the write (unauthorized caller, bad proof)
    #[error("Write rejected: {0}")]
    Rejected(String),

    /// Network error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Parsing error
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Core trait for record store gateways.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Check if the ledger is currently reachable.
    async fn is_available(&self) -> bool;

    /// List the ids of all stored records.
    async fn list_ids(&self) -> Result<Vec<RecordId>, StoreError>;

    /// Fetch the latest stored snapshot of a record.
    async fn get(&self, id: &RecordId) -> Result<PaySlip, StoreError>;

    /// Append a new record, resolving on durable acceptance.
    ///
    /// Echoes the stored snapshot so server-assigned fields (timestamp,
    /// absent verification) are authoritative.
    async fn append(&self, record: NewPaySlip) -> Result<PaySlip, StoreError>;

    /// Append the verification result to an existing record.
    ///
    /// Write-once: a second append for the same record fails with
    /// [`StoreError::AlreadyVerified`].
    async fn append_verification(
        &self,
        id: &RecordId,
        clear_value_bytes: &[u8],
        proof: &Proof,
    ) -> Result<PaySlip, StoreError>;
}
