//! Pay slip record types.
//!
//! The record is write-once: every field is fixed at creation, and the
//! optional [`Verification`] sub-entity is set at most once by a completed
//! reveal. Nothing in this module mutates a stored record in place; the
//! ledger gateway returns fresh snapshots instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::identity::CallerIdentity;

/// Prefix for generated record identifiers.
const RECORD_ID_PREFIX: &str = "payslip";

/// Opaque unique identifier of a pay slip record.
///
/// Assigned by the orchestrator at creation time, never by the caller. A
/// fresh id is generated per create attempt, so a retried create can never
/// collide with an earlier partial attempt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh, globally unique record id.
    pub fn generate() -> Self {
        Self(format!("{}-{}", RECORD_ID_PREFIX, uuid::Uuid::new_v4()))
    }

    /// Wrap an existing id, e.g. one read back from the ledger.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque reference to a ciphertext stored by the ledger.
///
/// Only the confidentiality engine can interpret it; every other component
/// passes it through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(transparent)]
pub struct CiphertextHandle(String);

impl CiphertextHandle {
    /// Wrap a handle received from the engine or the ledger.
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// Get the handle as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CiphertextHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque hex-encoded attestation blob.
///
/// Produced by the confidentiality engine, checked and stored by the
/// ledger. The core never inspects its contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(transparent)]
pub struct Proof(String);

impl Proof {
    /// Wrap an already hex-encoded proof string.
    pub fn new(proof: impl Into<String>) -> Self {
        Self(proof.into())
    }

    /// Hex-encode raw proof bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode(bytes))
    }

    /// Get the proof as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Result of a completed reveal, write-once per record.
///
/// Once present, every later read of the record returns the same
/// `revealed_amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct Verification {
    /// Plaintext integer recovered from the sealed amount
    pub revealed_amount: u64,
    /// Attestation the ledger accepted for the recovery
    pub proof: Proof,
    /// When the ledger accepted the verification
    pub verified_at: DateTime<Utc>,
}

/// A stored pay slip record.
///
/// Matches TypeScript `PaySlipData` in the web frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct PaySlip {
    /// Unique record identifier
    pub id: RecordId,
    /// Employee or subject label, non-empty
    pub subject_name: String,
    /// Handle of the sealed salary ciphertext
    pub sealed_amount: CiphertextHandle,
    /// Public bonus figure
    pub public_bonus: u64,
    /// Public deductions figure
    pub public_deductions: u64,
    /// Free-text description, may be empty
    pub description: String,
    /// Identity that created the record
    pub creator: CallerIdentity,
    /// Ledger-assigned creation timestamp
    pub created_at: DateTime<Utc>,
    /// Reveal result, absent until a reveal completes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<Verification>,
}

impl PaySlip {
    /// Whether the salary has been revealed and durably verified.
    pub fn is_verified(&self) -> bool {
        self.verification.is_some()
    }

    /// The revealed salary, if verification has completed.
    pub fn revealed_amount(&self) -> Option<u64> {
        self.verification.as_ref().map(|v| v.revealed_amount)
    }
}

/// Payload appended to the ledger when creating a record.
///
/// Carries the sealing proof so the ledger can check the ciphertext was
/// produced for the right context. The ledger assigns the creation
/// timestamp; the stored snapshot it echoes back is authoritative.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub struct NewPaySlip {
    /// Orchestrator-generated record id
    pub id: RecordId,
    /// Employee or subject label
    pub subject_name: String,
    /// Handle of the sealed salary ciphertext
    pub sealed_amount: CiphertextHandle,
    /// Proof that the ciphertext was sealed for the target context
    pub sealing_proof: Proof,
    /// Public bonus figure
    pub public_bonus: u64,
    /// Public deductions figure
    pub public_deductions: u64,
    /// Free-text description
    pub description: String,
    /// Identity creating the record
    pub creator: CallerIdentity,
}
