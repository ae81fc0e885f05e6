//! Core trait for confidentiality engine clients.
//!
//! This module defines the `ConfidentialityEngine` trait - the abstraction
//! over the remote seal/reveal capability.
//!
//! The reveal protocol is the explicit two-phase form: the engine returns
//! the recovered clear values together with a publishable proof, and the
//! orchestrator owns the follow-up ledger submission. Decrypt-before-submit
//! ordering is preserved by the orchestrator issuing the calls in sequence.

use async_trait::async_trait;
use std::collections::HashMap;

use payslip::{CallerIdentity, CiphertextHandle, EngineContext, Proof};

/// Error types for engine operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Remote capability cannot be reached
    #[error("Engine unavailable: {0}")]
    Unavailable(String),

    /// Engine reported the input invalid for the target context
    #[error("Sealing rejected: {0}")]
    SealingRejected(String),

    /// Engine could not produce a valid reveal proof
    #[error("Reveal rejected: {0}")]
    RevealRejected(String),

    /// Network error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Parsing error
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Result of sealing one plaintext integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedInteger {
    /// Handle of the produced ciphertext
    pub handle: CiphertextHandle,
    /// Proof that the ciphertext was sealed for the requested context
    pub proof: Proof,
}

/// Result of a reveal request over one or more handles.
#[derive(Debug, Clone)]
pub struct RevealOutcome {
    /// Recovered plaintext per requested handle
    pub clear_values: HashMap<CiphertextHandle, u64>,
    /// ABI-encoded clear values, ready for ledger submission
    pub clear_value_bytes: Vec<u8>,
    /// Publishable proof of correct decryption
    pub proof: Proof,
}

impl RevealOutcome {
    /// The recovered plaintext for a specific handle.
    pub fn value_for(&self, handle: &CiphertextHandle) -> Option<u64> {
        self.clear_values.get(handle).copied()
    }
}

/// Core trait for confidentiality engine clients.
///
/// Abstracts over the remote encryption/decryption capability so the
/// orchestrator can run against a relayer service or an in-memory mock.
#[async_trait]
pub trait ConfidentialityEngine: Send + Sync {
    /// Get the engine identifier.
    fn id(&self) -> &str;

    /// Check if the engine is currently reachable.
    async fn is_available(&self) -> bool;

    /// Seal a plaintext integer for the target context.
    ///
    /// May take seconds; the caller decides on timeouts.
    async fn seal_integer(
        &self,
        context: &EngineContext,
        identity: &CallerIdentity,
        value: u64,
    ) -> Result<SealedInteger, EngineError>;

    /// Recover the plaintexts behind the given handles with a proof.
    ///
    /// The returned proof must be submitted to the ledger by the caller;
    /// the engine itself performs no on-ledger mutation.
    async fn request_reveal(
        &self,
        handles: &[CiphertextHandle],
        context: &EngineContext,
    ) -> Result<RevealOutcome, EngineError>;
}
