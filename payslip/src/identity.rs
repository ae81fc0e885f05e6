//! Authorization context types.
//!
//! The original design read the caller's wallet address from ambient
//! session state; here every core operation takes the identity explicitly.
//! "No authorized identity available" is modeled as an empty address.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// The authorized identity issuing a core operation.
///
/// Wraps the raw wallet address. An empty or whitespace-only address means
/// no identity is available; the orchestrator rejects such callers before
/// any network call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(transparent)]
pub struct CallerIdentity(String);

impl CallerIdentity {
    /// Wrap a caller address.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// An explicitly absent identity.
    pub fn absent() -> Self {
        Self(String::new())
    }

    /// Whether no usable identity is present.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CallerIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The target context sealing and reveal are bound to.
///
/// In the deployed system this is the contract address the ciphertexts are
/// scoped to; the engine rejects inputs sealed for a different context.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(transparent)]
pub struct EngineContext(String);

impl EngineContext {
    /// Wrap a context address.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Get the context as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EngineContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
