//! Confidentiality engine clients.
//!
//! The engine is a remote capability that seals plaintext integers into
//! ciphertext handles and later recovers them with a publishable proof.
//! This module only wraps it; the cryptography lives on the other side.

pub mod mock;
pub mod relayer;
pub mod traits;

pub use mock::MockEngine;
pub use relayer::RelayerEngine;
pub use traits::{ConfidentialityEngine, EngineError, RevealOutcome, SealedInteger};
