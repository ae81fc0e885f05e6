//! Domain model for the sealed payroll record lifecycle.
//!
//! A pay slip stores one confidential figure - the salary - as an opaque
//! ciphertext handle, next to public bonus/deduction figures. The salary
//! stays hidden until a one-time reveal protocol recovers the plaintext and
//! records it durably on the ledger.
//!
//! # Key Components
//!
//! - [`PaySlip`]: the central record entity, write-once after creation
//! - [`Verification`]: the write-once result of a completed reveal
//! - [`PaySlipDraft`]: raw form input with the documented coercion policy
//! - [`CallerIdentity`] / [`EngineContext`]: explicit authorization context
//! - [`codec`]: the clear-value byte layout shared with the ledger
//!
//! With the `typescript` feature enabled, wire-facing types can be exported
//! to TypeScript using ts-rs for consistency with the web frontend.

pub mod codec;
pub mod draft;
pub mod identity;
pub mod record;

// Re-export main types
pub use codec::{decode_words, encode_words, CodecError};
pub use draft::{CreateFields, PaySlipDraft, ValidationError};
pub use identity::{CallerIdentity, EngineContext};
pub use record::{CiphertextHandle, NewPaySlip, PaySlip, Proof, RecordId, Verification};
