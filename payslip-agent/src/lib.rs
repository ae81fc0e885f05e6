//! Payslip Agent - Record Lifecycle Orchestration
//!
//! Drives a sealed payroll record through its lifecycle:
//! - Trait-based confidentiality engine clients (relayer HTTP, mock)
//! - Trait-based record store gateways (HTTP, in-memory)
//! - Single-flight reveal coordination per record
//! - Activity audit trail for every create/reveal attempt
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            PayslipService               │
//! │   (create / reveal / list / get)        │
//! └────────────────┬────────────────────────┘
//!                  │
//!      ┌───────────┴───────────┐
//!      ▼                       ▼
//! ┌─────────────┐       ┌─────────────┐
//! │Confidential-│       │ RecordStore │
//! │ ityEngine   │       │ (HTTP/      │
//! │ (Relayer/   │       │  Memory)    │
//! │  Mock)      │       │             │
//! └─────────────┘       └─────────────┘
//! ```

pub mod audit;
pub mod engine;
pub mod ledger;
pub mod service;
pub mod singleflight;

// Re-export main types for convenience
pub use audit::{ActivityEntry, ActivityLog, ActivityStats, OperationKind, OperationStatus};
pub use engine::traits::{ConfidentialityEngine, EngineError, RevealOutcome, SealedInteger};
pub use ledger::traits::{RecordStore, StoreError};
pub use service::{PayslipService, ProtocolStage, ServiceConfig, ServiceError};
