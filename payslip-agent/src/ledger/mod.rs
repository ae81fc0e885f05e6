//! Record store gateways.
//!
//! The ledger durably stores pay slip records keyed by id and accepts
//! writes from authorized callers. This module wraps read/write access to
//! it; storage and consensus live on the other side.

pub mod http;
pub mod memory;
pub mod traits;

pub use http::HttpRecordStore;
pub use memory::MemoryRecordStore;
pub use traits::{RecordStore, StoreError};
