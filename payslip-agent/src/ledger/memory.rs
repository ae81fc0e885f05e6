//! In-memory record store.
//!
//! Enforces the same contract as the durable ledger: unique ids,
//! write-once verification, gateway-assigned timestamps. Carries call
//! counters and one-shot failure injection so orchestrator tests can
//! assert mutation counts and atomicity.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use tokio::sync::RwLock;

use payslip::{decode_words, NewPaySlip, PaySlip, Proof, RecordId, Verification};

use super::traits::*;

#[derive(Default)]
struct Shelf {
    /// Records by id
    records: HashMap<RecordId, PaySlip>,
    /// Insertion order, mirroring the ledger's append order
    order: Vec<RecordId>,
}

/// In-memory record store.
pub struct MemoryRecordStore {
    shelf: RwLock<Shelf>,
    fail_next_append: AtomicBool,
    list_calls: AtomicU32,
    get_calls: AtomicU32,
    append_calls: AtomicU32,
    verification_calls: AtomicU32,
}

impl MemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            shelf: RwLock::new(Shelf::default()),
            fail_next_append: AtomicBool::new(false),
            list_calls: AtomicU32::new(0),
            get_calls: AtomicU32::new(0),
            append_calls: AtomicU32::new(0),
            verification_calls: AtomicU32::new(0),
        }
    }

    /// Make the next append fail with a network error before any write.
    pub fn fail_next_append(&self) {
        self.fail_next_append.store(true, Ordering::SeqCst);
    }

    /// Number of list calls issued.
    pub fn list_calls(&self) -> u32 {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Number of get calls issued.
    pub fn get_calls(&self) -> u32 {
        self.get_calls.load(Ordering::SeqCst)
    }

    /// Number of append calls issued.
    pub fn append_calls(&self) -> u32 {
        self.append_calls.load(Ordering::SeqCst)
    }

    /// Number of verification-append calls issued.
    pub fn verification_calls(&self) -> u32 {
        self.verification_calls.load(Ordering::SeqCst)
    }

    /// Number of stored records.
    pub async fn count(&self) -> usize {
        self.shelf.read().await.records.len()
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn is_available(&self) -> bool {
        true
    }

    async fn list_ids(&self) -> Result<Vec<RecordId>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.shelf.read().await.order.clone())
    }

    async fn get(&self, id: &RecordId) -> Result<PaySlip, StoreError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.shelf
            .read()
            .await
            .records
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    async fn append(&self, record: NewPaySlip) -> Result<PaySlip, StoreError> {
        self.append_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_next_append.swap(false, Ordering::SeqCst) {
            return Err(StoreError::NetworkError(
                "Injected append failure".to_string(),
            ));
        }

        let mut shelf = self.shelf.write().await;
        if shelf.records.contains_key(&record.id) {
            return Err(StoreError::DuplicateId(record.id));
        }

        let stored = PaySlip {
            id: record.id.clone(),
            subject_name: record.subject_name,
            sealed_amount: record.sealed_amount,
            public_bonus: record.public_bonus,
            public_deductions: record.public_deductions,
            description: record.description,
            creator: record.creator,
            created_at: Utc::now(),
            verification: None,
        };

        shelf.order.push(record.id.clone());
        shelf.records.insert(record.id, stored.clone());

        Ok(stored)
    }

    async fn append_verification(
        &self,
        id: &RecordId,
        clear_value_bytes: &[u8],
        proof: &Proof,
    ) -> Result<PaySlip, StoreError> {
        self.verification_calls.fetch_add(1, Ordering::SeqCst);

        let revealed_amount = decode_words(clear_value_bytes)
            .map_err(|e| StoreError::Rejected(e.to_string()))?
            .first()
            .copied()
            .ok_or_else(|| StoreError::Rejected("No clear value word".to_string()))?;

        let mut shelf = self.shelf.write().await;
        let record = shelf
            .records
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        if record.verification.is_some() {
            return Err(StoreError::AlreadyVerified(id.clone()));
        }

        record.verification = Some(Verification {
            revealed_amount,
            proof: proof.clone(),
            verified_at: Utc::now(),
        });

        Ok(record.clone())
    }
}
