//! Mock confidentiality engine for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use payslip::{encode_words, CallerIdentity, CiphertextHandle, EngineContext, Proof};

use super::traits::*;

/// Mock engine for testing.
///
/// Seals values into deterministic handles, remembers the plaintext behind
/// each handle, and counts calls so tests can assert how often the remote
/// capability was exercised.
pub struct MockEngine {
    engine_id: String,
    available: AtomicBool,
    fail_seal: AtomicBool,
    fail_reveal: AtomicBool,
    reveal_delay: Option<Duration>,
    sealed: Mutex<HashMap<CiphertextHandle, u64>>,
    next_handle: AtomicU64,
    seal_calls: AtomicU32,
    reveal_calls: AtomicU32,
}

impl MockEngine {
    /// Create a new mock engine.
    pub fn new(engine_id: impl Into<String>) -> Self {
        Self {
            engine_id: engine_id.into(),
            available: AtomicBool::new(true),
            fail_seal: AtomicBool::new(false),
            fail_reveal: AtomicBool::new(false),
            reveal_delay: None,
            sealed: Mutex::new(HashMap::new()),
            next_handle: AtomicU64::new(1),
            seal_calls: AtomicU32::new(0),
            reveal_calls: AtomicU32::new(0),
        }
    }

    /// Set availability.
    pub fn with_available(self, available: bool) -> Self {
        self.available.store(available, Ordering::SeqCst);
        self
    }

    /// Make every seal call fail.
    pub fn with_seal_failure(self) -> Self {
        self.fail_seal.store(true, Ordering::SeqCst);
        self
    }

    /// Make every reveal call fail.
    pub fn with_reveal_failure(self) -> Self {
        self.fail_reveal.store(true, Ordering::SeqCst);
        self
    }

    /// Hold each reveal call open for the given duration.
    ///
    /// Lets concurrency tests overlap a second caller with an in-flight
    /// reveal deterministically.
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = Some(delay);
        self
    }

    /// Number of seal calls issued.
    pub fn seal_calls(&self) -> u32 {
        self.seal_calls.load(Ordering::SeqCst)
    }

    /// Number of reveal calls issued.
    pub fn reveal_calls(&self) -> u32 {
        self.reveal_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new("mock-engine")
    }
}

#[async_trait]
impl ConfidentialityEngine for MockEngine {
    fn id(&self) -> &str {
        &self.engine_id
    }

    async fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn seal_integer(
        &self,
        context: &EngineContext,
        _identity: &CallerIdentity,
        value: u64,
    ) -> Result<SealedInteger, EngineError> {
        self.seal_calls.fetch_add(1, Ordering::SeqCst);

        if !self.available.load(Ordering::SeqCst) {
            return Err(EngineError::Unavailable("Mock engine disabled".to_string()));
        }
        if self.fail_seal.load(Ordering::SeqCst) {
            return Err(EngineError::SealingRejected(format!(
                "Mock rejection for context {}",
                context
            )));
        }

        let handle = CiphertextHandle::new(format!(
            "mock-ct-{}",
            self.next_handle.fetch_add(1, Ordering::SeqCst)
        ));

        let mut sealed = self.sealed.lock().unwrap_or_else(|e| e.into_inner());
        sealed.insert(handle.clone(), value);

        Ok(SealedInteger {
            handle,
            proof: Proof::new("mock-seal-proof"),
        })
    }

    async fn request_reveal(
        &self,
        handles: &[CiphertextHandle],
        _context: &EngineContext,
    ) -> Result<RevealOutcome, EngineError> {
        self.reveal_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.reveal_delay {
            tokio::time::sleep(delay).await;
        }

        if !self.available.load(Ordering::SeqCst) {
            return Err(EngineError::Unavailable("Mock engine disabled".to_string()));
        }
        if self.fail_reveal.load(Ordering::SeqCst) {
            return Err(EngineError::RevealRejected("Mock proof failure".to_string()));
        }

        let sealed = self.sealed.lock().unwrap_or_else(|e| e.into_inner());

        let mut clear_values = HashMap::new();
        let mut values = Vec::with_capacity(handles.len());
        for handle in handles {
            let value = sealed.get(handle).copied().ok_or_else(|| {
                EngineError::RevealRejected(format!("Unknown handle {}", handle))
            })?;
            clear_values.insert(handle.clone(), value);
            values.push(value);
        }

        Ok(RevealOutcome {
            clear_values,
            clear_value_bytes: encode_words(&values),
            proof: Proof::new("mock-reveal-proof"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seal_then_reveal() {
        let engine = MockEngine::default();
        let context = EngineContext::new("0xcontract");
        let caller = CallerIdentity::new("0xcaller");

        let sealed = engine.seal_integer(&context, &caller, 5000).await.unwrap();
        assert_eq!(engine.seal_calls(), 1);

        let outcome = engine
            .request_reveal(&[sealed.handle.clone()], &context)
            .await
            .unwrap();

        assert_eq!(outcome.value_for(&sealed.handle), Some(5000));
        assert_eq!(outcome.clear_value_bytes, encode_words(&[5000]));
        assert_eq!(engine.reveal_calls(), 1);
    }

    #[tokio::test]
    async fn test_unknown_handle_rejected() {
        let engine = MockEngine::default();

        let err = engine
            .request_reveal(
                &[CiphertextHandle::new("nope")],
                &EngineContext::new("0xcontract"),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, EngineError::RevealRejected(_)));
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let engine = MockEngine::default().with_seal_failure();
        let result = engine
            .seal_integer(
                &EngineContext::new("0xcontract"),
                &CallerIdentity::new("0xcaller"),
                1,
            )
            .await;

        assert!(matches!(result, Err(EngineError::SealingRejected(_))));
        assert_eq!(engine.seal_calls(), 1);
    }
}
