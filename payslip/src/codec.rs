//! Clear-value byte layout shared by the engine and ledger boundaries.
//!
//! Revealed plaintexts travel as ABI-style words: one 32-byte big-endian
//! word per value. The engine encodes them for submission, the ledger
//! decodes the first word as the revealed amount.

/// Size of one encoded clear value.
pub const WORD_SIZE: usize = 32;

/// Error types for clear-value decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// Byte length is not a whole number of words
    #[error("Clear value payload of {0} bytes is not a multiple of {WORD_SIZE}")]
    UnalignedLength(usize),

    /// Payload contained no words
    #[error("Clear value payload is empty")]
    Empty,

    /// A word does not fit in u64
    #[error("Clear value word {index} overflows u64")]
    Overflow {
        /// Zero-based word index
        index: usize,
    },
}

/// Encode clear values as consecutive 32-byte big-endian words.
pub fn encode_words(values: &[u64]) -> Vec<u8> {
    let mut out = Vec::with_capacity(values.len() * WORD_SIZE);
    for value in values {
        let mut word = [0u8; WORD_SIZE];
        word[WORD_SIZE - 8..].copy_from_slice(&value.to_be_bytes());
        out.extend_from_slice(&word);
    }
    out
}

/// Decode a clear-value payload back into u64 words.
pub fn decode_words(bytes: &[u8]) -> Result<Vec<u64>, CodecError> {
    if bytes.is_empty() {
        return Err(CodecError::Empty);
    }
    if bytes.len() % WORD_SIZE != 0 {
        return Err(CodecError::UnalignedLength(bytes.len()));
    }

    let mut values = Vec::with_capacity(bytes.len() / WORD_SIZE);
    for (index, word) in bytes.chunks_exact(WORD_SIZE).enumerate() {
        if word[..WORD_SIZE - 8].iter().any(|b| *b != 0) {
            return Err(CodecError::Overflow { index });
        }
        let mut tail = [0u8; 8];
        tail.copy_from_slice(&word[WORD_SIZE - 8..]);
        values.push(u64::from_be_bytes(tail));
    }

    Ok(values)
}
