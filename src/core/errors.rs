use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Backend returned {got} outcomes for {expected} transmitted qubits")]
    LengthMismatch { expected: usize, got: usize },

    #[error("Matching-basis outcome at position {index} differs from the prepared bit")]
    InvariantViolation { index: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Key material length must be at least 1, got {0}")]
    InvalidLength(usize),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Sifting produced an empty key: no basis positions matched")]
    EmptyKey,

    #[error("Combined code point {0:#x} is not a Unicode scalar value")]
    UnsupportedCodePoint(u32),
}
