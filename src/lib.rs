//! BB84 quantum key distribution simulation with a key-cycling stream cipher.
//!
//! Two simulated parties derive a shared secret key by exchanging qubits
//! prepared and measured in independently random bases, keep only the
//! matching-basis positions, and apply the resulting key as a self-inverse
//! stream cipher to a text message. A fidelity percentage compares the
//! original and round-tripped plaintext.
//!
//! This is a protocol simulation, not a security-hardened key generator.

pub mod accuracy;
pub mod cipher;
mod core;
pub mod protocol;

pub use crate::core::{
    errors, random, Basis, FiltrationTable, PolarizationTable, QuantumBackend, StateVectorBackend,
};
pub use crate::protocol::{run_decrypt, run_encrypt, SessionResult};
