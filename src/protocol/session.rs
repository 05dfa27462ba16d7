//! Full protocol sessions: key exchange, cipher application, scoring.

use crate::core::errors::ProtocolError;
use crate::core::{random, FiltrationTable, PolarizationTable, QuantumBackend};
use crate::protocol::{receiver, sender, sift};
use crate::{accuracy, cipher};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

/// Everything a single protocol run produces, packaged for display.
///
/// Either every field is populated from the same run or the run failed as a
/// whole; no partial bundles exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionResult {
    /// The sender's raw random bit material.
    pub secret_bits: Vec<bool>,
    /// What was prepared: the sender's bit/basis pairing.
    pub polarization_table: PolarizationTable,
    /// What the receiver measured with: the receiver's basis choices.
    pub filtration_table: FiltrationTable,
    /// The classical outcome bits returned by the backend.
    pub measured_values: Vec<bool>,
    /// The sifted shared key, length <= key material length.
    pub final_key: Vec<bool>,
    pub ciphered_message: String,
    pub deciphered_message: String,
    /// Percentage of positions where the submitted text and the recovered
    /// plaintext agree, rounded to two decimals.
    pub accuracy: f64,
}

struct KeyExchange {
    secret_bits: Vec<bool>,
    polarization_table: PolarizationTable,
    filtration_table: FiltrationTable,
    measured_values: Vec<bool>,
    final_key: Vec<bool>,
}

/// Runs one BB84 exchange: random bit material, preparation, transmission,
/// measurement, sifting.
fn exchange_key<B: QuantumBackend, R: Rng>(
    key_len: usize,
    backend: &mut B,
    rng: &mut R,
) -> Result<KeyExchange, ProtocolError> {
    let secret_bits = random::generate_bits(rng, key_len)?;
    let polarization_table = sender::encode(secret_bits.clone(), rng)?;
    debug!(qubits = key_len, "prepared sender qubits");

    let (filtration_table, measured_values) =
        receiver::measure(&polarization_table, backend, rng)?;
    let final_key = sift::reconcile(&polarization_table, &filtration_table, &measured_values)?;
    debug!(raw = key_len, sifted = final_key.len(), "sifted shared key");

    Ok(KeyExchange {
        secret_bits,
        polarization_table,
        filtration_table,
        measured_values,
        final_key,
    })
}

/// Round-trip demo: exchanges a key, ciphers the given plaintext, deciphers
/// the result back, and scores plaintext against the round trip.
pub fn run_encrypt<B: QuantumBackend, R: Rng>(
    message: &str,
    key_len: usize,
    backend: &mut B,
    rng: &mut R,
) -> Result<SessionResult, ProtocolError> {
    let exchange = exchange_key(key_len, backend, rng)?;

    let ciphered_message = cipher::cipher(message, &exchange.final_key)?;
    let deciphered_message = cipher::decipher(&ciphered_message, &exchange.final_key)?;
    let accuracy = accuracy::score(message, &deciphered_message);
    debug!(accuracy, "scored encrypt round trip");

    Ok(assemble(exchange, ciphered_message, deciphered_message, accuracy))
}

/// Recovery demo: exchanges a key, treats the given text as already ciphered,
/// deciphers it to recover plaintext, and re-ciphers that plaintext for
/// display. Scores the given text against the recovered plaintext.
pub fn run_decrypt<B: QuantumBackend, R: Rng>(
    message: &str,
    key_len: usize,
    backend: &mut B,
    rng: &mut R,
) -> Result<SessionResult, ProtocolError> {
    let exchange = exchange_key(key_len, backend, rng)?;

    let deciphered_message = cipher::decipher(message, &exchange.final_key)?;
    let ciphered_message = cipher::cipher(&deciphered_message, &exchange.final_key)?;
    let accuracy = accuracy::score(message, &deciphered_message);
    debug!(accuracy, "scored decrypt recovery");

    Ok(assemble(exchange, ciphered_message, deciphered_message, accuracy))
}

fn assemble(
    exchange: KeyExchange,
    ciphered_message: String,
    deciphered_message: String,
    accuracy: f64,
) -> SessionResult {
    SessionResult {
        secret_bits: exchange.secret_bits,
        polarization_table: exchange.polarization_table,
        filtration_table: exchange.filtration_table,
        measured_values: exchange.measured_values,
        final_key: exchange.final_key,
        ciphered_message,
        deciphered_message,
        accuracy,
    }
}
