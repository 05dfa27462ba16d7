//! Receiver-side measurement.

use crate::core::errors::ProtocolError;
use crate::core::{random, FiltrationTable, PolarizationTable, QuantumBackend};
use rand::Rng;

/// Picks an independent random basis per qubit and measures the transmission
/// through the backend.
///
/// Returns the receiver's basis record together with the measured bits.
pub fn measure<B: QuantumBackend, R: Rng>(
    table: &PolarizationTable,
    backend: &mut B,
    rng: &mut R,
) -> Result<(FiltrationTable, Vec<bool>), ProtocolError> {
    let bases = random::generate_bases(rng, table.len())?;
    let measured = backend.measure(table, &bases)?;
    Ok((bases, measured))
}
