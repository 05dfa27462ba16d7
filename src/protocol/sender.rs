//! Sender-side qubit preparation.

use crate::core::errors::ProtocolError;
use crate::core::{random, PolarizationTable};
use rand::Rng;

/// Pairs the sender's raw bit material with a freshly randomized basis per
/// position, producing the preparation record for transmission.
///
/// Pure data construction: nothing is transmitted or measured here.
pub fn encode<R: Rng>(bits: Vec<bool>, rng: &mut R) -> Result<PolarizationTable, ProtocolError> {
    let bases = random::generate_bases(rng, bits.len())?;
    PolarizationTable::new(bits, bases)
}
