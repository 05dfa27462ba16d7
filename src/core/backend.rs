//! Quantum execution backend.
//!
//! The protocol logic never manipulates quantum states directly; it hands the
//! sender's preparation record and the receiver's basis choices to a
//! [`QuantumBackend`] and gets one classical bit back per qubit. Any backend
//! must honor the single physical rule the protocol depends on, per position:
//!
//! - matching bases reproduce the prepared bit with certainty;
//! - mismatched bases yield a uniformly random outcome, independent of the
//!   prepared bit.

use crate::core::bits::{Basis, PolarizationTable};
use crate::core::errors::BackendError;
use num_complex::Complex64;
use rand::Rng;

/// Transmits prepared qubits and measures each one in the receiver's basis.
pub trait QuantumBackend {
    /// Returns one classical outcome bit per transmitted qubit.
    fn measure(
        &mut self,
        table: &PolarizationTable,
        bases: &[Basis],
    ) -> Result<Vec<bool>, BackendError>;
}

/// Default backend: single-qubit state-vector simulation.
///
/// Each qubit is prepared as an amplitude pair, rotated into the receiver's
/// measurement basis, and sampled by the Born rule. For matching bases the
/// outcome probability collapses to 0 or 1, for mismatched bases to 1/2, so
/// the physical rule above falls out of the simulation rather than being
/// special-cased.
#[derive(Debug, Clone)]
pub struct StateVectorBackend<R: Rng> {
    rng: R,
}

impl<R: Rng> StateVectorBackend<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

/// Amplitudes of the prepared state in the computational basis.
fn prepare(bit: bool, basis: Basis) -> [Complex64; 2] {
    let one = Complex64::new(1.0, 0.0);
    let zero = Complex64::new(0.0, 0.0);
    let inv_sqrt2 = Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0);

    match (basis, bit) {
        (Basis::Rectilinear, false) => [one, zero],
        (Basis::Rectilinear, true) => [zero, one],
        // |+> and |->
        (Basis::Diagonal, false) => [inv_sqrt2, inv_sqrt2],
        (Basis::Diagonal, true) => [inv_sqrt2, -inv_sqrt2],
    }
}

/// Hadamard rotation, mapping the diagonal basis onto the computational one.
fn hadamard([a, b]: [Complex64; 2]) -> [Complex64; 2] {
    let inv_sqrt2 = Complex64::new(1.0 / 2.0_f64.sqrt(), 0.0);
    [(a + b) * inv_sqrt2, (a - b) * inv_sqrt2]
}

impl<R: Rng> QuantumBackend for StateVectorBackend<R> {
    fn measure(
        &mut self,
        table: &PolarizationTable,
        bases: &[Basis],
    ) -> Result<Vec<bool>, BackendError> {
        if bases.len() != table.len() {
            return Err(BackendError::LengthMismatch {
                expected: table.len(),
                got: bases.len(),
            });
        }

        let mut outcomes = Vec::with_capacity(table.len());

        for (i, &measure_basis) in bases.iter().enumerate() {
            let (bit, prep_basis) = table.prepared(i);
            let mut state = prepare(bit, prep_basis);

            // Rotate so the measurement is always computational.
            if measure_basis == Basis::Diagonal {
                state = hadamard(state);
            }

            let p_one = state[1].norm_sqr();
            outcomes.push(self.rng.random_bool(p_one.clamp(0.0, 1.0)));
        }

        Ok(outcomes)
    }
}
