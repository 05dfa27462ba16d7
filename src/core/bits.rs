use crate::core::errors::ProtocolError;
use serde::Serialize;

/// One of the two preparation/measurement schemes used by BB84.
///
/// Measuring in the basis a qubit was prepared in reproduces the prepared bit
/// exactly; measuring in the other basis yields a uniformly random outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Basis {
    /// Computational (Z) basis: {|0>, |1>}.
    Rectilinear,
    /// Hadamard (X) basis: {|+>, |->}.
    Diagonal,
}

/// The sender's preparation record: which bit was encoded in which basis,
/// per transmitted qubit.
///
/// Built once by the sender and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolarizationTable {
    bits: Vec<bool>,
    bases: Vec<Basis>,
}

/// The receiver's measurement record: which basis each qubit was measured in.
pub type FiltrationTable = Vec<Basis>;

impl PolarizationTable {
    pub fn new(bits: Vec<bool>, bases: Vec<Basis>) -> Result<Self, ProtocolError> {
        if bits.is_empty() || bits.len() != bases.len() {
            return Err(ProtocolError::InvalidLength(bits.len()));
        }
        Ok(Self { bits, bases })
    }

    /// Number of transmitted qubits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn bases(&self) -> &[Basis] {
        &self.bases
    }

    /// The (bit, basis) preparation at position `i`.
    pub fn prepared(&self, i: usize) -> (bool, Basis) {
        (self.bits[i], self.bases[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_lengths() {
        let res = PolarizationTable::new(vec![true, false], vec![Basis::Rectilinear]);
        assert_eq!(res, Err(ProtocolError::InvalidLength(2)));
    }

    #[test]
    fn rejects_empty_table() {
        let res = PolarizationTable::new(vec![], vec![]);
        assert_eq!(res, Err(ProtocolError::InvalidLength(0)));
    }

    #[test]
    fn exposes_preparations_in_order() {
        let table = PolarizationTable::new(
            vec![true, false],
            vec![Basis::Diagonal, Basis::Rectilinear],
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.prepared(0), (true, Basis::Diagonal));
        assert_eq!(table.prepared(1), (false, Basis::Rectilinear));
    }
}
