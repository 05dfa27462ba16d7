//! Basis sifting: extracting the shared key from matching-basis positions.

use crate::core::errors::BackendError;
use crate::core::{Basis, PolarizationTable};

/// Validates the backend's output and keeps, in original index order, the
/// measured bit at every position where both parties chose the same basis.
///
/// At a matching position the measured bit equals the sender's prepared bit
/// by the physical measurement rule, so the retained sequence is the shared
/// key both parties derive. A backend whose matching-basis outcomes disagree
/// with the preparation record has broken its contract and is rejected.
///
/// An empty result is valid: with small qubit counts no position may match.
pub fn reconcile(
    table: &PolarizationTable,
    filtration: &[Basis],
    measured: &[bool],
) -> Result<Vec<bool>, BackendError> {
    if filtration.len() != table.len() {
        return Err(BackendError::LengthMismatch {
            expected: table.len(),
            got: filtration.len(),
        });
    }
    if measured.len() != table.len() {
        return Err(BackendError::LengthMismatch {
            expected: table.len(),
            got: measured.len(),
        });
    }

    let mut key = Vec::with_capacity(table.len());

    for i in 0..table.len() {
        let (bit, basis) = table.prepared(i);
        if basis != filtration[i] {
            continue;
        }
        if measured[i] != bit {
            return Err(BackendError::InvariantViolation { index: i });
        }
        key.push(measured[i]);
    }

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Basis::{Diagonal as D, Rectilinear as R};

    #[test]
    fn keeps_only_matching_positions_in_order() {
        let table = PolarizationTable::new(
            vec![false, true, true, false, true],
            vec![R, R, D, D, R],
        )
        .unwrap();
        let filtration = vec![R, D, D, R, R];
        let measured = vec![false, false, true, true, true];

        let key = reconcile(&table, &filtration, &measured).unwrap();

        assert_eq!(key, vec![false, true, true]);
    }

    #[test]
    fn no_matches_yields_empty_key() {
        let table = PolarizationTable::new(vec![true, false], vec![R, D]).unwrap();
        let filtration = vec![D, R];
        let measured = vec![true, true];

        assert_eq!(reconcile(&table, &filtration, &measured).unwrap(), vec![]);
    }

    #[test]
    fn rejects_short_measurement_vector() {
        let table = PolarizationTable::new(vec![true, false], vec![R, R]).unwrap();
        let filtration = vec![R, R];

        let res = reconcile(&table, &filtration, &[true]);
        assert_eq!(res, Err(BackendError::LengthMismatch { expected: 2, got: 1 }));
    }

    #[test]
    fn rejects_matching_basis_disagreement() {
        let table = PolarizationTable::new(vec![true, false], vec![R, D]).unwrap();
        let filtration = vec![R, D];
        // Position 1 matches bases but flips the prepared bit.
        let measured = vec![true, true];

        let res = reconcile(&table, &filtration, &measured);
        assert_eq!(res, Err(BackendError::InvariantViolation { index: 1 }));
    }
}
