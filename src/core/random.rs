//! Uniform bit and basis generation.
//!
//! Every generator takes an explicit `Rng` handle so that runs can be seeded
//! deterministically in tests and concurrent sessions never share state.

use crate::core::bits::Basis;
use crate::core::errors::ProtocolError;
use rand::Rng;

/// Generates `n` independent, uniformly distributed bits.
pub fn generate_bits<R: Rng>(rng: &mut R, n: usize) -> Result<Vec<bool>, ProtocolError> {
    check_length(n)?;
    Ok((0..n).map(|_| rng.random_bool(0.5)).collect())
}

/// Generates `n` independent, uniformly distributed basis choices.
pub fn generate_bases<R: Rng>(rng: &mut R, n: usize) -> Result<Vec<Basis>, ProtocolError> {
    check_length(n)?;
    Ok((0..n)
        .map(|_| {
            if rng.random_bool(0.5) {
                Basis::Diagonal
            } else {
                Basis::Rectilinear
            }
        })
        .collect())
}

// Rejected before any entropy is drawn.
fn check_length(n: usize) -> Result<(), ProtocolError> {
    if n == 0 {
        return Err(ProtocolError::InvalidLength(0));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn zero_length_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(generate_bits(&mut rng, 0), Err(ProtocolError::InvalidLength(0)));
        assert_eq!(generate_bases(&mut rng, 0), Err(ProtocolError::InvalidLength(0)));
    }

    #[test]
    fn produces_requested_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(generate_bits(&mut rng, 64).unwrap().len(), 64);
        assert_eq!(generate_bases(&mut rng, 64).unwrap().len(), 64);
    }

    #[test]
    fn bits_are_roughly_balanced() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let bits = generate_bits(&mut rng, 10_000).unwrap();
        let ones = bits.iter().filter(|&&b| b).count();

        // 5 sigma around the binomial mean
        assert!((4750..=5250).contains(&ones), "ones = {ones}");
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(generate_bases(&mut a, 32).unwrap(), generate_bases(&mut b, 32).unwrap());
    }
}
