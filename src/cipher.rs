//! Key-cycling stream cipher.
//!
//! Each character's Unicode scalar value is XORed with the current key bit,
//! cycling the key from its start whenever it is exhausted. XOR is its own
//! inverse, so ciphering and deciphering are the same operation applied with
//! the same key.

use crate::core::errors::ProtocolError;

/// Applies the key to the message, position by position.
///
/// Because the transform is a self-inverse involution, this function both
/// ciphers plaintext and deciphers ciphertext; [`decipher`] exists so call
/// sites read in protocol terms.
///
/// An empty key is an explicit failure rather than a silent identity
/// transform. An empty message passes through as `""`.
pub fn cipher(message: &str, key: &[bool]) -> Result<String, ProtocolError> {
    if key.is_empty() {
        return Err(ProtocolError::EmptyKey);
    }

    message
        .chars()
        .zip(key.iter().cycle())
        .map(|(ch, &bit)| {
            let combined = ch as u32 ^ u32::from(bit);
            char::try_from(combined).map_err(|_| ProtocolError::UnsupportedCodePoint(combined))
        })
        .collect()
}

/// The inverse of [`cipher`] — the identical operation, by involution.
pub fn decipher(ciphered: &str, key: &[bool]) -> Result<String, ProtocolError> {
    cipher(ciphered, key)
}
