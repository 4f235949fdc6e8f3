//! ECDSA signing and verification on the STARK curve

use starknet_crypto::{get_public_key, rfc6979_generate_k, sign, SignError};
use starknet_types_core::felt::Felt;
use zeroize::Zeroize;

use crate::CryptoError;

/// ECDSA signature (r, s)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// r component
    pub r: Felt,
    /// s component
    pub s: Felt,
}

impl Signature {
    /// Signature as the `[r, s]` array accounts expect
    pub fn to_vec(&self) -> Vec<Felt> {
        vec![self.r, self.s]
    }
}

/// STARK-curve private key
///
/// Clone is not implemented so the secret is never duplicated by accident.
pub struct SigningKey {
    secret: Felt,
}

impl SigningKey {
    /// Create a signing key from a felt
    pub fn from_secret(secret: Felt) -> Result<Self, CryptoError> {
        if secret == Felt::ZERO {
            return Err(CryptoError::InvalidPrivateKey("key is zero".to_string()));
        }
        Ok(Self { secret })
    }

    /// Create a signing key from a hex string, with or without "0x"
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        if hex.is_empty() || hex.len() > 64 {
            return Err(CryptoError::InvalidPrivateKey(format!(
                "expected 1 to 64 hex digits, got {}",
                hex.len()
            )));
        }

        let mut padded = format!("{:0>64}", hex);
        let decoded = hex::decode(&padded);
        padded.zeroize();
        let mut bytes = decoded.map_err(|e| CryptoError::InvalidPrivateKey(e.to_string()))?;

        let mut buf = [0u8; 32];
        buf.copy_from_slice(&bytes);
        bytes.zeroize();

        let secret = Felt::from_bytes_be(&buf);
        // from_bytes_be reduces modulo the field prime
        let in_range = secret.to_bytes_be() == buf;
        buf.zeroize();
        if !in_range {
            return Err(CryptoError::InvalidPrivateKey(
                "key is not a valid field element".to_string(),
            ));
        }

        Self::from_secret(secret)
    }

    /// Public key (x coordinate)
    pub fn public_key(&self) -> Felt {
        get_public_key(&self.secret)
    }

    /// Sign a message hash with an RFC 6979 deterministic nonce
    pub fn sign(&self, hash: &Felt) -> Result<Signature, CryptoError> {
        let mut seed: Option<Felt> = None;
        loop {
            let k = rfc6979_generate_k(hash, &self.secret, seed.as_ref());
            match sign(&self.secret, hash, &k) {
                Ok(signature) => {
                    return Ok(Signature {
                        r: signature.r,
                        s: signature.s,
                    })
                }
                Err(SignError::InvalidK) => {
                    seed = Some(seed.unwrap_or(Felt::ZERO) + Felt::ONE);
                }
                Err(e) => return Err(CryptoError::SigningFailed(format!("{:?}", e))),
            }
        }
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}

/// Verify a signature over `hash` against a public key
pub fn verify(public_key: &Felt, hash: &Felt, signature: &Signature) -> Result<bool, CryptoError> {
    starknet_crypto::verify(public_key, hash, &signature.r, &signature.s)
        .map_err(|e| CryptoError::InvalidSignature(format!("{:?}", e)))
}
