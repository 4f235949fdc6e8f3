//! Wallet: account address plus signing key

use starkbal_crypto::{Felt, Signature, SigningKey};

use crate::SdkError;

/// Wallet for an account contract
///
/// On Starknet the account address is not derived from the key, so both
/// are supplied. Clone is intentionally not implemented to prevent
/// accidental key duplication.
pub struct Wallet {
    signing_key: SigningKey,
    address: Felt,
}

impl Wallet {
    /// Create a wallet from an account address and signing key
    pub fn new(address: Felt, signing_key: SigningKey) -> Self {
        Self {
            signing_key,
            address,
        }
    }

    /// Create a wallet from a hex-encoded private key
    ///
    /// Accepts both with and without "0x" prefix.
    pub fn from_private_key_hex(address: Felt, private_key: &str) -> Result<Self, SdkError> {
        let signing_key = SigningKey::from_hex(private_key)?;
        Ok(Self::new(address, signing_key))
    }

    /// Get the account address
    pub fn address(&self) -> &Felt {
        &self.address
    }

    /// Get the public key registered with the account
    pub fn public_key(&self) -> Felt {
        self.signing_key.public_key()
    }

    /// Sign a transaction hash
    pub fn sign_hash(&self, hash: &Felt) -> Result<Signature, SdkError> {
        Ok(self.signing_key.sign(hash)?)
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_KEY: &str = "0x0139fe4d6f02e666e86a6f58e65060f115cd3c185bd9e98bd829636931458f79";

    #[test]
    fn test_wallet_from_hex() {
        let address = Felt::from(0x1234u64);
        let wallet = Wallet::from_private_key_hex(address, TEST_KEY).unwrap();
        assert_eq!(wallet.address(), &address);
        assert_ne!(wallet.public_key(), Felt::ZERO);
    }

    #[test]
    fn test_wallet_invalid_key() {
        let result = Wallet::from_private_key_hex(Felt::ONE, "0xnothex");
        assert!(matches!(result, Err(SdkError::Crypto(_))));
    }

    #[test]
    fn test_wallet_sign_hash_verifies() {
        let wallet = Wallet::from_private_key_hex(Felt::ONE, TEST_KEY).unwrap();
        let hash = Felt::from(0xdeadbeefu64);
        let signature = wallet.sign_hash(&hash).unwrap();

        assert!(starkbal_crypto::verify(&wallet.public_key(), &hash, &signature).unwrap());
    }

    #[test]
    fn test_wallet_debug_hides_key() {
        let wallet = Wallet::from_private_key_hex(Felt::ONE, TEST_KEY).unwrap();
        let debug = format!("{:?}", wallet);
        assert!(debug.contains("Wallet"));
        assert!(debug.contains("address"));
        assert!(!debug.contains("signing_key"));
        assert!(!debug.contains("139fe4d6"));
    }
}
