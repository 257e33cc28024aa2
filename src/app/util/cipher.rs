use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use rand::{rngs::OsRng, RngCore};

use crate::app::{errors::DefaultApiError, models::api_error::ApiError};

const NONCE_LEN: usize = 12;

/// AES-256-GCM sealing for free-text payment fields.
///
/// Sealed values are `base64(nonce || ciphertext)`, so every call to
/// [`PaymentCipher::encrypt`] yields a different string for the same input.
#[derive(Clone)]
pub struct PaymentCipher {
    cipher: Aes256Gcm,
}

impl PaymentCipher {
    pub fn from_base64_key(key: &str) -> Result<Self, String> {
        let bytes = base64::decode(key.trim())
            .map_err(|e| format!("payment cipher key is not valid base64: {}", e))?;

        let cipher = Aes256Gcm::new_from_slice(&bytes)
            .map_err(|_| format!("payment cipher key must be 32 bytes, got {}", bytes.len()))?;

        Ok(Self { cipher })
    }

    pub fn encrypt(&self, plaintext: &str) -> Result<String, ApiError> {
        let mut nonce_bytes = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce_bytes);

        let nonce = Nonce::from_slice(&nonce_bytes);
        let Ok(ciphertext) = self.cipher.encrypt(nonce, plaintext.as_bytes()) else {
            tracing::error!("payment field encryption failed");
            return Err(DefaultApiError::InternalServerError.value());
        };

        let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        sealed.extend_from_slice(&nonce_bytes);
        sealed.extend_from_slice(&ciphertext);

        Ok(base64::encode(sealed))
    }

    /// Returns `None` when `value` was not produced by this key.
    pub fn decrypt(&self, value: &str) -> Option<String> {
        let sealed = base64::decode(value).ok()?;
        if sealed.len() <= NONCE_LEN {
            return None;
        }

        let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_LEN);
        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .ok()?;

        String::from_utf8(plaintext).ok()
    }

    /// Decrypts a stored column, falling back to the stored text for rows
    /// written before encryption was enabled.
    pub fn open_or_keep(&self, value: &str) -> String {
        match self.decrypt(value) {
            Some(plaintext) => plaintext,
            None => {
                tracing::warn!("stored payment field could not be decrypted, returning as stored");
                value.to_string()
            }
        }
    }
}
