//! Signed session cookie tokens.
//!
//! A token is `<session-id>.<signature>` where the signature is the
//! URL-safe base64 HMAC-SHA256 of the session id under the process secret.
//! The browser only ever sees tokens; a token that fails verification is
//! ignored and a fresh session is issued.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use mindcheck_core::error::{MindcheckError, Result};
use mindcheck_core::session::SessionId;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Signs and verifies session tokens with a fixed secret.
#[derive(Clone)]
pub struct SessionSigner {
    mac: HmacSha256,
}

impl SessionSigner {
    /// Creates a signer keyed with `secret`.
    pub fn new(secret: &[u8]) -> Result<Self> {
        let mac = HmacSha256::new_from_slice(secret)
            .map_err(|e| MindcheckError::Security(format!("Invalid key length: {}", e)))?;
        Ok(Self { mac })
    }

    fn signature(&self, payload: &str) -> HmacSha256 {
        let mut mac = self.mac.clone();
        mac.update(payload.as_bytes());
        mac
    }

    /// Produces the cookie token for `id`.
    pub fn sign(&self, id: &SessionId) -> String {
        let payload = id.to_string();
        let tag = self.signature(&payload).finalize().into_bytes();
        format!("{}.{}", payload, URL_SAFE_NO_PAD.encode(tag))
    }

    /// Verifies a cookie token and returns the session id it carries.
    ///
    /// # Errors
    ///
    /// Returns `MindcheckError::Security` if the token is malformed or the
    /// signature does not match.
    pub fn verify(&self, token: &str) -> Result<SessionId> {
        let (payload, encoded) = token
            .rsplit_once('.')
            .ok_or_else(|| MindcheckError::Security("session token has no signature".into()))?;

        let tag = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|e| MindcheckError::Security(format!("malformed session signature: {}", e)))?;

        self.signature(payload)
            .verify_slice(&tag)
            .map_err(|_| MindcheckError::Security("invalid session signature".into()))?;

        payload.parse()
    }
}

impl std::fmt::Debug for SessionSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionSigner { .. }")
    }
}
