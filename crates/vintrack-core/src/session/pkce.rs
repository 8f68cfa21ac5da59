//! PKCE verifier/challenge pair (RFC 7636, S256 method).

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// A code verifier and its S256 challenge.
#[derive(Clone, PartialEq, Eq)]
pub struct PkcePair {
    /// Secret sent with the token exchange
    pub verifier: String,
    /// `base64url(sha256(verifier))`, sent with the authorize request
    pub challenge: String,
}

impl PkcePair {
    /// Generate a fresh pair from 32 random bytes.
    pub fn generate() -> Self {
        let mut bytes = [0u8; 32];
        rand::rng().fill_bytes(&mut bytes);
        Self::from_verifier(URL_SAFE_NO_PAD.encode(bytes))
    }

    /// Derive the challenge for an existing verifier
    pub fn from_verifier(verifier: String) -> Self {
        let digest = Sha256::digest(verifier.as_bytes());
        let challenge = URL_SAFE_NO_PAD.encode(digest);
        Self {
            verifier,
            challenge,
        }
    }
}

impl std::fmt::Debug for PkcePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PkcePair")
            .field("verifier", &"<redacted>")
            .field("challenge", &self.challenge)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_url_safe(s: &str) -> bool {
        s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    #[test]
    fn test_generated_pair_shape() {
        let pair = PkcePair::generate();
        // 32 bytes -> 43 base64url chars without padding
        assert_eq!(pair.verifier.len(), 43);
        assert_eq!(pair.challenge.len(), 43);
        assert!(is_url_safe(&pair.verifier));
        assert!(is_url_safe(&pair.challenge));
        assert_ne!(pair.verifier, pair.challenge);
    }

    #[test]
    fn test_challenge_is_deterministic() {
        let a = PkcePair::from_verifier("same-verifier".to_string());
        let b = PkcePair::from_verifier("same-verifier".to_string());
        assert_eq!(a, b);
    }

    #[test]
    fn test_pairs_are_unique() {
        assert_ne!(PkcePair::generate().verifier, PkcePair::generate().verifier);
    }
}
