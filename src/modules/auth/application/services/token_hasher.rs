use sha2::{Digest, Sha256};

/// Tokens are only ever stored as their SHA-256 hex digest.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
