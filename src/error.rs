//! Error taxonomy for the BDAP envelope protocol.
//!
//! Every fallible operation in this crate funnels into a single
//! [`EnvelopeError`] enum. Internal helpers recover locally (zeroing and
//! unlocking whatever secure buffers are live) and then surface the first
//! error encountered; cleanup never overrides the original error kind.

use thiserror::Error;

/// Error kinds produced by envelope encryption and decryption.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeError {
    /// Converting a recipient's Ed25519 public key to its X25519 form failed
    /// (small-order point, invalid curve encoding, or not in the main subgroup).
    #[error("failed to convert an Ed25519 public key to X25519")]
    Ed25519ToX25519Failed,

    /// Deriving an X25519 public key from a private scalar failed.
    #[error("failed to derive an X25519 public key")]
    X25519PublicDerivationFailed,

    /// The X25519 Diffie-Hellman computation was rejected (small-order peer key).
    #[error("X25519 Diffie-Hellman exchange failed")]
    X25519DhFailed,

    /// Deriving the per-recipient wrap key/IV via SHAKE-256 failed.
    #[error("failed to derive the per-recipient key and IV")]
    KeyIvDerivationFailed,

    /// Deriving the bulk key/nonce via SHAKE-256 failed.
    #[error("failed to derive the bulk key and nonce")]
    KeyNonceDerivationFailed,

    /// AES-256-CTR wrapping of the shared secret failed.
    #[error("failed to wrap the shared secret")]
    CtrEncryptFailed,

    /// AES-256-CTR unwrapping of the shared secret failed.
    #[error("failed to unwrap the shared secret")]
    CtrDecryptFailed,

    /// AES-256-GCM bulk encryption failed.
    #[error("failed to encrypt the envelope body")]
    GcmEncryptFailed,

    /// AES-256-GCM bulk decryption or tag verification failed.
    #[error("failed to decrypt the envelope body")]
    GcmDecryptFailed,

    /// No recipient slot's fingerprint matched the caller's Ed25519 public key.
    #[error("no recipient slot matches the provided key")]
    NoValidRecipient,

    /// Locking or unlocking a secure buffer in memory failed.
    #[error("failed to lock or unlock sensitive memory")]
    MemoryProtectionFailed,

    /// The ciphertext is structurally malformed (bad length, truncated slot
    /// table, or size formula mismatch).
    #[error("ciphertext is malformed")]
    MalformedCiphertext,

    /// Catch-all for conditions not covered by a more specific kind.
    #[error("unknown envelope error")]
    UnknownError,
}

pub type Result<T> = core::result::Result<T, EnvelopeError>;
