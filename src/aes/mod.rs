//! AES-256 and the two modes the envelope protocol builds on it: CTR (to
//! wrap each recipient's copy of the shared secret) and GCM (to authenticate
//! and encrypt the envelope body).
//!
//! The block cipher itself is bit-sliced: every byte of state and key is
//! decomposed into its eight constituent bits and the S-box is evaluated as
//! a Boolean circuit over GF(2^8), rather than via a lookup table. This
//! keeps the cipher free of secret-dependent memory accesses.

mod block;
mod ctr;
mod gcm;

pub(crate) use block::{decrypt_block, encrypt_block};
pub(crate) use ctr::ctr_crypt;
pub(crate) use gcm::{gcm_decrypt, gcm_encrypt};
