//! Per-call HMAC context
//!
//! One context is created per tag computation and never outlives it. The
//! engine owns the context exclusively; ownership moves into
//! [`MacContext::finalize`] on success and the value drops on any earlier
//! return, so release happens exactly once on every path.

use hmac::{Hmac, Mac};
use md4::Md4;
use md5::Md5;
use ripemd::Ripemd160;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

use super::{digest::DigestAlgorithm, error::MacError};

/// A running HMAC computation over one concrete digest algorithm.
pub(crate) enum MacContext {
    Md4(Hmac<Md4>),
    Md5(Hmac<Md5>),
    Sha1(Hmac<Sha1>),
    Sha224(Hmac<Sha224>),
    Sha256(Hmac<Sha256>),
    Sha384(Hmac<Sha384>),
    Sha512(Hmac<Sha512>),
    Ripemd160(Hmac<Ripemd160>),
}

fn init_keyed<M: Mac + hmac::digest::KeyInit>(
    digest: DigestAlgorithm,
    key: &[u8],
) -> Result<M, MacError> {
    <M as hmac::digest::KeyInit>::new_from_slice(key).map_err(|_| {
        tracing::error!(digest = digest.name(), key_len = key.len(), "hmac init rejected key");
        MacError::Primitive { operation: "init" }
    })
}

impl MacContext {
    /// Initialize a fresh context for `digest` keyed with `key`.
    pub(crate) fn init(digest: DigestAlgorithm, key: &[u8]) -> Result<Self, MacError> {
        Ok(match digest {
            DigestAlgorithm::Md4 => Self::Md4(init_keyed(digest, key)?),
            DigestAlgorithm::Md5 => Self::Md5(init_keyed(digest, key)?),
            DigestAlgorithm::Sha1 => Self::Sha1(init_keyed(digest, key)?),
            DigestAlgorithm::Sha224 => Self::Sha224(init_keyed(digest, key)?),
            DigestAlgorithm::Sha256 => Self::Sha256(init_keyed(digest, key)?),
            DigestAlgorithm::Sha384 => Self::Sha384(init_keyed(digest, key)?),
            DigestAlgorithm::Sha512 => Self::Sha512(init_keyed(digest, key)?),
            DigestAlgorithm::Ripemd160 => Self::Ripemd160(init_keyed(digest, key)?),
        })
    }

    /// Feed one pass of input into the running computation.
    pub(crate) fn update(&mut self, data: &[u8]) {
        match self {
            Self::Md4(mac) => mac.update(data),
            Self::Md5(mac) => mac.update(data),
            Self::Sha1(mac) => mac.update(data),
            Self::Sha224(mac) => mac.update(data),
            Self::Sha256(mac) => mac.update(data),
            Self::Sha384(mac) => mac.update(data),
            Self::Sha512(mac) => mac.update(data),
            Self::Ripemd160(mac) => mac.update(data),
        }
    }

    /// Consume the context and produce the tag bytes.
    pub(crate) fn finalize(self) -> Vec<u8> {
        match self {
            Self::Md4(mac) => mac.finalize().into_bytes().to_vec(),
            Self::Md5(mac) => mac.finalize().into_bytes().to_vec(),
            Self::Sha1(mac) => mac.finalize().into_bytes().to_vec(),
            Self::Sha224(mac) => mac.finalize().into_bytes().to_vec(),
            Self::Sha256(mac) => mac.finalize().into_bytes().to_vec(),
            Self::Sha384(mac) => mac.finalize().into_bytes().to_vec(),
            Self::Sha512(mac) => mac.finalize().into_bytes().to_vec(),
            Self::Ripemd160(mac) => mac.finalize().into_bytes().to_vec(),
        }
    }
}
