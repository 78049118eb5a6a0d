//! Tagseal Keyed Digest Tags
//!
//! Computes HMAC authentication tags over an input, optionally fed into the
//! running computation multiple times ("multi-round"), across a runtime
//! choice of digest algorithm. The tag lands either in a caller-supplied
//! [`Buffer`] or in one allocated on the caller's behalf.
//!
//! ```text
//! DigestAlgorithm + key
//!         │
//!         ▼
//!    HMAC context ──── input × rounds ────▶ tag bytes
//!                                              │
//!                                              ▼
//!                          Buffer (caller-supplied or freshly allocated)
//! ```
//!
//! # Buffer Contract
//!
//! Output buffers carry capability flags that the engine honors strictly:
//!
//! - A buffer must be writable to be used as a destination at all.
//! - A capacity-tracked buffer is sized by its allocated capacity; an
//!   untracked buffer is sized by its current logical length, so callers
//!   supplying a fixed untracked buffer must ensure that length already
//!   equals the digest's output size.
//! - A length-tracked buffer has its logical length set to the tag size
//!   after a successful write; untracked length metadata is never touched.
//!
//! All validation happens before any byte of the destination is written, so
//! a failed call leaves a caller-supplied buffer byte-for-byte unchanged.
//!
//! # Rounds
//!
//! A tag computed with `rounds = k` equals the HMAC of the input
//! concatenated with itself `k` times, but is computed incrementally and
//! never materializes the concatenation.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod mac;

pub use mac::{
    DigestAlgorithm, MacError, hmac_digest, hmac_digest_into, hmac_md4, hmac_md5,
    hmac_multi_digest, hmac_multi_digest_into, hmac_multi_sha512, hmac_ripemd160, hmac_sha1,
    hmac_sha224, hmac_sha256, hmac_sha384, hmac_sha512,
};
pub use tagseal_buffer::{Buffer, BufferError, Capabilities};
