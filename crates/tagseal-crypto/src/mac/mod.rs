//! Keyed digest tag computation
//!
//! Two cooperating pieces:
//!
//! - the capacity resolver: decides what an output buffer can hold and
//!   records how much was written, based on the buffer's capability flags
//! - the [`engine`]: validates the request, drives the HMAC context
//!   through `rounds` passes over the input, and writes the tag out
//!
//! The context itself is created per call and owned by the engine for the
//! duration of that call only; ownership guarantees it is released exactly
//! once on every exit path.

pub mod digest;
pub mod engine;
pub mod error;

pub(crate) mod capacity;
pub(crate) mod context;

pub use digest::DigestAlgorithm;
pub use engine::{
    hmac_digest, hmac_digest_into, hmac_md4, hmac_md5, hmac_multi_digest, hmac_multi_digest_into,
    hmac_multi_sha512, hmac_ripemd160, hmac_sha1, hmac_sha224, hmac_sha256, hmac_sha384,
    hmac_sha512,
};
pub use error::MacError;
