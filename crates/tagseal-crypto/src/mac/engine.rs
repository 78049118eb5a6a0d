//! Multi-round HMAC engine
//!
//! One routine does the work: [`hmac_multi_digest_into`] validates the
//! request against a guaranteed destination buffer, drives the context
//! through `rounds` passes over the input, and writes the tag out.
//! [`hmac_multi_digest`] is the allocating wrapper for callers that supply
//! no buffer of their own. Everything else in this file is a thin binding
//! over those two.
//!
//! # Flow
//!
//! 1. **Validate**: rounds, digest size, input, key, then buffer
//!    writability and capacity — fail fast, first violation wins
//! 2. **Drive**: init context with key, feed input `rounds` times, finalize
//! 3. **Check**: produced length must equal the digest's declared size
//! 4. **Write**: copy tag into the buffer region, record the length
//!
//! No destination byte is written before step 4, so every failure leaves a
//! caller-supplied buffer byte-for-byte unchanged.

use tagseal_buffer::Buffer;

use super::{
    capacity::{record_written, usable_capacity},
    context::MacContext,
    digest::DigestAlgorithm,
    error::MacError,
};

/// Checks everything about a request that does not involve the output
/// buffer. Returns the digest's output size, which doubles as the required
/// buffer capacity.
fn validate_request(
    rounds: u32,
    digest: DigestAlgorithm,
    input: &[u8],
    key: &[u8],
) -> Result<usize, MacError> {
    if rounds < 1 {
        tracing::warn!(rounds, "rounds must be at least 1");
        return Err(MacError::InvalidRounds { rounds });
    }

    let required = digest.output_size();
    if required == 0 {
        tracing::warn!(digest = digest.name(), "digest reports zero output size");
        return Err(MacError::InvalidDigestSize { digest: digest.name(), size: required });
    }

    if input.is_empty() {
        tracing::warn!(digest = digest.name(), "input is empty");
        return Err(MacError::EmptyInput);
    }

    if key.is_empty() {
        tracing::warn!(digest = digest.name(), "key is empty");
        return Err(MacError::EmptyKey);
    }

    Ok(required)
}

/// Compute an HMAC tag over `input` fed `rounds` times, writing into
/// `output`.
///
/// Equivalent to the HMAC of `input` repeated `rounds` times, computed
/// incrementally. The destination must be writable and able to hold the
/// digest's full output: its allocated capacity when capacity-tracked,
/// otherwise its current logical length (callers supplying a fixed
/// untracked buffer must ensure that length already equals the digest's
/// output size). On success the tag occupies the first
/// [`DigestAlgorithm::output_size`] bytes of the region and, when the
/// buffer is length-tracked, its logical length is set to match.
///
/// # Errors
///
/// - [`MacError::InvalidRounds`] when `rounds` is 0
/// - [`MacError::EmptyInput`] / [`MacError::EmptyKey`] for empty arguments
/// - [`MacError::NotWritable`] / [`MacError::OutputTooSmall`] for an
///   unusable destination
/// - [`MacError::Primitive`] / [`MacError::LengthMismatch`] when the
///   underlying primitive misbehaves
///
/// On any error the destination is untouched.
pub fn hmac_multi_digest_into(
    rounds: u32,
    digest: DigestAlgorithm,
    input: &[u8],
    key: &[u8],
    output: &mut Buffer,
) -> Result<(), MacError> {
    let required = validate_request(rounds, digest, input, key)?;

    if !output.is_writable() {
        tracing::error!(digest = digest.name(), "output buffer is not writable");
        return Err(MacError::NotWritable);
    }

    let available = usable_capacity(output);
    if available < required {
        tracing::error!(available, required, digest = digest.name(), "output buffer too small");
        return Err(MacError::OutputTooSmall { available, required });
    }

    let mut ctx = MacContext::init(digest, key)?;
    for _ in 0..rounds {
        ctx.update(input);
    }
    let tag = ctx.finalize();

    if tag.len() != required {
        tracing::error!(
            produced = tag.len(),
            expected = required,
            digest = digest.name(),
            "hmac output length does not match digest output size"
        );
        return Err(MacError::LengthMismatch {
            digest: digest.name(),
            produced: tag.len(),
            expected: required,
        });
    }

    output.region_mut()[..required].copy_from_slice(&tag);
    record_written(output, required);

    Ok(())
}

/// Compute an HMAC tag over `input` fed `rounds` times, into a freshly
/// allocated buffer.
///
/// The buffer is sized exactly to the digest's output and returned with
/// its logical length set to that size. If the computation fails after
/// allocation, the buffer is dropped before the error propagates; nothing
/// leaks.
///
/// # Errors
///
/// [`MacError::AllocationFailed`] when the buffer cannot be allocated,
/// otherwise as [`hmac_multi_digest_into`].
pub fn hmac_multi_digest(
    rounds: u32,
    digest: DigestAlgorithm,
    input: &[u8],
    key: &[u8],
) -> Result<Buffer, MacError> {
    let required = digest.output_size();
    let mut output = Buffer::alloc(required).map_err(|_| {
        tracing::error!(requested = required, digest = digest.name(), "output allocation failed");
        MacError::AllocationFailed { requested: required }
    })?;

    hmac_multi_digest_into(rounds, digest, input, key, &mut output)?;

    Ok(output)
}

/// Single-round HMAC tag into a caller-supplied buffer.
///
/// # Errors
///
/// As [`hmac_multi_digest_into`].
pub fn hmac_digest_into(
    digest: DigestAlgorithm,
    input: &[u8],
    key: &[u8],
    output: &mut Buffer,
) -> Result<(), MacError> {
    hmac_multi_digest_into(1, digest, input, key, output)
}

/// Single-round HMAC tag into a freshly allocated buffer.
///
/// # Errors
///
/// As [`hmac_multi_digest`].
pub fn hmac_digest(
    digest: DigestAlgorithm,
    input: &[u8],
    key: &[u8],
) -> Result<Buffer, MacError> {
    hmac_multi_digest(1, digest, input, key)
}

/// HMAC-MD4 tag. Legacy digest, kept for compatibility.
///
/// # Errors
///
/// As [`hmac_digest`].
pub fn hmac_md4(input: &[u8], key: &[u8]) -> Result<Buffer, MacError> {
    hmac_digest(DigestAlgorithm::Md4, input, key)
}

/// HMAC-MD5 tag. Legacy digest, kept for compatibility.
///
/// # Errors
///
/// As [`hmac_digest`].
pub fn hmac_md5(input: &[u8], key: &[u8]) -> Result<Buffer, MacError> {
    hmac_digest(DigestAlgorithm::Md5, input, key)
}

/// HMAC-SHA1 tag. Legacy digest, kept for compatibility.
///
/// # Errors
///
/// As [`hmac_digest`].
pub fn hmac_sha1(input: &[u8], key: &[u8]) -> Result<Buffer, MacError> {
    hmac_digest(DigestAlgorithm::Sha1, input, key)
}

/// HMAC-SHA224 tag.
///
/// # Errors
///
/// As [`hmac_digest`].
pub fn hmac_sha224(input: &[u8], key: &[u8]) -> Result<Buffer, MacError> {
    hmac_digest(DigestAlgorithm::Sha224, input, key)
}

/// HMAC-SHA256 tag.
///
/// # Errors
///
/// As [`hmac_digest`].
pub fn hmac_sha256(input: &[u8], key: &[u8]) -> Result<Buffer, MacError> {
    hmac_digest(DigestAlgorithm::Sha256, input, key)
}

/// HMAC-SHA384 tag.
///
/// # Errors
///
/// As [`hmac_digest`].
pub fn hmac_sha384(input: &[u8], key: &[u8]) -> Result<Buffer, MacError> {
    hmac_digest(DigestAlgorithm::Sha384, input, key)
}

/// HMAC-SHA512 tag.
///
/// # Errors
///
/// As [`hmac_digest`].
pub fn hmac_sha512(input: &[u8], key: &[u8]) -> Result<Buffer, MacError> {
    hmac_digest(DigestAlgorithm::Sha512, input, key)
}

/// HMAC-RIPEMD160 tag.
///
/// # Errors
///
/// As [`hmac_digest`].
pub fn hmac_ripemd160(input: &[u8], key: &[u8]) -> Result<Buffer, MacError> {
    hmac_digest(DigestAlgorithm::Ripemd160, input, key)
}

/// Multi-round HMAC-SHA512 tag.
///
/// # Errors
///
/// As [`hmac_multi_digest`].
pub fn hmac_multi_sha512(rounds: u32, input: &[u8], key: &[u8]) -> Result<Buffer, MacError> {
    hmac_multi_digest(rounds, DigestAlgorithm::Sha512, input, key)
}

#[cfg(test)]
mod tests {
    use tagseal_buffer::Capabilities;

    use super::*;

    #[test]
    fn zero_rounds_is_rejected() {
        let result = hmac_multi_digest(0, DigestAlgorithm::Sha256, b"input", b"key");
        assert_eq!(result.unwrap_err(), MacError::InvalidRounds { rounds: 0 });
    }

    #[test]
    fn empty_input_is_rejected() {
        let result = hmac_sha256(b"", b"key");
        assert_eq!(result.unwrap_err(), MacError::EmptyInput);
    }

    #[test]
    fn empty_key_is_rejected() {
        let result = hmac_sha256(b"input", b"");
        assert_eq!(result.unwrap_err(), MacError::EmptyKey);
    }

    #[test]
    fn rounds_is_checked_before_input() {
        // Fail-fast ordering: with two violations, the earlier check wins
        let result = hmac_multi_digest(0, DigestAlgorithm::Sha256, b"", b"");
        assert_eq!(result.unwrap_err(), MacError::InvalidRounds { rounds: 0 });
    }

    #[test]
    fn input_is_checked_before_key() {
        let result = hmac_sha256(b"", b"");
        assert_eq!(result.unwrap_err(), MacError::EmptyInput);
    }

    #[test]
    fn non_writable_output_is_rejected() {
        let mut output = Buffer::read_only(vec![0; 32]);
        let result = hmac_digest_into(DigestAlgorithm::Sha256, b"input", b"key", &mut output);
        assert_eq!(result.unwrap_err(), MacError::NotWritable);
    }

    #[test]
    fn undersized_output_is_rejected_and_unchanged() {
        let original = vec![0xAA; 31];
        let mut output = Buffer::from_vec(original.clone());
        let result = hmac_digest_into(DigestAlgorithm::Sha256, b"input", b"key", &mut output);
        assert_eq!(result.unwrap_err(), MacError::OutputTooSmall { available: 31, required: 32 });
        assert_eq!(output.bytes(), original.as_slice());
    }

    #[test]
    fn allocating_path_sizes_buffer_to_digest() {
        for digest in DigestAlgorithm::ALL {
            let tag = hmac_digest(digest, b"input", b"key").unwrap();
            assert_eq!(tag.len(), digest.output_size(), "wrong length for {digest}");
            assert_eq!(tag.capacity(), digest.output_size());
        }
    }

    #[test]
    fn into_path_matches_allocating_path() {
        let allocated = hmac_sha256(b"input", b"key").unwrap();

        let mut supplied = Buffer::fixed(32);
        hmac_digest_into(DigestAlgorithm::Sha256, b"input", b"key", &mut supplied).unwrap();

        assert_eq!(allocated.bytes(), &supplied.region()[..32]);
    }

    #[test]
    fn multi_round_equals_repeated_input() {
        let repeated = b"abc".repeat(3);
        let multi = hmac_multi_digest(3, DigestAlgorithm::Sha256, b"abc", b"secret").unwrap();
        let single = hmac_digest(DigestAlgorithm::Sha256, &repeated, b"secret").unwrap();
        assert_eq!(multi.bytes(), single.bytes());
    }

    #[test]
    fn single_round_binding_matches_generic_path() {
        for digest in DigestAlgorithm::ALL {
            let generic = hmac_multi_digest(1, digest, b"input", b"key").unwrap();
            let bound = match digest {
                DigestAlgorithm::Md4 => hmac_md4(b"input", b"key"),
                DigestAlgorithm::Md5 => hmac_md5(b"input", b"key"),
                DigestAlgorithm::Sha1 => hmac_sha1(b"input", b"key"),
                DigestAlgorithm::Sha224 => hmac_sha224(b"input", b"key"),
                DigestAlgorithm::Sha256 => hmac_sha256(b"input", b"key"),
                DigestAlgorithm::Sha384 => hmac_sha384(b"input", b"key"),
                DigestAlgorithm::Sha512 => hmac_sha512(b"input", b"key"),
                DigestAlgorithm::Ripemd160 => hmac_ripemd160(b"input", b"key"),
            }
            .unwrap();
            assert_eq!(generic.bytes(), bound.bytes(), "binding diverges for {digest}");
        }
    }

    #[test]
    fn multi_sha512_binding_matches_generic_path() {
        let generic = hmac_multi_digest(4, DigestAlgorithm::Sha512, b"input", b"key").unwrap();
        let bound = hmac_multi_sha512(4, b"input", b"key").unwrap();
        assert_eq!(generic.bytes(), bound.bytes());
    }

    #[test]
    fn length_is_recorded_only_when_tracked() {
        // Length-tracked: logical length becomes the tag size
        let mut tracked = Buffer::alloc(32).unwrap();
        hmac_digest_into(DigestAlgorithm::Sha256, b"input", b"key", &mut tracked).unwrap();
        assert_eq!(tracked.len(), 32);

        // Capacity-tracked but not length-tracked: length metadata untouched
        let caps = Capabilities { writable: true, capacity_tracked: true, length_tracked: false };
        let mut untracked = Buffer::alloc(32).unwrap().with_capabilities(caps);
        hmac_digest_into(DigestAlgorithm::Sha256, b"input", b"key", &mut untracked).unwrap();
        assert_eq!(untracked.len(), 0);
        assert_eq!(untracked.region(), tracked.bytes());
    }

    #[test]
    fn oversized_tracked_buffer_is_accepted() {
        let mut output = Buffer::alloc(64).unwrap();
        hmac_digest_into(DigestAlgorithm::Sha256, b"input", b"key", &mut output).unwrap();
        assert_eq!(output.len(), 32);
        assert_eq!(output.bytes(), hmac_sha256(b"input", b"key").unwrap().bytes());
    }

    #[test]
    fn determinism() {
        let first = hmac_multi_digest(2, DigestAlgorithm::Sha384, b"input", b"key").unwrap();
        let second = hmac_multi_digest(2, DigestAlgorithm::Sha384, b"input", b"key").unwrap();
        assert_eq!(first.bytes(), second.bytes());
    }

    #[test]
    fn different_rounds_produce_different_tags() {
        let one = hmac_multi_digest(1, DigestAlgorithm::Sha256, b"input", b"key").unwrap();
        let two = hmac_multi_digest(2, DigestAlgorithm::Sha256, b"input", b"key").unwrap();
        assert_ne!(one.bytes(), two.bytes());
    }
}
