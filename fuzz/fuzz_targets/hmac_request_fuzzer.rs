//! Fuzz target for multi-round HMAC tag computation
//!
//! Drives the engine with adversarial request shapes.
//!
//! # Strategy
//!
//! - Arbitrary round counts including the invalid 0
//! - Empty, small, and large inputs and keys
//! - Every supported digest algorithm
//! - Output buffers that are absent, exactly sized, undersized, oversized,
//!   read-only, or stripped of length tracking
//!
//! # Invariants
//!
//! - The engine never panics
//! - Valid requests succeed; invalid ones fail with the matching error
//! - Identical requests produce identical tags
//! - A rejected caller-supplied buffer is byte-for-byte unchanged
//! - Allocated buffers always come back sized to the digest output

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tagseal_buffer::{Buffer, Capabilities};
use tagseal_crypto::{DigestAlgorithm, hmac_multi_digest, hmac_multi_digest_into};

#[derive(Debug, Clone, Copy, Arbitrary)]
enum DigestChoice {
    Md4,
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Ripemd160,
}

impl From<DigestChoice> for DigestAlgorithm {
    fn from(choice: DigestChoice) -> Self {
        match choice {
            DigestChoice::Md4 => Self::Md4,
            DigestChoice::Md5 => Self::Md5,
            DigestChoice::Sha1 => Self::Sha1,
            DigestChoice::Sha224 => Self::Sha224,
            DigestChoice::Sha256 => Self::Sha256,
            DigestChoice::Sha384 => Self::Sha384,
            DigestChoice::Sha512 => Self::Sha512,
            DigestChoice::Ripemd160 => Self::Ripemd160,
        }
    }
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum OutputShape {
    /// No caller buffer; engine allocates
    Absent,
    /// Fixed untracked buffer, exactly the digest output size
    Exact,
    /// Fixed untracked buffer, short by the given amount
    Undersized(u8),
    /// Capacity-tracked buffer larger than needed
    Oversized(u8),
    /// Buffer without the writable capability
    ReadOnly,
    /// Capacity-tracked buffer with length tracking stripped
    LengthUntracked,
}

#[derive(Debug, Clone, Arbitrary)]
struct RequestScenario {
    rounds: u8,
    digest: DigestChoice,
    input: Vec<u8>,
    key: Vec<u8>,
    output: OutputShape,
}

fuzz_target!(|scenario: RequestScenario| {
    let rounds = u32::from(scenario.rounds);
    let digest = DigestAlgorithm::from(scenario.digest);
    let required = digest.output_size();
    let valid_args = rounds >= 1 && !scenario.input.is_empty() && !scenario.key.is_empty();

    match scenario.output {
        OutputShape::Absent => {
            let result = hmac_multi_digest(rounds, digest, &scenario.input, &scenario.key);
            if valid_args {
                let tag = result.expect("valid absent-output request must succeed");
                assert_eq!(tag.len(), required);

                // Determinism
                let again = hmac_multi_digest(rounds, digest, &scenario.input, &scenario.key)
                    .expect("repeat of valid request must succeed");
                assert_eq!(tag.bytes(), again.bytes());
            } else {
                assert!(result.is_err());
            }
        },
        OutputShape::Exact => {
            let mut output = Buffer::fixed(required);
            let result =
                hmac_multi_digest_into(rounds, digest, &scenario.input, &scenario.key, &mut output);
            assert_eq!(result.is_ok(), valid_args);
        },
        OutputShape::Undersized(by) => {
            let shortfall = usize::from(by).clamp(1, required);
            let original = vec![0x5Au8; required - shortfall];
            let mut output = Buffer::from_vec(original.clone());
            let result =
                hmac_multi_digest_into(rounds, digest, &scenario.input, &scenario.key, &mut output);
            assert!(result.is_err());
            assert_eq!(output.bytes(), original.as_slice(), "rejected buffer was mutated");
        },
        OutputShape::Oversized(by) => {
            let mut output =
                Buffer::alloc(required + usize::from(by)).expect("fuzz allocation failed");
            let result =
                hmac_multi_digest_into(rounds, digest, &scenario.input, &scenario.key, &mut output);
            if valid_args {
                assert!(result.is_ok());
                assert_eq!(output.len(), required);
            } else {
                assert!(result.is_err());
                assert_eq!(output.len(), 0);
            }
        },
        OutputShape::ReadOnly => {
            let mut output = Buffer::read_only(vec![0; required]);
            let result =
                hmac_multi_digest_into(rounds, digest, &scenario.input, &scenario.key, &mut output);
            assert!(result.is_err());
        },
        OutputShape::LengthUntracked => {
            let caps =
                Capabilities { writable: true, capacity_tracked: true, length_tracked: false };
            let mut output =
                Buffer::alloc(required).expect("fuzz allocation failed").with_capabilities(caps);
            let result =
                hmac_multi_digest_into(rounds, digest, &scenario.input, &scenario.key, &mut output);
            assert_eq!(result.is_ok(), valid_args);
            assert_eq!(output.len(), 0, "length metadata of untracked buffer was touched");
        },
    }
});
