//! Error types for tag computation

use thiserror::Error;

/// Errors from computing a keyed digest tag
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MacError {
    /// The requested round count is below the minimum of 1
    #[error("rounds must be at least 1, got {rounds}")]
    InvalidRounds {
        /// The round count that was requested
        rounds: u32,
    },

    /// The digest algorithm reports a non-positive output size
    #[error("digest {digest} reports invalid output size {size}")]
    InvalidDigestSize {
        /// Name of the digest algorithm
        digest: &'static str,
        /// The size it reported
        size: usize,
    },

    /// The input to authenticate is empty
    #[error("input is empty")]
    EmptyInput,

    /// The authentication key is empty
    #[error("key is empty")]
    EmptyKey,

    /// The output buffer lacks the writable capability
    #[error("output buffer is not writable")]
    NotWritable,

    /// The output buffer cannot hold the digest's full output
    #[error("output buffer too small: {available} bytes available, {required} required")]
    OutputTooSmall {
        /// Bytes the buffer can absorb
        available: usize,
        /// Bytes the digest produces
        required: usize,
    },

    /// Allocating an output buffer on the caller's behalf failed
    #[error("failed to allocate {requested} byte output buffer")]
    AllocationFailed {
        /// Number of bytes requested from the allocator
        requested: usize,
    },

    /// The underlying HMAC primitive reported failure
    #[error("hmac {operation} failed")]
    Primitive {
        /// Which primitive operation failed
        operation: &'static str,
    },

    /// Finalization produced a different byte count than the digest declares
    #[error("hmac produced {produced} bytes, digest {digest} expects {expected}")]
    LengthMismatch {
        /// Name of the digest algorithm
        digest: &'static str,
        /// Bytes the primitive produced
        produced: usize,
        /// Bytes the digest declares
        expected: usize,
    },
}

impl MacError {
    /// Returns true when the failure is a caller mistake (bad arguments,
    /// unusable buffer) rather than an internal one (allocation, primitive,
    /// consistency). Usage errors are deterministic; retrying without
    /// changing the request cannot succeed.
    pub fn is_usage_error(&self) -> bool {
        match self {
            Self::InvalidRounds { .. }
            | Self::InvalidDigestSize { .. }
            | Self::EmptyInput
            | Self::EmptyKey
            | Self::NotWritable
            | Self::OutputTooSmall { .. } => true,

            Self::AllocationFailed { .. }
            | Self::Primitive { .. }
            | Self::LengthMismatch { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_is_usage_error() {
        assert!(MacError::EmptyKey.is_usage_error());
    }

    #[test]
    fn too_small_is_usage_error() {
        let err = MacError::OutputTooSmall { available: 16, required: 32 };
        assert!(err.is_usage_error());
    }

    #[test]
    fn allocation_failure_is_not_usage_error() {
        let err = MacError::AllocationFailed { requested: 64 };
        assert!(!err.is_usage_error());
    }

    #[test]
    fn error_display() {
        let err = MacError::OutputTooSmall { available: 16, required: 32 };
        assert_eq!(err.to_string(), "output buffer too small: 16 bytes available, 32 required");

        let err = MacError::InvalidRounds { rounds: 0 };
        assert_eq!(err.to_string(), "rounds must be at least 1, got 0");
    }
}
