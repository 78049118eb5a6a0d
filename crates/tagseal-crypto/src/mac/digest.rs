//! Digest algorithm descriptors

use std::fmt;

/// A digest algorithm usable as the hash underneath an HMAC tag.
///
/// Each variant has a fixed output size; that size is both the length of
/// every tag the engine produces with it and the capacity an output buffer
/// must provide. MD4, MD5, and SHA-1 are kept for compatibility with
/// existing deployments and should not be chosen for new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    /// MD4 (16-byte output, legacy)
    Md4,
    /// MD5 (16-byte output, legacy)
    Md5,
    /// SHA-1 (20-byte output, legacy)
    Sha1,
    /// SHA-224 (28-byte output)
    Sha224,
    /// SHA-256 (32-byte output)
    Sha256,
    /// SHA-384 (48-byte output)
    Sha384,
    /// SHA-512 (64-byte output)
    Sha512,
    /// RIPEMD-160 (20-byte output)
    Ripemd160,
}

impl DigestAlgorithm {
    /// Every supported algorithm, for exhaustive iteration.
    pub const ALL: [Self; 8] = [
        Self::Md4,
        Self::Md5,
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Ripemd160,
    ];

    /// Fixed output size of this digest in bytes.
    pub fn output_size(self) -> usize {
        match self {
            Self::Md4 | Self::Md5 => 16,
            Self::Sha1 | Self::Ripemd160 => 20,
            Self::Sha224 => 28,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Canonical lowercase name, used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Md4 => "md4",
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Ripemd160 => "ripemd160",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
