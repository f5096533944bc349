//! Hash providers: built-in algorithms and the custom-function escape hatch.
//!
//! A hash function here maps a byte sequence to a lowercase hex string of
//! fixed width. The built-in set is a closed enumeration ([`HashAlgorithm`]);
//! [`Hasher`] wraps either a built-in or any caller-supplied function with the
//! same signature, and is what trees actually store.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest as _, Sha224, Sha256, Sha384, Sha512};

use crate::{Error, Result};

/// A digest: the lowercase hexadecimal encoding of a raw hash output.
///
/// Equality is exact string equality, and the hex text is the only externally
/// visible wire format — proofs and roots round-trip between processes as
/// these strings.
pub type Digest = String;

/// Built-in hash algorithms, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum HashAlgorithm {
    /// MD5 (128-bit). Broken for collision resistance; kept for
    /// interoperability only.
    Md5,
    /// SHA-1 (160-bit). Broken for collision resistance; kept for
    /// interoperability only.
    Sha1,
    /// SHA-224.
    Sha224,
    /// SHA-256, the default.
    #[default]
    Sha256,
    /// SHA-384.
    Sha384,
    /// SHA-512.
    Sha512,
    /// BLAKE3 (256-bit).
    Blake3,
}

impl HashAlgorithm {
    /// Hash `data` and return the lowercase hex digest.
    pub fn digest(&self, data: &[u8]) -> Digest {
        match self {
            HashAlgorithm::Md5 => hex::encode(Md5::digest(data)),
            HashAlgorithm::Sha1 => hex::encode(Sha1::digest(data)),
            HashAlgorithm::Sha224 => hex::encode(Sha224::digest(data)),
            HashAlgorithm::Sha256 => hex::encode(Sha256::digest(data)),
            HashAlgorithm::Sha384 => hex::encode(Sha384::digest(data)),
            HashAlgorithm::Sha512 => hex::encode(Sha512::digest(data)),
            HashAlgorithm::Blake3 => blake3::hash(data).to_hex().to_string(),
        }
    }

    /// Width in hex characters of the digests this algorithm produces.
    pub fn hex_len(&self) -> usize {
        match self {
            HashAlgorithm::Md5 => 32,
            HashAlgorithm::Sha1 => 40,
            HashAlgorithm::Sha224 => 56,
            HashAlgorithm::Sha256 | HashAlgorithm::Blake3 => 64,
            HashAlgorithm::Sha384 => 96,
            HashAlgorithm::Sha512 => 128,
        }
    }

    /// Canonical name accepted by [`FromStr`] and [`Hasher::from_name`].
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
            HashAlgorithm::Blake3 => "blake3",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "md5" => Ok(HashAlgorithm::Md5),
            // "sha" is the historical alias for SHA-1.
            "sha" | "sha1" => Ok(HashAlgorithm::Sha1),
            "sha224" => Ok(HashAlgorithm::Sha224),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha384" => Ok(HashAlgorithm::Sha384),
            "sha512" => Ok(HashAlgorithm::Sha512),
            "blake3" => Ok(HashAlgorithm::Blake3),
            other => Err(Error::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// The hash capability a tree is built with.
///
/// Either a built-in [`HashAlgorithm`] or an arbitrary caller-supplied
/// function from bytes to a fixed-width hex digest. Cloning is cheap (custom
/// functions are behind an `Arc`), and a `Hasher` is `Send + Sync`, so one
/// tree can serve provers and verifiers on multiple threads.
#[derive(Clone)]
pub enum Hasher {
    /// One of the built-in algorithms.
    Algorithm(HashAlgorithm),
    /// A caller-supplied hash function. Must be pure and deterministic and
    /// return a fixed-width lowercase hex string.
    Custom(Arc<dyn Fn(&[u8]) -> Digest + Send + Sync>),
}

impl Hasher {
    /// Wrap a custom hash function.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&[u8]) -> Digest + Send + Sync + 'static,
    {
        Hasher::Custom(Arc::new(f))
    }

    /// Resolve a built-in algorithm by its configured name.
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(Hasher::Algorithm(name.parse()?))
    }

    /// Hash `data` and return the hex digest.
    pub fn digest(&self, data: &[u8]) -> Digest {
        match self {
            Hasher::Algorithm(algorithm) => algorithm.digest(data),
            Hasher::Custom(f) => f(data),
        }
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Hasher::Algorithm(HashAlgorithm::default())
    }
}

impl From<HashAlgorithm> for Hasher {
    fn from(algorithm: HashAlgorithm) -> Self {
        Hasher::Algorithm(algorithm)
    }
}

impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hasher::Algorithm(algorithm) => f.debug_tuple("Algorithm").field(algorithm).finish(),
            Hasher::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
