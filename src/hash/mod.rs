//! Hash algorithms exposed by the crate.
//!
//! All variants share the Merkle–Damgård driver in [`engine`]:
//! - SHA-1: 32-bit words, 20-byte digest,
//! - SHA-256: 32-bit words, 32-byte digest,
//! - SHA-512: 64-bit words, 64-byte digest.
//!
//! Each variant is a zero-sized type implementing [`HashVariant`], so
//! generic constructions (HMAC) can be instantiated over any of them.

pub mod engine;
pub mod sha1;
pub mod sha256;
pub mod sha512;

pub use engine::{HashVariant, digest};

/// Re-exports of the convenience functions and variant types.
pub use sha1::core::{Sha1, sha1};
pub use sha256::core::{Sha256, sha256};
pub use sha512::core::{Sha512, sha512};
