//! Message authentication codes.
//!
//! Currently provides HMAC (RFC 2104), generic over every hash variant in
//! [`crate::hash`].

pub mod hmac;

pub use hmac::{hmac, hmac_sha1, hmac_sha256, hmac_sha512};
