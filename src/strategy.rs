//! IPv4-in-IPv6 embedding strategies.
//!
//! Three historical conventions embed a 4-byte address inside a 16-byte
//! one:
//! - [`Mapped`]: `::ffff:a.b.c.d` — ten zero bytes, two `0xFF` bytes,
//!   then the IPv4 address.
//! - [`Compatible`]: `::a.b.c.d` — twelve zero bytes then the IPv4
//!   address (deprecated; `::` and `::1` are excluded from the
//!   classification).
//! - [`Derived`]: 6to4, `2002:ab:cd::` — the `2002` prefix, the IPv4
//!   address in bytes 2..6, then ten zero bytes.
//!
//! [`Mapped`]: EmbeddingStrategy::Mapped
//! [`Compatible`]: EmbeddingStrategy::Compatible
//! [`Derived`]: EmbeddingStrategy::Derived

use crate::error::{Error, Result};

/// Prefix for IPv4-mapped addresses (`::ffff:a.b.c.d`).
const MAPPED_PREFIX: [u8; 12] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xFF, 0xFF];

/// Prefix for IPv4-compatible addresses (`::a.b.c.d`).
const COMPATIBLE_PREFIX: [u8; 12] = [0; 12];

/// 6to4 addresses carry the `2002::/16` prefix with the embedded address
/// immediately after it.
const DERIVED_PREFIX: [u8; 2] = [0x20, 0x02];
const DERIVED_SUFFIX: [u8; 10] = [0; 10];

/// One of the three embedding conventions.
///
/// The set is closed: each variant answers the same three questions
/// (does this 16-byte value embed an IPv4 address, which 4 bytes are
/// embedded, and how does a 4-byte address pack into the 16-byte form).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmbeddingStrategy {
    Mapped,
    Compatible,
    Derived,
}

impl EmbeddingStrategy {
    /// Test whether `addr` embeds an IPv4 address under this convention.
    ///
    /// Always `false` for inputs that are not 16 bytes long.
    pub fn is_embedded(&self, addr: &[u8]) -> bool {
        if addr.len() != 16 {
            return false;
        }
        match self {
            Self::Mapped => addr[..12] == MAPPED_PREFIX,
            Self::Compatible => {
                // The unspecified and loopback addresses (:: and ::1)
                // are not IPv4-compatible.
                addr[..12] == COMPATIBLE_PREFIX
                    && addr[12..] != [0, 0, 0, 0]
                    && addr[12..] != [0, 0, 0, 1]
            }
            Self::Derived => addr[..2] == DERIVED_PREFIX && addr[6..] == DERIVED_SUFFIX,
        }
    }

    /// Extract the 4 embedded bytes from a 16-byte address.
    ///
    /// Extraction is structural: only the input length is validated, the
    /// prefix pattern is not. A 16-byte address that does not match the
    /// convention still yields the bytes at the convention's offsets.
    pub fn extract(&self, addr: &[u8]) -> Result<Vec<u8>> {
        if addr.len() != 16 {
            return Err(Error::Extraction { length: addr.len() });
        }
        let embedded = match self {
            Self::Mapped | Self::Compatible => &addr[12..16],
            Self::Derived => &addr[2..6],
        };
        Ok(embedded.to_vec())
    }

    /// Pack a 4-byte address into its 16-byte form under this convention.
    pub fn pack(&self, addr: &[u8]) -> Result<Vec<u8>> {
        if addr.len() != 4 {
            return Err(Error::Packing { length: addr.len() });
        }
        let mut bytes = Vec::with_capacity(16);
        match self {
            Self::Mapped => {
                bytes.extend_from_slice(&MAPPED_PREFIX);
                bytes.extend_from_slice(addr);
            }
            Self::Compatible => {
                bytes.extend_from_slice(&COMPATIBLE_PREFIX);
                bytes.extend_from_slice(addr);
            }
            Self::Derived => {
                bytes.extend_from_slice(&DERIVED_PREFIX);
                bytes.extend_from_slice(addr);
                bytes.extend_from_slice(&DERIVED_SUFFIX);
            }
        }
        Ok(bytes)
    }
}
