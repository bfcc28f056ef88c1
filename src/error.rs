//! Error types for binaddr.

use thiserror::Error;

/// Main error type for address operations.
///
/// Every operation in this crate fails fast: either the full result is
/// produced or one of these values is returned with no partial state left
/// behind. The one place an error is deliberately swallowed instead of
/// propagated is [`crate::network::in_range`], which treats an invalid
/// CIDR as "not in range".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// CIDR prefix length outside `0..=length * 8`.
    #[error("invalid CIDR {cidr} for a {length}-byte address")]
    InvalidCidr { cidr: u32, length: usize },

    /// Embedded-address extraction requires a 16-byte input.
    #[error("cannot extract an embedded address from {length} bytes, expected 16")]
    Extraction { length: usize },

    /// Embedded-address packing requires a 4-byte input.
    #[error("cannot pack {length} bytes into an IPv6 address, expected 4")]
    Packing { length: usize },

    /// Formatting and construction accept only 4- or 16-byte sequences.
    #[error("{length} bytes is not a valid address length, expected 4 or 16")]
    Format { length: usize },

    /// Presentation string did not parse as an IPv4 or IPv6 address.
    #[error("unrecognised IP address string: {input:?}")]
    Unparseable { input: String },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
