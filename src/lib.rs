//! binaddr - IPv4 and IPv6 addresses as fixed-length binary values.
//!
//! Addresses are 4- or 16-byte sequences with address-family-agnostic
//! operations built on top: CIDR mask generation, network and broadcast
//! derivation, range containment, canonical text formatting, and the
//! three historical conventions for embedding an IPv4 address inside an
//! IPv6 one (mapped, compatible, 6to4-derived).
//!
//! # Example
//!
//! ```
//! use binaddr::Ip;
//!
//! let ip: Ip = "::ffff:12.34.56.78".parse()?;
//! assert!(ip.is_mapped());
//! assert_eq!(ip.embedded_v4().unwrap().to_string(), "12.34.56.78");
//!
//! let host: Ip = "192.168.1.42".parse()?;
//! assert_eq!(host.network_ip(24)?.to_string(), "192.168.1.0");
//! assert_eq!(host.broadcast_ip(24)?.to_string(), "192.168.1.255");
//! # Ok::<(), binaddr::Error>(())
//! ```

pub mod error;
pub mod format;
pub mod mask;
pub mod models;
pub mod network;
pub mod strategy;

pub use error::{Error, Result};
pub use format::{CanonicalFormatter, ProtocolFormatter};
pub use models::Ip;
pub use strategy::EmbeddingStrategy;
