//! IP address value type.
//!
//! Provides [`Ip`], an immutable 4- or 16-byte address value, along with
//! the network, embedding, and formatting operations composed from the
//! crate's core modules.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::format::{self, ProtocolFormatter};
use crate::network;
use crate::strategy::EmbeddingStrategy;

/// An IPv4 or IPv6 address held as its binary sequence.
///
/// The two variants carry fixed arrays, so a value of this type always
/// has a valid address length. Every operation returns a new value;
/// nothing mutates in place.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub enum Ip {
    /// 4-byte IPv4 address.
    V4([u8; 4]),
    /// 16-byte IPv6 address.
    V6([u8; 16]),
}

impl Ip {
    /// Create an [`Ip`] from a binary sequence of exactly 4 or 16 bytes.
    ///
    /// # Examples
    /// ```
    /// use binaddr::Ip;
    /// let ip = Ip::from_bytes(&[192, 168, 1, 1]).unwrap();
    /// assert_eq!(ip.to_string(), "192.168.1.1");
    /// assert!(Ip::from_bytes(&[0; 5]).is_err());
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Ip> {
        match bytes.len() {
            4 => {
                let mut octets = [0u8; 4];
                octets.copy_from_slice(bytes);
                Ok(Ip::V4(octets))
            }
            16 => {
                let mut octets = [0u8; 16];
                octets.copy_from_slice(bytes);
                Ok(Ip::V6(octets))
            }
            length => Err(Error::Format { length }),
        }
    }

    /// The underlying binary sequence.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Ip::V4(octets) => octets,
            Ip::V6(octets) => octets,
        }
    }

    /// Length of the binary sequence: 4 or 16.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Protocol version: 4 or 6.
    pub fn version(&self) -> u8 {
        match self {
            Ip::V4(_) => 4,
            Ip::V6(_) => 6,
        }
    }

    /// Check the protocol version.
    pub fn is_version(&self, version: u8) -> bool {
        self.version() == version
    }

    pub fn is_version4(&self) -> bool {
        self.is_version(4)
    }

    pub fn is_version6(&self) -> bool {
        self.is_version(6)
    }

    /// Get the network address for this address under the given CIDR.
    ///
    /// # Examples
    /// ```
    /// use binaddr::Ip;
    /// let ip: Ip = "192.168.1.42".parse().unwrap();
    /// assert_eq!(ip.network_ip(24).unwrap().to_string(), "192.168.1.0");
    /// ```
    pub fn network_ip(&self, cidr: u32) -> Result<Ip> {
        Ip::from_bytes(&network::network_address(self.as_bytes(), cidr)?)
    }

    /// Get the broadcast address for this address under the given CIDR.
    pub fn broadcast_ip(&self, cidr: u32) -> Result<Ip> {
        Ip::from_bytes(&network::broadcast_address(self.as_bytes(), cidr)?)
    }

    /// Check whether this address and `other` fall in the same CIDR
    /// block. Invalid CIDRs and mixed address families are "not in
    /// range", never an error.
    pub fn in_range(&self, other: &Ip, cidr: u32) -> bool {
        network::in_range(self.as_bytes(), other.as_bytes(), cidr)
    }

    /// Is this an IPv4-mapped IPv6 address (`::ffff:a.b.c.d`)?
    pub fn is_mapped(&self) -> bool {
        EmbeddingStrategy::Mapped.is_embedded(self.as_bytes())
    }

    /// Is this a 6to4-derived IPv6 address (`2002:ab:cd::`)?
    pub fn is_derived(&self) -> bool {
        EmbeddingStrategy::Derived.is_embedded(self.as_bytes())
    }

    /// Is this an IPv4-compatible IPv6 address (`::a.b.c.d`)?
    pub fn is_compatible(&self) -> bool {
        EmbeddingStrategy::Compatible.is_embedded(self.as_bytes())
    }

    /// Does this address embed an IPv4 address under any of the three
    /// conventions?
    pub fn is_embedded(&self) -> bool {
        self.is_mapped() || self.is_derived() || self.is_compatible()
    }

    /// The embedded IPv4 address, if any convention matches.
    ///
    /// Probes Mapped, then Derived, then Compatible.
    pub fn embedded_v4(&self) -> Option<Ip> {
        const PROBES: [EmbeddingStrategy; 3] = [
            EmbeddingStrategy::Mapped,
            EmbeddingStrategy::Derived,
            EmbeddingStrategy::Compatible,
        ];
        for strategy in PROBES {
            if strategy.is_embedded(self.as_bytes()) {
                let embedded = strategy.extract(self.as_bytes()).ok()?;
                return Ip::from_bytes(&embedded).ok();
            }
        }
        None
    }

    /// Canonical presentation string: dotted decimal for IPv4,
    /// `::`-compressed lowercase hex for IPv6.
    pub fn to_canonical(&self) -> String {
        match self {
            Ip::V4(octets) => format::format_v4(octets),
            Ip::V6(octets) => format::format_v6(octets),
        }
    }

    /// Uncompressed presentation string: eight zero-padded hex groups
    /// for IPv6, dotted decimal for IPv4.
    pub fn expanded(&self) -> String {
        match self {
            Ip::V4(octets) => format::format_v4(octets),
            Ip::V6(octets) => format::expand_v6(octets),
        }
    }

    /// Render this address through a caller-supplied formatter.
    pub fn format_with<F: ProtocolFormatter>(&self, formatter: &F) -> Result<String> {
        formatter.format(self.as_bytes())
    }
}

impl FromStr for Ip {
    type Err = Error;

    /// Parse a presentation string, delegating to the platform parsers.
    fn from_str(s: &str) -> Result<Ip> {
        if let Ok(v4) = s.parse::<Ipv4Addr>() {
            return Ok(Ip::V4(v4.octets()));
        }
        if let Ok(v6) = s.parse::<Ipv6Addr>() {
            return Ok(Ip::V6(v6.octets()));
        }
        Err(Error::Unparseable {
            input: s.to_string(),
        })
    }
}

impl std::fmt::Display for Ip {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_canonical())
    }
}

impl From<Ipv4Addr> for Ip {
    fn from(addr: Ipv4Addr) -> Ip {
        Ip::V4(addr.octets())
    }
}

impl From<Ipv6Addr> for Ip {
    fn from(addr: Ipv6Addr) -> Ip {
        Ip::V6(addr.octets())
    }
}

impl From<IpAddr> for Ip {
    fn from(addr: IpAddr) -> Ip {
        match addr {
            IpAddr::V4(v4) => Ip::from(v4),
            IpAddr::V6(v6) => Ip::from(v6),
        }
    }
}

impl From<Ip> for IpAddr {
    fn from(ip: Ip) -> IpAddr {
        match ip {
            Ip::V4(octets) => IpAddr::V4(Ipv4Addr::from(octets)),
            Ip::V6(octets) => IpAddr::V6(Ipv6Addr::from(octets)),
        }
    }
}

impl Serialize for Ip {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_canonical())
    }
}

impl<'de> Deserialize<'de> for Ip {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Ip, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
