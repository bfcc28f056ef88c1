//! Network, broadcast, and range-containment operations.
//!
//! These operate on raw 4- or 16-byte sequences; the [`crate::models::Ip`]
//! value type wraps them with length-guaranteed inputs.

use crate::error::Result;
use crate::mask::generate_mask;

/// Get the network address for a given address and prefix length.
///
/// Bitwise AND of the address with the mask generated from the CIDR.
///
/// # Examples
/// ```
/// use binaddr::network::network_address;
/// let addr = [192, 168, 1, 42];
/// assert_eq!(network_address(&addr, 24).unwrap(), vec![192, 168, 1, 0]);
/// ```
pub fn network_address(addr: &[u8], cidr: u32) -> Result<Vec<u8>> {
    let mask = generate_mask(cidr, addr.len())?;
    Ok(addr.iter().zip(&mask).map(|(a, m)| a & m).collect())
}

/// Calculate the broadcast address for a given address and prefix length.
///
/// Bitwise OR of the address with the inverse of the mask generated from
/// the CIDR.
pub fn broadcast_address(addr: &[u8], cidr: u32) -> Result<Vec<u8>> {
    let mask = generate_mask(cidr, addr.len())?;
    Ok(addr.iter().zip(&mask).map(|(a, m)| a | !m).collect())
}

/// Check whether two addresses fall in the same CIDR block.
///
/// An invalid CIDR for either address is treated as "not in range" rather
/// than an error; so is a 4-byte/16-byte length mismatch, whose network
/// prefixes can never compare equal.
pub fn in_range(a: &[u8], b: &[u8], cidr: u32) -> bool {
    match (network_address(a, cidr), network_address(b, cidr)) {
        (Ok(net_a), Ok(net_b)) => net_a == net_b,
        (Err(e), _) | (_, Err(e)) => {
            log::debug!("in_range: {e}, treating as out of range");
            false
        }
    }
}
