//! Canonical address text formatting.
//!
//! Produces the canonical presentation form of a binary address: dotted
//! decimal for 4 bytes, lowercase colon-hex with zero-run compression for
//! 16 bytes. The compression follows the longest run of all-zero groups,
//! breaking ties towards the earliest run; a run of a single zero group
//! still compresses.

use std::net::Ipv4Addr;

use itertools::Itertools;

use crate::error::{Error, Result};

/// A substitutable presentation formatter.
///
/// The crate ships [`CanonicalFormatter`]; callers wanting different text
/// output pass their own implementation to
/// [`Ip::format_with`](crate::models::Ip::format_with) — there is no
/// process-wide formatter slot.
pub trait ProtocolFormatter {
    /// Render a 4- or 16-byte sequence as presentation text.
    fn format(&self, addr: &[u8]) -> Result<String>;
}

/// The default formatter: zero-run compression for 16-byte addresses,
/// dotted decimal for 4-byte ones.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalFormatter;

impl ProtocolFormatter for CanonicalFormatter {
    fn format(&self, addr: &[u8]) -> Result<String> {
        format(addr)
    }
}

/// Format a binary address in its canonical presentation form.
///
/// # Examples
/// ```
/// use binaddr::format::format;
/// assert_eq!(format(&[12, 34, 56, 78]).unwrap(), "12.34.56.78");
/// assert_eq!(format(&[0; 16]).unwrap(), "::");
/// ```
pub fn format(addr: &[u8]) -> Result<String> {
    match addr.len() {
        4 => Ok(format_v4(addr)),
        16 => Ok(format_v6(addr)),
        length => Err(Error::Format { length }),
    }
}

/// Format a binary address in its uncompressed presentation form: eight
/// zero-padded hex groups for 16 bytes, dotted decimal for 4 bytes.
pub fn expand(addr: &[u8]) -> Result<String> {
    match addr.len() {
        4 => Ok(format_v4(addr)),
        16 => Ok(expand_v6(addr)),
        length => Err(Error::Format { length }),
    }
}

/// Eight zero-padded hex groups, no compression.
pub(crate) fn expand_v6(addr: &[u8]) -> String {
    hex_groups(addr).iter().join(":")
}

/// Dotted decimal via the platform conversion primitive.
pub(crate) fn format_v4(addr: &[u8]) -> String {
    Ipv4Addr::new(addr[0], addr[1], addr[2], addr[3]).to_string()
}

/// Eight groups of four lowercase hex digits.
fn hex_groups(addr: &[u8]) -> Vec<String> {
    addr.chunks(2)
        .map(|pair| format!("{:02x}{:02x}", pair[0], pair[1]))
        .collect()
}

pub(crate) fn format_v6(addr: &[u8]) -> String {
    let groups = hex_groups(addr);

    // Running length of consecutive all-zero groups; the longest run
    // wins and the strict comparison keeps the earliest on a tie.
    let mut run = 0;
    let mut best_len = 0;
    let mut best_end = 0;
    for (i, group) in groups.iter().enumerate() {
        run = if group == "0000" { run + 1 } else { 0 };
        if run > best_len {
            best_len = run;
            best_end = i + 1;
        }
    }

    // Leading zeros are stripped from every group independently; an
    // all-zero group outside the compressed run renders as "0".
    let mut parts: Vec<&str> = groups
        .iter()
        .map(|group| {
            let stripped = group.trim_start_matches('0');
            if stripped.is_empty() {
                "0"
            } else {
                stripped
            }
        })
        .collect();

    // Replace the whole run (a single-group run included) with a
    // placeholder; joining then leaves 2 or more consecutive colons at
    // the compression point, collapsed to exactly "::" below.
    if best_len > 0 {
        parts.splice(best_end - best_len..best_end, [":"]);
    }
    let collapsed = collapse_colons(&parts.iter().join(":"));

    // The all-zero address collapses to a single placeholder; pad so it
    // renders "::", never ":".
    if collapsed.len() < 2 {
        format!("{collapsed}:")
    } else {
        collapsed
    }
}

/// Collapse every sequence of 2 or more colons into exactly two.
fn collapse_colons(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut colons = 0;
    for ch in s.chars() {
        if ch == ':' {
            colons += 1;
            if colons <= 2 {
                out.push(ch);
            }
        } else {
            colons = 0;
            out.push(ch);
        }
    }
    out
}
