//! Integration tests for binaddr
//!
//! These tests verify the complete workflow over the public surface:
//! parse, derive, classify, format, and serialize address values.

use binaddr::{CanonicalFormatter, EmbeddingStrategy, Error, Ip, ProtocolFormatter};

#[test]
fn test_v4_subnet_workflow() {
    let host: Ip = "192.168.1.42".parse().expect("Failed to parse host");
    let gateway: Ip = "192.168.1.1".parse().expect("Failed to parse gateway");
    let outside: Ip = "192.168.2.1".parse().expect("Failed to parse outsider");

    let network = host.network_ip(24).expect("Failed to derive network");
    let broadcast = host.broadcast_ip(24).expect("Failed to derive broadcast");

    assert_eq!(network.to_string(), "192.168.1.0");
    assert_eq!(broadcast.to_string(), "192.168.1.255");

    assert!(host.in_range(&gateway, 24));
    assert!(host.in_range(&network, 24));
    assert!(!host.in_range(&outside, 24));
    assert!(host.in_range(&outside, 16));

    // An out-of-bounds CIDR is "not in range", never a panic or error.
    assert!(!host.in_range(&gateway, 999));
}

#[test]
fn test_v6_subnet_workflow() {
    let host: Ip = "2001:db8:85a3::8a2e:370:7334"
        .parse()
        .expect("Failed to parse host");

    let network = host.network_ip(48).expect("Failed to derive network");
    assert_eq!(network.to_string(), "2001:db8:85a3::");

    let broadcast = host.broadcast_ip(48).expect("Failed to derive broadcast");
    assert_eq!(
        broadcast.to_string(),
        "2001:db8:85a3:ffff:ffff:ffff:ffff:ffff"
    );

    assert!(host.in_range(&network, 48));
    assert!(network.in_range(&broadcast, 48));

    // Same bytes, same family required: the mapped form of an IPv4
    // address never ranges with the IPv4 value itself.
    let v4: Ip = "192.0.2.4".parse().unwrap();
    let mapped: Ip = "::ffff:192.0.2.4".parse().unwrap();
    assert!(!v4.in_range(&mapped, 0));
}

#[test]
fn test_embedding_workflow() {
    let v4: Ip = "192.0.2.4".parse().expect("Failed to parse v4");

    // Pack through each strategy and classify the results.
    let mapped = Ip::from_bytes(
        &EmbeddingStrategy::Mapped
            .pack(v4.as_bytes())
            .expect("Failed to pack mapped"),
    )
    .unwrap();
    assert_eq!(mapped.to_string(), "::ffff:c000:204");
    assert!(mapped.is_mapped());
    assert!(!mapped.is_derived());
    assert!(!mapped.is_compatible());
    assert_eq!(mapped.embedded_v4(), Some(v4));

    let derived = Ip::from_bytes(
        &EmbeddingStrategy::Derived
            .pack(v4.as_bytes())
            .expect("Failed to pack derived"),
    )
    .unwrap();
    assert_eq!(derived.to_string(), "2002:c000:204::");
    assert!(derived.is_derived());
    assert_eq!(derived.embedded_v4(), Some(v4));

    let compatible = Ip::from_bytes(
        &EmbeddingStrategy::Compatible
            .pack(v4.as_bytes())
            .expect("Failed to pack compatible"),
    )
    .unwrap();
    assert_eq!(compatible.to_string(), "::c000:204");
    assert!(compatible.is_compatible());
    assert_eq!(compatible.embedded_v4(), Some(v4));
}

#[test]
fn test_formatting_workflow() {
    let cases = [
        ("::", "0000:0000:0000:0000:0000:0000:0000:0000"),
        ("::1", "0000:0000:0000:0000:0000:0000:0000:0001"),
        ("2001:db8::1", "2001:0db8:0000:0000:0000:0000:0000:0001"),
        ("fe80::1", "fe80:0000:0000:0000:0000:0000:0000:0001"),
    ];
    for (canonical, expanded) in cases {
        let ip: Ip = canonical.parse().expect("Failed to parse case");
        assert_eq!(ip.to_string(), canonical);
        assert_eq!(ip.expanded(), expanded);

        // The canonical form parses back to the same value.
        let round: Ip = ip.to_string().parse().unwrap();
        assert_eq!(round, ip);
    }

    let ip: Ip = "12.34.56.78".parse().unwrap();
    assert_eq!(ip.format_with(&CanonicalFormatter).unwrap(), "12.34.56.78");
}

/// A caller-supplied formatter that never compresses zero runs.
struct ExpandedFormatter;

impl ProtocolFormatter for ExpandedFormatter {
    fn format(&self, addr: &[u8]) -> Result<String, Error> {
        binaddr::format::expand(addr)
    }
}

#[test]
fn test_formatter_substitution() {
    let ip: Ip = "2001:db8::1".parse().unwrap();
    assert_eq!(
        ip.format_with(&ExpandedFormatter).unwrap(),
        "2001:0db8:0000:0000:0000:0000:0000:0001"
    );
    assert_eq!(ip.format_with(&CanonicalFormatter).unwrap(), "2001:db8::1");
}

#[test]
fn test_error_kinds() {
    assert_eq!(
        Ip::from_bytes(&[0u8; 5]).unwrap_err(),
        Error::Format { length: 5 }
    );
    assert_eq!(
        "10.0.0.1".parse::<Ip>().unwrap().network_ip(33).unwrap_err(),
        Error::InvalidCidr { cidr: 33, length: 4 }
    );
    assert_eq!(
        EmbeddingStrategy::Mapped.extract(&[0u8; 4]).unwrap_err(),
        Error::Extraction { length: 4 }
    );
    assert_eq!(
        EmbeddingStrategy::Mapped.pack(&[0u8; 16]).unwrap_err(),
        Error::Packing { length: 16 }
    );
    assert!(matches!(
        "junk".parse::<Ip>().unwrap_err(),
        Error::Unparseable { .. }
    ));
}

#[test]
fn test_serde_round_trip() {
    let ips: Vec<Ip> = vec![
        "10.0.0.1".parse().unwrap(),
        "2001:db8::1".parse().unwrap(),
        "::ffff:192.0.2.4".parse().unwrap(),
    ];

    let json = serde_json::to_string(&ips).expect("Failed to serialize");
    assert_eq!(json, r#"["10.0.0.1","2001:db8::1","::ffff:c000:204"]"#);

    let parsed: Vec<Ip> = serde_json::from_str(&json).expect("Failed to deserialize");
    assert_eq!(parsed, ips);
}
