//! Integration tests for the captive portal DNS codec.

use core::net::Ipv4Addr;

use web2wire_core::net::dns::{
    ANSWER_TTL, DnsError, build_captive_response, parse_query,
};

const AP: Ipv4Addr = Ipv4Addr::new(192, 168, 4, 1);

/// Standard query for `name` with the given type, recursion desired
fn query(id: u16, name: &str, qtype: u16) -> Vec<u8> {
    let mut packet = Vec::new();
    packet.extend_from_slice(&id.to_be_bytes());
    packet.extend_from_slice(&0x0100u16.to_be_bytes());
    packet.extend_from_slice(&[0, 1, 0, 0, 0, 0, 0, 0]);
    for label in name.split('.') {
        packet.push(label.len() as u8);
        packet.extend_from_slice(label.as_bytes());
    }
    packet.push(0);
    packet.extend_from_slice(&qtype.to_be_bytes());
    packet.extend_from_slice(&1u16.to_be_bytes());
    packet
}

fn respond(packet: &[u8]) -> Vec<u8> {
    let question = parse_query(packet).unwrap();
    let mut buffer = [0u8; 512];
    let len = build_captive_response(&question, AP, &mut buffer).unwrap();
    buffer[..len].to_vec()
}

// -----------------------------------------------------------------------------
// Test 1: Address questions
// -----------------------------------------------------------------------------

#[test]
fn a_question_resolves_to_access_point() {
    let packet = query(0x1234, "connectivitycheck.gstatic.com", 1);
    let response = respond(&packet);

    assert_eq!(&response[..2], &[0x12, 0x34]);
    // QR, AA and RD set, no error
    assert_eq!(&response[2..4], &[0x85, 0x00]);
    assert_eq!(&response[4..8], &[0, 1, 0, 1]);
    assert_eq!(&response[12..packet.len()], &packet[12..]);

    let answer = &response[packet.len()..];
    assert_eq!(&answer[..2], &[0xC0, 0x0C]);
    assert_eq!(&answer[2..6], &[0, 1, 0, 1]);
    assert_eq!(&answer[6..10], &ANSWER_TTL.to_be_bytes());
    assert_eq!(&answer[10..12], &[0, 4]);
    assert_eq!(&answer[12..16], &AP.octets());
}

#[test]
fn any_question_gets_an_address() {
    let response = respond(&query(7, "example.org", 255));
    assert_eq!(&response[6..8], &[0, 1]);
}

#[test]
fn aaaa_question_gets_empty_answer() {
    let packet = query(7, "example.org", 28);
    let response = respond(&packet);

    assert_eq!(&response[6..8], &[0, 0]);
    assert_eq!(response.len(), packet.len());
}

// -----------------------------------------------------------------------------
// Test 2: Ignored packets
// -----------------------------------------------------------------------------

#[test]
fn responses_are_ignored() {
    let mut packet = query(1, "a.b", 1);
    packet[2] |= 0x80;
    assert_eq!(parse_query(&packet), Err(DnsError::NotAQuery));
}

#[test]
fn non_standard_opcode_is_ignored() {
    let mut packet = query(1, "a.b", 1);
    packet[2] |= 0x10;
    assert_eq!(parse_query(&packet), Err(DnsError::UnsupportedOpcode));
}

#[test]
fn truncated_question_is_ignored() {
    let packet = query(1, "example.org", 1);
    assert_eq!(parse_query(&packet[..packet.len() - 3]), Err(DnsError::Truncated));
    assert_eq!(parse_query(&packet[..5]), Err(DnsError::Truncated));
}

#[test]
fn compressed_question_name_is_rejected() {
    let mut packet = query(1, "a.b", 1);
    packet[12] = 0xC0;
    assert_eq!(parse_query(&packet), Err(DnsError::InvalidName));
}

#[test]
fn small_output_buffer_is_an_error() {
    let packet = query(1, "example.org", 1);
    let question = parse_query(&packet).unwrap();
    let mut buffer = [0u8; 20];

    assert_eq!(
        build_captive_response(&question, AP, &mut buffer),
        Err(DnsError::BufferTooSmall)
    );
}
