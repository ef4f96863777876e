//! Captive portal DNS codec
//!
//! Every `A` (or `ANY`) question is answered with the access point
//! address, so any hostname a client looks up leads to the setup page.
//! Other question types get an empty, successful answer.

use core::net::Ipv4Addr;

pub const DNS_PORT: u16 = 53;
/// TTL of captive answers, in seconds
pub const ANSWER_TTL: u32 = 60;

const HEADER_LEN: usize = 12;
const MAX_NAME_LEN: usize = 255;
const ANSWER_LEN: usize = 16;

const TYPE_A: u16 = 1;
const TYPE_ANY: u16 = 255;
const CLASS_IN: u16 = 1;
const CLASS_ANY: u16 = 255;

const FLAG_QR: u16 = 0x8000;
const FLAG_AA: u16 = 0x0400;
const FLAG_RD: u16 = 0x0100;
const OPCODE_MASK: u16 = 0x7800;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DnsError {
    /// Packet ends before the question does
    Truncated,
    /// Packet is a response
    NotAQuery,
    /// Opcode other than a standard query
    UnsupportedOpcode,
    /// Packet carries no question
    NoQuestion,
    /// Compressed or oversized question name
    InvalidName,
    /// Output buffer cannot hold the response
    BufferTooSmall,
}

/// First question of a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnsQuestion<'a> {
    pub id: u16,
    pub recursion_desired: bool,
    /// Encoded name, including the terminating zero label
    pub name: &'a [u8],
    pub qtype: u16,
    pub qclass: u16,
}

impl DnsQuestion<'_> {
    /// Whether this question gets an address record
    pub fn wants_address(&self) -> bool {
        matches!(self.qtype, TYPE_A | TYPE_ANY)
            && matches!(self.qclass, CLASS_IN | CLASS_ANY)
    }
}

fn read_u16(packet: &[u8], at: usize) -> Result<u16, DnsError> {
    match packet.get(at..at + 2) {
        Some(&[high, low]) => Ok(u16::from_be_bytes([high, low])),
        _ => Err(DnsError::Truncated),
    }
}

/// Parse the first question of a standard query
pub fn parse_query(packet: &[u8]) -> Result<DnsQuestion<'_>, DnsError> {
    if packet.len() < HEADER_LEN {
        return Err(DnsError::Truncated);
    }

    let id = read_u16(packet, 0)?;
    let flags = read_u16(packet, 2)?;
    if flags & FLAG_QR != 0 {
        return Err(DnsError::NotAQuery);
    }
    if flags & OPCODE_MASK != 0 {
        return Err(DnsError::UnsupportedOpcode);
    }
    if read_u16(packet, 4)? == 0 {
        return Err(DnsError::NoQuestion);
    }

    let mut cursor = HEADER_LEN;
    loop {
        let len = usize::from(*packet.get(cursor).ok_or(DnsError::Truncated)?);
        if len & 0xC0 != 0 {
            return Err(DnsError::InvalidName);
        }
        cursor += 1 + len;
        if cursor - HEADER_LEN > MAX_NAME_LEN {
            return Err(DnsError::InvalidName);
        }
        if len == 0 {
            break;
        }
    }
    let name = packet
        .get(HEADER_LEN..cursor)
        .ok_or(DnsError::Truncated)?;

    Ok(DnsQuestion {
        id,
        recursion_desired: flags & FLAG_RD != 0,
        name,
        qtype: read_u16(packet, cursor)?,
        qclass: read_u16(packet, cursor + 2)?,
    })
}

/// Write the captive answer to `question` into `buffer`
///
/// Returns the response length.
pub fn build_captive_response(
    question: &DnsQuestion<'_>,
    address: Ipv4Addr,
    buffer: &mut [u8],
) -> Result<usize, DnsError> {
    let answers = u16::from(question.wants_address());
    let question_len = question.name.len() + 4;
    let total = HEADER_LEN
        + question_len
        + usize::from(answers) * ANSWER_LEN;
    let out = buffer.get_mut(..total).ok_or(DnsError::BufferTooSmall)?;

    let mut flags = FLAG_QR | FLAG_AA;
    if question.recursion_desired {
        flags |= FLAG_RD;
    }

    out[0..2].copy_from_slice(&question.id.to_be_bytes());
    out[2..4].copy_from_slice(&flags.to_be_bytes());
    out[4..6].copy_from_slice(&1u16.to_be_bytes());
    out[6..8].copy_from_slice(&answers.to_be_bytes());
    out[8..HEADER_LEN].fill(0);

    let mut cursor = HEADER_LEN;
    out[cursor..cursor + question.name.len()].copy_from_slice(question.name);
    cursor += question.name.len();
    out[cursor..cursor + 2].copy_from_slice(&question.qtype.to_be_bytes());
    out[cursor + 2..cursor + 4].copy_from_slice(&question.qclass.to_be_bytes());
    cursor += 4;

    if answers > 0 {
        // name is a pointer to the question
        out[cursor..cursor + 2].copy_from_slice(&0xC00Cu16.to_be_bytes());
        out[cursor + 2..cursor + 4].copy_from_slice(&TYPE_A.to_be_bytes());
        out[cursor + 4..cursor + 6].copy_from_slice(&CLASS_IN.to_be_bytes());
        out[cursor + 6..cursor + 10].copy_from_slice(&ANSWER_TTL.to_be_bytes());
        out[cursor + 10..cursor + 12].copy_from_slice(&4u16.to_be_bytes());
        out[cursor + 12..cursor + 16].copy_from_slice(&address.octets());
        cursor += ANSWER_LEN;
    }

    Ok(cursor)
}
