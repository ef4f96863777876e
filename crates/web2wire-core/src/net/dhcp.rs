//! Minimal DHCP server codec
//!
//! Stateless: a client always receives the same address, derived from its
//! MAC. The server advertises itself as router and DNS resolver so that
//! every lookup lands on the captive DNS responder.

use core::net::Ipv4Addr;

pub const SERVER_PORT: u16 = 67;
pub const CLIENT_PORT: u16 = 68;

const MAGIC_COOKIE: [u8; 4] = [99, 130, 83, 99];
/// BOOTP header plus magic cookie
const OPTIONS_OFFSET: usize = 240;
/// Largest reply this codec produces
pub const MAX_REPLY_LEN: usize = OPTIONS_OFFSET + 64;

const OPTION_PAD: u8 = 0;
const OPTION_SUBNET_MASK: u8 = 1;
const OPTION_ROUTER: u8 = 3;
const OPTION_DNS: u8 = 6;
const OPTION_LEASE_TIME: u8 = 51;
const OPTION_MESSAGE_TYPE: u8 = 53;
const OPTION_SERVER_ID: u8 = 54;
const OPTION_END: u8 = 255;

const BOOTREQUEST: u8 = 1;
const BOOTREPLY: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Discover,
    Offer,
    Request,
    Ack,
    Other(u8),
}

impl From<u8> for MessageType {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::Discover,
            2 => Self::Offer,
            3 => Self::Request,
            5 => Self::Ack,
            other => Self::Other(other),
        }
    }
}

impl From<MessageType> for u8 {
    fn from(value: MessageType) -> Self {
        match value {
            MessageType::Discover => 1,
            MessageType::Offer => 2,
            MessageType::Request => 3,
            MessageType::Ack => 5,
            MessageType::Other(other) => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DhcpRequest {
    pub xid: [u8; 4],
    pub client_mac: [u8; 6],
    pub message_type: MessageType,
}

impl DhcpRequest {
    /// Reply type for this request, `None` when it needs no answer
    pub fn reply_type(&self) -> Option<MessageType> {
        match self.message_type {
            MessageType::Discover => Some(MessageType::Offer),
            MessageType::Request => Some(MessageType::Ack),
            _ => None,
        }
    }
}

/// Parse a client message, `None` for anything that is not a valid request
pub fn parse_request(packet: &[u8]) -> Option<DhcpRequest> {
    if packet.len() < OPTIONS_OFFSET || packet[0] != BOOTREQUEST {
        return None;
    }
    if packet[236..OPTIONS_OFFSET] != MAGIC_COOKIE {
        return None;
    }

    let mut xid = [0u8; 4];
    xid.copy_from_slice(&packet[4..8]);
    let mut client_mac = [0u8; 6];
    client_mac.copy_from_slice(&packet[28..34]);

    let message_type = find_option(&packet[OPTIONS_OFFSET..], OPTION_MESSAGE_TYPE)
        .and_then(|data| data.first().copied())?
        .into();

    Some(DhcpRequest {
        xid,
        client_mac,
        message_type,
    })
}

/// Lease parameters of the access point network
#[derive(Debug, Clone, Copy)]
pub struct LeasePool {
    pub server: Ipv4Addr,
    pub netmask: Ipv4Addr,
    /// Host part of the first leased address
    pub first_host: u8,
    pub size: u8,
    pub lease_secs: u32,
}

impl LeasePool {
    /// Pool of 49 addresses starting at `.2` of the server's /24
    pub const fn for_server(server: Ipv4Addr) -> Self {
        Self {
            server,
            netmask: Ipv4Addr::new(255, 255, 255, 0),
            first_host: 2,
            size: 49,
            lease_secs: 3600,
        }
    }

    /// Address leased to `mac`
    pub fn address_for(&self, mac: &[u8; 6]) -> Ipv4Addr {
        let [a, b, c, _] = self.server.octets();
        let host = self.first_host + mac[5] % self.size.max(1);
        Ipv4Addr::new(a, b, c, host)
    }

    /// Write the reply to `request` into `buffer`, returning its length
    ///
    /// Returns `None` when the buffer is shorter than [`MAX_REPLY_LEN`].
    pub fn build_reply(
        &self,
        request: &DhcpRequest,
        reply_type: MessageType,
        buffer: &mut [u8],
    ) -> Option<usize> {
        let buffer = buffer.get_mut(..MAX_REPLY_LEN)?;
        buffer.fill(0);

        buffer[0] = BOOTREPLY;
        buffer[1] = 1; // ethernet
        buffer[2] = 6;
        buffer[4..8].copy_from_slice(&request.xid);
        buffer[10] = 0x80; // broadcast
        buffer[16..20].copy_from_slice(&self.address_for(&request.client_mac).octets());
        buffer[20..24].copy_from_slice(&self.server.octets());
        buffer[28..34].copy_from_slice(&request.client_mac);
        buffer[236..OPTIONS_OFFSET].copy_from_slice(&MAGIC_COOKIE);

        let server = self.server.octets();
        let mut options = OptionWriter {
            buffer,
            cursor: OPTIONS_OFFSET,
        };
        options.put(OPTION_MESSAGE_TYPE, &[reply_type.into()]);
        options.put(OPTION_SERVER_ID, &server);
        options.put(OPTION_LEASE_TIME, &self.lease_secs.to_be_bytes());
        options.put(OPTION_SUBNET_MASK, &self.netmask.octets());
        options.put(OPTION_ROUTER, &server);
        options.put(OPTION_DNS, &server);
        options.end();

        Some(options.cursor)
    }
}

struct OptionWriter<'a> {
    buffer: &'a mut [u8],
    cursor: usize,
}

impl OptionWriter<'_> {
    fn put(&mut self, code: u8, data: &[u8]) {
        let end = self.cursor + 2 + data.len();
        self.buffer[self.cursor] = code;
        self.buffer[self.cursor + 1] = data.len() as u8;
        self.buffer[self.cursor + 2..end].copy_from_slice(data);
        self.cursor = end;
    }

    fn end(&mut self) {
        self.buffer[self.cursor] = OPTION_END;
        self.cursor += 1;
    }
}

fn find_option(options: &[u8], code: u8) -> Option<&[u8]> {
    let mut i = 0;
    while let Some(&current) = options.get(i) {
        match current {
            OPTION_END => return None,
            OPTION_PAD => i += 1,
            _ => {
                let len = usize::from(*options.get(i + 1)?);
                let data = options.get(i + 2..i + 2 + len)?;
                if current == code {
                    return Some(data);
                }
                i += 2 + len;
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discover(mac_tail: u8) -> [u8; 300] {
        let mut packet = [0u8; 300];
        packet[0] = BOOTREQUEST;
        packet[4..8].copy_from_slice(&[1, 2, 3, 4]);
        packet[28..34].copy_from_slice(&[0xAA, 0xBB, 0xCC, 0xDD, 0xEE, mac_tail]);
        packet[236..240].copy_from_slice(&MAGIC_COOKIE);
        packet[240..244].copy_from_slice(&[OPTION_PAD, OPTION_MESSAGE_TYPE, 1, 1]);
        packet[244] = OPTION_END;
        packet
    }

    #[test]
    fn discover_is_answered_with_offer() {
        let request = parse_request(&discover(7)).unwrap();

        assert_eq!(request.message_type, MessageType::Discover);
        assert_eq!(request.reply_type(), Some(MessageType::Offer));
        assert_eq!(request.xid, [1, 2, 3, 4]);
    }

    #[test]
    fn reply_carries_address_and_dns() {
        let pool = LeasePool::for_server(Ipv4Addr::new(192, 168, 4, 1));
        let request = parse_request(&discover(100)).unwrap();
        let mut buffer = [0u8; 576];

        let len = pool
            .build_reply(&request, MessageType::Offer, &mut buffer)
            .unwrap();

        assert_eq!(buffer[0], BOOTREPLY);
        assert_eq!(&buffer[16..20], &[192, 168, 4, 4]);
        let options = &buffer[OPTIONS_OFFSET..len];
        assert_eq!(find_option(options, OPTION_MESSAGE_TYPE), Some(&[2u8][..]));
        assert_eq!(find_option(options, OPTION_DNS), Some(&[192u8, 168, 4, 1][..]));
    }

    #[test]
    fn short_packet_is_ignored() {
        assert_eq!(parse_request(&[1u8; 100]), None);
    }
}
