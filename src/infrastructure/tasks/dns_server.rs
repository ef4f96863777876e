//! Captive DNS Task
//!
//! Answers every name lookup on the setup network with the portal address,
//! so phones open the setup page on their own.

use core::net::Ipv4Addr;

use embassy_net::{
    Stack,
    udp::{PacketMetadata, UdpSocket},
};
#[cfg(feature = "log")]
use esp_println::println;
use web2wire_core::net::dns::{DNS_PORT, build_captive_response, parse_query};

const MAX_PACKET_LEN: usize = 512;

#[embassy_executor::task]
pub async fn dns_server_task(stack: Stack<'static>, portal_address: Ipv4Addr) {
    let mut rx_meta = [PacketMetadata::EMPTY; 4];
    let mut rx_buffer = [0u8; 1024];
    let mut tx_meta = [PacketMetadata::EMPTY; 4];
    let mut tx_buffer = [0u8; 1024];

    let mut socket = UdpSocket::new(
        stack,
        &mut rx_meta,
        &mut rx_buffer,
        &mut tx_meta,
        &mut tx_buffer,
    );

    if let Err(_e) = socket.bind(DNS_PORT) {
        #[cfg(feature = "log")]
        println!("dns_server: failed to bind port {}: {:?}", DNS_PORT, _e);
        return;
    }
    #[cfg(feature = "log")]
    println!("dns_server: answering with {}", portal_address);

    let mut query = [0u8; MAX_PACKET_LEN];
    let mut response = [0u8; MAX_PACKET_LEN];

    loop {
        let (len, remote) = match socket.recv_from(&mut query).await {
            Ok(received) => received,
            Err(_e) => {
                #[cfg(feature = "log")]
                println!("dns_server: recv error: {:?}", _e);
                continue;
            }
        };

        // Responses and malformed packets are dropped silently
        let Ok(question) = parse_query(&query[..len]) else {
            continue;
        };
        let response_len =
            match build_captive_response(&question, portal_address, &mut response) {
                Ok(response_len) => response_len,
                Err(_e) => {
                    #[cfg(feature = "log")]
                    println!("dns_server: cannot answer: {:?}", _e);
                    continue;
                }
            };

        if let Err(_e) = socket.send_to(&response[..response_len], remote.endpoint).await {
            #[cfg(feature = "log")]
            println!("dns_server: send error: {:?}", _e);
        }
    }
}
