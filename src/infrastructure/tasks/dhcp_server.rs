//! DHCP Server Task
//!
//! Leases addresses on the setup access point network.

use core::net::Ipv4Addr;

use embassy_net::{
    Ipv4Address,
    Stack,
    udp::{PacketMetadata, UdpSocket},
};
#[cfg(feature = "log")]
use esp_println::println;
use web2wire_core::net::dhcp::{
    CLIENT_PORT,
    LeasePool,
    MAX_REPLY_LEN,
    SERVER_PORT,
    parse_request,
};

/// DHCP server task
///
/// Listens for discover/request messages and answers with offers/acks.
/// Addresses are derived from the client MAC, nothing is remembered.
#[embassy_executor::task]
pub async fn dhcp_server_task(stack: Stack<'static>, server_address: Ipv4Addr) {
    #[cfg(feature = "log")]
    println!("dhcp_server: starting on port {}", SERVER_PORT);

    let mut rx_meta = [PacketMetadata::EMPTY; 8];
    let mut rx_buffer = [0u8; 1024];
    let mut tx_meta = [PacketMetadata::EMPTY; 8];
    let mut tx_buffer = [0u8; 1024];

    let mut socket = UdpSocket::new(
        stack,
        &mut rx_meta,
        &mut rx_buffer,
        &mut tx_meta,
        &mut tx_buffer,
    );

    if let Err(_e) = socket.bind(SERVER_PORT) {
        #[cfg(feature = "log")]
        println!("dhcp_server: failed to bind port {}: {:?}", SERVER_PORT, _e);
        return;
    }

    let pool = LeasePool::for_server(server_address);
    let mut packet = [0u8; 576];
    let mut reply = [0u8; MAX_REPLY_LEN];

    loop {
        let len = match socket.recv_from(&mut packet).await {
            Ok((len, _remote)) => len,
            Err(_e) => {
                #[cfg(feature = "log")]
                println!("dhcp_server: recv error: {:?}", _e);
                continue;
            }
        };

        let Some(request) = parse_request(&packet[..len]) else {
            continue;
        };
        let Some(reply_type) = request.reply_type() else {
            #[cfg(feature = "log")]
            println!(
                "dhcp_server: ignoring message type {:?}",
                request.message_type
            );
            continue;
        };
        let Some(reply_len) = pool.build_reply(&request, reply_type, &mut reply) else {
            continue;
        };

        #[cfg(feature = "log")]
        println!(
            "dhcp_server: {:?} {} to {:02X?}",
            reply_type,
            pool.address_for(&request.client_mac),
            request.client_mac
        );

        let dest = (Ipv4Address::BROADCAST, CLIENT_PORT);
        if let Err(_e) = socket.send_to(&reply[..reply_len], dest).await {
            #[cfg(feature = "log")]
            println!("dhcp_server: send error: {:?}", _e);
        }
    }
}
