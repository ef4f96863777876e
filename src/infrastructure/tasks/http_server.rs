//! HTTP Server Tasks
//!
//! Serve the job API on the station network and the setup portal on the
//! access point, each with its own controller.

use embassy_net::Stack;
#[cfg(feature = "log")]
use esp_println::println;

use crate::{
    controllers::{job::JobHttpController, portal::PortalHttpController},
    infrastructure::config::HTTP,
    net::http::HttpServer,
};

const RX_BUFFER_SIZE: usize = 2048;
const TX_BUFFER_SIZE: usize = 2048;

#[embassy_executor::task]
pub async fn job_http_server_task(
    stack: Stack<'static>,
    handler: &'static JobHttpController,
) {
    let mut rx_buffer = [0u8; RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TX_BUFFER_SIZE];

    #[cfg(feature = "log")]
    println!("http_server: job API on port {}", HTTP.port);

    HttpServer::new(handler)
        .listen_and_serve(stack, HTTP.port, &mut rx_buffer, &mut tx_buffer)
        .await
}

#[embassy_executor::task]
pub async fn portal_http_server_task(
    stack: Stack<'static>,
    handler: &'static PortalHttpController,
) {
    let mut rx_buffer = [0u8; RX_BUFFER_SIZE];
    let mut tx_buffer = [0u8; TX_BUFFER_SIZE];

    #[cfg(feature = "log")]
    println!("http_server: setup portal on port {}", HTTP.port);

    HttpServer::new(handler)
        .listen_and_serve(stack, HTTP.port, &mut rx_buffer, &mut tx_buffer)
        .await
}
