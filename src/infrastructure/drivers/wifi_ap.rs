use embassy_executor::Spawner;
use embassy_net::{Ipv4Cidr, Stack, StackResources, StaticConfigV4};
use embassy_time::{Duration, Timer};
#[cfg(feature = "log")]
use esp_println::println;
use esp_radio::wifi::{WifiController, WifiDevice};
use static_cell::make_static;

use super::wifi_radio::get_seed;
use crate::infrastructure::{
    config::WifiApConfig,
    tasks::{dhcp_server_task, dns_server_task, network_runner_task, wifi_ap_task},
};

const MAX_CONNECTIONS: usize = 6;

/// Bring up the setup access point with its DHCP and DNS servers
///
/// Uses a static IP configuration so the portal is always at the same
/// address. Any station mode left over from a failed join is stopped first.
pub async fn start_wifi_ap(
    spawner: Spawner,
    mut controller: WifiController<'static>,
    wifi_device: WifiDevice<'static>,
    config: &WifiApConfig,
) -> Stack<'static> {
    if matches!(controller.is_started(), Ok(true)) {
        if let Err(_e) = controller.stop_async().await {
            #[cfg(feature = "log")]
            println!("wifi_ap: failed to stop station: {:?}", _e);
        }
    }

    let static_config = StaticConfigV4 {
        address: Ipv4Cidr::new(config.ip_address, config.prefix_len),
        gateway: Some(config.ip_address),
        dns_servers: heapless::Vec::default(),
    };
    let net_config = embassy_net::Config::ipv4_static(static_config);

    let network_resources = make_static!(StackResources::<MAX_CONNECTIONS>::new());
    let (stack, runner) =
        embassy_net::new(wifi_device, net_config, network_resources, get_seed());

    spawner.spawn(wifi_ap_task(controller, config.ssid)).ok();
    spawner.spawn(network_runner_task(runner)).ok();

    loop {
        if stack.is_link_up() {
            break;
        }
        Timer::after(Duration::from_millis(100)).await;
    }
    // Give some extra time
    Timer::after(Duration::from_millis(100)).await;

    spawner
        .spawn(dhcp_server_task(stack, config.ip_address))
        .ok();
    spawner.spawn(dns_server_task(stack, config.ip_address)).ok();

    stack
}
