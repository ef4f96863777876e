use embassy_net::{DhcpConfig, Runner, Stack, StackResources};
use embassy_time::{Instant, Timer};
#[cfg(feature = "log")]
use esp_println::println;
use esp_radio::wifi::{
    AuthMethod,
    ClientConfig,
    ModeConfig,
    WifiController,
    WifiDevice,
    WifiError,
};
use static_cell::make_static;
use web2wire_core::{
    connectivity::{CONNECT_POLL_INTERVAL, ConnectivityManager, LinkAction},
    credentials::WifiCredentials,
};

use super::wifi_radio::get_seed;

/// Maximum length of the hostname
const MAX_HOSTNAME_LEN: usize = 32;

const MAX_NETWORK_CONNECTIONS: usize = 6;

/// Type alias for the hostname
pub type Hostname = heapless::String<MAX_HOSTNAME_LEN>;

/// Create the DHCP client stack on the station interface
///
/// The runner must be spawned before the stack can come up.
pub fn init_sta_stack(
    wifi_device: WifiDevice<'static>,
    hostname: &str,
) -> (Stack<'static>, Runner<'static, WifiDevice<'static>>) {
    let mut dhcp_config = DhcpConfig::default();
    dhcp_config.hostname = Hostname::try_from(hostname).ok();

    let net_config = embassy_net::Config::dhcpv4(dhcp_config);

    let network_resources =
        make_static!(StackResources::<{ MAX_NETWORK_CONNECTIONS }>::new());
    embassy_net::new(wifi_device, net_config, network_resources, get_seed())
}

/// Whether the station is associated and holds a lease
pub fn is_station_up(stack: Stack<'_>) -> bool {
    stack.is_link_up() && stack.config_v4().is_some()
}

/// Join the stored network during boot
///
/// Starts one association and feeds the link status to `manager` every
/// [`CONNECT_POLL_INTERVAL`] until it is either connected or has given up.
/// Returns `true` when the station is usable.
pub async fn join_network(
    controller: &mut WifiController<'static>,
    stack: Stack<'static>,
    credentials: &WifiCredentials,
    manager: &mut ConnectivityManager,
) -> bool {
    if let Err(_e) = start_client(controller, credentials).await {
        #[cfg(feature = "log")]
        println!("network: failed to start station: {:?}", _e);
        manager.enter_provisioning(Instant::now());
        return false;
    }

    #[cfg(feature = "log")]
    println!("network: connecting to '{}'", credentials.ssid);
    if let Err(_e) = controller.connect() {
        #[cfg(feature = "log")]
        println!("network: error connecting: {:?}", _e);
    }

    loop {
        Timer::after(CONNECT_POLL_INTERVAL).await;

        let action = manager.maintain(Instant::now(), is_station_up(stack));
        if manager.is_link_usable() {
            #[cfg(feature = "log")]
            if let Some(config) = stack.config_v4() {
                println!("network: connected, address {}", config.address);
            }
            return true;
        }
        if action == Some(LinkAction::StartProvisioning) {
            #[cfg(feature = "log")]
            println!("network: no connection, giving up");
            return false;
        }
    }
}

async fn start_client(
    controller: &mut WifiController<'static>,
    credentials: &WifiCredentials,
) -> Result<(), WifiError> {
    let client_config = if credentials.password.is_empty() {
        ClientConfig::default()
            .with_ssid(credentials.ssid.as_str().into())
            .with_auth_method(AuthMethod::None)
    } else {
        ClientConfig::default()
            .with_ssid(credentials.ssid.as_str().into())
            .with_password(credentials.password.as_str().into())
    };
    controller.set_config(&ModeConfig::Client(client_config))?;
    controller.start_async().await
}
