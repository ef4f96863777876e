use embassy_net::Runner;
use embassy_time::{Duration, Timer};
#[cfg(feature = "log")]
use esp_println::println;
use esp_radio::wifi::{AccessPointConfig, AuthMethod, ModeConfig, WifiController, WifiDevice};

use crate::infrastructure::services::wait_reconnect_request;

/// Background task for running a network stack
///
/// One runner per interface, the station and the access point never run
/// together but a failed join leaves the station runner alive.
#[embassy_executor::task(pool_size = 2)]
pub async fn network_runner_task(mut runner: Runner<'static, WifiDevice<'static>>) {
    runner.run().await;
}

/// Background task owning the radio in station mode
///
/// Each reconnect request raised by the connectivity manager turns into one
/// association attempt. The loop never waits on the radio.
#[embassy_executor::task]
pub async fn wifi_maintenance_task(mut controller: WifiController<'static>) {
    loop {
        wait_reconnect_request().await;

        #[cfg(feature = "log")]
        println!("network: reconnecting");
        if let Err(_e) = controller.connect_async().await {
            #[cfg(feature = "log")]
            println!("network: error reconnecting: {:?}", _e);
        }
    }
}

/// Background task running the open setup access point
#[embassy_executor::task]
pub async fn wifi_ap_task(mut controller: WifiController<'static>, ssid: &'static str) {
    #[cfg(feature = "log")]
    println!("wifi_ap: starting AP with SSID '{}'", ssid);

    let ap_config = AccessPointConfig::default()
        .with_ssid(ssid.into())
        .with_auth_method(AuthMethod::None);

    if let Err(_e) = controller.set_config(&ModeConfig::AccessPoint(ap_config)) {
        #[cfg(feature = "log")]
        println!("wifi_ap: invalid AP config: {:?}", _e);
        return;
    }
    if let Err(_e) = controller.start_async().await {
        #[cfg(feature = "log")]
        println!("wifi_ap: failed to start AP: {:?}", _e);
        return;
    }

    #[cfg(feature = "log")]
    println!("wifi_ap: AP started");

    // The controller must stay alive for the AP to keep running
    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}
