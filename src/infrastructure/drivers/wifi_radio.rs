use esp_hal::{peripherals::WIFI, rng::Rng};
use esp_radio::wifi::{Config, Interfaces, WifiController};
use static_cell::make_static;

/// Bring up the radio, returning the shared controller with both interfaces
///
/// The station and access point devices come from the same controller, the
/// caller decides which one gets a network stack.
pub fn init_wifi(wifi_device: WIFI<'static>) -> (WifiController<'static>, Interfaces<'static>) {
    let esp_radio_ctrl = &*make_static!(esp_radio::init().expect("radio init failed"));
    esp_radio::wifi::new(esp_radio_ctrl, wifi_device, Config::default())
        .expect("wifi init failed")
}

pub(crate) fn get_seed() -> u64 {
    let rng = Rng::new();
    u64::from(rng.random()) << 32 | u64::from(rng.random())
}
