mod display_st7789;
mod led_ws2812;
mod wifi_radio;
pub mod wifi_ap;
pub mod wifi_sta;

pub use display_st7789::{DisplayPins, EspDisplay, init_display};
pub use led_ws2812::EspLedDriver;
pub use wifi_ap::start_wifi_ap;
pub use wifi_radio::init_wifi;
pub use wifi_sta::{init_sta_stack, is_station_up, join_network};
