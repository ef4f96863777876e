use core::net::Ipv4Addr;

use embassy_time::Duration;

pub struct WifiApConfig {
    pub ssid: &'static str,
    pub ip_address: Ipv4Addr,
    pub prefix_len: u8,
}

pub struct HttpConfig {
    pub port: u16,
}

pub struct DeviceConfig {
    pub hostname: &'static str,
}

pub struct LedConfig {
    pub brightness: u8,
}

pub struct DisplayConfig {
    pub spi_frequency_mhz: u32,
    pub invert_colors: bool,
}

pub struct CompletionConfig {
    pub url: &'static str,
    pub token: Option<&'static str>,
    pub timeout: Duration,
}

pub const WIFI_AP: WifiApConfig = WifiApConfig {
    ssid: "Trinity_Setup",
    ip_address: Ipv4Addr::new(192, 168, 4, 1),
    prefix_len: 24,
};

pub const HTTP: HttpConfig = HttpConfig { port: 80 };

pub const DEVICE: DeviceConfig = DeviceConfig {
    hostname: "web2wire",
};

pub const LED: LedConfig = LedConfig { brightness: 50 };

pub const DISPLAY: DisplayConfig = DisplayConfig {
    spi_frequency_mhz: 40,
    invert_colors: true,
};

pub const COMPLETION: CompletionConfig = CompletionConfig {
    url: crate::config::COMPLETION_URL,
    token: crate::config::API_TOKEN,
    timeout: Duration::from_secs(10),
};

#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO48
    };
}

#[macro_export]
macro_rules! display_pins {
    ($p:expr) => {
        $crate::infrastructure::drivers::DisplayPins {
            sck: $p.GPIO12,
            mosi: $p.GPIO11,
            cs: $p.GPIO10,
            dc: $p.GPIO9,
            rst: $p.GPIO8,
        }
    };
}

#[macro_export]
macro_rules! backlight_gpio {
    ($p:expr) => {
        $p.GPIO7
    };
}
