use core::iter;

use esp_hal::xtensa_lx::interrupt;
use esp_hal::{
    gpio::interconnect::PeripheralOutput,
    peripherals::RMT,
    rmt::{Error as RmtError, Rmt},
    time::Rate,
};
use esp_hal_smartled::{SmartLedsAdapter, buffer_size, smart_led_buffer};
#[cfg(feature = "log")]
use esp_println::println;
use smart_leds::{SmartLedsWrite, brightness};
use static_cell::make_static;
use web2wire_core::IndicatorColor;

/// The status light is a single pixel
const LED_COUNT: usize = 1;

/// WS2812 status light driven by the RMT peripheral
///
/// The RMT generates the precise timing signals required by WS2812B LEDs.
/// Every color is scaled by the configured brightness before it is sent.
pub struct EspLedDriver<'a> {
    adapter: SmartLedsAdapter<'a, { buffer_size(LED_COUNT) }>,
    brightness: u8,
}

impl<'a> EspLedDriver<'a> {
    pub fn new<O>(rmt: RMT<'a>, pin: O, brightness: u8) -> Result<Self, RmtError>
    where
        O: PeripheralOutput<'a>,
    {
        let rmt = Rmt::new(rmt, Rate::from_mhz(80))?;

        let rmt_buffer = make_static!(smart_led_buffer!(LED_COUNT));
        let adapter = SmartLedsAdapter::new(rmt.channel0, pin, rmt_buffer);

        Ok(Self {
            adapter,
            brightness,
        })
    }

    pub(crate) fn write(&mut self, color: IndicatorColor) {
        let pixels = brightness(iter::once(color), self.brightness);
        interrupt::free(|| {
            if let Err(_e) = self.adapter.write(pixels) {
                #[cfg(feature = "log")]
                println!("led: write failed: {:?}", _e);
            }
        });
    }
}
