use embassy_time::Delay;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use esp_hal::{
    Blocking,
    gpio::{Level, Output, OutputConfig, OutputPin, interconnect::PeripheralOutput},
    peripherals::SPI2,
    spi::{
        Mode,
        master::{Config as SpiConfig, Spi},
    },
    time::Rate,
};
use mipidsi::{
    Builder,
    Display,
    interface::SpiInterface,
    models::ST7789,
    options::{ColorInversion, Orientation, Rotation},
};
use static_cell::make_static;
use web2wire_core::display::{SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::infrastructure::config::DisplayConfig;

const TRANSFER_BUFFER_SIZE: usize = 512;

type SpiBus = ExclusiveDevice<Spi<'static, Blocking>, Output<'static>, NoDelay>;

/// ST7789 panel in landscape orientation
pub type EspDisplay =
    Display<SpiInterface<'static, SpiBus, Output<'static>>, ST7789, Output<'static>>;

/// Pins wiring the panel to the SPI bus
pub struct DisplayPins<SCK, MOSI, CS, DC, RST> {
    pub sck: SCK,
    pub mosi: MOSI,
    pub cs: CS,
    pub dc: DC,
    pub rst: RST,
}

/// Initialize the ST7789 over SPI2
///
/// The panel is a portrait 240x320 module rotated to landscape.
pub fn init_display<SCK, MOSI, CS, DC, RST>(
    spi: SPI2<'static>,
    pins: DisplayPins<SCK, MOSI, CS, DC, RST>,
    config: &DisplayConfig,
) -> EspDisplay
where
    SCK: PeripheralOutput<'static>,
    MOSI: PeripheralOutput<'static>,
    CS: OutputPin + 'static,
    DC: OutputPin + 'static,
    RST: OutputPin + 'static,
{
    let spi = Spi::new(
        spi,
        SpiConfig::default()
            .with_frequency(Rate::from_mhz(config.spi_frequency_mhz))
            .with_mode(Mode::_0),
    )
    .expect("SPI init failed")
    .with_sck(pins.sck)
    .with_mosi(pins.mosi);

    let cs = Output::new(pins.cs, Level::High, OutputConfig::default());
    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).expect("SPI device init failed");

    let dc = Output::new(pins.dc, Level::Low, OutputConfig::default());
    let rst = Output::new(pins.rst, Level::High, OutputConfig::default());

    let buffer = make_static!([0u8; TRANSFER_BUFFER_SIZE]);
    let interface = SpiInterface::new(spi_device, dc, buffer);

    let inversion = if config.invert_colors {
        ColorInversion::Inverted
    } else {
        ColorInversion::Normal
    };

    Builder::new(ST7789, interface)
        .display_size(SCREEN_HEIGHT as u16, SCREEN_WIDTH as u16)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .invert_colors(inversion)
        .reset_pin(rst)
        .init(&mut Delay)
        .expect("display init failed")
}
