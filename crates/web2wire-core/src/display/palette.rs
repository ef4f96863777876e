//! Screen colors

use embedded_graphics::pixelcolor::Rgb565;

/// 8-bit channels to RGB565, dropping the low bits
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

pub const BLACK: Rgb565 = rgb(0, 0, 0);
pub const WHITE: Rgb565 = rgb(255, 255, 255);
pub const RED: Rgb565 = rgb(255, 0, 0);
pub const GREEN: Rgb565 = rgb(0, 255, 0);
pub const BLUE: Rgb565 = rgb(0, 0, 255);
pub const YELLOW: Rgb565 = rgb(255, 255, 0);
pub const CYAN: Rgb565 = rgb(0, 255, 255);
pub const GRAY: Rgb565 = rgb(128, 128, 128);

pub const PARIS_BLUE: Rgb565 = rgb(0, 85, 164);
pub const GOLD: Rgb565 = rgb(255, 204, 0);
pub const SAFFRON: Rgb565 = rgb(255, 153, 51);
pub const ORANGE_IE: Rgb565 = rgb(255, 136, 62);
pub const NAVY: Rgb565 = rgb(0, 0, 128);
pub const DARK_GREEN: Rgb565 = rgb(0, 102, 0);
pub const RICH_GREEN: Rgb565 = rgb(0, 132, 61);
pub const DEEP_YELLOW: Rgb565 = rgb(255, 199, 44);
pub const ARG_BLUE: Rgb565 = rgb(117, 170, 219);
pub const CHINA_RED: Rgb565 = rgb(238, 30, 52);
pub const KE_RED: Rgb565 = rgb(190, 0, 0);
pub const KE_GREEN: Rgb565 = rgb(0, 128, 0);
pub const PORT_RED: Rgb565 = rgb(204, 32, 53);
pub const PORT_GREEN: Rgb565 = rgb(0, 102, 0);
pub const EGYPT_GOLD: Rgb565 = rgb(205, 164, 52);
pub const SA_BLUE: Rgb565 = rgb(0, 36, 114);
pub const TURK_RED: Rgb565 = rgb(227, 10, 23);
