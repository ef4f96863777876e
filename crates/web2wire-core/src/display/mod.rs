//! Screen layout
//!
//! Landscape 320x240 layout of the job screen:
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ WEB2WIRE                             │
//! │──────────────────────────────────────│
//! │ NAME                       ┌───────┐ │
//! │ Alice Wu                   │ flag  │ │
//! │                            └───────┘ │
//! │ FROM                       [  DE   ] │
//! │ Berlin                               │
//! │──────────────────────────────────────│
//! │ STATUS: READY                        │
//! └──────────────────────────────────────┘
//! ```
//!
//! Each render clears the screen and draws everything again.

pub mod flags;
pub mod palette;
pub mod wrap;

use core::{fmt::Write, net::Ipv4Addr};

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use heapless::String;

use crate::context::Frame;
use palette::{BLACK, CYAN, GRAY, GREEN, WHITE, YELLOW};
use wrap::wrap_lines;

pub const SCREEN_WIDTH: u32 = 320;
pub const SCREEN_HEIGHT: u32 = 240;

/// Characters per line of the large font in the text column
pub const TEXT_COLUMN_CHARS: usize = 19;
pub const NAME_MAX_LINES: usize = 3;
pub const ORIGIN_MAX_LINES: usize = 2;
pub const FLAG_SCALE: u32 = 3;

pub const TITLE: &str = "WEB2WIRE";
pub const STATUS_READY: &str = "STATUS: READY";
pub const STATUS_PROCESSING: &str = "STATUS: PROCESSING";

const MARGIN: i32 = 10;
const LINE_HEIGHT: i32 = 22;
const HEADER_RULE_Y: i32 = 32;
const NAME_LABEL_Y: i32 = 42;
const ORIGIN_LABEL_Y: i32 = 126;
const FOOTER_RULE_Y: i32 = 200;
const STATUS_Y: i32 = 210;

/// Top-left corner of the flag glyph
pub const FLAG_ORIGIN: Point = Point::new(212, 48);
/// Box under the flag showing the country code
pub const BADGE: Rectangle = Rectangle::new(Point::new(212, 116), Size::new(96, 30));

fn large(color: Rgb565) -> MonoTextStyle<'static, Rgb565> {
    MonoTextStyle::new(&FONT_10X20, color)
}

fn small(color: Rgb565) -> MonoTextStyle<'static, Rgb565> {
    MonoTextStyle::new(&FONT_6X10, color)
}

fn text<D>(
    target: &mut D,
    value: &str,
    x: i32,
    y: i32,
    style: MonoTextStyle<'_, Rgb565>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_baseline(value, Point::new(x, y), style, Baseline::Top).draw(target)?;
    Ok(())
}

fn rule<D>(target: &mut D, y: i32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(
        Point::new(MARGIN, y),
        Point::new(SCREEN_WIDTH as i32 - MARGIN, y),
    )
    .into_styled(PrimitiveStyle::with_stroke(CYAN, 1))
    .draw(target)
}

fn header<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.clear(BLACK)?;
    text(target, TITLE, MARGIN, 8, large(WHITE))?;
    rule(target, HEADER_RULE_Y)
}

/// Draw a labelled block of wrapped text, returning the lines drawn
fn wrapped_block<D, const L: usize>(
    target: &mut D,
    label: &str,
    value: &str,
    y: i32,
) -> Result<usize, D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    text(target, label, MARGIN, y, small(GRAY))?;
    let lines = wrap_lines::<L>(value, TEXT_COLUMN_CHARS);
    for (i, line) in lines.iter().enumerate() {
        text(target, line, MARGIN, y + 12 + i as i32 * LINE_HEIGHT, large(WHITE))?;
    }
    Ok(lines.len())
}

/// Status line text for a frame
pub fn status_text(frame: &Frame) -> &'static str {
    if frame.is_processing() {
        STATUS_PROCESSING
    } else {
        STATUS_READY
    }
}

/// Redraw the job screen
pub fn render_job<D>(target: &mut D, frame: &Frame) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    header(target)?;

    wrapped_block::<D, NAME_MAX_LINES>(target, "NAME", &frame.job.name, NAME_LABEL_Y)?;
    wrapped_block::<D, ORIGIN_MAX_LINES>(target, "FROM", &frame.job.origin, ORIGIN_LABEL_Y)?;

    flags::draw_flag(target, FLAG_ORIGIN, FLAG_SCALE, &frame.job.country_code)?;

    BADGE
        .into_styled(PrimitiveStyle::with_fill(WHITE))
        .draw(target)?;
    let centered = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Top)
        .build();
    Text::with_text_style(
        &frame.job.country_code,
        BADGE.center() + Point::new(0, -10),
        large(BLACK),
        centered,
    )
    .draw(target)?;

    rule(target, FOOTER_RULE_Y)?;
    let status_color = if frame.is_processing() { YELLOW } else { GREEN };
    text(target, status_text(frame), MARGIN, STATUS_Y, large(status_color))
}

/// Screen shown while the setup access point is up
pub fn render_provisioning<D>(
    target: &mut D,
    ssid: &str,
    address: Ipv4Addr,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    header(target)?;

    text(target, "SETUP MODE", MARGIN, 48, large(YELLOW))?;
    text(target, "JOIN WI-FI", MARGIN, 84, small(GRAY))?;
    text(target, ssid, MARGIN, 96, large(WHITE))?;
    text(target, "THEN OPEN", MARGIN, 132, small(GRAY))?;

    let mut url: String<32> = String::new();
    let _ = write!(url, "http://{}/", address);
    text(target, &url, MARGIN, 144, large(WHITE))?;

    rule(target, FOOTER_RULE_Y)?;
    text(target, "STATUS: PROVISIONING", MARGIN, STATUS_Y, large(CYAN))
}
