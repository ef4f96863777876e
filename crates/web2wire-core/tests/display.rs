//! Integration tests for flag glyphs and the job screen layout.

mod common;

use common::FrameBuffer;
use embedded_graphics::{
    mock_display::MockDisplay,
    mono_font::{MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
    text::{Baseline, Text},
};
use web2wire_core::{
    Frame, JobData, SequencerState,
    display::{
        self, BADGE, FLAG_ORIGIN, FLAG_SCALE, SCREEN_HEIGHT, SCREEN_WIDTH,
        flags::{Flag, draw_flag, flag_size},
        palette::{BLACK, GOLD, GREEN, RED, WHITE, YELLOW},
    },
};

fn mock() -> MockDisplay<Rgb565> {
    let mut display = MockDisplay::new();
    display.set_allow_overdraw(true);
    display
}

fn glyph(code: &str) -> MockDisplay<Rgb565> {
    let mut display = mock();
    draw_flag(&mut display, Point::zero(), 1, code).unwrap();
    display
}

fn frame(name: &str, origin: &str, code: &str, state: SequencerState) -> Frame {
    Frame {
        job: JobData::new(name, origin, code),
        state,
    }
}

fn screen(frame: &Frame) -> FrameBuffer {
    let mut buffer = FrameBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    display::render_job(&mut buffer, frame).unwrap();
    buffer
}

fn status_area() -> Rectangle {
    Rectangle::new(Point::new(0, 205), Size::new(SCREEN_WIDTH, 35))
}

// -----------------------------------------------------------------------------
// Test 1: Flag glyphs
// -----------------------------------------------------------------------------

#[test]
fn unknown_code_draws_bordered_box_with_code() {
    let mut expected = mock();
    let border = PrimitiveStyleBuilder::new()
        .fill_color(BLACK)
        .stroke_color(RED)
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    Rectangle::new(Point::zero(), Size::new(32, 20))
        .into_styled(border)
        .draw(&mut expected)
        .unwrap();
    Text::with_baseline(
        "ZZ",
        Point::new(5, 5),
        MonoTextStyle::new(&FONT_6X10, RED),
        Baseline::Top,
    )
    .draw(&mut expected)
    .unwrap();

    assert_eq!(glyph("ZZ"), expected);
}

#[test]
fn fallback_upper_cases_the_code() {
    assert_eq!(glyph("zz"), glyph("ZZ"));
}

#[test]
fn every_known_flag_has_its_own_glyph() {
    let fallback = glyph("ZZ");
    for flag in Flag::ALL {
        assert_ne!(glyph(flag.code()), fallback, "{} fell back", flag.code());
        assert_eq!(Flag::from_code(flag.code()), Some(flag));
    }
}

#[test]
fn lookup_ignores_case() {
    assert_eq!(Flag::from_code("de"), Some(Flag::Germany));
    assert_eq!(Flag::from_code("uk"), Some(Flag::UnitedKingdom));
    assert_eq!(Flag::from_code("DEU"), None);
    assert_eq!(Flag::from_code(""), None);
}

#[test]
fn germany_stripes_top_to_bottom() {
    let display = glyph("DE");

    assert_eq!(display.get_pixel(Point::new(16, 0)), Some(BLACK));
    assert_eq!(display.get_pixel(Point::new(16, 10)), Some(RED));
    assert_eq!(display.get_pixel(Point::new(16, 19)), Some(GOLD));
}

#[test]
fn france_stripes_left_to_right() {
    let display = glyph("FR");

    assert_eq!(display.get_pixel(Point::new(16, 10)), Some(WHITE));
    assert_eq!(display.get_pixel(Point::new(31, 10)), Some(RED));
}

#[test]
fn japan_has_red_disc_on_white() {
    let display = glyph("JP");

    assert_eq!(display.get_pixel(Point::new(16, 10)), Some(RED));
    assert_eq!(display.get_pixel(Point::new(1, 1)), Some(WHITE));
}

#[test]
fn glyphs_stay_inside_their_area() {
    for flag in Flag::ALL {
        let display = glyph(flag.code());
        let area = Rectangle::new(Point::zero(), flag_size(1));
        for y in 0..64 {
            for x in 0..64 {
                let point = Point::new(x, y);
                if !area.contains(point) {
                    assert_eq!(display.get_pixel(point), None, "{} spilled", flag.code());
                }
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Test 2: Job screen
// -----------------------------------------------------------------------------

#[test]
fn job_screen_draws_flag_and_badge() {
    let buffer = screen(&frame("Alice", "Tokyo", "JP", SequencerState::Idle));
    let size = flag_size(FLAG_SCALE);
    let center = FLAG_ORIGIN + Point::new(size.width as i32 / 2, size.height as i32 / 2);

    assert_eq!(buffer.pixel(center.x, center.y), RED);
    assert_eq!(buffer.pixel(BADGE.top_left.x, BADGE.top_left.y), WHITE);
    assert!(buffer.count_in(BADGE, BLACK) > 0);
}

#[test]
fn unknown_code_uses_fallback_on_screen() {
    let buffer = screen(&frame("Bob", "Nowhere", "ZZ", SequencerState::Idle));

    assert_eq!(buffer.pixel(FLAG_ORIGIN.x, FLAG_ORIGIN.y), RED);
    assert_eq!(buffer.pixel(FLAG_ORIGIN.x + 1, FLAG_ORIGIN.y + 1), BLACK);
}

#[test]
fn status_line_follows_sequencer_state() {
    let ready = screen(&frame("A", "B", "DE", SequencerState::Idle));
    let busy = screen(&frame("A", "B", "DE", SequencerState::Phase { index: 2 }));

    assert!(ready.count_in(status_area(), GREEN) > 0);
    assert_eq!(ready.count_in(status_area(), YELLOW), 0);
    assert!(busy.count_in(status_area(), YELLOW) > 0);
    assert_eq!(busy.count_in(status_area(), GREEN), 0);
}

#[test]
fn long_name_does_not_reach_the_flag_column() {
    let name = "Bartholomew Montgomery Fitzgerald-Worthington the Third";
    let buffer = screen(&frame(name, "Somewhere", "SE", SequencerState::Idle));
    let gutter = Rectangle::new(Point::new(201, 40), Size::new(10, 160));

    assert_eq!(buffer.count_in(gutter, WHITE), 0);
}

#[test]
fn status_text_matches_frame() {
    let ready = frame("A", "B", "DE", SequencerState::Idle);
    let busy = frame("A", "B", "DE", SequencerState::Phase { index: 0 });

    assert_eq!(display::status_text(&ready), display::STATUS_READY);
    assert_eq!(display::status_text(&busy), display::STATUS_PROCESSING);
}

#[test]
fn provisioning_screen_renders() {
    let mut buffer = FrameBuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT);

    display::render_provisioning(
        &mut buffer,
        "Trinity_Setup",
        core::net::Ipv4Addr::new(192, 168, 4, 1),
    )
    .unwrap();

    assert!(buffer.count_in(Rectangle::new(Point::new(0, 90), Size::new(320, 30)), WHITE) > 0);
}
