//! Flag glyph library
//!
//! Every flag is drawn from primitives on a base grid of
//! [`FLAG_WIDTH`]x[`FLAG_HEIGHT`] units multiplied by an integer scale.
//! Drawing is clipped to the flag area. Codes without a glyph get a
//! bordered box with the code written inside.

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{
        Circle,
        Line,
        PrimitiveStyle,
        PrimitiveStyleBuilder,
        Rectangle,
        StrokeAlignment,
        Triangle,
    },
    text::{Baseline, Text},
};
use heapless::String;

use super::palette::*;

pub const FLAG_WIDTH: u32 = 32;
pub const FLAG_HEIGHT: u32 = 20;

/// Countries with a dedicated glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Argentina,
    Australia,
    Austria,
    Belgium,
    Brazil,
    Canada,
    Chile,
    China,
    Colombia,
    Denmark,
    Egypt,
    Finland,
    France,
    Germany,
    Greece,
    India,
    Indonesia,
    Ireland,
    Italy,
    Japan,
    Kenya,
    Mexico,
    Netherlands,
    NewZealand,
    Norway,
    Poland,
    Portugal,
    Russia,
    SouthAfrica,
    SouthKorea,
    Spain,
    Sweden,
    Switzerland,
    Turkey,
    UnitedKingdom,
    UnitedStates,
}

impl Flag {
    pub const ALL: [Flag; 36] = [
        Flag::Argentina,
        Flag::Australia,
        Flag::Austria,
        Flag::Belgium,
        Flag::Brazil,
        Flag::Canada,
        Flag::Chile,
        Flag::China,
        Flag::Colombia,
        Flag::Denmark,
        Flag::Egypt,
        Flag::Finland,
        Flag::France,
        Flag::Germany,
        Flag::Greece,
        Flag::India,
        Flag::Indonesia,
        Flag::Ireland,
        Flag::Italy,
        Flag::Japan,
        Flag::Kenya,
        Flag::Mexico,
        Flag::Netherlands,
        Flag::NewZealand,
        Flag::Norway,
        Flag::Poland,
        Flag::Portugal,
        Flag::Russia,
        Flag::SouthAfrica,
        Flag::SouthKorea,
        Flag::Spain,
        Flag::Sweden,
        Flag::Switzerland,
        Flag::Turkey,
        Flag::UnitedKingdom,
        Flag::UnitedStates,
    ];

    /// Look up a glyph by ISO 3166 alpha-2 code, ignoring case
    pub fn from_code(code: &str) -> Option<Self> {
        let &[first, second] = code.as_bytes() else {
            return None;
        };

        let flag = match [first.to_ascii_uppercase(), second.to_ascii_uppercase()] {
            [b'A', b'R'] => Self::Argentina,
            [b'A', b'U'] => Self::Australia,
            [b'A', b'T'] => Self::Austria,
            [b'B', b'E'] => Self::Belgium,
            [b'B', b'R'] => Self::Brazil,
            [b'C', b'A'] => Self::Canada,
            [b'C', b'L'] => Self::Chile,
            [b'C', b'N'] => Self::China,
            [b'C', b'O'] => Self::Colombia,
            [b'D', b'K'] => Self::Denmark,
            [b'E', b'G'] => Self::Egypt,
            [b'F', b'I'] => Self::Finland,
            [b'F', b'R'] => Self::France,
            [b'D', b'E'] => Self::Germany,
            [b'G', b'R'] => Self::Greece,
            [b'I', b'N'] => Self::India,
            [b'I', b'D'] => Self::Indonesia,
            [b'I', b'E'] => Self::Ireland,
            [b'I', b'T'] => Self::Italy,
            [b'J', b'P'] => Self::Japan,
            [b'K', b'E'] => Self::Kenya,
            [b'M', b'X'] => Self::Mexico,
            [b'N', b'L'] => Self::Netherlands,
            [b'N', b'Z'] => Self::NewZealand,
            [b'N', b'O'] => Self::Norway,
            [b'P', b'L'] => Self::Poland,
            [b'P', b'T'] => Self::Portugal,
            [b'R', b'U'] => Self::Russia,
            [b'Z', b'A'] => Self::SouthAfrica,
            [b'K', b'R'] => Self::SouthKorea,
            [b'E', b'S'] => Self::Spain,
            [b'S', b'E'] => Self::Sweden,
            [b'C', b'H'] => Self::Switzerland,
            [b'T', b'R'] => Self::Turkey,
            [b'G', b'B'] | [b'U', b'K'] => Self::UnitedKingdom,
            [b'U', b'S'] => Self::UnitedStates,
            _ => return None,
        };
        Some(flag)
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Argentina => "AR",
            Self::Australia => "AU",
            Self::Austria => "AT",
            Self::Belgium => "BE",
            Self::Brazil => "BR",
            Self::Canada => "CA",
            Self::Chile => "CL",
            Self::China => "CN",
            Self::Colombia => "CO",
            Self::Denmark => "DK",
            Self::Egypt => "EG",
            Self::Finland => "FI",
            Self::France => "FR",
            Self::Germany => "DE",
            Self::Greece => "GR",
            Self::India => "IN",
            Self::Indonesia => "ID",
            Self::Ireland => "IE",
            Self::Italy => "IT",
            Self::Japan => "JP",
            Self::Kenya => "KE",
            Self::Mexico => "MX",
            Self::Netherlands => "NL",
            Self::NewZealand => "NZ",
            Self::Norway => "NO",
            Self::Poland => "PL",
            Self::Portugal => "PT",
            Self::Russia => "RU",
            Self::SouthAfrica => "ZA",
            Self::SouthKorea => "KR",
            Self::Spain => "ES",
            Self::Sweden => "SE",
            Self::Switzerland => "CH",
            Self::Turkey => "TR",
            Self::UnitedKingdom => "GB",
            Self::UnitedStates => "US",
        }
    }

    fn draw<T>(self, pen: &mut Pen<'_, T>) -> Result<(), T::Error>
    where
        T: DrawTarget<Color = Rgb565>,
    {
        let (w, h, s) = (pen.w, pen.h, pen.s);
        let (cx, cy) = (w / 2, h / 2);

        match self {
            Self::Austria => pen.hstripes(&[RED, WHITE, RED]),
            Self::Argentina => {
                pen.hstripes(&[ARG_BLUE, WHITE, ARG_BLUE])?;
                pen.circle(cx, cy, 2 * s, GOLD)
            }
            Self::Germany => pen.hstripes(&[BLACK, RED, GOLD]),
            Self::Netherlands => pen.hstripes(&[RED, WHITE, BLUE]),
            Self::Russia => pen.hstripes(&[WHITE, BLUE, RED]),
            Self::India => {
                pen.hstripes(&[SAFFRON, WHITE, DARK_GREEN])?;
                pen.circle(cx, cy, 3 * s, NAVY)
            }
            Self::Egypt => {
                pen.hstripes(&[RED, WHITE, BLACK])?;
                pen.circle(cx, cy, 3 * s, EGYPT_GOLD)
            }
            Self::France => pen.vstripes(&[PARIS_BLUE, WHITE, RED]),
            Self::Ireland => pen.vstripes(&[KE_GREEN, WHITE, ORANGE_IE]),
            Self::Italy => pen.vstripes(&[KE_GREEN, WHITE, RED]),
            Self::Belgium => pen.vstripes(&[BLACK, GOLD, RED]),
            Self::Mexico => {
                pen.vstripes(&[DARK_GREEN, WHITE, RED])?;
                pen.circle(cx, cy, 3 * s, DARK_GREEN)
            }
            Self::Indonesia => pen.hstripes(&[RED, WHITE]),
            Self::Poland => pen.hstripes(&[WHITE, RED]),
            Self::Chile => {
                pen.hstripes(&[WHITE, RED])?;
                pen.rect(0, 0, h / 2, h / 2, BLUE)?;
                pen.circle(h / 4, h / 4, s, WHITE)
            }
            Self::Colombia => {
                pen.rect(0, 0, w, h / 2, GOLD)?;
                pen.rect(0, h / 2, w, h / 4, SA_BLUE)?;
                pen.rect(0, h / 2 + h / 4, w, h - h / 2 - h / 4, RED)
            }
            Self::Kenya => {
                let band = h / 3;
                pen.rect(0, 0, w, band, BLACK)?;
                pen.rect(0, band, w, band, WHITE)?;
                pen.rect(0, band + s, w, band - 2 * s, KE_RED)?;
                pen.rect(0, 2 * band, w, h - 2 * band, KE_GREEN)?;
                pen.circle(cx, cy, 4 * s, BLACK)?;
                pen.circle(cx, cy, 2 * s, KE_RED)
            }
            Self::Spain => {
                pen.rect(0, 0, w, h / 4, RED)?;
                pen.rect(0, h / 4, w, h / 2, GOLD)?;
                pen.rect(0, h / 4 + h / 2, w, h - h / 4 - h / 2, RED)?;
                pen.circle(w / 3, cy, 3 * s, PORT_RED)
            }
            Self::Denmark => pen.nordic_cross(RED, WHITE, None),
            Self::Finland => pen.nordic_cross(WHITE, SA_BLUE, None),
            Self::Sweden => pen.nordic_cross(PARIS_BLUE, GOLD, None),
            Self::Norway => pen.nordic_cross(RED, WHITE, Some(SA_BLUE)),
            Self::Japan => {
                pen.field(WHITE)?;
                pen.circle(cx, cy, 6 * s, RED)
            }
            Self::SouthKorea => {
                let r = 5 * s;
                pen.field(WHITE)?;
                pen.circle(cx, cy, r, RED)?;
                pen.rect(cx - r, cy, 2 * r + 1, r + 1, BLUE)?;
                pen.circle(cx - r / 2, cy, r / 2, RED)?;
                pen.circle(cx + r / 2, cy, r / 2, BLUE)?;
                pen.clear_outside_circle(cx, cy, r, WHITE)
            }
            Self::Turkey => {
                pen.field(TURK_RED)?;
                pen.circle(cx - 2 * s, cy, 6 * s, WHITE)?;
                pen.circle(cx - s, cy, 5 * s, TURK_RED)?;
                pen.circle(cx + 4 * s, cy, 2 * s, WHITE)
            }
            Self::China => {
                pen.field(CHINA_RED)?;
                pen.circle(w / 4, h / 4, 3 * s, GOLD)?;
                for (x, y) in [(11, 2), (13, 4), (13, 7), (11, 9)] {
                    pen.circle(x * s, y * s, s / 2, GOLD)?;
                }
                Ok(())
            }
            Self::Portugal => {
                let green = 2 * w / 5;
                pen.rect(0, 0, green, h, PORT_GREEN)?;
                pen.rect(green, 0, w - green, h, PORT_RED)?;
                pen.circle(green, cy, 4 * s, GOLD)?;
                pen.circle(green, cy, 2 * s, PORT_RED)
            }
            Self::Switzerland => {
                pen.field(RED)?;
                pen.rect(cx - s, 4 * s, 2 * s, h - 8 * s, WHITE)?;
                pen.rect(cx - 6 * s, cy - s, 12 * s, 2 * s, WHITE)
            }
            Self::Canada => {
                pen.vstripes_weighted(&[(RED, 1), (WHITE, 2), (RED, 1)])?;
                pen.circle(cx, cy, 4 * s, RED)
            }
            Self::Brazil => {
                let (dx, dy) = (w * 9 / 20, h * 9 / 20);
                pen.field(RICH_GREEN)?;
                pen.triangle((cx - dx, cy), (cx + dx, cy), (cx, cy - dy), DEEP_YELLOW)?;
                pen.triangle((cx - dx, cy), (cx + dx, cy), (cx, cy + dy), DEEP_YELLOW)?;
                pen.circle(cx, cy, 5 * s, SA_BLUE)?;
                pen.line((cx - 5 * s, cy - s), (cx + 5 * s, cy + s), s.max(1) as u32, WHITE)
            }
            Self::Greece => {
                let stripe = h / 9;
                for i in 0..9 {
                    let color = if i % 2 == 0 { PARIS_BLUE } else { WHITE };
                    let height = if i == 8 { h - 8 * stripe } else { stripe };
                    pen.rect(0, i * stripe, w, height, color)?;
                }
                let canton = 5 * stripe;
                pen.rect(0, 0, canton, canton, PARIS_BLUE)?;
                pen.rect(0, 2 * stripe, canton, stripe, WHITE)?;
                pen.rect(2 * stripe, 0, stripe, canton, WHITE)
            }
            Self::UnitedStates => {
                let stripe = h / 13;
                for i in 0..13 {
                    let color = if i % 2 == 0 { RED } else { WHITE };
                    pen.rect(0, i * stripe, w, stripe, color)?;
                }
                pen.rect(0, 13 * stripe, w, h - 13 * stripe, RED)?;

                let (canton_w, canton_h) = (2 * w / 5, 7 * stripe);
                pen.rect(0, 0, canton_w, canton_h, NAVY)?;
                let (px, py) = (canton_w / 6, canton_h / 6);
                let r = if s > 3 { 3 } else { (s - 1).max(0) };
                for (x, y) in [
                    (px, py),
                    (canton_w - px, py),
                    (canton_w / 2, canton_h / 2),
                    (px, canton_h - py),
                    (canton_w - px, canton_h - py),
                ] {
                    pen.circle(x, y, r, WHITE)?;
                }
                Ok(())
            }
            Self::UnitedKingdom => pen.union_jack(w, h),
            Self::Australia => {
                pen.field(SA_BLUE)?;
                pen.union_jack(w / 2, h / 2)?;
                pen.circle(w / 4, h - h / 4, 3 * s / 2, WHITE)?;
                for (x, y) in SOUTHERN_CROSS {
                    pen.circle(x * s, y * s, s / 2, WHITE)?;
                }
                Ok(())
            }
            Self::NewZealand => {
                pen.field(SA_BLUE)?;
                pen.union_jack(w / 2, h / 2)?;
                for (x, y) in &SOUTHERN_CROSS[..4] {
                    pen.circle(x * s, y * s, s / 2 + 1, WHITE)?;
                    pen.circle(x * s, y * s, s / 2, RED)?;
                }
                Ok(())
            }
            Self::SouthAfrica => {
                pen.rect(0, 0, w, cy, PORT_RED)?;
                pen.rect(0, cy, w, h - cy, SA_BLUE)?;
                pen.rect(0, cy - 3 * s, w, 6 * s, WHITE)?;
                pen.triangle((0, 0), (13 * s, cy), (0, h), WHITE)?;
                pen.rect(0, cy - 2 * s, w, 4 * s, KE_GREEN)?;
                pen.triangle((0, 2 * s), (11 * s, cy), (0, h - 2 * s), KE_GREEN)?;
                pen.triangle((0, 4 * s), (8 * s, cy), (0, h - 4 * s), GOLD)?;
                pen.triangle((0, 5 * s), (6 * s, cy), (0, h - 5 * s), BLACK)
            }
        }
    }
}

/// Star positions on the base grid, the last one is the smallest
const SOUTHERN_CROSS: [(i32, i32); 5] = [(24, 4), (20, 9), (28, 8), (24, 16), (26, 12)];

/// Draw the glyph for `code` with its top-left corner at `top_left`
pub fn draw_flag<D>(
    target: &mut D,
    top_left: Point,
    scale: u32,
    code: &str,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let scale = scale.max(1);
    let size = Size::new(FLAG_WIDTH * scale, FLAG_HEIGHT * scale);
    let mut clipped = target.clipped(&Rectangle::new(top_left, size));
    let mut pen = Pen {
        target: &mut clipped,
        origin: top_left,
        w: size.width as i32,
        h: size.height as i32,
        s: scale as i32,
    };

    match Flag::from_code(code) {
        Some(flag) => flag.draw(&mut pen),
        None => pen.fallback(code),
    }
}

/// Size of a glyph at `scale`
pub fn flag_size(scale: u32) -> Size {
    let scale = scale.max(1);
    Size::new(FLAG_WIDTH * scale, FLAG_HEIGHT * scale)
}

/// Draws in coordinates relative to the flag origin
struct Pen<'a, T> {
    target: &'a mut T,
    origin: Point,
    w: i32,
    h: i32,
    s: i32,
}

impl<T> Pen<'_, T>
where
    T: DrawTarget<Color = Rgb565>,
{
    fn at(&self, x: i32, y: i32) -> Point {
        self.origin + Point::new(x, y)
    }

    fn paint(
        &mut self,
        item: impl Drawable<Color = Rgb565, Output = ()>,
    ) -> Result<(), T::Error> {
        item.draw(&mut *self.target)
    }

    fn rect(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Rgb565,
    ) -> Result<(), T::Error> {
        if w <= 0 || h <= 0 {
            return Ok(());
        }
        let rect = Rectangle::new(self.at(x, y), Size::new(w as u32, h as u32));
        self.paint(rect.into_styled(PrimitiveStyle::with_fill(color)))
    }

    fn field(&mut self, color: Rgb565) -> Result<(), T::Error> {
        self.rect(0, 0, self.w, self.h, color)
    }

    fn circle(
        &mut self,
        cx: i32,
        cy: i32,
        r: i32,
        color: Rgb565,
    ) -> Result<(), T::Error> {
        if r < 0 {
            return Ok(());
        }
        let circle = Circle::with_center(self.at(cx, cy), (2 * r + 1) as u32);
        self.paint(circle.into_styled(PrimitiveStyle::with_fill(color)))
    }

    fn triangle(
        &mut self,
        a: (i32, i32),
        b: (i32, i32),
        c: (i32, i32),
        color: Rgb565,
    ) -> Result<(), T::Error> {
        let triangle =
            Triangle::new(self.at(a.0, a.1), self.at(b.0, b.1), self.at(c.0, c.1));
        self.paint(triangle.into_styled(PrimitiveStyle::with_fill(color)))
    }

    fn line(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
        width: u32,
        color: Rgb565,
    ) -> Result<(), T::Error> {
        let line = Line::new(self.at(from.0, from.1), self.at(to.0, to.1));
        self.paint(line.into_styled(PrimitiveStyle::with_stroke(color, width)))
    }

    /// Equal horizontal stripes, the last one takes the remainder
    fn hstripes(&mut self, colors: &[Rgb565]) -> Result<(), T::Error> {
        let stripe = self.h / colors.len() as i32;
        for (i, color) in colors.iter().enumerate() {
            let y = i as i32 * stripe;
            let height = if i + 1 == colors.len() { self.h - y } else { stripe };
            self.rect(0, y, self.w, height, *color)?;
        }
        Ok(())
    }

    /// Equal vertical stripes, the last one takes the remainder
    fn vstripes(&mut self, colors: &[Rgb565]) -> Result<(), T::Error> {
        let stripe = self.w / colors.len() as i32;
        for (i, color) in colors.iter().enumerate() {
            let x = i as i32 * stripe;
            let width = if i + 1 == colors.len() { self.w - x } else { stripe };
            self.rect(x, 0, width, self.h, *color)?;
        }
        Ok(())
    }

    /// Vertical stripes with relative widths
    fn vstripes_weighted(&mut self, stripes: &[(Rgb565, i32)]) -> Result<(), T::Error> {
        let total: i32 = stripes.iter().map(|(_, weight)| weight).sum();
        let mut x = 0;
        for (i, (color, weight)) in stripes.iter().enumerate() {
            let width = if i + 1 == stripes.len() {
                self.w - x
            } else {
                self.w * weight / total
            };
            self.rect(x, 0, width, self.h, *color)?;
            x += width;
        }
        Ok(())
    }

    /// Scandinavian cross, offset towards the hoist
    fn nordic_cross(
        &mut self,
        field: Rgb565,
        cross: Rgb565,
        inner: Option<Rgb565>,
    ) -> Result<(), T::Error> {
        let (x, y) = (self.w / 3, self.h / 2);
        let s = self.s;
        self.field(field)?;

        let thickness = if inner.is_some() { 4 * s } else { 2 * s };
        self.rect(x - thickness / 2, 0, thickness, self.h, cross)?;
        self.rect(0, y - thickness / 2, self.w, thickness, cross)?;

        if let Some(inner) = inner {
            self.rect(x - s, 0, 2 * s, self.h, inner)?;
            self.rect(0, y - s, self.w, 2 * s, inner)?;
        }
        Ok(())
    }

    /// Paint the corners around a centered disc
    ///
    /// Used to trim shapes that were drawn as rectangles back to a disc.
    fn clear_outside_circle(
        &mut self,
        cx: i32,
        cy: i32,
        r: i32,
        color: Rgb565,
    ) -> Result<(), T::Error> {
        let r2 = r * r;
        for dy in -r..=r {
            let row = self.at(cx - r, cy + dy);
            let pixels = (0..=2 * r).filter_map(|i| {
                let dx = i - r;
                (dx * dx + dy * dy > r2).then(|| Pixel(row + Point::new(i, 0), color))
            });
            self.target.draw_iter(pixels)?;
        }
        Ok(())
    }

    /// Union flag in the top-left `w`x`h` area
    fn union_jack(&mut self, w: i32, h: i32) -> Result<(), T::Error> {
        let bounds = Rectangle::new(self.origin, Size::new(w as u32, h as u32));
        let mut area = self.target.clipped(&bounds);
        let mut pen = Pen {
            target: &mut area,
            origin: self.origin,
            w,
            h,
            s: self.s,
        };

        let unit = (h / 15).max(1);
        pen.field(SA_BLUE)?;
        pen.line((0, 0), (w, h), 3 * unit as u32, WHITE)?;
        pen.line((0, h), (w, 0), 3 * unit as u32, WHITE)?;
        pen.line((0, 0), (w, h), unit as u32, RED)?;
        pen.line((0, h), (w, 0), unit as u32, RED)?;

        let (white, red) = (5 * unit, 3 * unit);
        pen.rect(0, h / 2 - white / 2, w, white, WHITE)?;
        pen.rect(w / 2 - white / 2, 0, white, h, WHITE)?;
        pen.rect(0, h / 2 - red / 2, w, red, RED)?;
        pen.rect(w / 2 - red / 2, 0, red, h, RED)
    }

    /// Box with the upper-case code for countries without a glyph
    fn fallback(&mut self, code: &str) -> Result<(), T::Error> {
        let border = PrimitiveStyleBuilder::new()
            .fill_color(BLACK)
            .stroke_color(RED)
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        let bounds = Rectangle::new(self.origin, Size::new(self.w as u32, self.h as u32));
        self.paint(bounds.into_styled(border))?;

        let mut label: String<8> = String::new();
        for c in code.chars() {
            if label.push(c.to_ascii_uppercase()).is_err() {
                break;
            }
        }
        let style = MonoTextStyle::new(&FONT_6X10, RED);
        let position = self.at(5, self.h / 2 - 5);
        Text::with_baseline(&label, position, style, Baseline::Top)
            .draw(&mut *self.target)?;
        Ok(())
    }
}
