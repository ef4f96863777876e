//! Status indicator abstraction
//!
//! The indicator is a single RGB light. The sequencer drives it during a
//! job, the connectivity manager colors it while idle.

use smart_leds::RGB8;

/// Color of the status indicator
pub type IndicatorColor = RGB8;

/// Indicator is dark
pub const OFF: IndicatorColor = IndicatorColor::new(0, 0, 0);

/// Something that can show a single color
pub trait Indicator {
    /// Show a color
    fn set_indicator(&mut self, color: IndicatorColor);

    /// Color currently shown
    fn indicator(&self) -> IndicatorColor;
}

impl<I: Indicator + ?Sized> Indicator for &mut I {
    fn set_indicator(&mut self, color: IndicatorColor) {
        (**self).set_indicator(color);
    }

    fn indicator(&self) -> IndicatorColor {
        (**self).indicator()
    }
}
