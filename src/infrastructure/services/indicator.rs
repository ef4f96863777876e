use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use web2wire_core::{Indicator, IndicatorColor, indicator::OFF};

/// Latest color requested for the status light
static INDICATOR_SIGNAL: Signal<CriticalSectionRawMutex, IndicatorColor> = Signal::new();

/// Status light as seen by the loop
///
/// Caches the last color so reads never touch the LED. Writes are handed to
/// the indicator task, only the newest pending color is kept.
#[derive(Debug)]
pub struct IndicatorService {
    color: IndicatorColor,
}

impl IndicatorService {
    pub fn new() -> Self {
        Self { color: OFF }
    }
}

impl Default for IndicatorService {
    fn default() -> Self {
        Self::new()
    }
}

impl Indicator for IndicatorService {
    fn set_indicator(&mut self, color: IndicatorColor) {
        self.color = color;
        INDICATOR_SIGNAL.signal(color);
    }

    fn indicator(&self) -> IndicatorColor {
        self.color
    }
}

/// Wait for the next color to show
pub(crate) async fn wait_indicator_color() -> IndicatorColor {
    INDICATOR_SIGNAL.wait().await
}
