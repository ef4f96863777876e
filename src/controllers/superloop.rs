use embassy_time::{Duration, Instant, Timer};
use embedded_graphics::{pixelcolor::Rgb565, prelude::DrawTarget};
#[cfg(feature = "log")]
use esp_println::println;
use web2wire_core::{display, schedule::Interval};

use super::dependencies::with_job_usecases;
use crate::domain::types::ConnectivityUsecasesPortRef;

/// Period of the cooperative loop
pub const LOOP_TICK: Duration = Duration::from_millis(10);
/// Period of the connectivity check
pub const HOUSEKEEPING_INTERVAL: Duration = Duration::from_secs(1);
/// Period of the status log line
pub const STATUS_INTERVAL: Duration = Duration::from_secs(5);

/// Application main loop
///
/// Drives the sequencer, keeps the link alive and redraws the screen. The
/// job usecases are only locked for the duration of each call.
pub struct SuperloopController<D> {
    display: D,
    connectivity: ConnectivityUsecasesPortRef,
    housekeeping: Interval,
    #[cfg_attr(not(feature = "log"), allow(dead_code))]
    status: Interval,
}

impl<D> SuperloopController<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(display: D, connectivity: ConnectivityUsecasesPortRef) -> Self {
        Self {
            display,
            connectivity,
            housekeeping: Interval::new(HOUSEKEEPING_INTERVAL),
            status: Interval::new(STATUS_INTERVAL),
        }
    }

    pub async fn run(mut self) -> ! {
        loop {
            self.tick(Instant::now());
            Timer::after(LOOP_TICK).await;
        }
    }

    fn tick(&mut self, now: Instant) {
        with_job_usecases(|usecases| usecases.run_sequence());

        if self.housekeeping.is_due(now) {
            self.connectivity.maintain();
        }
        #[cfg(feature = "log")]
        if self.status.is_due(now) {
            self.report_status(now);
        }

        let color = self.connectivity.indicator_color();
        let frame = with_job_usecases(|usecases| {
            usecases.show_idle_indicator(color);
            usecases.take_frame()
        })
        .flatten();

        if let Some(frame) = frame {
            if display::render_job(&mut self.display, &frame).is_err() {
                #[cfg(feature = "log")]
                println!("superloop: display write failed");
            }
        }
    }

    #[cfg(feature = "log")]
    fn report_status(&self, now: Instant) {
        let status = with_job_usecases(|usecases| usecases.job_status());
        println!(
            "status: link={} ip={:?} port={} uptime={}s job={:?}",
            self.connectivity.state().as_str(),
            self.connectivity.address(),
            crate::infrastructure::config::HTTP.port,
            now.as_secs(),
            status.map(|status| status.state),
        );
    }
}
