//! Fixed-interval housekeeping timer for a polling loop

use embassy_time::{Duration, Instant};

pub struct Interval {
    period: Duration,
    last: Option<Instant>,
}

impl Interval {
    pub const fn new(period: Duration) -> Self {
        Self { period, last: None }
    }

    /// Returns `true` once per elapsed period
    ///
    /// The first call is always due.
    pub fn is_due(&mut self, now: Instant) -> bool {
        let due = match self.last {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.period,
        };
        if due {
            self.last = Some(now);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_period() {
        let mut interval = Interval::new(Duration::from_secs(5));

        assert!(interval.is_due(Instant::from_secs(0)));
        assert!(!interval.is_due(Instant::from_millis(4_999)));
        assert!(interval.is_due(Instant::from_secs(5)));
        assert!(!interval.is_due(Instant::from_secs(6)));
    }
}
