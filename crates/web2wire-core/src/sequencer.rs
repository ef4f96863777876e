//! Action Sequencer - non-blocking multi-phase indicator sequence
//!
//! The sequencer walks through a fixed table of colored phases, each shown
//! for the same dwell time. It never waits on its own: the owner calls
//! [`ActionSequencer::poll`] from the superloop and the sequencer advances
//! at most one phase per call. When the last phase has elapsed the
//! indicator is returned to the color it showed before the run.

use embassy_time::{Duration, Instant};

use crate::indicator::{Indicator, IndicatorColor};

/// Dwell time of a single phase
pub const BLINK_DURATION: Duration = Duration::from_millis(1000);

/// A single step of the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    /// Color shown while this phase is active
    pub color: IndicatorColor,
}

impl Phase {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            color: IndicatorColor::new(r, g, b),
        }
    }
}

/// Default phase table: red, orange, yellow, green, blue
pub const BLINK_PHASES: [Phase; 5] = [
    Phase::new(255, 0, 0),
    Phase::new(255, 165, 0),
    Phase::new(255, 255, 0),
    Phase::new(0, 255, 0),
    Phase::new(0, 0, 255),
];

/// Observable sequencer state
///
/// `Completed` is transient: the sequencer passes through it inside the
/// poll that finishes the last phase and settles in `Idle` before
/// returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    Idle,
    Phase { index: usize },
    Completed,
}

/// Outcome of a single [`ActionSequencer::poll`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    /// Nothing changed
    None,
    /// Sequence moved to the phase with this index
    PhaseAdvanced(usize),
    /// Last phase elapsed, the indicator was restored
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerError {
    /// A sequence is already running
    NotIdle,
    /// Phase table has no entries
    EmptyPhaseTable,
}

pub struct ActionSequencer {
    phases: &'static [Phase],
    dwell: Duration,
    state: SequencerState,
    phase_started_at: Instant,
    previous_indicator: IndicatorColor,
}

impl Default for ActionSequencer {
    fn default() -> Self {
        Self {
            phases: &BLINK_PHASES,
            dwell: BLINK_DURATION,
            state: SequencerState::Idle,
            phase_started_at: Instant::from_ticks(0),
            previous_indicator: crate::indicator::OFF,
        }
    }
}

impl ActionSequencer {
    /// Create a sequencer over a custom phase table
    pub fn try_new(
        phases: &'static [Phase],
        dwell: Duration,
    ) -> Result<Self, SequencerError> {
        if phases.is_empty() {
            return Err(SequencerError::EmptyPhaseTable);
        }

        Ok(Self {
            phases,
            dwell,
            ..Self::default()
        })
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == SequencerState::Idle
    }

    pub fn phase_count(&self) -> usize {
        self.phases.len()
    }

    /// Wall time of a full run, ignoring polling jitter
    pub fn total_duration(&self) -> Duration {
        self.dwell * self.phases.len() as u32
    }

    /// Begin a run at `now`
    ///
    /// Remembers the indicator color so it can be restored on completion,
    /// then shows the first phase.
    pub fn start(
        &mut self,
        now: Instant,
        indicator: &mut impl Indicator,
    ) -> Result<(), SequencerError> {
        if !self.is_idle() {
            return Err(SequencerError::NotIdle);
        }
        let Some(first) = self.phases.first() else {
            return Err(SequencerError::EmptyPhaseTable);
        };

        self.previous_indicator = indicator.indicator();
        indicator.set_indicator(first.color);
        self.phase_started_at = now;
        self.state = SequencerState::Phase { index: 0 };

        Ok(())
    }

    /// Advance the sequence if the current phase has elapsed
    ///
    /// A clock that went backwards counts as zero elapsed time.
    pub fn poll(
        &mut self,
        now: Instant,
        indicator: &mut impl Indicator,
    ) -> SequencerEvent {
        let SequencerState::Phase { index } = self.state else {
            return SequencerEvent::None;
        };

        if now.saturating_duration_since(self.phase_started_at) < self.dwell {
            return SequencerEvent::None;
        }

        self.phase_started_at = now;
        let next = index + 1;
        if let Some(phase) = self.phases.get(next) {
            indicator.set_indicator(phase.color);
            self.state = SequencerState::Phase { index: next };
            return SequencerEvent::PhaseAdvanced(next);
        }

        self.state = SequencerState::Completed;
        indicator.set_indicator(self.previous_indicator);
        self.state = SequencerState::Idle;

        SequencerEvent::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Led(IndicatorColor);

    impl Indicator for Led {
        fn set_indicator(&mut self, color: IndicatorColor) {
            self.0 = color;
        }

        fn indicator(&self) -> IndicatorColor {
            self.0
        }
    }

    #[test]
    fn empty_table_is_rejected() {
        assert_eq!(
            ActionSequencer::try_new(&[], BLINK_DURATION).err(),
            Some(SequencerError::EmptyPhaseTable)
        );
    }

    #[test]
    fn total_duration_covers_every_phase() {
        let sequencer = ActionSequencer::default();
        assert_eq!(sequencer.total_duration(), Duration::from_millis(5000));
    }

    #[test]
    fn backwards_clock_does_not_advance() {
        let mut led = Led(crate::indicator::OFF);
        let mut sequencer = ActionSequencer::default();
        sequencer
            .start(Instant::from_millis(10_000), &mut led)
            .unwrap();

        let event = sequencer.poll(Instant::from_millis(5_000), &mut led);

        assert_eq!(event, SequencerEvent::None);
        assert_eq!(sequencer.state(), SequencerState::Phase { index: 0 });
    }
}
