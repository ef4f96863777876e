//! Job context - the state shared by intake, sequencer and display
//!
//! One instance lives for the whole program. HTTP handlers call
//! [`JobContext::submit`], the superloop calls [`JobContext::poll`] and
//! [`JobContext::take_frame`] on every tick.

use embassy_time::Instant;

use crate::{
    indicator::Indicator,
    intake::{self, IntakeError, IntakeOutcome, PayloadFormat},
    job::JobData,
    notifier::CompletionNotifier,
    sequencer::{ActionSequencer, SequencerEvent, SequencerState},
};

/// Everything the screen needs for one redraw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub job: JobData,
    pub state: SequencerState,
}

impl Frame {
    pub fn is_processing(&self) -> bool {
        matches!(self.state, SequencerState::Phase { .. })
    }
}

pub struct JobContext {
    job: JobData,
    sequencer: ActionSequencer,
    /// Screen no longer matches the context
    dirty: bool,
    /// Accepted job that has not been drawn yet
    start_frame_pending: bool,
}

impl Default for JobContext {
    fn default() -> Self {
        Self::new(ActionSequencer::default())
    }
}

impl JobContext {
    /// Create a context showing the awaiting placeholder
    pub fn new(sequencer: ActionSequencer) -> Self {
        Self {
            job: JobData::awaiting(),
            sequencer,
            dirty: true,
            start_frame_pending: false,
        }
    }

    pub fn job(&self) -> &JobData {
        &self.job
    }

    pub fn state(&self) -> SequencerState {
        self.sequencer.state()
    }

    pub fn is_idle(&self) -> bool {
        self.sequencer.is_idle()
    }

    pub fn sequencer(&self) -> &ActionSequencer {
        &self.sequencer
    }

    /// Admit a raw job request
    ///
    /// A busy context refuses without looking at the payload. Rejected
    /// requests leave the context untouched.
    pub fn submit(
        &mut self,
        raw: &[u8],
        format: PayloadFormat,
        now: Instant,
        indicator: &mut impl Indicator,
    ) -> IntakeOutcome {
        if !self.sequencer.is_idle() {
            return IntakeOutcome::Rejected(IntakeError::Busy);
        }

        match intake::parse_job_payload(raw, format) {
            Ok(job) => self.accept(job, now, indicator),
            Err(e) => IntakeOutcome::Rejected(e),
        }
    }

    /// Admit an already parsed job
    pub fn accept(
        &mut self,
        job: JobData,
        now: Instant,
        indicator: &mut impl Indicator,
    ) -> IntakeOutcome {
        if self.sequencer.start(now, indicator).is_err() {
            return IntakeOutcome::Rejected(IntakeError::Busy);
        }

        self.job = job;
        self.start_frame_pending = true;

        IntakeOutcome::Accepted
    }

    /// Drive the sequencer
    ///
    /// Completion is reported exactly once per accepted job. Notifier
    /// failures are logged and otherwise ignored.
    pub fn poll(
        &mut self,
        now: Instant,
        indicator: &mut impl Indicator,
        notifier: &mut impl CompletionNotifier,
    ) -> SequencerEvent {
        let event = self.sequencer.poll(now, indicator);

        if event == SequencerEvent::Completed {
            if let Err(e) = notifier.notify(&self.job) {
                log::warn!("context: completion report dropped: {:?}", e);
            }
            self.dirty = true;
        }

        event
    }

    /// Request a redraw
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Next frame to draw, if any
    ///
    /// An accepted job is drawn right away. Otherwise the screen is only
    /// redrawn while idle and after something changed.
    pub fn take_frame(&mut self) -> Option<Frame> {
        let state = self.sequencer.state();

        if self.start_frame_pending {
            self.start_frame_pending = false;
            if state == SequencerState::Idle {
                self.dirty = false;
            }
            return Some(self.frame(state));
        }

        if self.dirty && state == SequencerState::Idle {
            self.dirty = false;
            return Some(self.frame(state));
        }

        None
    }

    fn frame(&self, state: SequencerState) -> Frame {
        Frame {
            job: self.job.clone(),
            state,
        }
    }
}
