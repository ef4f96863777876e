use embassy_time::Instant;
use web2wire_core::{
    CompletionNotifier,
    Frame,
    Indicator,
    IndicatorColor,
    IntakeOutcome,
    JobContext,
    PayloadFormat,
};

use crate::domain::{
    dto::JobStatus,
    ports::{
        JobRunner,
        JobStatusReader,
        JobSubmitter,
        JobUsecasesPort,
        LinkStatusReader,
    },
};

pub struct JobUsecases<I, N, L>
where
    I: Indicator,
    N: CompletionNotifier,
    L: LinkStatusReader,
{
    context: JobContext,
    indicator: I,
    notifier: N,
    link: L,
}

impl<I, N, L> JobUsecases<I, N, L>
where
    I: Indicator,
    N: CompletionNotifier,
    L: LinkStatusReader,
{
    pub fn new(indicator: I, notifier: N, link: L) -> Self {
        Self {
            context: JobContext::default(),
            indicator,
            notifier,
            link,
        }
    }
}

impl<I, N, L> JobSubmitter for JobUsecases<I, N, L>
where
    I: Indicator,
    N: CompletionNotifier,
    L: LinkStatusReader,
{
    fn submit_job(&mut self, body: &[u8], format: PayloadFormat) -> IntakeOutcome {
        let outcome =
            self.context
                .submit(body, format, Instant::now(), &mut self.indicator);

        #[cfg(feature = "log")]
        log_outcome(&self.context, outcome);

        outcome
    }
}

impl<I, N, L> JobStatusReader for JobUsecases<I, N, L>
where
    I: Indicator,
    N: CompletionNotifier,
    L: LinkStatusReader,
{
    fn job_status(&self) -> JobStatus {
        JobStatus::new(self.context.state(), self.link.is_link_usable())
    }
}

impl<I, N, L> JobRunner for JobUsecases<I, N, L>
where
    I: Indicator,
    N: CompletionNotifier,
    L: LinkStatusReader,
{
    fn run_sequence(&mut self) {
        self.context
            .poll(Instant::now(), &mut self.indicator, &mut self.notifier);
    }

    fn show_idle_indicator(&mut self, color: IndicatorColor) {
        if self.context.is_idle() && self.indicator.indicator() != color {
            self.indicator.set_indicator(color);
        }
    }

    fn take_frame(&mut self) -> Option<Frame> {
        self.context.take_frame()
    }
}

impl<I, N, L> JobUsecasesPort for JobUsecases<I, N, L>
where
    I: Indicator,
    N: CompletionNotifier,
    L: LinkStatusReader,
{
}

#[cfg(feature = "log")]
fn log_outcome(context: &JobContext, outcome: IntakeOutcome) {
    match outcome {
        IntakeOutcome::Accepted => {
            let job = context.job();
            esp_println::println!(
                "job: accepted '{}' from '{}' ({})",
                job.name,
                job.origin,
                job.country_code
            );
        }
        IntakeOutcome::Rejected(e) => {
            esp_println::println!("job: rejected: {:?}", e);
        }
    }
}

unsafe impl<I, N, L> Send for JobUsecases<I, N, L>
where
    I: Indicator,
    N: CompletionNotifier,
    L: LinkStatusReader,
{
}
unsafe impl<I, N, L> Sync for JobUsecases<I, N, L>
where
    I: Indicator,
    N: CompletionNotifier,
    L: LinkStatusReader,
{
}
