use web2wire_core::{Frame, IndicatorColor, IntakeOutcome, PayloadFormat};

use crate::domain::dto::JobStatus;

/// Intake interface for job requests
pub trait JobSubmitter {
    /// Try to start a job from a raw request body
    fn submit_job(&mut self, body: &[u8], format: PayloadFormat) -> IntakeOutcome;
}

/// Reader interface for the job state
pub trait JobStatusReader {
    fn job_status(&self) -> JobStatus;
}

/// Interface driven by the superloop
pub trait JobRunner {
    /// Advance the running sequence, if any
    fn run_sequence(&mut self);

    /// Show the connectivity color while no sequence is running
    fn show_idle_indicator(&mut self, color: IndicatorColor);

    /// Next frame to draw, if any
    fn take_frame(&mut self) -> Option<Frame>;
}

/// Port interface for the job usecases
pub trait JobUsecasesPort:
    JobSubmitter + JobStatusReader + JobRunner + Sync + Send
{
}
