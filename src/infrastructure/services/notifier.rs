use embassy_sync::{
    blocking_mutex::raw::CriticalSectionRawMutex,
    channel::{Channel, Receiver},
};
use web2wire_core::{CompletionNotifier, JobData, NotifyError};

use super::link::LinkStatusService;
use crate::domain::ports::LinkStatusReader;

const COMPLETION_CHANNEL_SIZE: usize = 2;

pub(crate) type CompletionReceiver =
    Receiver<'static, CriticalSectionRawMutex, JobData, COMPLETION_CHANNEL_SIZE>;

/// Finished jobs waiting to be reported
static COMPLETION_CHANNEL: Channel<CriticalSectionRawMutex, JobData, COMPLETION_CHANNEL_SIZE> =
    Channel::new();

/// Hands finished jobs to the report task without blocking the loop
#[derive(Debug, Default, Clone, Copy)]
pub struct CompletionNotifierService {
    link: LinkStatusService,
}

impl CompletionNotifierService {
    pub fn new() -> Self {
        Self {
            link: LinkStatusService,
        }
    }
}

impl CompletionNotifier for CompletionNotifierService {
    fn notify(&mut self, job: &JobData) -> Result<(), NotifyError> {
        if !self.link.is_link_usable() {
            return Err(NotifyError::LinkDown);
        }

        COMPLETION_CHANNEL
            .try_send(job.clone())
            .map_err(|_| NotifyError::QueueFull)
    }
}

pub(crate) fn get_completion_receiver() -> CompletionReceiver {
    COMPLETION_CHANNEL.receiver()
}
