//! Completion notifier port

use crate::job::JobData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyError {
    /// Network is not usable, the report is dropped
    LinkDown,
    /// Report queue is full, the report is dropped
    QueueFull,
}

/// Receives the job that just finished its sequence
///
/// Implementations must not block. Delivery is best effort.
pub trait CompletionNotifier {
    fn notify(&mut self, job: &JobData) -> Result<(), NotifyError>;
}

impl<N: CompletionNotifier + ?Sized> CompletionNotifier for &mut N {
    fn notify(&mut self, job: &JobData) -> Result<(), NotifyError> {
        (**self).notify(job)
    }
}
