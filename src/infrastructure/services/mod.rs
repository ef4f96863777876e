mod indicator;
mod link;
mod notifier;
mod system;

pub(crate) use indicator::wait_indicator_color;
pub use indicator::IndicatorService;
pub(crate) use link::wait_reconnect_request;
pub use link::{LinkService, LinkStatusService};
pub(crate) use notifier::{CompletionReceiver, get_completion_receiver};
pub use notifier::CompletionNotifierService;
pub use system::SystemService;
