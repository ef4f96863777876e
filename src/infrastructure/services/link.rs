use core::{
    net::Ipv4Addr,
    sync::atomic::{AtomicBool, Ordering},
};

use embassy_net::Stack;
use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};

use crate::{
    domain::ports::{LinkHandler, LinkStatusReader},
    infrastructure::drivers::is_station_up,
};

/// Whether the station link is usable, as decided by the connectivity manager
static LINK_USABLE: AtomicBool = AtomicBool::new(false);

/// Reconnect requests for the task owning the radio
static RECONNECT_SIGNAL: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Read side of the link status, usable without a stack
#[derive(Debug, Default, Clone, Copy)]
pub struct LinkStatusService;

impl LinkStatusReader for LinkStatusService {
    fn is_link_usable(&self) -> bool {
        LINK_USABLE.load(Ordering::Relaxed)
    }
}

/// Station link backed by the network stack
#[derive(Clone, Copy)]
pub struct LinkService {
    stack: Stack<'static>,
}

impl LinkService {
    pub fn new(stack: Stack<'static>) -> Self {
        Self { stack }
    }
}

impl LinkStatusReader for LinkService {
    fn is_link_usable(&self) -> bool {
        LinkStatusService.is_link_usable()
    }
}

impl LinkHandler for LinkService {
    fn is_link_up(&self) -> bool {
        is_station_up(self.stack)
    }

    fn address(&self) -> Option<Ipv4Addr> {
        self.stack.config_v4().map(|config| config.address.address())
    }

    fn set_link_usable(&self, usable: bool) {
        LINK_USABLE.store(usable, Ordering::Relaxed);
    }

    fn request_reconnect(&self) {
        RECONNECT_SIGNAL.signal(());
    }
}

// Safety: `Stack` is a handle to the stack owned by the network runner,
// every access goes through its internal lock.
unsafe impl Send for LinkService {}
unsafe impl Sync for LinkService {}

/// Wait until the connectivity manager asks for a reconnect
pub(crate) async fn wait_reconnect_request() {
    RECONNECT_SIGNAL.wait().await;
}
