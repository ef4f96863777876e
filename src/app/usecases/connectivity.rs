use core::net::Ipv4Addr;

use embassy_time::Instant;
use web2wire_core::{
    IndicatorColor,
    connectivity::{ConnectivityManager, ConnectivityState, LinkAction},
};

use crate::domain::ports::{ConnectivityUsecasesPort, LinkHandler};

pub struct ConnectivityUsecases<L: LinkHandler> {
    manager: ConnectivityManager,
    link: L,
}

impl<L: LinkHandler> ConnectivityUsecases<L> {
    /// Take over the manager that drove the boot-time join
    pub fn new(manager: ConnectivityManager, link: L) -> Self {
        link.set_link_usable(manager.is_link_usable());
        Self { manager, link }
    }
}

impl<L: LinkHandler> ConnectivityUsecasesPort for ConnectivityUsecases<L> {
    fn maintain(&mut self) {
        let action = self.manager.maintain(Instant::now(), self.link.is_link_up());
        self.link.set_link_usable(self.manager.is_link_usable());

        match action {
            Some(LinkAction::Reconnect) => self.link.request_reconnect(),
            // The portal is only entered during boot
            Some(LinkAction::StartProvisioning) => {
                #[cfg(feature = "log")]
                esp_println::println!(
                    "connectivity: provisioning requested after boot, ignored"
                );
            }
            None => {}
        }
    }

    fn state(&self) -> ConnectivityState {
        self.manager.state()
    }

    fn address(&self) -> Option<Ipv4Addr> {
        self.link.address()
    }

    fn indicator_color(&self) -> IndicatorColor {
        self.manager.indicator_color()
    }
}

unsafe impl<L: LinkHandler> Send for ConnectivityUsecases<L> {}
unsafe impl<L: LinkHandler> Sync for ConnectivityUsecases<L> {}
