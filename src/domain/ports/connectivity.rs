use core::net::Ipv4Addr;

use web2wire_core::{IndicatorColor, connectivity::ConnectivityState};

/// Reader interface for the application link status
pub trait LinkStatusReader {
    /// Whether the station link can carry traffic right now
    fn is_link_usable(&self) -> bool;
}

/// Interface to the Wi-Fi station link
pub trait LinkHandler: LinkStatusReader + Sync + Send {
    /// Raw link status as reported by the radio and the IP stack
    fn is_link_up(&self) -> bool;

    /// Address leased on the station network
    fn address(&self) -> Option<Ipv4Addr>;

    /// Publish the status seen by [`LinkStatusReader`]
    fn set_link_usable(&self, usable: bool);

    /// Ask the radio for one reconnect attempt
    fn request_reconnect(&self);
}

/// Port interface for the connectivity usecases
pub trait ConnectivityUsecasesPort: Sync + Send {
    /// Feed the link status to the state machine
    fn maintain(&mut self);

    fn state(&self) -> ConnectivityState;

    fn address(&self) -> Option<Ipv4Addr>;

    /// Color the indicator shows while idle
    fn indicator_color(&self) -> IndicatorColor;
}
