//! Connectivity state machine
//!
//! Tracks whether the station link is usable and decides when to retry.
//! The manager never touches the radio itself: it answers
//! [`ConnectivityManager::maintain`] with a [`LinkAction`] and the caller
//! carries it out.
//!
//! ```text
//!           credentials            link up
//! (boot) ──────────────> Connecting ───────> Connected
//!    │                       │                 │   ▲
//!    │ none         timeout  │       link lost │   │ link up
//!    ▼                       ▼                 ▼   │
//! Provisioning <──────────────           Disconnected (retry after cooldown)
//! ```

use embassy_time::{Duration, Instant};

use crate::indicator::{self, IndicatorColor};

/// Time allowed for the first join before falling back to provisioning
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
/// Minimum gap between two reconnect attempts
pub const RECONNECT_COOLDOWN: Duration = Duration::from_secs(10);
/// Poll period of the boot-time join loop
pub const CONNECT_POLL_INTERVAL: Duration = Duration::from_millis(500);

pub const PROVISIONING_COLOR: IndicatorColor = IndicatorColor::new(0, 50, 50);
pub const CONNECTING_COLOR: IndicatorColor = IndicatorColor::new(50, 50, 0);
pub const CONNECTED_COLOR: IndicatorColor = indicator::OFF;
pub const DISCONNECTED_COLOR: IndicatorColor = IndicatorColor::new(20, 0, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityState {
    /// Access point with the setup portal is up
    Provisioning,
    /// Joining the stored network
    Connecting,
    /// Link up with an address
    Connected,
    /// Link was lost after being connected
    Disconnected,
}

impl ConnectivityState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Provisioning => "provisioning",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
        }
    }
}

/// Work requested from the radio owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction {
    /// Try to join the stored network again
    Reconnect,
    /// Give up on the stored network and start the setup portal
    StartProvisioning,
}

pub struct ConnectivityManager {
    state: ConnectivityState,
    entered_at: Instant,
    last_reconnect_at: Instant,
    connect_timeout: Duration,
    reconnect_cooldown: Duration,
}

impl ConnectivityManager {
    /// Start in `Connecting` when credentials are stored, else in
    /// `Provisioning`
    pub fn new(has_credentials: bool, now: Instant) -> Self {
        let state = if has_credentials {
            ConnectivityState::Connecting
        } else {
            ConnectivityState::Provisioning
        };

        Self {
            state,
            entered_at: now,
            last_reconnect_at: now,
            connect_timeout: CONNECT_TIMEOUT,
            reconnect_cooldown: RECONNECT_COOLDOWN,
        }
    }

    #[must_use]
    pub fn with_timing(
        mut self,
        connect_timeout: Duration,
        reconnect_cooldown: Duration,
    ) -> Self {
        self.connect_timeout = connect_timeout;
        self.reconnect_cooldown = reconnect_cooldown;
        self
    }

    pub fn state(&self) -> ConnectivityState {
        self.state
    }

    /// Outbound traffic is only attempted while connected
    pub fn is_link_usable(&self) -> bool {
        self.state == ConnectivityState::Connected
    }

    /// Idle color of the status indicator for the current state
    pub fn indicator_color(&self) -> IndicatorColor {
        match self.state {
            ConnectivityState::Provisioning => PROVISIONING_COLOR,
            ConnectivityState::Connecting => CONNECTING_COLOR,
            ConnectivityState::Connected => CONNECTED_COLOR,
            ConnectivityState::Disconnected => DISCONNECTED_COLOR,
        }
    }

    /// Switch to the setup portal, this state is never left
    pub fn enter_provisioning(&mut self, now: Instant) {
        self.transition(ConnectivityState::Provisioning, now);
    }

    /// Feed the current link status and get the next action, if any
    pub fn maintain(
        &mut self,
        now: Instant,
        link_up: bool,
    ) -> Option<LinkAction> {
        match self.state {
            ConnectivityState::Provisioning => None,
            ConnectivityState::Connecting => {
                if link_up {
                    self.transition(ConnectivityState::Connected, now);
                    None
                } else if now.saturating_duration_since(self.entered_at)
                    >= self.connect_timeout
                {
                    self.transition(ConnectivityState::Provisioning, now);
                    Some(LinkAction::StartProvisioning)
                } else {
                    None
                }
            }
            ConnectivityState::Connected => {
                if link_up {
                    return None;
                }
                self.transition(ConnectivityState::Disconnected, now);
                self.try_reconnect(now)
            }
            ConnectivityState::Disconnected => {
                if link_up {
                    self.transition(ConnectivityState::Connected, now);
                    None
                } else {
                    self.try_reconnect(now)
                }
            }
        }
    }

    fn try_reconnect(&mut self, now: Instant) -> Option<LinkAction> {
        if now.saturating_duration_since(self.last_reconnect_at)
            < self.reconnect_cooldown
        {
            return None;
        }
        self.last_reconnect_at = now;
        Some(LinkAction::Reconnect)
    }

    fn transition(&mut self, state: ConnectivityState, now: Instant) {
        if self.state != state {
            log::info!(
                "connectivity: {} -> {}",
                self.state.as_str(),
                state.as_str()
            );
        }
        self.state = state;
        self.entered_at = now;
    }
}
