//! Integration tests for the connectivity state machine.

use embassy_time::{Duration, Instant};
use web2wire_core::connectivity::{
    CONNECTED_COLOR, CONNECTING_COLOR, ConnectivityManager, ConnectivityState,
    DISCONNECTED_COLOR, LinkAction, PROVISIONING_COLOR,
};

fn at(secs: u64) -> Instant {
    Instant::from_secs(secs)
}

fn connected_at(secs: u64) -> ConnectivityManager {
    let mut manager = ConnectivityManager::new(true, at(0));
    assert_eq!(manager.maintain(at(secs), true), None);
    manager
}

// -----------------------------------------------------------------------------
// Test 1: Boot
// -----------------------------------------------------------------------------

#[test]
fn no_credentials_means_provisioning() {
    let mut manager = ConnectivityManager::new(false, at(0));

    assert_eq!(manager.state(), ConnectivityState::Provisioning);
    assert_eq!(manager.indicator_color(), PROVISIONING_COLOR);
    assert_eq!(manager.maintain(at(100), true), None);
    assert!(!manager.is_link_usable());
}

#[test]
fn link_up_while_connecting_means_connected() {
    let manager = connected_at(3);

    assert_eq!(manager.state(), ConnectivityState::Connected);
    assert!(manager.is_link_usable());
    assert_eq!(manager.indicator_color(), CONNECTED_COLOR);
}

#[test]
fn join_timeout_falls_back_to_provisioning() {
    let mut manager = ConnectivityManager::new(true, at(0));
    assert_eq!(manager.indicator_color(), CONNECTING_COLOR);

    assert_eq!(manager.maintain(at(29), false), None);
    assert_eq!(
        manager.maintain(at(30), false),
        Some(LinkAction::StartProvisioning)
    );
    assert_eq!(manager.state(), ConnectivityState::Provisioning);
    assert_eq!(manager.maintain(at(31), true), None);
}

#[test]
fn custom_timing_is_respected() {
    let mut manager = ConnectivityManager::new(true, at(0))
        .with_timing(Duration::from_secs(5), Duration::from_secs(1));

    assert_eq!(
        manager.maintain(at(5), false),
        Some(LinkAction::StartProvisioning)
    );
}

// -----------------------------------------------------------------------------
// Test 2: Link loss and reconnect cooldown
// -----------------------------------------------------------------------------

#[test]
fn link_loss_requests_reconnect() {
    let mut manager = connected_at(2);

    assert_eq!(manager.maintain(at(60), false), Some(LinkAction::Reconnect));
    assert_eq!(manager.state(), ConnectivityState::Disconnected);
    assert_eq!(manager.indicator_color(), DISCONNECTED_COLOR);
    assert!(!manager.is_link_usable());
}

#[test]
fn reconnects_are_spaced_by_cooldown() {
    let mut manager = connected_at(2);
    assert_eq!(manager.maintain(at(60), false), Some(LinkAction::Reconnect));

    assert_eq!(manager.maintain(at(65), false), None);
    assert_eq!(manager.maintain(at(69), false), None);
    assert_eq!(manager.maintain(at(70), false), Some(LinkAction::Reconnect));
}

#[test]
fn link_loss_right_after_boot_waits_for_cooldown() {
    let mut manager = connected_at(1);

    assert_eq!(manager.maintain(at(4), false), None);
    assert_eq!(manager.state(), ConnectivityState::Disconnected);
    assert_eq!(manager.maintain(at(10), false), Some(LinkAction::Reconnect));
}

#[test]
fn recovered_link_is_usable_again() {
    let mut manager = connected_at(2);
    manager.maintain(at(60), false);

    assert_eq!(manager.maintain(at(62), true), None);
    assert_eq!(manager.state(), ConnectivityState::Connected);
    assert!(manager.is_link_usable());
}

#[test]
fn provisioning_is_terminal() {
    let mut manager = connected_at(2);
    manager.enter_provisioning(at(3));

    assert_eq!(manager.maintain(at(100), true), None);
    assert_eq!(manager.state(), ConnectivityState::Provisioning);
}
