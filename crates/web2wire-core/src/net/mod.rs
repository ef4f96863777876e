//! Protocol codecs served on the provisioning access point

pub mod dhcp;
pub mod dns;
