//! Wi-Fi credentials: provisioning form parsing and flash record

use bytemuck::{Pod, Zeroable};
use heapless::String;

use crate::{
    form::{self, FormError},
    storage::{Encodable, MAGIC_HEADER_SIZE},
};

pub const SSID_CAPACITY: usize = 32;
pub const PASSWORD_CAPACITY: usize = 64;

/// Tag identifying the credentials record
pub const NAMESPACE: &str = "assistant_cfg";
const NAMESPACE_CAPACITY: usize = 16;

pub const CREDENTIALS_RECORD_SIZE: usize = core::mem::size_of::<StoredCredentials>();
/// Flash slot size of the credentials record, header included
pub const CREDENTIALS_STORAGE_SIZE: usize = CREDENTIALS_RECORD_SIZE + MAGIC_HEADER_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiCredentials {
    pub ssid: String<SSID_CAPACITY>,
    pub password: String<PASSWORD_CAPACITY>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsError {
    /// SSID is absent or empty
    MissingSsid,
    /// SSID or password exceeds its capacity
    TooLong,
    /// Field cannot be decoded
    InvalidEncoding,
}

impl From<FormError> for CredentialsError {
    fn from(error: FormError) -> Self {
        match error {
            FormError::TooLong => Self::TooLong,
            FormError::InvalidEscape | FormError::InvalidUtf8 => {
                Self::InvalidEncoding
            }
        }
    }
}

impl WifiCredentials {
    pub fn new(ssid: &str, password: &str) -> Result<Self, CredentialsError> {
        if ssid.is_empty() {
            return Err(CredentialsError::MissingSsid);
        }

        Ok(Self {
            ssid: ssid.try_into().map_err(|()| CredentialsError::TooLong)?,
            password: password
                .try_into()
                .map_err(|()| CredentialsError::TooLong)?,
        })
    }

    /// Parse the `ssid` and `pass` fields of a submitted setup form
    ///
    /// The password may be empty for open networks.
    pub fn from_form(encoded: &str) -> Result<Self, CredentialsError> {
        let ssid: String<SSID_CAPACITY> = form::find_field(encoded, "ssid")?
            .ok_or(CredentialsError::MissingSsid)?;
        let password: String<PASSWORD_CAPACITY> =
            form::find_field(encoded, "pass")?.unwrap_or_default();

        Self::new(&ssid, &password)
    }
}

/// On-flash layout of [`WifiCredentials`]
#[derive(Debug, Clone, Copy, Zeroable, Pod)]
#[repr(C)]
pub struct StoredCredentials {
    namespace: [u8; NAMESPACE_CAPACITY],
    ssid: [u8; SSID_CAPACITY],
    password: [u8; PASSWORD_CAPACITY],
    ssid_len: u8,
    password_len: u8,
}

impl From<&WifiCredentials> for StoredCredentials {
    fn from(credentials: &WifiCredentials) -> Self {
        Self {
            namespace: padded(NAMESPACE),
            ssid: padded(&credentials.ssid),
            password: padded(&credentials.password),
            ssid_len: credentials.ssid.len() as u8,
            password_len: credentials.password.len() as u8,
        }
    }
}

impl TryFrom<&StoredCredentials> for WifiCredentials {
    type Error = CredentialsError;

    fn try_from(stored: &StoredCredentials) -> Result<Self, Self::Error> {
        let ssid = stored
            .ssid
            .get(..usize::from(stored.ssid_len))
            .ok_or(CredentialsError::TooLong)?;
        let password = stored
            .password
            .get(..usize::from(stored.password_len))
            .ok_or(CredentialsError::TooLong)?;

        Self::new(
            core::str::from_utf8(ssid)
                .map_err(|_| CredentialsError::InvalidEncoding)?,
            core::str::from_utf8(password)
                .map_err(|_| CredentialsError::InvalidEncoding)?,
        )
    }
}

impl Encodable<CREDENTIALS_RECORD_SIZE> for WifiCredentials {
    fn encode(&self) -> [u8; CREDENTIALS_RECORD_SIZE] {
        let stored = StoredCredentials::from(self);
        let mut out = [0u8; CREDENTIALS_RECORD_SIZE];
        out.copy_from_slice(bytemuck::bytes_of(&stored));
        out
    }

    fn decode(data: &[u8]) -> Option<Self> {
        let stored: StoredCredentials = bytemuck::try_pod_read_unaligned(data).ok()?;
        if stored.namespace != padded::<NAMESPACE_CAPACITY>(NAMESPACE) {
            return None;
        }
        Self::try_from(&stored).ok()
    }
}

fn padded<const N: usize>(value: &str) -> [u8; N] {
    let mut out = [0u8; N];
    let len = value.len().min(N);
    out[..len].copy_from_slice(&value.as_bytes()[..len]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_form_is_parsed() {
        let credentials =
            WifiCredentials::from_form("ssid=Lab+Net&pass=s%26cret").unwrap();

        assert_eq!(credentials.ssid.as_str(), "Lab Net");
        assert_eq!(credentials.password.as_str(), "s&cret");
    }

    #[test]
    fn empty_ssid_is_rejected() {
        assert_eq!(
            WifiCredentials::from_form("ssid=&pass=x"),
            Err(CredentialsError::MissingSsid)
        );
        assert_eq!(
            WifiCredentials::from_form("pass=x"),
            Err(CredentialsError::MissingSsid)
        );
    }

    #[test]
    fn open_network_has_empty_password() {
        let credentials = WifiCredentials::from_form("ssid=Cafe").unwrap();
        assert!(credentials.password.is_empty());
    }

    #[test]
    fn record_size_keeps_flash_alignment() {
        assert_eq!(CREDENTIALS_STORAGE_SIZE % 4, 0);
    }
}
