use web2wire_core::{
    credentials::{CredentialsError, WifiCredentials},
    storage::StorageError,
};

/// Error type for saving credentials from the portal
#[derive(Debug)]
pub enum ProvisioningError {
    /// Submitted form is unusable
    Invalid(CredentialsError),
    /// Flash write failed
    Storage(StorageError),
}

impl From<CredentialsError> for ProvisioningError {
    fn from(error: CredentialsError) -> Self {
        ProvisioningError::Invalid(error)
    }
}

impl From<StorageError> for ProvisioningError {
    fn from(error: StorageError) -> Self {
        ProvisioningError::Storage(error)
    }
}

/// Reader interface for the stored credentials
pub trait CredentialsReader {
    /// Stored credentials, `None` when flash holds no valid record
    fn read_credentials(&mut self) -> Option<WifiCredentials>;
}

/// Writer interface for the stored credentials
pub trait CredentialsWriter {
    fn write_credentials(
        &mut self,
        credentials: &WifiCredentials,
    ) -> Result<(), StorageError>;
}

/// Port interface for the provisioning usecases
pub trait ProvisioningUsecasesPort: Sync + Send {
    /// Validate and persist credentials from an urlencoded form
    fn save_credentials(
        &mut self,
        encoded: &str,
    ) -> Result<WifiCredentials, ProvisioningError>;

    /// Restart into the freshly configured network
    fn restart(&self) -> !;
}
