use esp_storage::FlashStorage;
#[cfg(feature = "log")]
use esp_println::println;
use web2wire_core::{
    credentials::{CREDENTIALS_RECORD_SIZE, CREDENTIALS_STORAGE_SIZE, WifiCredentials},
    storage::{NorFlashDriver, PersistentStorage, StorageError},
};

use crate::domain::ports::{CredentialsReader, CredentialsWriter};

type CredentialsStorage =
    PersistentStorage<NorFlashDriver<FlashStorage<'static>>, CREDENTIALS_STORAGE_SIZE>;

/// Wi-Fi credentials record in its own flash partition
pub struct CredentialRepository {
    storage: CredentialsStorage,
}

impl CredentialRepository {
    /// Create a repository over the partition starting at `offset`
    pub fn new(flash: FlashStorage<'static>, offset: u32) -> Self {
        Self {
            storage: PersistentStorage::new(NorFlashDriver::new(flash, offset)),
        }
    }
}

impl CredentialsReader for CredentialRepository {
    fn read_credentials(&mut self) -> Option<WifiCredentials> {
        match self
            .storage
            .load::<CREDENTIALS_RECORD_SIZE, WifiCredentials>()
        {
            Ok(credentials) => Some(credentials),
            // Blank partition
            Err(StorageError::InvalidMagicHeader) => None,
            Err(_e) => {
                #[cfg(feature = "log")]
                println!("credentials: stored record is unusable: {:?}", _e);
                None
            }
        }
    }
}

impl CredentialsWriter for CredentialRepository {
    fn write_credentials(
        &mut self,
        credentials: &WifiCredentials,
    ) -> Result<(), StorageError> {
        self.storage
            .save::<CREDENTIALS_RECORD_SIZE, WifiCredentials>(credentials)
    }
}

// Safety: the repository is only reached through the provisioning usecases,
// which are locked by the controller for every request.
unsafe impl Send for CredentialRepository {}
unsafe impl Sync for CredentialRepository {}
