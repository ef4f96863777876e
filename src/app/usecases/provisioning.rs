use web2wire_core::credentials::WifiCredentials;

use crate::domain::ports::{
    CredentialsWriter,
    ProvisioningError,
    ProvisioningUsecasesPort,
    SystemController,
};

pub struct ProvisioningUsecases<C: CredentialsWriter, S: SystemController> {
    credentials: C,
    system: S,
}

impl<C: CredentialsWriter, S: SystemController> ProvisioningUsecases<C, S> {
    pub fn new(credentials: C, system: S) -> Self {
        Self {
            credentials,
            system,
        }
    }
}

impl<C: CredentialsWriter, S: SystemController> ProvisioningUsecasesPort
    for ProvisioningUsecases<C, S>
{
    fn save_credentials(
        &mut self,
        encoded: &str,
    ) -> Result<WifiCredentials, ProvisioningError> {
        let credentials = WifiCredentials::from_form(encoded)?;
        self.credentials.write_credentials(&credentials).map_err(|e| {
            #[cfg(feature = "log")]
            esp_println::println!("provisioning: error saving credentials: {:?}", e);

            ProvisioningError::Storage(e)
        })?;

        #[cfg(feature = "log")]
        esp_println::println!(
            "provisioning: saved credentials for '{}'",
            credentials.ssid
        );

        Ok(credentials)
    }

    fn restart(&self) -> ! {
        self.system.restart()
    }
}

unsafe impl<C: CredentialsWriter, S: SystemController> Send
    for ProvisioningUsecases<C, S>
{
}
unsafe impl<C: CredentialsWriter, S: SystemController> Sync
    for ProvisioningUsecases<C, S>
{
}
