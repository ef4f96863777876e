use embassy_time::{Duration, Timer};
#[cfg(feature = "log")]
use esp_println::println;
use web2wire_core::{credentials::CredentialsError, storage::StorageError};

use super::page;
use crate::{
    config,
    controllers::dependencies::with_provisioning_usecases,
    domain::ports::ProvisioningError,
    net::http::{
        Error as HttpError,
        HttpConnection,
        HttpHandler,
        HttpMethod,
        HttpResult,
        ResponseHeaders,
    },
};

/// Delay between the success page and the reset
const RESTART_DELAY: Duration = Duration::from_secs(3);

/// Captive setup portal served on the access point
#[derive(Debug, Default)]
pub struct PortalHttpController;

impl HttpHandler for PortalHttpController {
    async fn handle_request(&self, conn: HttpConnection<'_>) -> HttpResult {
        let mut conn = conn;
        match conn.route() {
            (HttpMethod::Get, "/") => conn.write_html(200, page::CONFIG_PAGE).await,
            (HttpMethod::Get | HttpMethod::Post, "/save") => {
                handle_save(&mut conn).await
            }
            _ => redirect_to_portal(&mut conn).await,
        }
    }
}

async fn handle_save(conn: &mut HttpConnection<'_>) -> HttpResult {
    let result = if conn.method == HttpMethod::Post && conn.query.is_empty() {
        let body = conn.read_body().await?;
        let encoded = core::str::from_utf8(body).map_err(|_| HttpError::Parse)?;
        save(encoded).await
    } else {
        save(conn.query.as_str()).await
    };

    match result {
        Ok(()) => {
            conn.write_html(200, page::SAVED_PAGE).await?;
            #[cfg(feature = "log")]
            println!("portal: restarting in {} ms", RESTART_DELAY.as_millis());
            Timer::after(RESTART_DELAY).await;
            with_provisioning_usecases(|usecases| {
                usecases.restart();
            })
            .await;
            Ok(())
        }
        Err(ProvisioningError::Invalid(CredentialsError::MissingSsid)) => {
            conn.write_html(400, page::MISSING_SSID_PAGE).await
        }
        Err(ProvisioningError::Invalid(_)) => {
            conn.write_html(400, page::INVALID_INPUT_PAGE).await
        }
        Err(ProvisioningError::Storage(_)) => {
            conn.write_html(500, page::STORAGE_ERROR_PAGE).await
        }
    }
}

async fn save(encoded: &str) -> Result<(), ProvisioningError> {
    with_provisioning_usecases(|usecases| usecases.save_credentials(encoded))
        .await
        .ok_or(ProvisioningError::Storage(StorageError::DriverError))?
        .map(|_| ())
}

async fn redirect_to_portal(conn: &mut HttpConnection<'_>) -> HttpResult {
    conn.write_headers(&ResponseHeaders::found(config::PORTAL_URL))
        .await
}
