use crate::infrastructure::{drivers::EspLedDriver, services::wait_indicator_color};

/// Task writing the requested colors to the status light
#[embassy_executor::task]
pub async fn indicator_task(mut driver: EspLedDriver<'static>) {
    loop {
        let color = wait_indicator_color().await;
        driver.write(color);
    }
}
