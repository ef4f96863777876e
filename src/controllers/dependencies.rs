use core::cell::RefCell;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex as AsyncMutex;

use crate::domain::{
    ports::{JobUsecasesPort, ProvisioningUsecasesPort},
    types::{JobUsecasesPortRef, ProvisioningUsecasesPortRef},
};

pub(crate) static JOB_USECASES: Mutex<
    CriticalSectionRawMutex,
    RefCell<Option<JobUsecasesPortRef>>,
> = Mutex::new(RefCell::new(None));

/// Held across flash erase and write, so interrupts must stay enabled
pub(crate) static PROVISIONING_USECASES: AsyncMutex<
    CriticalSectionRawMutex,
    Option<ProvisioningUsecasesPortRef>,
> = AsyncMutex::new(None);

/// Run `op` on the job usecases, `None` before they are installed
pub(crate) fn with_job_usecases<R>(
    op: impl FnOnce(&mut dyn JobUsecasesPort) -> R,
) -> Option<R> {
    JOB_USECASES.lock(|cell| {
        let mut usecases = cell.borrow_mut();
        let usecases = usecases.as_mut()?;
        Some(op(&mut **usecases))
    })
}

/// Run `op` on the provisioning usecases, `None` before they are installed
pub(crate) async fn with_provisioning_usecases<R>(
    op: impl FnOnce(&mut dyn ProvisioningUsecasesPort) -> R,
) -> Option<R> {
    let mut usecases = PROVISIONING_USECASES.lock().await;
    let usecases = usecases.as_mut()?;
    Some(op(&mut **usecases))
}
