pub(crate) mod dependencies;
pub mod job;
pub mod portal;
pub mod superloop;

use dependencies::{JOB_USECASES, PROVISIONING_USECASES};
use job::JobHttpController;
use portal::PortalHttpController;

use crate::domain::types::{JobUsecasesPortRef, ProvisioningUsecasesPortRef};

/// Install the job usecases and build the job API controller
pub fn init_job_controllers(usecases: JobUsecasesPortRef) -> JobHttpController {
    JOB_USECASES.lock(|cell| {
        cell.borrow_mut().replace(usecases);
    });

    JobHttpController
}

/// Install the provisioning usecases and build the portal controller
pub async fn init_portal_controllers(
    usecases: ProvisioningUsecasesPortRef,
) -> PortalHttpController {
    PROVISIONING_USECASES.lock().await.replace(usecases);

    PortalHttpController
}
