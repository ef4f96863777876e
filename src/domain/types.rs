use super::ports::{
    ConnectivityUsecasesPort,
    JobUsecasesPort,
    ProvisioningUsecasesPort,
};

/// Type alias for the job usecases port reference
pub type JobUsecasesPortRef = &'static mut dyn JobUsecasesPort;

/// Type alias for the connectivity usecases port reference
pub type ConnectivityUsecasesPortRef = &'static mut dyn ConnectivityUsecasesPort;

/// Type alias for the provisioning usecases port reference
pub type ProvisioningUsecasesPortRef = &'static mut dyn ProvisioningUsecasesPort;
