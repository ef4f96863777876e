mod connectivity;
mod job;
mod provisioning;

pub use connectivity::ConnectivityUsecases;
pub use job::JobUsecases;
pub use provisioning::ProvisioningUsecases;
