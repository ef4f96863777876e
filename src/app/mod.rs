//! Application layer - usecases generic over the domain ports

mod usecases;

pub use usecases::{ConnectivityUsecases, JobUsecases, ProvisioningUsecases};
