use crate::{
    app::{ConnectivityUsecases, JobUsecases, ProvisioningUsecases},
    infrastructure::{
        repositories::CredentialRepository,
        services::{
            CompletionNotifierService,
            IndicatorService,
            LinkService,
            LinkStatusService,
            SystemService,
        },
    },
};

pub type JobUsecasesImpl =
    JobUsecases<IndicatorService, CompletionNotifierService, LinkStatusService>;
pub type ConnectivityUsecasesImpl = ConnectivityUsecases<LinkService>;
pub type ProvisioningUsecasesImpl =
    ProvisioningUsecases<CredentialRepository, SystemService>;
